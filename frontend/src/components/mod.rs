pub mod login;
pub mod mapping;
