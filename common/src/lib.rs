//! Shared core of the store-to-market mapping admin page.
//!
//! Everything in this crate is independent of the browser so it can be
//! exercised by native tests: the wire model, the credential claims parser,
//! the authentication gate, authenticated request options, the backend
//! contract, the mutation handlers and the table render model.

pub mod auth;
pub mod backend;
pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod mutations;
pub mod render;
pub mod requests;
