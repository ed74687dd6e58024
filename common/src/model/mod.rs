pub mod mapping;
pub mod market;
pub mod principal;
pub mod store;

pub use mapping::Mapping;
pub use market::{Market, MarketId};
pub use principal::{AuthContext, Principal, Role};
pub use store::Store;
