//! Contract of the REST backend this page talks to.
//!
//! The browser implementation lives in the frontend crate; tests use an
//! in-memory fake.

use crate::error::ApiError;
use crate::model::{Mapping, Market, Store};
use crate::requests::{CreateMappingRequest, DeleteMappingRequest};

pub const STORES_PATH: &str = "/stores";
pub const MARKETS_PATH: &str = "/markets";
pub const CURRENT_MAPPINGS_PATH: &str = "/store-market-map/current";
pub const CREATE_MAPPING_PATH: &str = "/store-market-map";
pub const DELETE_MAPPING_PATH: &str = "/store-market-map/delete";

#[allow(async_fn_in_trait)]
pub trait MappingBackend {
    async fn stores(&self) -> Result<Vec<Store>, ApiError>;

    async fn markets(&self) -> Result<Vec<Market>, ApiError>;

    /// The authoritative set of active mappings.
    async fn current_mappings(&self) -> Result<Vec<Mapping>, ApiError>;

    /// Upserts the mapping for `request.estation_name`.
    async fn create_mapping(&self, request: &CreateMappingRequest) -> Result<(), ApiError>;

    async fn delete_mapping(&self, request: &DeleteMappingRequest) -> Result<(), ApiError>;
}
