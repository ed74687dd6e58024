use serde::{Deserialize, Serialize};

use crate::model::MarketId;

/// Payload of `POST /store-market-map`.
///
/// The backend upserts on `estation_name`, so re-saving a store replaces its
/// current market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMappingRequest {
    pub estation_name: String,
    pub market_id: MarketId,
}

/// Payload of `POST /store-market-map/delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteMappingRequest {
    pub store_name: String,
}
