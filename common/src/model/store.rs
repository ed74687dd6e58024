use serde::{Deserialize, Serialize};

/// A retail store as listed by `GET /stores`.
///
/// `estation_name` is both the identifier and the display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub estation_name: String,
}
