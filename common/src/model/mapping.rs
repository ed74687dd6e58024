use serde::{Deserialize, Deserializer, Serialize};

use crate::model::market::MarketId;

/// One active store-to-market mapping as returned by
/// `GET /store-market-map/current`.
///
/// `updated_at` stays in its wire form; parsing and localisation happen in
/// [`crate::render`] so a malformed timestamp never fails the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    pub estation_name: String,
    pub market_id: MarketId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub updated_by: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub updated_at: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_audit_fields_default_to_empty() {
        let mapping: Mapping =
            serde_json::from_str(r#"{"estation_name": "S1", "market_id": 3, "updated_by": null}"#)
                .unwrap();

        assert_eq!(mapping.market_id.as_str(), "3");
        assert!(mapping.updated_by.is_empty());
        assert!(mapping.updated_at.is_empty());
    }
}
