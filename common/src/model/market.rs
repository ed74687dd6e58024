use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a market.
///
/// The backend is not consistent about the JSON type of this field, so it is
/// accepted as either a string or an integer and always kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MarketId(String);

impl MarketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MarketId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for MarketId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Text(s) => MarketId(s),
            Wire::Signed(n) => MarketId(n.to_string()),
            Wire::Unsigned(n) => MarketId(n.to_string()),
        })
    }
}

/// A market as listed by `GET /markets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    pub market_id: MarketId,
    pub market_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_id_accepts_numbers_and_strings() {
        let markets: Vec<Market> = serde_json::from_str(
            r#"[{"market_id": 42, "market_name": "North"}, {"market_id": "M7", "market_name": "South"}]"#,
        )
        .unwrap();

        assert_eq!(markets[0].market_id.as_str(), "42");
        assert_eq!(markets[1].market_id.as_str(), "M7");
    }

    #[test]
    fn market_id_serializes_as_text() {
        let json = serde_json::to_string(&MarketId::new("42")).unwrap();
        assert_eq!(json, r#""42""#);
    }
}
