//! Typed reader for the claims segment of a bearer credential.
//!
//! The credential is a three-segment token (`header.claims.signature`). Only
//! the claims segment is decoded and nothing is verified: the result feeds
//! UI decisions only, the backend verifies the token itself.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ClaimDecodeError;
use crate::model::Role;

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// The claims this page reads. Unknown claims are ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CredentialClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Kept untyped so a non-string value degrades to the default role
    /// instead of failing the whole segment.
    #[serde(default)]
    pub role: Option<Value>,
}

impl CredentialClaims {
    pub fn parse(credential: &str) -> Result<Self, ClaimDecodeError> {
        let segments: Vec<&str> = credential.trim().split('.').collect();
        if segments.len() != 3 {
            return Err(ClaimDecodeError::SegmentCount(segments.len()));
        }

        let payload = URL_SAFE_LENIENT
            .decode(segments[1])
            .or_else(|_| STANDARD_LENIENT.decode(segments[1]))
            .map_err(|e| ClaimDecodeError::Base64(e.to_string()))?;

        // Struct derives also accept sequences, so the shape is checked first.
        match serde_json::from_slice::<Value>(&payload) {
            Ok(object @ Value::Object(_)) => {
                serde_json::from_value(object).map_err(|e| ClaimDecodeError::Json(e.to_string()))
            }
            Ok(other) => Err(ClaimDecodeError::Json(format!(
                "expected an object, found {}",
                json_kind(&other)
            ))),
            Err(e) => Err(ClaimDecodeError::Json(e.to_string())),
        }
    }

    /// `role` claim as a [`Role`]; absent or non-string claims are viewers.
    pub fn role(&self) -> Role {
        match &self.role {
            Some(Value::String(raw)) => Role::from_claim(raw),
            _ => Role::Viewer,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Reads the role from a credential, falling back to [`Role::Viewer`] when
/// the claims segment cannot be decoded.
pub fn resolve_role(credential: &str) -> Role {
    match CredentialClaims::parse(credential) {
        Ok(claims) => claims.role(),
        Err(e) => {
            log::warn!("could not read credential claims, using default role: {}", e);
            Role::default()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use serde_json::json;

    pub(crate) fn token_with(claims: &Value) -> String {
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).unwrap());
        format!("eyJhbGciOiJSUzI1NiJ9.{payload}.signature")
    }

    #[test]
    fn admin_claim_resolves_admin() {
        let token = token_with(&json!({"sub": "u1", "role": "admin"}));
        assert_eq!(resolve_role(&token), Role::Admin);
    }

    #[test]
    fn missing_role_claim_defaults_to_viewer() {
        let token = token_with(&json!({"sub": "u1", "email": "a@b.c"}));
        let claims = CredentialClaims::parse(&token).unwrap();

        assert_eq!(claims.email.as_deref(), Some("a@b.c"));
        assert_eq!(claims.role(), Role::Viewer);
    }

    #[test]
    fn non_string_role_defaults_to_viewer() {
        let token = token_with(&json!({"role": ["admin"]}));
        assert_eq!(resolve_role(&token), Role::Viewer);
    }

    #[test]
    fn padded_and_standard_alphabet_segments_are_accepted() {
        use base64::engine::general_purpose::STANDARD;
        let payload = STANDARD.encode(br#"{"role":"admin","n":"??>"}"#);
        assert!(payload.ends_with('='));

        let token = format!("h.{payload}.s");
        assert_eq!(resolve_role(&token), Role::Admin);
    }

    #[test]
    fn malformed_credentials_default_to_viewer() {
        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode(b"not json"));
        let array = format!("h.{}.s", URL_SAFE_NO_PAD.encode(b"[1,2]"));
        let positional = format!("h.{}.s", URL_SAFE_NO_PAD.encode(br#"[null,null,"admin"]"#));

        for token in [
            "",
            "only-one-segment",
            "a.b",
            "a.b.c.d",
            "h.***.s",
            not_json.as_str(),
            array.as_str(),
            positional.as_str(),
        ] {
            assert_eq!(resolve_role(token), Role::Viewer, "token {token:?}");
        }
    }

    #[test]
    fn decode_errors_name_the_failing_step() {
        assert_eq!(
            CredentialClaims::parse("a.b"),
            Err(ClaimDecodeError::SegmentCount(2))
        );
        assert!(matches!(
            CredentialClaims::parse("h.***.s"),
            Err(ClaimDecodeError::Base64(_))
        ));
        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode(b"nope"));
        assert!(matches!(
            CredentialClaims::parse(&not_json),
            Err(ClaimDecodeError::Json(_))
        ));
        let positional = format!("h.{}.s", URL_SAFE_NO_PAD.encode(br#"[null,null,"admin"]"#));
        assert_eq!(
            CredentialClaims::parse(&positional),
            Err(ClaimDecodeError::Json("expected an object, found an array".into()))
        );
    }
}
