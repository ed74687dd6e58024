//! Target-independent description of an outbound request and the bearer
//! credential attachment shared by every backend call.

use serde::Serialize;

use crate::error::ApiError;

pub const AUTHORIZATION: &str = "Authorization";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

/// Method, headers and body of a request, before it is handed to the
/// network layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    /// A `POST` carrying `payload` as JSON.
    pub fn post_json<T: Serialize>(payload: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(Self {
            method: Method::Post,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Sets a header, replacing any existing value under the same name
    /// (names compare case-insensitively).
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Attaches `Authorization: Bearer <credential>`, overwriting whatever
    /// authorization the caller supplied.
    pub fn authorize(self, credential: &str) -> Self {
        self.with_header(AUTHORIZATION, bearer(credential))
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub fn bearer(credential: &str) -> String {
    format!("Bearer {}", credential)
}

/// Joins an endpoint path onto the configured API base.
pub fn endpoint_url(api_base: &str, path: &str) -> String {
    let base = api_base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::DeleteMappingRequest;

    #[test]
    fn authorize_overwrites_caller_supplied_header() {
        let options = RequestOptions::get()
            .with_header("authorization", "Basic abc")
            .with_header("Accept", "application/json")
            .authorize("tok-1");

        assert_eq!(options.header("Authorization"), Some("Bearer tok-1"));
        assert_eq!(
            options
                .headers
                .iter()
                .filter(|(n, _)| n.eq_ignore_ascii_case(AUTHORIZATION))
                .count(),
            1
        );
        assert_eq!(options.header("accept"), Some("application/json"));
    }

    #[test]
    fn post_json_sets_body_and_content_type() {
        let options = RequestOptions::post_json(&DeleteMappingRequest {
            store_name: "S1".into(),
        })
        .unwrap()
        .authorize("tok");

        assert_eq!(options.method, Method::Post);
        assert_eq!(options.body.as_deref(), Some(r#"{"store_name":"S1"}"#));
        assert_eq!(options.header("content-type"), Some("application/json"));
    }

    #[test]
    fn endpoint_url_handles_slashes() {
        assert_eq!(endpoint_url("", "/stores"), "/stores");
        assert_eq!(endpoint_url("https://api.example.com/", "/stores"), "https://api.example.com/stores");
        assert_eq!(endpoint_url("/api", "markets"), "/api/markets");
    }
}
