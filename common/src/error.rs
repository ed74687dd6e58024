//! Error taxonomy shared by the gate, the fetch layer and the configuration.

use thiserror::Error;

/// Failures reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The provider could not be reached while refreshing the credential.
    #[error("identity provider unreachable: {0}")]
    Unreachable(String),

    /// The provider rejected the current session.
    #[error("invalid session: {0}")]
    InvalidSession(String),

    /// A credential was requested while nobody is signed in.
    #[error("no signed-in user")]
    NoPrincipal,
}

/// Reasons a credential's claims segment could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimDecodeError {
    #[error("credential has {0} segments, expected 3")]
    SegmentCount(usize),

    #[error("claims segment is not valid base64: {0}")]
    Base64(String),

    #[error("claims segment is not a JSON object: {0}")]
    Json(String),
}

/// Failures of a call against the REST backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, aborted, CORS).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("backend answered with status {0}")]
    Status(u16),

    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The request could not be built (bad header, unserializable body).
    #[error("invalid request: {0}")]
    Request(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}
