//! Error types for the NodePing client.

use thiserror::Error;

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during client operations.
///
/// `Http` and `Serialization` are transport-tier failures raised on the
/// local side of the exchange; `Api` means the service answered at the
/// transport level but embedded an error message in its body; `Config` is
/// raised at construction time, before any request is made.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid client configuration (missing token, unset environment).
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// HTTP request failed: network failure, timeout, or non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service reported an error in its response body.
    #[error("API error: {0}")]
    Api(String),

    /// Response body did not match the documented JSON shape.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
