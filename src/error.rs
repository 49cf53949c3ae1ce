//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SdkError {
    /// The application-level error code, if this is an exchange error.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            SdkError::Api(e) => Some(&e.code),
            _ => None,
        }
    }
}

/// Transport-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// An application-level error from the exchange.
///
/// Every REST response carries `{code, msg, data}`; `code == "0"` is the only
/// success sentinel. Any other code — including ones arriving with HTTP 200 —
/// is decoded into this type exactly once, at the transport boundary, so
/// callers match on a typed error instead of comparing strings.
#[derive(Error, Debug, Clone)]
#[error("exchange error {code} on {endpoint}: {message}")]
pub struct ApiError {
    /// Endpoint path the request was sent to.
    pub endpoint: String,
    /// Exchange result code (never `"0"`).
    pub code: String,
    /// Exchange-provided message.
    pub message: String,
}

/// Configuration errors — fatal at startup, never retried.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<String>),
}
