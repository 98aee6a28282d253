//! Error types shared by the network and view layers

use thiserror::Error;

/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, transport)
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// The body could not be read as JSON
    #[error("invalid JSON body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            ApiError::Http {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if e.is_timeout() {
            ApiError::Network(format!("request timed out: {}", e))
        } else if e.is_connect() {
            ApiError::Network(format!("connection failed: {}", e))
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Response JSON matched none of the accepted product envelopes
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unable to parse product data")]
pub struct ShapeError {
    /// Short description of what was received instead
    pub found: String,
}
