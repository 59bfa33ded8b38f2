//! Error types for the EstrenosGO search adapter
//!
//! These errors never escape a search: the pipeline logs them and moves on.
//! They still surface from the lower-level client and parser APIs.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for EstrenosGO operations
#[derive(Error, Debug)]
pub enum EstrenosError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Required HTML element was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Rate limited by the server (HTTP 429)
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Requested page does not exist (HTTP 404)
    #[error("Page not found: {0}")]
    NotFound(String),

    /// Any other non-success HTTP status
    #[error("Unexpected HTTP status {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// Client configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Serialize as the display string so errors can travel in JSON reports
impl Serialize for EstrenosError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for EstrenosGO operations
pub type Result<T> = std::result::Result<T, EstrenosError>;
