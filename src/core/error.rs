use std::io;
use thiserror::Error;

/// Unified error type for the probe.
///
/// Every variant is reported to the user the same way (`Error: <description>`);
/// the variants only exist so logs can tell failures apart.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The API answered, but not with something we could use
    #[error("API error: {0}")]
    Api(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO-related errors
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Network-related errors
    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProbeError::Network(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            ProbeError::Network(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            ProbeError::Serialization(format!("Failed to decode response: {}", err))
        } else {
            ProbeError::Network(format!("Request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        ProbeError::Serialization(format!("JSON error: {}", err))
    }
}
