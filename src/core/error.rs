//! Custom error types for the state core

use thiserror::Error;

/// Main error type for the state core
///
/// Cart and navigation operations are total (absent keys are no-ops), so
/// errors only arise from persistence and directory lookups.
#[derive(Error, Debug)]
pub enum Error {
    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error from the storage backend
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage backend failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// A restaurant id with no directory entry
    #[error("Unknown restaurant: {0}")]
    UnknownRestaurant(String),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
