//! Error types for preimage-kv

use crate::model::Hash;
use thiserror::Error;

/// Result type alias for preimage-kv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in preimage-kv operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fixture parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid hex value: {0}")]
    InvalidHex(String),

    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    #[error("Preimage not found: {0}")]
    NotFound(Hash),
}
