//! Error types for chat links

use thiserror::Error;

/// Chat link error types
#[derive(Debug, Error)]
pub enum LinkError {
    /// Phone number is not in international digits-only form
    #[error("Invalid chat number: {0}")]
    InvalidNumber(String),

    /// Link text could not be percent-decoded
    #[error("Invalid link text: {0}")]
    InvalidText(String),
}

/// Result type for chat link operations
pub type LinkResult<T> = Result<T, LinkError>;
