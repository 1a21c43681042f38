//! Error handling module for omnom
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All fallible operations in the application should use these types for
//! consistency. Wizard transition rejections have their own error type in
//! `wizard` because they are recoverable and never surface to the user.

use thiserror::Error;

/// Main error type for omnom
#[derive(Error, Debug)]
pub enum OmnomError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset errors (loading, parsing, validation)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for omnom operations
pub type Result<T> = std::result::Result<T, OmnomError>;

// Convenient error constructors
impl OmnomError {
    /// Create a dataset error
    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}
