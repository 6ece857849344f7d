//! Error types for tagstyle

use thiserror::Error;

/// Main error type for tagstyle operations
#[derive(Error, Debug)]
pub enum TagstyleError {
    /// Bad input: negative width at a strict boundary, unknown color,
    /// malformed markup, unknown style attribute, unknown formatter
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An object was used before it was configured
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Inconsistent registration (e.g. one formatter under two names)
    #[error("Logic error: {0}")]
    Logic(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TagstyleError {
    /// Shorthand for [`TagstyleError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Whether this error is an [`TagstyleError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result type alias for tagstyle operations
pub type Result<T> = std::result::Result<T, TagstyleError>;
