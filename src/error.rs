//! Error types for the registry crate

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur in registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Empty key or zero number passed where a real value is required
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Key is already registered
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Number is already live-assigned to a different key
    #[error("Duplicate number: {0}")]
    DuplicateNumber(u64),

    /// Key was never registered
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// Enumeration start index is not a valid position
    #[error("Start index {start} out of range (size {size})")]
    IndexOutOfRange { start: usize, size: usize },
}

impl RegistryError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a duplicate key error
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey(key.into())
    }

    /// Create an unknown key error
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey(key.into())
    }
}
