//! Error types for AppSession.
//!
//! Store mutations are total and never fail. Errors only surface from the
//! checked retrieval path (`try_get`) and from explicit key parsing.

use thiserror::Error;

/// All AppSession errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Key not present in the session
    #[error("not found: {0}")]
    NotFound(String),

    /// Stored value has a different type than requested
    #[error("wrong type: expected {expected}, got {actual}")]
    WrongType {
        /// Requested type
        expected: String,
        /// Type actually stored
        actual: String,
    },

    /// Invalid key format
    #[error("invalid key: {0}")]
    InvalidKey(String),
}

/// Result type for AppSession operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is a type mismatch.
    pub fn is_wrong_type(&self) -> bool {
        matches!(self, Error::WrongType { .. })
    }
}
