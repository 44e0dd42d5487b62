//! Store error taxonomy
//!
//! Store-layer errors surface to the coordinator/caller and are never
//! silently swallowed, with two documented exceptions: encode-time string
//! truncation, and the skipped stock increment when a returned lending
//! references a book that is no longer active.

use thiserror::Error;

/// Result type for store and circulation operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the record stores and the circulation coordinator
#[derive(Debug, Error)]
pub enum StoreError {
    /// No active record with the requested ID in the given store
    #[error("no active {entity} with id {id}")]
    NotFound { entity: &'static str, id: i32 },

    /// Book quantity was zero or less at borrow time
    #[error("book {id} is out of stock")]
    OutOfStock { id: i32 },

    /// File length is not a multiple of the record size, or a record
    /// buffer failed decoding
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// Caller-supplied value fails a domain constraint
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Filesystem failure opening, reading, or writing a store file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Create a not found error for the given store
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    /// Create a malformed record error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRecord(message.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Returns whether this error is a not-found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
