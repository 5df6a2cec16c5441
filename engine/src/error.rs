//! Error types for the Bookshelf engine.

use crate::BookId;
use thiserror::Error;

/// All possible errors from the Bookshelf engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Validation errors
    #[error("name is required")]
    MissingName,

    #[error("readPage ({read_page}) must not exceed pageCount ({page_count})")]
    ReadPageExceedsPageCount { read_page: u64, page_count: u64 },

    // Lookup errors
    #[error("book not found: {0}")]
    BookNotFound(BookId),

    // Capability errors
    #[error("no unused id after {attempts} attempts")]
    IdsExhausted { attempts: usize },
}

impl Error {
    /// Whether the payload was rejected before the store was consulted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingName | Error::ReadPageExceedsPageCount { .. }
        )
    }

    /// Whether the requested book does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::BookNotFound(_))
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
