//! # Bookshelf Engine
//!
//! The in-memory record store behind the Bookshelf HTTP service.
//!
//! This crate holds the rules that decide what a book record may contain and
//! how lists of books are filtered. It has no knowledge of HTTP; the server
//! crate wraps a [`BookStore`] and turns its results into responses.
//!
//! ## Core Concepts
//!
//! ### Books
//!
//! A [`Book`] carries:
//! - A 16-character id assigned at creation
//! - Caller-owned fields ([`BookDetails`]): name, year, author, summary,
//!   publisher, page count, read page, reading flag
//! - A derived `finished` flag, true when `readPage == pageCount`
//! - `insertedAt` / `updatedAt` timestamps
//!
//! ### Payloads
//!
//! Create and update both take a [`BookPayload`]. A payload is valid when
//! it has a non-empty name and its read page does not exceed its page count.
//!
//! ### Capabilities
//!
//! The store draws ids from an [`IdGenerator`] and time from a [`Clock`].
//! Production uses [`RandomIds`] and [`SystemClock`]; tests swap in
//! [`SequentialIds`], [`FixedClock`] or [`SteppingClock`].
//!
//! ## Quick Start
//!
//! ```rust
//! use bookshelf_engine::{BookFilter, BookPayload, BookStore};
//!
//! let mut store = BookStore::new();
//!
//! let id = store
//!     .create(BookPayload::named("War and Peace").with_pages(1225, 1225))
//!     .unwrap();
//! assert!(store.get(&id).unwrap().finished());
//!
//! let hits = store.list(&BookFilter::new().name_contains("war"));
//! assert_eq!(hits.len(), 1);
//!
//! store.delete(&id).unwrap();
//! assert!(store.is_empty());
//! ```

pub mod book;
pub mod clock;
pub mod error;
pub mod filter;
pub mod id;
pub mod store;

// Re-export main types at crate root
pub use book::{Book, BookDetails, BookPayload, BookSummary};
pub use clock::{Clock, FixedClock, SteppingClock, SystemClock};
pub use error::Error;
pub use filter::BookFilter;
pub use id::{IdGenerator, RandomIds, SequentialIds, ID_LENGTH};
pub use store::{BookStore, MAX_ID_ATTEMPTS};

/// Type aliases for clarity
pub type BookId = String;
pub type Timestamp = chrono::DateTime<chrono::Utc>;
