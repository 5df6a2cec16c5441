//! Book handlers - validate, touch the store, report the outcome.
//!
//! Each handler holds the store lock for its whole validate-then-mutate
//! sequence, so no other request sees a half-applied operation.

use std::sync::Arc;

use bookshelf_engine::{Book, BookFilter, BookId, BookPayload, BookStore, BookSummary};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::{Action, AppError, Result};

/// The book store shared by every request.
pub type SharedStore = Arc<RwLock<BookStore>>;

/// Query parameters for listing books.
#[derive(Debug, Default)]
pub struct ListQuery {
    /// Case-insensitive substring of the book name
    pub name: Option<String>,
    /// "1" for books being read, "0" for the rest
    pub reading: Option<String>,
    /// "1" for finished books, "0" for the rest
    pub finished: Option<String>,
}

impl ListQuery {
    /// Build the query from raw key/value pairs.
    ///
    /// A key given more than once keeps its first value; unknown keys are
    /// ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = ListQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "reading" => &mut query.reading,
                "finished" => &mut query.finished,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

impl From<&ListQuery> for BookFilter {
    fn from(query: &ListQuery) -> Self {
        BookFilter::from_query(
            query.name.as_deref(),
            query.reading.as_deref(),
            query.finished.as_deref(),
        )
    }
}

/// Data returned after creating a book.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBook {
    pub book_id: BookId,
}

/// Data returned when listing books.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookList {
    pub books: Vec<BookSummary>,
}

/// Data returned when fetching a single book.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookDetail {
    pub book: Book,
}

/// Add a book to the store.
pub async fn handle_create(store: &SharedStore, payload: BookPayload) -> Result<CreatedBook> {
    let mut store = store.write().await;

    let book_id = store
        .create(payload)
        .map_err(|e| AppError::book(Action::Add, e))?;

    tracing::debug!("Added book {} ({} stored)", book_id, store.len());
    Ok(CreatedBook { book_id })
}

/// List books matching the query.
pub async fn handle_list(store: &SharedStore, query: &ListQuery) -> BookList {
    let filter = BookFilter::from(query);
    let books = store.read().await.list(&filter);
    BookList { books }
}

/// Fetch a single book by id.
pub async fn handle_get(store: &SharedStore, book_id: &str) -> Result<BookDetail> {
    let store = store.read().await;

    let book = store
        .get(book_id)
        .map_err(|e| AppError::book(Action::Fetch, e))?
        .clone();

    Ok(BookDetail { book })
}

/// Replace a book's fields.
pub async fn handle_update(
    store: &SharedStore,
    book_id: &str,
    payload: BookPayload,
) -> Result<()> {
    let mut store = store.write().await;

    let book = store
        .update(book_id, payload)
        .map_err(|e| AppError::book(Action::Update, e))?;

    tracing::debug!("Updated book {} (finished: {})", book.id(), book.finished());
    Ok(())
}

/// Remove a book from the store.
pub async fn handle_delete(store: &SharedStore, book_id: &str) -> Result<()> {
    let mut store = store.write().await;

    let removed = store
        .delete(book_id)
        .map_err(|e| AppError::book(Action::Delete, e))?;

    tracing::debug!("Deleted book {} ({} stored)", removed.id(), store.len());
    Ok(())
}
