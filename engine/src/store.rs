//! Store - the in-memory book collection.
//!
//! The store owns every book for the lifetime of the process, in insertion
//! order. It validates payloads, assigns ids and timestamps through its
//! injected capabilities, and answers lookups and filtered listings.

use crate::{
    error::Result, Book, BookFilter, BookId, BookPayload, BookSummary, Clock, Error, IdGenerator,
    RandomIds, SystemClock,
};
use std::fmt;

/// How many ids `create` draws before giving up on finding an unused one.
pub const MAX_ID_ATTEMPTS: usize = 8;

/// The book collection plus the capabilities it needs to create records.
pub struct BookStore {
    /// Books in insertion order
    books: Vec<Book>,
    /// Source of new book ids
    ids: Box<dyn IdGenerator>,
    /// Source of `insertedAt` / `updatedAt`
    clock: Box<dyn Clock>,
}

impl BookStore {
    /// Create an empty store using random ids and the system clock.
    pub fn new() -> Self {
        Self::with_capabilities(RandomIds, SystemClock)
    }

    /// Create an empty store with the given id generator and clock.
    pub fn with_capabilities(
        ids: impl IdGenerator + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            books: Vec::new(),
            ids: Box::new(ids),
            clock: Box::new(clock),
        }
    }

    /// Validate a payload and append a new book.
    ///
    /// Returns the id assigned to the book. Nothing is stored when
    /// validation fails.
    pub fn create(&mut self, payload: BookPayload) -> Result<BookId> {
        let details = payload.validate()?;
        let id = self.fresh_id()?;

        let book = Book::new(id.clone(), details, self.clock.now());
        self.books.push(book);

        Ok(id)
    }

    /// List the books matching `filter`, in insertion order.
    pub fn list(&self, filter: &BookFilter) -> Vec<BookSummary> {
        self.books
            .iter()
            .filter(|book| filter.matches(book))
            .map(Book::summary)
            .collect()
    }

    /// Get a book by id.
    pub fn get(&self, id: &str) -> Result<&Book> {
        self.books
            .iter()
            .find(|book| book.id() == id)
            .ok_or_else(|| Error::BookNotFound(id.to_string()))
    }

    /// Replace a book's fields with `payload`.
    ///
    /// The payload is validated before the id is looked up, so an invalid
    /// payload against an unknown id reports the validation error.
    pub fn update(&mut self, id: &str, payload: BookPayload) -> Result<&Book> {
        let details = payload.validate()?;

        let index = self
            .position(id)
            .ok_or_else(|| Error::BookNotFound(id.to_string()))?;

        let now = self.clock.now();
        self.books[index].replace(details, now);

        Ok(&self.books[index])
    }

    /// Remove a book by id and return it.
    pub fn delete(&mut self, id: &str) -> Result<Book> {
        let index = self
            .position(id)
            .ok_or_else(|| Error::BookNotFound(id.to_string()))?;

        Ok(self.books.remove(index))
    }

    /// Number of stored books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the store holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// All books in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    fn fresh_id(&mut self) -> Result<BookId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if self.position(&id).is_none() {
                return Ok(id);
            }
        }
        Err(Error::IdsExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id() == id)
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BookStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookStore")
            .field("books", &self.books)
            .finish_non_exhaustive()
    }
}
