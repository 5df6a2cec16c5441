//! Book records and the payloads that create or replace them.

use crate::{error::Result, BookId, Error, Timestamp};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize, Serializer};

/// Fields a caller supplies when creating or updating a book.
///
/// Everything is optional at the type level; [`BookPayload::validate`]
/// decides what is actually required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub name: Option<String>,
    pub year: Option<i64>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<u64>,
    pub read_page: Option<u64>,
    pub reading: Option<bool>,
}

impl BookPayload {
    /// Payload with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set both page counters.
    pub fn with_pages(mut self, page_count: u64, read_page: u64) -> Self {
        self.page_count = Some(page_count);
        self.read_page = Some(read_page);
        self
    }

    /// Set the "currently reading" flag.
    pub fn with_reading(mut self, reading: bool) -> Self {
        self.reading = Some(reading);
        self
    }

    /// Set the publisher.
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    /// Check the payload and turn it into the stored field set.
    ///
    /// Rules, in order:
    /// 1. `name` must be present and non-empty
    /// 2. `readPage` must not exceed `pageCount` when both are present
    pub fn validate(self) -> Result<BookDetails> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(Error::MissingName),
        };

        if let (Some(read_page), Some(page_count)) = (self.read_page, self.page_count) {
            if read_page > page_count {
                return Err(Error::ReadPageExceedsPageCount {
                    read_page,
                    page_count,
                });
            }
        }

        Ok(BookDetails {
            name,
            year: self.year,
            author: self.author,
            summary: self.summary,
            publisher: self.publisher,
            page_count: self.page_count,
            read_page: self.read_page,
            reading: self.reading,
        })
    }
}

/// The caller-owned fields of a stored book, after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetails {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<bool>,
}

impl BookDetails {
    /// A book is finished when it has been read up to its last page.
    ///
    /// Absent counters compare equal to each other.
    pub fn is_finished(&self) -> bool {
        self.page_count == self.read_page
    }
}

/// A book held in the store.
///
/// Only [`crate::BookStore`] builds or mutates books, which keeps `id`,
/// `insertedAt` and the derived `finished` flag consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    id: BookId,
    #[serde(flatten)]
    details: BookDetails,
    finished: bool,
    #[serde(serialize_with = "serialize_timestamp")]
    inserted_at: Timestamp,
    #[serde(serialize_with = "serialize_timestamp")]
    updated_at: Timestamp,
}

impl Book {
    pub(crate) fn new(id: BookId, details: BookDetails, now: Timestamp) -> Self {
        Self {
            id,
            finished: details.is_finished(),
            details,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replace every caller-owned field and refresh `updatedAt`.
    pub(crate) fn replace(&mut self, details: BookDetails, now: Timestamp) {
        self.finished = details.is_finished();
        self.details = details;
        self.updated_at = now;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn details(&self) -> &BookDetails {
        &self.details
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn inserted_at(&self) -> Timestamp {
        self.inserted_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// The compact form used by list responses.
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.details.name.clone(),
            publisher: self.details.publisher.clone(),
        }
    }
}

/// List projection of a book: `{id, name, publisher}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub id: BookId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
fn serialize_timestamp<S: Serializer>(
    ts: &Timestamp,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}
