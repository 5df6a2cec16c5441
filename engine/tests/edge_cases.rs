//! Edge case tests for bookshelf-engine
//!
//! These tests cover boundary conditions and unusual inputs.

use bookshelf_engine::{
    BookFilter, BookPayload, BookStore, Error, FixedClock, SequentialIds, SteppingClock,
};
use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

fn create_test_store() -> BookStore {
    let start = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
    BookStore::with_capabilities(
        SequentialIds::new(),
        SteppingClock::new(start, Duration::milliseconds(250)),
    )
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn finished_book_round_trip() {
    let mut store = create_test_store();

    let id = store
        .create(BookPayload::named("A").with_pages(100, 100))
        .unwrap();

    let book = store.get(&id).unwrap();
    assert!(book.finished());
    assert_eq!(book.details().page_count, Some(100));
}

#[test]
fn rejected_create_leaves_list_unchanged() {
    let mut store = create_test_store();
    store.create(BookPayload::named("existing")).unwrap();
    let before = store.list(&BookFilter::new()).len();

    let err = store
        .create(BookPayload::named("B").with_pages(50, 60))
        .unwrap_err();
    assert!(err.is_validation());

    assert_eq!(store.list(&BookFilter::new()).len(), before);
}

#[test]
fn update_unknown_id_is_not_found() {
    let mut store = create_test_store();
    let err = store
        .update("nonexistent-id", BookPayload::named("valid"))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn delete_then_fetch_is_not_found() {
    let mut store = create_test_store();
    let id = store.create(BookPayload::named("gone soon")).unwrap();

    store.delete(&id).unwrap();

    assert_eq!(store.get(&id).unwrap_err(), Error::BookNotFound(id));
}

#[test]
fn fetch_returns_payload_plus_assigned_fields() {
    let mut store = create_test_store();
    let payload: BookPayload = serde_json::from_value(json!({
        "name": "Buku A",
        "year": 2010,
        "author": "John Doe",
        "summary": "Lorem ipsum dolor sit amet",
        "publisher": "Dicoding Indonesia",
        "pageCount": 100,
        "readPage": 25,
        "reading": false
    }))
    .unwrap();

    let id = store.create(payload).unwrap();
    let book = store.get(&id).unwrap();

    assert_eq!(
        serde_json::to_value(book).unwrap(),
        json!({
            "id": id,
            "name": "Buku A",
            "year": 2010,
            "author": "John Doe",
            "summary": "Lorem ipsum dolor sit amet",
            "publisher": "Dicoding Indonesia",
            "pageCount": 100,
            "readPage": 25,
            "reading": false,
            "finished": false,
            "insertedAt": "2024-01-31T12:00:00.000Z",
            "updatedAt": "2024-01-31T12:00:00.000Z"
        })
    );
}

// ============================================================================
// String Edge Cases
// ============================================================================

#[test]
fn unicode_names_filter_case_insensitively() {
    let mut store = create_test_store();

    let names = ["Война и мир", "ÉTUDES", "日本語テスト", "🎉 Party"];
    for name in names {
        store.create(BookPayload::named(name)).unwrap();
    }

    let hits = store.list(&BookFilter::new().name_contains("война"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Война и мир");

    let hits = store.list(&BookFilter::new().name_contains("études"));
    assert_eq!(hits.len(), 1);

    let hits = store.list(&BookFilter::new().name_contains("🎉"));
    assert_eq!(hits.len(), 1);
}

#[test]
fn unrecognized_flags_are_ignored() {
    let mut store = create_test_store();
    store
        .create(BookPayload::named("a").with_reading(true))
        .unwrap();
    store
        .create(BookPayload::named("b").with_reading(false))
        .unwrap();

    let filter = BookFilter::from_query(None, Some("yes"), Some("2"));
    assert!(filter.is_empty());
    assert_eq!(store.list(&filter).len(), 2);
}

#[test]
fn books_without_reading_flag_match_neither_marker() {
    let mut store = create_test_store();
    store.create(BookPayload::named("unset")).unwrap();

    assert!(store.list(&BookFilter::new().reading(true)).is_empty());
    assert!(store.list(&BookFilter::new().reading(false)).is_empty());
}

// ============================================================================
// Numeric Edge Cases
// ============================================================================

#[test]
fn zero_pages_is_finished() {
    let mut store = create_test_store();
    let id = store
        .create(BookPayload::named("empty").with_pages(0, 0))
        .unwrap();
    assert!(store.get(&id).unwrap().finished());
}

#[test]
fn read_page_equal_to_page_count_is_allowed() {
    let mut store = create_test_store();
    assert!(store
        .create(BookPayload::named("max").with_pages(u64::MAX, u64::MAX))
        .is_ok());
}

#[test]
fn negative_page_count_does_not_deserialize() {
    let result: Result<BookPayload, _> =
        serde_json::from_value(json!({"name": "neg", "pageCount": -1}));
    assert!(result.is_err());
}

// ============================================================================
// Timestamps
// ============================================================================

#[test]
fn update_refreshes_only_updated_at() {
    let mut store = create_test_store();
    let id = store.create(BookPayload::named("v1")).unwrap();

    store.update(&id, BookPayload::named("v2")).unwrap();
    let book = store.get(&id).unwrap();

    assert_eq!(
        book.updated_at() - book.inserted_at(),
        Duration::milliseconds(250)
    );
}

#[test]
fn fixed_clock_gives_identical_timestamps() {
    let now = Utc.with_ymd_and_hms(2020, 2, 29, 23, 59, 59).unwrap();
    let mut store = BookStore::with_capabilities(SequentialIds::new(), FixedClock(now));

    let id = store.create(BookPayload::named("leap")).unwrap();
    store.update(&id, BookPayload::named("leap 2")).unwrap();

    let book = store.get(&id).unwrap();
    assert_eq!(book.inserted_at(), now);
    assert_eq!(book.updated_at(), now);
}

// ============================================================================
// Default Capabilities
// ============================================================================

#[test]
fn default_store_generates_sixteen_char_ids() {
    let mut store = BookStore::new();
    let first = store.create(BookPayload::named("one")).unwrap();
    let second = store.create(BookPayload::named("two")).unwrap();

    assert_eq!(first.len(), bookshelf_engine::ID_LENGTH);
    assert_ne!(first, second);
}
