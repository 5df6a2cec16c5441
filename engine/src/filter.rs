//! Filters applied when listing books.

use crate::Book;

/// Raw query marker meaning "true".
pub const FLAG_TRUE: &str = "1";
/// Raw query marker meaning "false".
pub const FLAG_FALSE: &str = "0";

/// A parsed list query.
///
/// Each field is independent; a book matches when every present field
/// matches, so the order of evaluation never changes the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Lowercased substring the book name must contain.
    name: Option<String>,
    reading: Option<bool>,
    finished: Option<bool>,
}

impl BookFilter {
    /// A filter that matches every book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from raw query-string values.
    ///
    /// `reading` and `finished` only count when they are exactly `"1"` or
    /// `"0"`; anything else means the filter is absent. An empty `name`
    /// is absent too.
    pub fn from_query(name: Option<&str>, reading: Option<&str>, finished: Option<&str>) -> Self {
        let mut filter = Self::new();
        if let Some(name) = name {
            filter = filter.name_contains(name);
        }
        filter.reading = parse_flag(reading);
        filter.finished = parse_flag(finished);
        filter
    }

    /// Keep books whose name contains `needle`, ignoring case.
    pub fn name_contains(mut self, needle: &str) -> Self {
        self.name = (!needle.is_empty()).then(|| needle.to_lowercase());
        self
    }

    /// Keep books whose `reading` flag equals `reading`.
    pub fn reading(mut self, reading: bool) -> Self {
        self.reading = Some(reading);
        self
    }

    /// Keep books whose `finished` flag equals `finished`.
    pub fn finished(mut self, finished: bool) -> Self {
        self.finished = Some(finished);
        self
    }

    /// True when no predicate is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.reading.is_none() && self.finished.is_none()
    }

    /// Check a single book against every present predicate.
    pub fn matches(&self, book: &Book) -> bool {
        self.matches_name(book) && self.matches_reading(book) && self.matches_finished(book)
    }

    fn matches_name(&self, book: &Book) -> bool {
        match &self.name {
            Some(needle) => book.name().to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }

    // A book that never set `reading` matches neither "0" nor "1".
    fn matches_reading(&self, book: &Book) -> bool {
        match self.reading {
            Some(reading) => book.details().reading == Some(reading),
            None => true,
        }
    }

    fn matches_finished(&self, book: &Book) -> bool {
        match self.finished {
            Some(finished) => book.finished() == finished,
            None => true,
        }
    }
}

/// Interpret a tri-state query flag.
pub fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw {
        Some(FLAG_TRUE) => Some(true),
        Some(FLAG_FALSE) => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_recognizes_only_markers() {
        assert_eq!(parse_flag(Some("1")), Some(true));
        assert_eq!(parse_flag(Some("0")), Some(false));
        assert_eq!(parse_flag(Some("true")), None);
        assert_eq!(parse_flag(Some("")), None);
        assert_eq!(parse_flag(Some(" 1")), None);
        assert_eq!(parse_flag(None), None);
    }

    #[test]
    fn from_query_lowercases_name() {
        let filter = BookFilter::from_query(Some("WaR"), Some("1"), Some("x"));
        assert_eq!(filter, BookFilter::new().name_contains("war").reading(true));
    }

    #[test]
    fn empty_name_is_absent() {
        let filter = BookFilter::from_query(Some(""), None, None);
        assert!(filter.is_empty());
    }
}
