//! Book identifier generation.

use crate::BookId;
use uuid::Uuid;

/// Length of every generated book identifier.
pub const ID_LENGTH: usize = 16;

/// URL-safe alphabet used by [`RandomIds`], 64 symbols so each byte maps
/// through its low six bits.
const ALPHABET: &[u8; 64] = b"ModuleSymbhasOwnPr-0123456789ABCDEFGHNRVfgctiUvz_KqYTJkLxpZXIjQW";

/// Source of fresh, unique book identifiers.
pub trait IdGenerator: Send + Sync {
    /// Produce the next identifier.
    fn next_id(&mut self) -> BookId;
}

/// Random 16-character identifiers drawn from a v4 UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> BookId {
        Uuid::new_v4()
            .as_bytes()
            .iter()
            .map(|byte| ALPHABET[usize::from(byte & 63)] as char)
            .collect()
    }
}

/// Deterministic identifiers `book000000000001`, `book000000000002`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    counter: u64,
}

impl SequentialIds {
    /// Start the sequence at 1.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> BookId {
        self.counter += 1;
        format!("book{:012}", self.counter)
    }
}
