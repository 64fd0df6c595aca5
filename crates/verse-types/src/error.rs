//! Error types for address parsing, validation, and range operations.

use thiserror::Error;

use crate::books::BookName;

/// Unified error type for verse addressing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerseError {
    /// A verse id string is malformed: wrong component count or a component
    /// that is not a positive integer.
    #[error("invalid verse id format: {value:?}")]
    InvalidFormat { value: String },

    /// A verse id is well-formed but points outside the catalog: book,
    /// chapter, or verse number is zero or too large.
    #[error("verse id out of range: {book}:{chapter}:{verse}")]
    OutOfRange { book: u32, chapter: u32, verse: u32 },

    /// A selection operation was given no verses.
    #[error("verse selection is empty")]
    EmptySelection,

    /// A selection operation was given verses from more than one book.
    /// Callers must partition selections by book first.
    #[error("verse selection spans multiple books ({first} and {second})")]
    CrossBookSelection { first: BookName, second: BookName },
}
