//! Error type for the retrieval facade.

use thiserror::Error;

use verse_store::StoreError;
use verse_types::VerseError;

/// Failures surfaced by [`VerseProvider`] operations.
///
/// [`VerseProvider`]: crate::VerseProvider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetrievalError {
    /// The request named an address outside the catalog.
    #[error(transparent)]
    Address(#[from] VerseError),

    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
