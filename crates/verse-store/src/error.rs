//! Error type for the storage contract.

use thiserror::Error;

/// Failures surfaced by a [`VerseStore`] backend.
///
/// The retrieval layers propagate these unchanged; retry policy, if any,
/// belongs to the backend itself.
///
/// [`VerseStore`]: crate::VerseStore
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend failed to execute a query.
    #[error("storage backend error: {0}")]
    Backend(String),

    /// The backend returned a record the domain layer cannot interpret.
    #[error("corrupt record {id:?}: {reason}")]
    CorruptRecord { id: String, reason: String },
}
