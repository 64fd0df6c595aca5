//! The asynchronous storage/index contract.

use async_trait::async_trait;

use verse_types::{SearchScope, Verse, VerseId};

use crate::error::StoreError;
use crate::page::Page;

/// Storage and text-index operations the retrieval layers are built on.
///
/// Implementations own persistence and tokenization; the contract only pins
/// down ordering. All operations are reads except [`insert`], which is a
/// bulk load off the query hot path. Each call observes a consistent
/// snapshot, and callers may issue independent calls concurrently.
///
/// [`insert`]: VerseStore::insert
#[async_trait]
pub trait VerseStore: Send + Sync {
    /// Fetches verses by explicit address list, preserving the caller's
    /// order, then applying the page window.
    async fn fetch_by_ids(&self, ids: &[VerseId], page: Page) -> Result<Vec<Verse>, StoreError>;

    /// Fetches the inclusive address range in ascending address order.
    /// Misordered endpoints select nothing.
    async fn fetch_by_range(
        &self,
        start: VerseId,
        end: VerseId,
        page: Page,
    ) -> Result<Vec<Verse>, StoreError>;

    /// Verses whose text contains the query as an exact contiguous phrase,
    /// constrained to `scope`, in ascending address order.
    async fn phrase_search(
        &self,
        text: &str,
        scope: &SearchScope,
        page: Page,
    ) -> Result<Vec<Verse>, StoreError>;

    /// Verses containing every query word in any order, constrained to
    /// `scope`, in the backend's relevance order. The ordering must be
    /// deterministic but is otherwise the backend's choice; phrase matches
    /// are not excluded here (the ranker differences the two sets).
    async fn word_search(
        &self,
        text: &str,
        scope: &SearchScope,
        page: Page,
    ) -> Result<Vec<Verse>, StoreError>;

    /// Bulk-loads verses, replacing any existing records with the same
    /// address. Runs to completion or fails atomically.
    async fn insert(&self, verses: Vec<Verse>) -> Result<(), StoreError>;
}
