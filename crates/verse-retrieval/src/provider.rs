//! The retrieval facade.

use std::sync::Arc;

use tracing::debug;

use verse_search::SearchRanker;
use verse_store::{Page, VerseStore};
use verse_types::{BookName, ChapterRef, Reference, SearchScope, Verse, VerseId};

use crate::error::RetrievalError;

/// High-level read interface over a [`VerseStore`].
///
/// Resolves books, chapters, and references to address ranges against the
/// catalog, fetches through the store, and routes text queries through the
/// [`SearchRanker`]. All operations are reads.
pub struct VerseProvider<S> {
    store: Arc<S>,
    ranker: SearchRanker<S>,
}

impl<S> VerseProvider<S>
where
    S: VerseStore,
{
    pub fn new(store: Arc<S>) -> VerseProvider<S> {
        let ranker = SearchRanker::new(store.clone());
        VerseProvider { store, ranker }
    }

    /// Fetches verses by explicit address list, in the caller's order.
    ///
    /// Addresses with no stored record are skipped, so the result can be
    /// shorter than the request.
    pub async fn fetch_by_ids(
        &self,
        ids: &[VerseId],
        page: Page,
    ) -> Result<Vec<Verse>, RetrievalError> {
        Ok(self.store.fetch_by_ids(ids, page).await?)
    }

    /// Fetches the verses a reference spans, in ascending address order.
    ///
    /// Misordered endpoints are swapped before fetching.
    pub async fn fetch_reference(
        &self,
        reference: Reference,
        page: Page,
    ) -> Result<Vec<Verse>, RetrievalError> {
        let reference = reference.fixup();
        debug!(from = %reference.from, to = %reference.to, "fetch reference");
        Ok(self
            .store
            .fetch_by_range(reference.from, reference.to, page)
            .await?)
    }

    /// Fetches one chapter of one book.
    ///
    /// Fails with an address error if the book has no such chapter.
    pub async fn fetch_chapter(
        &self,
        book: BookName,
        chapter: u32,
        page: Page,
    ) -> Result<Vec<Verse>, RetrievalError> {
        let chapter = ChapterRef::new(book, chapter)?;
        self.fetch_reference(Reference::for_chapter(chapter), page)
            .await
    }

    /// Fetches a whole book.
    pub async fn fetch_book(
        &self,
        book: BookName,
        page: Page,
    ) -> Result<Vec<Verse>, RetrievalError> {
        self.fetch_reference(Reference::for_book(book), page).await
    }

    /// Runs a ranked text search within `scope`.
    ///
    /// A range scope with misordered endpoints is normalized before the
    /// query reaches the store. Empty and whitespace-only queries return
    /// nothing without touching storage.
    pub async fn search(
        &self,
        query: &str,
        scope: &SearchScope,
        page: Page,
    ) -> Result<Vec<Verse>, RetrievalError> {
        let normalized;
        let scope = match scope {
            SearchScope::Range(reference) if !reference.is_ordered() => {
                normalized = SearchScope::Range(reference.fixup());
                &normalized
            }
            other => other,
        };
        Ok(self.ranker.search(query, scope, page).await?)
    }
}
