//! Two-tier search ranking over a [`VerseStore`].

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};

use verse_store::{Page, StoreError, VerseStore};
use verse_types::{SearchScope, Verse};

/// Ranks text-search results from a backing store.
///
/// Exact phrase matches come first, in ascending address order, followed by
/// every-word matches in the backend's relevance order with phrase matches
/// removed. Both tiers are fetched unwindowed and the page is applied to the
/// merged sequence, so a window can straddle the tier boundary.
pub struct SearchRanker<S> {
    store: Arc<S>,
}

impl<S> SearchRanker<S>
where
    S: VerseStore,
{
    pub fn new(store: Arc<S>) -> SearchRanker<S> {
        SearchRanker { store }
    }

    /// Runs a ranked search for `query` within `scope`.
    ///
    /// A query that is empty or whitespace-only returns no results without
    /// touching storage.
    pub async fn search(
        &self,
        query: &str,
        scope: &SearchScope,
        page: Page,
    ) -> Result<Vec<Verse>, StoreError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let (phrase, word) = tokio::join!(
            self.store.phrase_search(query, scope, Page::all()),
            self.store.word_search(query, scope, Page::all()),
        );
        let mut phrase = phrase?;
        let word = word?;

        // The contract says phrase results arrive in address order; sort
        // anyway so the merged ranking never depends on a backend slip.
        if !phrase.windows(2).all(|w| w[0].sort_key() <= w[1].sort_key()) {
            warn!(query, "phrase results arrived out of address order");
            phrase.sort_by_key(Verse::sort_key);
        }

        let phrase_ids: HashSet<u64> = phrase.iter().map(Verse::sort_key).collect();
        let mut merged = phrase;
        merged.extend(
            word.into_iter()
                .filter(|v| !phrase_ids.contains(&v.sort_key())),
        );

        info!(
            query,
            phrase = phrase_ids.len(),
            total = merged.len(),
            "ranked search complete"
        );
        Ok(page.apply(merged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verse_store::{MockVerseStore, RecordedCall};

    fn verse(id: &str, text: &str) -> Verse {
        Verse::new(id.parse().unwrap(), text)
    }

    fn ids(verses: &[Verse]) -> Vec<String> {
        verses.iter().map(|v| v.id.to_string()).collect()
    }

    #[tokio::test]
    async fn empty_query_returns_nothing_without_calling_storage() {
        let mock = Arc::new(MockVerseStore::new());
        let ranker = SearchRanker::new(mock.clone());

        assert!(ranker
            .search("", &SearchScope::All, Page::all())
            .await
            .unwrap()
            .is_empty());
        assert!(ranker
            .search("   \t", &SearchScope::All, Page::all())
            .await
            .unwrap()
            .is_empty());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn phrase_matches_precede_word_matches() {
        let mock = Arc::new(MockVerseStore::new());
        mock.stage_phrase(Ok(vec![
            verse("1:1:2", "the face of the waters"),
            verse("1:1:6", "the midst of the waters"),
        ]));
        mock.stage_word(Ok(vec![
            verse("19:23:2", "beside the still waters"),
            verse("1:7:18", "the waters prevailed"),
        ]));

        let ranker = SearchRanker::new(mock);
        let hits = ranker
            .search("of the waters", &SearchScope::All, Page::all())
            .await
            .unwrap();
        assert_eq!(hits.len(), 4);
        assert_eq!(ids(&hits), vec!["1:1:2", "1:1:6", "19:23:2", "1:7:18"]);
    }

    #[tokio::test]
    async fn word_tier_excludes_phrase_matches() {
        let mock = Arc::new(MockVerseStore::new());
        let shared = verse("1:1:2", "the face of the waters");
        mock.stage_phrase(Ok(vec![shared.clone()]));
        mock.stage_word(Ok(vec![shared, verse("1:7:18", "the waters prevailed")]));

        let ranker = SearchRanker::new(mock);
        let hits = ranker
            .search("waters", &SearchScope::All, Page::all())
            .await
            .unwrap();
        assert_eq!(ids(&hits), vec!["1:1:2", "1:7:18"]);
    }

    #[tokio::test]
    async fn phrase_tier_is_normalized_to_address_order() {
        let mock = Arc::new(MockVerseStore::new());
        mock.stage_phrase(Ok(vec![
            verse("1:1:6", "the midst of the waters"),
            verse("1:1:2", "the face of the waters"),
        ]));

        let ranker = SearchRanker::new(mock);
        let hits = ranker
            .search("waters", &SearchScope::All, Page::all())
            .await
            .unwrap();
        assert_eq!(ids(&hits), vec!["1:1:2", "1:1:6"]);
    }

    #[tokio::test]
    async fn page_window_straddles_the_tier_boundary() {
        let mock = Arc::new(MockVerseStore::new());
        mock.stage_phrase(Ok(vec![
            verse("1:1:2", "a"),
            verse("1:1:6", "b"),
        ]));
        mock.stage_word(Ok(vec![
            verse("1:7:18", "c"),
            verse("19:23:2", "d"),
        ]));

        let ranker = SearchRanker::new(mock.clone());
        let hits = ranker
            .search("waters", &SearchScope::All, Page::new(2, 1))
            .await
            .unwrap();
        assert_eq!(ids(&hits), vec!["1:1:6", "1:7:18"]);

        // Both tiers must have been fetched unwindowed for that to hold.
        for call in mock.calls() {
            match call {
                RecordedCall::PhraseSearch { page, .. }
                | RecordedCall::WordSearch { page, .. } => assert_eq!(page, Page::all()),
                other => panic!("unexpected call: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn scope_is_forwarded_to_both_tiers() {
        let mock = Arc::new(MockVerseStore::new());
        let scope = SearchScope::Ids(vec!["1:1:1".parse().unwrap()]);

        let ranker = SearchRanker::new(mock.clone());
        ranker.search("light", &scope, Page::all()).await.unwrap();

        let scopes: Vec<SearchScope> = mock
            .calls()
            .into_iter()
            .map(|call| match call {
                RecordedCall::PhraseSearch { scope, .. }
                | RecordedCall::WordSearch { scope, .. } => scope,
                other => panic!("unexpected call: {other:?}"),
            })
            .collect();
        assert_eq!(scopes, vec![scope.clone(), scope]);
    }

    #[tokio::test]
    async fn storage_errors_propagate() {
        let mock = Arc::new(MockVerseStore::new());
        mock.stage_phrase(Err(StoreError::Backend("index offline".to_string())));

        let ranker = SearchRanker::new(mock);
        let err = ranker
            .search("waters", &SearchScope::All, Page::all())
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::Backend("index offline".to_string()));
    }
}
