//! Recording mock for the storage contract.
//!
//! Exported from the crate proper so downstream crates can drive their own
//! tests against it without re-implementing the bookkeeping.

use std::sync::Mutex;

use async_trait::async_trait;

use verse_types::{SearchScope, Verse, VerseId};

use crate::error::StoreError;
use crate::page::Page;
use crate::store::VerseStore;

/// One recorded call against the mock, with the arguments it received.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    FetchByIds { ids: Vec<VerseId>, page: Page },
    FetchByRange { start: VerseId, end: VerseId, page: Page },
    PhraseSearch { text: String, scope: SearchScope, page: Page },
    WordSearch { text: String, scope: SearchScope, page: Page },
    Insert { count: usize },
}

/// A [`VerseStore`] that records every call and replays canned results.
///
/// Each operation has its own queue of canned responses, consumed front to
/// back; an exhausted queue yields an empty result so tests only stage what
/// they assert on.
#[derive(Default)]
pub struct MockVerseStore {
    calls: Mutex<Vec<RecordedCall>>,
    fetch_results: Mutex<Vec<Result<Vec<Verse>, StoreError>>>,
    phrase_results: Mutex<Vec<Result<Vec<Verse>, StoreError>>>,
    word_results: Mutex<Vec<Result<Vec<Verse>, StoreError>>>,
    insert_results: Mutex<Vec<Result<(), StoreError>>>,
}

impl MockVerseStore {
    pub fn new() -> MockVerseStore {
        MockVerseStore::default()
    }

    /// Stages a result for the next fetch call (by ids or by range).
    pub fn stage_fetch(&self, result: Result<Vec<Verse>, StoreError>) {
        self.fetch_results.lock().unwrap().push(result);
    }

    /// Stages a result for the next phrase search.
    pub fn stage_phrase(&self, result: Result<Vec<Verse>, StoreError>) {
        self.phrase_results.lock().unwrap().push(result);
    }

    /// Stages a result for the next word search.
    pub fn stage_word(&self, result: Result<Vec<Verse>, StoreError>) {
        self.word_results.lock().unwrap().push(result);
    }

    /// Stages a result for the next insert.
    pub fn stage_insert(&self, result: Result<(), StoreError>) {
        self.insert_results.lock().unwrap().push(result);
    }

    /// Everything recorded so far, in call order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls recorded so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn take(
        queue: &Mutex<Vec<Result<Vec<Verse>, StoreError>>>,
    ) -> Result<Vec<Verse>, StoreError> {
        let mut queue = queue.lock().unwrap();
        if queue.is_empty() {
            Ok(Vec::new())
        } else {
            queue.remove(0)
        }
    }
}

#[async_trait]
impl VerseStore for MockVerseStore {
    async fn fetch_by_ids(&self, ids: &[VerseId], page: Page) -> Result<Vec<Verse>, StoreError> {
        self.record(RecordedCall::FetchByIds {
            ids: ids.to_vec(),
            page,
        });
        Self::take(&self.fetch_results)
    }

    async fn fetch_by_range(
        &self,
        start: VerseId,
        end: VerseId,
        page: Page,
    ) -> Result<Vec<Verse>, StoreError> {
        self.record(RecordedCall::FetchByRange { start, end, page });
        Self::take(&self.fetch_results)
    }

    async fn phrase_search(
        &self,
        text: &str,
        scope: &SearchScope,
        page: Page,
    ) -> Result<Vec<Verse>, StoreError> {
        self.record(RecordedCall::PhraseSearch {
            text: text.to_string(),
            scope: scope.clone(),
            page,
        });
        Self::take(&self.phrase_results)
    }

    async fn word_search(
        &self,
        text: &str,
        scope: &SearchScope,
        page: Page,
    ) -> Result<Vec<Verse>, StoreError> {
        self.record(RecordedCall::WordSearch {
            text: text.to_string(),
            scope: scope.clone(),
            page,
        });
        Self::take(&self.word_results)
    }

    async fn insert(&self, verses: Vec<Verse>) -> Result<(), StoreError> {
        self.record(RecordedCall::Insert {
            count: verses.len(),
        });
        let mut queue = self.insert_results.lock().unwrap();
        if queue.is_empty() {
            Ok(())
        } else {
            queue.remove(0)
        }
    }
}
