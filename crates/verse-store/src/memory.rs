//! In-memory reference backend.
//!
//! Keeps the whole corpus in a `BTreeMap` keyed by address sort key, with a
//! token list per verse for text matching. Deterministic and snapshot-
//! consistent, which makes it the backend of choice for tests and small
//! embedded corpora.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use verse_types::{SearchScope, Verse, VerseId};

use crate::error::StoreError;
use crate::page::Page;
use crate::store::VerseStore;

struct StoredVerse {
    verse: Verse,
    tokens: Vec<String>,
}

/// A deterministic in-memory [`VerseStore`].
///
/// Word relevance is plain term frequency (total occurrences of the query
/// words), with ascending address order as the tiebreak.
#[derive(Default)]
pub struct MemoryVerseStore {
    verses: RwLock<BTreeMap<u64, StoredVerse>>,
}

impl MemoryVerseStore {
    pub fn new() -> MemoryVerseStore {
        MemoryVerseStore::default()
    }

    /// Creates a store pre-loaded with the given verses.
    pub async fn with_verses(verses: Vec<Verse>) -> Result<MemoryVerseStore, StoreError> {
        let store = MemoryVerseStore::new();
        store.insert(verses).await?;
        Ok(store)
    }

    /// Number of stored verses.
    pub async fn len(&self) -> usize {
        self.verses.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.verses.read().await.is_empty()
    }
}

/// Lowercase alphanumeric tokenization; everything else is a separator.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scope membership test, precomputed once per query.
enum ScopeFilter {
    All,
    Ids(HashSet<VerseId>),
    Range(u64, u64),
}

impl ScopeFilter {
    fn new(scope: &SearchScope) -> ScopeFilter {
        match scope {
            SearchScope::All => ScopeFilter::All,
            SearchScope::Ids(ids) => ScopeFilter::Ids(ids.iter().copied().collect()),
            SearchScope::Range(reference) => {
                let fixed = reference.fixup();
                ScopeFilter::Range(fixed.from.sort_key(), fixed.to.sort_key())
            }
        }
    }

    fn contains(&self, id: VerseId) -> bool {
        match self {
            ScopeFilter::All => true,
            ScopeFilter::Ids(ids) => ids.contains(&id),
            ScopeFilter::Range(start, end) => (*start..=*end).contains(&id.sort_key()),
        }
    }
}

/// True when `needle` occurs as a contiguous token run inside `haystack`.
fn contains_phrase(haystack: &[String], needle: &[String]) -> bool {
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[async_trait]
impl VerseStore for MemoryVerseStore {
    async fn fetch_by_ids(&self, ids: &[VerseId], page: Page) -> Result<Vec<Verse>, StoreError> {
        let verses = self.verses.read().await;
        let found: Vec<Verse> = ids
            .iter()
            .filter_map(|id| verses.get(&id.sort_key()))
            .map(|stored| stored.verse.clone())
            .collect();
        Ok(page.apply(found))
    }

    async fn fetch_by_range(
        &self,
        start: VerseId,
        end: VerseId,
        page: Page,
    ) -> Result<Vec<Verse>, StoreError> {
        // Misordered endpoints select nothing, matching BETWEEN semantics.
        if start > end {
            return Ok(Vec::new());
        }
        let verses = self.verses.read().await;
        let found: Vec<Verse> = verses
            .range(start.sort_key()..=end.sort_key())
            .map(|(_, stored)| stored.verse.clone())
            .collect();
        Ok(page.apply(found))
    }

    async fn phrase_search(
        &self,
        text: &str,
        scope: &SearchScope,
        page: Page,
    ) -> Result<Vec<Verse>, StoreError> {
        let query = tokenize(text);
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let filter = ScopeFilter::new(scope);

        let verses = self.verses.read().await;
        let matches: Vec<Verse> = verses
            .values()
            .filter(|stored| filter.contains(stored.verse.id))
            .filter(|stored| contains_phrase(&stored.tokens, &query))
            .map(|stored| stored.verse.clone())
            .collect();

        debug!(query = text, matches = matches.len(), "phrase search");
        Ok(page.apply(matches))
    }

    async fn word_search(
        &self,
        text: &str,
        scope: &SearchScope,
        page: Page,
    ) -> Result<Vec<Verse>, StoreError> {
        let query: HashSet<String> = tokenize(text).into_iter().collect();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let filter = ScopeFilter::new(scope);

        let verses = self.verses.read().await;
        let mut scored: Vec<(usize, u64, Verse)> = Vec::new();
        for stored in verses.values() {
            if !filter.contains(stored.verse.id) {
                continue;
            }
            let all_present = query
                .iter()
                .all(|word| stored.tokens.iter().any(|t| t == word));
            if !all_present {
                continue;
            }
            let frequency = stored
                .tokens
                .iter()
                .filter(|t| query.contains(t.as_str()))
                .count();
            scored.push((frequency, stored.verse.sort_key(), stored.verse.clone()));
        }

        // Relevance order: term frequency descending, address ascending.
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        debug!(query = text, matches = scored.len(), "word search");
        Ok(page.apply(scored.into_iter().map(|(_, _, v)| v).collect()))
    }

    async fn insert(&self, new_verses: Vec<Verse>) -> Result<(), StoreError> {
        let mut verses = self.verses.write().await;
        for verse in new_verses {
            let tokens = tokenize(&verse.text);
            verses.insert(verse.sort_key(), StoredVerse { verse, tokens });
        }
        Ok(())
    }
}
