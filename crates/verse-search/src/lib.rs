//! Ranked text search over a verse store.
//!
//! [`SearchRanker`] merges the store's two text-match tiers into one ranked,
//! pageable sequence: exact phrase hits first, then every-word hits.

pub mod ranker;

pub use ranker::SearchRanker;
