//! Retrieval facade: catalog-aware fetches and ranked search in one place.
//!
//! [`VerseProvider`] is the crate most consumers should depend on. It wires
//! a [`verse_store::VerseStore`] backend and a
//! [`verse_search::SearchRanker`] behind one read API and re-exports the
//! domain types callers need to drive it.

pub mod error;
pub mod provider;

pub use error::RetrievalError;
pub use provider::VerseProvider;

pub use verse_store::{MemoryVerseStore, Page, StoreError, VerseStore};
pub use verse_types::{
    BookName, ChapterRef, Reference, SearchScope, Verse, VerseError, VerseId, VerseRange,
};
