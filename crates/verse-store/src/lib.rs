//! Storage contract and reference backend for verse retrieval.
//!
//! The [`VerseStore`] trait is the seam between the domain layers and
//! persistence: explicit-id and range fetches, phrase and word text search,
//! and bulk load. [`MemoryVerseStore`] is a deterministic in-memory backend;
//! [`MockVerseStore`] records calls for downstream tests.

pub mod error;
pub mod memory;
pub mod mock;
pub mod page;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryVerseStore;
pub use mock::{MockVerseStore, RecordedCall};
pub use page::Page;
pub use store::VerseStore;
