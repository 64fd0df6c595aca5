//! # verse-types
//!
//! Shared domain types for the verse retrieval system.
//!
//! This crate defines the addressing core: the immutable book catalog, the
//! validated [`VerseId`] address, range expansion and compression, citation
//! formatting, and the [`SearchScope`] variants the retrieval layer
//! dispatches on. Everything here is pure, synchronous, and free of shared
//! mutable state.
//!
//! ## Modules
//!
//! - [`books`]: the canonical book table ([`BookName`])
//! - [`catalog`]: per-chapter verse counts and canonical sequences
//! - [`verse_id`]: validated addresses with total ordering and sort keys
//! - [`reference`]: chapter references and range expansion
//! - [`range`]: range compression and citation titles
//! - [`verse`]: text units and share formatting
//! - [`scope`]: search scope variants
//! - [`error`]: the unified [`VerseError`] type

pub mod books;
pub mod catalog;
pub mod error;
pub mod range;
pub mod reference;
pub mod scope;
pub mod verse;
pub mod verse_id;

pub use books::{BookName, ALL_BOOKS};
pub use catalog::Book;
pub use error::VerseError;
pub use range::VerseRange;
pub use reference::{ChapterRef, Reference};
pub use scope::SearchScope;
pub use verse::Verse;
pub use verse_id::VerseId;

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Expansion and compression are inverse for contiguous ranges.
    #[test]
    fn expand_then_compress_is_identity() {
        let cases = [
            ("1:1:1", "1:1:3"),
            ("1:1:30", "1:3:3"),
            ("19:23:1", "19:23:6"),
            ("66:21:1", "66:22:21"),
        ];

        for (from, to) in cases {
            let reference = Reference::new(from.parse().unwrap(), to.parse().unwrap());
            let expanded = reference.verse_ids();
            let ranges = VerseRange::compress(&expanded).unwrap();

            assert_eq!(ranges.len(), 1, "{from}..{to}");
            let run = ranges[0];
            assert_eq!(run.start_chapter, reference.from.chapter());
            assert_eq!(run.start_verse, reference.from.verse());
            assert_eq!(run.end_chapter, reference.to.chapter());
            assert_eq!(run.end_verse, reference.to.verse());
        }
    }

    /// The worked example from the share formatter: selection with three
    /// gaps, compressed and titled in one pass.
    #[test]
    fn citation_pipeline() {
        let ids: Vec<VerseId> = ["1:1:2", "1:1:4", "1:1:5", "1:1:6", "1:1:9", "1:1:14", "1:1:15"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        let ranges = VerseRange::compress(&ids).unwrap();
        assert_eq!(VerseRange::share_title(&ranges).unwrap(), "Genesis 1:2,4-6,9,14-15");
    }

    /// Total order over addresses is consistent with sort keys across the
    /// whole corpus boundary cases.
    #[test]
    fn order_and_key_agree() {
        let samples: Vec<VerseId> = ["1:1:1", "1:50:26", "2:1:1", "10:1:1", "19:119:176", "66:22:21"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        for a in &samples {
            for b in &samples {
                assert_eq!(a.cmp(b), a.sort_key().cmp(&b.sort_key()));
            }
        }
    }
}
