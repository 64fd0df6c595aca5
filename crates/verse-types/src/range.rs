//! Range compression: collapsing an address set into maximal contiguous runs.
//!
//! A [`VerseRange`] is the compressed form of one gap-free run of addresses.
//! [`VerseRange::compress`] turns an arbitrary single-book selection into the
//! minimal ordered list of such runs, and [`VerseRange::share_title`] renders
//! a run list as a citation string ("Genesis 1:2,4-6,9,14-15").

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::books::BookName;
use crate::catalog;
use crate::error::VerseError;
use crate::reference::Reference;
use crate::verse_id::VerseId;

/// One maximal run of consecutive addresses, closed on both ends.
///
/// Runs never span books: compression is defined per book and cross-book
/// input is rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRange {
    pub start_book: u32,
    pub end_book: u32,
    pub start_chapter: u32,
    pub end_chapter: u32,
    pub start_verse: u32,
    pub end_verse: u32,
}

impl VerseRange {
    fn single(id: VerseId) -> VerseRange {
        VerseRange {
            start_book: id.book_number(),
            end_book: id.book_number(),
            start_chapter: id.chapter(),
            end_chapter: id.chapter(),
            start_verse: id.verse(),
            end_verse: id.verse(),
        }
    }

    /// True when the run covers exactly one verse.
    pub fn is_single_verse(&self) -> bool {
        self.start_chapter == self.end_chapter && self.start_verse == self.end_verse
    }

    /// Compresses an address selection into minimal contiguous runs, in
    /// ascending order.
    ///
    /// The selection may arrive unsorted and with duplicates, but must stay
    /// within one book; [`VerseError::CrossBookSelection`] reports the first
    /// offending pair. Empty input is [`VerseError::EmptySelection`].
    pub fn compress(ids: &[VerseId]) -> Result<Vec<VerseRange>, VerseError> {
        let selection = sorted_single_book_selection(ids)?;

        if selection.len() == 1 {
            return Ok(vec![VerseRange::single(selection[0])]);
        }

        let first = selection[0];
        let book = catalog::book(first.book_name());

        // Canonical sequence from the first selected address to the end of
        // the book; the walk stops early once the worklist is drained.
        let canonical = Reference::new(first, book.last_verse()).verse_ids();
        let mut pending: VecDeque<VerseId> = selection.into();

        let mut runs = Vec::new();
        let mut open: Option<VerseRange> = None;

        for id in canonical {
            if pending.front() == Some(&id) {
                pending.pop_front();
                let run = open.get_or_insert_with(|| VerseRange::single(id));
                run.end_chapter = id.chapter();
                run.end_verse = id.verse();
            } else if pending.is_empty() {
                break;
            } else if let Some(run) = open.take() {
                runs.push(run);
            }
        }
        if let Some(run) = open {
            runs.push(run);
        }

        Ok(runs)
    }

    /// Formats a run list as a citation title, e.g. `"Genesis 1:2,4-6,9,14-15"`.
    ///
    /// All runs must belong to the same book, in the order produced by
    /// [`compress`].
    ///
    /// [`compress`]: VerseRange::compress
    pub fn share_title(ranges: &[VerseRange]) -> Result<String, VerseError> {
        let first = ranges.first().ok_or(VerseError::EmptySelection)?;
        let book = BookName::from_number(first.start_book).ok_or(VerseError::OutOfRange {
            book: first.start_book,
            chapter: first.start_chapter,
            verse: first.start_verse,
        })?;

        let mut segments = Vec::with_capacity(ranges.len());
        let mut running_chapter = first.start_chapter;

        for range in ranges {
            if range.start_book != range.end_book || range.start_book != first.start_book {
                let second = BookName::from_number(range.end_book).unwrap_or(book);
                return Err(VerseError::CrossBookSelection {
                    first: book,
                    second,
                });
            }

            let segment = if range.start_chapter == range.end_chapter {
                let chapter_prefix = if range.start_chapter != running_chapter {
                    format!("{}:", range.start_chapter)
                } else {
                    String::new()
                };
                if range.is_single_verse() {
                    format!("{chapter_prefix}{}", range.start_verse)
                } else {
                    format!("{chapter_prefix}{}-{}", range.start_verse, range.end_verse)
                }
            } else {
                // A run crossing chapters always starts in the running
                // chapter, so only the end side needs a chapter marker.
                format!(
                    "{}-{}:{}",
                    range.start_verse, range.end_chapter, range.end_verse
                )
            };

            segments.push(segment);
            running_chapter = range.end_chapter;
        }

        Ok(format!(
            "{} {}:{}",
            book,
            first.start_chapter,
            segments.join(",")
        ))
    }
}

/// Sorts and deduplicates a selection, enforcing non-empty single-book input.
pub(crate) fn sorted_single_book_selection(ids: &[VerseId]) -> Result<Vec<VerseId>, VerseError> {
    if ids.is_empty() {
        return Err(VerseError::EmptySelection);
    }

    let mut sorted = ids.to_vec();
    sorted.sort();
    sorted.dedup();

    let first = sorted[0];
    if let Some(stray) = sorted.iter().find(|id| id.book_number() != first.book_number()) {
        return Err(VerseError::CrossBookSelection {
            first: first.book_name(),
            second: stray.book_name(),
        });
    }

    Ok(sorted)
}
