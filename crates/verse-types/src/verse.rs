//! A verse: an address paired with its text, plus share formatting.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::VerseError;
use crate::range::{sorted_single_book_selection, VerseRange};
use crate::verse_id::VerseId;

/// One unit of text with its address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verse {
    pub id: VerseId,
    pub text: String,
}

impl Verse {
    pub fn new(id: VerseId, text: impl Into<String>) -> Verse {
        Verse {
            id,
            text: text.into(),
        }
    }

    /// The verse's storage key, derived from its address.
    pub fn sort_key(&self) -> u64 {
        self.id.sort_key()
    }

    /// Formats a selection for sharing, one line per verse.
    ///
    /// Lines carry a `[verse]` bracket, widened to `[chapter:verse]` on the
    /// first verse after a chapter change so the citation stays unambiguous.
    /// A single-verse selection is emitted bare, with no bracket. The
    /// selection must be non-empty and single-book.
    pub fn share_verses_text(verses: &[Verse]) -> Result<Vec<String>, VerseError> {
        let sorted = sorted_selection(verses)?;

        if sorted.len() == 1 {
            return Ok(vec![sorted[0].text.clone()]);
        }

        let book = catalog::book(sorted[0].id.book_name());
        let mut running_chapter = sorted[0].id.chapter();
        let mut chapter_prefix_pending = false;
        let mut lines = Vec::with_capacity(sorted.len());

        for verse in &sorted {
            let chapter = verse.id.chapter();

            if chapter_prefix_pending || chapter != running_chapter {
                lines.push(format!("[{}:{}] {}", chapter, verse.id.verse(), verse.text));
            } else {
                lines.push(format!("[{}] {}", verse.id.verse(), verse.text));
            }

            if book.verse_count(chapter) == Some(verse.id.verse()) {
                // Chapter exhausted: the next emitted verse needs a chapter
                // marker, except at the end of the book where nothing can
                // follow within this selection.
                if book.total_chapters() != chapter {
                    chapter_prefix_pending = true;
                }
            } else {
                chapter_prefix_pending = false;
            }

            running_chapter = chapter;
        }

        Ok(lines)
    }

    /// Builds the complete share string: citation title, then the formatted
    /// verse lines joined by spaces.
    ///
    /// Example: `"Genesis 1:1-2 - [1] In the beginning... [2] And the earth..."`.
    pub fn share_text(verses: &[Verse]) -> Result<String, VerseError> {
        let ids: Vec<VerseId> = verses.iter().map(|v| v.id).collect();
        let title = VerseRange::share_title(&VerseRange::compress(&ids)?)?;
        let lines = Verse::share_verses_text(verses)?;
        Ok(format!("{} - {}", title, lines.join(" ")))
    }
}

/// Sorts a verse selection by address, enforcing non-empty single-book input.
fn sorted_selection(verses: &[Verse]) -> Result<Vec<Verse>, VerseError> {
    let ids: Vec<VerseId> = verses.iter().map(|v| v.id).collect();
    let sorted_ids = sorted_single_book_selection(&ids)?;

    let mut sorted = verses.to_vec();
    sorted.sort_by_key(Verse::sort_key);
    sorted.dedup_by_key(|v| v.id);
    debug_assert_eq!(sorted.len(), sorted_ids.len());
    Ok(sorted)
}
