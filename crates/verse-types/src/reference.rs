//! Chapter references and verse ranges.
//!
//! [`Reference`] is a start/end address pair; [`Reference::verse_ids`]
//! expands it into the complete ordered address sequence it spans, walking
//! chapter and book boundaries against the catalog.

use serde::{Deserialize, Serialize};

use crate::books::BookName;
use crate::catalog::{self, Book};
use crate::error::VerseError;
use crate::verse_id::VerseId;

/// A reference to one chapter of one book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterRef {
    book: BookName,
    chapter: u32,
}

impl ChapterRef {
    /// Creates a chapter reference, validating the chapter number against
    /// the catalog.
    pub fn new(book: BookName, chapter: u32) -> Result<ChapterRef, VerseError> {
        if catalog::book(book).verse_count(chapter).is_none() {
            return Err(VerseError::OutOfRange {
                book: book.number(),
                chapter,
                verse: 1,
            });
        }
        Ok(ChapterRef { book, chapter })
    }

    pub fn book_name(&self) -> BookName {
        self.book
    }

    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    /// The catalog entry for this chapter's book.
    pub fn book(&self) -> &'static Book {
        catalog::book(self.book)
    }

    /// Number of verses in this chapter.
    pub fn verse_count(&self) -> u32 {
        // Invariant: the chapter was validated at construction.
        self.book().verse_count(self.chapter).unwrap_or(0)
    }

    /// The first address of the chapter.
    pub fn first_verse(&self) -> VerseId {
        VerseId::new_unchecked(self.book.number(), self.chapter, 1)
    }

    /// The last address of the chapter.
    pub fn last_verse(&self) -> VerseId {
        VerseId::new_unchecked(self.book.number(), self.chapter, self.verse_count())
    }

    /// The address of one verse within the chapter.
    pub fn verse_id(&self, verse: u32) -> Result<VerseId, VerseError> {
        VerseId::new(self.book.number(), self.chapter, verse)
    }

    /// The complete canonical address sequence of the chapter.
    pub fn verse_ids(&self) -> Vec<VerseId> {
        self.book().chapter_verse_ids(self.chapter).unwrap_or_default()
    }
}

/// An inclusive range of verse addresses.
///
/// The pair is not required to be ordered at construction; call [`fixup`]
/// before operations that assume `from <= to`.
///
/// [`fixup`]: Reference::fixup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub from: VerseId,
    pub to: VerseId,
}

impl Reference {
    pub fn new(from: VerseId, to: VerseId) -> Reference {
        Reference { from, to }
    }

    /// A reference spanning a whole book.
    pub fn for_book(book: BookName) -> Reference {
        let entry = catalog::book(book);
        Reference::new(entry.first_verse(), entry.last_verse())
    }

    /// A reference spanning a whole chapter.
    pub fn for_chapter(chapter: ChapterRef) -> Reference {
        Reference::new(chapter.first_verse(), chapter.last_verse())
    }

    /// True when `from <= to`.
    pub fn is_ordered(&self) -> bool {
        self.from <= self.to
    }

    /// Returns a reference with `from <= to`, swapping the endpoints if
    /// necessary. Idempotent.
    pub fn fixup(self) -> Reference {
        if self.is_ordered() {
            self
        } else {
            Reference {
                from: self.to,
                to: self.from,
            }
        }
    }

    /// Expands the range into the complete ordered address sequence it
    /// spans, inclusive of both endpoints.
    ///
    /// Assumes `from <= to`; callers holding user input should [`fixup`]
    /// first. Expanding a misordered pair yields an empty sequence.
    ///
    /// [`fixup`]: Reference::fixup
    pub fn verse_ids(&self) -> Vec<VerseId> {
        debug_assert!(self.is_ordered(), "expanded a misordered reference");
        if !self.is_ordered() {
            return Vec::new();
        }

        let mut ids = Vec::new();
        for book_number in self.from.book_number()..=self.to.book_number() {
            let book = match catalog::book_by_number(book_number) {
                Some(book) => book,
                None => break,
            };

            let first_chapter = if book_number == self.from.book_number() {
                self.from.chapter()
            } else {
                1
            };
            let last_chapter = if book_number == self.to.book_number() {
                self.to.chapter()
            } else {
                book.total_chapters()
            };

            for chapter in first_chapter..=last_chapter {
                let verse_count = match book.verse_count(chapter) {
                    Some(count) => count,
                    None => break,
                };
                let first_verse = if book_number == self.from.book_number()
                    && chapter == self.from.chapter()
                {
                    self.from.verse()
                } else {
                    1
                };
                let last_verse =
                    if book_number == self.to.book_number() && chapter == self.to.chapter() {
                        self.to.verse()
                    } else {
                        verse_count
                    };

                for verse in first_verse..=last_verse {
                    ids.push(VerseId::new_unchecked(book_number, chapter, verse));
                }
            }
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn id(raw: &str) -> VerseId {
        raw.parse().unwrap()
    }

    fn reference(from: &str, to: &str) -> Reference {
        Reference::new(id(from), id(to))
    }

    #[test]
    fn chapter_ref_bounds() {
        let genesis_1 = ChapterRef::new(BookName::Genesis, 1).unwrap();
        assert_eq!(genesis_1.verse_count(), 31);
        assert_eq!(genesis_1.first_verse(), id("1:1:1"));
        assert_eq!(genesis_1.last_verse(), id("1:1:31"));
        assert_eq!(genesis_1.verse_ids().len(), 31);

        assert!(ChapterRef::new(BookName::Genesis, 51).is_err());
        assert!(ChapterRef::new(BookName::Genesis, 0).is_err());
    }

    #[test]
    fn expand_single_chapter() {
        let ids = reference("1:1:1", "1:1:3").verse_ids();
        assert_eq!(ids, vec![id("1:1:1"), id("1:1:2"), id("1:1:3")]);
    }

    #[test]
    fn expand_degenerate_range() {
        assert_eq!(reference("19:23:6", "19:23:6").verse_ids(), vec![id("19:23:6")]);
    }

    #[test]
    fn expand_across_chapters() {
        // Genesis 1:30 through 3:3: tail of chapter 1, all of chapter 2,
        // head of chapter 3.
        let ids = reference("1:1:30", "1:3:3").verse_ids();

        let mut expected = vec![id("1:1:30"), id("1:1:31")];
        expected.extend(catalog::book(BookName::Genesis).chapter_verse_ids(2).unwrap());
        expected.extend([id("1:3:1"), id("1:3:2"), id("1:3:3")]);

        assert_eq!(ids, expected);
    }

    #[test]
    fn expand_across_books() {
        // Genesis 50:25 through Leviticus 1:3 covers all of Exodus.
        let ids = reference("1:50:25", "3:1:3").verse_ids();

        let mut expected = vec![id("1:50:25"), id("1:50:26")];
        expected.extend(catalog::book(BookName::Exodus).verse_ids());
        expected.extend([id("3:1:1"), id("3:1:2"), id("3:1:3")]);

        assert_eq!(ids, expected);
    }

    #[test]
    fn expand_to_corpus_end() {
        // 3 John 1:13 through Revelation 22:21 covers Jude and Revelation.
        let ids = reference("64:1:13", "66:22:21").verse_ids();

        let mut expected = vec![id("64:1:13"), id("64:1:14")];
        expected.extend(catalog::book(BookName::Jude).verse_ids());
        expected.extend(catalog::book(BookName::Revelation).verse_ids());

        assert_eq!(ids, expected);
    }

    #[test]
    fn expand_entire_corpus() {
        let ids = Reference::new(VerseId::FIRST, VerseId::LAST).verse_ids();
        assert_eq!(ids.len(), 31_102);
        assert_eq!(ids.first(), Some(&VerseId::FIRST));
        assert_eq!(ids.last(), Some(&VerseId::LAST));

        // No gaps, no duplicates: each id is the successor of the previous.
        for pair in ids.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
        }
    }

    #[test]
    fn fixup_swaps_misordered_endpoints() {
        let swapped = reference("3:1:3", "1:1:1").fixup();
        assert_eq!(swapped.from, id("1:1:1"));
        assert_eq!(swapped.to, id("3:1:3"));
    }

    #[test]
    fn fixup_is_idempotent() {
        let ordered = reference("1:1:1", "3:1:3");
        assert_eq!(ordered.fixup(), ordered);

        let misordered = reference("3:1:3", "1:1:1");
        assert_eq!(misordered.fixup().fixup(), misordered.fixup());
    }

    #[test]
    fn whole_book_and_chapter_references() {
        let genesis = Reference::for_book(BookName::Genesis);
        assert_eq!(genesis.from, id("1:1:1"));
        assert_eq!(genesis.to, id("1:50:26"));

        let psalm_23 = Reference::for_chapter(ChapterRef::new(BookName::Psalms, 23).unwrap());
        assert_eq!(psalm_23.from, id("19:23:1"));
        assert_eq!(psalm_23.to, id("19:23:6"));
    }
}
