//! Fully-qualified verse addresses.
//!
//! A [`VerseId`] is a validated `(book, chapter, verse)` coordinate with the
//! canonical string form `"book:chapter:verse"` ("1:1:1" is Genesis 1:1).
//! Every constructor validates against the catalog, so a `VerseId` in hand is
//! always addressable.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::books::BookName;
use crate::catalog;
use crate::error::VerseError;

/// A validated address for one verse of the corpus.
///
/// Ordering is numeric over (book, chapter, verse), so "10:1:1" sorts after
/// "2:1:1" even though the strings would not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VerseId {
    book: u16,
    chapter: u16,
    verse: u16,
}

impl VerseId {
    /// The first address of the corpus (Genesis 1:1).
    pub const FIRST: VerseId = VerseId {
        book: 1,
        chapter: 1,
        verse: 1,
    };

    /// The last address of the corpus (Revelation 22:21).
    pub const LAST: VerseId = VerseId {
        book: 66,
        chapter: 22,
        verse: 21,
    };

    /// Creates an address, validating every component against the catalog.
    pub fn new(book: u32, chapter: u32, verse: u32) -> Result<VerseId, VerseError> {
        let out_of_range = VerseError::OutOfRange {
            book,
            chapter,
            verse,
        };

        let entry = catalog::book_by_number(book).ok_or_else(|| out_of_range.clone())?;
        let verse_count = entry.verse_count(chapter).ok_or_else(|| out_of_range.clone())?;
        if verse == 0 || verse > verse_count {
            return Err(out_of_range);
        }

        Ok(VerseId {
            book: book as u16,
            chapter: chapter as u16,
            verse: verse as u16,
        })
    }

    /// Constructs an address from components already known to be valid.
    ///
    /// Only for use with catalog-derived components; going through this with
    /// unvalidated input breaks the type's invariant.
    pub(crate) fn new_unchecked(book: u32, chapter: u32, verse: u32) -> VerseId {
        debug_assert!(
            catalog::book_by_number(book)
                .and_then(|b| b.verse_count(chapter))
                .is_some_and(|count| (1..=count).contains(&verse)),
            "unchecked verse id {book}:{chapter}:{verse} is not in the catalog"
        );
        VerseId {
            book: book as u16,
            chapter: chapter as u16,
            verse: verse as u16,
        }
    }

    /// The 1-based book number.
    pub fn book_number(&self) -> u32 {
        self.book as u32
    }

    /// The book this address belongs to.
    pub fn book_name(&self) -> BookName {
        // Invariant: book is always a valid 1-based catalog index.
        BookName::from_number(self.book as u32).unwrap_or(BookName::Genesis)
    }

    /// The 1-based chapter number within the book.
    pub fn chapter(&self) -> u32 {
        self.chapter as u32
    }

    /// The 1-based verse number within the chapter.
    pub fn verse(&self) -> u32 {
        self.verse as u32
    }

    /// The integer sort key, which doubles as the physical storage id.
    ///
    /// The durable format is the book number unpadded, followed by chapter
    /// and verse each zero-padded to three digits, read as one integer:
    /// "19:119:176" becomes 19_119_176. Catalog validation guarantees chapter
    /// and verse fit in three digits, so the arithmetic below produces
    /// exactly the padded-string value.
    pub fn sort_key(&self) -> u64 {
        self.book as u64 * 1_000_000 + self.chapter as u64 * 1_000 + self.verse as u64
    }

    /// The `"chapter:verse"` portion of the reference.
    pub fn chapter_verse(&self) -> String {
        format!("{}:{}", self.chapter, self.verse)
    }

    /// Human-readable citation form, e.g. `"Genesis 1:1"`.
    pub fn book_chapter_verse(&self) -> String {
        format!("{} {}", self.book_name(), self.chapter_verse())
    }

    /// The next address in canonical order, or `None` at the end of the
    /// corpus. Steps across chapter and book boundaries.
    pub fn next(&self) -> Option<VerseId> {
        let entry = catalog::book_by_number(self.book as u32)?;
        let verse_count = entry.verse_count(self.chapter as u32)?;

        if (self.verse as u32) < verse_count {
            return Some(VerseId::new_unchecked(
                self.book as u32,
                self.chapter as u32,
                self.verse as u32 + 1,
            ));
        }
        if (self.chapter as u32) < entry.total_chapters() {
            return Some(VerseId::new_unchecked(
                self.book as u32,
                self.chapter as u32 + 1,
                1,
            ));
        }
        catalog::book_by_number(self.book as u32 + 1).map(|next| next.first_verse())
    }
}

impl FromStr for VerseId {
    type Err = VerseError;

    fn from_str(s: &str) -> Result<VerseId, VerseError> {
        let invalid = || VerseError::InvalidFormat {
            value: s.to_string(),
        };

        let mut components = [0u32; 3];
        let mut count = 0;
        for part in s.split(':') {
            if count == 3 {
                return Err(invalid());
            }
            // Zero components are structurally integers; `new` reports them
            // as out of range rather than as a format error.
            let number: u32 = part.parse().map_err(|_| invalid())?;
            components[count] = number;
            count += 1;
        }
        if count != 3 {
            return Err(invalid());
        }

        VerseId::new(components[0], components[1], components[2])
    }
}

impl fmt::Display for VerseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.book, self.chapter, self.verse)
    }
}

impl Serialize for VerseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VerseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<VerseId, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trip() {
        for raw in ["1:1:1", "19:119:176", "66:22:21"] {
            let id: VerseId = raw.parse().unwrap();
            assert_eq!(id.to_string(), raw);
            assert_eq!(raw.parse::<VerseId>().unwrap(), id);
        }
    }

    #[test]
    fn constants() {
        assert_eq!(VerseId::FIRST.to_string(), "1:1:1");
        assert_eq!(VerseId::LAST.to_string(), "66:22:21");
        assert_eq!(VerseId::LAST.next(), None);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for raw in ["", "1", "1:1", "1:1:1:1", "a:1:1", "1:b:1", "1:1:", "1.1.1", "-1:1:1"] {
            assert!(
                matches!(raw.parse::<VerseId>(), Err(VerseError::InvalidFormat { .. })),
                "expected format error for {raw:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_out_of_range() {
        for raw in ["0:1:1", "1:0:1", "1:1:0", "67:1:1", "1:51:1", "1:1:32", "66:23:1", "66:22:22"] {
            assert!(
                matches!(raw.parse::<VerseId>(), Err(VerseError::OutOfRange { .. })),
                "expected range error for {raw:?}"
            );
        }
    }

    #[test]
    fn ordering_is_numeric_not_lexical() {
        let genesis: VerseId = "1:1:1".parse().unwrap();
        let exodus: VerseId = "2:1:1".parse().unwrap();
        let samuel2: VerseId = "10:1:1".parse().unwrap();
        let kings1: VerseId = "11:1:1".parse().unwrap();
        let revelation: VerseId = "66:1:1".parse().unwrap();

        assert!(genesis < exodus);
        assert!(exodus < samuel2, "book 2 must sort before book 10");
        assert!(samuel2 < kings1);
        assert!(kings1 < revelation);

        let ch1: VerseId = "1:1:2".parse().unwrap();
        let ch2: VerseId = "1:2:1".parse().unwrap();
        assert!(genesis < ch1);
        assert!(ch1 < ch2);
    }

    #[test]
    fn sort_key_matches_padded_string_form() {
        let cases = [
            ("1:1:1", 1_001_001),
            ("1:50:26", 1_050_026),
            ("19:119:176", 19_119_176),
            ("66:22:21", 66_022_021),
        ];
        for (raw, expected) in cases {
            let id: VerseId = raw.parse().unwrap();
            assert_eq!(id.sort_key(), expected);

            // The key is literally the padded concatenation of components.
            let padded = format!(
                "{}{:03}{:03}",
                id.book_number(),
                id.chapter(),
                id.verse()
            );
            assert_eq!(id.sort_key(), padded.parse::<u64>().unwrap());
        }
    }

    #[test]
    fn sort_key_is_monotone_in_address_order() {
        let mut previous = VerseId::FIRST;
        let mut current = VerseId::FIRST.next();
        let mut walked = 1u32;
        while let Some(id) = current {
            assert!(previous < id);
            assert!(previous.sort_key() < id.sort_key());
            previous = id;
            current = id.next();
            walked += 1;
        }
        assert_eq!(walked, 31_102);
    }

    #[test]
    fn citation_forms() {
        let cases = [
            ("1:1:1", "Genesis 1:1"),
            ("19:23:6", "Psalms 23:6"),
            ("66:22:21", "Revelation 22:21"),
        ];
        for (raw, expected) in cases {
            let id: VerseId = raw.parse().unwrap();
            assert_eq!(id.book_chapter_verse(), expected);
        }
    }

    #[test]
    fn next_steps_over_boundaries() {
        let end_of_chapter: VerseId = "1:1:31".parse().unwrap();
        assert_eq!(end_of_chapter.next().unwrap().to_string(), "1:2:1");

        let end_of_book: VerseId = "1:50:26".parse().unwrap();
        assert_eq!(end_of_book.next().unwrap().to_string(), "2:1:1");
    }

    #[test]
    fn serde_uses_canonical_string_form() {
        let id: VerseId = "19:23:6".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"19:23:6\"");
        let back: VerseId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<VerseId>("\"67:1:1\"").is_err());
    }
}
