//! The versification catalog: per-chapter verse counts for every book.
//!
//! This is the authority every address is validated against. The tables are
//! compile-time constants in KJV versification (31,102 verses across 1,189
//! chapters) and the catalog is read-only for the life of the process.

use crate::books::{BookName, ALL_BOOKS};
use crate::verse_id::VerseId;

const GENESIS: &[u16] = &[31, 25, 24, 26, 32, 22, 24, 22, 29, 32, 32, 20, 18, 24, 21, 16, 27, 33, 38, 18, 34, 24, 20, 67, 34, 35, 46, 22, 35, 43, 55, 32, 20, 31, 29, 43, 36, 30, 23, 23, 57, 38, 34, 34, 28, 34, 31, 22, 33, 26];
const EXODUS: &[u16] = &[22, 25, 22, 31, 23, 30, 25, 32, 35, 29, 10, 51, 22, 31, 27, 36, 16, 27, 25, 26, 36, 31, 33, 18, 40, 37, 21, 43, 46, 38, 18, 35, 23, 35, 35, 38, 29, 31, 43, 38];
const LEVITICUS: &[u16] = &[17, 16, 17, 35, 19, 30, 38, 36, 24, 20, 47, 8, 59, 57, 33, 34, 16, 30, 37, 27, 24, 33, 44, 23, 55, 46, 34];
const NUMBERS: &[u16] = &[54, 34, 51, 49, 31, 27, 89, 26, 23, 36, 35, 16, 33, 45, 41, 50, 13, 32, 22, 29, 35, 41, 30, 25, 18, 65, 23, 31, 40, 16, 54, 42, 56, 29, 34, 13];
const DEUTERONOMY: &[u16] = &[46, 37, 29, 49, 33, 25, 26, 20, 29, 22, 32, 32, 18, 29, 23, 22, 20, 22, 21, 20, 23, 30, 25, 22, 19, 19, 26, 68, 29, 20, 30, 52, 29, 12];
const JOSHUA: &[u16] = &[18, 24, 17, 24, 15, 27, 26, 35, 27, 43, 23, 24, 33, 15, 63, 10, 18, 28, 51, 9, 45, 34, 16, 33];
const JUDGES: &[u16] = &[36, 23, 31, 24, 31, 40, 25, 35, 57, 18, 40, 15, 25, 20, 20, 31, 13, 31, 30, 48, 25];
const RUTH: &[u16] = &[22, 23, 18, 22];
const SAMUEL1: &[u16] = &[28, 36, 21, 22, 12, 21, 17, 22, 27, 27, 15, 25, 23, 52, 35, 23, 58, 30, 24, 42, 15, 23, 29, 22, 44, 25, 12, 25, 11, 31, 13];
const SAMUEL2: &[u16] = &[27, 32, 39, 12, 25, 23, 29, 18, 13, 19, 27, 31, 39, 33, 37, 23, 29, 33, 43, 26, 22, 51, 39, 25];
const KINGS1: &[u16] = &[53, 46, 28, 34, 18, 38, 51, 66, 28, 29, 43, 33, 34, 31, 34, 34, 24, 46, 21, 43, 29, 53];
const KINGS2: &[u16] = &[18, 25, 27, 44, 27, 33, 20, 29, 37, 36, 21, 21, 25, 29, 38, 20, 41, 37, 37, 21, 26, 20, 37, 20, 30];
const CHRONICLES1: &[u16] = &[54, 55, 24, 43, 26, 81, 40, 40, 44, 14, 47, 40, 14, 17, 29, 43, 27, 17, 19, 8, 30, 19, 32, 31, 31, 32, 34, 21, 30];
const CHRONICLES2: &[u16] = &[17, 18, 17, 22, 14, 42, 22, 18, 31, 19, 23, 16, 22, 15, 19, 14, 19, 34, 11, 37, 20, 12, 21, 27, 28, 23, 9, 27, 36, 27, 21, 33, 25, 33, 27, 23];
const EZRA: &[u16] = &[11, 70, 13, 24, 17, 22, 28, 36, 15, 44];
const NEHEMIAH: &[u16] = &[11, 20, 32, 23, 19, 19, 73, 18, 38, 39, 36, 47, 31];
const ESTHER: &[u16] = &[22, 23, 15, 17, 14, 14, 10, 17, 32, 3];
const JOB: &[u16] = &[22, 13, 26, 21, 27, 30, 21, 22, 35, 22, 20, 25, 28, 22, 35, 22, 16, 21, 29, 29, 34, 30, 17, 25, 6, 14, 23, 28, 25, 31, 40, 22, 33, 37, 16, 33, 24, 41, 30, 24, 34, 17];
const PSALMS: &[u16] = &[6, 12, 8, 8, 12, 10, 17, 9, 20, 18, 7, 8, 6, 7, 5, 11, 15, 50, 14, 9, 13, 31, 6, 10, 22, 12, 14, 9, 11, 12, 24, 11, 22, 22, 28, 12, 40, 22, 13, 17, 13, 11, 5, 26, 17, 11, 9, 14, 20, 23, 19, 9, 6, 7, 23, 13, 11, 11, 17, 12, 8, 12, 11, 10, 13, 20, 7, 35, 36, 5, 24, 20, 28, 23, 10, 12, 20, 72, 13, 19, 16, 8, 18, 12, 13, 17, 7, 18, 52, 17, 16, 15, 5, 23, 11, 13, 12, 9, 9, 5, 8, 28, 22, 35, 45, 48, 43, 13, 31, 7, 10, 10, 9, 8, 18, 19, 2, 29, 176, 7, 8, 9, 4, 8, 5, 6, 5, 6, 8, 8, 3, 18, 3, 3, 21, 26, 9, 8, 24, 13, 10, 7, 12, 15, 21, 10, 20, 14, 9, 6];
const PROVERBS: &[u16] = &[33, 22, 35, 27, 23, 35, 27, 36, 18, 32, 31, 28, 25, 35, 33, 33, 28, 24, 29, 30, 31, 29, 35, 34, 28, 28, 27, 28, 27, 33, 31];
const ECCLESIASTES: &[u16] = &[18, 26, 22, 16, 20, 12, 29, 17, 18, 20, 10, 14];
const SONG_OF_SOLOMON: &[u16] = &[17, 17, 11, 16, 16, 13, 13, 14];
const ISAIAH: &[u16] = &[31, 22, 26, 6, 30, 13, 25, 22, 21, 34, 16, 6, 22, 32, 9, 14, 14, 7, 25, 6, 17, 25, 18, 23, 12, 21, 13, 29, 24, 33, 9, 20, 24, 17, 10, 22, 38, 22, 8, 31, 29, 25, 28, 28, 25, 13, 15, 22, 26, 11, 23, 15, 12, 17, 13, 12, 21, 14, 21, 22, 11, 12, 19, 12, 25, 24];
const JEREMIAH: &[u16] = &[19, 37, 25, 31, 31, 30, 34, 22, 26, 25, 23, 17, 27, 22, 21, 21, 27, 23, 15, 18, 14, 30, 40, 10, 38, 24, 22, 17, 32, 24, 40, 44, 26, 22, 19, 32, 21, 28, 18, 16, 18, 22, 13, 30, 5, 28, 7, 47, 39, 46, 64, 34];
const LAMENTATIONS: &[u16] = &[22, 22, 66, 22, 22];
const EZEKIEL: &[u16] = &[28, 10, 27, 17, 17, 14, 27, 18, 11, 22, 25, 28, 23, 23, 8, 63, 24, 32, 14, 49, 32, 31, 49, 27, 17, 21, 36, 26, 21, 26, 18, 32, 33, 31, 15, 38, 28, 23, 29, 49, 26, 20, 27, 31, 25, 24, 23, 35];
const DANIEL: &[u16] = &[21, 49, 30, 37, 31, 28, 28, 27, 27, 21, 45, 13];
const HOSEA: &[u16] = &[11, 23, 5, 19, 15, 11, 16, 14, 17, 15, 12, 14, 16, 9];
const JOEL: &[u16] = &[20, 32, 21];
const AMOS: &[u16] = &[15, 16, 15, 13, 27, 14, 17, 14, 15];
const OBADIAH: &[u16] = &[21];
const JONAH: &[u16] = &[17, 10, 10, 11];
const MICAH: &[u16] = &[16, 13, 12, 13, 15, 16, 20];
const NAHUM: &[u16] = &[15, 13, 19];
const HABAKKUK: &[u16] = &[17, 20, 19];
const ZEPHANIAH: &[u16] = &[18, 15, 20];
const HAGGAI: &[u16] = &[15, 23];
const ZECHARIAH: &[u16] = &[21, 13, 10, 14, 11, 15, 14, 23, 17, 12, 17, 14, 9, 21];
const MALACHI: &[u16] = &[14, 17, 18, 6];
const MATTHEW: &[u16] = &[25, 23, 17, 25, 48, 34, 29, 34, 38, 42, 30, 50, 58, 36, 39, 28, 27, 35, 30, 34, 46, 46, 39, 51, 46, 75, 66, 20];
const MARK: &[u16] = &[45, 28, 35, 41, 43, 56, 37, 38, 50, 52, 33, 44, 37, 72, 47, 20];
const LUKE: &[u16] = &[80, 52, 38, 44, 39, 49, 50, 56, 62, 42, 54, 59, 35, 35, 32, 31, 37, 43, 48, 47, 38, 71, 56, 53];
const JOHN: &[u16] = &[51, 25, 36, 54, 47, 71, 53, 59, 41, 42, 57, 50, 38, 31, 27, 33, 26, 40, 42, 31, 25];
const ACTS: &[u16] = &[26, 47, 26, 37, 42, 15, 60, 40, 43, 48, 30, 25, 52, 28, 41, 40, 34, 28, 41, 38, 40, 30, 35, 27, 27, 32, 44, 31];
const ROMANS: &[u16] = &[32, 29, 31, 25, 21, 23, 25, 39, 33, 21, 36, 21, 14, 23, 33, 27];
const CORINTHIANS1: &[u16] = &[31, 16, 23, 21, 13, 20, 40, 13, 27, 33, 34, 31, 13, 40, 58, 24];
const CORINTHIANS2: &[u16] = &[24, 17, 18, 18, 21, 18, 16, 24, 15, 18, 33, 21, 14];
const GALATIANS: &[u16] = &[24, 21, 29, 31, 26, 18];
const EPHESIANS: &[u16] = &[23, 22, 21, 32, 33, 24];
const PHILIPPIANS: &[u16] = &[30, 30, 21, 23];
const COLOSSIANS: &[u16] = &[29, 23, 25, 18];
const THESSALONIANS1: &[u16] = &[10, 20, 13, 18, 28];
const THESSALONIANS2: &[u16] = &[12, 17, 18];
const TIMOTHY1: &[u16] = &[20, 15, 16, 16, 25, 21];
const TIMOTHY2: &[u16] = &[18, 26, 17, 22];
const TITUS: &[u16] = &[16, 15, 15];
const PHILEMON: &[u16] = &[25];
const HEBREWS: &[u16] = &[14, 18, 19, 16, 14, 20, 28, 13, 28, 39, 40, 29, 25];
const JAMES: &[u16] = &[27, 26, 18, 17, 20];
const PETER1: &[u16] = &[25, 25, 22, 19, 14];
const PETER2: &[u16] = &[21, 22, 18];
const JOHN1: &[u16] = &[10, 29, 24, 21, 21];
const JOHN2: &[u16] = &[13];
const JOHN3: &[u16] = &[14];
const JUDE: &[u16] = &[25];
const REVELATION: &[u16] = &[20, 29, 22, 11, 14, 17, 17, 13, 21, 11, 19, 17, 18, 20, 8, 21, 18, 24, 21, 15, 27, 21];

/// One book of the catalog: its name plus the verse count of each chapter.
#[derive(Debug, Clone, Copy)]
pub struct Book {
    name: BookName,
    chapters: &'static [u16],
}

impl Book {
    pub fn name(&self) -> BookName {
        self.name
    }

    /// The 1-based book number in canonical order.
    pub fn number(&self) -> u32 {
        self.name.number()
    }

    /// Total number of chapters in this book.
    pub fn total_chapters(&self) -> u32 {
        self.chapters.len() as u32
    }

    /// Verse count of the given 1-based chapter, or `None` if the chapter
    /// does not exist.
    pub fn verse_count(&self, chapter: u32) -> Option<u32> {
        if chapter == 0 {
            return None;
        }
        self.chapters.get(chapter as usize - 1).map(|&v| v as u32)
    }

    /// Total number of verses across all chapters.
    pub fn total_verses(&self) -> u32 {
        self.chapters.iter().map(|&v| v as u32).sum()
    }

    /// The first address of the book (chapter 1, verse 1).
    pub fn first_verse(&self) -> VerseId {
        VerseId::new_unchecked(self.number(), 1, 1)
    }

    /// The last address of the book (last verse of the last chapter).
    pub fn last_verse(&self) -> VerseId {
        let chapter = self.total_chapters();
        VerseId::new_unchecked(self.number(), chapter, self.chapters[chapter as usize - 1] as u32)
    }

    /// The complete canonical address sequence of the book, in order.
    pub fn verse_ids(&self) -> Vec<VerseId> {
        let book = self.number();
        let mut ids = Vec::with_capacity(self.total_verses() as usize);
        for (idx, &count) in self.chapters.iter().enumerate() {
            let chapter = idx as u32 + 1;
            for verse in 1..=count as u32 {
                ids.push(VerseId::new_unchecked(book, chapter, verse));
            }
        }
        ids
    }

    /// The canonical address sequence of one chapter, in order.
    pub fn chapter_verse_ids(&self, chapter: u32) -> Option<Vec<VerseId>> {
        let count = self.verse_count(chapter)?;
        let book = self.number();
        Some((1..=count).map(|v| VerseId::new_unchecked(book, chapter, v)).collect())
    }
}

/// The full catalog, indexed by book position.
static CATALOG: [Book; 66] = [
    Book { name: BookName::Genesis, chapters: GENESIS },
    Book { name: BookName::Exodus, chapters: EXODUS },
    Book { name: BookName::Leviticus, chapters: LEVITICUS },
    Book { name: BookName::Numbers, chapters: NUMBERS },
    Book { name: BookName::Deuteronomy, chapters: DEUTERONOMY },
    Book { name: BookName::Joshua, chapters: JOSHUA },
    Book { name: BookName::Judges, chapters: JUDGES },
    Book { name: BookName::Ruth, chapters: RUTH },
    Book { name: BookName::Samuel1, chapters: SAMUEL1 },
    Book { name: BookName::Samuel2, chapters: SAMUEL2 },
    Book { name: BookName::Kings1, chapters: KINGS1 },
    Book { name: BookName::Kings2, chapters: KINGS2 },
    Book { name: BookName::Chronicles1, chapters: CHRONICLES1 },
    Book { name: BookName::Chronicles2, chapters: CHRONICLES2 },
    Book { name: BookName::Ezra, chapters: EZRA },
    Book { name: BookName::Nehemiah, chapters: NEHEMIAH },
    Book { name: BookName::Esther, chapters: ESTHER },
    Book { name: BookName::Job, chapters: JOB },
    Book { name: BookName::Psalms, chapters: PSALMS },
    Book { name: BookName::Proverbs, chapters: PROVERBS },
    Book { name: BookName::Ecclesiastes, chapters: ECCLESIASTES },
    Book { name: BookName::SongOfSolomon, chapters: SONG_OF_SOLOMON },
    Book { name: BookName::Isaiah, chapters: ISAIAH },
    Book { name: BookName::Jeremiah, chapters: JEREMIAH },
    Book { name: BookName::Lamentations, chapters: LAMENTATIONS },
    Book { name: BookName::Ezekiel, chapters: EZEKIEL },
    Book { name: BookName::Daniel, chapters: DANIEL },
    Book { name: BookName::Hosea, chapters: HOSEA },
    Book { name: BookName::Joel, chapters: JOEL },
    Book { name: BookName::Amos, chapters: AMOS },
    Book { name: BookName::Obadiah, chapters: OBADIAH },
    Book { name: BookName::Jonah, chapters: JONAH },
    Book { name: BookName::Micah, chapters: MICAH },
    Book { name: BookName::Nahum, chapters: NAHUM },
    Book { name: BookName::Habakkuk, chapters: HABAKKUK },
    Book { name: BookName::Zephaniah, chapters: ZEPHANIAH },
    Book { name: BookName::Haggai, chapters: HAGGAI },
    Book { name: BookName::Zechariah, chapters: ZECHARIAH },
    Book { name: BookName::Malachi, chapters: MALACHI },
    Book { name: BookName::Matthew, chapters: MATTHEW },
    Book { name: BookName::Mark, chapters: MARK },
    Book { name: BookName::Luke, chapters: LUKE },
    Book { name: BookName::John, chapters: JOHN },
    Book { name: BookName::Acts, chapters: ACTS },
    Book { name: BookName::Romans, chapters: ROMANS },
    Book { name: BookName::Corinthians1, chapters: CORINTHIANS1 },
    Book { name: BookName::Corinthians2, chapters: CORINTHIANS2 },
    Book { name: BookName::Galatians, chapters: GALATIANS },
    Book { name: BookName::Ephesians, chapters: EPHESIANS },
    Book { name: BookName::Philippians, chapters: PHILIPPIANS },
    Book { name: BookName::Colossians, chapters: COLOSSIANS },
    Book { name: BookName::Thessalonians1, chapters: THESSALONIANS1 },
    Book { name: BookName::Thessalonians2, chapters: THESSALONIANS2 },
    Book { name: BookName::Timothy1, chapters: TIMOTHY1 },
    Book { name: BookName::Timothy2, chapters: TIMOTHY2 },
    Book { name: BookName::Titus, chapters: TITUS },
    Book { name: BookName::Philemon, chapters: PHILEMON },
    Book { name: BookName::Hebrews, chapters: HEBREWS },
    Book { name: BookName::James, chapters: JAMES },
    Book { name: BookName::Peter1, chapters: PETER1 },
    Book { name: BookName::Peter2, chapters: PETER2 },
    Book { name: BookName::John1, chapters: JOHN1 },
    Book { name: BookName::John2, chapters: JOHN2 },
    Book { name: BookName::John3, chapters: JOHN3 },
    Book { name: BookName::Jude, chapters: JUDE },
    Book { name: BookName::Revelation, chapters: REVELATION },
];

/// Looks up the catalog entry for a book.
pub fn book(name: BookName) -> &'static Book {
    &CATALOG[name.number() as usize - 1]
}

/// Looks up a catalog entry by its 1-based book number.
pub fn book_by_number(number: u32) -> Option<&'static Book> {
    BookName::from_number(number).map(book)
}

/// Total number of verses in the corpus.
pub fn total_verses() -> u32 {
    CATALOG.iter().map(Book::total_verses).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_chapter_has_a_verse_count() {
        for name in ALL_BOOKS {
            let book = book(name);
            assert_eq!(book.chapters.len() as u32, book.total_chapters());
            assert!(book.chapters.iter().all(|&v| v > 0));
        }
    }

    #[test]
    fn corpus_totals() {
        assert_eq!(CATALOG.len(), 66);
        assert_eq!(total_verses(), 31_102);
        assert_eq!(
            CATALOG.iter().map(|b| b.total_chapters()).sum::<u32>(),
            1_189
        );
    }

    #[test]
    fn per_book_totals() {
        // (book, chapters, verses) spot checks across both testaments.
        let cases = [
            (BookName::Genesis, 50, 1_533),
            (BookName::Exodus, 40, 1_213),
            (BookName::Leviticus, 27, 859),
            (BookName::Numbers, 36, 1_288),
            (BookName::Deuteronomy, 34, 959),
            (BookName::Ruth, 4, 85),
            (BookName::Samuel1, 31, 810),
            (BookName::Kings2, 25, 719),
            (BookName::Esther, 10, 167),
            (BookName::Job, 42, 1_070),
            (BookName::Psalms, 150, 2_461),
            (BookName::Proverbs, 31, 915),
            (BookName::SongOfSolomon, 8, 117),
            (BookName::Isaiah, 66, 1_292),
            (BookName::Jeremiah, 52, 1_364),
            (BookName::Ezekiel, 48, 1_273),
            (BookName::Obadiah, 1, 21),
            (BookName::Malachi, 4, 55),
            (BookName::Matthew, 28, 1_071),
            (BookName::Mark, 16, 678),
            (BookName::Luke, 24, 1_151),
            (BookName::John, 21, 879),
            (BookName::Acts, 28, 1_007),
            (BookName::Romans, 16, 433),
            (BookName::Corinthians1, 16, 437),
            (BookName::Philemon, 1, 25),
            (BookName::John2, 1, 13),
            (BookName::John3, 1, 14),
            (BookName::Jude, 1, 25),
            (BookName::Revelation, 22, 404),
        ];

        for (name, chapters, verses) in cases {
            let book = book(name);
            assert_eq!(book.total_chapters(), chapters, "{name}");
            assert_eq!(book.total_verses(), verses, "{name}");
        }
    }

    #[test]
    fn genesis_bounds() {
        let genesis = book(BookName::Genesis);
        assert_eq!(genesis.verse_count(1), Some(31));
        assert_eq!(genesis.verse_count(50), Some(26));
        assert_eq!(genesis.verse_count(51), None);
        assert_eq!(genesis.verse_count(0), None);
        assert_eq!(genesis.first_verse().to_string(), "1:1:1");
        assert_eq!(genesis.last_verse().to_string(), "1:50:26");
        assert_eq!(genesis.verse_ids().len(), 1_533);
        assert_eq!(genesis.chapter_verse_ids(1).map(|v| v.len()), Some(31));
    }

    #[test]
    fn revelation_bounds() {
        let revelation = book(BookName::Revelation);
        assert_eq!(revelation.last_verse().to_string(), "66:22:21");
    }
}
