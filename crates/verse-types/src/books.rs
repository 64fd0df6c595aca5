//! The canonical book table.
//!
//! Books are identified by [`BookName`] and by their 1-based position in the
//! traditional ordering (Genesis = 1 through Revelation = 66). The names and
//! ordering are fixed at compile time and never change at runtime.

use serde::{Deserialize, Serialize};

/// The canonical books of the corpus in their traditional order.
///
/// The first 39 entries form the Old Testament, the remaining 27 the
/// New Testament. Discriminants are assigned in declaration order, so
/// `BookName::number()` is derived directly from the variant position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BookName {
    // Old Testament (1-39)
    Genesis,
    Exodus,
    Leviticus,
    Numbers,
    Deuteronomy,
    Joshua,
    Judges,
    Ruth,
    Samuel1,
    Samuel2,
    Kings1,
    Kings2,
    Chronicles1,
    Chronicles2,
    Ezra,
    Nehemiah,
    Esther,
    Job,
    Psalms,
    Proverbs,
    Ecclesiastes,
    SongOfSolomon,
    Isaiah,
    Jeremiah,
    Lamentations,
    Ezekiel,
    Daniel,
    Hosea,
    Joel,
    Amos,
    Obadiah,
    Jonah,
    Micah,
    Nahum,
    Habakkuk,
    Zephaniah,
    Haggai,
    Zechariah,
    Malachi,
    // New Testament (40-66)
    Matthew,
    Mark,
    Luke,
    John,
    Acts,
    Romans,
    Corinthians1,
    Corinthians2,
    Galatians,
    Ephesians,
    Philippians,
    Colossians,
    Thessalonians1,
    Thessalonians2,
    Timothy1,
    Timothy2,
    Titus,
    Philemon,
    Hebrews,
    James,
    Peter1,
    Peter2,
    John1,
    John2,
    John3,
    Jude,
    Revelation,
}

/// All books in canonical order.
pub const ALL_BOOKS: [BookName; 66] = [
    BookName::Genesis, BookName::Exodus, BookName::Leviticus,
    BookName::Numbers, BookName::Deuteronomy, BookName::Joshua,
    BookName::Judges, BookName::Ruth, BookName::Samuel1,
    BookName::Samuel2, BookName::Kings1, BookName::Kings2,
    BookName::Chronicles1, BookName::Chronicles2, BookName::Ezra,
    BookName::Nehemiah, BookName::Esther, BookName::Job,
    BookName::Psalms, BookName::Proverbs, BookName::Ecclesiastes,
    BookName::SongOfSolomon, BookName::Isaiah, BookName::Jeremiah,
    BookName::Lamentations, BookName::Ezekiel, BookName::Daniel,
    BookName::Hosea, BookName::Joel, BookName::Amos,
    BookName::Obadiah, BookName::Jonah, BookName::Micah,
    BookName::Nahum, BookName::Habakkuk, BookName::Zephaniah,
    BookName::Haggai, BookName::Zechariah, BookName::Malachi,
    BookName::Matthew, BookName::Mark, BookName::Luke,
    BookName::John, BookName::Acts, BookName::Romans,
    BookName::Corinthians1, BookName::Corinthians2, BookName::Galatians,
    BookName::Ephesians, BookName::Philippians, BookName::Colossians,
    BookName::Thessalonians1, BookName::Thessalonians2, BookName::Timothy1,
    BookName::Timothy2, BookName::Titus, BookName::Philemon,
    BookName::Hebrews, BookName::James, BookName::Peter1,
    BookName::Peter2, BookName::John1, BookName::John2,
    BookName::John3, BookName::Jude, BookName::Revelation,
];

impl BookName {
    /// Number of books in the corpus.
    pub const COUNT: usize = 66;

    /// The 1-based book number in canonical order.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Looks up a book by its 1-based number.
    pub fn from_number(number: u32) -> Option<BookName> {
        if (1..=Self::COUNT as u32).contains(&number) {
            Some(ALL_BOOKS[(number - 1) as usize])
        } else {
            None
        }
    }

    /// Looks up a book by its full display name (e.g. "1 Samuel").
    pub fn from_name(name: &str) -> Option<BookName> {
        ALL_BOOKS.iter().copied().find(|b| b.name() == name)
    }

    /// The full display name of the book.
    pub fn name(self) -> &'static str {
        match self {
            BookName::Genesis => "Genesis",
            BookName::Exodus => "Exodus",
            BookName::Leviticus => "Leviticus",
            BookName::Numbers => "Numbers",
            BookName::Deuteronomy => "Deuteronomy",
            BookName::Joshua => "Joshua",
            BookName::Judges => "Judges",
            BookName::Ruth => "Ruth",
            BookName::Samuel1 => "1 Samuel",
            BookName::Samuel2 => "2 Samuel",
            BookName::Kings1 => "1 Kings",
            BookName::Kings2 => "2 Kings",
            BookName::Chronicles1 => "1 Chronicles",
            BookName::Chronicles2 => "2 Chronicles",
            BookName::Ezra => "Ezra",
            BookName::Nehemiah => "Nehemiah",
            BookName::Esther => "Esther",
            BookName::Job => "Job",
            BookName::Psalms => "Psalms",
            BookName::Proverbs => "Proverbs",
            BookName::Ecclesiastes => "Ecclesiastes",
            BookName::SongOfSolomon => "Song of Solomon",
            BookName::Isaiah => "Isaiah",
            BookName::Jeremiah => "Jeremiah",
            BookName::Lamentations => "Lamentations",
            BookName::Ezekiel => "Ezekiel",
            BookName::Daniel => "Daniel",
            BookName::Hosea => "Hosea",
            BookName::Joel => "Joel",
            BookName::Amos => "Amos",
            BookName::Obadiah => "Obadiah",
            BookName::Jonah => "Jonah",
            BookName::Micah => "Micah",
            BookName::Nahum => "Nahum",
            BookName::Habakkuk => "Habakkuk",
            BookName::Zephaniah => "Zephaniah",
            BookName::Haggai => "Haggai",
            BookName::Zechariah => "Zechariah",
            BookName::Malachi => "Malachi",
            BookName::Matthew => "Matthew",
            BookName::Mark => "Mark",
            BookName::Luke => "Luke",
            BookName::John => "John",
            BookName::Acts => "Acts",
            BookName::Romans => "Romans",
            BookName::Corinthians1 => "1 Corinthians",
            BookName::Corinthians2 => "2 Corinthians",
            BookName::Galatians => "Galatians",
            BookName::Ephesians => "Ephesians",
            BookName::Philippians => "Philippians",
            BookName::Colossians => "Colossians",
            BookName::Thessalonians1 => "1 Thessalonians",
            BookName::Thessalonians2 => "2 Thessalonians",
            BookName::Timothy1 => "1 Timothy",
            BookName::Timothy2 => "2 Timothy",
            BookName::Titus => "Titus",
            BookName::Philemon => "Philemon",
            BookName::Hebrews => "Hebrews",
            BookName::James => "James",
            BookName::Peter1 => "1 Peter",
            BookName::Peter2 => "2 Peter",
            BookName::John1 => "1 John",
            BookName::John2 => "2 John",
            BookName::John3 => "3 John",
            BookName::Jude => "Jude",
            BookName::Revelation => "Revelation",
        }
    }

    /// The standardized abbreviation for the book.
    pub fn short_name(self) -> &'static str {
        match self {
            BookName::Genesis => "Gen",
            BookName::Exodus => "Exo",
            BookName::Leviticus => "Lev",
            BookName::Numbers => "Num",
            BookName::Deuteronomy => "Deu",
            BookName::Joshua => "Jos",
            BookName::Judges => "Judg",
            BookName::Ruth => "Rth",
            BookName::Samuel1 => "1Sa",
            BookName::Samuel2 => "2Sa",
            BookName::Kings1 => "1Ki",
            BookName::Kings2 => "2Ki",
            BookName::Chronicles1 => "1Ch",
            BookName::Chronicles2 => "2Ch",
            BookName::Ezra => "Eza",
            BookName::Nehemiah => "Neh",
            BookName::Esther => "Est",
            BookName::Job => "Job",
            BookName::Psalms => "Psa",
            BookName::Proverbs => "Pro",
            BookName::Ecclesiastes => "Ecc",
            BookName::SongOfSolomon => "SS",
            BookName::Isaiah => "Isa",
            BookName::Jeremiah => "Jer",
            BookName::Lamentations => "Lam",
            BookName::Ezekiel => "Eze",
            BookName::Daniel => "Dan",
            BookName::Hosea => "Hos",
            BookName::Joel => "Joe",
            BookName::Amos => "Amo",
            BookName::Obadiah => "Oba",
            BookName::Jonah => "Jon",
            BookName::Micah => "Mic",
            BookName::Nahum => "Nah",
            BookName::Habakkuk => "Hab",
            BookName::Zephaniah => "Zep",
            BookName::Haggai => "Hag",
            BookName::Zechariah => "Zec",
            BookName::Malachi => "Mal",
            BookName::Matthew => "Mat",
            BookName::Mark => "Mar",
            BookName::Luke => "Luk",
            BookName::John => "Joh",
            BookName::Acts => "Act",
            BookName::Romans => "Rom",
            BookName::Corinthians1 => "1Co",
            BookName::Corinthians2 => "2Co",
            BookName::Galatians => "Gal",
            BookName::Ephesians => "Eph",
            BookName::Philippians => "Phi",
            BookName::Colossians => "Col",
            BookName::Thessalonians1 => "1Th",
            BookName::Thessalonians2 => "2Th",
            BookName::Timothy1 => "1Ti",
            BookName::Timothy2 => "2Ti",
            BookName::Titus => "Tit",
            BookName::Philemon => "Phm",
            BookName::Hebrews => "Heb",
            BookName::James => "Jam",
            BookName::Peter1 => "1Pe",
            BookName::Peter2 => "2Pe",
            BookName::John1 => "1Jo",
            BookName::John2 => "2Jo",
            BookName::John3 => "3Jo",
            BookName::Jude => "Jud",
            BookName::Revelation => "Rev",
        }
    }

    /// True for Genesis through Malachi.
    pub fn is_old_testament(self) -> bool {
        self.number() <= 39
    }

    /// True for Matthew through Revelation.
    pub fn is_new_testament(self) -> bool {
        !self.is_old_testament()
    }
}

impl std::fmt::Display for BookName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
