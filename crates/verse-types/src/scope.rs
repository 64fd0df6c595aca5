//! Search scope: the subset of the corpus an operation is constrained to.

use serde::{Deserialize, Serialize};

use crate::reference::Reference;
use crate::verse_id::VerseId;

/// Where a search looks.
///
/// Dispatched exhaustively by the store and the retrieval layer; adding a
/// variant is a breaking change by design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchScope {
    /// The whole corpus.
    All,
    /// An explicit address list; may be unsorted and non-contiguous.
    Ids(Vec<VerseId>),
    /// An inclusive address range.
    Range(Reference),
}

impl SearchScope {
    /// True when an address falls inside the scope.
    pub fn contains(&self, id: VerseId) -> bool {
        match self {
            SearchScope::All => true,
            SearchScope::Ids(ids) => ids.contains(&id),
            SearchScope::Range(reference) => reference.from <= id && id <= reference.to,
        }
    }
}

impl Default for SearchScope {
    fn default() -> Self {
        SearchScope::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> VerseId {
        raw.parse().unwrap()
    }

    #[test]
    fn containment() {
        assert!(SearchScope::All.contains(id("1:1:1")));

        let ids = SearchScope::Ids(vec![id("1:1:3"), id("1:1:1")]);
        assert!(ids.contains(id("1:1:1")));
        assert!(!ids.contains(id("1:1:2")));

        let range = SearchScope::Range(Reference::new(id("1:1:2"), id("1:1:4")));
        assert!(range.contains(id("1:1:3")));
        assert!(range.contains(id("1:1:2")));
        assert!(range.contains(id("1:1:4")));
        assert!(!range.contains(id("1:1:5")));
    }
}
