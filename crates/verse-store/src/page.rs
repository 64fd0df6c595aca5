//! Pagination window applied to result sequences.

use serde::{Deserialize, Serialize};

/// A limit/offset window.
///
/// The default window returns everything: limit is `usize::MAX` and offset
/// is zero. A negative offset means "no skip" and is treated as zero, so
/// callers can pass a sentinel through without pre-clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub limit: usize,
    pub offset: i64,
}

impl Page {
    /// The whole sequence: no limit, no skip.
    pub fn all() -> Page {
        Page {
            limit: usize::MAX,
            offset: 0,
        }
    }

    pub fn new(limit: usize, offset: i64) -> Page {
        Page { limit, offset }
    }

    pub fn with_limit(mut self, limit: usize) -> Page {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Page {
        self.offset = offset;
        self
    }

    /// Number of leading items to skip; negative offsets clamp to zero.
    pub fn skip(&self) -> usize {
        self.offset.max(0) as usize
    }

    /// Applies the window to an already-ordered sequence.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.skip())
            .take(self.limit)
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_returns_everything() {
        let page = Page::default();
        assert_eq!(page.apply(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn negative_offset_means_no_skip() {
        let page = Page::new(usize::MAX, -42);
        assert_eq!(page.skip(), 0);
        assert_eq!(page.apply(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn window_slices_the_sequence() {
        let page = Page::new(2, 1);
        assert_eq!(page.apply(vec![1, 2, 3, 4]), vec![2, 3]);
    }

    #[test]
    fn oversized_limit_returns_remainder() {
        let page = Page::new(100, 3);
        assert_eq!(page.apply(vec![1, 2, 3, 4]), vec![4]);
    }

    #[test]
    fn offset_past_end_is_empty() {
        let page = Page::new(10, 99);
        assert_eq!(page.apply(vec![1, 2, 3]), Vec::<i32>::new());
    }
}
