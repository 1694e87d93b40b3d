//! Page arithmetic for the interactive lists.

use std::ops::Range;

/// Tracks the current page over a list of `total` items.
///
/// There is always at least one page, even for an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    total: usize,
    page_size: usize,
    current: usize,
}

impl Pager {
    pub fn new(total: usize, page_size: usize) -> Self {
        Pager {
            total,
            page_size: page_size.max(1),
            current: 0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// 1-based page number for display.
    pub fn page_number(&self) -> usize {
        self.current + 1
    }

    /// Index range of the items on the current page.
    pub fn range(&self) -> Range<usize> {
        let start = (self.current * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.page_count()
    }

    pub fn has_prev(&self) -> bool {
        self.current > 0
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.current += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.current -= 1;
        }
    }

    /// Update the item count (e.g. after a delete), staying on the same
    /// page when it still exists.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.current = self.current.min(self.page_count() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_one_page() {
        let pager = Pager::new(0, 10);
        assert_eq!(pager.page_count(), 1);
        assert_eq!(pager.range(), 0..0);
        assert!(!pager.has_next());
        assert!(!pager.has_prev());
    }

    #[test]
    fn test_page_ranges() {
        let mut pager = Pager::new(25, 10);
        assert_eq!(pager.page_count(), 3);
        assert_eq!(pager.range(), 0..10);

        pager.next();
        assert_eq!(pager.page_number(), 2);
        assert_eq!(pager.range(), 10..20);

        pager.next();
        assert_eq!(pager.range(), 20..25);
        assert!(!pager.has_next());

        pager.next();
        assert_eq!(pager.page_number(), 3);

        pager.prev();
        pager.prev();
        pager.prev();
        assert_eq!(pager.page_number(), 1);
    }

    #[test]
    fn test_exact_multiple() {
        let pager = Pager::new(20, 10);
        assert_eq!(pager.page_count(), 2);
    }

    #[test]
    fn test_set_total_clamps_current_page() {
        let mut pager = Pager::new(21, 10);
        pager.next();
        pager.next();
        assert_eq!(pager.page_number(), 3);

        pager.set_total(20);
        assert_eq!(pager.page_number(), 2);
        assert_eq!(pager.range(), 10..20);

        pager.set_total(0);
        assert_eq!(pager.page_number(), 1);
        assert_eq!(pager.range(), 0..0);
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let pager = Pager::new(3, 0);
        assert_eq!(pager.page_count(), 3);
    }
}
