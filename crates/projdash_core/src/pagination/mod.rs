//! Fixed-page-size pagination over filtered lists.
//!
//! # Responsibility
//! - Slice an ordered list into pages of a fixed size.
//! - Track the current page of one list page and guard page changes.
//!
//! # Invariants
//! - Pages are 1-based; `total_pages(0) == 0`.
//! - Concatenating pages `1..=total_pages` reproduces the list exactly.
//! - User page changes outside `1..=total_pages` are rejected.
//! - After the list shrinks, `clamp_to` never leaves the cursor past the
//!   last non-empty page.

use log::debug;
use std::num::NonZeroUsize;

/// Page size shared by every listing page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

/// `ceil(count / page_size)`.
pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get())
}

/// Items of 1-based `page`, clipped to the list bounds.
///
/// Page `0` and pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let size = page_size.get();
    let start = (page - 1).saturating_mul(size).min(items.len());
    let end = page.saturating_mul(size).min(items.len());
    &items[start..end]
}

/// Current-page cursor for one list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: NonZeroUsize,
    current_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// Starts on page 1.
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.page_size)
    }

    /// Items of 1-based `page` within `items`.
    pub fn page<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        page_slice(items, page, self.page_size)
    }

    /// Items of the current page within `items`.
    pub fn current<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        self.page(items, self.current_page)
    }

    /// User-driven page change. Returns `false` and keeps the cursor when
    /// `page` is outside `1..=total_pages(count)`.
    pub fn go_to(&mut self, page: usize, count: usize) -> bool {
        if page == 0 || page > self.total_pages(count) {
            debug!(
                "event=page_change module=pagination status=rejected requested={} total_pages={}",
                page,
                self.total_pages(count)
            );
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next(&mut self, count: usize) -> bool {
        self.go_to(self.current_page + 1, count)
    }

    pub fn previous(&mut self, count: usize) -> bool {
        self.go_to(self.current_page.saturating_sub(1), count)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, count: usize) -> bool {
        self.current_page < self.total_pages(count)
    }

    /// Pulls the cursor back after the list shrank.
    ///
    /// Lands on the last page, or on page 1 when the list is empty. Returns
    /// whether the cursor moved.
    pub fn clamp_to(&mut self, count: usize) -> bool {
        let last = self.total_pages(count).max(1);
        if self.current_page <= last {
            return false;
        }
        debug!(
            "event=page_clamp module=pagination status=ok from={} to={}",
            self.current_page, last
        );
        self.current_page = last;
        true
    }

    /// Back to page 1, e.g. when a different list is shown.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// 1-based inclusive item range of the current page ("showing X-Y of N").
    ///
    /// `None` when the current page holds no items.
    pub fn range(&self, count: usize) -> Option<(usize, usize)> {
        if self.current_page == 0 {
            return None;
        }
        let size = self.page_size.get();
        let first = (self.current_page - 1).saturating_mul(size) + 1;
        if first > count {
            return None;
        }
        let last = self.current_page.saturating_mul(size).min(count);
        Some((first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::{page_slice, total_pages, Paginator, DEFAULT_PAGE_SIZE};
    use std::num::NonZeroUsize;

    fn size(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).unwrap()
    }

    #[test]
    fn total_pages_rounds_up_and_is_zero_for_empty() {
        assert_eq!(total_pages(0, DEFAULT_PAGE_SIZE), 0);
        assert_eq!(total_pages(1, DEFAULT_PAGE_SIZE), 1);
        assert_eq!(total_pages(10, DEFAULT_PAGE_SIZE), 1);
        assert_eq!(total_pages(11, DEFAULT_PAGE_SIZE), 2);
        assert_eq!(total_pages(25, DEFAULT_PAGE_SIZE), 3);
    }

    #[test]
    fn page_slice_clips_to_bounds() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(page_slice(&items, 3, DEFAULT_PAGE_SIZE), &[21, 22, 23, 24, 25]);
        assert!(page_slice(&items, 4, DEFAULT_PAGE_SIZE).is_empty());
        assert!(page_slice(&items, 0, DEFAULT_PAGE_SIZE).is_empty());
        assert_eq!(page_slice(&items, 1, size(4)), &[1, 2, 3, 4]);
    }

    #[test]
    fn go_to_rejects_out_of_range_pages() {
        let mut paginator = Paginator::default();
        assert!(!paginator.go_to(0, 25));
        assert!(!paginator.go_to(4, 25));
        assert_eq!(paginator.current_page(), 1);
        assert!(paginator.go_to(3, 25));
        assert_eq!(paginator.current_page(), 3);
        assert!(!paginator.next(25));
        assert!(paginator.previous(25));
        assert_eq!(paginator.current_page(), 2);
    }

    #[test]
    fn previous_on_first_page_is_rejected() {
        let mut paginator = Paginator::default();
        assert!(!paginator.previous(25));
        assert_eq!(paginator.current_page(), 1);
        assert!(!paginator.has_previous());
        assert!(paginator.has_next(25));
    }

    #[test]
    fn clamp_pulls_back_to_last_page_or_first() {
        let mut paginator = Paginator::default();
        assert!(paginator.go_to(2, 15));

        assert!(paginator.clamp_to(8));
        assert_eq!(paginator.current_page(), 1);
        assert!(!paginator.clamp_to(8));

        assert!(paginator.go_to(1, 8));
        assert!(!paginator.clamp_to(0));
        assert_eq!(paginator.current_page(), 1);
    }

    #[test]
    fn range_reports_one_based_bounds() {
        let mut paginator = Paginator::default();
        assert_eq!(paginator.range(0), None);
        assert_eq!(paginator.range(7), Some((1, 7)));
        assert!(paginator.go_to(3, 25));
        assert_eq!(paginator.range(25), Some((21, 25)));
        assert_eq!(paginator.range(20), None);
    }
}
