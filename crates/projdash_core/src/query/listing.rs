//! List-page composition: filter, clamp, slice.
//!
//! # Invariants
//! - The page cursor is clamped against the filtered count before slicing,
//!   so a shrinking list never leaves the view on an empty trailing page.

use crate::pagination::Paginator;
use crate::search::filter::{filter_records, Searchable, TextQuery};
use crate::store::{EntityStore, Stored};

/// What one list page renders for the current store state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView<E> {
    /// Records on the current page, in list order.
    pub items: Vec<E>,
    /// Count after filtering.
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    /// 1-based inclusive bounds of `items` within the filtered list.
    pub range: Option<(usize, usize)>,
    pub has_previous: bool,
    pub has_next: bool,
    /// Whether a non-blank search narrowed the list.
    pub query_active: bool,
}

impl<E> ListingView<E> {
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

/// Paginates an already-filtered list.
pub fn paginate_listing<E: Clone>(
    filtered: &[E],
    query_active: bool,
    paginator: &mut Paginator,
) -> ListingView<E> {
    let total_items = filtered.len();
    paginator.clamp_to(total_items);

    ListingView {
        items: paginator.current(filtered).to_vec(),
        total_items,
        total_pages: paginator.total_pages(total_items),
        current_page: paginator.current_page(),
        range: paginator.range(total_items),
        has_previous: paginator.has_previous(),
        has_next: paginator.has_next(total_items),
        query_active,
    }
}

/// Filters `candidates` by `query`, then paginates the result.
pub fn build_listing<E: Searchable + Clone>(
    candidates: &[E],
    query: &str,
    paginator: &mut Paginator,
) -> ListingView<E> {
    let filtered = filter_records(candidates, query);
    paginate_listing(&filtered, !TextQuery::new(query).is_blank(), paginator)
}

impl EntityStore {
    /// Search-aware listing of every record of kind `E`.
    pub fn listing<E>(&self, query: &str, paginator: &mut Paginator) -> ListingView<E>
    where
        E: Stored + Searchable,
    {
        build_listing(&self.list::<E>(), query, paginator)
    }

    /// Listing for kinds without free-text search (tasks).
    pub fn unfiltered_listing<E: Stored>(&self, paginator: &mut Paginator) -> ListingView<E> {
        paginate_listing(&self.list::<E>(), false, paginator)
    }
}
