// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Pagination`] controller and its [`PageInfo`] snapshot.

use core::ops::{Range, RangeInclusive};

use crate::config::{DEFAULT_PER_PAGE, PagingConfig};
use crate::error::PaginationError;
use crate::math::{clamp_page, page_bounds, total_pages};

/// Page navigation state over a collection of `total_items` elements.
///
/// The only stored state is the item count, the page size, and the one-based
/// current page. Everything else is derived on read, so changing the item
/// count or page size is immediately reflected by every accessor.
///
/// Navigation ([`set_page`](Self::set_page), [`next_page`](Self::next_page),
/// [`prev_page`](Self::prev_page), ...) always leaves the current page inside
/// `1..=total_pages`. Changing the item count or page size does **not**
/// re-clamp the current page; call [`clamp_current_page`](Self::clamp_current_page)
/// when the collection shrinks if that is the desired behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pagination {
    total_items: usize,
    per_page: usize,
    current_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, DEFAULT_PER_PAGE)
    }
}

impl Pagination {
    /// Creates a pagination starting on page 1.
    ///
    /// A `per_page` of `0` is clamped to `1`.
    #[must_use]
    pub fn new(total_items: usize, per_page: usize) -> Self {
        Self::with_initial_page(total_items, per_page, 1)
    }

    /// Creates a pagination starting on `initial_page`, clamped to `1..=total_pages`.
    #[must_use]
    pub fn with_initial_page(total_items: usize, per_page: usize, initial_page: usize) -> Self {
        if per_page == 0 {
            log::debug!("page size 0 clamped to 1");
        }
        let mut pagination = Self {
            total_items,
            per_page: per_page.max(1),
            current_page: 1,
        };
        pagination.set_page(initial_page);
        pagination
    }

    /// Creates a pagination from a [`PagingConfig`].
    #[must_use]
    pub fn with_config(total_items: usize, config: &PagingConfig) -> Self {
        Self::with_initial_page(total_items, config.per_page, config.initial_page)
    }

    /// Strict constructor that rejects inputs the clamping constructors would adjust.
    ///
    /// # Errors
    ///
    /// - [`PaginationError::ZeroPageSize`] if `per_page` is `0`.
    /// - [`PaginationError::PageOutOfRange`] if `initial_page` is not in `1..=total_pages`.
    pub fn try_new(
        total_items: usize,
        per_page: usize,
        initial_page: usize,
    ) -> Result<Self, PaginationError> {
        if per_page == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        let mut pagination = Self::new(total_items, per_page);
        pagination.try_set_page(initial_page)?;
        Ok(pagination)
    }

    /// Number of items being paginated.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Items per page (always at least 1).
    #[must_use]
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// The one-based current page.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages, never less than one.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.per_page)
    }

    /// Index of the first item on the current page.
    ///
    /// If the current page has fallen out of range after the collection shrank,
    /// this can be greater than [`end_index`](Self::end_index); use
    /// [`page_range`](Self::page_range) for a range that is always valid.
    #[must_use]
    pub fn start_index(&self) -> usize {
        (self.current_page - 1).saturating_mul(self.per_page)
    }

    /// One past the index of the last item on the current page, capped at `total_items`.
    #[must_use]
    pub fn end_index(&self) -> usize {
        self.start_index()
            .saturating_add(self.per_page)
            .min(self.total_items)
    }

    /// Number of items on the current page.
    #[must_use]
    pub fn items_on_current_page(&self) -> usize {
        self.end_index().saturating_sub(self.start_index())
    }

    /// Returns `true` if there is a page after the current one.
    #[must_use]
    pub fn can_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Returns `true` if there is a page before the current one.
    #[must_use]
    pub fn can_prev_page(&self) -> bool {
        self.current_page > 1
    }

    /// Returns `true` if the current page is within `1..=total_pages`.
    ///
    /// This only becomes `false` after [`set_total_items`](Self::set_total_items)
    /// or [`set_per_page`](Self::set_per_page) shrink the page count.
    #[must_use]
    pub fn is_current_page_in_range(&self) -> bool {
        self.current_page <= self.total_pages()
    }

    /// Moves to `page`, clamped to `1..=total_pages`.
    pub fn set_page(&mut self, page: usize) {
        let total_pages = self.total_pages();
        let clamped = clamp_page(page, total_pages);
        if clamped != page {
            log::debug!("page {page} clamped to {clamped} of {total_pages}");
        }
        self.current_page = clamped;
    }

    /// Moves to `page` only if it is within `1..=total_pages`.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::PageOutOfRange`] and leaves the current page
    /// unchanged if `page` is out of range.
    pub fn try_set_page(&mut self, page: usize) -> Result<(), PaginationError> {
        let total_pages = self.total_pages();
        if !(1..=total_pages).contains(&page) {
            return Err(PaginationError::PageOutOfRange { page, total_pages });
        }
        self.current_page = page;
        Ok(())
    }

    /// Advances one page. Does nothing on the last page.
    ///
    /// Returns `true` if the page changed.
    pub fn next_page(&mut self) -> bool {
        if !self.can_next_page() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Goes back one page. Does nothing on the first page.
    ///
    /// Returns `true` if the page changed.
    pub fn prev_page(&mut self) -> bool {
        if !self.can_prev_page() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Jumps to the first page.
    pub fn first_page(&mut self) {
        self.current_page = 1;
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self) {
        self.current_page = self.total_pages();
    }

    /// Updates the item count without re-clamping the current page.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
    }

    /// Updates the page size (`0` is clamped to `1`) without re-clamping the current page.
    pub fn set_per_page(&mut self, per_page: usize) {
        if per_page == 0 {
            log::debug!("page size 0 clamped to 1");
        }
        self.per_page = per_page.max(1);
    }

    /// Pulls the current page back into `1..=total_pages`.
    ///
    /// Returns `true` if the page changed.
    pub fn clamp_current_page(&mut self) -> bool {
        let clamped = clamp_page(self.current_page, self.total_pages());
        let changed = clamped != self.current_page;
        self.current_page = clamped;
        changed
    }

    /// Half-open item range of the current page.
    ///
    /// Unlike [`start_index`](Self::start_index)..[`end_index`](Self::end_index),
    /// this is always a valid range: an out-of-range page yields an empty range
    /// at `total_items`.
    #[must_use]
    pub fn page_range(&self) -> Range<usize> {
        self.page_range_of(self.current_page)
    }

    /// Half-open item range of an arbitrary one-based `page`.
    #[must_use]
    pub fn page_range_of(&self, page: usize) -> Range<usize> {
        page_bounds(self.total_items, self.per_page, page)
    }

    /// The current page's items out of `items`.
    ///
    /// The range is additionally bounded by `items.len()`, so a stale
    /// `total_items` never causes an out-of-bounds slice.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.page_range();
        let end = range.end.min(items.len());
        &items[range.start.min(end)..end]
    }

    /// One-based page that holds the item at `index`, or `None` if `index >= total_items`.
    #[must_use]
    pub fn page_of_index(&self, index: usize) -> Option<usize> {
        (index < self.total_items).then(|| index / self.per_page + 1)
    }

    /// A window of at most `max_visible` page numbers around the current page.
    ///
    /// The window is kept inside `1..=total_pages` and centered on the current
    /// page where possible, for "1 2 [3] 4 5" style navigators. A
    /// `max_visible` of `0` is treated as `1`.
    ///
    /// ```rust
    /// use stillwater_paging::Pagination;
    ///
    /// let mut pages = Pagination::with_initial_page(200, 10, 10);
    /// assert_eq!(pages.page_numbers(5), 8..=12);
    ///
    /// pages.first_page();
    /// assert_eq!(pages.page_numbers(5), 1..=5);
    ///
    /// pages.last_page();
    /// assert_eq!(pages.page_numbers(5), 16..=20);
    /// ```
    #[must_use]
    pub fn page_numbers(&self, max_visible: usize) -> RangeInclusive<usize> {
        let total_pages = self.total_pages();
        let window = max_visible.clamp(1, total_pages);
        let current = clamp_page(self.current_page, total_pages);
        let start = current
            .saturating_sub(window / 2)
            .clamp(1, total_pages - window + 1);
        start..=start + window - 1
    }

    /// A snapshot of every derived value.
    #[must_use]
    pub fn info(&self) -> PageInfo {
        PageInfo {
            current_page: self.current_page,
            total_pages: self.total_pages(),
            total_items: self.total_items,
            per_page: self.per_page,
            start_index: self.start_index(),
            end_index: self.end_index(),
            items_on_current_page: self.items_on_current_page(),
            can_next_page: self.can_next_page(),
            can_prev_page: self.can_prev_page(),
        }
    }
}

/// Plain-data snapshot of a [`Pagination`], as handed to a view layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageInfo {
    /// One-based current page.
    pub current_page: usize,
    /// Number of pages, at least one.
    pub total_pages: usize,
    /// Number of items being paginated.
    pub total_items: usize,
    /// Items per page.
    pub per_page: usize,
    /// Index of the first item on the current page.
    pub start_index: usize,
    /// One past the last item on the current page.
    pub end_index: usize,
    /// Items on the current page.
    pub items_on_current_page: usize,
    /// Whether a next page exists.
    pub can_next_page: bool,
    /// Whether a previous page exists.
    pub can_prev_page: bool,
}

impl core::fmt::Display for PageInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Page {} of {}", self.current_page, self.total_pages)
    }
}
