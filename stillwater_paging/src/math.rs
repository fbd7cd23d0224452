// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure pagination math.
//!
//! These helpers are total over their inputs: a page size of `0` is treated as
//! `1`, page `0` as page `1`, and all arithmetic saturates.

use core::ops::Range;

/// Number of pages needed for `total_items`, never less than one.
///
/// An empty collection still reports a single (empty) page so that
/// "page X of Y" displays stay well-formed.
///
/// ```rust
/// use stillwater_paging::total_pages;
///
/// assert_eq!(total_pages(47, 10), 5);
/// assert_eq!(total_pages(50, 10), 5);
/// assert_eq!(total_pages(0, 10), 1);
/// ```
#[must_use]
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page.max(1)).max(1)
}

/// Clamps a one-based `page` into `1..=total_pages`.
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Half-open item range `[start, end)` covered by a one-based `page`.
///
/// The end is capped at `total_items`. Pages past the end yield an empty
/// range positioned at `total_items`, so the result can always be used to
/// slice a collection of `total_items` elements.
#[must_use]
pub fn page_bounds(total_items: usize, per_page: usize, page: usize) -> Range<usize> {
    let per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(total_items);
    start.min(end)..end
}
