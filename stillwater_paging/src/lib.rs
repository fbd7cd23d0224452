// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stillwater_paging --heading-base-level=0

//! Stillwater Paging: page-boundary math and clamped page navigation.
//!
//! This crate answers the questions every paginated list asks: how many pages
//! are there, which slice of the collection belongs to the current page, and
//! can the user go forward or back. It does not own the collection and knows
//! nothing about rendering.
//!
//! The core type is [`Pagination`], which stores only the item count, the page
//! size, and the one-based current page. Every other value is derived on read:
//!
//! - `total_pages = max(1, ceil(total_items / per_page))`
//! - `start_index = (current_page - 1) * per_page`
//! - `end_index = min(start_index + per_page, total_items)`
//!
//! All navigation is clamping rather than failing, so it can be wired directly
//! to button handlers without extra validation. Callers that prefer to reject
//! bad input can use [`Pagination::try_new`] and [`Pagination::try_set_page`].
//!
//! ## Minimal example
//!
//! ```rust
//! use stillwater_paging::Pagination;
//!
//! let rows: Vec<u32> = (0..47).collect();
//! let mut pages = Pagination::new(rows.len(), 10);
//! assert_eq!(pages.total_pages(), 5);
//!
//! pages.set_page(99); // clamped
//! assert_eq!(pages.current_page(), 5);
//! assert_eq!(pages.page_range(), 40..47);
//! assert_eq!(pages.slice(&rows).len(), 7);
//! assert!(!pages.next_page());
//! ```
//!
//! ## Changing the collection
//!
//! [`Pagination::set_total_items`] and [`Pagination::set_per_page`] do not move
//! the current page. If the collection shrinks below the current page, the
//! derived range becomes empty and [`Pagination::is_current_page_in_range`]
//! reports `false`; the host decides whether to call
//! [`Pagination::clamp_current_page`] or to keep the user where they were.
//!
//! The free functions [`total_pages`], [`clamp_page`], and [`page_bounds`]
//! expose the same math for callers that keep their own page state.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod config;
mod error;
mod math;
mod pagination;

pub use config::{DEFAULT_PER_PAGE, PagingConfig};
pub use error::PaginationError;
pub use math::{clamp_page, page_bounds, total_pages};
pub use pagination::{PageInfo, Pagination};
