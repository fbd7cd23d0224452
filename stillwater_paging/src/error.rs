// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors returned by the strict pagination constructors and setters.
///
/// The clamping API ([`Pagination::new`](crate::Pagination::new),
/// [`Pagination::set_page`](crate::Pagination::set_page), ...) never fails;
/// these errors only come from the `try_` variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// A page size of zero was requested.
    #[error("page size must be at least 1")]
    ZeroPageSize,
    /// A page outside `1..=total_pages` was requested.
    #[error("page {page} is outside 1..={total_pages}")]
    PageOutOfRange {
        /// The requested one-based page.
        page: usize,
        /// The page count at the time of the request.
        total_pages: usize,
    },
}
