// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Page size used when none is configured.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Construction parameters for a [`Pagination`](crate::Pagination).
///
/// With the `serde` feature, missing fields deserialize to their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PagingConfig {
    /// Items per page. `0` is clamped to `1`.
    pub per_page: usize,
    /// One-based page to start on, clamped to the valid range.
    pub initial_page: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            initial_page: 1,
        }
    }
}
