// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain-text rendering of a page.

use std::fmt::Write;

use stillwater_paging::Pagination;

/// Page-number strip with the current page bracketed, e.g. `< 1 2 [3] 4 5 >`.
///
/// The arrows are replaced by spaces when navigation in that direction is unavailable.
pub fn page_strip(pages: &Pagination, max_visible: usize) -> String {
    let mut out = String::from(if pages.can_prev_page() { "<" } else { " " });
    for page in pages.page_numbers(max_visible) {
        if page == pages.current_page() {
            let _ = write!(out, " [{page}]");
        } else {
            let _ = write!(out, " {page}");
        }
    }
    out.push_str(if pages.can_next_page() { " >" } else { "  " });
    out
}

/// Renders the header, the current page's items with their absolute
/// one-based positions, and the page strip.
pub fn render_page(pages: &Pagination, items: &[String], max_visible: usize) -> String {
    let info = pages.info();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{info} (items {}-{} of {})",
        info.start_index + usize::from(info.items_on_current_page > 0),
        info.end_index,
        info.total_items,
    );
    let start = pages.page_range().start;
    for (offset, item) in pages.slice(items).iter().enumerate() {
        let _ = writeln!(out, "{:>5}. {item}", start + offset + 1);
    }
    if info.items_on_current_page == 0 {
        out.push_str("       (no items)\n");
    }
    out.push_str(&page_strip(pages, max_visible));
    out
}
