// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `stillwater_paging` crate.
//!
//! These check the derived-value invariants across a grid of collection sizes
//! and the clamping behavior of every navigation entry point.

use rstest::rstest;
use stillwater_paging::{Pagination, PagingConfig, page_bounds, total_pages};

#[rstest]
#[case(0, 10, 1)]
#[case(1, 10, 1)]
#[case(10, 10, 1)]
#[case(11, 10, 2)]
#[case(47, 10, 5)]
#[case(100, 7, 15)]
#[case(5, 1, 5)]
fn total_pages_is_ceiling_floored_at_one(
    #[case] total_items: usize,
    #[case] per_page: usize,
    #[case] expected: usize,
) {
    assert_eq!(total_pages(total_items, per_page), expected);
    assert_eq!(Pagination::new(total_items, per_page).total_pages(), expected);
}

#[test]
fn every_page_respects_slice_invariants() {
    for total_items in 0..60 {
        for per_page in 1..12 {
            let mut pages = Pagination::new(total_items, per_page);
            let mut covered = 0;
            loop {
                let start = pages.start_index();
                let end = pages.end_index();
                assert!(start <= end, "{total_items}/{per_page}: {start} > {end}");
                assert!(end <= total_items);
                assert!(end - start <= per_page);
                assert_eq!(pages.items_on_current_page(), end - start);
                assert_eq!(pages.page_range(), start..end);
                covered += end - start;
                if !pages.next_page() {
                    break;
                }
            }
            assert_eq!(covered, total_items, "pages must tile the collection");
            assert_eq!(pages.current_page(), pages.total_pages());
        }
    }
}

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(3, 3)]
#[case(5, 5)]
#[case(6, 5)]
#[case(usize::MAX, 5)]
fn set_page_clamps_and_is_idempotent(#[case] target: usize, #[case] expected: usize) {
    let mut pages = Pagination::new(47, 10);
    pages.set_page(target);
    assert_eq!(pages.current_page(), expected);
    pages.set_page(target);
    assert_eq!(pages.current_page(), expected);
}

#[test]
fn navigation_is_a_no_op_at_the_edges() {
    let mut pages = Pagination::new(47, 10);
    pages.prev_page();
    assert_eq!(pages.current_page(), 1);

    pages.last_page();
    pages.next_page();
    assert_eq!(pages.current_page(), 5);
    assert_eq!(pages.info().end_index, 47);

    pages.first_page();
    assert_eq!(pages.current_page(), 1);
}

#[test]
fn growing_page_size_leaves_page_for_caller_to_clamp() {
    let mut pages = Pagination::with_initial_page(47, 10, 5);
    pages.set_per_page(25);

    assert_eq!(pages.total_pages(), 2);
    assert_eq!(pages.current_page(), 5);
    assert!(!pages.is_current_page_in_range());
    assert_eq!(pages.items_on_current_page(), 0);

    // Navigation entry points still clamp.
    pages.set_page(pages.current_page());
    assert_eq!(pages.current_page(), 2);
    assert_eq!(pages.page_range(), 25..47);
}

#[test]
fn config_defaults_match_documented_values() {
    let pages = Pagination::with_config(47, &PagingConfig::default());
    assert_eq!(pages.per_page(), 10);
    assert_eq!(pages.current_page(), 1);

    let pages = Pagination::with_config(
        47,
        &PagingConfig {
            per_page: 0,
            initial_page: 0,
        },
    );
    assert_eq!(pages.per_page(), 1);
    assert_eq!(pages.current_page(), 1);
}

#[test]
fn info_displays_page_position() {
    let pages = Pagination::with_initial_page(47, 10, 2);
    assert_eq!(pages.info().to_string(), "Page 2 of 5");
    assert_eq!(Pagination::default().info().to_string(), "Page 1 of 1");
}

#[test]
fn page_bounds_agrees_with_pagination() {
    let pages = Pagination::new(33, 8);
    for page in 0..8 {
        assert_eq!(pages.page_range_of(page), page_bounds(33, 8, page));
    }
}

#[test]
fn error_messages_are_readable() {
    let err = Pagination::try_new(10, 5, 9).unwrap_err();
    assert_eq!(err.to_string(), "page 9 is outside 1..=2");
    let err = Pagination::try_new(10, 0, 1).unwrap_err();
    assert_eq!(err.to_string(), "page size must be at least 1");
}

#[cfg(feature = "serde")]
#[test]
fn page_info_serializes_for_view_layers() {
    let info = Pagination::with_initial_page(47, 10, 5).info();
    let json = serde_json::to_value(info).unwrap();
    assert_eq!(json["start_index"], 40);
    assert_eq!(json["end_index"], 47);
    assert_eq!(json["can_next_page"], false);
}
