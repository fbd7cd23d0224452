// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use stillwater_paging::Pagination;

fn bench_walk_all_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("paging/walk_all_pages");

    // Hypothesis: every accessor is O(1), so walking is linear in page count.
    for total_items in [1_000usize, 100_000, 10_000_000] {
        let pages = Pagination::new(total_items, 25);
        group.throughput(Throughput::Elements(pages.total_pages() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(total_items),
            &pages,
            |b, pages| {
                b.iter(|| {
                    let mut pages = *pages;
                    let mut seen = 0;
                    loop {
                        seen += black_box(pages.info()).items_on_current_page;
                        if !pages.next_page() {
                            break;
                        }
                    }
                    seen
                });
            },
        );
    }

    group.finish();
}

fn bench_slice_and_window(c: &mut Criterion) {
    let items: Vec<u32> = (0..100_000).collect();
    let mut pages = Pagination::new(items.len(), 50);

    c.bench_function("paging/slice_and_window", |b| {
        b.iter(|| {
            pages.set_page(black_box(pages.current_page() % pages.total_pages() + 1));
            let slice = pages.slice(&items);
            let window = pages.page_numbers(black_box(7));
            black_box((slice.len(), window))
        });
    });
}

criterion_group!(benches, bench_walk_all_pages, bench_slice_and_window);
criterion_main!(benches);
