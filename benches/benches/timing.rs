// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use stillwater_settle::Settled;
use stillwater_timing::TimerQueue;

fn bench_queue_schedule_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/queue_schedule_drain");

    // Deadlines are scrambled so inserts do not all land at the tail.
    for len in [64usize, 1_024, 16_384] {
        let deadlines: Vec<u64> = (0..len as u64).map(|i| (i * 7_919) % 10_007).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &deadlines, |b, deadlines| {
            b.iter_batched(
                TimerQueue::<u64>::new,
                |mut queue| {
                    for &deadline in deadlines {
                        queue.schedule_at(deadline, deadline);
                    }
                    let fired = queue.drain_expired(u64::MAX).count();
                    black_box(fired);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_queue_cancel_half(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/queue_cancel_half");

    for len in [1_024usize, 16_384] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter_batched(
                || {
                    let mut queue = TimerQueue::new();
                    let ids: Vec<_> = (0..len as u64).map(|i| queue.schedule_at(i, ())).collect();
                    (queue, ids)
                },
                |(mut queue, ids)| {
                    for id in ids.iter().step_by(2) {
                        black_box(queue.cancel(*id));
                    }
                    black_box(queue);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_settled_keystroke_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/settled_burst");

    // Models a keystroke per tick, polling every tick as an eager host would.
    for len in [16usize, 256, 4_096] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter_batched(
                || Settled::new(0_u64, 300),
                |mut tracker| {
                    for now in 0..len as u64 {
                        tracker.update(now, now);
                        black_box(tracker.poll(now));
                    }
                    black_box(tracker.poll(u64::MAX));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_queue_schedule_drain,
    bench_queue_cancel_half,
    bench_settled_keystroke_burst
);
criterion_main!(benches);
