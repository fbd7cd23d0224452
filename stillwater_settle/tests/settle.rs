// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `stillwater_settle` crate.
//!
//! These drive a `Settled<T>` through scripted input timelines, polling every
//! millisecond the way an eager host loop would, and check which values get
//! published and when.

use rstest::rstest;
use stillwater_settle::{SettleConfig, SettleState, Settled};
use stillwater_timing::TimerQueue;

/// Feeds `(time, value)` changes into a tracker, polling every millisecond
/// up to `until`, and returns every `(time, value)` publication.
fn run_timeline(delay: u64, changes: &[(u64, u32)], until: u64) -> Vec<(u64, u32)> {
    let mut tracker = Settled::new(0, delay);
    let mut published = Vec::new();
    let mut changes = changes.iter().peekable();

    // Timers due at a tick fire before input arriving on the same tick.
    for now in 0..=until {
        if let Some(&value) = tracker.poll(now) {
            published.push((now, value));
        }
        while let Some(&&(at, value)) = changes.peek() {
            if at != now {
                break;
            }
            tracker.update(value, now);
            changes.next();
        }
    }
    published
}

#[rstest]
#[case(100, &[(0, 1), (50, 2), (120, 3), (219, 4)], vec![(319, 4)])]
#[case(100, &[(0, 1), (100, 2)], vec![(100, 1), (200, 2)])]
#[case(100, &[(0, 1), (99, 2)], vec![(199, 2)])]
#[case(0, &[(5, 1), (5, 2), (6, 3)], vec![(6, 2), (7, 3)])]
fn only_the_last_value_of_a_burst_settles(
    #[case] delay: u64,
    #[case] changes: &[(u64, u32)],
    #[case] expected: Vec<(u64, u32)>,
) {
    assert_eq!(run_timeline(delay, changes, 1_000), expected);
}

#[test]
fn single_update_settles_after_delay() {
    let published = run_timeline(500, &[(10, 42)], 2_000);
    assert_eq!(published, [(510, 42)]);
}

#[test]
fn burst_publishes_exactly_once_no_earlier_than_delay() {
    let delay = 300;
    let changes: Vec<(u64, u32)> = (0..20_u32).map(|i| (u64::from(i) * 37, i + 1)).collect();
    let last_change = changes.last().map(|&(at, _)| at).unwrap();

    let published = run_timeline(delay, &changes, 5_000);
    assert_eq!(published.len(), 1);
    let (at, value) = published[0];
    assert_eq!(value, 20);
    assert!(at >= last_change + delay);
}

#[test]
fn disposed_tracker_never_publishes_pending_value() {
    let mut tracker = Settled::new("idle", 100);
    tracker.update("typing", 0);
    assert_eq!(tracker.dispose(), "idle");
}

#[test]
fn state_transitions_follow_idle_pending_idle() {
    let mut tracker = Settled::with_config('a', &SettleConfig { delay_ms: 10 });
    assert_eq!(tracker.state(), SettleState::Idle);

    tracker.update('b', 0);
    assert_eq!(tracker.state(), SettleState::Pending { deadline_ms: 10 });

    tracker.update('c', 5);
    assert_eq!(tracker.state(), SettleState::Pending { deadline_ms: 15 });
    assert_eq!(*tracker.settled(), 'a');

    assert_eq!(tracker.poll(15), Some(&'c'));
    assert_eq!(tracker.state(), SettleState::Idle);

    // Reusable indefinitely.
    tracker.update('d', 100);
    assert_eq!(tracker.poll(110), Some(&'d'));
    assert_eq!(tracker.revision(), 2);
}

/// A host multiplexing two trackers onto one timer queue, waking only at
/// deadlines instead of polling every tick.
#[test]
fn host_queue_wakes_trackers_in_deadline_order() {
    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Field {
        Query,
        Filter,
    }

    let mut query = Settled::new(String::new(), 300);
    let mut filter = Settled::new(String::new(), 100);
    let mut wakeups = TimerQueue::new();
    let mut log = Vec::new();

    query.update("rust".into(), 0);
    wakeups.schedule_at(query.deadline().unwrap(), Field::Query);
    filter.update("open".into(), 50);
    wakeups.schedule_at(filter.deadline().unwrap(), Field::Filter);

    while let Some(deadline) = wakeups.next_deadline() {
        for (_, field) in wakeups.drain_expired(deadline) {
            let settled = match field {
                Field::Query => query.poll(deadline).cloned(),
                Field::Filter => filter.poll(deadline).cloned(),
            };
            if let Some(value) = settled {
                log.push((deadline, field, value));
            }
        }
    }

    assert_eq!(
        log,
        [
            (150, Field::Filter, "open".to_string()),
            (300, Field::Query, "rust".to_string()),
        ]
    );
}

#[test]
fn stale_wakeup_after_restart_is_ignored() {
    let mut query = Settled::new(0_u32, 100);
    let mut wakeups = TimerQueue::new();

    query.update(1, 0);
    let stale = wakeups.schedule_at(query.deadline().unwrap(), ());
    query.update(2, 60);
    wakeups.schedule_at(query.deadline().unwrap(), ());

    let (id, ()) = wakeups.pop_expired(100).unwrap();
    assert_eq!(id, stale);
    assert_eq!(query.poll(100), None, "restarted timer is not due yet");

    wakeups.pop_expired(160).unwrap();
    assert_eq!(query.poll(160), Some(&2));
}
