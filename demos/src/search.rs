// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted typing replay for `debounced_search`.
//!
//! Keystrokes and settle wakeups share one [`TimerQueue`], so the replay runs
//! on virtual time and only visits instants where something happens.

use stillwater_settle::Settled;
use stillwater_timing::TimerQueue;

/// A query that settled during a replay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettledQuery {
    /// Virtual time at which the query settled.
    pub at_ms: u64,
    /// The settled query text.
    pub query: String,
}

/// Expands typed bursts into timestamped search-box contents.
///
/// Characters within a burst are `interval_ms` apart, and each burst starts
/// `gap_ms` after the previous burst's last keystroke. The box is cleared
/// between bursts, so each burst types a fresh query.
pub fn keystrokes(bursts: &[String], interval_ms: u64, gap_ms: u64) -> Vec<(u64, String)> {
    let mut out = Vec::new();
    let mut now = 0_u64;
    for (n, burst) in bursts.iter().enumerate() {
        if n > 0 {
            now = now.saturating_add(gap_ms);
        }
        let mut typed = String::new();
        for (i, ch) in burst.chars().enumerate() {
            if i > 0 {
                now = now.saturating_add(interval_ms);
            }
            typed.push(ch);
            out.push((now, typed.clone()));
        }
    }
    out
}

#[derive(Debug)]
enum Event {
    Input(String),
    Wake,
}

/// Replays `keystrokes` through a [`Settled`] with the given quiet period and
/// returns every query that settled, in order.
pub fn replay(keystrokes: Vec<(u64, String)>, delay_ms: u64) -> Vec<SettledQuery> {
    let mut queue = TimerQueue::new();
    for (at_ms, text) in keystrokes {
        queue.schedule_at(at_ms, Event::Input(text));
    }

    let mut query = Settled::new(String::new(), delay_ms);
    let mut settled = Vec::new();
    while let Some(now) = queue.next_deadline() {
        // A quiet period ending at `now` settles before input arriving at `now`.
        settle_due(&mut query, now, &mut settled);
        while let Some((_, event)) = queue.pop_expired(now) {
            match event {
                Event::Input(text) => {
                    log::trace!("{now}ms: search box = {text:?}");
                    query.update(text, now);
                    if let Some(deadline) = query.deadline() {
                        queue.schedule_at(deadline, Event::Wake);
                    }
                }
                // Wakeups for a since-restarted or already settled quiet period find nothing due.
                Event::Wake => settle_due(&mut query, now, &mut settled),
            }
        }
    }
    query.dispose();
    settled
}

fn settle_due(query: &mut Settled<String>, now: u64, settled: &mut Vec<SettledQuery>) {
    if let Some(text) = query.poll(now) {
        settled.push(SettledQuery {
            at_ms: now,
            query: text.clone(),
        });
    }
}

/// Items containing `query`, ignoring ASCII case. An empty query matches everything.
pub fn matches<'a>(items: &'a [String], query: &str) -> Vec<&'a str> {
    let needle = query.to_ascii_lowercase();
    items
        .iter()
        .map(String::as_str)
        .filter(|item| item.to_ascii_lowercase().contains(&needle))
        .collect()
}
