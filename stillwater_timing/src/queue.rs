// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deadline-ordered timer queue.

use alloc::collections::BTreeMap;

/// Handle to a timer scheduled in a [`TimerQueue`].
///
/// Handles are unique for the lifetime of the queue that issued them, even
/// after the timer fires or is cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId {
    deadline: u64,
    seq: u64,
}

impl TimerId {
    /// The deadline this timer was scheduled for.
    #[must_use]
    pub fn deadline(self) -> u64 {
        self.deadline
    }
}

/// A queue of pending timers, each carrying a payload of type `T`.
///
/// Timers fire in deadline order. Timers sharing a deadline fire in the order
/// they were scheduled. A cancelled timer never fires.
///
/// ```rust
/// use stillwater_timing::TimerQueue;
///
/// let mut queue = TimerQueue::new();
/// queue.schedule_at(30, 'c');
/// queue.schedule_at(10, 'a');
/// queue.schedule_at(10, 'b');
///
/// assert_eq!(queue.next_deadline(), Some(10));
/// let order: String = queue.drain_expired(30).map(|(_, c)| c).collect();
/// assert_eq!(order, "abc");
/// ```
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    timers: BTreeMap<TimerId, T>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timers: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Schedules `payload` to fire at `deadline_ms`.
    pub fn schedule_at(&mut self, deadline_ms: u64, payload: T) -> TimerId {
        let id = TimerId {
            deadline: deadline_ms,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.timers.insert(id, payload);
        log::trace!("timer {} scheduled for {deadline_ms}", id.seq);
        id
    }

    /// Schedules `payload` to fire `delay_ms` after `now_ms`.
    pub fn schedule_after(&mut self, now_ms: u64, delay_ms: u64, payload: T) -> TimerId {
        self.schedule_at(now_ms.saturating_add(delay_ms), payload)
    }

    /// Cancels a pending timer and returns its payload.
    ///
    /// Returns `None` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let payload = self.timers.remove(&id);
        if payload.is_some() {
            log::trace!("timer {} cancelled", id.seq);
        }
        payload
    }

    /// Returns `true` if the timer is still pending.
    #[must_use]
    pub fn contains(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// The earliest pending deadline, if any.
    ///
    /// Hosts typically sleep until this instant.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.keys().next().map(|id| id.deadline)
    }

    /// Removes every pending timer without firing any of them.
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Pops the earliest timer if it is due at `now_ms`.
    pub fn pop_expired(&mut self, now_ms: u64) -> Option<(TimerId, T)> {
        let due = self
            .timers
            .first_key_value()
            .is_some_and(|(id, _)| id.deadline <= now_ms);
        if !due {
            return None;
        }
        let (id, payload) = self.timers.pop_first()?;
        log::trace!("timer {} fired at {now_ms} (deadline {})", id.seq, id.deadline);
        Some((id, payload))
    }

    /// Returns an iterator that pops every timer due at `now_ms`, in firing order.
    ///
    /// Timers left in the iterator when it is dropped stay in the queue.
    pub fn drain_expired(&mut self, now_ms: u64) -> DrainExpired<'_, T> {
        DrainExpired { queue: self, now_ms }
    }
}

/// Iterator returned by [`TimerQueue::drain_expired`].
#[derive(Debug)]
pub struct DrainExpired<'a, T> {
    queue: &'a mut TimerQueue<T>,
    now_ms: u64,
}

impl<T> Iterator for DrainExpired<'_, T> {
    type Item = (TimerId, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_expired(self.now_ms)
    }
}
