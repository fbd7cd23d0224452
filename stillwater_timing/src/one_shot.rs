// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-slot timer.

/// A timer with at most one armed deadline.
///
/// Re-arming replaces the previous deadline instead of queueing a second one.
/// The host drives it by calling [`OneShot::fire`] with the current time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    deadline: Option<u64>,
}

impl OneShot {
    /// Creates a disarmed timer.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the timer to fire `delay_ms` after `now_ms`, replacing any
    /// previously armed deadline.
    ///
    /// Returns the new deadline.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) -> u64 {
        let deadline = now_ms.saturating_add(delay_ms);
        if let Some(previous) = self.deadline.replace(deadline) {
            log::trace!("one-shot re-armed: {previous} -> {deadline}");
        } else {
            log::trace!("one-shot armed for {deadline}");
        }
        deadline
    }

    /// Cancels the armed deadline, if any.
    ///
    /// Returns `true` if a deadline was armed.
    pub fn disarm(&mut self) -> bool {
        match self.deadline.take() {
            Some(deadline) => {
                log::trace!("one-shot disarmed before {deadline}");
                true
            }
            None => false,
        }
    }

    /// Returns the armed deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns `true` while a deadline is armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Milliseconds left until the deadline, or `Some(0)` if it is already due.
    #[must_use]
    pub fn remaining(&self, now_ms: u64) -> Option<u64> {
        self.deadline
            .map(|deadline| deadline.saturating_sub(now_ms))
    }

    /// Fires the timer if it is armed and due at `now_ms`.
    ///
    /// Firing disarms the timer. Returns `true` exactly once per armed deadline.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now_ms => {
                self.deadline = None;
                log::trace!("one-shot fired at {now_ms} (deadline {deadline})");
                true
            }
            _ => false,
        }
    }
}
