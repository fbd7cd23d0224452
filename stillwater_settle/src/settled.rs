// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use stillwater_timing::OneShot;

use crate::config::{DEFAULT_DELAY_MS, SettleConfig};

/// Whether a [`Settled`] is waiting to publish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettleState {
    /// No update is pending; the settled value is current.
    Idle,
    /// An update is pending and will publish at `deadline_ms`.
    Pending {
        /// When the pending update becomes due.
        deadline_ms: u64,
    },
}

/// A trailing-edge "settled" view of a value that changes often.
///
/// Each [`update`](Self::update) replaces the raw value and restarts the
/// quiet period. Only when [`poll`](Self::poll) is called at or after the end
/// of an uninterrupted quiet period does the raw value become the settled
/// value. There is never more than one pending update.
#[derive(Clone, Debug)]
pub struct Settled<T> {
    value: T,
    settled: T,
    delay_ms: u64,
    timer: OneShot,
    revision: u64,
}

impl<T: Clone + Default> Default for Settled<T> {
    fn default() -> Self {
        Self::new(T::default(), DEFAULT_DELAY_MS)
    }
}

impl<T: Clone> Settled<T> {
    /// Creates an idle tracker whose raw and settled values are both `initial`.
    #[must_use]
    pub fn new(initial: T, delay_ms: u64) -> Self {
        Self {
            value: initial.clone(),
            settled: initial,
            delay_ms,
            timer: OneShot::new(),
            revision: 0,
        }
    }

    /// Creates an idle tracker using the delay from a [`SettleConfig`].
    #[must_use]
    pub fn with_config(initial: T, config: &SettleConfig) -> Self {
        Self::new(initial, config.delay_ms)
    }

    /// Feeds a new raw value, restarting the quiet period from `now_ms`.
    ///
    /// Any pending update is cancelled first. The tracker does not compare
    /// `value` with the previous one: every call restarts the quiet period.
    pub fn update(&mut self, value: T, now_ms: u64) {
        self.value = value;
        self.restart(now_ms);
    }

    /// Changes the quiet period.
    ///
    /// If `delay_ms` differs from the current delay, the pending update (or,
    /// when idle, the current raw value) is rescheduled with the new delay.
    pub fn set_delay(&mut self, delay_ms: u64, now_ms: u64) {
        if delay_ms == self.delay_ms {
            return;
        }
        self.delay_ms = delay_ms;
        self.restart(now_ms);
    }

    /// Feeds a new raw value and delay together.
    pub fn update_with(&mut self, value: T, delay_ms: u64, now_ms: u64) {
        self.value = value;
        self.delay_ms = delay_ms;
        self.restart(now_ms);
    }

    /// Publishes the raw value if the quiet period has elapsed by `now_ms`.
    ///
    /// Returns the newly settled value when this call published it.
    pub fn poll(&mut self, now_ms: u64) -> Option<&T> {
        if !self.timer.fire(now_ms) {
            return None;
        }
        self.publish();
        Some(&self.settled)
    }

    /// Publishes a pending update immediately, without waiting for the deadline.
    ///
    /// Useful when the user commits the input explicitly (for example by
    /// pressing Enter). Returns `None` if nothing was pending.
    pub fn flush(&mut self) -> Option<&T> {
        if !self.timer.disarm() {
            return None;
        }
        self.publish();
        Some(&self.settled)
    }

    /// Tears the tracker down and returns the last settled value.
    ///
    /// Any pending update is discarded and never published.
    pub fn dispose(mut self) -> T {
        if self.timer.disarm() {
            log::trace!("pending update discarded on dispose");
        }
        self.settled
    }

    fn restart(&mut self, now_ms: u64) {
        self.timer.arm(now_ms, self.delay_ms);
    }

    fn publish(&mut self) {
        self.settled = self.value.clone();
        self.revision += 1;
        log::debug!("value settled (revision {})", self.revision);
    }
}

impl<T> Settled<T> {
    /// The last value that stayed unchanged for a full quiet period.
    #[must_use]
    pub fn settled(&self) -> &T {
        &self.settled
    }

    /// The most recent raw value.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The quiet period in milliseconds.
    #[must_use]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// When the pending update becomes due, if one is pending.
    ///
    /// Hosts can use this to schedule their next wakeup.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.timer.deadline()
    }

    /// Returns `true` while an update is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.timer.is_armed()
    }

    /// Current state of the tracker.
    #[must_use]
    pub fn state(&self) -> SettleState {
        match self.timer.deadline() {
            Some(deadline_ms) => SettleState::Pending { deadline_ms },
            None => SettleState::Idle,
        }
    }

    /// Number of times a value has been published.
    ///
    /// Publishing bumps the revision even when the new settled value equals
    /// the previous one.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Cancels the pending update without publishing it.
    ///
    /// Returns `true` if an update was pending.
    pub fn cancel(&mut self) -> bool {
        self.timer.disarm()
    }
}
