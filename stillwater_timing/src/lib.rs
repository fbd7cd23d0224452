// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stillwater_timing --heading-base-level=0

//! Stillwater Timing: host-driven timer primitives for UI runtimes.
//!
//! UI toolkits already own an event loop and a clock. This crate does not
//! read a clock, spawn threads, or register wakers; it only does the
//! bookkeeping of _when_ something should happen. The host passes the current
//! time in as a monotonic millisecond counter and asks which timers are due.
//!
//! Two shapes are provided:
//!
//! - [`OneShot`]: a single-slot timer. Arming it again replaces the previous
//!   deadline, so there is never more than one outstanding. This is the
//!   building block for debouncing.
//! - [`TimerQueue`]: many pending timers, each carrying a payload, fired in
//!   deadline order. Hosts use it to multiplex wakeups for several widgets
//!   onto one event loop.
//!
//! ## Minimal example
//!
//! ```rust
//! use stillwater_timing::{OneShot, TimerQueue};
//!
//! let mut blink = OneShot::new();
//! blink.arm(1_000, 250);
//! assert!(!blink.fire(1_100));
//! assert!(blink.fire(1_250));
//! assert!(!blink.is_armed());
//!
//! let mut queue = TimerQueue::new();
//! let tooltip = queue.schedule_after(0, 400, "tooltip");
//! queue.schedule_after(0, 100, "caret");
//! queue.cancel(tooltip);
//!
//! let fired: Vec<_> = queue.drain_expired(500).map(|(_, what)| what).collect();
//! assert_eq!(fired, ["caret"]);
//! ```
//!
//! All times are `u64` milliseconds on a caller-chosen monotonic clock.
//! Deadline arithmetic saturates instead of overflowing.
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod one_shot;
mod queue;

pub use one_shot::OneShot;
pub use queue::{DrainExpired, TimerId, TimerQueue};
