// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stillwater_settle --heading-base-level=0

//! Stillwater Settle: trailing-edge settled values for rapidly changing inputs.
//!
//! A search box changes on every keystroke, but the query it drives should only
//! run once the user pauses. [`Settled`] tracks the raw value alongside a
//! _settled_ copy that only catches up after a quiet period with no further
//! changes.
//!
//! The tracker is a two-state machine:
//!
//! - **Idle**: nothing pending; the settled value is current.
//! - **Pending**: an update is scheduled for a deadline. Another
//!   [`Settled::update`] before the deadline cancels it and schedules a new one,
//!   leaving the settled value untouched. [`Settled::poll`] at or after the
//!   deadline publishes the raw value and returns to Idle.
//!
//! The pending update lives in a single owned
//! [`OneShot`](stillwater_timing::OneShot), so there can never be more than
//! one. Nothing happens behind the host's back: the host passes in the current
//! time and decides when to poll, typically by sleeping until
//! [`Settled::deadline`]. Updates never publish synchronously, even with a
//! zero delay.
//!
//! ## Minimal example
//!
//! ```rust
//! use stillwater_settle::Settled;
//!
//! let mut query = Settled::new(String::new(), 300);
//!
//! // Keystrokes 100ms apart.
//! query.update("r".into(), 0);
//! query.update("ru".into(), 100);
//! query.update("rust".into(), 200);
//! assert_eq!(query.poll(400), None); // only 200ms since the last keystroke
//!
//! assert_eq!(query.poll(500).map(String::as_str), Some("rust"));
//! assert_eq!(query.settled(), "rust");
//! ```
//!
//! ## Teardown
//!
//! Call [`Settled::dispose`] when the owning view goes away. It cancels any
//! pending update and hands back the last settled value. Dropping the tracker
//! discards the pending update too, since the timer is owned by the tracker.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod settled;

pub use config::{DEFAULT_DELAY_MS, SettleConfig};
pub use settled::{SettleState, Settled};
