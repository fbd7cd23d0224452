// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Quiet period used when none is configured, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Construction parameters for a [`Settled`](crate::Settled).
///
/// With the `serde` feature, missing fields deserialize to their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SettleConfig {
    /// Quiet period in milliseconds.
    pub delay_ms: u64,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}
