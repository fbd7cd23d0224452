// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON configuration shared by the demo binaries.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use stillwater_paging::PagingConfig;
use stillwater_settle::SettleConfig;

/// Demo configuration. Every field is optional in the JSON file.
///
/// ```json
/// { "paging": { "per_page": 5 }, "settle": { "delay_ms": 250 } }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Page size and initial page for paginated output.
    pub paging: PagingConfig,
    /// Quiet period for the search box.
    pub settle: SettleConfig,
}

impl DemoConfig {
    /// Loads the configuration from `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            log::debug!("no config file given, using defaults");
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::debug!("loaded {config:?} from {}", path.display());
        Ok(config)
    }

    /// Parses the configuration from a JSON string.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
