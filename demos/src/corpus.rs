// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item sources for the demos.

use std::path::Path;

use anyhow::Context;

/// Words searched by `debounced_search` when no input file is given.
pub const BUILTIN_WORDS: &[&str] = &[
    "anchor", "async", "borrow", "buffer", "channel", "closure", "crate", "debounce", "deref",
    "drop", "enum", "future", "generic", "iterator", "lifetime", "macro", "module", "mutex",
    "option", "page", "pattern", "result", "rust", "rustc", "rustdoc", "slice", "string", "struct",
    "timer", "trait", "tuple", "vector",
];

/// Reads non-empty lines from a text file.
pub fn load_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading items from {}", path.display()))?;
    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();
    log::debug!("read {} items from {}", lines.len(), path.display());
    Ok(lines)
}

/// Generates `count` numbered placeholder items.
pub fn numbered(count: usize) -> Vec<String> {
    (1..=count).map(|n| format!("Item {n}")).collect()
}

/// The built-in word list as owned strings.
pub fn builtin_words() -> Vec<String> {
    BUILTIN_WORDS.iter().map(|&word| word.to_owned()).collect()
}
