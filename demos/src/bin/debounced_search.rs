// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless debounced search: replay scripted typing and print each settled query.
//!
//! ```text
//! debounced_search --typed rust --typed trait --interval-ms 120
//! RUST_LOG=stillwater_settle=debug,stillwater_timing=trace debounced_search --typed drop
//! ```

use std::path::PathBuf;

use clap::Parser;
use stillwater_demos::config::DemoConfig;
use stillwater_demos::corpus;
use stillwater_demos::render::page_strip;
use stillwater_demos::search::{keystrokes, matches, replay};
use stillwater_paging::Pagination;

#[derive(Debug, Parser)]
#[command(about = "Replay typing into a debounced search box")]
struct Args {
    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Text file with one searchable item per line. Defaults to a built-in word list.
    #[arg(long)]
    input: Option<PathBuf>,
    /// A burst of typing; repeat for several bursts.
    #[arg(long = "typed", default_value = "rust")]
    typed: Vec<String>,
    /// Milliseconds between keystrokes within a burst.
    #[arg(long, default_value_t = 120)]
    interval_ms: u64,
    /// Milliseconds of pause between bursts.
    #[arg(long, default_value_t = 1_500)]
    gap_ms: u64,
    /// Quiet period, overriding the configuration.
    #[arg(long)]
    delay_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = DemoConfig::load(args.config.as_deref())?;
    let delay_ms = args.delay_ms.unwrap_or(config.settle.delay_ms);
    let items = match &args.input {
        Some(path) => corpus::load_lines(path)?,
        None => corpus::builtin_words(),
    };

    let keys = keystrokes(&args.typed, args.interval_ms, args.gap_ms);
    log::info!("replaying {} keystrokes with a {delay_ms}ms quiet period", keys.len());

    for settled in replay(keys, delay_ms) {
        let found: Vec<String> = matches(&items, &settled.query)
            .into_iter()
            .map(str::to_owned)
            .collect();
        let pages = Pagination::with_config(found.len(), &config.paging);

        println!(
            "{:>6}ms  {:?}: {} match(es), {}",
            settled.at_ms,
            settled.query,
            found.len(),
            pages.info()
        );
        for item in pages.slice(&found) {
            println!("          {item}");
        }
        if pages.total_pages() > 1 {
            println!("         {}", page_strip(&pages, 5));
        }
    }
    Ok(())
}
