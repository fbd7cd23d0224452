// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless paginated list: apply navigation commands and print each page.
//!
//! ```text
//! paginated_list --count 47 next next last prev goto 1
//! RUST_LOG=debug paginated_list --input items.txt --per-page 5 99
//! ```

use std::path::PathBuf;

use clap::Parser;
use stillwater_demos::config::DemoConfig;
use stillwater_demos::corpus;
use stillwater_demos::nav::parse_commands;
use stillwater_demos::render::render_page;
use stillwater_paging::Pagination;

#[derive(Debug, Parser)]
#[command(about = "Page through a list of items")]
struct Args {
    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Text file with one item per line. Overrides `--count`.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Number of numbered placeholder items to page through.
    #[arg(long, default_value_t = 47)]
    count: usize,
    /// Items per page, overriding the configuration.
    #[arg(long)]
    per_page: Option<usize>,
    /// Page to start on, overriding the configuration.
    #[arg(long)]
    page: Option<usize>,
    /// How many page numbers to show in the page strip.
    #[arg(long, default_value_t = 5)]
    strip: usize,
    /// Navigation commands: next, prev, first, last, goto N, or a page number.
    commands: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let commands = parse_commands(&args.commands)?;

    let mut config = DemoConfig::load(args.config.as_deref())?.paging;
    if let Some(per_page) = args.per_page {
        config.per_page = per_page;
    }
    if let Some(page) = args.page {
        config.initial_page = page;
    }

    let items = match &args.input {
        Some(path) => corpus::load_lines(path)?,
        None => corpus::numbered(args.count),
    };

    let mut pages = Pagination::with_config(items.len(), &config);
    println!("{}", render_page(&pages, &items, args.strip));

    for command in commands {
        let moved = command.apply(&mut pages);
        log::info!("{command:?} -> page {} (moved: {moved})", pages.current_page());
        println!();
        println!("> {command:?}");
        println!("{}", render_page(&pages, &items, args.strip));
    }
    Ok(())
}
