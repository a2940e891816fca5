// src/main.rs
// =============================================================================
// Entry point of readme-hunter.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up tracing (diagnostics go to stderr, results to stdout)
// 3. Walk the listings from the base URL
// 4. Print what was found, as text or JSON (with --json, stdout is JSON only)
// 5. Exit 0 once the walk completes, found or not; 2 on a setup error
// =============================================================================

mod cli;
mod crawl;
mod error;
mod listing;
mod marker;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use report::{OutputMode, Reporter};
use std::time::Duration;
use tracing::Level;
use url::Url;

// One request at a time, so a single-threaded runtime is all we need
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let base_url = Url::parse(&cli.base_url)
        .with_context(|| format!("Invalid base URL '{}'", cli.base_url))?;

    let mode = if cli.json { OutputMode::Json } else { OutputMode::Text };
    let mut reporter = Reporter::new(mode);
    reporter.progress(&format!("🔍 Searching for the flag under {}\n", base_url));

    crawl::hunt(base_url, Duration::from_secs(cli.timeout), reporter).await?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
