// src/crawl/mod.rs
// =============================================================================
// The hunt itself: walk the listings from a base URL until a README turns up.
//
// Features:
// - Depth-first, in the order the server lists entries
// - Stops at the first README worth reporting
// - Never fetches the same directory twice
// - A failing node only costs us that node, never the whole walk
// =============================================================================

mod explorer;

pub use explorer::{Explorer, FoundMarker};

use crate::report::Reporter;
use anyhow::{Context, Result};
use serde::Serialize;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Everything a finished hunt has to say.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlOutcome {
    pub base_url: Url,
    pub found: Option<FoundMarker>,
    pub directories_visited: usize,
}

// Runs a full hunt from `base_url` and reports the outcome
//
// Only fails if the HTTP client can't be built or the outcome can't be
// written; everything that goes wrong during the walk is absorbed node by node.
pub async fn hunt(base_url: Url, timeout: Duration, reporter: Reporter) -> Result<CrawlOutcome> {
    let mut explorer =
        Explorer::new(base_url, timeout, reporter).context("Could not build the HTTP client")?;
    let found = explorer.run().await;

    info!(
        directories = explorer.visited_count(),
        found = found.is_some(),
        "crawl finished"
    );

    let outcome = CrawlOutcome {
        base_url: explorer.base_url().clone(),
        found,
        directories_visited: explorer.visited_count(),
    };

    explorer.into_reporter().outcome(&outcome)?;
    Ok(outcome)
}
