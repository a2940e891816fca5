// src/marker/mod.rs
// =============================================================================
// Fetching and judging README files.
//
// A README we can't read counts the same as a README with nothing in it.
// =============================================================================

mod classify;

pub use classify::{classify, preview, Classification, MarkerKind};

use crate::listing::fetch_text;
use crate::report::Reporter;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// README content that survived classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerContent {
    pub kind: MarkerKind,
    pub content: String,
}

// Fetches a README and returns its content if it is worth reporting
//
// Returns:
//   Some(Candidate) for a hex-shaped token
//   Some(Suspicious) for short odd text (a preview is printed)
//   None for decoys, junk, and anything we failed to fetch
pub async fn inspect_marker(
    client: &Client,
    location: &Url,
    reporter: &mut Reporter,
) -> Option<MarkerContent> {
    let body = match fetch_text(client, location).await {
        Ok(body) => body,
        Err(e) => {
            debug!(url = %location, error = %e, "README not readable");
            return None;
        }
    };

    match classify(&body) {
        Classification::Candidate(content) => Some(MarkerContent {
            kind: MarkerKind::Candidate,
            content,
        }),
        Classification::Suspicious(content) => {
            reporter.progress(&format!(
                "  → Suspicious content ({} chars): {}",
                content.chars().count(),
                preview(&content)
            ));
            Some(MarkerContent {
                kind: MarkerKind::Suspicious,
                content,
            })
        }
        Classification::Decoy => {
            debug!(url = %location, "decoy README");
            None
        }
        Classification::Irrelevant => None,
    }
}
