// src/listing/mod.rs
// =============================================================================
// Reading directory listings off the server.
//
// Submodules:
// - http: the GET helper shared with the marker module
// - html: autoindex page -> Vec<Link>
//
// fetch_links() glues the two together and absorbs every failure: a listing
// we cannot get is a listing with no entries.
// =============================================================================

mod html;
mod http;

pub use html::{extract_listing_links, Link};
pub use http::{build_client, fetch_text, DEFAULT_TIMEOUT_SECS};

use crate::error::FetchError;
use crate::report::Reporter;
use reqwest::Client;
use tracing::warn;
use url::Url;

// Fetches a directory listing and returns its entries
//
// Never fails. A non-success status is logged at warn level only; transport
// problems (connection refused, timeout) are also printed for the user.
pub async fn fetch_links(
    client: &Client,
    location: &Url,
    reporter: &mut Reporter,
) -> Vec<Link> {
    match fetch_text(client, location).await {
        Ok(body) => extract_listing_links(&body, location),
        Err(FetchError::Status(status)) => {
            warn!(url = %location, %status, "listing not available");
            Vec::new()
        }
        Err(e) => {
            reporter.progress(&format!("  ⚠️  Error on {}: {}", location, e));
            Vec::new()
        }
    }
}
