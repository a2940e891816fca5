// src/listing/http.rs
// =============================================================================
// The one place that performs HTTP GETs.
//
// Both directory listings and README bodies come through fetch_text().
// Every request carries the same bounded timeout, set once on the client.
//
// Rust concepts:
// - async/await: reqwest is async, we just await one request at a time
// - From conversions: `?` turns reqwest::Error into our FetchError
// =============================================================================

use crate::error::{FetchError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

// Builds the HTTP client shared by the whole crawl
//
// No custom headers, no cookies, no auth: the listing server gets plain GETs.
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder().timeout(timeout).build()
}

// Fetches a URL and returns its body as text
//
// Returns: the body on a 2xx response, a FetchError otherwise
//   - Status: the server answered with a non-success code
//   - Timeout: no answer within the client timeout
//   - Http: anything else the transport complained about
pub async fn fetch_text(client: &Client, url: &Url) -> Result<String> {
    let response = client.get(url.as_str()).send().await?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.text().await?;
    Ok(body)
}
