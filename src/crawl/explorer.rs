// src/crawl/explorer.rs
// =============================================================================
// Depth-first walk over a server's directory listings.
//
// How it works:
// 1. Fetch the listing for a directory and push a frame holding its entries
// 2. Take the next entry of the top frame, in listing order
// 3. "README" -> inspect it; anything worth reporting ends the walk
// 4. "something/" -> fetch that listing and push its frame on top
// 5. Frame exhausted -> pop it and carry on with the parent's next entry
//
// Entries pointing at another origin than the base URL are never followed.
//
// There is no depth limit; the stack grows with the tree.
//
// Rust concepts:
// - HashSet<Url>: the set of directories already fetched
// - vec::IntoIter: each frame owns the remaining entries of its listing
// - &mut self: the explorer owns its visited set, no globals
// =============================================================================

use crate::listing::{build_client, fetch_links, Link};
use crate::marker::{inspect_marker, MarkerKind};
use crate::report::Reporter;
use reqwest::Client;
use serde::Serialize;
use std::collections::HashSet;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// The README that ended the walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundMarker {
    pub url: Url,
    pub kind: MarkerKind,
    pub content: String,
}

// A directory being walked: what's left of its listing and how deep it is
struct Frame {
    links: std::vec::IntoIter<Link>,
    depth: usize,
}

pub struct Explorer {
    client: Client,
    base_url: Url,
    visited: HashSet<Url>,
    reporter: Reporter,
}

impl Explorer {
    pub fn new(base_url: Url, timeout: Duration, reporter: Reporter) -> reqwest::Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url,
            visited: HashSet::new(),
            reporter,
        })
    }

    /// Hands the reporter back once the walk is over.
    pub fn into_reporter(self) -> Reporter {
        self.reporter
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Number of directory listings fetched (or attempted) so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Walks the tree from the base URL at depth 0.
    pub async fn run(&mut self) -> Option<FoundMarker> {
        let start = self.base_url.clone();
        self.explore(start, 0).await
    }

    /// Walks the tree below `location` and returns the first README worth
    /// reporting, in depth-first listing order.
    ///
    /// Directories already in the visited set are skipped, so calling this
    /// twice on the same explorer does not fetch anything twice.
    pub async fn explore(&mut self, location: Url, depth: usize) -> Option<FoundMarker> {
        let mut stack: Vec<Frame> = Vec::new();

        if let Some(frame) = self.enter(location, depth).await {
            stack.push(frame);
        }

        loop {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let depth = frame.depth;
            let Some(link) = frame.links.next() else {
                stack.pop();
                continue;
            };

            if link.url.origin() != self.base_url.origin() {
                debug!(url = %link.url, "off-origin entry, skipping");
            } else if link.is_marker() {
                if let Some(marker) =
                    inspect_marker(&self.client, &link.url, &mut self.reporter).await
                {
                    let found = FoundMarker {
                        url: link.url,
                        kind: marker.kind,
                        content: marker.content,
                    };
                    self.reporter.found(&found);
                    return Some(found);
                }
            } else if link.is_directory() {
                if let Some(child) = self.enter(link.url, depth + 1).await {
                    stack.push(child);
                }
            } else {
                debug!(href = %link.href, "ignoring entry");
            }
        }

        None
    }

    // Marks a directory visited and fetches its listing
    //
    // Returns None when the directory was already visited. A listing that
    // failed to load still counts as visited and yields an empty frame.
    async fn enter(&mut self, location: Url, depth: usize) -> Option<Frame> {
        if !self.visited.insert(location.clone()) {
            debug!(url = %location, "already visited");
            return None;
        }

        debug!(depth, url = %location, "exploring");
        let links = fetch_links(&self.client, &location, &mut self.reporter).await;

        Some(Frame {
            links: links.into_iter(),
            depth,
        })
    }
}
