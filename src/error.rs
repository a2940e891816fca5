// src/error.rs
// =============================================================================
// Errors produced while talking to the listing server.
//
// None of these ever stop a crawl: the listing and marker layers turn
// every FetchError into "this node has nothing for us" and move on.
// They exist so that the log line says *why* a node came back empty.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("HTTP {0}")]
    Status(StatusCode),

    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            let url = error
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "unknown url".to_string());
            FetchError::Timeout(url)
        } else {
            FetchError::Http(error)
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
