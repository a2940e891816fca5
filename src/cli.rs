// src/cli.rs
// =============================================================================
// Command-line interface, built with clap's derive API.
//
// Running with no arguments hunts the default target with the default
// timeout, so `readme-hunter` on its own is the common case.
// =============================================================================

use clap::Parser;

use crate::listing::DEFAULT_TIMEOUT_SECS;

/// Where the hunt starts when no URL is given.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/.hidden/";

#[derive(Parser, Debug)]
#[command(
    name = "readme-hunter",
    version = "0.1.0",
    about = "Walk a server's directory listings and find the README that isn't a decoy",
    long_about = "readme-hunter crawls an autoindex directory tree depth-first, reads every \
                  README it meets and stops at the first one that holds a hex token \
                  (or, failing that, odd-looking text that isn't a known decoy)."
)]
pub struct Cli {
    /// Directory listing to start from
    #[arg(default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Print the outcome as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["readme-hunter"]);
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert_eq!(cli.timeout, 5);
        assert!(!cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::parse_from([
            "readme-hunter",
            "http://10.0.0.5/.hidden/",
            "--timeout",
            "2",
            "--json",
            "-v",
        ]);
        assert_eq!(cli.base_url, "http://10.0.0.5/.hidden/");
        assert_eq!(cli.timeout, 2);
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_non_numeric_timeout() {
        assert!(Cli::try_parse_from(["readme-hunter", "--timeout", "soon"]).is_err());
    }
}
