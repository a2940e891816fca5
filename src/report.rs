// src/report.rs
// =============================================================================
// Everything the user reads goes through a Reporter.
//
// Text mode: progress lines, the found banner and the result lines all go
// to stdout.
// JSON mode: stdout carries nothing but the serialized outcome; progress
// lines and the banner move to stderr so `--json | jq` keeps working.
//
// Rust concepts:
// - Box<dyn Write>: stdout/stderr in the binary, in-memory buffers in tests
// =============================================================================

use crate::crawl::{CrawlOutcome, FoundMarker};
use anyhow::Result;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

pub struct Reporter {
    mode: OutputMode,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl Reporter {
    pub fn new(mode: OutputMode) -> Self {
        Self::with_writers(mode, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    pub fn with_writers(mode: OutputMode, out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self { mode, out, err }
    }

    // Where progress chatter goes in the current mode
    fn chatter(&mut self) -> &mut dyn Write {
        match self.mode {
            OutputMode::Text => &mut *self.out,
            OutputMode::Json => &mut *self.err,
        }
    }

    /// A progress or diagnostic line. Write failures are ignored.
    pub fn progress(&mut self, line: &str) {
        let _ = writeln!(self.chatter(), "{}", line);
    }

    /// The banner printed the moment a README matches.
    pub fn found(&mut self, found: &FoundMarker) {
        let rule = "=".repeat(60);
        let sink = self.chatter();
        let _ = writeln!(sink, "\n{}", rule);
        let _ = writeln!(sink, "FLAG FOUND AT: {}", found.url);
        let _ = writeln!(sink, "Content: {}", found.content);
        let _ = writeln!(sink, "{}\n", rule);
    }

    /// The final result: result lines in text mode, pretty JSON otherwise.
    pub fn outcome(&mut self, outcome: &CrawlOutcome) -> Result<()> {
        match self.mode {
            OutputMode::Json => {
                serde_json::to_writer_pretty(&mut self.out, outcome)?;
                writeln!(self.out)?;
            }
            OutputMode::Text => {
                match &outcome.found {
                    Some(found) => writeln!(self.out, "\n✓ Flag found: {}", found.content)?,
                    None => writeln!(self.out, "\n✗ No flag found")?,
                }
                writeln!(
                    self.out,
                    "📂 Directories visited: {}",
                    outcome.directories_visited
                )?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

// In-memory writer whose contents stay readable after it is boxed away
#[cfg(test)]
#[derive(Clone, Default)]
pub struct Capture(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl Capture {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[cfg(test)]
impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
pub fn silent() -> Reporter {
    Reporter::with_writers(OutputMode::Text, Box::new(io::sink()), Box::new(io::sink()))
}
