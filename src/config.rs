// src/config.rs
// =============================================================================
// Crawl configuration.
//
// Two layers:
// - CrawlLimits: the immutable limits the traversal engine is built with
// - CrawlConfig: everything the binary needs, loadable from a JSON file and
//   overridden by command-line flags
//
// Rust concepts:
// - Option<T>: "unset" limits are None rather than magic numbers
// - serde defaults: missing JSON fields fall back to Default values
// =============================================================================

use crate::error::{CrawlError, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Record selector used when none is configured.
pub const DEFAULT_SELECTOR: &str = ".titleColumn a";

/// Desktop browser User-Agent; some sites refuse obvious bot agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

pub const DEFAULT_DELAY_SECS: f64 = 1.0;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Limits fixed when the engine is constructed
//
//   max_pages: stop after this many successful page visits (None = no limit)
//   max_depth: pages at this depth are visited but not expanded (None = no limit)
//   delay: pause between iterations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlLimits {
    pub max_pages: Option<usize>,
    pub max_depth: Option<usize>,
    pub delay: Duration,
}

impl Default for CrawlLimits {
    fn default() -> Self {
        Self {
            max_pages: None,
            max_depth: None,
            delay: Duration::from_secs_f64(DEFAULT_DELAY_SECS),
        }
    }
}

impl CrawlLimits {
    /// Returns true when a page at `depth` may have its links followed.
    pub fn allows_expansion(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth < max)
    }

    pub fn page_limit_reached(&self, pages_crawled: usize) -> bool {
        self.max_pages.is_some_and(|max| pages_crawled >= max)
    }
}

// Full configuration for one crawl run
//
// Example file:
//   {
//     "seeds": ["https://example.com/"],
//     "max_pages": 10,
//     "max_depth": 2,
//     "delay_secs": 0.5,
//     "selector": "h1"
//   }
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CrawlConfig {
    pub seeds: Vec<String>,
    pub max_pages: Option<usize>,
    pub max_depth: Option<usize>,
    pub delay_secs: f64,
    pub selector: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seeds: Vec::new(),
            max_pages: None,
            max_depth: None,
            delay_secs: DEFAULT_DELAY_SECS,
            selector: DEFAULT_SELECTOR.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CrawlConfig {
    /// Loads a config from a JSON file. Fields missing from the file keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let config: CrawlConfig = serde_json::from_str(contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // Also catches NaN, infinity and values too large for a Duration
        if let Err(e) = Duration::try_from_secs_f64(self.delay_secs) {
            return Err(CrawlError::Config(format!(
                "delay_secs must be a non-negative number of seconds, got {}: {}",
                self.delay_secs, e
            )));
        }
        if self.timeout_secs == 0 {
            return Err(CrawlError::Config("timeout_secs must be at least 1".to_string()));
        }
        if self.selector.trim().is_empty() {
            return Err(CrawlError::Config("selector must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn limits(&self) -> CrawlLimits {
        CrawlLimits {
            max_pages: self.max_pages,
            max_depth: self.max_depth,
            delay: Duration::from_secs_f64(self.delay_secs),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
