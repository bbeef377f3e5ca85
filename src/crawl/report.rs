// src/crawl/report.rs
// =============================================================================
// What a finished crawl run hands back.
//
// The report is plain data (Serialize) so the binary can print it as a
// summary table or dump it as JSON without extra conversion.
// =============================================================================

use crate::error::{CrawlError, FailureKind};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Nothing left to visit
    FrontierExhausted,
    /// max_pages successful visits happened
    PageLimitReached,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFailure {
    pub url: String,
    pub depth: usize,
    pub kind: FailureKind,
    pub message: String,
}

impl PageFailure {
    pub fn new(url: &str, depth: usize, error: &CrawlError) -> Self {
        Self {
            url: url.to_string(),
            depth,
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlReport {
    /// Every attempted URL (successful or not), in visit order
    pub visited: Vec<String>,
    pub pages_crawled: usize,
    pub records_found: usize,
    pub failures: Vec<PageFailure>,
    pub stop_reason: StopReason,
}

impl CrawlReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
