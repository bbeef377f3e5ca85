// src/crawl/observer.rs
// =============================================================================
// Hooks into a running crawl.
//
// The engine reports progress and per-page failures through a CrawlObserver
// handed to it at construction. The observer lives exactly as long as the
// crawler that owns it, so two crawls in one process never share log state.
//
// TracingObserver (the default) turns every hook into a `tracing` event.
// =============================================================================

use super::report::CrawlReport;
use crate::error::CrawlError;
use tracing::{info, warn};

pub trait CrawlObserver: Send + Sync {
    /// A URL was taken off the frontier and is about to be fetched.
    fn on_visit_start(&self, _url: &str, _depth: usize) {}

    fn on_page_crawled(&self, _url: &str, _depth: usize, _records: usize, _links_enqueued: usize) {}

    /// Fetching or parsing `url` failed. The crawl carries on.
    fn on_failure(&self, _url: &str, _depth: usize, _error: &CrawlError) {}

    fn on_finish(&self, _report: &CrawlReport) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CrawlObserver for TracingObserver {
    fn on_visit_start(&self, url: &str, depth: usize) {
        info!(depth, "Crawling: {}", url);
    }

    fn on_page_crawled(&self, url: &str, depth: usize, records: usize, links_enqueued: usize) {
        info!(depth, records, links_enqueued, "Crawled: {}", url);
    }

    fn on_failure(&self, url: &str, depth: usize, error: &CrawlError) {
        warn!(depth, kind = ?error.kind(), "Failed to crawl: {}: {}", url, error);
    }

    fn on_finish(&self, report: &CrawlReport) {
        info!(
            pages_crawled = report.pages_crawled,
            failures = report.failures.len(),
            records = report.records_found,
            stop_reason = ?report.stop_reason,
            "Crawl finished"
        );
    }
}
