// src/crawl/mod.rs
// =============================================================================
// This module handles the crawl itself.
//
// Features:
// - Breadth-first traversal from one or more seed URLs
// - De-duplicated frontier (every URL is visited at most once)
// - Depth limit, page-count limit and a polite delay between requests
// - Per-page failure isolation: one bad page never ends the run
//
// Submodules:
// - frontier: the FIFO work queue and the visited set
// - engine: the crawl loop (Crawler)
// - observer: progress and failure hooks
// - report: the summary a run returns
// =============================================================================

mod engine;
mod frontier;
mod observer;
mod report;

pub use engine::{Crawler, PageOutcome};
pub use frontier::{Frontier, FrontierEntry};
pub use observer::{CrawlObserver, TracingObserver};
pub use report::{CrawlReport, PageFailure, StopReason};
