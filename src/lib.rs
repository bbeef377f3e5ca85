// src/lib.rs
// =============================================================================
// breadth-crawler: a breadth-first web crawler.
//
// Given seed URLs it fetches pages, pulls records out of each page's markup,
// follows the links it finds and stops at configurable depth and page-count
// limits. Fetching, parsing and record handling are pluggable:
//
//   Fetcher         URL -> page content          (fetch::HttpFetcher)
//   LinkExtractor   page -> absolute links       (extract::HtmlLinkExtractor)
//   RecordExtractor page -> records              (extract::SelectorRecordExtractor)
//   RecordSink      records -> wherever          (sink::StdoutSink, sink::CollectingSink)
//
// crawl::Crawler drives them.
// =============================================================================

pub mod config;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod sink;

pub use config::{CrawlConfig, CrawlLimits};
pub use crawl::{CrawlObserver, CrawlReport, Crawler, Frontier, PageOutcome, StopReason};
pub use error::{CrawlError, FailureKind, Result};
