// src/crawl/engine.rs
// =============================================================================
// The traversal engine: a bounded, breadth-first crawl loop.
//
// How one iteration works (visit_one):
// 1. Pop the oldest (url, depth) entry off the frontier
// 2. Fetch the page
// 3. Extract records and hand them to the sink
// 4. If the depth limit allows, extract links and queue them at depth + 1
// 5. Mark the URL visited, whether or not 2-4 succeeded
//
// run() repeats that until the frontier is empty or max_pages successful
// visits have happened, sleeping for the configured delay between pages.
//
// Failure isolation:
// - A fetch or parse error fails only the page it happened on
// - The error goes to the observer and into the report, the loop continues
// - A failed page does not count toward max_pages and is never retried
// =============================================================================

use super::frontier::{Frontier, FrontierEntry};
use super::observer::{CrawlObserver, TracingObserver};
use super::report::{CrawlReport, PageFailure, StopReason};
use crate::config::CrawlLimits;
use crate::error::{CrawlError, Result};
use crate::extract::{LinkExtractor, RecordExtractor};
use crate::fetch::Fetcher;
use crate::sink::RecordSink;

// What happened to one frontier entry
#[derive(Debug)]
pub enum PageOutcome {
    Crawled {
        url: String,
        depth: usize,
        records: usize,
        links_enqueued: usize,
    },
    Failed {
        url: String,
        depth: usize,
        error: CrawlError,
    },
}

pub struct Crawler<F, L, R> {
    fetcher: F,
    link_extractor: L,
    record_extractor: R,
    limits: CrawlLimits,
    frontier: Frontier,
    observer: Box<dyn CrawlObserver>,
}

impl<F, L, R> Crawler<F, L, R>
where
    F: Fetcher,
    L: LinkExtractor,
    R: RecordExtractor,
{
    // Creates a crawler with its frontier seeded at depth 0
    //
    // Parameters:
    //   seeds: starting URLs, visited in the order given (may be empty)
    //   fetcher / link_extractor / record_extractor: the collaborators
    //   limits: page, depth and delay limits for the whole run
    pub fn new<I, S>(
        seeds: I,
        fetcher: F,
        link_extractor: L,
        record_extractor: R,
        limits: CrawlLimits,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut frontier = Frontier::new();
        frontier.seed(seeds);

        Self {
            fetcher,
            link_extractor,
            record_extractor,
            limits,
            frontier,
            observer: Box::new(TracingObserver),
        }
    }

    /// Replaces the default tracing observer.
    pub fn with_observer(mut self, observer: impl CrawlObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Runs the crawl until the frontier is empty or the page limit is hit.
    pub async fn run<S>(&mut self, sink: &mut S) -> CrawlReport
    where
        S: RecordSink<R::Record>,
    {
        let mut report = CrawlReport {
            visited: Vec::new(),
            pages_crawled: 0,
            records_found: 0,
            failures: Vec::new(),
            stop_reason: StopReason::FrontierExhausted,
        };

        // max_pages = 0 means nothing may be crawled at all
        if self.limits.page_limit_reached(0) {
            report.stop_reason = StopReason::PageLimitReached;
            self.observer.on_finish(&report);
            return report;
        }

        while let Some(outcome) = self.visit_one(sink).await {
            match outcome {
                PageOutcome::Crawled { url, records, .. } => {
                    report.pages_crawled += 1;
                    report.records_found += records;
                    report.visited.push(url);
                }
                PageOutcome::Failed { url, depth, error } => {
                    report.failures.push(PageFailure::new(&url, depth, &error));
                    report.visited.push(url);
                }
            }

            // Checked after the attempt: the page that hits the limit still counts
            if self.limits.page_limit_reached(report.pages_crawled) {
                report.stop_reason = StopReason::PageLimitReached;
                break;
            }

            if !self.limits.delay.is_zero() {
                tokio::time::sleep(self.limits.delay).await;
            }
        }

        self.observer.on_finish(&report);
        report
    }

    /// Processes the next frontier entry. Returns None if the frontier is empty.
    pub async fn visit_one<S>(&mut self, sink: &mut S) -> Option<PageOutcome>
    where
        S: RecordSink<R::Record>,
    {
        let entry = self.frontier.pop()?;
        self.observer.on_visit_start(&entry.url, entry.depth);

        let result = self.crawl_page(&entry, sink).await;

        // Always, so a failed page can never come back
        self.frontier.mark_visited(&entry.url);

        let FrontierEntry { url, depth } = entry;
        let outcome = match result {
            Ok((records, links_enqueued)) => {
                self.observer.on_page_crawled(&url, depth, records, links_enqueued);
                PageOutcome::Crawled {
                    url,
                    depth,
                    records,
                    links_enqueued,
                }
            }
            Err(error) => {
                self.observer.on_failure(&url, depth, &error);
                PageOutcome::Failed { url, depth, error }
            }
        };

        Some(outcome)
    }

    // Fetch, extract, expand. Returns (records forwarded, links enqueued)
    async fn crawl_page<S>(&mut self, entry: &FrontierEntry, sink: &mut S) -> Result<(usize, usize)>
    where
        S: RecordSink<R::Record>,
    {
        let content = self.fetcher.fetch(&entry.url).await?;

        let records = self.record_extractor.extract_records(&content)?;
        let record_count = records.len();
        if records.is_empty() {
            sink.on_empty(&entry.url);
        } else {
            for record in records {
                sink.on_record(&entry.url, record);
            }
        }
        sink.on_page_done(&entry.url);

        let mut links_enqueued = 0;
        if self.limits.allows_expansion(entry.depth) {
            let links = self.link_extractor.extract_links(&entry.url, &content)?;
            for link in links {
                if self.frontier.add(&link, entry.depth + 1) {
                    links_enqueued += 1;
                }
            }
        }

        Ok((record_count, links_enqueued))
    }
}
