// src/extract/mod.rs
// =============================================================================
// Everything that reads a fetched page.
//
// Submodules:
// - links: finds the absolute http(s) links on a page
// - records: pulls domain records out of a page with a CSS selector
//
// The traversal engine calls both through the traits below, so a crawl can
// swap in other parsers without touching the engine.
// =============================================================================

mod links;
mod records;

use crate::error::Result;

pub use links::HtmlLinkExtractor;
pub use records::{Record, SelectorRecordExtractor};

pub trait LinkExtractor {
    /// Absolute http(s) link targets found in `content`, in document order.
    /// Relative links are resolved against `base_url`.
    fn extract_links(&self, base_url: &str, content: &str) -> Result<Vec<String>>;
}

pub trait RecordExtractor {
    type Record;

    /// Records found in `content`, in document order. May be empty.
    fn extract_records(&self, content: &str) -> Result<Vec<Self::Record>>;
}
