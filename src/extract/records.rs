// src/extract/records.rs
// =============================================================================
// Pulls domain records out of a page.
//
// A record is whatever a CSS selector matches: for every matched element we
// keep its visible text and, when it is a link, its href. The default
// selector picks titles out of chart-style listing pages.
// =============================================================================

use super::RecordExtractor;
use crate::error::{CrawlError, Result};
use scraper::{Html, Selector};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Text content of the element, whitespace collapsed
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[derive(Debug, Clone)]
pub struct SelectorRecordExtractor {
    selector: Selector,
}

impl SelectorRecordExtractor {
    // Fails with CrawlError::Selector if `css` is not a valid selector,
    // so a typo stops the run before any page is fetched
    pub fn new(css: &str) -> Result<Self> {
        let selector = Selector::parse(css)
            .map_err(|e| CrawlError::Selector(format!("'{}': {}", css, e)))?;
        Ok(Self { selector })
    }
}

impl RecordExtractor for SelectorRecordExtractor {
    type Record = Record;

    fn extract_records(&self, content: &str) -> Result<Vec<Record>> {
        let document = Html::parse_document(content);

        let records = document
            .select(&self.selector)
            .map(|element| Record {
                text: collapse_whitespace(element.text()),
                href: element.value().attr("href").map(str::to_string),
            })
            .collect();

        Ok(records)
    }
}

// Joins text nodes and squeezes every whitespace run down to one space
fn collapse_whitespace<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
