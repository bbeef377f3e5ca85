// src/extract/links.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, so broken markup still parses
//
// We also use the `url` crate to:
// - Parse and validate URLs
// - Resolve relative URLs to absolute URLs
// =============================================================================

use super::LinkExtractor;
use crate::error::{CrawlError, Result};
use scraper::{Html, Selector};
use url::Url;

#[derive(Debug, Clone)]
pub struct HtmlLinkExtractor {
    anchors: Selector,
}

impl HtmlLinkExtractor {
    pub fn new() -> Result<Self> {
        let anchors = Selector::parse("a[href]")
            .map_err(|e| CrawlError::Selector(format!("a[href]: {}", e)))?;
        Ok(Self { anchors })
    }
}

impl LinkExtractor for HtmlLinkExtractor {
    // Example:
    //   content = "<a href='/docs'>Docs</a><a href='mailto:me@x.test'>Mail</a>"
    //   base_url = "https://example.com/page"
    //   result = ["https://example.com/docs"]
    fn extract_links(&self, base_url: &str, content: &str) -> Result<Vec<String>> {
        let base = Url::parse(base_url)
            .map_err(|e| CrawlError::Extraction(format!("invalid base URL '{}': {}", base_url, e)))?;

        let document = Html::parse_document(content);

        let links = document
            .select(&self.anchors)
            .filter_map(|element| element.value().attr("href"))
            .filter_map(|href| resolve_url(&base, href))
            .filter(|url| is_followable(url))
            .map(|url| url.to_string())
            .collect();

        Ok(links)
    }
}

// Resolves a possibly-relative href against the page URL
//
// Examples (base = "https://example.com/page/"):
//   "/docs"             -> https://example.com/docs
//   "../other"          -> https://example.com/other
//   "https://other.com" -> https://other.com/
//   "#section"          -> None (points back into the same page)
fn resolve_url(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    // Absolute hrefs parse on their own, relative ones fail and get joined
    match Url::parse(href) {
        Ok(url) => Some(url),
        Err(_) => base.join(href).ok(),
    }
}

fn is_followable(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
