// src/error.rs
// =============================================================================
// Error types for the crawler library.
//
// Two kinds of failure can happen while visiting a page:
// - Transport: the page could not be retrieved (network, DNS, timeout, non-2xx)
// - Extraction: the page was retrieved but a parser could not handle it
//
// Both are caught per page by the traversal engine and never stop a run.
// The remaining variants are configuration/startup errors for the binary.
// =============================================================================

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which side of a page visit failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Transport,
    Extraction,
}

impl CrawlError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CrawlError::Http(_) | CrawlError::Status { .. } => FailureKind::Transport,
            _ => FailureKind::Extraction,
        }
    }
}

pub type Result<T> = std::result::Result<T, CrawlError>;
