// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Every crawl setting can come from a JSON config file (--config) or from
// a flag. Flags win over the file.
// =============================================================================

use breadth_crawler::config::CrawlConfig;
use breadth_crawler::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "breadth-crawler",
    version,
    about = "Crawl websites breadth-first and extract records from every page",
    long_about = "breadth-crawler starts from one or more seed URLs, visits pages level by level, \
                  prints the records a CSS selector matches on each page and follows links \
                  up to a depth and page-count limit."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug logging (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl from the given seed URLs
    ///
    /// Example: breadth-crawler crawl https://example.com --max-depth 2 --max-pages 10
    Crawl(CrawlArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct CrawlArgs {
    /// Seed URLs, visited first and in this order
    ///
    /// Replaces the seeds from --config when given
    pub seeds: Vec<String>,

    /// JSON config file with crawl settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stop after this many pages were crawled successfully
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Follow links only from pages shallower than this depth (seeds are depth 0)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Seconds to wait between requests (default: 1)
    #[arg(long, value_name = "SECS")]
    pub delay: Option<f64>,

    /// CSS selector for the records to extract (default: ".titleColumn a")
    #[arg(long)]
    pub selector: Option<String>,

    /// User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Per-request timeout in seconds (default: 10)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output the records and crawl report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl CrawlArgs {
    // Builds the final configuration: config file (or defaults), then flags on top
    pub fn into_config(self) -> Result<CrawlConfig> {
        let mut config = match &self.config {
            Some(path) => CrawlConfig::from_file(path)?,
            None => CrawlConfig::default(),
        };

        if !self.seeds.is_empty() {
            config.seeds = self.seeds;
        }
        if self.max_pages.is_some() {
            config.max_pages = self.max_pages;
        }
        if self.max_depth.is_some() {
            config.max_depth = self.max_depth;
        }
        if let Some(delay) = self.delay {
            config.delay_secs = delay;
        }
        if let Some(selector) = self.selector {
            config.selector = selector;
        }
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }

        config.validate()?;
        Ok(config)
    }
}
