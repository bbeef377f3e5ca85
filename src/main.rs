// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr)
// 3. Build the crawler from the config and run it
// 4. Print the records and a summary (or one JSON document)
// 5. Exit with proper code (0 = clean run, 1 = some pages failed, 2 = error)
// =============================================================================

mod cli;
mod logging;

use anyhow::{anyhow, Result};
use breadth_crawler::crawl::{CrawlReport, Crawler, StopReason};
use breadth_crawler::extract::{HtmlLinkExtractor, Record, SelectorRecordExtractor};
use breadth_crawler::fetch::HttpFetcher;
use breadth_crawler::sink::{CollectingSink, StdoutSink};
use clap::Parser;
use cli::{Cli, Commands, CrawlArgs};
use serde::Serialize;
use tracing::debug;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = every page crawled fine
//   Ok(1) = the crawl finished but some pages failed
//   Err = bad configuration or startup failure (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Crawl(args) => handle_crawl(args).await,
    }
}

async fn handle_crawl(args: CrawlArgs) -> Result<i32> {
    let json = args.json;
    let config = args.into_config()?;
    debug!(?config, "Resolved configuration");

    if config.seeds.is_empty() {
        return Err(anyhow!("no seed URLs given (pass them as arguments or in --config)"));
    }

    let fetcher = HttpFetcher::new(&config.user_agent, config.timeout())?;
    let link_extractor = HtmlLinkExtractor::new()?;
    let record_extractor = SelectorRecordExtractor::new(&config.selector)?;

    let mut crawler = Crawler::new(
        config.seeds.iter().cloned(),
        fetcher,
        link_extractor,
        record_extractor,
        config.limits(),
    );

    let report = if json {
        let mut sink = CollectingSink::new();
        let report = crawler.run(&mut sink).await;
        print_json(&report, &sink)?;
        report
    } else {
        let mut sink = StdoutSink::new();
        let report = crawler.run(&mut sink).await;
        print_summary(&report);
        report
    };

    if report.has_failures() {
        Ok(1)
    } else {
        Ok(0)
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    report: &'a CrawlReport,
    records: Vec<JsonRecord<'a>>,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    url: &'a str,
    #[serde(flatten)]
    record: &'a Record,
}

fn print_json(report: &CrawlReport, sink: &CollectingSink<Record>) -> Result<()> {
    let output = JsonOutput {
        report,
        records: sink
            .records
            .iter()
            .map(|(url, record)| JsonRecord { url, record })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_summary(report: &CrawlReport) {
    let stop = match report.stop_reason {
        StopReason::FrontierExhausted => "no more pages to visit",
        StopReason::PageLimitReached => "page limit reached",
    };

    println!("📊 Summary:");
    println!("   ✅ Crawled: {}", report.pages_crawled);
    println!("   ❌ Failed: {}", report.failures.len());
    println!("   📋 Records: {}", report.records_found);
    println!("   🛑 Stopped: {}", stop);

    for failure in &report.failures {
        println!("   ⚠️  {} ({})", failure.url, failure.message);
    }
}
