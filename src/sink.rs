// src/sink.rs
// =============================================================================
// Where extracted records go.
//
// The engine calls a RecordSink once per record, or once with `on_empty`
// when a page had none. What happens next (printing, storing, indexing)
// is up to the sink.
//
// Provided sinks:
// - StdoutSink: prints records as they arrive, one per line
// - CollectingSink: keeps everything in memory (for --json and tests)
// =============================================================================

use std::fmt::{self, Display};
use std::io::{self, Write};
use tracing::debug;

pub trait RecordSink<R> {
    fn on_record(&mut self, url: &str, record: R);

    /// The page at `url` was processed and produced no records.
    fn on_empty(&mut self, url: &str);

    /// Called after the last record of a page. Most sinks don't care.
    fn on_page_done(&mut self, _url: &str) {}
}

// Prints records to any writer (stdout by default)
//
// Output for a page with records:
//   Records found on https://example.com/:
//   The First
//   The Second
//   <blank line>
//
// Output for a page without:
//   No records found on https://example.com/about
//   <blank line>
pub struct StdoutSink<W: Write = std::io::Stdout> {
    out: W,
    current_page: Option<String>,
    write_failed: bool,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdoutSink<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            current_page: None,
            write_failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // A failed write never fails the page; only the first one is logged
    fn write_line(&mut self, args: fmt::Arguments) {
        let result = self.out.write_fmt(args).and_then(|_| self.out.write_all(b"\n"));
        self.note_error(result);
    }

    fn note_error(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            if !self.write_failed {
                debug!("Could not write records: {}", e);
                self.write_failed = true;
            }
        }
    }
}

impl<W: Write, R: Display> RecordSink<R> for StdoutSink<W> {
    fn on_record(&mut self, url: &str, record: R) {
        if self.current_page.as_deref() != Some(url) {
            self.write_line(format_args!("Records found on {}:", url));
            self.current_page = Some(url.to_string());
        }
        self.write_line(format_args!("{}", record));
    }

    fn on_empty(&mut self, url: &str) {
        self.write_line(format_args!("No records found on {}\n", url));
    }

    fn on_page_done(&mut self, url: &str) {
        if self.current_page.as_deref() == Some(url) {
            self.write_line(format_args!(""));
            self.current_page = None;
        }
        let result = self.out.flush();
        self.note_error(result);
    }
}

/// Keeps every record in arrival order, tagged with the page it came from.
#[derive(Debug)]
pub struct CollectingSink<R> {
    pub records: Vec<(String, R)>,
    pub empty_pages: Vec<String>,
}

impl<R> Default for CollectingSink<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            empty_pages: Vec::new(),
        }
    }
}

impl<R> CollectingSink<R> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R> RecordSink<R> for CollectingSink<R> {
    fn on_record(&mut self, url: &str, record: R) {
        self.records.push((url.to_string(), record));
    }

    fn on_empty(&mut self, url: &str) {
        self.empty_pages.push(url.to_string());
    }
}
