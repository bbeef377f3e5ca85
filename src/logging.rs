// src/logging.rs
// =============================================================================
// Log output for the binary.
//
// The library only emits `tracing` events; this is the one place a
// subscriber gets installed. Everything goes to stderr so that stdout
// carries nothing but records (or the JSON document with --json).
//
// Filtering:
// - RUST_LOG is honoured when set
// - otherwise our crate logs at info (debug with --verbose), others at warn
// =============================================================================

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: bool) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_filter(verbose, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

// A non-empty RUST_LOG replaces the built-in directives entirely
fn build_filter(verbose: bool, rust_log: Option<&str>) -> Result<EnvFilter> {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        return Ok(EnvFilter::try_new(directives)?);
    }

    let level = if verbose { "debug" } else { "info" };
    Ok(EnvFilter::try_new(format!("warn,breadth_crawler={}", level))?)
}
