//! # Notice Watch
//!
//! A small crawler that watches university notice-board pages and posts
//! newly published notices to Slack.
//!
//! ## Pipeline
//!
//! For each configured source, one pass runs:
//! 1. **Fetch**: download the board page markup
//! 2. **Extract**: pull (title, href) pairs out of the page's notice table
//! 3. **Diff**: compare titles against the source's append-only store file
//! 4. **Record & notify**: append each new notice to the store and post it
//!    to the source's Slack channel
//!
//! The process exits after one pass over all sources; recurring execution
//! is left to an external scheduler such as cron.
//!
//! ## Usage
//!
//! ```sh
//! notice_watch --config config.json --log-file file.log
//! ```
//!
//! Console output is controlled with `RUST_LOG` (default `info`); the log
//! file receives error-level records only.

use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt as tfmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

mod cli;
mod config;
mod crawler;
mod extract;
mod fetch;
mod models;
mod slack;
mod store;
mod utils;

use cli::Cli;
use crawler::Crawler;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    // --- Tracing init: console plus error-only log file ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console_layer = tfmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tfmt::time::UtcTime::rfc_3339())
        .with_filter(filter);

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.log_file)?;
    let error_file_layer = tfmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_timer(tfmt::time::UtcTime::rfc_3339())
        .with_writer(Arc::new(log_file))
        .with_filter(LevelFilter::ERROR);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(error_file_layer)
        .init();

    let start_time = std::time::Instant::now();
    info!("notice_watch starting up");
    debug!(config = %args.config, log_file = %args.log_file, "Parsed CLI arguments");

    let config = config::load(&args.config)?;
    info!(
        sources = config.notices.len(),
        base_url = %config.base_url,
        "Loaded configuration"
    );

    let crawler = Crawler::new(config);
    crawler.run().await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
