//! # AP News Keyword Search
//!
//! Automates the apnews.com search feature for a configured list of keywords,
//! paginates each result set sorted newest-first, and extracts one structured
//! record per result card (title, link, description, normalized date, picture
//! artifact, currency-mention flag, keyword-occurrence counts) into one CSV
//! file per keyword.
//!
//! ## Usage
//!
//! ```sh
//! apnews_search -k input/keywords.json -o output
//! ```
//!
//! ## Architecture
//!
//! The run is a strictly sequential pipeline over one shared browser session:
//! 1. **Input**: load the keyword list from the JSON config file
//! 2. **Search**: per keyword, submit the search, detect the empty-result
//!    state, apply the newest-first sort
//! 3. **Walk**: traverse exactly the number of pages the pagination
//!    indicator reports, extracting every result card
//! 4. **Output**: write one CSV per successful keyword, plus picture and
//!    error-snapshot artifacts
//!
//! A keyword that fails is logged and skipped; the batch always runs to
//! completion.

use clap::Parser;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod artifacts;
mod browser;
mod cli;
mod errors;
mod keywords;
mod locator;
mod models;
mod outputs;
mod runner;
mod search;
mod utils;

use artifacts::FsArtifactStore;
use browser::{HttpBrowserSession, SortOrder};
use cli::Cli;
use search::pagination::WalkSettings;
use search::session::SearchSettings;

#[tokio::main]
#[instrument]
async fn main() -> errors::Result<()> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("apnews_search starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // Early check: ensure the output dir is writable
    if let Err(e) = utils::ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Load keywords ----
    let keywords = keywords::load_keywords(&args.keywords_file).await?;
    if keywords.is_empty() {
        info!("Keyword list is empty; nothing to do");
        return Ok(());
    }

    // ---- One browser session and HTTP client for the whole run ----
    let mut browser =
        HttpBrowserSession::new(&args.base_url, Duration::from_secs(args.timeout_secs))?;
    let store = FsArtifactStore::create(browser.client(), Path::new(&args.output_dir)).await?;

    let settings = SearchSettings {
        sort: SortOrder::NewestFirst,
        walk: WalkSettings {
            max_pages: args.max_pages,
            settle_delay: Duration::from_millis(args.settle_delay_ms),
        },
    };

    // ---- Run the batch ----
    let batches = runner::run_all(&mut browser, &store, &keywords, &settings).await;

    // ---- Write one CSV per successful keyword ----
    let mut total_records = 0usize;
    for batch in &batches {
        total_records += batch.records.len();
        if let Err(e) = outputs::csv::write_batch(batch, Path::new(&args.output_dir)).await {
            error!(keyword = %batch.keyword, error = %e, "Failed to write batch CSV");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        keywords = keywords.len(),
        batches = batches.len(),
        records = total_records,
        failed = keywords.len() - batches.len(),
        ?elapsed,
        "Execution complete"
    );

    Ok(())
}
