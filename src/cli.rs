//! Command-line interface definitions.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! All arguments have defaults, so a bare invocation runs the whole keyword
//! batch against the live site.

use clap::Parser;

/// Command-line arguments for the search export.
///
/// # Examples
///
/// ```sh
/// # Run with the default keywords file and output directory
/// apnews_search
///
/// # Custom keywords, custom output, first two result pages only
/// apnews_search -k ./keywords.json -o ./out --max-pages 2
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON file holding the keyword list, shaped {"keywords": [...]}
    #[arg(short, long, default_value = "input/keywords.json")]
    pub keywords_file: String,

    /// Directory for CSV output, pictures, and error snapshots
    #[arg(short, long, default_value = "output")]
    pub output_dir: String,

    /// Base URL of the news site
    #[arg(long, env = "APNEWS_BASE_URL", default_value = "https://apnews.com")]
    pub base_url: String,

    /// Upper bound on result pages visited per keyword (default: all)
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Pause before extracting each result page, in milliseconds, so
    /// lazily-loaded images can materialize
    #[arg(long, default_value_t = 1000)]
    pub settle_delay_ms: u64,

    /// HTTP request timeout in seconds; bounds every page-ready wait
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}
