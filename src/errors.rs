//! Error types shared across the crate.
//!
//! The single [`Error`] enum keeps the distinction the pipeline cares about
//! explicit: an element that is legitimately absent ([`Error::ElementNotFound`])
//! is a different condition from a malformed selector, a half-driven session,
//! or a page whose structure no longer matches the extraction logic.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The locator found no element for a selector. Recoverable at the
    /// call site when the element is optional.
    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("invalid selector {0:?}")]
    Selector(String),

    /// The session was asked for its page before any navigation happened.
    #[error("no page loaded in browser session")]
    NoPage,

    #[error("unreadable page count indicator: {0:?}")]
    PageCount(String),

    /// The search/sort/pagination sequence for one keyword could not
    /// proceed. Isolated at the batch boundary.
    #[error("search for {keyword:?} failed: {source}")]
    Search {
        keyword: String,
        #[source]
        source: Box<Error>,
    },

    /// Results were reported for the keyword but extraction collected
    /// nothing, which means the page structure and the extraction logic
    /// are out of sync.
    #[error("results reported for {0:?} but no records were collected")]
    NoRecords(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
