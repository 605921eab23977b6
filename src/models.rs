//! Data models for extracted search results.
//!
//! This module defines the two structures the pipeline hands around:
//! - [`NewsRecord`]: one extracted result card with its derived features
//! - [`SearchBatch`]: the complete, immutable outcome of one keyword's search
//!
//! Field names on [`NewsRecord`] double as the CSV column names, so their
//! declaration order is the column order of the output files.

use serde::Serialize;

/// One news item extracted from a search-result card.
///
/// Every field is always present: sub-fields that could not be located take
/// their sentinel or empty value instead ([`crate::search::dates::NO_DATE`],
/// [`crate::search::extract::NO_IMAGE`], `""`). Records are built exactly once
/// per card and never mutated or deduplicated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsRecord {
    /// Card title, empty when the title sub-element is absent.
    pub title: String,
    /// Absolute URL of the card's primary anchor, empty when absent.
    pub link: String,
    /// Card description, empty when absent.
    pub description: String,
    /// Canonical `MM-DD` form, or the no-date sentinel. The year is never
    /// resolved: two dates a year apart normalize identically.
    pub date: String,
    /// Path of the stored picture artifact, or the no-image sentinel.
    pub picture_src: String,
    /// Whether the title or description mentions a monetary amount.
    pub contains_money: bool,
    /// Exact case-sensitive occurrences of the search keyword in the title.
    pub words_in_title: usize,
    /// Exact case-sensitive occurrences of the search keyword in the description.
    pub words_in_description: usize,
}

/// One keyword's complete result set, in page-then-in-page encounter order.
///
/// An empty `records` vector is a valid terminal state (the keyword matched
/// nothing), distinct from a failed search, which never produces a batch.
#[derive(Debug, Clone, Serialize)]
pub struct SearchBatch {
    pub keyword: String,
    pub records: Vec<NewsRecord>,
}

impl SearchBatch {
    /// Batch for a keyword whose search completed with zero results.
    pub fn empty(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            records: Vec::new(),
        }
    }
}
