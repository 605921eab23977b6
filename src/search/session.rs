//! One keyword's search lifecycle.
//!
//! Submit the search, decide whether there are results at all, apply the
//! newest-first sort, then hand the listing to the pagination walker. A
//! keyword that matches nothing is a success with an empty batch; any step
//! failure is wrapped with the keyword, and a snapshot of the current page is
//! filed for diagnosis.

use crate::artifacts::ArtifactStore;
use crate::browser::{BrowserSession, SortOrder};
use crate::errors::{Error, Result};
use crate::locator::Document;
use crate::models::SearchBatch;
use crate::search::pagination::{self, WalkSettings};
use crate::search::selectors;
use tracing::{info, instrument, warn};

/// Settings for one keyword's run, shared across the batch.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub sort: SortOrder,
    pub walk: WalkSettings,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            sort: SortOrder::NewestFirst,
            walk: WalkSettings::default(),
        }
    }
}

/// Run one keyword end to end.
#[instrument(level = "info", skip_all, fields(%keyword))]
pub async fn run_keyword(
    browser: &mut impl BrowserSession,
    artifacts: &impl ArtifactStore,
    keyword: &str,
    settings: &SearchSettings,
) -> Result<SearchBatch> {
    match drive(browser, artifacts, keyword, settings).await {
        Ok(batch) => Ok(batch),
        Err(err) => {
            if let Ok(page) = browser.page() {
                if let Err(snapshot_err) = artifacts
                    .save_error_snapshot("search_keyword", &page.body)
                    .await
                {
                    warn!(error = %snapshot_err, "Could not store error snapshot");
                }
            }
            Err(Error::Search {
                keyword: keyword.to_string(),
                source: Box::new(err),
            })
        }
    }
}

async fn drive(
    browser: &mut impl BrowserSession,
    artifacts: &impl ArtifactStore,
    keyword: &str,
    settings: &SearchSettings,
) -> Result<SearchBatch> {
    browser.submit_search(keyword).await?;

    {
        let page = Document::parse(&browser.page()?.body);
        match page.find_one(selectors::NO_RESULTS) {
            Ok(_) => {
                info!(keyword, "No results found");
                return Ok(SearchBatch::empty(keyword));
            }
            Err(Error::ElementNotFound(_)) => {}
            Err(err) => return Err(err),
        }

        // Informational only; the pagination indicator bounds the loop.
        let total = page.find_one(selectors::RESULT_COUNT)?.text();
        info!(keyword, total = %total, "Results found");
    }

    browser.select_sort(settings.sort).await?;

    let records = pagination::walk(browser, artifacts, keyword, &settings.walk).await?;
    Ok(SearchBatch {
        keyword: keyword.to_string(),
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::testing::{
        card, listing, no_results_page, zero_delay, RecordingArtifacts, ScriptedBrowser,
    };

    fn settings() -> SearchSettings {
        SearchSettings {
            sort: SortOrder::NewestFirst,
            walk: zero_delay(),
        }
    }

    #[tokio::test]
    async fn test_zero_results_is_success_with_empty_batch() {
        let pages = [no_results_page()];
        let mut browser = ScriptedBrowser::new(&pages);
        let artifacts = RecordingArtifacts::default();

        let batch = run_keyword(&mut browser, &artifacts, "nothing", &settings())
            .await
            .unwrap();

        assert_eq!(batch.keyword, "nothing");
        assert!(batch.records.is_empty());
        // No sort is applied and no snapshot is filed for a clean empty result.
        assert!(browser.sorts.is_empty());
        assert!(artifacts.snapshots.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_results_are_sorted_newest_first_then_walked() {
        let pages = [listing(1, &[card("A story", "text")])];
        let mut browser = ScriptedBrowser::new(&pages);
        let artifacts = RecordingArtifacts::default();

        let batch = run_keyword(&mut browser, &artifacts, "story", &settings())
            .await
            .unwrap();

        assert_eq!(browser.searches, ["story"]);
        assert_eq!(browser.sorts, [SortOrder::NewestFirst]);
        assert_eq!(batch.records.len(), 1);
    }

    #[tokio::test]
    async fn test_failure_wraps_keyword_and_files_snapshot() {
        // A listing that reports results but has no pagination indicator:
        // the walk step fails after the page is already loaded.
        let pages = [format!(
            r#"<html><body>
                <div class="SearchResultsModule-count-desktop">12 Results</div>
                {}
            </body></html>"#,
            card("A story", "text")
        )];
        let mut browser = ScriptedBrowser::new(&pages);
        let artifacts = RecordingArtifacts::default();

        let err = run_keyword(&mut browser, &artifacts, "story", &settings())
            .await
            .unwrap_err();

        match err {
            Error::Search { keyword, source } => {
                assert_eq!(keyword, "story");
                assert!(matches!(*source, Error::ElementNotFound(_)));
            }
            other => panic!("expected Search error, got {other:?}"),
        }
        assert_eq!(
            artifacts.snapshots.lock().unwrap().as_slice(),
            ["search_keyword"]
        );
    }

    #[tokio::test]
    async fn test_missing_result_count_is_a_search_failure() {
        let pages = ["<html><body><div class=\"Pagination-pageCounts\">1 of 1</div></body></html>"
            .to_string()];
        let mut browser = ScriptedBrowser::new(&pages);
        let artifacts = RecordingArtifacts::default();

        let err = run_keyword(&mut browser, &artifacts, "story", &settings())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Search { .. }));
    }
}
