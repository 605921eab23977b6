//! Batch driver with per-keyword isolation.
//!
//! Keywords are processed strictly in input order over one shared browser
//! session. A keyword whose search fails is logged and skipped; batches
//! already collected are never discarded because a later keyword fails.

use crate::artifacts::ArtifactStore;
use crate::browser::BrowserSession;
use crate::models::SearchBatch;
use crate::search::session::{self, SearchSettings};
use tracing::{error, info, instrument};

/// Run every keyword in order, returning one batch per keyword that
/// succeeded (empty-result successes included).
#[instrument(level = "info", skip_all, fields(keywords = keywords.len()))]
pub async fn run_all(
    browser: &mut impl BrowserSession,
    artifacts: &impl ArtifactStore,
    keywords: &[String],
    settings: &SearchSettings,
) -> Vec<SearchBatch> {
    let mut batches = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        match session::run_keyword(browser, artifacts, keyword, settings).await {
            Ok(batch) => {
                info!(%keyword, records = batch.records.len(), "Keyword completed");
                batches.push(batch);
            }
            Err(err) => {
                error!(%keyword, error = %err, "Keyword failed; continuing with the rest");
            }
        }
    }
    batches
}
