//! Traversal across result pages.
//!
//! The page-count indicator (`"<current> of <total>"`) is read once, before
//! the loop, and bounds the whole traversal; later reads of the indicator
//! only feed logging, so a format shift between pages cannot change how many
//! pages are visited. The next-page link is resolved before any extraction
//! work touches the page.

use crate::artifacts::ArtifactStore;
use crate::browser::BrowserSession;
use crate::errors::{Error, Result};
use crate::locator::Document;
use crate::models::NewsRecord;
use crate::search::{extract, selectors};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Tunables for one walk.
#[derive(Debug, Clone)]
pub struct WalkSettings {
    /// Upper bound on pages visited; `None` walks every reported page.
    pub max_pages: Option<usize>,
    /// Pause before extracting each page, so lazily-loaded images have
    /// materialized. Tolerated wait, not a synchronization point.
    pub settle_delay: Duration,
}

impl Default for WalkSettings {
    fn default() -> Self {
        Self {
            max_pages: None,
            settle_delay: Duration::from_secs(1),
        }
    }
}

/// Visit every result page for `keyword` and extract records in encounter
/// order.
///
/// Fails with [`Error::NoRecords`] when the traversal completes without a
/// single record: the caller only walks after results were detected, so an
/// empty harvest means the extraction logic no longer matches the page.
#[instrument(level = "info", skip_all, fields(%keyword))]
pub async fn walk(
    browser: &mut impl BrowserSession,
    artifacts: &impl ArtifactStore,
    keyword: &str,
    settings: &WalkSettings,
) -> Result<Vec<NewsRecord>> {
    let total = {
        let first = Document::parse(&browser.page()?.body);
        page_total(&first.find_one(selectors::PAGE_COUNTS)?.text())?
    };
    let bound = settings.max_pages.map_or(total, |cap| total.min(cap));
    if bound < total {
        info!(total, bound, "Clamping page traversal");
    }

    let mut records = Vec::new();
    for page_number in 1..=bound {
        let snapshot = browser.page()?.clone();
        let page = Document::parse(&snapshot.body);

        if let Ok(counts) = page.find_one(selectors::PAGE_COUNTS) {
            debug!(page_number, indicator = %counts.text(), "Visiting result page");
        }

        let next_href = next_page_href(&page);
        let cards = page.find_many(selectors::CARD)?;
        info!(page_number, cards = cards.len(), "Extracting result cards");

        sleep(settings.settle_delay).await;

        let mut page_fields = Vec::with_capacity(cards.len());
        for card in &cards {
            page_fields.push(extract::card_fields(card, &snapshot.url));
        }
        for fields in page_fields {
            records.push(extract::build_record(fields, keyword, artifacts).await);
        }

        if page_number < bound {
            let href = next_href
                .ok_or_else(|| Error::ElementNotFound(selectors::NEXT_PAGE.to_string()))?;
            browser.follow_next(&href).await?;
        }
    }

    if records.is_empty() {
        return Err(Error::NoRecords(keyword.to_string()));
    }
    Ok(records)
}

/// Parse the `"<current> of <total>"` indicator into the total page count.
fn page_total(indicator: &str) -> Result<usize> {
    indicator
        .split(" of ")
        .nth(1)
        .and_then(|total| total.trim().replace(',', "").parse().ok())
        .ok_or_else(|| Error::PageCount(indicator.to_string()))
}

fn next_page_href(page: &Document) -> Option<String> {
    let node = page.find_one(selectors::NEXT_PAGE).ok()?;
    if let Some(href) = node.attr("href") {
        return Some(href.to_string());
    }
    node.find_child("a")
        .ok()?
        .attr("href")
        .map(str::to_string)
}
