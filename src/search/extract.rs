//! Record extraction from one rendered result card.
//!
//! Extraction never fails a card: each sub-field that cannot be located takes
//! its sentinel or empty value, the miss is logged, and the card source is
//! kept for a diagnostic snapshot. It runs in two phases so DOM handles never
//! cross an await point: [`card_fields`] pulls the raw sub-fields out of the
//! card synchronously, [`build_record`] derives the final record and stores
//! the picture artifact.

use crate::artifacts::ArtifactStore;
use crate::locator::Node;
use crate::models::NewsRecord;
use crate::search::{dates, money, selectors};
use crate::utils::picture_stem;
use tracing::{debug, warn};
use url::Url;

/// Sentinel for a card without a storable image.
pub const NO_IMAGE: &str = "no image found";

/// Raw sub-fields of one card. `None` marks a sub-element the locator
/// reported absent.
#[derive(Debug, Clone, Default)]
pub struct CardFields {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub image_src: Option<String>,
    /// Card source, kept only when a sub-field was missing so a diagnostic
    /// snapshot can be filed.
    pub failure_snapshot: Option<String>,
}

/// Pull the raw sub-fields out of one card. Relative URLs are resolved
/// against `page_url`.
pub fn card_fields(card: &Node<'_>, page_url: &Url) -> CardFields {
    let title = match card.find_child(selectors::CARD_TITLE) {
        Ok(node) => Some(node.text()),
        Err(err) => {
            debug!(error = %err, "Card has no title");
            None
        }
    };

    let link = match card.find_child(selectors::CARD_LINK) {
        Ok(node) => node.attr("href").map(|href| absolute(page_url, href)),
        Err(err) => {
            debug!(error = %err, "Card has no link");
            None
        }
    };

    let description = match card.find_child(selectors::CARD_DESCRIPTION) {
        Ok(node) => Some(node.text()),
        Err(err) => {
            debug!(error = %err, "Card has no description");
            None
        }
    };

    // The alternate date element is only consulted when the primary one is
    // present but empty.
    let date = match card.find_child(selectors::CARD_DATE) {
        Ok(node) => {
            let text = node.text();
            if text.is_empty() {
                card.find_child(selectors::CARD_ALT_DATE)
                    .ok()
                    .map(|alt| alt.text())
            } else {
                Some(text)
            }
        }
        Err(_) => None,
    };

    let image_src = card
        .find_child(selectors::CARD_IMAGE)
        .ok()
        .and_then(|node| image_source(&node))
        .map(|src| absolute(page_url, &src));

    let mut fields = CardFields {
        title,
        link,
        description,
        date,
        image_src,
        failure_snapshot: None,
    };
    if fields.title.is_none() || fields.link.is_none() || fields.description.is_none() {
        warn!(
            has_title = fields.title.is_some(),
            has_link = fields.link.is_some(),
            has_description = fields.description.is_some(),
            "Card is missing sub-fields; keeping its source for a snapshot"
        );
        fields.failure_snapshot = Some(card.html());
    }
    fields
}

/// Derive the final record for `keyword` from raw card fields.
///
/// Missing sub-fields resolve to sentinels; the record itself is always
/// produced. Re-running on the same fields yields an identical record.
pub async fn build_record(
    fields: CardFields,
    keyword: &str,
    artifacts: &impl ArtifactStore,
) -> NewsRecord {
    if let Some(snapshot) = &fields.failure_snapshot {
        if let Err(err) = artifacts.save_error_snapshot("extract_card", snapshot).await {
            warn!(error = %err, "Could not store card snapshot");
        }
    }

    let title = fields.title.unwrap_or_default();
    let link = fields.link.unwrap_or_default();
    let description = fields.description.unwrap_or_default();
    let date = fields
        .date
        .as_deref()
        .map(dates::normalize)
        .unwrap_or_else(|| dates::NO_DATE.to_string());

    let picture_src = match &fields.image_src {
        Some(src) => {
            let stem = picture_stem(&title, &date);
            match artifacts.save_picture(&stem, src).await {
                Ok(path) => path.display().to_string(),
                Err(err) => {
                    warn!(error = %err, %src, "Could not store picture");
                    NO_IMAGE.to_string()
                }
            }
        }
        None => NO_IMAGE.to_string(),
    };

    NewsRecord {
        contains_money: money::contains_money(&title) || money::contains_money(&description),
        words_in_title: count_occurrences(&title, keyword),
        words_in_description: count_occurrences(&description, keyword),
        title,
        link,
        description,
        date,
        picture_src,
    }
}

/// Exact, case-sensitive, non-overlapping substring count.
fn count_occurrences(text: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }
    text.matches(keyword).count()
}

fn absolute(page_url: &Url, href: &str) -> String {
    page_url
        .join(href)
        .map(String::from)
        .unwrap_or_else(|_| href.to_string())
}

fn image_source(node: &Node<'_>) -> Option<String> {
    if let Some(src) = node.attr("src") {
        return Some(src.to_string());
    }
    node.find_child("img")
        .ok()
        .and_then(|img| img.attr("src").map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::Document;
    use crate::search::testing::RecordingArtifacts;

    const FULL_CARD: &str = r#"
        <div class="PagePromo">
            <a href="/article/storm-cleanup">
                <span class="PagePromoContentIcons-text">Tracking the storm cleanup, cost $1,200</span>
            </a>
            <div class="PagePromo-description">Storm after storm battered the coast ahead of more storms</div>
            <div class="PagePromo-date">March 5</div>
            <img class="Image" src="/images/storm.jpg"/>
        </div>
    "#;

    fn page_url() -> Url {
        Url::parse("https://apnews.test/search?q=storm").unwrap()
    }

    fn fields_for(html: &str) -> CardFields {
        let document = Document::parse(html);
        let card = document.find_one(selectors::CARD).unwrap();
        card_fields(&card, &page_url())
    }

    #[tokio::test]
    async fn test_full_card_extraction() {
        let artifacts = RecordingArtifacts::default();
        let record = build_record(fields_for(FULL_CARD), "storm", &artifacts).await;

        assert_eq!(record.title, "Tracking the storm cleanup, cost $1,200");
        assert_eq!(record.link, "https://apnews.test/article/storm-cleanup");
        assert_eq!(
            record.description,
            "Storm after storm battered the coast ahead of more storms"
        );
        assert_eq!(record.date, "03-05");
        assert_eq!(
            record.picture_src,
            "pictures/tracking_the_storm_cleanup,_cost_$1,200_03-05.png"
        );
        assert!(record.contains_money);
        assert_eq!(record.words_in_title, 1);
        assert_eq!(record.words_in_description, 2);
        assert!(artifacts.snapshots.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_description_yields_empty_string() {
        let html = r#"
            <div class="PagePromo">
                <a href="https://apnews.test/article/x">
                    <span class="PagePromoContentIcons-text">A title</span>
                </a>
            </div>
        "#;
        let artifacts = RecordingArtifacts::default();
        let record = build_record(fields_for(html), "title", &artifacts).await;

        assert_eq!(record.description, "");
        assert_eq!(record.words_in_description, 0);
        // The miss was still reported as a card snapshot.
        assert_eq!(
            artifacts.snapshots.lock().unwrap().as_slice(),
            ["extract_card"]
        );
    }

    #[tokio::test]
    async fn test_missing_image_is_sentinel() {
        let html = r#"
            <div class="PagePromo">
                <a href="https://apnews.test/article/x">
                    <span class="PagePromoContentIcons-text">A title</span>
                </a>
                <div class="PagePromo-description">text</div>
            </div>
        "#;
        let artifacts = RecordingArtifacts::default();
        let record = build_record(fields_for(html), "x", &artifacts).await;

        assert_eq!(record.picture_src, NO_IMAGE);
        assert!(artifacts.pictures.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_date_is_sentinel() {
        let html = r#"
            <div class="PagePromo">
                <a href="https://apnews.test/article/x">
                    <span class="PagePromoContentIcons-text">A title</span>
                </a>
                <div class="PagePromo-description">text</div>
            </div>
        "#;
        let artifacts = RecordingArtifacts::default();
        let record = build_record(fields_for(html), "x", &artifacts).await;
        assert_eq!(record.date, dates::NO_DATE);
    }

    #[tokio::test]
    async fn test_empty_primary_date_falls_back_to_alternate() {
        let html = r#"
            <div class="PagePromo">
                <a href="https://apnews.test/article/x">
                    <span class="PagePromoContentIcons-text">On this day</span>
                </a>
                <div class="PagePromo-description">text</div>
                <div class="PagePromo-date"></div>
                <div class="TodayInHistoryPromo-date">July 4</div>
            </div>
        "#;
        let artifacts = RecordingArtifacts::default();
        let record = build_record(fields_for(html), "x", &artifacts).await;
        assert_eq!(record.date, "07-04");
    }

    #[tokio::test]
    async fn test_keyword_counts_are_exact_substring_counts() {
        let html = r#"
            <div class="PagePromo">
                <a href="https://apnews.test/article/x">
                    <span class="PagePromoContentIcons-text">cat cat dog</span>
                </a>
                <div class="PagePromo-description">Cat cats catalog</div>
            </div>
        "#;
        let artifacts = RecordingArtifacts::default();
        let record = build_record(fields_for(html), "cat", &artifacts).await;

        assert_eq!(record.words_in_title, 2);
        // Case-sensitive: "Cat" does not count; "cats"/"catalog" each contain "cat".
        assert_eq!(record.words_in_description, 2);
    }

    #[tokio::test]
    async fn test_extraction_is_idempotent() {
        let artifacts = RecordingArtifacts::default();
        let first = build_record(fields_for(FULL_CARD), "storm", &artifacts).await;
        let second = build_record(fields_for(FULL_CARD), "storm", &artifacts).await;
        assert_eq!(first, second);
    }
}
