//! CSS hooks on the apnews.com search listing.
//!
//! Kept in one place since they are the part of the pipeline that breaks
//! when the site's markup changes.

/// Present only when a search matched nothing.
pub const NO_RESULTS: &str = ".SearchResultsModule-noResults";

/// Total-result-count indicator; informational only.
pub const RESULT_COUNT: &str = ".SearchResultsModule-count-desktop";

/// The "<current> of <total>" pagination indicator.
pub const PAGE_COUNTS: &str = ".Pagination-pageCounts";

/// The next-page control.
pub const NEXT_PAGE: &str = ".Pagination-nextPage";

/// One result card.
pub const CARD: &str = ".PagePromo";

pub const CARD_TITLE: &str = ".PagePromoContentIcons-text";
pub const CARD_LINK: &str = "a";
pub const CARD_DESCRIPTION: &str = ".PagePromo-description";
pub const CARD_DATE: &str = ".PagePromo-date";
/// Date variant used by "today in history" style cards.
pub const CARD_ALT_DATE: &str = ".TodayInHistoryPromo-date";
pub const CARD_IMAGE: &str = ".Image";
