//! The search-result pipeline.
//!
//! Everything between "a keyword" and "a batch of extracted records" lives
//! here, leaves first:
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`selectors`] | CSS hooks on the search listing |
//! | [`dates`] | `"Month Day"` → `MM-DD` normalization |
//! | [`money`] | currency-mention heuristic |
//! | [`extract`] | one result card → one [`crate::models::NewsRecord`] |
//! | [`pagination`] | page-bounded traversal of a result listing |
//! | [`session`] | one keyword's search lifecycle |
//!
//! The pipeline is deliberately sequential: it drives a single
//! [`crate::browser::BrowserSession`], which holds exactly one "current page"
//! at a time.

pub mod dates;
pub mod extract;
pub mod money;
pub mod pagination;
pub mod selectors;
pub mod session;
