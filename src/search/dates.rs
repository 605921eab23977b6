//! Month-day date normalization.
//!
//! Result cards carry dates as `"Month Day"` text (e.g. `"March 5"`), which
//! is re-rendered as `MM-DD`. Anything else becomes the [`NO_DATE`] sentinel.
//!
//! Known limitation: the source text never carries a year, so none is
//! resolved and two dates a year apart normalize to the same string.

use chrono::format::{parse, Parsed, StrftimeItems};

/// Sentinel for a missing or unparseable date.
pub const NO_DATE: &str = "No date found";

/// Parse `raw` as `"Month Day"` and re-render as `MM-DD`, or [`NO_DATE`].
pub fn normalize(raw: &str) -> String {
    match month_day(raw.trim()) {
        Some((month, day)) => format!("{month:02}-{day:02}"),
        None => NO_DATE.to_string(),
    }
}

fn month_day(raw: &str) -> Option<(u32, u32)> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, raw, StrftimeItems::new("%B %d")).ok()?;
    Some((parsed.month?, parsed.day?))
}
