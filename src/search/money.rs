//! Currency mention detection.
//!
//! A heuristic, not a currency parser: dollar-sign amounts with optional
//! thousands grouping and cents, or a bare number followed by `dollars` or
//! `USD`. No locale awareness, no other currency symbols.

use once_cell::sync::Lazy;
use regex::Regex;

static MONEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\d{1,3}(,\d{3})*(\.\d{2})?|\d+(\.\d{2})?\s*dollars|\d+(\.\d{2})?\s*USD")
        .unwrap()
});

/// True when `text` contains a monetary amount.
pub fn contains_money(text: &str) -> bool {
    MONEY.is_match(text)
}
