//! Monetary amount extraction.
//!
//! One regex over the whole utterance; the first match in left-to-right scan
//! order is authoritative. Multiple numeric mentions are not disambiguated.

use regex::Regex;
use std::sync::LazyLock;

// Optional leading currency marker (€, $, R$), a number like 23, 23.5,
// 23,50, and an optional trailing currency word or symbol. Input arrives
// lowercased, so the R$ alternative accepts both cases.
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:€|\$|[rR]\$)?\s*(\d+(?:[.,]\d{1,2})?)\s*(?:euros?|reais|dollars?|€|\$)?")
        .expect("amount pattern is a valid regex")
});

/// Outcome of a single extraction attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountResult {
    pub amount: Option<f64>,
    pub detected: bool,
}

impl AmountResult {
    fn none() -> Self {
        Self { amount: None, detected: false }
    }
}

/// Extract the first monetary quantity from normalized text.
///
/// The decimal separator is locale-tolerant: a comma is normalized to a dot
/// before parsing, so "23,50" and "23.50" yield the same value. Values that
/// fail to parse or are not strictly positive count as not detected. This
/// function has no error path.
pub fn extract_amount(text: &str) -> AmountResult {
    let Some(caps) = AMOUNT_RE.captures(text) else {
        return AmountResult::none();
    };

    let raw = caps[1].replace(',', ".");
    match raw.parse::<f64>() {
        Ok(amount) if amount > 0.0 && amount.is_finite() => AmountResult {
            amount: Some(amount),
            detected: true,
        },
        _ => AmountResult::none(),
    }
}
