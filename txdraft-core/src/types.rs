//! Domain types shared by the analyzers and the classifier.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type WalletId = u64;
pub type UserId = u64;

/// Direction of money movement. Closed set: expenses or income, nothing else.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    #[serde(rename = "DEBIT")]
    Debit,
    #[serde(rename = "CREDIT")]
    Credit,
}

/// Immutable input to one classification call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRequest {
    pub wallet_id: WalletId,
    /// Free-text utterance, mixed PT/EN ("gastei 23.50 no supermercado ontem")
    pub text: String,
}

/// Fully-resolved transaction proposal returned for user confirmation.
///
/// Never persisted. `description` carries the raw input text verbatim;
/// the detection flags tell the caller which fields were found in the
/// text versus filled by a fallback default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub wallet_id: WalletId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub category: String,
    pub subcategory: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount_detected: bool,
    /// true if the category was validated against the catalog, false if the
    /// draft fell back to a plain "Other" string
    pub category_matched: bool,
    pub date_detected: bool,
}
