//! The classification pipeline: one utterance in, one draft out.
//!
//! Composes the pure analyzers with the catalog collaborators. Performs no
//! writes, so a call is safe to retry and safe to run concurrently with
//! itself; the only I/O is the read-only catalog lookup.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;
use txdraft_core::amount::extract_amount;
use txdraft_core::date::resolve_date;
use txdraft_core::normalize::normalize;
use txdraft_core::txn_type::detect_transaction_type;
use txdraft_core::types::{ClassificationRequest, TransactionDraft, UserId, WalletId};

use crate::catalog::{Catalog, WalletStore};
use crate::taxonomy::{resolve_category, resolve_subcategory};

#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The one user-correctable input error: no positive numeric amount in
    /// the text. Everything else resolves to documented defaults.
    #[error(
        "could not extract a valid amount from the text; include a number like '23.50' or '100 euros'"
    )]
    AmountNotDetected,

    #[error("wallet {0} not found for this user")]
    WalletNotFound(WalletId),

    /// Infrastructure failure from a collaborator (catalog or wallet store).
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Turns free-text utterances into transaction drafts.
pub struct Classifier<'a> {
    wallets: &'a dyn WalletStore,
    catalog: &'a dyn Catalog,
}

impl<'a> Classifier<'a> {
    pub fn new(wallets: &'a dyn WalletStore, catalog: &'a dyn Catalog) -> Self {
        Self { wallets, catalog }
    }

    /// Classify one utterance into a draft, anchored on `today`.
    ///
    /// The draft's `description` is the raw request text verbatim; all
    /// detection runs over the normalized copy. The amount is the only hard
    /// requirement — without it the call fails with `AmountNotDetected`.
    pub fn classify(
        &self,
        request: &ClassificationRequest,
        user: UserId,
        today: NaiveDate,
    ) -> Result<TransactionDraft, ClassifyError> {
        let wallet = self
            .wallets
            .resolve_wallet(request.wallet_id, user)?
            .ok_or(ClassifyError::WalletNotFound(request.wallet_id))?;

        let text = normalize(&request.text);

        let kind = detect_transaction_type(&text);
        debug!(?kind, "transaction type classified");

        let amount = extract_amount(&text);
        let Some(amount) = amount.amount.filter(|_| amount.detected) else {
            return Err(ClassifyError::AmountNotDetected);
        };
        debug!(amount, "amount extracted");

        let date = resolve_date(&text, &request.text, today);
        debug!(date = %date.date, detected = date.detected, "date resolved");

        let category = resolve_category(self.catalog, &text, kind, user)?;
        let subcategory = resolve_subcategory(self.catalog, &text, category.id, user)?;
        debug!(
            category = %category.name,
            matched = category.matched,
            subcategory = %subcategory,
            "taxonomy resolved"
        );

        Ok(TransactionDraft {
            wallet_id: wallet.id,
            kind,
            amount,
            category: category.name,
            subcategory,
            date: date.date,
            description: request.text.clone(),
            amount_detected: true,
            category_matched: category.matched,
            date_detected: date.detected,
        })
    }
}
