//! Legacy one-shot flow: parse an utterance and immediately hand a finished
//! transaction to the persistence collaborator, with no draft/confirmation
//! round-trip and no catalog validation.
//!
//! Kept for backward compatibility only. It delegates to the same core
//! analyzers as the draft classifier but scans a reduced vocabulary with
//! short category names ("Food", "Bills") instead of the full taxonomy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use txdraft_core::amount::extract_amount;
use txdraft_core::date::resolve_date;
use txdraft_core::keywords::scan_keywords;
use txdraft_core::normalize::normalize;
use txdraft_core::txn_type::detect_transaction_type;
use txdraft_core::types::{ClassificationRequest, TransactionType, UserId, WalletId};

use crate::catalog::WalletStore;
use crate::classify::ClassifyError;

/// Reduced keyword → category table of the legacy flow.
pub static LEGACY_CATEGORY_KEYWORDS: &[(&str, &str)] = &[
    // Food
    ("supermercado", "Food"),
    ("supermarket", "Food"),
    ("mercado", "Food"),
    ("grocery", "Food"),
    ("groceries", "Food"),
    ("restaurante", "Food"),
    ("restaurant", "Food"),
    ("café", "Food"),
    ("cafe", "Food"),
    ("coffee", "Food"),
    ("almoço", "Food"),
    ("lunch", "Food"),
    ("jantar", "Food"),
    ("dinner", "Food"),
    ("comida", "Food"),
    ("food", "Food"),
    // Transport
    ("uber", "Transport"),
    ("taxi", "Transport"),
    ("gasolina", "Transport"),
    ("gas", "Transport"),
    ("fuel", "Transport"),
    ("combustível", "Transport"),
    ("transporte", "Transport"),
    ("transport", "Transport"),
    ("metro", "Transport"),
    ("bus", "Transport"),
    ("ônibus", "Transport"),
    // Income
    ("salário", "Income"),
    ("salary", "Income"),
    ("renda", "Income"),
    ("income", "Income"),
    ("pagamento", "Income"),
    ("payment", "Income"),
    // Entertainment
    ("cinema", "Entertainment"),
    ("movie", "Entertainment"),
    ("filme", "Entertainment"),
    ("netflix", "Entertainment"),
    ("spotify", "Entertainment"),
    // Shopping
    ("roupa", "Shopping"),
    ("clothes", "Shopping"),
    ("loja", "Shopping"),
    ("store", "Shopping"),
    ("shopping", "Shopping"),
    // Bills
    ("conta", "Bills"),
    ("bill", "Bills"),
    ("luz", "Bills"),
    ("electricity", "Bills"),
    ("água", "Bills"),
    ("water", "Bills"),
    ("internet", "Bills"),
    ("telefone", "Bills"),
    ("phone", "Bills"),
    // Health
    ("farmácia", "Health"),
    ("pharmacy", "Health"),
    ("médico", "Health"),
    ("doctor", "Health"),
    ("hospital", "Health"),
    ("saúde", "Health"),
    ("health", "Health"),
];

/// Reduced keyword → subcategory table. The original picked subcategories
/// with per-category branching; flattened here so both tables share the one
/// deterministic scan (longest keyword wins).
pub static LEGACY_SUBCATEGORY_KEYWORDS: &[(&str, &str)] = &[
    ("supermercado", "Groceries"),
    ("supermarket", "Groceries"),
    ("mercado", "Groceries"),
    ("grocery", "Groceries"),
    ("groceries", "Groceries"),
    ("restaurante", "Restaurant"),
    ("restaurant", "Restaurant"),
    ("café", "Coffee"),
    ("cafe", "Coffee"),
    ("coffee", "Coffee"),
    ("almoço", "Lunch"),
    ("lunch", "Lunch"),
    ("jantar", "Dinner"),
    ("dinner", "Dinner"),
    ("uber", "Ride"),
    ("taxi", "Ride"),
    ("gasolina", "Fuel"),
    ("gas", "Fuel"),
    ("fuel", "Fuel"),
    ("combustível", "Fuel"),
    ("metro", "Public Transport"),
    ("bus", "Public Transport"),
    ("ônibus", "Public Transport"),
    ("salário", "Salary"),
    ("salary", "Salary"),
    ("cinema", "Movies"),
    ("movie", "Movies"),
    ("filme", "Movies"),
    ("netflix", "Streaming"),
    ("spotify", "Streaming"),
    ("luz", "Electricity"),
    ("electricity", "Electricity"),
    ("água", "Water"),
    ("water", "Water"),
    ("internet", "Internet"),
    ("telefone", "Phone"),
    ("phone", "Phone"),
    ("farmácia", "Pharmacy"),
    ("pharmacy", "Pharmacy"),
    ("médico", "Doctor"),
    ("doctor", "Doctor"),
    ("hospital", "Hospital"),
];

/// A finished transaction handed to the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub wallet_id: WalletId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub category: String,
    pub subcategory: String,
    pub date: NaiveDate,
    pub description: String,
}

/// Persistence collaborator of the legacy flow. Returns the id of the
/// created transaction.
pub trait TransactionSink {
    fn create_transaction(&mut self, txn: NewTransaction, user: UserId) -> anyhow::Result<u64>;
}

/// The legacy parse-and-persist entry point.
pub struct LegacyParser<'a> {
    wallets: &'a dyn WalletStore,
}

impl<'a> LegacyParser<'a> {
    pub fn new(wallets: &'a dyn WalletStore) -> Self {
        Self { wallets }
    }

    /// Parse the utterance and create the transaction in one step.
    ///
    /// Same extraction pipeline and amount requirement as the draft
    /// classifier; category/subcategory come from the reduced tables with
    /// "Other"/"General" defaults and are not validated against any catalog.
    pub fn parse_and_create(
        &self,
        sink: &mut dyn TransactionSink,
        request: &ClassificationRequest,
        user: UserId,
        today: NaiveDate,
    ) -> Result<u64, ClassifyError> {
        let wallet = self
            .wallets
            .resolve_wallet(request.wallet_id, user)?
            .ok_or(ClassifyError::WalletNotFound(request.wallet_id))?;

        let text = normalize(&request.text);

        let kind = detect_transaction_type(&text);
        let amount = extract_amount(&text);
        let Some(amount) = amount.amount.filter(|_| amount.detected) else {
            return Err(ClassifyError::AmountNotDetected);
        };
        let date = resolve_date(&text, &request.text, today);

        let category = scan_keywords(&text, LEGACY_CATEGORY_KEYWORDS).unwrap_or("Other");
        let subcategory = scan_keywords(&text, LEGACY_SUBCATEGORY_KEYWORDS).unwrap_or("General");

        let id = sink.create_transaction(
            NewTransaction {
                wallet_id: wallet.id,
                kind,
                amount,
                category: category.to_string(),
                subcategory: subcategory.to_string(),
                date: date.date,
                description: request.text.clone(),
            },
            user,
        )?;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryWallets;

    const USER: UserId = 1;

    #[derive(Default)]
    struct MemorySink {
        created: Vec<NewTransaction>,
    }

    impl TransactionSink for MemorySink {
        fn create_transaction(&mut self, txn: NewTransaction, _user: UserId) -> anyhow::Result<u64> {
            self.created.push(txn);
            Ok(self.created.len() as u64)
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
    }

    fn wallets() -> MemoryWallets {
        let mut wallets = MemoryWallets::new();
        wallets.add_wallet(3, "Main", USER);
        wallets
    }

    #[test]
    fn test_parse_and_create_groceries() {
        let wallets = wallets();
        let mut sink = MemorySink::default();
        let parser = LegacyParser::new(&wallets);

        let request = ClassificationRequest {
            wallet_id: 3,
            text: "Gastei 20 no supermercado ontem".to_string(),
        };
        let id = parser.parse_and_create(&mut sink, &request, USER, today()).unwrap();

        assert_eq!(id, 1);
        let txn = &sink.created[0];
        assert_eq!(txn.kind, TransactionType::Debit);
        assert_eq!(txn.amount, 20.0);
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.subcategory, "Groceries");
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2026, 8, 26).unwrap());
        assert_eq!(txn.description, "Gastei 20 no supermercado ontem");
    }

    #[test]
    fn test_unknown_vocabulary_defaults() {
        let wallets = wallets();
        let mut sink = MemorySink::default();
        let parser = LegacyParser::new(&wallets);

        let request = ClassificationRequest {
            wallet_id: 3,
            text: "coisas 12".to_string(),
        };
        parser.parse_and_create(&mut sink, &request, USER, today()).unwrap();

        let txn = &sink.created[0];
        assert_eq!(txn.category, "Other");
        assert_eq!(txn.subcategory, "General");
    }

    #[test]
    fn test_new_transaction_serializes_with_wire_names() {
        let txn = NewTransaction {
            wallet_id: 3,
            kind: TransactionType::Debit,
            amount: 20.0,
            category: "Food".to_string(),
            subcategory: "Groceries".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 26).unwrap(),
            description: "Gastei 20 no supermercado ontem".to_string(),
        };

        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["walletId"], 3);
        assert_eq!(json["type"], "DEBIT");
        assert_eq!(json["amount"], 20.0);
        assert_eq!(json["date"], "2026-08-26");
    }

    #[test]
    fn test_missing_amount_creates_nothing() {
        let wallets = wallets();
        let mut sink = MemorySink::default();
        let parser = LegacyParser::new(&wallets);

        let request = ClassificationRequest {
            wallet_id: 3,
            text: "sem valor aqui".to_string(),
        };
        let err = parser.parse_and_create(&mut sink, &request, USER, today()).unwrap_err();

        assert!(matches!(err, ClassifyError::AmountNotDetected));
        assert!(sink.created.is_empty());
    }
}
