//! DEBIT/CREDIT detection from keyword presence.

use crate::types::TransactionType;

/// Terms that indicate money going out (PT + EN).
pub static DEBIT_KEYWORDS: &[&str] = &[
    "gastei", "paguei", "comprei", "pago", "gasto", "compra",
    "spent", "paid", "bought", "purchase", "expense",
];

/// Terms that indicate money coming in (PT + EN).
pub static CREDIT_KEYWORDS: &[&str] = &[
    "recebi", "salário", "salario", "entrada", "ganhei", "recebido",
    "received", "salary", "income", "earned", "deposit",
];

/// Decide DEBIT vs CREDIT from keyword presence in normalized text.
///
/// CREDIT keywords are checked first: some phrases contain terms from both
/// sets ("recebi o pagamento") and income detection takes precedence. With
/// no keyword at all the answer is DEBIT, since expenses dominate real usage.
pub fn detect_transaction_type(text: &str) -> TransactionType {
    for keyword in CREDIT_KEYWORDS {
        if text.contains(keyword) {
            return TransactionType::Credit;
        }
    }

    for keyword in DEBIT_KEYWORDS {
        if text.contains(keyword) {
            return TransactionType::Debit;
        }
    }

    TransactionType::Debit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debit_keyword() {
        assert_eq!(detect_transaction_type("gastei 20 no mercado"), TransactionType::Debit);
        assert_eq!(detect_transaction_type("paid 15 for parking"), TransactionType::Debit);
    }

    #[test]
    fn test_credit_keyword() {
        assert_eq!(detect_transaction_type("recebi 1200 de salário"), TransactionType::Credit);
        assert_eq!(detect_transaction_type("earned 50 today"), TransactionType::Credit);
    }

    #[test]
    fn test_credit_wins_over_debit() {
        // Both sets match; CREDIT precedence must hold.
        assert_eq!(
            detect_transaction_type("recebi o reembolso do que paguei"),
            TransactionType::Credit
        );
    }

    #[test]
    fn test_no_keyword_defaults_to_debit() {
        assert_eq!(detect_transaction_type("supermercado 23.50"), TransactionType::Debit);
    }
}
