//! txdraft-core: pure text analyzers and domain types for the transaction classifier

pub mod amount;
pub mod date;
pub mod keywords;
pub mod normalize;
pub mod time;
pub mod txn_type;
pub mod types;

pub use amount::{AmountResult, extract_amount};
pub use date::{DateResult, resolve_date};
pub use keywords::{CATEGORY_KEYWORDS, SUBCATEGORY_KEYWORDS, scan_keywords};
pub use normalize::normalize;
pub use time::today_in_tz;
pub use txn_type::{CREDIT_KEYWORDS, DEBIT_KEYWORDS, detect_transaction_type};
pub use types::{ClassificationRequest, TransactionDraft, TransactionType};
