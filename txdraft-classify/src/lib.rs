//! txdraft-classify: catalog lookup traits, taxonomy resolution, the draft
//! classifier, and the legacy one-shot parsing shim.

pub mod catalog;
pub mod classify;
pub mod legacy;
pub mod taxonomy;

pub use catalog::{
    Catalog, CatalogCategory, CatalogSubcategory, CategoryId, MemoryCatalog, MemoryWallets, Owner,
    Wallet, WalletStore,
};
pub use classify::{Classifier, ClassifyError};
pub use legacy::{LegacyParser, NewTransaction, TransactionSink};
pub use taxonomy::{CategoryMatch, resolve_category, resolve_subcategory};
