//! Catalog and wallet collaborators.
//!
//! The classifier only ever reads from these stores. They are modeled as
//! traits so the resolver can run against any backing store; the in-memory
//! implementations below are the ones the CLI and tests use.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use txdraft_core::types::{TransactionType, UserId, WalletId};

pub type CategoryId = u64;
pub type SubcategoryId = u64;

/// Who a catalog entry belongs to. Default entries are visible to everyone;
/// user entries only to their owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Default,
    User(UserId),
}

impl Owner {
    pub fn visible_to(self, user: UserId) -> bool {
        match self {
            Owner::Default => true,
            Owner::User(owner) => owner == user,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub id: CategoryId,
    pub name: String,
    pub kind: TransactionType,
    pub owner: Owner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSubcategory {
    pub id: SubcategoryId,
    pub category_id: CategoryId,
    pub name: String,
    pub owner: Owner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    pub name: String,
    pub owner: UserId,
}

/// Wallet-ownership check. Lookup failures are infrastructure errors and
/// propagate; an unowned or missing wallet is `Ok(None)`.
pub trait WalletStore {
    fn resolve_wallet(&self, wallet_id: WalletId, user: UserId) -> Result<Option<Wallet>>;
}

/// Read-only category/subcategory lookups, scoped to entries visible to the
/// given user (default-owned or user-owned).
pub trait Catalog {
    fn find_category_by_name(&self, name: &str, user: UserId) -> Result<Option<CatalogCategory>>;

    fn find_subcategory_by_name(
        &self,
        name: &str,
        category_id: CategoryId,
        user: UserId,
    ) -> Result<Option<CatalogSubcategory>>;

    /// Subcategories of a category visible to the user, in insertion order.
    fn list_subcategories_for_category(
        &self,
        category_id: CategoryId,
        user: UserId,
    ) -> Result<Vec<CatalogSubcategory>>;
}

// Default taxonomy shipped with the ledger: name, direction, subcategories.
// Every category additionally gets a "General" subcategory inserted first.
const DEFAULT_TAXONOMY: &[(&str, TransactionType, &[&str])] = &[
    ("Food & Dining", TransactionType::Debit, &["Restaurants", "Groceries", "Fast Food", "Coffee", "Delivery"]),
    ("Transportation", TransactionType::Debit, &["Fuel", "Public Transport", "Taxi/Uber", "Parking", "Car Maintenance"]),
    ("Shopping", TransactionType::Debit, &["Clothing", "Electronics", "Home & Garden", "Personal Care", "Gifts"]),
    ("Bills & Utilities", TransactionType::Debit, &["Electricity", "Water", "Internet", "Phone", "Rent/Mortgage"]),
    ("Entertainment", TransactionType::Debit, &["Movies", "Games", "Concerts", "Sports", "Subscriptions"]),
    ("Health", TransactionType::Debit, &["Medical", "Pharmacy", "Gym", "Insurance"]),
    ("Education", TransactionType::Debit, &["Courses", "Books", "School Supplies", "Tuition"]),
    ("Other Expenses", TransactionType::Debit, &["Miscellaneous", "Fees", "Donations"]),
    ("Salary", TransactionType::Credit, &["Monthly Salary", "Bonus", "Overtime", "Commission"]),
    ("Investments", TransactionType::Credit, &["Dividends", "Interest", "Capital Gains", "Rental Income"]),
    ("Freelance", TransactionType::Credit, &["Consulting", "Projects", "Gigs"]),
    ("Gifts Received", TransactionType::Credit, &["Birthday", "Holiday", "Other"]),
    ("Other Income", TransactionType::Credit, &["Refunds", "Cashback", "Reimbursements", "Miscellaneous"]),
];

/// Insertion-ordered in-memory catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryCatalog {
    categories: Vec<CatalogCategory>,
    subcategories: Vec<CatalogSubcategory>,
    next_id: u64,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-seeded with the default taxonomy.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for &(name, kind, subcategories) in DEFAULT_TAXONOMY {
            let category_id = catalog.add_category(name, kind, Owner::Default);
            catalog.add_subcategory(category_id, "General", Owner::Default);
            for &subcategory in subcategories {
                catalog.add_subcategory(category_id, subcategory, Owner::Default);
            }
        }
        catalog
    }

    pub fn add_category(
        &mut self,
        name: &str,
        kind: TransactionType,
        owner: Owner,
    ) -> CategoryId {
        let id = self.next_id();
        self.categories.push(CatalogCategory {
            id,
            name: name.to_string(),
            kind,
            owner,
        });
        id
    }

    pub fn add_subcategory(
        &mut self,
        category_id: CategoryId,
        name: &str,
        owner: Owner,
    ) -> SubcategoryId {
        let id = self.next_id();
        self.subcategories.push(CatalogSubcategory {
            id,
            category_id,
            name: name.to_string(),
            owner,
        });
        id
    }

    pub fn categories(&self) -> &[CatalogCategory] {
        &self.categories
    }

    pub fn subcategories(&self) -> &[CatalogSubcategory] {
        &self.subcategories
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Catalog for MemoryCatalog {
    fn find_category_by_name(&self, name: &str, user: UserId) -> Result<Option<CatalogCategory>> {
        Ok(self
            .categories
            .iter()
            .find(|c| c.name == name && c.owner.visible_to(user))
            .cloned())
    }

    fn find_subcategory_by_name(
        &self,
        name: &str,
        category_id: CategoryId,
        user: UserId,
    ) -> Result<Option<CatalogSubcategory>> {
        Ok(self
            .subcategories
            .iter()
            .find(|s| s.category_id == category_id && s.name == name && s.owner.visible_to(user))
            .cloned())
    }

    fn list_subcategories_for_category(
        &self,
        category_id: CategoryId,
        user: UserId,
    ) -> Result<Vec<CatalogSubcategory>> {
        Ok(self
            .subcategories
            .iter()
            .filter(|s| s.category_id == category_id && s.owner.visible_to(user))
            .cloned()
            .collect())
    }
}

/// In-memory wallet store for tests and the CLI harness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryWallets {
    wallets: Vec<Wallet>,
}

impl MemoryWallets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_wallet(&mut self, id: WalletId, name: &str, owner: UserId) {
        self.wallets.push(Wallet {
            id,
            name: name.to_string(),
            owner,
        });
    }
}

impl WalletStore for MemoryWallets {
    fn resolve_wallet(&self, wallet_id: WalletId, user: UserId) -> Result<Option<Wallet>> {
        Ok(self
            .wallets
            .iter()
            .find(|w| w.id == wallet_id && w.owner == user)
            .cloned())
    }
}
