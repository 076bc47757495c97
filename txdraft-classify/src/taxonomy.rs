//! Keyword-to-taxonomy resolution against the live catalog.
//!
//! Category and subcategory names are always non-empty in the result; the
//! `matched` flag records whether the category was validated against the
//! catalog or the draft fell back to a plain "Other" string.

use anyhow::Result;
use tracing::debug;
use txdraft_core::keywords::{CATEGORY_KEYWORDS, SUBCATEGORY_KEYWORDS, scan_keywords};
use txdraft_core::types::{TransactionType, UserId};

use crate::catalog::{Catalog, CategoryId};

pub const FALLBACK_CATEGORY: &str = "Other";
pub const FALLBACK_SUBCATEGORY: &str = "General";

/// Category resolution outcome. `id` is present only when the catalog
/// confirmed the category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMatch {
    pub name: String,
    pub id: Option<CategoryId>,
    pub matched: bool,
}

/// Map text to a catalog-validated category for the classified type.
///
/// A keyword hit suggests a category name; the catalog confirms it only if a
/// visible category with that name and the right direction exists. Any miss
/// (no keyword, unknown name, direction mismatch) falls back to the user's
/// "Other" category of that direction, or to a bare "Other" string when even
/// that is absent.
pub fn resolve_category(
    catalog: &dyn Catalog,
    text: &str,
    kind: TransactionType,
    user: UserId,
) -> Result<CategoryMatch> {
    if let Some(suggested) = scan_keywords(text, CATEGORY_KEYWORDS) {
        debug!(suggested, "category keyword hit");
        if let Some(category) = catalog.find_category_by_name(suggested, user)? {
            if category.kind == kind {
                return Ok(CategoryMatch {
                    name: category.name,
                    id: Some(category.id),
                    matched: true,
                });
            }
            debug!(suggested, "category direction mismatch, falling back");
        }
    }

    if let Some(other) = catalog.find_category_by_name(FALLBACK_CATEGORY, user)? {
        if other.kind == kind {
            return Ok(CategoryMatch {
                name: other.name,
                id: Some(other.id),
                matched: true,
            });
        }
    }

    Ok(CategoryMatch {
        name: FALLBACK_CATEGORY.to_string(),
        id: None,
        matched: false,
    })
}

/// Map text to a subcategory name within the resolved category.
///
/// Fallback chain when the keyword suggestion is absent from the catalog:
/// the category's "General" subcategory, then the first catalog-available
/// subcategory (insertion order), then the raw suggestion, then "General".
pub fn resolve_subcategory(
    catalog: &dyn Catalog,
    text: &str,
    category_id: Option<CategoryId>,
    user: UserId,
) -> Result<String> {
    let suggested = scan_keywords(text, SUBCATEGORY_KEYWORDS);

    if let (Some(category_id), Some(name)) = (category_id, suggested) {
        if let Some(subcategory) = catalog.find_subcategory_by_name(name, category_id, user)? {
            return Ok(subcategory.name);
        }
        debug!(name, "suggested subcategory not in catalog, falling back");
    }

    if let Some(category_id) = category_id {
        if catalog
            .find_subcategory_by_name(FALLBACK_SUBCATEGORY, category_id, user)?
            .is_some()
        {
            return Ok(FALLBACK_SUBCATEGORY.to_string());
        }

        let available = catalog.list_subcategories_for_category(category_id, user)?;
        if let Some(first) = available.into_iter().next() {
            return Ok(first.name);
        }
    }

    Ok(suggested.unwrap_or(FALLBACK_SUBCATEGORY).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MemoryCatalog, Owner};

    const USER: UserId = 1;

    #[test]
    fn test_keyword_to_validated_category() {
        let catalog = MemoryCatalog::with_defaults();
        let m = resolve_category(&catalog, "gastei 20 no supermercado", TransactionType::Debit, USER)
            .unwrap();
        assert_eq!(m.name, "Food & Dining");
        assert!(m.matched);
        assert!(m.id.is_some());
    }

    #[test]
    fn test_direction_mismatch_falls_back() {
        // "salário" suggests the CREDIT-only Salary category; classified as
        // DEBIT it cannot be used, and without an "Other" category the draft
        // carries the bare fallback string.
        let catalog = MemoryCatalog::with_defaults();
        let m = resolve_category(&catalog, "adiantamento do salário", TransactionType::Debit, USER)
            .unwrap();
        assert_eq!(m.name, "Other");
        assert!(!m.matched);
        assert!(m.id.is_none());
    }

    #[test]
    fn test_other_category_is_used_when_present() {
        let mut catalog = MemoryCatalog::new();
        let other_id = catalog.add_category("Other", TransactionType::Debit, Owner::Default);

        let m = resolve_category(&catalog, "coisas 12", TransactionType::Debit, USER).unwrap();
        assert_eq!(m.name, "Other");
        assert_eq!(m.id, Some(other_id));
        assert!(m.matched);
    }

    #[test]
    fn test_subcategory_exact_match() {
        let catalog = MemoryCatalog::with_defaults();
        let food = catalog.find_category_by_name("Food & Dining", USER).unwrap().unwrap();
        let name =
            resolve_subcategory(&catalog, "supermercado continente", Some(food.id), USER).unwrap();
        assert_eq!(name, "Groceries");
    }

    #[test]
    fn test_subcategory_falls_back_to_general() {
        let catalog = MemoryCatalog::with_defaults();
        let food = catalog.find_category_by_name("Food & Dining", USER).unwrap().unwrap();
        // "wifi" suggests Internet, which is not a Food & Dining subcategory.
        let name = resolve_subcategory(&catalog, "pagamento wifi", Some(food.id), USER).unwrap();
        assert_eq!(name, "General");
    }

    #[test]
    fn test_subcategory_first_available_without_general() {
        let mut catalog = MemoryCatalog::new();
        let id = catalog.add_category("Pets", TransactionType::Debit, Owner::User(USER));
        catalog.add_subcategory(id, "Vet", Owner::User(USER));
        catalog.add_subcategory(id, "Toys", Owner::User(USER));

        let name = resolve_subcategory(&catalog, "ração 9", Some(id), USER).unwrap();
        assert_eq!(name, "Vet");
    }

    #[test]
    fn test_no_category_id_returns_suggestion_or_general() {
        let catalog = MemoryCatalog::new();
        let suggested = resolve_subcategory(&catalog, "uber para o aeroporto", None, USER).unwrap();
        assert_eq!(suggested, "Taxi/Uber");

        let fallback = resolve_subcategory(&catalog, "pagamento estranho", None, USER).unwrap();
        assert_eq!(fallback, "General");
    }
}
