//! Catalog Data Source
//!
//! Loads the static product catalog and exposes the derived reads the
//! storefront pages need (featured picks, hot deals, related products,
//! per-category counts). The catalog is an immutable input: nothing in
//! the core ever writes to it.

use super::models::{Category, ConditionLabel, Product};
use serde::Deserialize;

/// The embedded catalog document. Swapping the data set means swapping
/// this file, not the code.
const CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// Hot deals are listings discounted at least this much.
pub const HOT_DEAL_MIN_DISCOUNT: u32 = 30;

/// The full static catalog: products plus the auxiliary lookup lists
/// rendered as filter options.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub brands: Vec<String>,
    pub conditions: Vec<ConditionLabel>,
}

impl Catalog {
    /// Parses the embedded catalog document.
    pub fn load_default() -> Result<Self, serde_json::Error> {
        serde_json::from_str(CATALOG_JSON)
    }

    /// Looks up a product by id.
    pub fn find(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Featured listings in catalog order, at most `limit`.
    pub fn featured(&self, limit: usize) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).take(limit).collect()
    }

    /// Listings discounted at least `HOT_DEAL_MIN_DISCOUNT` percent, in
    /// catalog order, at most `limit`.
    pub fn hot_deals(&self, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.discount >= HOT_DEAL_MIN_DISCOUNT)
            .take(limit)
            .collect()
    }

    /// Up to four other listings in the same category, in catalog order.
    pub fn related_to(&self, product: &Product) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(4)
            .collect()
    }

    /// Number of listings in the given category ("all" counts everything).
    pub fn category_count(&self, category_id: &str) -> usize {
        if category_id == "all" {
            return self.products.len();
        }
        self.products.iter().filter(|p| p.category == category_id).count()
    }
}
