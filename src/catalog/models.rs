//! Catalog Domain Models
//!
//! Data structures for the product catalog: the read-only `Product`
//! record, the auxiliary lookup types, and the `FilterSpec` that drives
//! the query engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Product Catalog Models
// =============================================================================

/// A single laptop listing. Read-only: sourced from the static catalog
/// and never mutated by the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier
    pub id: u32,

    pub name: String,
    pub brand: String,

    /// Category id, matches `Category::id` (never the "all" sentinel)
    pub category: String,

    /// Display label, e.g. "Very Good". Filter matching normalizes this
    /// to the lowercase-hyphenated condition id.
    pub condition: String,

    // Spec sheet
    pub processor: String,
    pub ram: String,
    pub storage: String,
    pub display: String,
    pub gpu: Option<String>,

    /// Current sale price. Invariant: `price <= original_price`.
    pub price: Decimal,
    pub original_price: Decimal,

    /// Percent off, pre-computed in the source data as
    /// `round(100 * (original_price - price) / original_price)`
    pub discount: u32,

    pub stock: u32,
    pub rating: f64,
    pub reviews: u32,

    /// Primary image plus the ordered gallery
    pub image: String,
    pub images: Vec<String>,

    pub featured: bool,
    pub warranty: String,
}

/// Category lookup entry ("all" included as the first entry)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Condition lookup entry; `id` is the lowercase-hyphenated key used in
/// filters ("very-good"), `name` the display label ("Very Good").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionLabel {
    pub id: String,
    pub name: String,
}

// =============================================================================
// Filter Specification
// =============================================================================

/// Sort key for the catalog query. Wire names match the storefront's
/// sort dropdown values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Featured products first, catalog order otherwise
    #[default]
    #[serde(rename = "featured")]
    Featured,
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    #[serde(rename = "price-high")]
    PriceHighToLow,
    /// Highest rated first
    #[serde(rename = "rating")]
    Rating,
    /// Biggest discount first
    #[serde(rename = "discount")]
    Discount,
}

/// The combination of selections driving the displayed product subset.
/// Transient UI state; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    /// Case-insensitive substring matched against name/brand/processor;
    /// empty string disables the search step
    pub query: String,

    /// `None` means "all categories"
    pub category: Option<String>,

    /// Selected brand names; empty means no brand filter
    pub brands: Vec<String>,

    /// Selected condition ids (lowercase-hyphenated); empty means no filter
    pub conditions: Vec<String>,

    /// Inclusive price bounds. `min > max` is not an error; it simply
    /// matches nothing.
    pub min_price: Decimal,
    pub max_price: Decimal,

    pub sort: SortKey,
}

/// Upper bound of the storefront's price slider; also the default
/// `max_price` when the caller does not narrow the range.
pub fn price_ceiling() -> Decimal {
    Decimal::new(3500, 0)
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: None,
            brands: Vec::new(),
            conditions: Vec::new(),
            min_price: Decimal::ZERO,
            max_price: price_ceiling(),
            sort: SortKey::default(),
        }
    }
}

/// Lowercases a condition label and hyphenates its spaces, producing the
/// filter key form: `"Very Good"` -> `"very-good"`.
pub fn normalize_condition(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}
