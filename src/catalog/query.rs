//! Catalog Query Engine
//!
//! A pure function from (product collection, `FilterSpec`) to the
//! ordered subset to display. Filters narrow in a fixed order, then a
//! stable sort applies the selected key, so equal-key products keep
//! their relative catalog order.

use super::models::{normalize_condition, FilterSpec, Product, SortKey};

/// Computes the matching, ordered product subset for `spec`.
///
/// An empty result is a normal outcome, not an error: an empty catalog,
/// a query nothing matches, or `min_price > max_price` all yield an
/// empty list.
pub fn select<'a>(products: &'a [Product], spec: &FilterSpec) -> Vec<&'a Product> {
    let mut result: Vec<&Product> = products.iter().collect();

    if !spec.query.is_empty() {
        let needle = spec.query.to_lowercase();
        result.retain(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.brand.to_lowercase().contains(&needle)
                || p.processor.to_lowercase().contains(&needle)
        });
    }

    if let Some(category) = &spec.category {
        result.retain(|p| &p.category == category);
    }

    if !spec.brands.is_empty() {
        result.retain(|p| spec.brands.contains(&p.brand));
    }

    if !spec.conditions.is_empty() {
        result.retain(|p| spec.conditions.contains(&normalize_condition(&p.condition)));
    }

    result.retain(|p| spec.min_price <= p.price && p.price <= spec.max_price);

    // Vec::sort_by is stable; ties keep the filtered order.
    match spec.sort {
        SortKey::Featured => result.sort_by_key(|p| !p.featured),
        SortKey::PriceLowToHigh => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHighToLow => result.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => result.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Discount => result.sort_by(|a, b| b.discount.cmp(&a.discount)),
    }

    result
}
