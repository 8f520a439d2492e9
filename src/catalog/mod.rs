//! Catalog Domain Module
//!
//! Everything about the read-only product side of the storefront:
//! - Domain models (Product, lookup lists, FilterSpec)
//! - The static catalog data source and its derived reads
//! - The pure filter/sort/search query engine
//! - REST API handlers

pub mod data;
pub mod handlers;
pub mod models;
pub mod query;

// Re-export commonly used types for convenience
pub use data::Catalog;
pub use handlers::routes;
pub use models::{FilterSpec, Product, SortKey};
