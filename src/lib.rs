//! Lapstone Storefront Library
//!
//! Core functionality for a refurbished-laptop storefront: the product
//! catalog with its filter/sort/search query engine, and the persistent
//! shopping cart store, exposed over a small REST API.

// Domain modules
pub mod cart;
pub mod catalog;

// Infrastructure
pub mod router;
pub mod state;
