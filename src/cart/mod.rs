//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartLine, CartSnapshot, inputs, responses)
//! - The cart store and its persistence adapters
//! - Business logic helpers (order math, formatting)
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod storage;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{CartLine, CartSnapshot};
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage};
pub use store::CartStore;
