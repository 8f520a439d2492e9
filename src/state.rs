//! Application State
//!
//! The read-only catalog plus the single cart store, constructed once at
//! startup with an injected storage adapter and threaded to handlers
//! through the router. The mutex serializes cart mutations; the core
//! itself is synchronous and does not coordinate.

use crate::cart::{CartStorage, CartStore};
use crate::catalog::Catalog;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

pub struct AppState {
    /// Immutable product catalog
    pub catalog: Catalog,

    /// The one shared mutable resource
    pub cart: Mutex<CartStore>,
}

impl AppState {
    /// Builds the state around an injected storage adapter; the cart
    /// hydrates from it immediately.
    pub fn new(catalog: Catalog, storage: Arc<dyn CartStorage>) -> Self {
        Self {
            catalog,
            cart: Mutex::new(CartStore::open(storage)),
        }
    }
}

/// Resolves the state directory for the file-backed cart slot:
/// `LAPSTONE_STATE_DIR` when set, else `.lapstone/` beside an existing
/// `data/` directory (running from a checkout), else `.lapstone/` in the
/// working directory.
pub fn locate_state_directory(current_dir: &Path) -> PathBuf {
    if let Some(dir) = std::env::var_os("LAPSTONE_STATE_DIR") {
        return PathBuf::from(dir);
    }

    if current_dir.join("data").exists() {
        return current_dir.join(".lapstone");
    }

    if let Some(parent) = current_dir.parent() {
        if parent.join("data").exists() {
            return parent.join(".lapstone");
        }
    }

    PathBuf::from(".lapstone")
}
