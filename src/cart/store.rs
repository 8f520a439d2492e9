//! Cart Store
//!
//! The single source of truth for the user's cart. The store owns an
//! insertion-ordered list of lines, persists the whole list after every
//! mutation, and hands back an immutable snapshot so the presentation
//! layer can re-render from plain data.
//!
//! All operations are synchronous and absorb invalid input: removing or
//! updating an id that is not in the cart is a silent no-op, and a
//! malformed persisted cart hydrates as empty rather than erroring.

use super::models::{CartLine, CartSnapshot};
use super::storage::{CartStorage, CART_STORAGE_KEY};
use crate::catalog::Product;
use rust_decimal::Decimal;
use std::sync::Arc;

pub struct CartStore {
    /// Lines in insertion order; at most one per product id
    lines: Vec<CartLine>,

    /// Injected persistence slot (the localStorage analogue)
    storage: Arc<dyn CartStorage>,
}

impl CartStore {
    /// Opens the store, hydrating from the persisted slot. An absent or
    /// malformed slot yields an empty cart.
    pub fn open(storage: Arc<dyn CartStorage>) -> Self {
        let lines = match storage.read(CART_STORAGE_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(lines) => lines,
                Err(err) => {
                    tracing::debug!("persisted cart is malformed, starting empty: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Self { lines, storage }
    }

    /// Adds `quantity` of `product`. An existing line for the same id
    /// aggregates; otherwise a new line appends. Quantity is assumed
    /// positive by the caller and stock is deliberately not checked.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> CartSnapshot {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            }),
        }
        self.persist();
        self.snapshot()
    }

    /// Removes the line for `product_id`; no-op when absent.
    pub fn remove_item(&mut self, product_id: u32) -> CartSnapshot {
        self.lines.retain(|l| l.product.id != product_id);
        self.persist();
        self.snapshot()
    }

    /// Sets the line's quantity, keeping its position. Zero or negative
    /// removes the line entirely; an unknown id is a no-op.
    pub fn update_quantity(&mut self, product_id: u32, quantity: i64) -> CartSnapshot {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            // saturate rather than truncate; a cast could wrap a large
            // positive value down to zero and break the quantity >= 1
            // invariant
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        self.persist();
        self.snapshot()
    }

    /// Empties the cart.
    pub fn clear(&mut self) -> CartSnapshot {
        self.lines.clear();
        self.persist();
        self.snapshot()
    }

    /// Sum of price x quantity over all lines, recomputed on each call.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of quantities over all lines.
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current state as plain data: lines in insertion order plus the
    /// derived totals.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.lines.clone(),
            total: self.total(),
            count: self.count(),
        }
    }

    /// Writes the whole line list back to the slot. Failures are logged
    /// and absorbed; the in-memory cart stays authoritative.
    fn persist(&self) {
        let payload = match serde_json::to_string(&self.lines) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!("cart serialization failed, skipping persist: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.write(CART_STORAGE_KEY, &payload) {
            tracing::warn!("cart persist failed: {err}");
        }
    }
}
