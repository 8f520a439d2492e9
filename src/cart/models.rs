//! Shopping Cart Domain Models
//!
//! Line items, the immutable snapshot the store hands back after every
//! mutation, and the wire types for the cart and checkout endpoints.

use crate::catalog::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for added items
fn default_quantity() -> u32 {
    1
}

/// One row in the cart: a snapshot of the product taken at add time,
/// plus the quantity. Identity is the product id; the store keeps at
/// most one line per id and `quantity >= 1` always.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,

    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal: price at add time times quantity.
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Immutable view of the cart handed to the presentation layer after
/// every read or mutation. Totals are recomputed from the lines on each
/// snapshot; the collection is small and O(n) is fine.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartSnapshot {
    /// Lines in insertion order
    pub items: Vec<CartLine>,

    /// Sum of price x quantity over all lines
    pub total: Decimal,

    /// Sum of quantities over all lines
    pub count: u32,
}

// =============================================================================
// Wire types
// =============================================================================

/// Input for `POST /cart/items`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemInput {
    pub product_id: u32,

    /// Quantity to add (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Input for `PATCH /cart/items/:id`. Quantity is signed: zero or
/// negative removes the line.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityInput {
    pub quantity: i64,
}

/// Shipping/contact form submitted with `POST /checkout`. Nothing here
/// is validated beyond deserialization; checkout is simulated.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInput {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    #[serde(default)]
    pub apartment: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Response for `POST /checkout`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_number: String,
    pub status: String,

    /// One-line summary, e.g. `"2x Dell XPS 13 9310, 1x MacBook Air M1"`
    pub item_summary: String,

    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}
