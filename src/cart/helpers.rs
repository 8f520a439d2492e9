//! Shopping Cart Business Logic Helpers
//!
//! Order math for checkout plus small formatting helpers.

use super::models::CartLine;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Orders above this subtotal ship free.
pub fn free_shipping_threshold() -> Decimal {
    Decimal::new(500, 0)
}

/// Flat shipping charge below the free-shipping threshold.
pub fn flat_shipping_rate() -> Decimal {
    Decimal::new(49, 0)
}

/// Sales tax rate (8%).
pub fn tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

/// The cost breakdown quoted at checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderQuote {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderQuote {
    /// Quotes an order: flat-rate shipping waived above the threshold,
    /// tax at 8% rounded to cents, total = subtotal + shipping + tax.
    pub fn for_subtotal(subtotal: Decimal) -> Self {
        let shipping = if subtotal > free_shipping_threshold() {
            Decimal::ZERO
        } else {
            flat_shipping_rate()
        };
        let tax = (subtotal * tax_rate()).round_dp(2);
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// Generates an order number: `LS-` plus eight hex characters.
pub fn order_number() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("LS-{}", id[..8].to_uppercase())
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Dell XPS 13 9310, 1x MacBook Air M1"`.
pub fn format_item_summary(items: &[CartLine]) -> String {
    items
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.product.name))
        .collect::<Vec<_>>()
        .join(", ")
}
