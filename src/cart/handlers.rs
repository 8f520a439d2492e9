//! REST API handlers for shopping cart operations
//!
//! Cart reads and mutations plus the simulated checkout. Every mutation
//! responds with the new cart snapshot so the client can re-render from
//! plain data without a follow-up read.

use super::helpers::{format_item_summary, order_number, OrderQuote};
use super::models::{AddItemInput, CheckoutInput, OrderConfirmation, UpdateQuantityInput};
use super::store::CartStore;
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use serde_json::json;
use std::sync::MutexGuard;

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(get_cart).delete(clear_cart))
        .route("/cart/items", post(add_item))
        .route("/cart/items/:id", patch(update_quantity).delete(remove_item))
        .route("/checkout", post(checkout))
}

fn cart(state: &SharedState) -> MutexGuard<'_, CartStore> {
    state.cart.lock().expect("cart store lock poisoned")
}

/// Endpoint: GET /cart
async fn get_cart(State(state): State<SharedState>) -> impl IntoResponse {
    Json(cart(&state).snapshot())
}

/// Endpoint: POST /cart/items
/// Adds a catalog product to the cart, aggregating quantity when the
/// product is already in it. Unknown product ids are a 404; quantity on
/// an existing line is deliberately not capped by stock.
async fn add_item(
    State(state): State<SharedState>,
    Json(payload): Json<AddItemInput>,
) -> impl IntoResponse {
    match state.catalog.find(payload.product_id) {
        Some(product) => {
            let snapshot = cart(&state).add_item(product, payload.quantity);
            Json(snapshot).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "unknown product" })),
        )
            .into_response(),
    }
}

/// Endpoint: PATCH /cart/items/:id
/// Sets the line's quantity; zero or negative removes it. Unknown ids
/// are silent no-ops, so the response is always the current snapshot.
async fn update_quantity(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
    Json(payload): Json<UpdateQuantityInput>,
) -> impl IntoResponse {
    Json(cart(&state).update_quantity(id, payload.quantity))
}

/// Endpoint: DELETE /cart/items/:id
async fn remove_item(State(state): State<SharedState>, Path(id): Path<u32>) -> impl IntoResponse {
    Json(cart(&state).remove_item(id))
}

/// Endpoint: DELETE /cart
async fn clear_cart(State(state): State<SharedState>) -> impl IntoResponse {
    Json(cart(&state).clear())
}

/// Endpoint: POST /checkout
/// Quotes shipping and tax over the cart subtotal, emits an order
/// confirmation, and clears the cart. Payment is simulated; the form
/// payload is accepted but only logged.
async fn checkout(
    State(state): State<SharedState>,
    Json(payload): Json<CheckoutInput>,
) -> impl IntoResponse {
    let mut store = cart(&state);
    if store.is_empty() {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "error": "cart is empty" })),
        )
            .into_response();
    }

    let snapshot = store.snapshot();
    let quote = OrderQuote::for_subtotal(snapshot.total);
    let order_number = order_number();
    let item_summary = format_item_summary(&snapshot.items);

    tracing::info!(
        "CHECKOUT: order {} for {} <{}> - {}",
        order_number,
        payload.first_name,
        payload.email,
        item_summary
    );

    store.clear();

    Json(OrderConfirmation {
        order_number,
        status: "confirmed".to_string(),
        item_summary,
        subtotal: quote.subtotal,
        shipping: quote.shipping,
        tax: quote.tax,
        total: quote.total,
    })
    .into_response()
}
