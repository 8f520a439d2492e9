//! Integration tests for the storefront REST API
//!
//! These tests drive the full router: catalog browsing with the
//! filter/sort/search pipeline, product detail and facets, cart
//! mutations with their snapshot responses, checkout, and persistence
//! of the cart across application restarts.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use lapstone_storefront::cart::{CartStorage, MemoryStorage};
use lapstone_storefront::catalog::Catalog;
use lapstone_storefront::router::create_app_router;
use lapstone_storefront::state::AppState;

/// Helper function to create a test app instance with an ephemeral cart slot
fn create_test_app() -> axum::Router {
    create_test_app_with_storage(Arc::new(MemoryStorage::new()))
}

fn create_test_app_with_storage(storage: Arc<dyn CartStorage>) -> axum::Router {
    let catalog = Catalog::load_default().expect("embedded catalog is valid");
    let state = Arc::new(AppState::new(catalog, storage));
    create_app_router(state)
}

/// Helper function to send a request and get the response
async fn send_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

fn product_ids(body: &Value) -> Vec<u64> {
    body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect()
}

fn checkout_form() -> Value {
    json!({
        "email": "sam@example.com",
        "firstName": "Sam",
        "lastName": "Rivera",
        "address": "1 Main St",
        "city": "Portland",
        "state": "OR",
        "zipCode": "97201"
    })
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn test_list_all_products() {
    let app = create_test_app();
    let catalog = Catalog::load_default().unwrap();

    let (status, body) = send_request(&app, "GET", "/products", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"].as_u64().unwrap() as usize, catalog.products.len());
    assert_eq!(product_ids(&body).len(), catalog.products.len());
}

#[tokio::test]
async fn test_category_filter_with_featured_sort() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "GET", "/products?category=gaming", None).await;

    assert_eq!(status, StatusCode::OK);
    // The featured gaming listing leads; the rest keep catalog order.
    assert_eq!(product_ids(&body), vec![6, 4, 8]);
}

#[tokio::test]
async fn test_category_all_is_no_filter() {
    let app = create_test_app();

    let (_, all) = send_request(&app, "GET", "/products?category=all", None).await;
    let (_, unfiltered) = send_request(&app, "GET", "/products", None).await;

    assert_eq!(product_ids(&all), product_ids(&unfiltered));
}

#[tokio::test]
async fn test_price_sort_ascending() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "GET", "/products?sort=price-low", None).await;

    assert_eq!(status, StatusCode::OK);
    let prices: Vec<f64> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_combined_brand_and_price_filters() {
    let app = create_test_app();

    let (status, body) = send_request(
        &app,
        "GET",
        "/products?brand=Dell,Apple&maxPrice=900",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(product_ids(&body), vec![1, 7, 9]);
}

#[tokio::test]
async fn test_condition_filter_uses_normalized_keys() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "GET", "/products?condition=very-good", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["count"].as_u64().unwrap() > 0);
    for p in body["products"].as_array().unwrap() {
        assert_eq!(p["condition"], "Very Good");
    }
}

#[tokio::test]
async fn test_search_matches_processor() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "GET", "/products?q=ryzen", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(product_ids(&body), vec![4, 8, 10, 11]);
}

#[tokio::test]
async fn test_search_without_matches_is_empty_not_error() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "GET", "/products?q=chromebook", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert!(body["products"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_product_detail_with_related() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "GET", "/products/4", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["id"], 4);
    let related = body["related"].as_array().unwrap();
    assert!(!related.is_empty());
    for r in related {
        assert_eq!(r["category"], "gaming");
        assert_ne!(r["id"], 4);
    }
}

#[tokio::test]
async fn test_product_detail_unknown_id() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "GET", "/products/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "product not found");
}

#[tokio::test]
async fn test_catalog_facets() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "GET", "/catalog", None).await;

    assert_eq!(status, StatusCode::OK);
    let categories = body["categories"].as_array().unwrap();
    let gaming = categories.iter().find(|c| c["id"] == "gaming").unwrap();
    assert_eq!(gaming["count"], 3);

    let all = categories.iter().find(|c| c["id"] == "all").unwrap();
    assert_eq!(
        all["count"].as_u64().unwrap() as usize,
        Catalog::load_default().unwrap().products.len()
    );

    assert!(!body["brands"].as_array().unwrap().is_empty());
    assert!(!body["conditions"].as_array().unwrap().is_empty());
    assert_eq!(body["priceCeiling"], "3500");
}

#[tokio::test]
async fn test_featured_and_deals_picks() {
    let app = create_test_app();

    let (status, featured) = send_request(&app, "GET", "/products/featured", None).await;
    assert_eq!(status, StatusCode::OK);
    let picks = featured["products"].as_array().unwrap();
    assert!(picks.len() <= 4);
    assert!(picks.iter().all(|p| p["featured"] == true));

    let (status, deals) = send_request(&app, "GET", "/products/deals", None).await;
    assert_eq!(status, StatusCode::OK);
    let picks = deals["products"].as_array().unwrap();
    assert_eq!(picks.len(), 3);
    assert!(picks.iter().all(|p| p["discount"].as_u64().unwrap() >= 30));
}

// =============================================================================
// Cart
// =============================================================================

#[tokio::test]
async fn test_empty_cart_snapshot() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "GET", "/cart", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["items"].as_array().unwrap().is_empty());
    assert_eq!(body["total"], "0");
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_add_items_aggregates_and_keeps_order() {
    let app = create_test_app();

    let (status, body) =
        send_request(&app, "POST", "/cart/items", Some(json!({ "productId": 1 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);

    // same product again: one line, quantity 3
    let (_, body) = send_request(
        &app,
        "POST",
        "/cart/items",
        Some(json!({ "productId": 1, "quantity": 2 })),
    )
    .await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["quantity"], 3);

    // a second product appends after the first
    let (_, body) =
        send_request(&app, "POST", "/cart/items", Some(json!({ "productId": 7 }))).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[1]["id"], 7);
    assert_eq!(body["count"], 4);
}

#[tokio::test]
async fn test_add_unknown_product() {
    let app = create_test_app();

    let (status, body) =
        send_request(&app, "POST", "/cart/items", Some(json!({ "productId": 999 }))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "unknown product");
}

#[tokio::test]
async fn test_update_quantity_and_remove() {
    let app = create_test_app();
    send_request(&app, "POST", "/cart/items", Some(json!({ "productId": 1 }))).await;
    send_request(&app, "POST", "/cart/items", Some(json!({ "productId": 7 }))).await;

    // set quantity in place
    let (status, body) = send_request(
        &app,
        "PATCH",
        "/cart/items/1",
        Some(json!({ "quantity": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["id"], 1);
    assert_eq!(body["items"][0]["quantity"], 5);

    // zero removes the line
    let (_, body) = send_request(
        &app,
        "PATCH",
        "/cart/items/1",
        Some(json!({ "quantity": 0 })),
    )
    .await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 7);

    // unknown id is a silent no-op
    let (status, body) = send_request(
        &app,
        "PATCH",
        "/cart/items/999",
        Some(json!({ "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);

    // explicit delete
    let (_, body) = send_request(&app, "DELETE", "/cart/items/7", None).await;
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_clear_cart() {
    let app = create_test_app();
    send_request(&app, "POST", "/cart/items", Some(json!({ "productId": 1 }))).await;
    send_request(&app, "POST", "/cart/items", Some(json!({ "productId": 2 }))).await;

    let (status, body) = send_request(&app, "DELETE", "/cart", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["items"].as_array().unwrap().is_empty());
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_cart_survives_application_restart() {
    let storage: Arc<MemoryStorage> = Arc::new(MemoryStorage::new());

    let app = create_test_app_with_storage(storage.clone());
    send_request(
        &app,
        "POST",
        "/cart/items",
        Some(json!({ "productId": 3, "quantity": 2 })),
    )
    .await;

    // a fresh app over the same slot hydrates the same cart
    let restarted = create_test_app_with_storage(storage);
    let (status, body) = send_request(&restarted, "GET", "/cart", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["id"], 3);
    assert_eq!(body["items"][0]["quantity"], 2);
    assert_eq!(body["count"], 2);
}

// =============================================================================
// Checkout
// =============================================================================

#[tokio::test]
async fn test_checkout_empty_cart() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "POST", "/checkout", Some(checkout_form())).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "cart is empty");
}

#[tokio::test]
async fn test_checkout_quotes_and_clears_cart() {
    let app = create_test_app();
    // MacBook Pro 14, 1499.99: free shipping, 8% tax
    send_request(&app, "POST", "/cart/items", Some(json!({ "productId": 2 }))).await;

    let (status, body) = send_request(&app, "POST", "/checkout", Some(checkout_form())).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["orderNumber"].as_str().unwrap().starts_with("LS-"));
    assert_eq!(body["status"], "confirmed");
    assert!(body["itemSummary"].as_str().unwrap().contains("MacBook Pro 14"));
    assert_eq!(body["subtotal"], "1499.99");
    assert_eq!(body["shipping"], "0");
    assert_eq!(body["tax"], "120.00");
    assert_eq!(body["total"], "1619.99");

    let (_, cart) = send_request(&app, "GET", "/cart", None).await;
    assert_eq!(cart["count"], 0);
}

#[tokio::test]
async fn test_checkout_charges_shipping_below_threshold() {
    let app = create_test_app();
    // Acer Swift 3, 429.99: below the free-shipping threshold
    send_request(&app, "POST", "/cart/items", Some(json!({ "productId": 11 }))).await;

    let (status, body) = send_request(&app, "POST", "/checkout", Some(checkout_form())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shipping"], "49");
    // 429.99 * 0.08 = 34.3992 -> 34.40
    assert_eq!(body["tax"], "34.40");
    assert_eq!(body["total"], "513.39");
}
