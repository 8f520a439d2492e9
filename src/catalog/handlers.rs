//! REST API handlers for catalog browsing
//!
//! Product listing (with the filter/sort/search query engine behind it),
//! the Home page picks, product detail with related listings, and the
//! facet lists the filter sidebar renders.

use super::models::{price_ceiling, ConditionLabel, FilterSpec, Product, SortKey};
use super::query;
use crate::state::SharedState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Creates routes for catalog-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/featured", get(featured_products))
        .route("/products/deals", get(hot_deals))
        .route("/products/:id", get(product_detail))
        .route("/catalog", get(catalog_facets))
}

// =============================================================================
// Wire types
// =============================================================================

/// Query string accepted by `GET /products`. Brand and condition take
/// comma-separated lists; everything is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub condition: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort: Option<SortKey>,
}

impl ProductQuery {
    /// Maps the raw query string onto a `FilterSpec`, applying the
    /// defaults for anything the caller left out. `category=all` is the
    /// same as no category.
    pub fn into_spec(self) -> FilterSpec {
        let defaults = FilterSpec::default();
        FilterSpec {
            query: self.q.unwrap_or_default(),
            category: self.category.filter(|c| c != "all"),
            brands: split_list(self.brand),
            conditions: split_list(self.condition),
            min_price: self.min_price.unwrap_or(defaults.min_price),
            max_price: self.max_price.unwrap_or(defaults.max_price),
            sort: self.sort.unwrap_or_default(),
        }
    }
}

fn split_list(raw: Option<String>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

/// Response for product list endpoints
#[derive(Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub count: usize,
}

/// Response for `GET /products/:id`
#[derive(Serialize)]
pub struct ProductDetailResponse {
    pub product: Product,
    pub related: Vec<Product>,
}

/// One category facet with its listing count
#[derive(Serialize)]
pub struct CategoryFacet {
    pub id: String,
    pub name: String,
    pub count: usize,
}

/// Response for `GET /catalog`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetsResponse {
    pub categories: Vec<CategoryFacet>,
    pub brands: Vec<String>,
    pub conditions: Vec<ConditionLabel>,
    pub price_ceiling: Decimal,
}

fn list_response(hits: Vec<&Product>) -> Json<ProductListResponse> {
    let products: Vec<Product> = hits.into_iter().cloned().collect();
    let count = products.len();
    Json(ProductListResponse { products, count })
}

// =============================================================================
// Handlers
// =============================================================================

/// Endpoint: GET /products
/// Runs the query engine over the catalog with the caller's filters.
async fn list_products(
    State(state): State<SharedState>,
    Query(params): Query<ProductQuery>,
) -> impl IntoResponse {
    let spec = params.into_spec();
    list_response(query::select(&state.catalog.products, &spec))
}

/// Endpoint: GET /products/featured
async fn featured_products(State(state): State<SharedState>) -> impl IntoResponse {
    list_response(state.catalog.featured(4))
}

/// Endpoint: GET /products/deals
async fn hot_deals(State(state): State<SharedState>) -> impl IntoResponse {
    list_response(state.catalog.hot_deals(3))
}

/// Endpoint: GET /products/:id
/// Product detail plus up to four related listings from the same category.
async fn product_detail(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
) -> impl IntoResponse {
    match state.catalog.find(id) {
        Some(product) => {
            let related = state.catalog.related_to(product).into_iter().cloned().collect();
            Json(ProductDetailResponse { product: product.clone(), related }).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "product not found" })),
        )
            .into_response(),
    }
}

/// Endpoint: GET /catalog
/// The lookup lists the filter sidebar renders, with per-category counts.
async fn catalog_facets(State(state): State<SharedState>) -> impl IntoResponse {
    let categories = state
        .catalog
        .categories
        .iter()
        .map(|category| CategoryFacet {
            id: category.id.clone(),
            name: category.name.clone(),
            count: state.catalog.category_count(&category.id),
        })
        .collect();

    Json(FacetsResponse {
        categories,
        brands: state.catalog.brands.clone(),
        conditions: state.catalog.conditions.clone(),
        price_ceiling: price_ceiling(),
    })
}
