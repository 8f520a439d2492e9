use lapstone_storefront::cart::JsonFileStorage;
use lapstone_storefront::catalog::Catalog;
use lapstone_storefront::router::create_app_router;
use lapstone_storefront::state::{locate_state_directory, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Structured logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load the read-only catalog
    let catalog = Catalog::load_default().expect("embedded catalog is valid JSON");
    tracing::info!("Catalog loaded: {} products", catalog.products.len());

    // Durable cart slot
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let state_dir = locate_state_directory(&current_dir);
    tracing::info!("Using state directory: {:?}", state_dir);
    let storage = JsonFileStorage::open(state_dir).expect("state directory is writable");

    // Initialize application state
    let state = Arc::new(AppState::new(catalog, Arc::new(storage)));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address
    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("Server running on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await.expect("bind server address");
    axum::serve(listener, app).await.expect("serve application");
}
