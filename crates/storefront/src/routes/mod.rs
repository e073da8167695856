//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /             - Catalog page
//! GET  /health       - Liveness check
//!
//! # Cart (JSON)
//! POST /add_to_cart  - Add one unit of a product, returns the cart
//! GET  /cart         - Current session cart
//! ```

pub mod cart;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        .route("/add_to_cart", post(cart::add))
        .route("/cart", get(cart::show))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. There are no dependencies to check.
async fn health() -> &'static str {
    "ok"
}
