//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use shopeasy_core::Product;
use tower_sessions::Session;
use tracing::instrument;

use crate::cart::{Cart, CartStore};
use crate::filters;
use crate::middleware::CspNonce;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub image: String,
    pub rating: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i64(),
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            rating: product.rating.to_string(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Catalog products in display order.
    pub products: Vec<ProductView>,
    /// Session cart as JSON, seeds the sidebar script.
    pub cart_json: String,
    /// Units in the session cart, for the badge.
    pub cart_count: u32,
    pub nonce: String,
}

/// Display the catalog page.
///
/// Reads the session cart so the badge survives a reload, but never writes
/// to the session.
#[instrument(skip(state, session, nonce))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    CspNonce(nonce): CspNonce,
) -> impl IntoResponse {
    let cart = session.load_cart().await.unwrap_or_else(|e| {
        tracing::warn!("Failed to load session cart: {e}");
        Cart::new()
    });

    let cart_json = serde_json::to_string(&cart).unwrap_or_else(|e| {
        tracing::warn!("Failed to serialize session cart: {e}");
        "[]".to_string()
    });

    HomeTemplate {
        products: state.catalog().products().iter().map(ProductView::from).collect(),
        cart_json,
        cart_count: cart.item_count(),
        nonce,
    }
}
