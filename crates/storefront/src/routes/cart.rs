//! Cart API handlers.
//!
//! The cart lives in the caller's session. Both endpoints answer with the
//! full cart so the page script can re-render the sidebar from one response.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};
use shopeasy_core::ProductId;
use tower_sessions::Session;
use tracing::instrument;

use crate::cart::{self, Cart, CartStore};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;

/// Body of `POST /add_to_cart`.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: RequestedProduct,
}

/// The `product_id` a client sent.
///
/// Any JSON integer is accepted. Integers beyond the [`ProductId`] range
/// cannot be in the catalog but are still a well-formed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedProduct {
    Id(ProductId),
    OutOfRange(u64),
}

impl<'de> Deserialize<'de> for RequestedProduct {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct IntegerVisitor;

        impl de::Visitor<'_> for IntegerVisitor {
            type Value = RequestedProduct;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer product id")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(RequestedProduct::Id(ProductId::new(value)))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Self::Value, E> {
                Ok(i64::try_from(value).map_or(RequestedProduct::OutOfRange(value), |id| {
                    RequestedProduct::Id(ProductId::new(id))
                }))
            }
        }

        deserializer.deserialize_i64(IntegerVisitor)
    }
}

/// Successful cart response.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub success: bool,
    pub cart: Cart,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            success: true,
            cart,
        }
    }
}

/// Add one unit of a product to the session cart.
///
/// Unknown products answer 404 and leave the cart as it was; a missing or
/// mistyped `product_id` answers 400.
#[instrument(skip(state, session, payload))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    payload: std::result::Result<Json<AddToCartRequest>, JsonRejection>,
) -> Result<Json<CartResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Rejected add_to_cart body: {rejection}");
        AppError::BadRequest(rejection.body_text())
    })?;

    let product_id = match request.product_id {
        RequestedProduct::Id(id) => id,
        RequestedProduct::OutOfRange(raw) => {
            tracing::debug!(product_id = raw, "Product id outside catalog range");
            return Err(AppError::ProductNotFound(raw.to_string()));
        }
    };

    let cart = cart::add_to_cart(state.catalog(), &session, product_id).await?;

    let breadcrumb_id = product_id.to_string();
    add_breadcrumb(
        "cart",
        "Added item to cart",
        Some(&[("product_id", breadcrumb_id.as_str())]),
    );
    tracing::info!(
        product_id = %product_id,
        lines = cart.lines().len(),
        items = cart.item_count(),
        "Added item to cart"
    );

    Ok(Json(cart.into()))
}

/// Current session cart, unchanged.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartResponse>> {
    let cart = session.load_cart().await?;
    Ok(Json(cart.into()))
}
