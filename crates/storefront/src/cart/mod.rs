//! Session cart.
//!
//! A cart is an ordered list of [`CartLine`]s, one per product. Adding a
//! product that is already in the cart bumps its quantity; anything else is
//! appended at the end. Lines never move once inserted.
//!
//! The cart lives in the caller's session and is reached through the
//! [`CartStore`] trait, so [`add_to_cart`] never touches ambient state.

pub mod store;

use serde::{Deserialize, Serialize};
use shopeasy_core::{Price, Product, ProductId};
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};

pub use store::{CartStore, CartStoreError};

/// One aggregated entry in a cart.
///
/// `name` and `price` are copied from the catalog when the line is first
/// created and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// A fresh line with quantity 1.
    #[must_use]
    pub fn new(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        }
    }
}

/// Ordered cart lines for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line for the product, or appends a new line
    /// with quantity 1.
    pub fn add(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|line| line.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::new(product)),
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Line for `id`, if the product is in the cart.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Total number of units across all lines (the cart badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |total, line| total.saturating_add(line.quantity))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Errors from cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product is not in the catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The session cart could not be read or written.
    #[error(transparent)]
    Store(#[from] CartStoreError),
}

/// Add one unit of `product_id` to the cart held by `store`.
///
/// The product is looked up before the session is read, so an unknown ID
/// leaves the stored cart untouched. A missing cart starts out empty.
///
/// # Errors
///
/// Returns [`CartError::Catalog`] for an unknown product and
/// [`CartError::Store`] if the session cannot be loaded or saved.
pub async fn add_to_cart<S>(
    catalog: &Catalog,
    store: &S,
    product_id: ProductId,
) -> Result<Cart, CartError>
where
    S: CartStore + Sync,
{
    let product = catalog.find(product_id)?;

    let mut cart = store.load_cart().await?;
    cart.add(product);
    store.save_cart(&cart).await?;

    Ok(cart)
}
