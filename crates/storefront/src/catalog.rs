//! Read-only product catalog.
//!
//! The catalog is built once at startup and shared through [`AppState`]
//! behind an `Arc`. Nothing mutates it afterwards, so concurrent reads need
//! no synchronization.
//!
//! [`AppState`]: crate::state::AppState

use std::collections::HashSet;

use shopeasy_core::{Price, Product, ProductId, Rating, RatingError};
use thiserror::Error;

/// Catalog lookup and construction errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with this ID exists.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// Product IDs must be positive.
    #[error("product id {0} is not positive")]
    NonPositiveId(ProductId),

    /// Two products share an ID.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    /// A seeded rating is out of range.
    #[error("invalid seed data: {0}")]
    InvalidRating(#[from] RatingError),
}

/// Ordered, immutable set of products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products in display order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NonPositiveId`] if an ID is zero or negative,
    /// or [`CatalogError::DuplicateId`] if two products share an ID.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id.as_i64() <= 0 {
                return Err(CatalogError::NonPositiveId(product.id));
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The six demo products the storefront ships with.
    ///
    /// # Errors
    ///
    /// Returns an error only if the seed data itself is invalid.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(vec![
            seed(
                1,
                "Wireless Headphones",
                9999,
                "Electronics",
                "High-quality wireless headphones with noise cancellation",
                45,
            )?,
            seed(
                2,
                "Smart Watch",
                19999,
                "Electronics",
                "Feature-rich smartwatch with health monitoring",
                42,
            )?,
            seed(
                3,
                "Running Shoes",
                7999,
                "Fashion",
                "Comfortable running shoes for all terrains",
                47,
            )?,
            seed(
                4,
                "Coffee Maker",
                4999,
                "Home",
                "Automatic coffee maker with timer",
                43,
            )?,
            seed(
                5,
                "Backpack",
                3999,
                "Fashion",
                "Waterproof backpack with laptop compartment",
                46,
            )?,
            seed(
                6,
                "Desk Lamp",
                2999,
                "Home",
                "LED desk lamp with adjustable brightness",
                44,
            )?,
        ])
    }

    /// All products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has this ID.
    pub fn find(&self, id: ProductId) -> Result<&Product, CatalogError> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn seed(
    id: i64,
    name: &str,
    cents: u32,
    category: &str,
    description: &str,
    rating_tenths: u8,
) -> Result<Product, CatalogError> {
    Ok(Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price: Price::from_cents(cents),
        image: format!("https://picsum.photos/300/200?random={id}"),
        rating: Rating::from_tenths(rating_tenths)?,
    })
}
