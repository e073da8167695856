//! Catalog product record.

use serde::{Deserialize, Serialize};

use crate::{Price, ProductId, Rating};

/// A purchasable product.
///
/// Products are created once when the catalog is seeded and never change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable catalog identifier.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Price,
    /// Image URL (opaque to the storefront).
    pub image: String,
    pub rating: Rating,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_json_shape() {
        let product = Product {
            id: ProductId::new(4),
            name: "Coffee Maker".to_string(),
            description: "Automatic coffee maker with timer".to_string(),
            category: "Home".to_string(),
            price: Price::from_cents(4999),
            image: "https://picsum.photos/300/200?random=4".to_string(),
            rating: Rating::from_tenths(43).unwrap(),
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], 4);
        assert_eq!(value["price"], serde_json::json!(49.99));
        assert_eq!(value["rating"], serde_json::json!(4.3));
        assert_eq!(value["category"], "Home");
    }
}
