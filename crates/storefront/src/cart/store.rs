//! Where a session's cart is kept.

use std::future::Future;

use thiserror::Error;
use tower_sessions::Session;

use super::Cart;
use crate::models::session_keys;

/// Failure reading or writing the session cart.
#[derive(Debug, Error)]
#[error("session cart unavailable: {0}")]
pub struct CartStoreError(#[from] pub tower_sessions::session::Error);

/// Storage for a single session's cart.
///
/// Implementations are already scoped to one session; callers never pass a
/// session ID.
pub trait CartStore {
    /// Current cart, or an empty cart if none has been saved.
    fn load_cart(&self) -> impl Future<Output = Result<Cart, CartStoreError>> + Send;

    /// Replace the stored cart.
    fn save_cart(&self, cart: &Cart) -> impl Future<Output = Result<(), CartStoreError>> + Send;
}

impl CartStore for Session {
    async fn load_cart(&self) -> Result<Cart, CartStoreError> {
        Ok(self
            .get::<Cart>(session_keys::CART)
            .await?
            .unwrap_or_default())
    }

    async fn save_cart(&self, cart: &Cart) -> Result<(), CartStoreError> {
        self.insert(session_keys::CART, cart).await?;
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    //! In-memory stores for exercising cart logic without HTTP.

    use std::sync::Mutex;

    use super::{Cart, CartStore, CartStoreError};

    /// Holds one cart in memory. `None` until the first save.
    #[derive(Debug, Default)]
    pub struct MemoryCartStore {
        cart: Mutex<Option<Cart>>,
    }

    impl MemoryCartStore {
        #[allow(clippy::unwrap_used)]
        pub fn snapshot(&self) -> Option<Cart> {
            self.cart.lock().unwrap().clone()
        }
    }

    impl CartStore for MemoryCartStore {
        #[allow(clippy::unwrap_used)]
        async fn load_cart(&self) -> Result<Cart, CartStoreError> {
            Ok(self.cart.lock().unwrap().clone().unwrap_or_default())
        }

        #[allow(clippy::unwrap_used)]
        async fn save_cart(&self, cart: &Cart) -> Result<(), CartStoreError> {
            *self.cart.lock().unwrap() = Some(cart.clone());
            Ok(())
        }
    }

    /// Every load fails.
    #[derive(Debug)]
    pub struct FailingCartStore;

    impl CartStore for FailingCartStore {
        async fn load_cart(&self) -> Result<Cart, CartStoreError> {
            Err(CartStoreError(tower_sessions::session::Error::Store(
                tower_sessions::session_store::Error::Backend("store offline".to_string()),
            )))
        }

        async fn save_cart(&self, _cart: &Cart) -> Result<(), CartStoreError> {
            Ok(())
        }
    }
}
