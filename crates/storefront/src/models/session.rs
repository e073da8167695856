//! Session-related types.
//!
//! Keys under which storefront state is kept in the session.

/// Session keys for storefront data.
pub mod keys {
    /// Key for the session's cart lines.
    pub const CART: &str = "cart";
}
