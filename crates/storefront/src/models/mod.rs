//! Domain models for storefront.
//!
//! Products and their value types live in `shopeasy-core`; the cart lives in
//! [`crate::cart`]. This module only holds session plumbing.

pub mod session;

pub use session::keys as session_keys;
