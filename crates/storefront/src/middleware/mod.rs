//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`, capture errors)
//! 2. `TraceLayer` (request span, see [`request_span`])
//! 3. Request ID (fill the span's `request_id`, echo header)
//! 4. CSP nonce (generate per-request nonce for the inline cart script)
//! 5. Security headers (CSP with the nonce, framing and sniffing protection)
//! 6. Session layer (tower-sessions, signed cookie, injected store)

pub mod csp;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use csp::{CspNonce, csp_nonce_middleware};
pub use request_id::{request_id_middleware, request_span};
pub use security_headers::security_headers_middleware;
pub use session::{SESSION_COOKIE_NAME, SessionLayerError, create_session_layer};
