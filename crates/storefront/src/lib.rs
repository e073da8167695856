//! ShopEasy Storefront library.
//!
//! This crate provides the storefront as a library, allowing the router to
//! be driven in-process by tests and reused by the binary.
//!
//! # Architecture
//!
//! - Axum web framework, Askama templates for the catalog page
//! - Catalog built once at startup and shared read-only via [`state::AppState`]
//! - Session cart kept server-side through tower-sessions; the browser only
//!   holds a signed session cookie

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

use axum::{
    Router,
    body::Body,
    http::{HeaderValue, header::CACHE_CONTROL},
};
use tower_http::{services::ServeDir, set_header::SetResponseHeader, trace::TraceLayer};
use tower_sessions::SessionStore;

use crate::middleware::SessionLayerError;
use crate::state::AppState;

/// Directory served under `/static`.
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Static assets are referenced with a content hash query, so they never
/// change under the same URL.
const STATIC_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Build the full storefront router with its middleware stack.
///
/// Sessions are kept in `store`; the binary passes a
/// [`tower_sessions::MemoryStore`].
///
/// # Errors
///
/// Returns [`SessionLayerError`] if the configured session secret cannot be
/// used as a cookie signing key.
pub fn app<S>(state: AppState, store: S) -> Result<Router, SessionLayerError>
where
    S: SessionStore + Clone,
{
    let session_layer = middleware::create_session_layer(store, state.config())?;

    Ok(Router::new()
        .merge(routes::routes())
        .nest_service(
            "/static",
            SetResponseHeader::overriding(
                ServeDir::new(STATIC_DIR),
                CACHE_CONTROL,
                HeaderValue::from_static(STATIC_CACHE_CONTROL),
            ),
        )
        .layer(session_layer)
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::csp_nonce_middleware))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(middleware::request_span::<Body>))
        .with_state(state))
}
