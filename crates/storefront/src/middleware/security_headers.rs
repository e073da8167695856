//! Security headers for every response.
//!
//! The policy is locked down to what the catalog page actually needs:
//! same-origin styles and fetches, product images from picsum, and the one
//! nonce-tagged inline script.

use axum::{
    extract::Request,
    http::{
        HeaderName, HeaderValue,
        header::{CACHE_CONTROL, CONTENT_SECURITY_POLICY},
    },
    middleware::Next,
    response::Response,
};

use super::csp::CspNonce;

/// Hosts product images are served from (picsum redirects to its CDN).
const IMAGE_HOSTS: &str = "https://picsum.photos https://fastly.picsum.photos";

/// Headers that do not depend on the request.
const STATIC_HEADERS: &[(&str, &str)] = &[
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "no-referrer"),
    (
        "permissions-policy",
        "camera=(), geolocation=(), microphone=(), payment=(), usb=()",
    ),
    ("cross-origin-opener-policy", "same-origin"),
    // Cross-origin product images carry no CORP header
    ("cross-origin-embedder-policy", "credentialless"),
];

/// `Cache-Control` for responses that do not set their own.
const DEFAULT_CACHE_CONTROL: &str = "no-store, max-age=0";

/// Build the `Content-Security-Policy` value for a request.
#[must_use]
pub fn content_security_policy(nonce: &str) -> String {
    let script_src = if nonce.is_empty() {
        "'self'".to_string()
    } else {
        format!("'self' 'nonce-{nonce}'")
    };

    format!(
        "default-src 'none'; \
         script-src {script_src}; \
         style-src 'self'; \
         img-src 'self' {IMAGE_HOSTS}; \
         connect-src 'self'; \
         object-src 'none'; \
         base-uri 'self'; \
         form-action 'self'; \
         frame-ancestors 'none'"
    )
}

/// Add security headers to the response.
///
/// Reads the [`CspNonce`] placed by `csp_nonce_middleware`; without one the
/// policy simply allows no inline scripts.
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let nonce = request
        .extensions()
        .get::<CspNonce>()
        .map(|nonce| nonce.value().to_string())
        .unwrap_or_default();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    for &(name, value) in STATIC_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }

    headers
        .entry(CACHE_CONTROL)
        .or_insert(HeaderValue::from_static(DEFAULT_CACHE_CONTROL));

    match HeaderValue::from_str(&content_security_policy(&nonce)) {
        Ok(value) => {
            headers.insert(CONTENT_SECURITY_POLICY, value);
        }
        Err(e) => tracing::error!("Failed to build CSP header: {e}"),
    }

    response
}
