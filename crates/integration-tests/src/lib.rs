//! Integration tests for the ShopEasy storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopeasy-integration-tests
//! ```
//!
//! The full router (middleware, sessions, templates) runs in-process through
//! `tower::ServiceExt::oneshot`; no server or network is needed.
//!
//! # Test Categories
//!
//! - `storefront_cart` - Cart API and session behavior
//! - `storefront_home` - Catalog page rendering and headers

use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use secrecy::SecretString;
use serde_json::Value;
use shopeasy_storefront::catalog::Catalog;
use shopeasy_storefront::config::{SentryConfig, StorefrontConfig};
use shopeasy_storefront::middleware::SESSION_COOKIE_NAME;
use shopeasy_storefront::state::AppState;
use tower::ServiceExt;
use tower_sessions::MemoryStore;

/// Configuration for in-process tests. The secret is exactly 64 bytes, the
/// minimum for a signing key.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: [127, 0, 0, 1].into(),
        port: 5000,
        base_url: "http://127.0.0.1:5000".to_string(),
        session_secret: SecretString::from("k3Y!".repeat(16)),
        sentry: SentryConfig::default(),
    }
}

/// A browser-like client: one router plus whatever session cookie the
/// server last handed out.
#[derive(Clone)]
pub struct TestClient {
    router: Router,
    cookie: Option<String>,
}

/// Response with the body already collected.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Parse the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    /// Body as UTF-8 text.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).expect("response body is not UTF-8")
    }

    /// Header value as a string, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl TestClient {
    /// Fresh storefront with the seeded catalog and an empty session store.
    ///
    /// # Panics
    ///
    /// Panics if the catalog or router cannot be built.
    #[must_use]
    pub fn new() -> Self {
        let catalog = Catalog::seeded().expect("seeded catalog is valid");
        let state = AppState::new(test_config(), catalog);
        let router =
            shopeasy_storefront::app(state, MemoryStore::default()).expect("router builds");

        Self {
            router,
            cookie: None,
        }
    }

    /// Another client against the same server, with no session yet.
    #[must_use]
    pub fn new_session(&self) -> Self {
        Self {
            router: self.router.clone(),
            cookie: None,
        }
    }

    /// The `name=value` cookie pair this client currently sends.
    #[must_use]
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    /// Replace the cookie sent with later requests.
    pub fn set_cookie(&mut self, cookie: impl Into<String>) {
        self.cookie = Some(cookie.into());
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self.request("GET", uri).body(Body::empty());
        self.send(request).await
    }

    pub async fn post_json(&mut self, uri: &str, body: &Value) -> TestResponse {
        self.post_raw(uri, Some("application/json"), &body.to_string())
            .await
    }

    pub async fn post_raw(
        &mut self,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> TestResponse {
        let mut builder = self.request("POST", uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(Body::from(body.to_string()));
        self.send(request).await
    }

    /// `POST /add_to_cart` with `{"product_id": id}`.
    pub async fn add_to_cart(&mut self, product_id: i64) -> TestResponse {
        self.post_json(
            "/add_to_cart",
            &serde_json::json!({ "product_id": product_id }),
        )
        .await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(
        &mut self,
        request: Result<Request<Body>, axum::http::Error>,
    ) -> TestResponse {
        let request = request.expect("valid request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = session_cookie(response.headers()) {
            self.cookie = Some(cookie);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body collects");

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// `name=value` of the session cookie in a `Set-Cookie` header, if any.
#[must_use]
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .find(|pair| pair.starts_with(&format!("{SESSION_COOKIE_NAME}=")))
        .map(str::to_string)
}
