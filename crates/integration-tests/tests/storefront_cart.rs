//! Integration tests for the session cart API.
//!
//! Each test drives the full storefront router in-process and carries the
//! session cookie between requests the way a browser would.

use axum::http::StatusCode;
use serde_json::json;
use shopeasy_integration_tests::TestClient;

// ============================================================================
// Add to Cart
// ============================================================================

#[tokio::test]
async fn test_add_headphones_twice_then_shoes() {
    let mut client = TestClient::new();

    assert_eq!(client.add_to_cart(1).await.status, StatusCode::OK);
    assert_eq!(client.add_to_cart(1).await.status, StatusCode::OK);
    let resp = client.add_to_cart(3).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.json(),
        json!({
            "success": true,
            "cart": [
                {"id": 1, "name": "Wireless Headphones", "price": 99.99, "quantity": 2},
                {"id": 3, "name": "Running Shoes", "price": 79.99, "quantity": 1},
            ]
        })
    );
}

#[tokio::test]
async fn test_repeated_adds_accumulate() {
    let mut client = TestClient::new();

    for _ in 0..4 {
        client.add_to_cart(5).await;
    }

    let cart = client.get("/cart").await.json();
    assert_eq!(
        cart["cart"],
        json!([{"id": 5, "name": "Backpack", "price": 39.99, "quantity": 4}])
    );
}

#[tokio::test]
async fn test_insertion_order_preserved() {
    let mut client = TestClient::new();

    for id in [6, 2, 6, 4, 2, 6] {
        client.add_to_cart(id).await;
    }

    let cart = client.get("/cart").await.json();
    let lines = cart["cart"].as_array().expect("cart is a list");
    let ids: Vec<i64> = lines.iter().map(|l| l["id"].as_i64().unwrap_or(0)).collect();
    let quantities: Vec<i64> = lines
        .iter()
        .map(|l| l["quantity"].as_i64().unwrap_or(0))
        .collect();

    assert_eq!(ids, [6, 2, 4]);
    assert_eq!(quantities, [3, 2, 1]);
}

#[tokio::test]
async fn test_first_add_sets_session_cookie() {
    let mut client = TestClient::new();
    assert!(client.cookie().is_none());

    let resp = client.add_to_cart(2).await;
    assert_eq!(resp.status, StatusCode::OK);

    let set_cookie = resp.header("set-cookie").expect("session cookie issued");
    assert!(set_cookie.starts_with("shopeasy_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(client.cookie().is_some());
}

// ============================================================================
// Unknown Products
// ============================================================================

#[tokio::test]
async fn test_unknown_product_on_fresh_session() {
    let mut client = TestClient::new();

    let resp = client.add_to_cart(999).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(
        resp.json(),
        json!({"success": false, "error": "product not found"})
    );
    assert!(resp.header("set-cookie").is_none());

    let cart = client.get("/cart").await.json();
    assert_eq!(cart, json!({"success": true, "cart": []}));
}

#[tokio::test]
async fn test_unknown_product_leaves_existing_cart() {
    let mut client = TestClient::new();
    client.add_to_cart(1).await;
    let before = client.get("/cart").await.json();

    let resp = client.add_to_cart(0).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);

    let resp = client.add_to_cart(-3).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);

    assert_eq!(client.get("/cart").await.json(), before);
}

#[tokio::test]
async fn test_large_integer_ids_are_not_found() {
    let mut client = TestClient::new();
    client.add_to_cart(2).await;
    let before = client.get("/cart").await.json();

    for product_id in [json!(3_000_000_000_i64), json!(i64::MIN), json!(u64::MAX)] {
        let resp = client
            .post_json("/add_to_cart", &json!({ "product_id": product_id }))
            .await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND, "id {product_id}");
        assert_eq!(
            resp.json(),
            json!({"success": false, "error": "product not found"})
        );
    }

    assert_eq!(client.get("/cart").await.json(), before);
}

#[tokio::test]
async fn test_fractional_product_id_is_bad_request() {
    let mut client = TestClient::new();

    let resp = client
        .post_json("/add_to_cart", &json!({"product_id": 1.5}))
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json()["success"], false);
}

// ============================================================================
// Malformed Requests
// ============================================================================

#[tokio::test]
async fn test_missing_product_id() {
    let mut client = TestClient::new();

    let resp = client.post_json("/add_to_cart", &json!({})).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);

    let body = resp.json();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn test_product_id_wrong_type() {
    let mut client = TestClient::new();

    let resp = client
        .post_json("/add_to_cart", &json!({"product_id": "one"}))
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json()["success"], false);
}

#[tokio::test]
async fn test_invalid_json_body() {
    let mut client = TestClient::new();

    let resp = client
        .post_raw("/add_to_cart", Some("application/json"), "{not json")
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json()["success"], false);
}

#[tokio::test]
async fn test_missing_content_type() {
    let mut client = TestClient::new();

    let resp = client
        .post_raw("/add_to_cart", None, r#"{"product_id": 1}"#)
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json()["success"], false);

    let cart = client.get("/cart").await.json();
    assert_eq!(cart["cart"], json!([]));
}

// ============================================================================
// Session Isolation
// ============================================================================

#[tokio::test]
async fn test_sessions_do_not_share_carts() {
    let mut alice = TestClient::new();
    let mut bob = alice.new_session();

    alice.add_to_cart(1).await;
    alice.add_to_cart(1).await;
    bob.add_to_cart(4).await;

    let alice_cart = alice.get("/cart").await.json();
    let bob_cart = bob.get("/cart").await.json();

    assert_eq!(alice_cart["cart"][0]["id"], 1);
    assert_eq!(alice_cart["cart"][0]["quantity"], 2);
    assert_eq!(alice_cart["cart"].as_array().map(Vec::len), Some(1));

    assert_eq!(bob_cart["cart"][0]["id"], 4);
    assert_eq!(bob_cart["cart"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_tampered_cookie_starts_new_session() {
    let mut client = TestClient::new();
    client.add_to_cart(3).await;

    let cookie = client.cookie().expect("session cookie").to_string();
    client.set_cookie(format!("{cookie}x"));

    let cart = client.get("/cart").await.json();
    assert_eq!(cart["cart"], json!([]));
}

#[tokio::test]
async fn test_cart_read_does_not_create_session() {
    let mut client = TestClient::new();

    let resp = client.get("/cart").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.header("set-cookie").is_none());
}
