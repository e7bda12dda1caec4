//! Integration tests for the session cart and the simulated checkout.

#![allow(clippy::unwrap_used)]

use parasol_integration_tests::{TestServer, location};
use reqwest::StatusCode;

#[tokio::test]
async fn test_add_to_cart_returns_drawer_and_fires_update_event() {
    let server = TestServer::start().await;
    let id = server.first_product_id();
    let title = server.first_product_title();

    let response = server
        .post_form("/cart/add", &[("product_id", id.as_str()), ("quantity", "2")])
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("hx-trigger").unwrap(),
        "cart-updated"
    );

    let body = response.text().await.unwrap();
    assert!(body.contains("Shopping Cart"));
    assert!(body.contains(&title));
    assert!(body.contains("Proceed to Checkout"));

    let badge = server.get("/cart/count").await.text().await.unwrap();
    assert!(badge.contains('2'));
}

#[tokio::test]
async fn test_adding_same_product_merges_into_one_line() {
    let server = TestServer::start().await;
    let id = server.first_product_id();

    server
        .post_form("/cart/add", &[("product_id", id.as_str()), ("quantity", "2")])
        .await;
    // No quantity field: buy buttons default to one unit.
    server
        .post_form("/cart/add", &[("product_id", id.as_str())])
        .await;

    let badge = server.get("/cart/count").await.text().await.unwrap();
    assert!(badge.contains('3'));

    let items = server.get("/cart/items").await.text().await.unwrap();
    assert_eq!(items.matches("Remove").count(), 1);
}

#[tokio::test]
async fn test_unknown_product_leaves_cart_unchanged() {
    let server = TestServer::start().await;

    let response = server
        .post_form("/cart/add", &[("product_id", "P0"), ("quantity", "1")])
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let badge = server.get("/cart/count").await.text().await.unwrap();
    assert!(badge.trim().is_empty());
}

#[tokio::test]
async fn test_quantity_zero_removes_line() {
    let server = TestServer::start().await;
    let id = server.first_product_id();

    server
        .post_form("/cart/add", &[("product_id", id.as_str()), ("quantity", "1")])
        .await;
    let response = server
        .post_form(
            "/cart/update",
            &[("product_id", id.as_str()), ("quantity", "0")],
        )
        .await;
    assert_eq!(
        response.headers().get("hx-trigger").unwrap(),
        "cart-updated"
    );
    assert!(response.text().await.unwrap().contains("Your cart is empty."));
}

#[tokio::test]
async fn test_remove_drops_line() {
    let server = TestServer::start().await;
    let id = server.first_product_id();

    server
        .post_form("/cart/add", &[("product_id", id.as_str()), ("quantity", "4")])
        .await;
    server
        .post_form("/cart/remove", &[("product_id", id.as_str())])
        .await;

    let badge = server.get("/cart/count").await.text().await.unwrap();
    assert!(badge.trim().is_empty());
}

#[tokio::test]
async fn test_toggle_closes_then_reopens_drawer() {
    let server = TestServer::start().await;
    let id = server.first_product_id();

    // Adding opens the drawer.
    server
        .post_form("/cart/add", &[("product_id", id.as_str()), ("quantity", "1")])
        .await;

    let closed = server.post_form("/cart/toggle", &[] as &[(&str, &str)]).await;
    assert!(closed.headers().get("hx-trigger").is_none());
    assert!(!closed.text().await.unwrap().contains("Shopping Cart"));

    let reopened = server.post_form("/cart/toggle", &[] as &[(&str, &str)]).await;
    let body = reopened.text().await.unwrap();
    assert!(body.contains("Shopping Cart"));
    // Entries survived the close and reopen.
    assert!(body.contains("Remove"));
}

#[tokio::test]
async fn test_cart_page_lists_items() {
    let server = TestServer::start().await;
    let id = server.first_product_id();
    let title = server.first_product_title();

    server
        .post_form("/cart/add", &[("product_id", id.as_str()), ("quantity", "2")])
        .await;

    let response = server.get("/cart").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.unwrap();
    assert!(body.contains(&title));
    assert!(body.contains("Proceed to Checkout"));
}

#[tokio::test]
async fn test_checkout_with_empty_cart_redirects_home() {
    let server = TestServer::start().await;

    let response = server.get("/checkout").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = server.post_form("/checkout", &[] as &[(&str, &str)]).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_checkout_charges_flat_shipping_below_threshold() {
    let server = TestServer::start().await;
    server.login_as_admin().await;
    server
        .post_form(
            "/admin/products",
            &[
                ("title", "Hand-Painted Paper Parasol"),
                ("image_url", "https://picsum.photos/seed/parasol/400/500"),
                ("price", "10.00"),
                ("rating", "4.9"),
                ("sales", "0"),
            ],
        )
        .await;
    let id = server.first_product_id();

    server
        .post_form("/cart/add", &[("product_id", id.as_str()), ("quantity", "1")])
        .await;

    let body = server.get("/checkout").await.text().await.unwrap();
    assert!(body.contains("This is a mock checkout. Please do not enter real card details."));
    assert!(body.contains("$10.00"));
    assert!(body.contains("$5.99"));
    assert!(body.contains("$15.99"));
}

#[tokio::test]
async fn test_checkout_ships_free_above_fifty_dollars() {
    let server = TestServer::start().await;
    server.login_as_admin().await;
    server
        .post_form(
            "/admin/products",
            &[
                ("title", "Hand-Painted Paper Parasol"),
                ("image_url", "https://picsum.photos/seed/parasol/400/500"),
                ("price", "10.00"),
                ("rating", "4.9"),
                ("sales", "0"),
            ],
        )
        .await;
    let id = server.first_product_id();

    server
        .post_form("/cart/add", &[("product_id", id.as_str()), ("quantity", "6")])
        .await;

    let body = server.get("/checkout").await.text().await.unwrap();
    assert!(body.contains("$60.00"));
    assert!(body.contains("Free"));
    assert!(!body.contains("$65.99"));
}

#[tokio::test]
async fn test_place_order_confirms_once_and_empties_cart() {
    let server = TestServer::start().await;
    let id = server.first_product_id();
    let title = server.first_product_title();

    server
        .post_form("/cart/add", &[("product_id", id.as_str()), ("quantity", "2")])
        .await;

    let placed = server.post_form("/checkout", &[] as &[(&str, &str)]).await;
    assert_eq!(placed.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&placed), "/confirmation");

    let confirmation = server.get("/confirmation").await;
    assert_eq!(confirmation.status(), StatusCode::OK);
    let body = confirmation.text().await.unwrap();
    assert!(body.contains("Thank You For Your Order!"));
    assert!(body.contains("Your order has been placed successfully."));
    assert!(body.contains("Order ID:"));
    assert!(body.contains("PS-"));
    assert!(body.contains(&title));
    assert!(body.contains("Quantity: 2"));

    // Cart was emptied by the order.
    let badge = server.get("/cart/count").await.text().await.unwrap();
    assert!(badge.trim().is_empty());

    // The pending order is consumed on first view.
    let revisit = server.get("/confirmation").await;
    assert_eq!(revisit.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&revisit), "/");
}
