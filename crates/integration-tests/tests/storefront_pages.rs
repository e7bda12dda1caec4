//! Integration tests for the public browsing pages: home, search,
//! category listings and product detail.

#![allow(clippy::unwrap_used)]

use parasol_integration_tests::{TestServer, location};
use reqwest::StatusCode;

#[tokio::test]
async fn test_health_endpoint_responds() {
    let server = TestServer::start().await;

    let response = server.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_home_page_shows_category_grid() {
    let server = TestServer::start().await;

    let response = server.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.unwrap();
    assert!(body.contains("Welcome to Parasol Market"));
    assert!(body.contains("Browse by Category"));
    assert!(body.contains("/category/women-clothing"));
    assert!(body.contains("/category/shoes"));
    assert!(body.contains("Home &amp; Garden"));
}

#[tokio::test]
async fn test_search_form_redirects_to_encoded_query() {
    let server = TestServer::start().await;

    let response = server.get("/search?q=floral%20dress").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/search/floral%20dress");
}

#[tokio::test]
async fn test_search_form_trims_and_blank_query_goes_home() {
    let server = TestServer::start().await;

    let response = server.get("/search?q=%20%20").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = server.get("/search?q=").await;
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_search_results_show_every_product() {
    let server = TestServer::start().await;

    let response = server.get("/search/summer%20dress").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.unwrap();
    assert!(body.contains("Results for"));
    assert!(body.contains("summer dress"));
    // The mock catalog answers every query with the full table.
    let cards = body.matches("href=\"/products/P").count();
    assert_eq!(cards, 20);
}

#[tokio::test]
async fn test_category_page_uses_display_name() {
    let server = TestServer::start().await;

    let response = server.get("/category/shoes").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.unwrap();
    assert!(body.contains("Products in Shoes"));
    let cards = body.matches("href=\"/products/P").count();
    assert_eq!(cards, 20);
}

#[tokio::test]
async fn test_unknown_category_falls_back_to_raw_id() {
    let server = TestServer::start().await;

    let response = server.get("/category/mystery-box").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .text()
            .await
            .unwrap()
            .contains("Products in mystery-box")
    );
}

#[tokio::test]
async fn test_product_detail_renders_full_record() {
    let server = TestServer::start().await;
    let id = server.first_product_id();
    let title = server.first_product_title();

    let response = server.get(&format!("/products/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.unwrap();
    assert!(body.contains(&title));
    assert!(body.contains("Add to Cart"));
    assert!(body.contains("Specifications"));
    assert!(body.contains("15-25 days"));
    assert!(body.contains("FashionForward Boutique"));
    // Lazy-loaded AI widget wiring
    assert!(body.contains("AI Shopping Assistant"));
    assert!(body.contains("Generating ideas..."));
    assert!(body.contains(&format!("/products/{id}/recommendations")));
}

#[tokio::test]
async fn test_unknown_product_renders_not_found_page() {
    let server = TestServer::start().await;

    let response = server.get("/products/P0").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.text().await.unwrap();
    assert!(body.contains("Product Not Found"));
    assert!(body.contains("The product you are looking for does not exist."));
}

#[tokio::test]
async fn test_responses_carry_a_request_id() {
    let server = TestServer::start().await;

    let response = server.get("/health").await;
    let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(!id.is_empty());
}

#[tokio::test]
async fn test_proxy_supplied_request_id_is_echoed() {
    let server = TestServer::start().await;

    let client = reqwest::Client::new();
    let response = client
        .get(server.url("/health"))
        .header("x-request-id", "trace-me-42")
        .send()
        .await
        .unwrap();

    let echoed = response.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(echoed, "trace-me-42");
}
