//! Integration tests for admin login, the dashboard and product CRUD.

#![allow(clippy::unwrap_used)]

use parasol_core::ProductId;
use parasol_integration_tests::{ADMIN_EMAIL, ADMIN_PASSWORD, TestServer, location};
use reqwest::StatusCode;

#[tokio::test]
async fn test_admin_pages_require_login() {
    let server = TestServer::start().await;

    for path in ["/admin", "/admin/products/new", "/admin/products/P1000/edit"] {
        let response = server.get(path).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "GET {path}");
        assert_eq!(location(&response), "/login");
    }

    let response = server
        .post_form("/admin/products/P1000/delete", &[] as &[(&str, &str)])
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let server = TestServer::start().await;

    let response = server
        .post_form(
            "/login",
            &[("email", ADMIN_EMAIL), ("password", "wrong-password")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.text().await.unwrap();
    assert!(body.contains("Invalid credentials. Please try again."));
    // The entered email is kept for another try.
    assert!(body.contains(ADMIN_EMAIL));

    // Still signed out.
    let response = server.get("/admin").await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_login_matches_email_case_insensitively() {
    let server = TestServer::start().await;

    let response = server
        .post_form(
            "/login",
            &[
                ("email", "SHOPKEEPER@PARASOL.TEST"),
                ("password", ADMIN_PASSWORD),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");

    // The header shows the configured spelling, not the entered one.
    let body = server.get("/").await.text().await.unwrap();
    assert!(body.contains(ADMIN_EMAIL));
}

#[tokio::test]
async fn test_login_page_redirects_when_already_signed_in() {
    let server = TestServer::start().await;
    server.login_as_admin().await;

    let response = server.get("/login").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");
}

#[tokio::test]
async fn test_dashboard_shows_stats_and_product_table() {
    let server = TestServer::start().await;
    server.login_as_admin().await;

    let response = server.get("/admin").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.unwrap();
    assert!(body.contains("Admin Dashboard"));
    assert!(body.contains("Total Products"));
    assert!(body.contains("Total Categories"));
    assert!(body.contains("Total Units Sold"));
    assert!(body.contains(">20</p>"));
    assert!(body.contains(">8</p>"));
    assert!(body.contains("All Products"));
    assert!(body.contains("Add Product"));
    assert!(body.contains("Are you sure you want to delete this product?"));
}

#[tokio::test]
async fn test_create_product_prepends_to_catalog() {
    let server = TestServer::start().await;
    server.login_as_admin().await;

    let response = server
        .post_form(
            "/admin/products",
            &[
                ("title", "Hand-Painted Paper Parasol"),
                ("image_url", "https://picsum.photos/seed/parasol/400/500"),
                ("price", "24.50"),
                ("rating", "4.9"),
                ("sales", "12"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");

    let products = server.state().catalog().products_snapshot();
    assert_eq!(products.len(), 21);
    let created = products.first().unwrap();
    assert_eq!(created.title, "Hand-Painted Paper Parasol");
    assert!(created.id.as_str().starts_with('P'));

    // The new product is immediately live on the storefront.
    let body = server
        .get(&format!("/products/{}", created.id))
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Hand-Painted Paper Parasol"));
    assert!(body.contains("$24.50"));
}

#[tokio::test]
async fn test_edit_form_prefills_and_update_applies() {
    let server = TestServer::start().await;
    server.login_as_admin().await;
    let id = server.first_product_id();
    let title = server.first_product_title();

    let body = server
        .get(&format!("/admin/products/{id}/edit"))
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Edit Product"));
    assert!(body.contains(&title));

    let response = server
        .post_form(
            &format!("/admin/products/{id}"),
            &[
                ("title", "Renamed Dress"),
                ("image_url", "https://picsum.photos/seed/renamed/400/500"),
                ("price", "19.95"),
                ("rating", "3.5"),
                ("sales", "777"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");

    let products = server.state().catalog().products_snapshot();
    let updated = products
        .iter()
        .find(|product| product.id == ProductId::new(id.clone()))
        .unwrap();
    assert_eq!(updated.title, "Renamed Dress");
    assert_eq!(updated.sales, 777);
    // The table did not grow.
    assert_eq!(products.len(), 20);
}

#[tokio::test]
async fn test_edit_form_for_missing_product_redirects_to_dashboard() {
    let server = TestServer::start().await;
    server.login_as_admin().await;

    let response = server.get("/admin/products/P0/edit").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");
}

#[tokio::test]
async fn test_update_of_missing_product_is_not_found() {
    let server = TestServer::start().await;
    server.login_as_admin().await;

    let response = server
        .post_form(
            "/admin/products/P0",
            &[
                ("title", "Ghost Product"),
                ("image_url", "https://example.com/ghost.jpg"),
                ("price", "1.00"),
                ("rating", "1.0"),
                ("sales", "0"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_removes_product_everywhere() {
    let server = TestServer::start().await;
    server.login_as_admin().await;
    let id = server.first_product_id();

    let response = server
        .post_form(
            &format!("/admin/products/{id}/delete"),
            &[] as &[(&str, &str)],
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");

    assert_eq!(server.state().catalog().products_snapshot().len(), 19);
    let response = server.get(&format!("/products/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting again is a quiet no-op.
    let response = server
        .post_form(
            &format!("/admin/products/{id}/delete"),
            &[] as &[(&str, &str)],
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(server.state().catalog().products_snapshot().len(), 19);
}

#[tokio::test]
async fn test_logout_ends_the_session() {
    let server = TestServer::start().await;
    server.login_as_admin().await;

    let response = server.post_form("/logout", &[] as &[(&str, &str)]).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = server.get("/admin").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}
