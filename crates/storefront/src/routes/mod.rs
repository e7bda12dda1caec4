//! HTTP route handlers for the storefront.
//!
//! Route structure:
//!
//! ```text
//! GET  /                              Home page (category grid)
//! GET  /search?q=...                  Header search form, redirects to /search/{query}
//! GET  /search/{query}                Search results
//! GET  /category/{category_id}       Category listing
//! GET  /products/{id}                 Product detail page
//! GET  /products/{id}/recommendations AI suggestion fragment (HTMX)
//! GET  /cart                          Cart page
//! GET  /cart/items                    Cart line items fragment (HTMX)
//! GET  /cart/drawer                   Cart drawer fragment (HTMX)
//! GET  /cart/count                    Cart badge fragment (HTMX)
//! POST /cart/add                      Add a product to the cart
//! POST /cart/update                   Set a line item quantity
//! POST /cart/remove                   Remove a line item
//! POST /cart/toggle                   Open or close the cart drawer
//! GET  /checkout                      Checkout summary and forms
//! POST /checkout                      Place the order (simulated payment)
//! GET  /confirmation                  Order confirmation (one shot)
//! GET  /login                         Admin login page
//! POST /login                         Admin login
//! POST /logout                        Admin logout
//! GET  /admin                         Admin dashboard
//! GET  /admin/products/new            New product form
//! POST /admin/products                Create a product
//! GET  /admin/products/{id}/edit      Edit product form
//! POST /admin/products/{id}           Update a product
//! POST /admin/products/{id}/delete    Delete a product
//! ```

use axum::Router;
use axum::routing::{get, post};

use crate::models::CurrentAdmin;
use crate::state::AppState;

pub mod admin;
pub mod auth;
pub mod cart;
pub mod categories;
pub mod checkout;
pub mod home;
pub mod products;
pub mod search;

/// Header state shared by every full page template.
#[derive(Debug, Clone)]
pub struct Nav {
    /// Signed-in admin email, shown in the header in place of the login link.
    pub admin_email: Option<String>,
}

impl Nav {
    pub fn for_admin(admin: Option<CurrentAdmin>) -> Self {
        Self {
            admin_email: admin.map(|admin| admin.email.to_string()),
        }
    }
}

/// Search routes.
pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(search::submit))
        .route("/{query}", get(search::show))
}

/// Product routes.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(products::show))
        .route("/{id}/recommendations", get(products::recommendations))
}

/// Cart routes. Mutations respond with the drawer fragment and an
/// `HX-Trigger` header so other cart fragments refresh themselves.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/items", get(cart::items))
        .route("/drawer", get(cart::drawer))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/toggle", post(cart::toggle))
}

/// Checkout routes.
pub fn checkout_routes() -> Router<AppState> {
    Router::new().route("/", get(checkout::show).post(checkout::place_order))
}

/// Admin panel routes. Every handler requires a signed-in admin.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::dashboard))
        .route("/products", post(admin::products::create))
        .route("/products/new", get(admin::products::new_form))
        .route("/products/{id}/edit", get(admin::products::edit_form))
        .route("/products/{id}", post(admin::products::update))
        .route("/products/{id}/delete", post(admin::products::delete))
}

/// Builds the complete route tree.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::show))
        .nest("/search", search_routes())
        .route("/category/{category_id}", get(categories::show))
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .route("/confirmation", get(checkout::confirmation))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .nest("/admin", admin_routes())
}
