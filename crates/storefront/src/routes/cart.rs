//! Shopping cart page and HTMX fragments.
//!
//! Mutating handlers respond with the refreshed drawer fragment plus an
//! `HX-Trigger: cart-updated` header; the badge and the cart page listen
//! for that event and re-fetch their own fragments.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use axum::response::{AppendHeaders, IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use parasol_core::{Cart, CartItem, ProductId};

use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalAdmin;
use crate::routes::Nav;
use crate::services::CartSession;
use crate::state::AppState;

/// Cart display data shared by the page and the fragments.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
    pub is_open: bool,
}

/// One cart line for display.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub product_id: String,
    pub title: String,
    pub image_url: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product.id.to_string(),
            title: item.product.title.clone(),
            image_url: item.product.image_url.clone(),
            price: super::products::format_price(&item.product.price),
            quantity: item.quantity,
            line_total: format_amount(item.line_total()),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: format_amount(cart.subtotal()),
            item_count: cart.item_count(),
            is_open: cart.is_open(),
        }
    }
}

/// Formats a bare dollar amount, like `$38.97`.
fn format_amount(amount: Decimal) -> String {
    format!("${amount:.2}")
}

/// Cart page.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub nav: Nav,
}

/// Cart drawer fragment (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_drawer.html")]
pub struct CartDrawerTemplate {
    pub cart: CartView,
}

/// Cart line items fragment for the cart page (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Header badge fragment (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Add-to-cart form. `quantity` defaults to one for plain buy buttons.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub product_id: String,
    pub quantity: Option<u32>,
}

/// Quantity stepper form.
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub product_id: String,
    pub quantity: u32,
}

/// Remove-line form.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub product_id: String,
}

/// Displays the cart page.
#[instrument(skip(cart, admin))]
pub async fn show(OptionalAdmin(admin): OptionalAdmin, cart: CartSession) -> Result<CartShowTemplate> {
    let cart = cart.cart().await?;
    Ok(CartShowTemplate {
        cart: CartView::from(&cart),
        nav: Nav::for_admin(admin),
    })
}

/// Serves the cart line items fragment.
pub async fn items(cart: CartSession) -> Result<CartItemsTemplate> {
    let cart = cart.cart().await?;
    Ok(CartItemsTemplate {
        cart: CartView::from(&cart),
    })
}

/// Serves the cart drawer fragment.
pub async fn drawer(cart: CartSession) -> Result<CartDrawerTemplate> {
    let cart = cart.cart().await?;
    Ok(CartDrawerTemplate {
        cart: CartView::from(&cart),
    })
}

/// Serves the header badge fragment.
pub async fn count(cart: CartSession) -> Result<CartCountTemplate> {
    let cart = cart.cart().await?;
    Ok(CartCountTemplate {
        count: cart.item_count(),
    })
}

/// Adds a product to the cart.
///
/// The product is resolved from the live table without the browsing
/// delay; adding to the cart is meant to feel instant. An unknown id
/// leaves the cart alone and still renders the drawer.
#[instrument(skip(state, cart))]
pub async fn add(
    State(state): State<AppState>,
    cart: CartSession,
    Form(form): Form<AddForm>,
) -> Result<Response> {
    let product_id = ProductId::new(form.product_id);
    let product = state
        .catalog()
        .products_snapshot()
        .into_iter()
        .find(|product| product.id == product_id);

    let Some(product) = product else {
        tracing::warn!(product_id = %product_id, "add to cart for unknown product");
        let current = cart.cart().await?;
        return Ok(CartDrawerTemplate {
            cart: CartView::from(&current),
        }
        .into_response());
    };

    let quantity = form.quantity.unwrap_or(1);
    let updated = cart.add(product, quantity).await?;
    tracing::debug!(product_id = %product_id, quantity, "added to cart");

    Ok(updated_cart_response(&updated))
}

/// Sets a line quantity; zero removes the line.
#[instrument(skip(cart))]
pub async fn update(cart: CartSession, Form(form): Form<UpdateForm>) -> Result<Response> {
    let product_id = ProductId::new(form.product_id);
    let updated = cart.update_quantity(&product_id, form.quantity).await?;
    Ok(updated_cart_response(&updated))
}

/// Removes a line from the cart.
#[instrument(skip(cart))]
pub async fn remove(cart: CartSession, Form(form): Form<RemoveForm>) -> Result<Response> {
    let product_id = ProductId::new(form.product_id);
    let updated = cart.remove(&product_id).await?;
    Ok(updated_cart_response(&updated))
}

/// Opens or closes the drawer. The entries do not change, so no
/// `cart-updated` event is fired.
#[instrument(skip(cart))]
pub async fn toggle(cart: CartSession) -> Result<CartDrawerTemplate> {
    let updated = cart.toggle().await?;
    Ok(CartDrawerTemplate {
        cart: CartView::from(&updated),
    })
}

fn updated_cart_response(cart: &Cart) -> Response {
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartDrawerTemplate {
            cart: CartView::from(cart),
        },
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use parasol_core::{Price, Product};
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            image_url: format!("https://example.com/{id}.jpg"),
            price: Price::from_cents(cents),
            rating: 4.0,
            sales: 10,
        }
    }

    #[test]
    fn cart_view_formats_lines_and_subtotal() {
        let mut cart = Cart::default();
        cart.add(product("P1", 1050), 2);
        cart.add(product("P2", 599), 3);

        let view = CartView::from(&cart);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.subtotal, "$38.97");
        assert_eq!(view.item_count, 5);

        let first = view.items.first().unwrap();
        assert_eq!(first.price, "$10.50");
        assert_eq!(first.line_total, "$21.00");
    }

    #[test]
    fn format_amount_pads_cents() {
        assert_eq!(format_amount(Decimal::new(5, 1)), "$0.50");
        assert_eq!(format_amount(Decimal::ZERO), "$0.00");
    }
}
