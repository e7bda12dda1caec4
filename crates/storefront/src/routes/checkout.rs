//! Checkout and order confirmation.
//!
//! Checkout is a simulation: the shipping and payment forms are shown but
//! never read, and "payment" is a fixed delay. The placed order travels to
//! the confirmation page through the session and is consumed there, so a
//! refresh of the confirmation page goes back to the home page.

use std::time::Duration;

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Redirect, Response};
use rust_decimal::Decimal;
use tower_sessions::Session;
use tracing::instrument;

use parasol_core::{Order, Price};

use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalAdmin;
use crate::models::session_keys;
use crate::routes::Nav;
use crate::routes::cart::{CartItemView, CartView};
use crate::services::CartSession;

/// Simulated payment processing time.
const PROCESSING_DELAY: Duration = Duration::from_secs(2);

/// Orders strictly above this subtotal ship free.
const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(5000, 0, 0, false, 2);

/// Flat shipping rate below the threshold.
const SHIPPING_RATE: Decimal = Decimal::from_parts(599, 0, 0, false, 2);

/// Checkout page with the order summary and the mock forms.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub cart: CartView,
    pub shipping: String,
    pub total: String,
    pub nav: Nav,
}

/// Order confirmation page.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmation.html")]
pub struct ConfirmationTemplate {
    pub order_id: String,
    pub items: Vec<CartItemView>,
    pub total: String,
    pub nav: Nav,
}

/// Shipping cost for a subtotal.
fn shipping_for(subtotal: Decimal) -> Decimal {
    if subtotal > FREE_SHIPPING_THRESHOLD {
        Decimal::ZERO
    } else {
        SHIPPING_RATE
    }
}

/// Displays the checkout page. An empty cart goes back to the home page.
#[instrument(skip(cart, admin))]
pub async fn show(OptionalAdmin(admin): OptionalAdmin, cart: CartSession) -> Result<Response> {
    let current = cart.cart().await?;
    if current.is_empty() {
        return Ok(Redirect::to("/").into_response());
    }

    let subtotal = current.subtotal();
    let shipping = shipping_for(subtotal);
    let shipping_label = if shipping.is_zero() {
        "Free".to_owned()
    } else {
        format!("${shipping:.2}")
    };

    Ok(CheckoutTemplate {
        cart: CartView::from(&current),
        shipping: shipping_label,
        total: format!("${:.2}", subtotal + shipping),
        nav: Nav::for_admin(admin),
    }
    .into_response())
}

/// Places the order.
///
/// The posted shipping and payment fields are deliberately ignored. After
/// the simulated payment delay the cart entries are frozen into an
/// [`Order`], the cart is emptied and the shopper is sent to the
/// confirmation page.
#[instrument(skip(session, cart))]
pub async fn place_order(session: Session, cart: CartSession) -> Result<Response> {
    let mut current = cart.cart().await?;
    if current.is_empty() {
        return Ok(Redirect::to("/").into_response());
    }

    tokio::time::sleep(PROCESSING_DELAY).await;

    let subtotal = current.subtotal();
    let order = Order::place(current.take_items(), Price::usd(subtotal));
    cart.clear().await?;
    stash_pending_order(&session, &order).await?;
    tracing::info!(order_id = %order.id, items = order.item_count(), "order placed");

    Ok(Redirect::to("/confirmation").into_response())
}

/// Displays the confirmation page for the order placed just now.
///
/// The pending order is removed from the session on read, so the page
/// renders exactly once; without one the shopper is sent home.
#[instrument(skip(session, admin))]
pub async fn confirmation(
    session: Session,
    OptionalAdmin(admin): OptionalAdmin,
) -> Result<Response> {
    let Some(order) = take_pending_order(&session).await? else {
        return Ok(Redirect::to("/").into_response());
    };

    Ok(ConfirmationTemplate {
        order_id: order.id.to_string(),
        items: order.items.iter().map(CartItemView::from).collect(),
        total: super::products::format_price(&order.subtotal),
        nav: Nav::for_admin(admin),
    }
    .into_response())
}

async fn stash_pending_order(session: &Session, order: &Order) -> Result<()> {
    session.insert(session_keys::PENDING_ORDER, order).await?;
    Ok(())
}

async fn take_pending_order(session: &Session) -> Result<Option<Order>> {
    Ok(session.remove::<Order>(session_keys::PENDING_ORDER).await?)
}
