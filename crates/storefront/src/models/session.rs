//! Session-related types.
//!
//! Everything the storefront remembers about a browser lives in its session:
//! the signed-in admin identity, the shopping cart and the one-shot order
//! handed to the confirmation page.

use serde::{Deserialize, Serialize};

use parasol_core::Email;

/// Session-stored admin identity.
///
/// Minimal data stored in the session to identify the signed-in admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// The admin's email address.
    pub email: Email,
}

/// Session keys for storefront state.
pub mod keys {
    /// Key for storing the current signed-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";

    /// Key for the shopping cart.
    pub const CART: &str = "cart";

    /// Key for an order that has been placed but whose confirmation page has
    /// not been viewed yet. Consumed on first read.
    pub const PENDING_ORDER: &str = "pending_order";
}
