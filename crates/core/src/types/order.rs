//! Completed-order snapshot handed from checkout to the confirmation page.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::cart::CartItem;
use super::id::OrderId;
use super::price::Price;

impl OrderId {
    /// Mint an order id from the current wall clock: `PS-{unix_millis}`.
    #[must_use]
    pub fn generate() -> Self {
        Self::new(format!("PS-{}", Utc::now().timestamp_millis()))
    }
}

/// A placed order: the cart entries frozen at checkout time.
///
/// Orders are not persisted anywhere. The only copy travels through the
/// session to the confirmation page and is consumed on arrival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartItem>,
    pub subtotal: Price,
}

impl Order {
    /// Freeze the given entries into a new order with a generated id.
    #[must_use]
    pub fn place(items: Vec<CartItem>, subtotal: Price) -> Self {
        Self {
            id: OrderId::generate(),
            items,
            subtotal,
        }
    }

    /// Total units in the order.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}
