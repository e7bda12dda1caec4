//! The shopping cart container.
//!
//! [`Cart`] is pure state: callers load it, apply one of the mutation
//! methods, and store it back. The read-only aggregates ([`Cart::item_count`],
//! [`Cart::subtotal`]) are computed from the entries on every call rather
//! than cached alongside them, so they can never drift out of sync.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::product::Product;

/// One cart entry: a product snapshot and how many units of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.amount * Decimal::from(self.quantity)
    }
}

/// Cart state for one browser session: the entries plus the drawer flag.
///
/// Entries are unique by product id, keep insertion order, and always
/// carry a strictly positive quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
    is_open: bool,
}

impl Cart {
    /// Add `quantity` units of `product`.
    ///
    /// An existing entry with the same product id is incremented instead of
    /// duplicated; a zero quantity leaves the entries alone. Either way the
    /// drawer opens so the shopper sees the current state.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity > 0 {
            if let Some(item) = self
                .items
                .iter_mut()
                .find(|item| item.product.id == product.id)
            {
                item.quantity += quantity;
            } else {
                self.items.push(CartItem { product, quantity });
            }
        }
        self.is_open = true;
    }

    /// Set the quantity of the entry with `id`; zero removes the entry.
    /// Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
        } else if let Some(item) = self.items.iter_mut().find(|item| item.product.id == *id) {
            item.quantity = quantity;
        }
    }

    /// Drop the entry with `id`, if present.
    pub fn remove(&mut self, id: &ProductId) {
        self.items.retain(|item| item.product.id != *id);
    }

    /// Flip the drawer flag. Entries are untouched.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Remove every entry. The drawer flag is untouched.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the drawer is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the cart holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all entries, derived on every call.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of all line totals, derived on every call.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Move the entries out, leaving the cart empty.
    #[must_use]
    pub fn take_items(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.items)
    }
}
