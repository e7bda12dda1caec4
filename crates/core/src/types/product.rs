//! Product catalog types.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

impl ProductId {
    /// Mint a fresh product id from the current wall clock: `P{unix_millis}`.
    #[must_use]
    pub fn generate() -> Self {
        Self::new(format!("P{}", Utc::now().timestamp_millis()))
    }
}

/// A product as it appears on listing surfaces and in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub image_url: String,
    pub price: Price,
    /// Average review score, 0.0 to 5.0.
    pub rating: f32,
    /// Lifetime units sold.
    pub sales: u32,
}

impl Product {
    /// Apply a partial update, overwriting only the populated fields.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(sales) = patch.sales {
            self.sales = sales;
        }
    }
}

/// Payload for creating a product; the catalog assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub image_url: String,
    pub price: Price,
    pub rating: f32,
    pub sales: u32,
}

impl NewProduct {
    /// Attach an id, producing a full [`Product`].
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            rating: self.rating,
            sales: self.sales,
        }
    }
}

/// A partial update for a product. `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<Price>,
    pub rating: Option<f32>,
    pub sales: Option<u32>,
}

/// Expanded product information for the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub product: Product,
    pub description: String,
    /// Gallery image URLs.
    pub images: Vec<String>,
    pub shipping: ShippingInfo,
    pub store: StoreInfo,
    pub specs: Vec<SpecEntry>,
}

/// Shipping terms shown on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub price: Price,
    pub estimated_delivery: String,
}

impl ShippingInfo {
    /// Whether shipping costs nothing.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price.amount.is_zero()
    }
}

/// The storefront selling the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreInfo {
    pub name: String,
    pub rating: f32,
}

/// One specification row on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecEntry {
    pub label: String,
    pub value: String,
}
