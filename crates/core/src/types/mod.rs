//! The domain vocabulary: IDs, money, emails, catalog entries, carts and
//! orders.

pub mod cart;
pub mod category;
pub mod email;
pub mod id;
pub mod order;
pub mod price;
pub mod product;

pub use cart::{Cart, CartItem};
pub use category::Category;
pub use email::{Email, EmailError};
pub use id::*;
pub use order::Order;
pub use price::{CurrencyCode, Price};
pub use product::{
    NewProduct, Product, ProductDetail, ProductPatch, ShippingInfo, SpecEntry, StoreInfo,
};
