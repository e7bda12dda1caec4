//! Business logic services for the storefront.
//!
//! - `auth` - admin credential verification against the configured pair
//! - `cart` - session-backed shopping cart operations
//! - `recommend` - AI search-query suggestions for the product detail page

pub mod auth;
pub mod cart;
pub mod recommend;

pub use auth::{AuthError, AuthService};
pub use cart::CartSession;
pub use recommend::RecommendationClient;
