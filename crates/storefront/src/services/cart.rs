//! Session-backed shopping cart.
//!
//! The cart itself is a plain value type ([`parasol_core::Cart`]); this
//! module owns its persistence. Every mutation loads the cart from the
//! session, applies the change and writes it back, so handlers never touch
//! raw session keys.

use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};
use tower_sessions::Session;

use parasol_core::{Cart, Product, ProductId};

use crate::models::session_keys;

/// Extractor giving handlers access to the session's cart.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(cart: CartSession) -> Result<impl IntoResponse> {
///     let cart = cart.toggle().await?;
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CartSession {
    session: Session,
}

impl<S> FromRequestParts<S> for CartSession
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts.extensions.get::<Session>().cloned().ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "session layer is not installed",
        ))?;
        Ok(Self { session })
    }
}

impl CartSession {
    /// Wrap an existing session handle.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    /// The current cart, or an empty one if this browser has none yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn cart(&self) -> Result<Cart, tower_sessions::session::Error> {
        Ok(self
            .session
            .get::<Cart>(session_keys::CART)
            .await?
            .unwrap_or_default())
    }

    /// Add a product to the cart and open the drawer.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn add(
        &self,
        product: Product,
        quantity: u32,
    ) -> Result<Cart, tower_sessions::session::Error> {
        let mut cart = self.cart().await?;
        cart.add(product, quantity);
        self.save(&cart).await?;
        Ok(cart)
    }

    /// Set a line's quantity; zero removes the line.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn update_quantity(
        &self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Cart, tower_sessions::session::Error> {
        let mut cart = self.cart().await?;
        cart.update_quantity(product_id, quantity);
        self.save(&cart).await?;
        Ok(cart)
    }

    /// Remove a line entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn remove(
        &self,
        product_id: &ProductId,
    ) -> Result<Cart, tower_sessions::session::Error> {
        let mut cart = self.cart().await?;
        cart.remove(product_id);
        self.save(&cart).await?;
        Ok(cart)
    }

    /// Flip the drawer open or closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn toggle(&self) -> Result<Cart, tower_sessions::session::Error> {
        let mut cart = self.cart().await?;
        cart.toggle();
        self.save(&cart).await?;
        Ok(cart)
    }

    /// Empty the cart, leaving the drawer state alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn clear(&self) -> Result<Cart, tower_sessions::session::Error> {
        let mut cart = self.cart().await?;
        cart.clear();
        self.save(&cart).await?;
        Ok(cart)
    }

    async fn save(&self, cart: &Cart) -> Result<(), tower_sessions::session::Error> {
        self.session.insert(session_keys::CART, cart).await
    }
}
