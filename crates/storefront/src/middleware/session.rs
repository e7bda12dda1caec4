//! Session middleware configuration.
//!
//! Sessions live in process memory like everything else in the storefront,
//! so a restart forgets every cart and signs every admin out. The cookie is
//! a session cookie; closing the browser starts fresh too.

use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "parasol_session";

/// Build the session layer over a fresh in-memory store.
///
/// The cookie is HTTP-only and `SameSite=Lax`; the `Secure` flag follows
/// whether the configured base URL is HTTPS.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnSessionEnd)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(config.is_https())
        .with_path("/")
}
