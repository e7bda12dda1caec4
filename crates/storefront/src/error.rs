//! Application error type shared by the route handlers.
//!
//! Fallible handlers return [`Result<T>`]; the [`IntoResponse`] impl turns
//! the failure into a client-safe status and message, shipping anything
//! server-shaped to Sentry on the way out. Fragment handlers that prefer to
//! degrade (the recommendation widget, for one) absorb their errors before
//! this type ever sees them.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::catalog::CatalogError;

/// Everything a storefront handler can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog lookup failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Session load or store failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Catalog(CatalogError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Product not found")
            }
            Self::Session(_) => {
                let event_id = sentry::capture_error(&self);
                tracing::error!(error = %self, %event_id, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, message).into_response()
    }
}

/// Attach the signed-in admin's email to the Sentry scope.
///
/// Call on login so later errors carry the identity they happened under.
pub fn set_sentry_user(email: &str) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            email: Some(email.to_owned()),
            ..Default::default()
        }));
    });
}

/// Detach the user from the Sentry scope on logout.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| scope.set_user(None));
}
