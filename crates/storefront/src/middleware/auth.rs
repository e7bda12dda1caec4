//! Admin authentication extractors.
//!
//! The admin panel lives on the same router as the public shop; these
//! extractors are what fence it off.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::Session;
use tower_sessions::session::Error as SessionError;

use crate::models::CurrentAdmin;
use crate::models::session_keys as keys;

/// Read the signed-in admin out of the request's session, if any.
///
/// Anything short of a cleanly stored identity reads as signed out: a
/// missing session layer, no stored value, or a value that no longer
/// deserializes.
async fn stored_admin(parts: &Parts) -> Option<CurrentAdmin> {
    let session = parts.extensions.get::<Session>()?;
    session.get(keys::CURRENT_ADMIN).await.ok().flatten()
}

/// Extractor for handlers only an admin may reach.
///
/// ```rust,ignore
/// async fn dashboard(RequireAdmin(admin): RequireAdmin) -> impl IntoResponse {
///     format!("Hello, {}!", admin.email)
/// }
/// ```
pub struct RequireAdmin(pub CurrentAdmin);

/// Rejection for [`RequireAdmin`]: anonymous visitors land on the login page.
pub struct AdminRejection;

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        Redirect::to("/login").into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        stored_admin(parts).await.map(Self).ok_or(AdminRejection)
    }
}

/// Extractor that reads the admin identity without insisting on one.
///
/// Never rejects; pages rendered for everyone use it to vary the header.
pub struct OptionalAdmin(pub Option<CurrentAdmin>);

impl<S> FromRequestParts<S> for OptionalAdmin
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(stored_admin(parts).await))
    }
}

/// Record a successful login in the session.
///
/// # Errors
///
/// Fails only if the session store rejects the write.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), SessionError> {
    session.insert(keys::CURRENT_ADMIN, admin).await
}

/// Drop the admin identity from the session, signing them out.
///
/// # Errors
///
/// Fails only if the session store rejects the write.
pub async fn clear_current_admin(session: &Session) -> Result<(), SessionError> {
    session.remove::<CurrentAdmin>(keys::CURRENT_ADMIN).await?;
    Ok(())
}
