//! Admin login and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{OptionalAdmin, clear_current_admin, set_current_admin};
use crate::routes::Nav;
use crate::services::AuthError;
use crate::state::AppState;

/// Shown on the login page after a failed attempt.
const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials. Please try again.";

/// Admin login page.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub email: String,
    pub nav: Nav,
}

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Displays the login page. Admins who are already signed in go straight
/// to the dashboard.
#[instrument(skip(admin))]
pub async fn login_page(OptionalAdmin(admin): OptionalAdmin) -> Response {
    if admin.is_some() {
        return Redirect::to("/admin").into_response();
    }
    LoginTemplate {
        error: None,
        email: String::new(),
        nav: Nav::for_admin(None),
    }
    .into_response()
}

/// Verifies the posted credentials and signs the admin in.
///
/// A failed attempt re-renders the page with the entered email kept and a
/// generic message that does not reveal which field was wrong.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match state.auth().verify(&form.email, &form.password) {
        Ok(admin) => {
            set_current_admin(&session, &admin).await?;
            set_sentry_user(admin.email.as_str());
            tracing::info!(email = %admin.email, "admin signed in");
            Ok(Redirect::to("/admin").into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("failed admin login attempt");
            Ok((
                StatusCode::UNAUTHORIZED,
                LoginTemplate {
                    error: Some(INVALID_CREDENTIALS_MESSAGE.to_owned()),
                    email: form.email,
                    nav: Nav::for_admin(None),
                },
            )
                .into_response())
        }
    }
}

/// Signs the admin out and returns to the home page.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_admin(&session).await?;
    clear_sentry_user();
    tracing::info!("admin signed out");
    Ok(Redirect::to("/"))
}
