//! Admin authentication service.
//!
//! The admin panel is guarded by a single email/password pair supplied
//! through configuration. There is no user table and nothing is hashed;
//! verification is a comparison against the configured values.

use secrecy::ExposeSecret;

use crate::config::AdminConfig;
use crate::models::CurrentAdmin;

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The submitted pair does not match the configured admin.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Verifies login attempts against the configured admin pair.
#[derive(Debug, Clone)]
pub struct AuthService {
    admin: AdminConfig,
}

impl AuthService {
    /// Create the service from the configured admin pair.
    #[must_use]
    pub const fn new(admin: AdminConfig) -> Self {
        Self { admin }
    }

    /// Check a login attempt.
    ///
    /// The email comparison ignores case; the password must match exactly.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when either half of the pair
    /// is wrong. Callers get no hint which half failed.
    pub fn verify(&self, email: &str, password: &str) -> Result<CurrentAdmin, AuthError> {
        if !self.admin.email.matches_ignore_case(email) {
            return Err(AuthError::InvalidCredentials);
        }
        if self.admin.password.expose_secret() != password {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(CurrentAdmin {
            email: self.admin.email.clone(),
        })
    }
}
