//! Storefront configuration, read from the environment once at startup.
//!
//! Required variables:
//!
//! - `ADMIN_EMAIL` - email half of the admin credential pair
//! - `ADMIN_PASSWORD` - password half, at least 8 characters
//!
//! Everything else has a default or is optional:
//!
//! - `STOREFRONT_HOST` - bind address, default 127.0.0.1
//! - `STOREFRONT_PORT` - listen port, default 3000
//! - `STOREFRONT_BASE_URL` - public URL, default `http://localhost:3000`;
//!   an `https` URL turns on the Secure cookie flag
//! - `CLAUDE_API_KEY` - Anthropic API key for the recommendation widget;
//!   without it the widget serves its fixed fallback list
//! - `CLAUDE_MODEL` - recommendation model, default claude-sonnet-4-20250514
//! - `CATALOG_LATENCY` - simulate network delay in the mock catalog, default true
//! - `SENTRY_DSN` - error tracking DSN; absent means Sentry stays off
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag, default development

use std::net::{IpAddr, SocketAddr};

use parasol_core::Email;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_ADMIN_PASSWORD_LENGTH: usize = 8;

/// Default model for the recommendation widget.
pub const DEFAULT_CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Everything the storefront binary needs to run.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Bind address.
    pub host: IpAddr,
    /// Listen port.
    pub port: u16,
    /// Public base URL of the storefront.
    pub base_url: String,
    /// The one admin credential pair.
    pub admin: AdminConfig,
    /// Recommendation widget settings.
    pub recommendations: RecommendationConfig,
    /// Whether the mock catalog sleeps to imitate a real backend.
    pub catalog_latency: bool,
    /// Sentry DSN, when error tracking is wanted.
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag.
    pub sentry_environment: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file first when one exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required variable is missing, a value
    /// fails to parse, or the admin password is too short.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            host: parsed_env("STOREFRONT_HOST", "127.0.0.1")?,
            port: parsed_env("STOREFRONT_PORT", "3000")?,
            base_url: env_or("STOREFRONT_BASE_URL", "http://localhost:3000"),
            admin: AdminConfig::from_env()?,
            recommendations: RecommendationConfig::from_env(),
            catalog_latency: parsed_env("CATALOG_LATENCY", "true")?,
            sentry_dsn: optional_env("SENTRY_DSN"),
            sentry_environment: env_or("SENTRY_ENVIRONMENT", "development"),
        })
    }

    /// The address the server binds to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the public base URL is served over https.
    #[must_use]
    pub fn is_https(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

/// The admin credential pair.
///
/// `Debug` is written by hand so the password never reaches a log line.
#[derive(Clone)]
pub struct AdminConfig {
    /// Login email, matched case-insensitively.
    pub email: Email,
    /// Login password, matched exactly.
    pub password: SecretString,
}

impl AdminConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let email = Email::parse(&required_env("ADMIN_EMAIL")?)
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_EMAIL".to_owned(), e.to_string()))?;

        let password = SecretString::from(required_env("ADMIN_PASSWORD")?);
        validate_admin_password(&password, "ADMIN_PASSWORD")?;

        Ok(Self { email, password })
    }
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Settings for the recommendation widget.
///
/// `Debug` is written by hand so the API key never reaches a log line.
#[derive(Clone)]
pub struct RecommendationConfig {
    /// Anthropic API key; `None` puts the widget in fallback mode.
    pub api_key: Option<SecretString>,
    /// Model used for suggestion generation.
    pub model: String,
}

impl RecommendationConfig {
    fn from_env() -> Self {
        Self {
            api_key: optional_env("CLAUDE_API_KEY").map(SecretString::from),
            model: env_or("CLAUDE_MODEL", DEFAULT_CLAUDE_MODEL),
        }
    }
}

impl std::fmt::Debug for RecommendationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_key = self.api_key.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("RecommendationConfig")
            .field("api_key", &api_key)
            .field("model", &self.model)
            .finish()
    }
}

// Environment helpers.

fn required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Read an env var with a default and parse it, tagging parse failures with
/// the variable name.
fn parsed_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_or(key, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string()))
}

/// Length check for the admin password.
///
/// Deliberately no entropy or placeholder checks: this pair guards a demo
/// panel and operators routinely pick memorable values for it.
fn validate_admin_password(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let len = secret.expose_secret().len();
    if len < MIN_ADMIN_PASSWORD_LENGTH {
        let reason = format!("must be at least {MIN_ADMIN_PASSWORD_LENGTH} characters (got {len})");
        return Err(ConfigError::InsecureSecret(var_name.to_owned(), reason));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn local_config() -> StorefrontConfig {
        StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            admin: AdminConfig {
                email: Email::parse("shopkeeper@parasol.test").unwrap(),
                password: SecretString::from("sunny-umbrella"),
            },
            recommendations: RecommendationConfig {
                api_key: None,
                model: DEFAULT_CLAUDE_MODEL.to_string(),
            },
            catalog_latency: false,
            sentry_dsn: None,
            sentry_environment: "test".to_string(),
        }
    }

    #[test]
    fn test_short_admin_password_is_rejected() {
        let result = validate_admin_password(&SecretString::from("short"), "TEST_PASSWORD");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_minimum_length_admin_password_passes() {
        let result = validate_admin_password(&SecretString::from("12345678"), "TEST_PASSWORD");
        assert!(result.is_ok());
    }

    #[test]
    fn test_socket_addr_combines_host_and_port() {
        let addr = local_config().socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_is_https_follows_base_url() {
        let mut config = local_config();
        assert!(!config.is_https());

        config.base_url = "https://shop.parasol.test".to_string();
        assert!(config.is_https());
    }

    #[test]
    fn test_debug_redacts_admin_password() {
        let rendered = format!("{:?}", local_config().admin);
        assert!(rendered.contains("shopkeeper@parasol.test"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("sunny-umbrella"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = RecommendationConfig {
            api_key: Some(SecretString::from("sk-ant-example-key")),
            model: DEFAULT_CLAUDE_MODEL.to_string(),
        };
        let rendered = format!("{config:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("sk-ant-example-key"));
    }
}
