//! Integration test harness for Parasol Market.
//!
//! [`TestServer`] boots the complete storefront, router and middleware
//! stack included, on an ephemeral port and drives it over HTTP the way a
//! browser would: cookies on, redirects left unfollowed so tests can
//! assert on them.
//!
//! The catalog's simulated latency is switched off and no Anthropic API
//! key is configured, so the recommendation widget exercises its fallback
//! path.

// Test harness: panicking on setup failure is the desired behavior.
#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::net::SocketAddr;

use parasol_core::Email;
use parasol_storefront::config::{
    AdminConfig, DEFAULT_CLAUDE_MODEL, RecommendationConfig, StorefrontConfig,
};
use parasol_storefront::state::AppState;
use secrecy::SecretString;
use serde::Serialize;

/// Email of the test admin account.
pub const ADMIN_EMAIL: &str = "shopkeeper@parasol.test";

/// Password of the test admin account.
pub const ADMIN_PASSWORD: &str = "sunny-umbrella";

/// A running storefront instance plus a cookie-holding HTTP client.
///
/// Every test gets its own server and therefore its own catalog, so tests
/// cannot observe each other's mutations.
pub struct TestServer {
    addr: SocketAddr,
    client: reqwest::Client,
    state: AppState,
}

impl TestServer {
    /// Boots the storefront on an ephemeral port.
    pub async fn start() -> Self {
        let state = AppState::new(test_config());
        let app = parasol_storefront::app(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        Self {
            addr,
            client,
            state,
        }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Application state shared with the running server, for asserting on
    /// the catalog directly.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// GET a path, keeping session cookies.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    /// POST a urlencoded form, keeping session cookies.
    pub async fn post_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .unwrap()
    }

    /// Signs this client's session in as the test admin.
    pub async fn login_as_admin(&self) {
        let response = self
            .post_form(
                "/login",
                &[("email", ADMIN_EMAIL), ("password", ADMIN_PASSWORD)],
            )
            .await;
        assert_eq!(response.status(), reqwest::StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/admin");
    }

    /// Id of the first product in the seeded catalog.
    #[must_use]
    pub fn first_product_id(&self) -> String {
        self.state
            .catalog()
            .products_snapshot()
            .first()
            .unwrap()
            .id
            .to_string()
    }

    /// Title of the first product in the seeded catalog.
    #[must_use]
    pub fn first_product_title(&self) -> String {
        self.state
            .catalog()
            .products_snapshot()
            .first()
            .unwrap()
            .title
            .clone()
    }
}

/// The `Location` header of a redirect response.
#[must_use]
pub fn location(response: &reqwest::Response) -> &str {
    response
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        admin: AdminConfig {
            email: Email::parse(ADMIN_EMAIL).unwrap(),
            password: SecretString::from(ADMIN_PASSWORD),
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
