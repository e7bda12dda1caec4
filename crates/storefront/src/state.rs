//! Shared handler state.

use std::sync::Arc;

use crate::catalog::{CatalogLatency, CatalogStore};
use crate::config::StorefrontConfig;
use crate::services::{AuthService, RecommendationClient};

/// State handed to every handler.
///
/// A cheap `Arc` clone; holds the seeded catalog, the admin credential
/// verifier and the recommendation client for the life of the process.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogStore,
    auth: AuthService,
    recommender: RecommendationClient,
}

impl AppState {
    /// Build the state a fresh process starts with: a seeded catalog, the
    /// configured credential pair and a recommendation client in live or
    /// fallback mode depending on the API key.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let latency = if config.catalog_latency {
            CatalogLatency::simulated()
        } else {
            CatalogLatency::none()
        };

        Self {
            inner: Arc::new(AppStateInner {
                catalog: CatalogStore::new(latency),
                auth: AuthService::new(config.admin.clone()),
                recommender: RecommendationClient::new(&config.recommendations),
                config,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// The in-memory product catalog.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// The admin credential verifier.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    /// The product recommendation client.
    #[must_use]
    pub fn recommender(&self) -> &RecommendationClient {
        &self.inner.recommender
    }
}
