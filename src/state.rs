use std::sync::Arc;

use anyhow::Context;

use crate::{
    auth::{SessionRegistry, compute_password_hash},
    catalog::{CatalogRepository, InMemoryCatalog, fixture},
    config::Config,
    recommendation::{GeminiClient, RecommendationFeed, Recommender},
    telemetry::spawn_blocking_with_tracing,
};

pub struct AppState {
    pub config: Config,
    pub catalog: Arc<dyn CatalogRepository>,
    pub recommender: Arc<dyn Recommender>,
    pub feed: RecommendationFeed,
    pub sessions: SessionRegistry,
    pub admin_password_hash: String,
}

pub type SharedAppState = Arc<AppState>;

impl AppState {
    pub async fn init(config: Config) -> Result<Self, anyhow::Error> {
        let comics = fixture::load(config.application.catalog_fixture.as_deref())?;
        let catalog = Arc::new(InMemoryCatalog::new(comics));

        let client = GeminiClient::from_config(&config.gemini)
            .context("Failed to build the recommendation client")?;
        if !client.is_enabled() {
            tracing::warn!("Gemini API key is missing, AI recommendations are disabled");
        }

        Self::with_components(config, catalog, Arc::new(client)).await
    }

    /// Builds the state around the given catalog and recommender.
    pub async fn with_components(
        config: Config,
        catalog: Arc<dyn CatalogRepository>,
        recommender: Arc<dyn Recommender>,
    ) -> Result<Self, anyhow::Error> {
        let password = config.admin.password.clone();
        let admin_password_hash =
            spawn_blocking_with_tracing(move || compute_password_hash(&password))
                .await
                .context("Failed to hash the admin password")??;

        Ok(AppState {
            config,
            catalog,
            recommender,
            feed: RecommendationFeed::new(),
            sessions: SessionRegistry::new(),
            admin_password_hash,
        })
    }
}
