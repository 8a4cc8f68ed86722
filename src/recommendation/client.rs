use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::{config::Gemini, model::Comic};

use super::{
    Recommender,
    error::RecommendError,
    schema::{GenerateContentRequest, GenerateContentResponse, parse_recommendations},
};

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<SecretString>,
}

impl GeminiClient {
    pub fn new(
        client: reqwest::Client,
        base_url: String,
        model: String,
        api_key: Option<SecretString>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
        }
    }

    pub fn from_config(config: &Gemini) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self::new(
            client,
            config.base_url.clone(),
            config.model.clone(),
            config.api_key.clone(),
        ))
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty())
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn generate(
        &self,
        api_key: &SecretString,
        query: &str,
    ) -> Result<Vec<Comic>, RecommendError> {
        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key.expose_secret())
            .json(&GenerateContentRequest::for_query(query))
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "Model responded");
        if !response.status().is_success() {
            return Err(RecommendError::Status(response.status()));
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body.text().ok_or(RecommendError::EmptyResponse)?;

        Ok(parse_recommendations(&text)?)
    }
}

#[async_trait]
impl Recommender for GeminiClient {
    #[tracing::instrument(name = "ai recommendations", skip(self), fields(model = %self.model))]
    async fn recommend(&self, query: &str) -> Vec<Comic> {
        let api_key = match self.api_key.as_ref() {
            Some(key) if !key.expose_secret().is_empty() => key,
            _ => {
                tracing::warn!("No Gemini API key configured, recommendations are disabled");
                return Vec::new();
            }
        };

        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match self.generate(api_key, query).await {
            Ok(comics) => {
                tracing::info!(count = comics.len(), "Recommendations received");
                comics
            }
            Err(error) => {
                tracing::error!(err.msg = %error, err.details = ?error, "Recommendation request failed");
                Vec::new()
            }
        }
    }
}
