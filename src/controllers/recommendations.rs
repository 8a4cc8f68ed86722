use anyhow::Context;
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::Instrument;
use validator::{Validate, ValidationError};

use crate::{error::Error, model::Comic, recommendation::SearchState, state::SharedAppState};

#[derive(Deserialize, Debug, Validate)]
pub struct RecommendationRequest {
    #[validate(
        length(max = 200, message = "Query must be at most 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub query: String,
}

fn validate_not_blank(query: &str) -> Result<(), ValidationError> {
    if query.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Query must not be blank".into()));
    }

    Ok(())
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub generation: u64,
    /// `false` when a newer query superseded this one.
    pub applied: bool,
    pub results: Vec<Comic>,
}

#[tracing::instrument(name = "[GET] recommendations", skip_all)]
pub async fn index(State(app_state): State<SharedAppState>) -> Json<SearchState> {
    Json(app_state.feed.snapshot().await)
}

/// The lookup runs on its own task so the feed is settled even when the
/// client goes away before the answer arrives.
#[tracing::instrument(name = "[POST] recommendations", skip_all, fields(generation))]
pub async fn store(
    State(app_state): State<SharedAppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, Error> {
    request.validate().map_err(Error::Validation)?;

    let ticket = app_state.feed.begin(request.query.trim()).await;
    tracing::Span::current().record("generation", ticket.generation);

    let lookup = tokio::spawn(
        async move {
            let results = app_state.recommender.recommend(&ticket.query).await;
            let applied = app_state.feed.complete(&ticket, results.clone()).await;

            RecommendationResponse {
                generation: ticket.generation,
                applied,
                results,
            }
        }
        .in_current_span(),
    );

    let response = lookup
        .await
        .context("recommendation task failed")
        .map_err(Error::Other)?;

    Ok(Json(response))
}

#[tracing::instrument(name = "[DELETE] recommendations", skip_all)]
pub async fn destroy(State(app_state): State<SharedAppState>) -> StatusCode {
    app_state.feed.clear().await;

    StatusCode::NO_CONTENT
}
