use axum::{Json, extract::State};

use crate::{error::Error, model::HomeView, state::SharedAppState, upload::GENRES};

pub async fn health() -> &'static str {
    "Alive"
}

#[tracing::instrument(name = "[GET] home", skip_all)]
pub async fn index(State(app_state): State<SharedAppState>) -> Result<Json<HomeView>, Error> {
    let catalog = app_state.catalog.list().await;
    let ai_results = app_state.feed.results().await;

    Ok(Json(HomeView::build(&catalog, ai_results.as_deref())))
}

#[tracing::instrument(name = "[GET] genres", skip_all)]
pub async fn genres() -> Json<Vec<&'static str>> {
    Json(GENRES.to_vec())
}
