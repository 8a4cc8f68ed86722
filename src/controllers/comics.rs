use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use validator::Validate;

use crate::{
    catalog::error::CatalogError,
    error::Error,
    model::{Comic, ComicCard},
    reader::ReaderView,
    state::SharedAppState,
};

#[tracing::instrument(name = "[GET] comics", skip_all, fields(parameters))]
pub async fn index(
    State(app_state): State<SharedAppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<ComicCard>>, Error> {
    pagination.validate().map_err(Error::Validation)?;

    let limit = usize::try_from(pagination.limit.unwrap_or(20)).unwrap_or_default();
    let skip = usize::try_from(pagination.offset.unwrap_or(0))
        .unwrap_or_default()
        .saturating_mul(limit);

    let comics = app_state.catalog.list().await;
    let page = comics
        .iter()
        .skip(skip)
        .take(limit)
        .map(ComicCard::from)
        .collect();

    Ok(Json(page))
}

#[tracing::instrument(name = "[GET] comics/{id}", skip_all, fields(path.id = %path.id))]
pub async fn show(
    State(app_state): State<SharedAppState>,
    Path(path): Path<UrlPath>,
) -> Result<Json<Comic>, Error> {
    let comic = find_comic(&app_state, &path.id).await?;

    Ok(Json(comic))
}

#[tracing::instrument(
    name = "[GET] comics/{id}/chapters/{number}",
    skip_all,
    fields(path.id = %path.id, path.number = %path.number)
)]
pub async fn read(
    State(app_state): State<SharedAppState>,
    Path(path): Path<ChapterPath>,
) -> Result<Json<ReaderView>, Error> {
    let comic = find_comic(&app_state, &path.id).await?;
    let view = ReaderView::build(&comic, &path.number)?;

    Ok(Json(view))
}

/// Catalog first, then the current AI results.
async fn find_comic(app_state: &SharedAppState, id: &str) -> Result<Comic, Error> {
    if let Some(comic) = app_state.catalog.find(id).await {
        return Ok(comic);
    }

    app_state
        .feed
        .find(id)
        .await
        .ok_or(Error::Catalog(CatalogError::NotFound))
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Validate)]
pub struct Pagination {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(range(min = 0))]
    offset: Option<i64>,

    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(range(min = 0))]
    limit: Option<i64>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct UrlPath {
    pub id: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ChapterPath {
    pub id: String,
    pub number: String,
}
