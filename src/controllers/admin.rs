use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    catalog::error::CatalogError,
    controllers::comics::UrlPath,
    error::Error,
    model::{AdminRow, Comic},
    state::SharedAppState,
    upload::UploadForm,
};

#[derive(Deserialize, Debug, Default)]
pub struct AdminQuery {
    #[serde(default)]
    pub search: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Deserialize, Debug)]
pub struct ChapterIdPath {
    pub id: String,
    pub chapter_id: String,
}

#[derive(Deserialize, Debug)]
pub struct GenrePath {
    pub id: String,
    pub genre: String,
}

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct NewChapter {
    #[validate(length(min = 1, message = "Chapter number is required"))]
    pub number: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EditView {
    pub id: String,
    pub form: UploadForm,
}

#[tracing::instrument(name = "[GET] admin/comics", skip_all, fields(search = %query.search))]
pub async fn index(
    State(app_state): State<SharedAppState>,
    Query(query): Query<AdminQuery>,
) -> Json<Vec<AdminRow>> {
    let needle = query.search.to_lowercase();

    let rows = app_state
        .catalog
        .list()
        .await
        .iter()
        .filter(|c| c.title.to_lowercase().contains(&needle))
        .map(AdminRow::from)
        .collect();

    Json(rows)
}

#[tracing::instrument(name = "[POST] admin/comics", skip_all)]
pub async fn store(
    State(app_state): State<SharedAppState>,
    Json(form): Json<UploadForm>,
) -> Result<(StatusCode, Json<Comic>), Error> {
    form.validate().map_err(Error::Validation)?;

    let comic = form.into_comic(None);
    app_state.catalog.create(comic.clone()).await;
    tracing::info!(comic_id = %comic.id, "Comic uploaded");

    Ok((StatusCode::CREATED, Json(comic)))
}

#[tracing::instrument(name = "[GET] admin/comics/{id}", skip_all, fields(path.id = %path.id))]
pub async fn edit(
    State(app_state): State<SharedAppState>,
    Path(path): Path<UrlPath>,
) -> Result<Json<EditView>, Error> {
    let comic = app_state
        .catalog
        .find(&path.id)
        .await
        .ok_or(CatalogError::NotFound)?;

    Ok(Json(EditView {
        form: UploadForm::from_comic(&comic),
        id: comic.id,
    }))
}

#[tracing::instrument(name = "[PUT] admin/comics/{id}", skip_all, fields(path.id = %path.id))]
pub async fn update(
    State(app_state): State<SharedAppState>,
    Path(path): Path<UrlPath>,
    Json(form): Json<UploadForm>,
) -> Result<Json<Comic>, Error> {
    let comic = edit_comic(&app_state, &path.id, |current| *current = form).await?;

    Ok(Json(comic))
}

#[tracing::instrument(name = "[POST] admin/comics/{id}/chapters", skip_all, fields(path.id = %path.id))]
pub async fn add_chapter(
    State(app_state): State<SharedAppState>,
    Path(path): Path<UrlPath>,
    Json(chapter): Json<NewChapter>,
) -> Result<(StatusCode, Json<Comic>), Error> {
    chapter.validate().map_err(Error::Validation)?;

    let comic = edit_comic(&app_state, &path.id, |form| {
        form.add_chapter(&chapter.number)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(comic)))
}

#[tracing::instrument(
    name = "[DELETE] admin/comics/{id}/chapters/{chapter_id}",
    skip_all,
    fields(path.id = %path.id, path.chapter_id = %path.chapter_id)
)]
pub async fn remove_chapter(
    State(app_state): State<SharedAppState>,
    Path(path): Path<ChapterIdPath>,
) -> Result<Json<Comic>, Error> {
    let comic = edit_comic(&app_state, &path.id, |form| {
        form.remove_chapter(&path.chapter_id)
    })
    .await?;

    Ok(Json(comic))
}

/// Adds the genre when missing, removes it otherwise. Removing the last genre
/// fails validation and leaves the comic untouched.
#[tracing::instrument(
    name = "[PUT] admin/comics/{id}/genres/{genre}",
    skip_all,
    fields(path.id = %path.id, path.genre = %path.genre)
)]
pub async fn toggle_genre(
    State(app_state): State<SharedAppState>,
    Path(path): Path<GenrePath>,
) -> Result<Json<Comic>, Error> {
    let comic = edit_comic(&app_state, &path.id, |form| {
        form.toggle_genre(&path.genre)
    })
    .await?;

    Ok(Json(comic))
}

/// Loads the comic into its edit form, applies `edit`, validates and stores
/// the result in place.
async fn edit_comic<F>(app_state: &SharedAppState, id: &str, edit: F) -> Result<Comic, Error>
where
    F: FnOnce(&mut UploadForm),
{
    let existing = app_state
        .catalog
        .find(id)
        .await
        .ok_or(CatalogError::NotFound)?;

    let mut form = UploadForm::from_comic(&existing);
    edit(&mut form);
    form.validate().map_err(Error::Validation)?;

    let comic = form.into_comic(Some(&existing));
    if !app_state.catalog.update(comic.clone()).await {
        return Err(CatalogError::NotFound.into());
    }

    Ok(comic)
}

#[tracing::instrument(name = "[DELETE] admin/comics/{id}", skip_all, fields(path.id = %path.id))]
pub async fn destroy(
    State(app_state): State<SharedAppState>,
    Path(path): Path<UrlPath>,
    Query(query): Query<DeleteQuery>,
) -> Result<StatusCode, Error> {
    if !query.confirm {
        return Err(CatalogError::ConfirmationRequired.into());
    }

    let removed = app_state.catalog.delete(&path.id).await;
    tracing::info!(removed, "Comic deleted");

    Ok(StatusCode::NO_CONTENT)
}
