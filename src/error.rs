use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use validator::ValidationErrors;

use crate::{auth::error::AuthError, catalog::error::CatalogError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Catalog error")]
    Catalog(CatalogError),

    #[error("Auth error")]
    Auth(AuthError),

    #[error("Validation error")]
    Validation(ValidationErrors),

    #[error("Other error: {0}")]
    Other(anyhow::Error),
}

impl From<CatalogError> for Error {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<AuthError> for Error {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            Error::Catalog(catalog_error) => match catalog_error {
                CatalogError::NotFound | CatalogError::ChapterNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": catalog_error.to_string() })),
                )
                    .into_response(),
                CatalogError::ConfirmationRequired => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": catalog_error.to_string() })),
                )
                    .into_response(),
            },
            Error::Auth(auth_error) => match auth_error {
                AuthError::JwtError(error) => {
                    tracing::error!(err.msg = %error, err.details=?error, "JWT Error");

                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
                AuthError::PasswordError(error) => {
                    tracing::error!(err.msg = %error, err.details=?error, "Password Hash Error");

                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
                AuthError::Unauthenticated | AuthError::Revoked => {
                    StatusCode::UNAUTHORIZED.into_response()
                }
                AuthError::IncorrectCredential => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": auth_error.to_string() })),
                )
                    .into_response(),
            },
            Error::Other(error) => {
                tracing::error!(err.msg = %error, err.details=?error, "Other Error");

                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            Error::Validation(validation_error) => {
                tracing::warn!(err.msg = %validation_error, "Validation Error");

                (StatusCode::BAD_REQUEST, Json(validation_error)).into_response()
            }
        }
    }
}
