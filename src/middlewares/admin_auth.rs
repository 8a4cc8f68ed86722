use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{
    auth::{Claim, decode_jwt, error::AuthError},
    error::Error,
    state::SharedAppState,
};

/// Verified admin session, inserted into the request extensions.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub claim: Claim,
}

#[tracing::instrument(name = "[MIDDLEWARE] admin auth", skip_all)]
pub async fn admin_auth_middleware(
    State(app_state): State<SharedAppState>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, Error> {
    let auth_header = match req.headers().get(axum::http::header::AUTHORIZATION) {
        Some(header) => header
            .to_str()
            .map_err(|_| Error::Auth(AuthError::Unauthenticated))?,
        None => {
            return Err(Error::Auth(AuthError::Unauthenticated));
        }
    };

    let mut header = auth_header.split_whitespace();
    let (bearer_option, token_option) = (header.next(), header.next());

    let bearer = match bearer_option {
        Some(value) => value.to_lowercase(),
        None => {
            return Err(Error::Auth(AuthError::Unauthenticated));
        }
    };

    if bearer != *"bearer" {
        return Err(Error::Auth(AuthError::Unauthenticated));
    }

    let token = match token_option {
        Some(value) => value,
        None => {
            return Err(Error::Auth(AuthError::Unauthenticated));
        }
    };

    let token_data = decode_jwt(token, &app_state.config.jwt)
        .map_err(|_| Error::Auth(AuthError::Unauthenticated))?;

    if app_state.sessions.is_revoked(&token_data.claims.jti).await {
        return Err(Error::Auth(AuthError::Revoked));
    }

    req.extensions_mut().insert(Arc::new(AdminSession {
        claim: token_data.claims,
    }));

    Ok(next.run(req).await)
}
