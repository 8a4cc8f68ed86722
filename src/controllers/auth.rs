use std::sync::Arc;

use anyhow::Context;
use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{AdminGate, GateState, LoginForm, encode_jwt, verify_password_hash},
    error::Error,
    middlewares::AdminSession,
    state::SharedAppState,
    telemetry::spawn_blocking_with_tracing,
};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub state: GateState,
    pub expires_at: usize,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub state: GateState,
    pub expires_at: usize,
}

#[tracing::instrument(name = "[POST] auth", skip_all)]
pub async fn store(
    State(app_state): State<SharedAppState>,
    Json(mut form): Json<LoginForm>,
) -> Result<Json<AuthResponse>, Error> {
    let password_hash = app_state.admin_password_hash.clone();

    let gate = spawn_blocking_with_tracing(move || {
        let mut gate = AdminGate::default();
        gate.submit(&mut form, |candidate| {
            verify_password_hash(&password_hash, candidate).is_ok()
        })
        .map(|_| gate)
    })
    .await
    .context("verify admin password")
    .map_err(Error::Other)??;

    let (token, claim) = encode_jwt(&app_state.config.jwt)?;
    tracing::info!(session = %claim.jti, "Admin session opened");

    Ok(Json(AuthResponse {
        token,
        state: gate.state(),
        expires_at: claim.exp,
    }))
}

#[tracing::instrument(name = "[GET] auth/session", skip_all)]
pub async fn show(Extension(session): Extension<Arc<AdminSession>>) -> Json<SessionResponse> {
    let gate = AdminGate::signed_in();

    Json(SessionResponse {
        state: gate.state(),
        expires_at: session.claim.exp,
    })
}

#[tracing::instrument(name = "[POST] auth/logout", skip_all)]
pub async fn destroy(
    State(app_state): State<SharedAppState>,
    Extension(session): Extension<Arc<AdminSession>>,
) -> Json<SessionResponse> {
    let mut gate = AdminGate::signed_in();

    app_state.sessions.revoke(&session.claim).await;
    gate.logout();
    tracing::info!(session = %session.claim.jti, "Admin session closed");

    Json(SessionResponse {
        state: gate.state(),
        expires_at: session.claim.exp,
    })
}
