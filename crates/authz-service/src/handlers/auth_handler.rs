use crate::config::Config;
use crate::errors::AuthzError;
use crate::models::TokenResponse;
use crate::repositories::users::UserDirectory;
use crate::services::token_service;
use axum::{extract::State, Json};
use common::secret::SecretString;
use serde::Deserialize;
use std::sync::Arc;

/// Token issuance request payload.
///
/// The password deserializes straight into a `SecretString` so it cannot
/// leak through Debug output anywhere downstream.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: SecretString,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub directory: Arc<dyn UserDirectory>,
}

/// Handle token issuance
///
/// POST /api/v1/auth/token
pub async fn handle_token(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, AuthzError> {
    let token = token_service::issue_user_token(
        state.directory.as_ref(),
        &state.config,
        &payload.username,
        &payload.password,
    )?;

    Ok(Json(token))
}
