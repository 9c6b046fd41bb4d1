use crate::handlers::auth_handler::AppState;
use crate::models::AccessDecision;
use crate::services::authorizer_service;
use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

/// Authorization check request, mirroring the gateway event shape.
#[derive(Debug, Deserialize)]
pub struct AuthorizeRequest {
    /// Raw `Authorization` header value of the request being authorized.
    #[serde(rename = "authorizationToken")]
    pub authorization_token: Option<String>,

    /// Resource identifier of the request being authorized.
    #[serde(rename = "methodArn")]
    pub method_arn: String,
}

/// Handle an authorization check from the gateway layer
///
/// POST /api/v1/authorize
///
/// Always responds 200: a rejected credential is a Deny decision in the
/// body, not an HTTP error.
pub async fn handle_authorize(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AuthorizeRequest>,
) -> Json<AccessDecision> {
    let decision = authorizer_service::authorize(
        state.config.signing_key_bytes(),
        payload.authorization_token.as_deref(),
        &payload.method_arn,
    );

    Json(decision)
}
