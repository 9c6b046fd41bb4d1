use crate::errors::AuthzError;
use crate::handlers::auth_handler::AppState;
use crate::services::authorizer_service;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::IntoResponse,
};
use std::sync::Arc;

/// Authorization middleware guarding all resource routes.
///
/// Rebuilds the requested-resource identifier from the configured gateway
/// identity plus the request's verb and path, runs the decision engine,
/// and short-circuits with 401 on Deny before any resource handler
/// executes.
/// On Allow the claim context is attached to the request extensions for
/// handlers to consume.
pub async fn require_authorization(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, AuthzError> {
    let method_arn = state
        .config
        .gateway
        .method_arn(req.method().as_str(), req.uri().path());

    let token_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let decision =
        authorizer_service::authorize(state.config.signing_key_bytes(), token_header, &method_arn);

    // A Deny decision carries no context; the response is uniform no
    // matter which step failed.
    let Some(context) = decision.context else {
        return Err(AuthzError::Unauthorized);
    };

    req.extensions_mut().insert(context);

    Ok(next.run(req).await)
}
