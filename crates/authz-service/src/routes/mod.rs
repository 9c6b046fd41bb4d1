use crate::handlers::auth_handler::{self, AppState};
use crate::handlers::{authorizer_handler, hello_handler, users_handler};
use crate::middleware::auth;
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_routes(state: Arc<AppState>) -> Router {
    // Resource routes sit behind the decision engine; a Deny never
    // reaches a handler.
    let protected = Router::new()
        .route("/api/v1/hello", get(hello_handler::handle_hello))
        .route(
            "/api/v1/admin/users",
            get(users_handler::list_users).post(users_handler::create_user),
        )
        .route(
            "/api/v1/admin/users/:user_id",
            get(users_handler::get_user)
                .put(users_handler::replace_user)
                .patch(users_handler::patch_user)
                .delete(users_handler::delete_user),
        )
        .route_layer(from_fn_with_state(
            state.clone(),
            auth::require_authorization,
        ));

    Router::new()
        // Token issuance
        .route("/api/v1/auth/token", post(auth_handler::handle_token))
        // Authorization check boundary for an external gateway layer
        .route(
            "/api/v1/authorize",
            post(authorizer_handler::handle_authorize),
        )
        // Health check
        .route("/health", get(health_check))
        .merge(protected)
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
