use crate::models::AuthContext;
use axum::Extension;

/// Protected greeting endpoint
///
/// GET /api/v1/hello
///
/// Echoes the claim context the authorization middleware attached, which
/// makes it a convenient end-to-end check that verification and context
/// forwarding work.
pub async fn handle_hello(Extension(context): Extension<AuthContext>) -> String {
    format!(
        "Hello user {} from organization {}! Your role is {}.",
        context.principal_id, context.organization_id, context.role
    )
}
