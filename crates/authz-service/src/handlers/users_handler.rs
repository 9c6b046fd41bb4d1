//! Admin user CRUD handlers.
//!
//! Storage-free echo endpoints: they exercise the verb table and the
//! forwarded claim context without a backing user store. Each handler
//! returns the reference system's dummy payloads.

use crate::models::{AuthContext, UserStatus, UserSummary};
use axum::{extract::Path, http::StatusCode, Extension, Json};
use uuid::Uuid;

/// GET /api/v1/admin/users
pub async fn list_users(Extension(context): Extension<AuthContext>) -> Json<Vec<UserSummary>> {
    tracing::debug!(target: "users", role = %context.role, "Listing users");

    let users = vec![
        UserSummary {
            user_id: "user-001".to_string(),
            name: "Taro Yamada".to_string(),
        },
        UserSummary {
            user_id: "user-002".to_string(),
            name: "Hanako Suzuki".to_string(),
        },
    ];

    tracing::debug!(target: "users", count = users.len(), "Retrieved users");

    Json(users)
}

/// GET /api/v1/admin/users/{user_id}
pub async fn get_user(
    Path(user_id): Path<String>,
    Extension(_context): Extension<AuthContext>,
) -> Json<UserSummary> {
    Json(UserSummary {
        user_id,
        name: "Taro Yamada".to_string(),
    })
}

/// POST /api/v1/admin/users
pub async fn create_user(
    Extension(_context): Extension<AuthContext>,
) -> (StatusCode, Json<UserStatus>) {
    let created = UserStatus {
        user_id: format!("user-{}", Uuid::new_v4()),
        status: "created".to_string(),
    };

    (StatusCode::CREATED, Json(created))
}

/// PUT /api/v1/admin/users/{user_id}
pub async fn replace_user(
    Path(user_id): Path<String>,
    Extension(_context): Extension<AuthContext>,
) -> Json<UserStatus> {
    Json(UserStatus {
        user_id,
        status: "updated".to_string(),
    })
}

/// PATCH /api/v1/admin/users/{user_id}
pub async fn patch_user(
    Path(user_id): Path<String>,
    Extension(_context): Extension<AuthContext>,
) -> Json<UserStatus> {
    Json(UserStatus {
        user_id,
        status: "patched".to_string(),
    })
}

/// DELETE /api/v1/admin/users/{user_id}
pub async fn delete_user(
    Path(_user_id): Path<String>,
    Extension(_context): Extension<AuthContext>,
) -> StatusCode {
    StatusCode::NO_CONTENT
}
