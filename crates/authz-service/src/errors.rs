use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Service-level error type.
///
/// Only issuance and gateway-boundary failures surface here. The decision
/// engine itself is infallible by type: every verification or parse
/// failure inside it resolves to a Deny decision before reaching a
/// handler.
#[derive(Debug, Error)]
pub enum AuthzError {
    /// Bad or unknown credentials at issuance time. The message never
    /// reveals whether the username or the password was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Request denied by the decision engine. Uniform regardless of the
    /// underlying verification failure.
    #[error("Access denied")]
    Unauthorized,

    #[error("Cryptographic error: {0}")]
    Crypto(String),

    #[error("Internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

impl IntoResponse for AuthzError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AuthzError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid credentials".to_string(),
            ),
            AuthzError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Access denied".to_string(),
            ),
            AuthzError::Crypto(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CRYPTO_ERROR",
                "An internal cryptographic error occurred".to_string(),
            ),
            AuthzError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn response_parts(err: AuthzError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_invalid_credentials_is_401_without_detail() {
        let (status, body) = response_parts(AuthzError::InvalidCredentials).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
        // The body must not say which factor failed.
        let message = body["error"]["message"].as_str().unwrap();
        assert!(!message.to_lowercase().contains("username"));
        assert!(!message.to_lowercase().contains("password"));
    }

    #[tokio::test]
    async fn test_unauthorized_is_401() {
        let (status, body) = response_parts(AuthzError::Unauthorized).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_crypto_error_hides_detail() {
        let (status, body) = response_parts(AuthzError::Crypto("hmac key error".into())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"]["message"].as_str().unwrap();
        assert!(!message.contains("hmac key error"));
    }
}
