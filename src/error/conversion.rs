/**
 * Error Conversion Implementations
 *
 * Converts `AuthError` into HTTP responses and adapts storage errors into
 * the taxonomy. Every error response has the same JSON shape the rest of
 * the API uses: `{"success": false, "message": "..."}`.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::error::types::AuthError;

/// JSON body for every error response.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        // Infrastructure faults carry detail that must not reach the
        // client; log it here, at the single point where it is dropped.
        match &self {
            AuthError::Storage(source) => {
                tracing::error!("storage error: {source:?}");
            }
            AuthError::Internal(detail) => {
                tracing::error!("internal error: {detail}");
            }
            _ => {}
        }

        let body = ErrorBody {
            success: false,
            message: self.to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_response_status() {
        let response = AuthError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = AuthError::DuplicateEmail.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_from_sqlx_error() {
        let err: AuthError = sqlx::Error::RowNotFound.into();
        match err {
            AuthError::Storage(_) => {}
            other => panic!("expected Storage, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = AuthError::validation("Password must be at least 8 characters long")
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(
            value["message"],
            "Password must be at least 8 characters long"
        );
    }
}
