use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::planner::error::{PlannerError, PlannerErrorBody};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request body could not be decoded (malformed JSON, non-numeric field).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request decoded but describes an unusable topology or parameter set.
    #[error(transparent)]
    Planner(#[from] PlannerError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "error": { "code": "NOT_FOUND", "message": msg } }),
            ),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": { "code": "VALIDATION_ERROR", "message": msg } }),
            ),
            AppError::Planner(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": PlannerErrorBody::from(err) }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_planner_error_is_unprocessable() {
        let err = AppError::from(PlannerError::DisconnectedPath {
            from: "B".to_string(),
            to: "C".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "DISCONNECTED_PATH");
        assert_eq!(body["error"]["details"]["from"], "B");
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request() {
        let response = AppError::Validation("bad json".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "bad json");
    }
}
