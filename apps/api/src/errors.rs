use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::editor::EditError;
use crate::notifications::{Notice, Severity, DEFAULT_DURATION_MS, LONG_DURATION_MS};
use crate::persistence::transfer::TransferError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Edit error: {0}")]
    Edit(#[from] EditError),

    #[error("Failed to import resume: {0}")]
    Import(TransferError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Edit(e) => (StatusCode::NOT_FOUND, "ENTRY_NOT_FOUND", e.to_string()),
            AppError::Import(e) => {
                tracing::warn!("Import rejected: {e}");
                (StatusCode::BAD_REQUEST, "IMPORT_ERROR", self.to_string())
            }
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {msg}");
                (StatusCode::SERVICE_UNAVAILABLE, "STORAGE_ERROR", msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        // Every failure doubles as a toast for the UI; import reasons stay up longer.
        let (severity, duration_ms) = match &self {
            AppError::Validation(_) => (Severity::Warning, DEFAULT_DURATION_MS),
            AppError::Import(_) => (Severity::Error, LONG_DURATION_MS),
            _ => (Severity::Error, DEFAULT_DURATION_MS),
        };
        let notice = Notice::new(message.clone(), severity, duration_ms);

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            },
            "notice": notice
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_import_error_carries_reason_and_long_notice() {
        let (status, body) = body_json(AppError::Import(TransferError::InvalidJson)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "IMPORT_ERROR");
        assert_eq!(
            body["error"]["message"],
            "Failed to import resume: Invalid JSON file"
        );
        assert_eq!(body["notice"]["severity"], "error");
        assert_eq!(body["notice"]["duration_ms"], 5000);
    }

    #[tokio::test]
    async fn test_validation_error_is_a_warning_notice() {
        let (status, body) =
            body_json(AppError::Validation("Please enter a template name".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["notice"]["severity"], "warning");
        assert_eq!(body["notice"]["message"], "Please enter a template name");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let (status, body) = body_json(AppError::Internal(anyhow::anyhow!("secret"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "An internal server error occurred");
    }
}
