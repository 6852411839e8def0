//! Error responses.
//!
//! Not-found errors keep the ledger's historical `0` placeholder body; every
//! other error is rendered as `{"error", "message"}` JSON.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ledgerly_core::ledger::LedgerError;
use ledgerly_shared::AppError;
use serde_json::json;
use tracing::{error, warn};

/// Error returned by handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected event body");
        Self(AppError::Validation("Invalid event body".into()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected query string");
        Self(AppError::Validation("Missing or invalid account_id".into()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.0 {
            AppError::NotFound(_) => (status, Json(0)).into_response(),
            AppError::Internal(ref message) => {
                error!(error = %message, "Internal error");
                (
                    status,
                    Json(json!({
                        "error": self.0.error_code(),
                        "message": "An error occurred"
                    })),
                )
                    .into_response()
            }
            AppError::Validation(_) => (
                status,
                Json(json!({
                    "error": self.0.error_code(),
                    "message": self.0.to_string()
                })),
            )
                .into_response(),
        }
    }
}
