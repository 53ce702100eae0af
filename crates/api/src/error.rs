use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use contact_core::error::CoreError;
use contact_db::StoreError;
use serde_json::json;

/// Detail returned when an accepted submission cannot be persisted.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save contact information.";

/// Application-level error type for HTTP handlers.
///
/// Field-level validation failures are not errors: they are rendered back
/// into the form. This type covers what aborts a request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `contact_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The submission store failed while saving.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                msg.clone(),
            ),
            AppError::Store(err) => {
                tracing::error!(error = %err, "Failed to save contact submission");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    SAVE_FAILED_MESSAGE.to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
