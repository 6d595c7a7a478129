use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use blendair_completion::CompletionError;
use blendair_core::error::CoreError;
use blendair_store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce short plain-text error bodies.
/// Upstream failure details are logged, never returned to the caller.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `blendair_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The completion provider call failed.
    #[error("Completion provider error: {0}")]
    Completion(#[from] CompletionError),

    /// The job store insert failed.
    #[error("Job store error: {0}")]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Core(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg),
            AppError::Core(CoreError::Configuration(msg)) => {
                tracing::error!(error = %msg, "Server misconfigured");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Completion(err) => {
                tracing::error!(error = %err, "Completion provider request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Completion provider request failed".to_string(),
                )
            }
            AppError::Store(err) => {
                tracing::error!(error = %err, "Job store request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Job store request failed".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, message).into_response()
    }
}
