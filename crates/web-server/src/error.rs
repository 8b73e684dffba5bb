use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Planner error: {0}")]
    Planner(#[from] planner::PlannerError),
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] snapshot::SnapshotError),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Validation failures (bad side token, unparsable or out-of-range
/// quantity) map to 400; a snapshot that cannot be loaded is a server-side
/// problem and maps to 500 without leaking the underlying path details.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Planner(planner_err) => {
                (StatusCode::BAD_REQUEST, planner_err.to_string())
            }
            AppError::Snapshot(snapshot_err) => {
                tracing::error!(error = ?snapshot_err, "Failed to load exchange snapshots.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to load exchange snapshots".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
