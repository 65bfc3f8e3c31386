use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Ошибки запроса к экрану возвратов. Сами правила классификации не падают,
/// ошибки возможны только при разборе параметров запроса.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid request body: {0}")]
    InvalidPayload(String),

    #[error("unknown role: '{0}' (expected customer, seller or admin)")]
    UnknownRole(String),

    #[error("unknown tab: '{0}' (expected all, new, to-process, disputes or completed)")]
    UnknownTab(String),

    #[error("unknown sort key: '{0}' (expected date, amount or deadline)")]
    UnknownSortKey(String),

    #[error("unknown sort direction: '{0}' (expected asc or desc)")]
    UnknownSortDir(String),
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected refund request: {}", self);
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
