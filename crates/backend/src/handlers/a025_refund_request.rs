use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use contracts::domain::a025_refund_request::board::RefundBoard;
use contracts::domain::a025_refund_request::dto::{
    ClassifyRequest, ClassifyResponse, RefundActionDto, RefundBoardRequest, RefundTabDto,
};
use contracts::shared::status_registry::StatusTableDto;

use crate::domain::a025_refund_request::error::BoardError;
use crate::domain::a025_refund_request::service;
use crate::routes::AppState;

/// POST /api/refund_requests/board
pub async fn board(
    State(state): State<AppState>,
    payload: Result<Json<RefundBoardRequest>, JsonRejection>,
) -> Result<Json<RefundBoard>, BoardError> {
    let Json(request) = payload.map_err(|e| BoardError::InvalidPayload(e.body_text()))?;
    service::build_board(request, &state.config.board, Utc::now()).map(Json)
}

/// POST /api/refund_requests/classify
pub async fn classify(
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, BoardError> {
    let Json(request) = payload.map_err(|e| BoardError::InvalidPayload(e.body_text()))?;
    Ok(Json(service::classify_ids(&request.records)))
}

/// GET /api/refund_requests/statuses
pub async fn statuses() -> Json<Vec<StatusTableDto>> {
    Json(service::status_tables())
}

/// GET /api/refund_requests/tabs
pub async fn tabs() -> Json<Vec<RefundTabDto>> {
    Json(service::tabs())
}

/// GET /api/refund_requests/actions
pub async fn actions() -> Json<Vec<RefundActionDto>> {
    Json(service::action_labels())
}
