use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::config::Config;

/// Общее состояние обработчиков (только чтение)
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A025 Refund requests
        // ========================================
        .route(
            "/api/refund_requests/board",
            post(handlers::a025_refund_request::board),
        )
        .route(
            "/api/refund_requests/classify",
            post(handlers::a025_refund_request::classify),
        )
        .route(
            "/api/refund_requests/statuses",
            get(handlers::a025_refund_request::statuses),
        )
        .route(
            "/api/refund_requests/tabs",
            get(handlers::a025_refund_request::tabs),
        )
        .route(
            "/api/refund_requests/actions",
            get(handlers::a025_refund_request::actions),
        )
        .with_state(state)
}
