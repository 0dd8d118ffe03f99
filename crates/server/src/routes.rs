use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::{Health, SaveAck};
use service::{library::LibraryStore, performance::PerformanceStore};

use crate::errors::ApiError;

/// Shared handler state: one file-backed accessor per on-disk document.
#[derive(Clone)]
pub struct ServerState {
    pub library: Arc<LibraryStore>,
    pub performance: Arc<PerformanceStore>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn get_library(State(state): State<ServerState>) -> Result<Json<Value>, ApiError> {
    let doc = state.library.get().await?;
    Ok(Json(doc))
}

async fn get_user_performance(State(state): State<ServerState>) -> Result<Json<Value>, ApiError> {
    let doc = state.performance.get().await?;
    Ok(Json(doc))
}

async fn save_user_performance(
    State(state): State<ServerState>,
    Json(new_state): Json<Value>,
) -> Result<Json<SaveAck>, ApiError> {
    state.performance.put(&new_state).await?;
    Ok(Json(SaveAck { status: "success", message: "Performance saved" }))
}

/// Build the full application router: health plus the two document APIs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/library", get(get_library))
        .route(
            "/api/user-performance",
            get(get_user_performance).post(save_user_performance),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
