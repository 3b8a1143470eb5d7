use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// Build the axum router with all portal endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::index_handler))
        .route("/api/health", get(handler::health_handler))
        .route("/api/compress", post(handler::compress_handler))
        .route("/api/decompress", post(handler::decompress_handler))
        .route("/api/download", get(handler::download_handler))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
