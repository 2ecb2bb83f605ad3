//! API route definitions

use axum::routing::get;
use axum::routing::post;
use axum::Router;

use super::handlers;
use super::handlers::AppState;

/// Create RESTful API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Analysis endpoints
        .route("/analyze", post(handlers::analyze))
        .route("/analyze/batch", post(handlers::analyze_batch))
        // Lexicon
        .route("/emotions", get(handlers::list_emotions))
        .with_state(state)
}
