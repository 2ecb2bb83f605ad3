//! HTTP server implementation

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::Result;
use crate::SentimentAnalyzer;

/// Largest accepted request body
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;
/// Requests handled at once; analysis is CPU-bound
const MAX_CONCURRENT_REQUESTS: usize = 64;

/// Build the application router (`/api/...`) with its middleware layers
pub fn build_router(analyzer: Arc<SentimentAnalyzer>, enable_cors: bool) -> Router {
    let state = AppState { analyzer };

    let mut app = Router::new()
        .nest("/api", routes::api_routes(state))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    if enable_cors {
        info!("✅ CORS enabled");
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Start the API server
pub async fn serve_api(
    analyzer: Arc<SentimentAnalyzer>,
    host: String,
    port: u16,
    enable_cors: bool,
) -> Result<()> {
    info!("🚀 Starting Emotiscope API server...");

    let app = build_router(analyzer, enable_cors);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 API server listening on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET  /api/health         - Health check");
    info!("  POST /api/analyze        - Analyze one text");
    info!("  POST /api/analyze/batch  - Analyze several texts");
    info!("  GET  /api/emotions       - List emotion categories");

    axum::serve(listener, app).await?;

    Ok(())
}
