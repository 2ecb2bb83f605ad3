//! API request handlers

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use tracing::info;

use crate::api::types::*;
use crate::models::AnalysisResult;
use crate::nlp::preprocess::is_blank;
use crate::SentimentAnalyzer;

/// Returned for a missing, blank or unparsable request body
pub const NO_TEXT_PROVIDED: &str = "No text provided";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<SentimentAnalyzer>,
}

type ApiResult<T> = (StatusCode, Json<ApiResponse<T>>);

fn bad_request<T>(message: &str) -> ApiResult<T> {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::error(message)))
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        toolkit: state.analyzer.toolkit_name().to_string(),
        categories: state.analyzer.lexicon().len(),
    }))
}

/// Analyze one text
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<AnalysisResult> {
    let text = match payload {
        Ok(Json(AnalyzeRequest { text: Some(text) })) if !is_blank(&text) => text,
        Ok(_) => return bad_request(NO_TEXT_PROVIDED),
        Err(rejection) => {
            info!("Rejected analyze request: {}", rejection.body_text());
            return bad_request(NO_TEXT_PROVIDED);
        }
    };

    info!("POST /api/analyze ({} chars)", text.chars().count());

    // Scoring is CPU-bound; keep it off the async workers
    let analyzer = state.analyzer.clone();
    match tokio::task::spawn_blocking(move || analyzer.analyze(&text)).await {
        Ok(result) => (StatusCode::OK, Json(ApiResponse::success(result))),
        Err(e) => {
            error!("Analysis task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Analysis failed")),
            )
        }
    }
}

/// Analyze several texts; results keep request order
pub async fn analyze_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchAnalyzeRequest>, JsonRejection>,
) -> ApiResult<Vec<AnalysisResult>> {
    let texts = match payload {
        Ok(Json(request)) if request.texts.iter().any(|t| !is_blank(t)) => request.texts,
        Ok(_) => return bad_request(NO_TEXT_PROVIDED),
        Err(rejection) => {
            info!("Rejected batch request: {}", rejection.body_text());
            return bad_request(NO_TEXT_PROVIDED);
        }
    };

    info!("POST /api/analyze/batch ({} texts)", texts.len());

    let analyzer = state.analyzer.clone();
    match tokio::task::spawn_blocking(move || analyzer.analyze_batch(&texts)).await {
        Ok(results) => (StatusCode::OK, Json(ApiResponse::success(results))),
        Err(e) => {
            error!("Batch analysis task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Analysis failed")),
            )
        }
    }
}

/// List registered emotion categories
pub async fn list_emotions(State(state): State<AppState>) -> Json<ApiResponse<Vec<EmotionInfo>>> {
    let lexicon = state.analyzer.lexicon();
    let emotions = lexicon
        .categories()
        .iter()
        .map(|category| EmotionInfo {
            key: category.key.clone(),
            symbol: category.symbol.clone(),
            description: category.description.clone(),
            trigger_count: category.triggers.len(),
            opposite: lexicon.opposite_key(&category.key).map(str::to_string),
        })
        .collect();
    Json(ApiResponse::success(emotions))
}
