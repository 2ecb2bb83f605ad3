//! API request and response types

use serde::Deserialize;
use serde::Serialize;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub toolkit: String,
    pub categories: usize,
}

/// Single-text analysis request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Batch analysis request
#[derive(Debug, Deserialize)]
pub struct BatchAnalyzeRequest {
    #[serde(default)]
    pub texts: Vec<String>,
}

/// One registered emotion category
#[derive(Debug, Serialize)]
pub struct EmotionInfo {
    pub key: String,
    pub symbol: String,
    pub description: String,
    pub trigger_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opposite: Option<String>,
}
