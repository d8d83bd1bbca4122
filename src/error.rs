//! Error types for the analysis core and the HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the analysis core
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Whole-call failure: nothing to analyze
    #[error("no ball events to analyze")]
    EmptyMatch,

    /// Input could not be turned into ball events
    #[error("invalid match input: {0}")]
    InvalidInput(String),
}

/// Structured error body returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable message
    pub message: String,
}

/// Application error for HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Analysis(AnalysisError::EmptyMatch) => {
                (StatusCode::BAD_REQUEST, "EMPTY_MATCH")
            }
            ApiError::Analysis(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
        };

        let body = ApiErrorBody {
            code: code.to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// =============================================================================
// TESTS
// =============================================================================
