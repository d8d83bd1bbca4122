//! HTTP API for match analysis
//!
//! Endpoints:
//! - GET  /health        - Health check
//! - POST /analyze       - Analyze ball-by-ball commentary
//! - GET  /analysis/:id  - Fetch a cached report

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::core::engine::MatchAnalyzer;
use crate::core::store::AnalysisStore;
use crate::error::ApiError;
use crate::types::{BallEvent, MatchContext, MatchReport};

/// Shared application state: one analyzer, one bounded report store
pub struct AppState {
    pub analyzer: MatchAnalyzer,
    pub store: RwLock<AnalysisStore>,
}

/// Analyze request body
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Cache key; a content fingerprint is derived when absent
    pub match_id: Option<String>,
    pub match_info: Option<MatchContext>,
    pub commentary: Vec<BallEvent>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub cached_reports: usize,
}

/// Create the API router
pub fn create_router(analyzer: MatchAnalyzer, store: AnalysisStore) -> Router {
    let state = Arc::new(AppState {
        analyzer,
        store: RwLock::new(store),
    });

    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/analysis/:id", get(get_analysis))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let store = state.store.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        cached_reports: store.len(),
    })
}

/// Analyze commentary, caching the report under the match id
async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<MatchReport>, ApiError> {
    if req.commentary.is_empty() {
        return Err(ApiError::BadRequest("no commentary provided".to_string()));
    }

    let key = req
        .match_id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| AnalysisStore::fingerprint(&req.commentary));

    {
        let mut store = state.store.write().await;
        if let Some(report) = store.get(&key) {
            tracing::debug!(match_id = %key, "serving cached analysis");
            return Ok(Json(report));
        }
    }

    let context = req.match_info.unwrap_or_else(|| MatchContext {
        match_id: key.clone(),
        total_balls: req.commentary.len(),
        ..Default::default()
    });

    let report = state.analyzer.analyze(&req.commentary, &context)?;
    tracing::info!(
        match_id = %key,
        balls = report.summary.total_balls,
        "analysis complete"
    );

    state.store.write().await.insert(key, report.clone());
    Ok(Json(report))
}

/// Fetch a previously cached report
async fn get_analysis(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MatchReport>, ApiError> {
    let mut store = state.store.write().await;
    store
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no analysis cached for match '{}'", id)))
}

/// Run the API server
pub async fn run_server(
    addr: &str,
    analyzer: MatchAnalyzer,
    store: AnalysisStore,
) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(analyzer, store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Athena API running on {}", addr);
    println!("  GET  /health        - Health check");
    println!("  POST /analyze       - Analyze commentary");
    println!("  GET  /analysis/:id  - Cached report");
    axum::serve(listener, router).await?;
    Ok(())
}
