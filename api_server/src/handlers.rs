use crate::types::*;
use crate::{ApiError, AppState};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use smre_core::AnalysisResult;
use tracing::{error, info};

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(SuccessResponse::new(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    }))
}

/// Analyze a token symbol/name/address or a wallet address.
///
/// Every outcome other than a missing query is a 200, including upstream
/// outages and failures inside the analysis itself.
pub async fn analyze(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let query = AnalyzeQuery::from_pairs(pairs)
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Query parameter is required".to_string()))?;

    info!("📊 Analysis requested for '{}'", query);

    let orchestrator = state.orchestrator.clone();
    let task = tokio::spawn(async move { orchestrator.analyze(&query).await });

    let result = match task.await {
        Ok(result) => result,
        Err(e) => {
            error!("❌ Analysis task failed: {}", e);
            AnalysisResult::system_failure()
        }
    };

    Ok(Json(result))
}
