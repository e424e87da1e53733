use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error body for rejected requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Standard API success response
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    pub data: T,
    pub timestamp: DateTime<Utc>,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            timestamp: Utc::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// `GET /api/analyze` query string
#[derive(Debug, Default)]
pub struct AnalyzeQuery {
    pub query: Option<String>,
}

impl AnalyzeQuery {
    /// The first `query` value wins when the parameter is repeated
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            query: pairs
                .into_iter()
                .find(|(key, _)| key == "query")
                .map(|(_, value)| value),
        }
    }
}
