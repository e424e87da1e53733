use thiserror::Error;

#[derive(Error, Debug)]
pub enum NarratorError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Model returned no text")]
    EmptyResponse,
}
