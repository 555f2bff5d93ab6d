//! Transcript API error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transcript API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to parse transcript response: {0}")]
    Json(#[from] serde_json::Error),
}
