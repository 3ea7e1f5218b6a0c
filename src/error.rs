use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("Invalid vector dimension: {0} (must be at least 1)")]
    InvalidDimension(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Qdrant returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type VectorResult<T> = Result<T, VectorError>;
