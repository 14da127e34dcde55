//! Orderbook API error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication rejected (check the bearer token)")]
    Auth,

    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("response decoding failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid pagination: {what} must be positive")]
    Pagination { what: &'static str },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
