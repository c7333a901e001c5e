//! Error types for the catalog API client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API returned status {status} for {url}")]
    StatusError { status: u16, url: String },
}

pub type ApiResult<T> = Result<T, ApiError>;
