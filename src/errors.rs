//! Error types for gqldocs

use thiserror::Error;

/// Main error type for gqldocs
#[derive(Error, Debug)]
pub enum GqldocsError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP {0} - Server returned error response")]
    Status(u16),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Schema error: {0}")]
    Schema(String),
}

pub type Result<T> = std::result::Result<T, GqldocsError>;
