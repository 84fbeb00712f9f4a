use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum QuakeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response status: {0}")]
    Status(u16),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Feed parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid earthquake record: {0}")]
    InvalidRecord(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, QuakeError>;
