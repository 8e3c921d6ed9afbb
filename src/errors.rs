//! Dashboard error types

use thiserror::Error;

/// Errors that can occur while fetching, rendering or serving the dashboard
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type for dashboard operations
pub type DashboardResult<T> = std::result::Result<T, DashboardError>;
