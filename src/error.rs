use thiserror::Error;

/// Main error type for the aggregator
#[derive(Error, Debug)]
pub enum FreeGamesError {
    /// Region code missing on the top-level call (checked before any I/O)
    #[error("Region is required")]
    MissingRegion,

    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Upstream endpoint answered with a non-success status
    #[error("Upstream returned HTTP {status} for {url}")]
    Upstream { status: u16, url: String },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider errors
    #[error("Provider '{provider}' error: {message}")]
    Provider { provider: String, message: String },

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for FreeGamesError {
    fn from(s: String) -> Self {
        FreeGamesError::Other(s)
    }
}

impl From<&str> for FreeGamesError {
    fn from(s: &str) -> Self {
        FreeGamesError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FreeGamesError>;
