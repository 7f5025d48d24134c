use thiserror::Error;

/// Failure reason carried by the typed entry points.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("data source request failed: {0}")]
    Transport(String),

    #[error("data source returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("data source payload did not match the expected schema: {0}")]
    Decode(String),

    #[error("data source returned no payload")]
    EmptyPayload,

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AnalyticsError {
    /// Label used in logs and metrics.
    pub fn category(&self) -> &'static str {
        match self {
            AnalyticsError::EmptyPayload => "empty_payload",
            AnalyticsError::Config(_) => "config",
            AnalyticsError::Transport(_)
            | AnalyticsError::Status { .. }
            | AnalyticsError::Decode(_) => "fetch_failed",
        }
    }
}

impl From<reqwest::Error> for AnalyticsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AnalyticsError::Decode(err.to_string())
        } else {
            AnalyticsError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        AnalyticsError::Decode(err.to_string())
    }
}

impl From<config::ConfigError> for AnalyticsError {
    fn from(err: config::ConfigError) -> Self {
        AnalyticsError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AnalyticsError {
    fn from(err: validator::ValidationErrors) -> Self {
        AnalyticsError::Config(err.to_string())
    }
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
