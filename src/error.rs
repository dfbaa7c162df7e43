use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{provider} API error: {status}")]
    Provider {
        provider: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("{0}")]
    InvalidInput(String),
}

impl AppError {
    /// The line shown to the person running the lookup.
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(_) => "Could not connect. Check your internet and API keys.".to_string(),
            Self::Provider { provider, status }
                if *status == reqwest::StatusCode::UNAUTHORIZED
                    || *status == reqwest::StatusCode::FORBIDDEN =>
            {
                format!("{} rejected the API key. Check your configuration.", provider)
            }
            other => other.to_string(),
        }
    }
}
