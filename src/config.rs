use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::cli::CliArgs;
use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AppConfig {
    #[validate(nested)]
    pub omdb: OmdbConfig,
    #[serde(default)]
    #[validate(nested)]
    pub streaming: StreamingConfig,
    #[serde(default)]
    #[validate(nested)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct OmdbConfig {
    #[serde(default)]
    #[validate(length(min = 1, message = "OMDb API key cannot be empty"))]
    pub api_key: String,
    #[serde(default = "default_omdb_url")]
    #[validate(url(message = "OMDb base URL is not a valid URL"))]
    pub base_url: String,
}

/// Streaming lookups are skipped, and reported as unavailable, without an API key.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct StreamingConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_streaming_url")]
    #[validate(url(message = "Streaming base URL is not a valid URL"))]
    pub base_url: String,
    #[serde(default = "default_streaming_host")]
    #[validate(length(min = 1, message = "RapidAPI host cannot be empty"))]
    pub host: String,
    #[serde(default = "default_country")]
    #[validate(length(equal = 2, message = "Country must be a two-letter code"))]
    pub country: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct HttpConfig {
    #[serde(default = "default_timeout")]
    #[validate(range(min = 1, max = 120, message = "Timeout must be between 1 and 120 seconds"))]
    pub timeout_secs: u64,
}

fn default_omdb_url() -> String {
    "http://www.omdbapi.com/".to_string()
}

fn default_streaming_url() -> String {
    "https://streaming-availability.p.rapidapi.com".to_string()
}

fn default_streaming_host() -> String {
    "streaming-availability.p.rapidapi.com".to_string()
}

fn default_country() -> String {
    "us".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_streaming_url(),
            host: default_streaming_host(),
            country: default_country(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
        }
    }
}

impl StreamingConfig {
    /// The API key, if one is set and not blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    pub fn load_with_cli_args(cli_args: &CliArgs) -> Result<Self, AppError> {
        let mut builder = Config::builder()
            .set_default("omdb.api_key", "")?
            .add_source(File::with_name("config").required(false));

        if let Some(config_path) = &cli_args.config {
            builder = builder.add_source(File::from(config_path.as_path()));
        }

        builder = builder.add_source(
            Environment::with_prefix("MOVIE_LOOKUP")
                .prefix_separator("__")
                .separator("__"),
        );

        if let Some(timeout) = cli_args.timeout {
            builder = builder.set_override("http.timeout_secs", timeout)?;
        }

        let app_config: AppConfig = builder.build()?.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }
}
