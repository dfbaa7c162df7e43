use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::{HttpConfig, OmdbConfig},
    error::AppError,
    metadata::MetadataProvider,
    models::MovieMetadata,
};

const PLACEHOLDER: &str = "N/A";

pub struct OmdbClient {
    client: Client,
    config: OmdbConfig,
}

impl OmdbClient {
    pub fn new(config: OmdbConfig, http: &HttpConfig) -> Result<Self, AppError> {
        let client = Client::builder().timeout(http.timeout()).build()?;
        Ok(Self { client, config })
    }

    fn query_params<'a>(&'a self, query: &'a str) -> [(&'static str, &'a str); 3] {
        let key = if is_imdb_id(query) { "i" } else { "t" };
        [
            (key, query),
            ("apikey", self.config.api_key.as_str()),
            ("plot", "short"),
        ]
    }
}

fn imdb_id_pattern() -> Option<&'static Regex> {
    static IMDB_ID: OnceLock<Option<Regex>> = OnceLock::new();
    IMDB_ID.get_or_init(|| Regex::new(r"^tt\d+$").ok()).as_ref()
}

fn is_imdb_id(query: &str) -> bool {
    imdb_id_pattern().is_some_and(|re| re.is_match(query))
}

#[async_trait]
impl MetadataProvider for OmdbClient {
    fn name(&self) -> &'static str {
        "OMDb"
    }

    async fn fetch(&self, query: &str) -> Result<Option<MovieMetadata>, AppError> {
        tracing::debug!(query = %query, "Fetching OMDb metadata");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&self.query_params(query))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Provider {
                provider: self.name(),
                status: response.status(),
            });
        }

        let body: OmdbResponse = response.json().await?;
        if body.response.as_deref() == Some("False") {
            tracing::debug!(
                query = %query,
                reason = body.error.as_deref().unwrap_or_default(),
                "OMDb returned no match"
            );
            return Ok(None);
        }

        Ok(Some(body.into()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OmdbResponse {
    response: Option<String>,
    error: Option<String>,
    title: Option<String>,
    plot: Option<String>,
    released: Option<String>,
    year: Option<String>,
    rated: Option<String>,
    runtime: Option<String>,
    genre: Option<String>,
    director: Option<String>,
    poster: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
}

/// Drops OMDb's "N/A" placeholder and blank values.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != PLACEHOLDER)
}

impl From<OmdbResponse> for MovieMetadata {
    fn from(item: OmdbResponse) -> Self {
        let genres = present(item.genre)
            .map(|genre| {
                genre
                    .split(',')
                    .map(|g| g.trim().to_string())
                    .filter(|g| !g.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        MovieMetadata {
            title: present(item.title),
            plot: item.plot,
            release_date: present(item.released),
            year: present(item.year),
            content_rating: present(item.rated),
            runtime: present(item.runtime),
            genres,
            director: present(item.director),
            rating_score: present(item.imdb_rating).and_then(|r| r.parse().ok()),
            poster_url: present(item.poster),
            external_id: present(item.imdb_id),
        }
    }
}
