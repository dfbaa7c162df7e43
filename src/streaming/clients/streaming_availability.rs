use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    config::{HttpConfig, StreamingConfig},
    error::AppError,
    models::{OfferType, Price, RawOffer},
    streaming::OfferProvider,
};

const UNKNOWN_PLATFORM: &str = "Unknown";
const DEFAULT_CURRENCY: &str = "USD";

/// Client for the Streaming Availability API on RapidAPI.
pub struct StreamingAvailabilityClient {
    client: Client,
    api_key: String,
    config: StreamingConfig,
}

impl StreamingAvailabilityClient {
    pub fn new(api_key: String, config: StreamingConfig, http: &HttpConfig) -> Result<Self, AppError> {
        let client = Client::builder().timeout(http.timeout()).build()?;
        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    fn show_url(&self, imdb_id: &str) -> String {
        format!("{}/shows/{}", self.config.base_url.trim_end_matches('/'), imdb_id)
    }
}

#[async_trait]
impl OfferProvider for StreamingAvailabilityClient {
    fn name(&self) -> &'static str {
        "Streaming Availability"
    }

    async fn fetch_offers(&self, imdb_id: &str) -> Result<Vec<RawOffer>, AppError> {
        tracing::debug!(imdb_id = %imdb_id, country = %self.config.country, "Fetching streaming offers");

        let response = self
            .client
            .get(self.show_url(imdb_id))
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.config.host)
            .query(&[("country", self.config.country.as_str())])
            .send()
            .await?;

        // The provider answers 404 for titles it tracks no offers for.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(AppError::Provider {
                provider: self.name(),
                status: response.status(),
            });
        }

        let show: ShowResponse = response.json().await?;
        Ok(show.into_offers(&self.config.country))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShowResponse {
    #[serde(default)]
    streaming_options: HashMap<String, Vec<Value>>,
}

impl ShowResponse {
    /// Options that don't match the expected shape are dropped one by one.
    fn into_offers(mut self, country: &str) -> Vec<RawOffer> {
        self.streaming_options
            .remove(country)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<StreamingOption>(value) {
                Ok(option) => Some(option.into()),
                Err(e) => {
                    tracing::debug!("Dropping malformed streaming option: {}", e);
                    None
                }
            })
            .collect()
    }
}

/// Every field is read as raw JSON so that one odd value only blanks that field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StreamingOption {
    service: Option<Value>,
    #[serde(rename = "type")]
    offer_type: Option<Value>,
    price: Option<Value>,
    available_from: Option<Value>,
    available_since: Option<Value>,
    expires_at: Option<Value>,
    expires_on: Option<Value>,
}

impl From<StreamingOption> for RawOffer {
    fn from(option: StreamingOption) -> Self {
        let platform = option
            .service
            .as_ref()
            .and_then(|service| str_field(service, "name"))
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNKNOWN_PLATFORM)
            .to_string();

        let price = option.price.as_ref().and_then(|price| {
            let amount = price.get("amount").and_then(parse_amount)?;
            Some(Price {
                amount,
                currency: str_field(price, "currency")
                    .filter(|c| !c.is_empty())
                    .unwrap_or(DEFAULT_CURRENCY)
                    .to_string(),
            })
        });

        RawOffer {
            platform,
            offer_type: option
                .offer_type
                .as_ref()
                .and_then(Value::as_str)
                .and_then(OfferType::parse),
            price,
            available_from: first_timestamp(&[option.available_from, option.available_since]),
            expires_at: first_timestamp(&[option.expires_at, option.expires_on]),
        }
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn parse_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    amount.filter(|a| a.is_finite())
}

fn first_timestamp(candidates: &[Option<Value>]) -> Option<DateTime<Utc>> {
    candidates.iter().flatten().find_map(parse_timestamp)
}

/// Accepts unix seconds, RFC 3339, a naive ISO date-time (optionally with a
/// trailing `Z`), or a bare date. Anything else counts as absent.
fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().and_then(from_unix),
        Value::String(s) => parse_timestamp_str(s.trim()),
        _ => None,
    };
    if parsed.is_none() {
        tracing::debug!("Ignoring malformed timestamp: {}", value);
    }
    parsed
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|d| d.and_utc());
    }
    s.parse::<i64>().ok().and_then(from_unix)
}

fn from_unix(secs: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0).single()
}
