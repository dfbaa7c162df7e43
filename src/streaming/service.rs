use crate::{
    config::{HttpConfig, StreamingConfig},
    error::AppError,
    models::StreamingLookup,
    streaming::{OfferProvider, StreamingAvailabilityClient},
};

/// Turns every way a streaming lookup can fail into `StreamingLookup::Unavailable`.
pub struct StreamingService {
    provider: Option<Box<dyn OfferProvider>>,
}

impl StreamingService {
    pub fn new(provider: Option<Box<dyn OfferProvider>>) -> Self {
        Self { provider }
    }

    /// No provider is configured when the API key is missing or blank.
    pub fn from_config(config: &StreamingConfig, http: &HttpConfig) -> Result<Self, AppError> {
        let provider: Option<Box<dyn OfferProvider>> = match config.credential() {
            Some(api_key) => Some(Box::new(StreamingAvailabilityClient::new(
                api_key.to_string(),
                config.clone(),
                http,
            )?)),
            None => {
                tracing::info!("No streaming API key configured; streaming lookups disabled");
                None
            }
        };
        Ok(Self::new(provider))
    }

    pub async fn lookup(&self, external_id: Option<&str>) -> StreamingLookup {
        let Some(provider) = &self.provider else {
            return StreamingLookup::Unavailable;
        };
        let Some(imdb_id) = external_id.filter(|id| !id.is_empty()) else {
            tracing::debug!("No external id; skipping streaming lookup");
            return StreamingLookup::Unavailable;
        };

        match provider.fetch_offers(imdb_id).await {
            Ok(offers) => StreamingLookup::Checked(offers),
            Err(e) => {
                tracing::warn!("Streaming lookup failed on {}: {}", provider.name(), e);
                StreamingLookup::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streaming::MockOfferProvider;

    #[tokio::test]
    async fn test_without_provider_is_unavailable() {
        let service = StreamingService::new(None);
        assert_eq!(service.lookup(Some("tt0133093")).await, StreamingLookup::Unavailable);
    }

    #[tokio::test]
    async fn test_without_id_is_unavailable() {
        let mut provider = MockOfferProvider::new();
        provider.expect_fetch_offers().never();
        let service = StreamingService::new(Some(Box::new(provider)));
        assert_eq!(service.lookup(None).await, StreamingLookup::Unavailable);
        assert_eq!(service.lookup(Some("")).await, StreamingLookup::Unavailable);
    }

    #[tokio::test]
    async fn test_provider_error_is_unavailable() {
        let mut provider = MockOfferProvider::new();
        provider.expect_name().return_const("Mock");
        provider
            .expect_fetch_offers()
            .returning(|_| Err(AppError::InvalidInput("boom".to_string())));
        let service = StreamingService::new(Some(Box::new(provider)));
        assert_eq!(service.lookup(Some("tt1")).await, StreamingLookup::Unavailable);
    }

    #[tokio::test]
    async fn test_empty_answer_is_checked() {
        let mut provider = MockOfferProvider::new();
        provider
            .expect_fetch_offers()
            .withf(|id| id == "tt1")
            .returning(|_| Ok(Vec::new()));
        let service = StreamingService::new(Some(Box::new(provider)));
        assert_eq!(service.lookup(Some("tt1")).await, StreamingLookup::Checked(Vec::new()));
    }

    #[test]
    fn test_from_config_without_key() {
        let service = StreamingService::from_config(&StreamingConfig::default(), &HttpConfig::default()).unwrap();
        assert!(service.provider.is_none());
    }
}
