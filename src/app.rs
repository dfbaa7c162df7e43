use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::display::{assemble, LookupOutcome, ProgressTracker};
use crate::error::AppError;
use crate::metadata::{MetadataProvider, OmdbClient};
use crate::offers::normalize;
use crate::streaming::StreamingService;

pub struct App {
    metadata: Box<dyn MetadataProvider>,
    streaming: StreamingService,
    progress: ProgressTracker,
    max_sentences: usize,
}

impl App {
    pub fn new(
        metadata: Box<dyn MetadataProvider>,
        streaming: StreamingService,
        progress: ProgressTracker,
        max_sentences: usize,
    ) -> Self {
        Self {
            metadata,
            streaming,
            progress,
            max_sentences,
        }
    }

    pub fn new_with_config(
        config: &AppConfig,
        max_sentences: usize,
        show_progress: bool,
    ) -> Result<Self, AppError> {
        let metadata = OmdbClient::new(config.omdb.clone(), &config.http)?;
        let streaming = StreamingService::from_config(&config.streaming, &config.http)?;

        Ok(Self::new(
            Box::new(metadata),
            streaming,
            if show_progress {
                ProgressTracker::new()
            } else {
                ProgressTracker::hidden()
            },
            max_sentences,
        ))
    }

    /// Metadata first, then streaming offers for the id it yields.
    pub async fn lookup(
        &self,
        query: &str,
        reference_time: DateTime<Utc>,
    ) -> Result<LookupOutcome, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::InvalidInput("Enter a movie name.".to_string()));
        }

        self.progress.start(query);
        let result = self.lookup_inner(query, reference_time).await;
        self.progress.finish();
        result
    }

    async fn lookup_inner(
        &self,
        query: &str,
        reference_time: DateTime<Utc>,
    ) -> Result<LookupOutcome, AppError> {
        let Some(metadata) = self.metadata.fetch(query).await? else {
            tracing::info!(query = %query, "No match from {}", self.metadata.name());
            return Ok(LookupOutcome::NotFound);
        };

        self.progress.checking_streaming();
        let lookup = self.streaming.lookup(metadata.external_id.as_deref()).await;
        let status = lookup.status();
        let raw_offers = lookup.into_offers();
        let offers = normalize(&raw_offers, reference_time);
        tracing::info!(
            raw = raw_offers.len(),
            kept = offers.len(),
            status = ?status,
            "Normalized streaming offers"
        );

        Ok(assemble(Some(metadata), status, offers, self.max_sentences))
    }
}
