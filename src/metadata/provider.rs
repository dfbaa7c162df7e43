use async_trait::async_trait;

use crate::error::AppError;
use crate::models::MovieMetadata;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Looks up a title or an IMDb id. `Ok(None)` means the provider had no match.
    async fn fetch(&self, query: &str) -> Result<Option<MovieMetadata>, AppError>;
}
