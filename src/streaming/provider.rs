use async_trait::async_trait;

use crate::error::AppError;
use crate::models::RawOffer;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OfferProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// All offers listed for the title in the configured region.
    async fn fetch_offers(&self, imdb_id: &str) -> Result<Vec<RawOffer>, AppError>;
}
