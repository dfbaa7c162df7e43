use serde::Serialize;

use crate::models::{MovieMetadata, NormalizedOffer, StreamingStatus};
use crate::plot;

pub const STREAMING_UNAVAILABLE: &str = "Streaming information unavailable.";
pub const NOT_STREAMING: &str = "Not currently available for streaming in the US.";

/// Everything shown for one looked-up title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    pub title: Option<String>,
    pub plot: Option<String>,
    pub release_date: Option<String>,
    pub year: Option<String>,
    pub content_rating: Option<String>,
    pub runtime: Option<String>,
    pub genres: Vec<String>,
    pub director: Option<String>,
    pub rating_score: Option<f32>,
    pub poster_url: Option<String>,
    pub external_id: Option<String>,
    pub streaming: StreamingStatus,
    pub offers: Vec<NormalizedOffer>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    NotFound,
    Found(DisplayRecord),
}

impl DisplayRecord {
    /// What to show in place of the offer list, if anything.
    pub fn streaming_message(&self) -> Option<&'static str> {
        match self.streaming {
            StreamingStatus::Unavailable => Some(STREAMING_UNAVAILABLE),
            StreamingStatus::Checked if self.offers.is_empty() => Some(NOT_STREAMING),
            StreamingStatus::Checked => None,
        }
    }
}

/// Combines metadata and normalized offers. Absent metadata means the title
/// was not found, whatever the offers say.
pub fn assemble(
    metadata: Option<MovieMetadata>,
    streaming: StreamingStatus,
    offers: Vec<NormalizedOffer>,
    max_sentences: usize,
) -> LookupOutcome {
    let Some(metadata) = metadata else {
        return LookupOutcome::NotFound;
    };

    // Offers can't be trusted once the lookup is known to have failed.
    let offers = match streaming {
        StreamingStatus::Checked => offers,
        StreamingStatus::Unavailable => Vec::new(),
    };

    LookupOutcome::Found(DisplayRecord {
        title: metadata.title,
        plot: metadata
            .plot
            .map(|text| plot::truncate(&text, max_sentences)),
        release_date: metadata.release_date,
        year: metadata.year,
        content_rating: metadata.content_rating,
        runtime: metadata.runtime,
        genres: metadata.genres,
        director: metadata.director,
        rating_score: metadata.rating_score,
        poster_url: metadata.poster_url,
        external_id: metadata.external_id,
        streaming,
        offers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OfferType;

    fn metadata() -> MovieMetadata {
        MovieMetadata {
            title: Some("Heat".to_string()),
            plot: Some("One. Two. Three. Four.".to_string()),
            external_id: Some("tt0113277".to_string()),
            ..MovieMetadata::default()
        }
    }

    fn netflix() -> NormalizedOffer {
        NormalizedOffer {
            platform: "Netflix".to_string(),
            offer_type: OfferType::Subscription,
            label: "Subscription".to_string(),
            price: String::new(),
            availability: String::new(),
        }
    }

    fn found(outcome: LookupOutcome) -> DisplayRecord {
        match outcome {
            LookupOutcome::Found(record) => record,
            LookupOutcome::NotFound => panic!("expected a record"),
        }
    }

    #[test]
    fn test_missing_metadata_is_not_found() {
        let outcome = assemble(None, StreamingStatus::Checked, vec![netflix()], 3);
        assert_eq!(outcome, LookupOutcome::NotFound);
    }

    #[test]
    fn test_plot_is_truncated() {
        let record = found(assemble(Some(metadata()), StreamingStatus::Checked, vec![], 2));
        assert_eq!(record.plot.as_deref(), Some("One. Two."));
    }

    #[test]
    fn test_offers_are_kept_in_order() {
        let record = found(assemble(Some(metadata()), StreamingStatus::Checked, vec![netflix()], 3));
        assert_eq!(record.offers, vec![netflix()]);
        assert_eq!(record.streaming_message(), None);
    }

    #[test]
    fn test_checked_and_empty_message() {
        let record = found(assemble(Some(metadata()), StreamingStatus::Checked, vec![], 3));
        assert_eq!(record.streaming_message(), Some(NOT_STREAMING));
    }

    #[test]
    fn test_unavailable_message() {
        let record = found(assemble(Some(metadata()), StreamingStatus::Unavailable, vec![netflix()], 3));
        assert!(record.offers.is_empty());
        assert_eq!(record.streaming_message(), Some(STREAMING_UNAVAILABLE));
    }

    #[test]
    fn test_tolerates_sparse_metadata() {
        let record = found(assemble(Some(MovieMetadata::default()), StreamingStatus::Unavailable, vec![], 3));
        assert_eq!(record.title, None);
        assert_eq!(record.plot, None);
        assert!(record.genres.is_empty());
    }
}
