use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Descriptive facts about a single title, as returned by the metadata provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieMetadata {
    pub title: Option<String>,
    /// Raw synopsis; placeholder values such as "N/A" are kept as-is.
    pub plot: Option<String>,
    pub release_date: Option<String>,
    pub year: Option<String>,
    pub content_rating: Option<String>,
    pub runtime: Option<String>,
    pub genres: Vec<String>,
    pub director: Option<String>,
    pub rating_score: Option<f32>,
    pub poster_url: Option<String>,
    /// IMDb identifier, used as the key for the streaming lookup.
    pub external_id: Option<String>,
}

/// Access model of a streaming offer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OfferType {
    Subscription,
    Free,
    Ads,
    Rent,
    Buy,
    Addon,
    Other(String),
}

impl OfferType {
    /// Rank given to any type the provider adds that we don't know about.
    pub const UNKNOWN_RANK: u8 = 99;

    /// Returns `None` for an empty type, which marks an offer as not actionable.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let offer_type = match raw {
            "" => return None,
            "subscription" => Self::Subscription,
            "free" => Self::Free,
            "ads" => Self::Ads,
            "rent" => Self::Rent,
            "buy" => Self::Buy,
            "addon" => Self::Addon,
            other => Self::Other(other.to_string()),
        };
        Some(offer_type)
    }

    /// Lower is more preferred.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Subscription => 0,
            Self::Free => 1,
            Self::Ads => 2,
            Self::Rent => 3,
            Self::Buy => 4,
            Self::Addon => 5,
            Self::Other(_) => Self::UNKNOWN_RANK,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Subscription => "Subscription".to_string(),
            Self::Free => "Free".to_string(),
            Self::Ads => "Free with Ads".to_string(),
            Self::Rent => "Rent".to_string(),
            Self::Buy => "Buy".to_string(),
            Self::Addon => "Add-on".to_string(),
            Self::Other(raw) => capitalize(raw),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Subscription => "subscription",
            Self::Free => "free",
            Self::Ads => "ads",
            Self::Rent => "rent",
            Self::Buy => "buy",
            Self::Addon => "addon",
            Self::Other(raw) => raw,
        }
    }
}

impl Serialize for OfferType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    pub amount: f64,
    pub currency: String,
}

/// One offer as listed by the streaming provider.
#[derive(Debug, Clone, PartialEq)]
pub struct RawOffer {
    pub platform: String,
    pub offer_type: Option<OfferType>,
    pub price: Option<Price>,
    pub available_from: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// The single best offer kept for a platform, with its display strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedOffer {
    pub platform: String,
    pub offer_type: OfferType,
    pub label: String,
    /// Empty when the offer carries no price.
    pub price: String,
    /// Empty unless a future release date or a future expiry applies.
    pub availability: String,
}

/// Result of asking the streaming provider about a title.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamingLookup {
    /// The provider answered; the list may be empty.
    Checked(Vec<RawOffer>),
    /// No answer could be obtained (no identifier, no credential, request failure).
    Unavailable,
}

impl StreamingLookup {
    pub fn status(&self) -> StreamingStatus {
        match self {
            Self::Checked(_) => StreamingStatus::Checked,
            Self::Unavailable => StreamingStatus::Unavailable,
        }
    }

    /// Unavailable collapses to an empty list here; keep `status()` to tell them apart.
    pub fn into_offers(self) -> Vec<RawOffer> {
        match self {
            Self::Checked(offers) => offers,
            Self::Unavailable => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamingStatus {
    Checked,
    Unavailable,
}
