use serde::Serialize;

use crate::display::assembler::{DisplayRecord, LookupOutcome};
use crate::error::AppError;
use crate::models::NormalizedOffer;

const NOT_FOUND: &str = "Movie not found.";
const MISSING: &str = "N/A";

pub fn render_text(outcome: &LookupOutcome) -> String {
    match outcome {
        LookupOutcome::NotFound => NOT_FOUND.to_string(),
        LookupOutcome::Found(record) => render_record(record),
    }
}

fn render_record(record: &DisplayRecord) -> String {
    let or_missing = |value: &Option<String>| value.clone().unwrap_or_else(|| MISSING.to_string());

    let mut lines = vec![
        format!("Movie Title: {}", or_missing(&record.title)),
        format!("Brief Synopsis: {}", or_missing(&record.plot)),
        format!("Theatrical Release Date: {}", or_missing(&record.release_date)),
    ];

    let optional = [
        ("Year", record.year.clone()),
        ("Rated", record.content_rating.clone()),
        ("Runtime", record.runtime.clone()),
        ("Genre", Some(record.genres.join(", ")).filter(|g| !g.is_empty())),
        ("Director", record.director.clone()),
        ("IMDb Rating", record.rating_score.map(|score| format!("{:.1}/10", score))),
        ("Poster", record.poster_url.clone()),
    ];
    lines.extend(
        optional
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| format!("{}: {}", name, v))),
    );

    let streaming = match record.streaming_message() {
        Some(message) => message.to_string(),
        None => record
            .offers
            .iter()
            .map(render_offer)
            .collect::<Vec<_>>()
            .join("\n  "),
    };
    lines.push(format!("Streaming Options: {}", streaming));

    lines.join("\n")
}

/// "Netflix (Subscription)", "Apple TV (Rent $3.99) - until May 1st, 2025".
pub fn render_offer(offer: &NormalizedOffer) -> String {
    let mut line = if offer.price.is_empty() {
        format!("{} ({})", offer.platform, offer.label)
    } else {
        format!("{} ({} {})", offer.platform, offer.label, offer.price)
    };
    if !offer.availability.is_empty() {
        line.push_str(" - ");
        line.push_str(&offer.availability);
    }
    line
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    found: bool,
    #[serde(flatten)]
    record: Option<&'a DisplayRecord>,
}

pub fn render_json(outcome: &LookupOutcome) -> Result<String, AppError> {
    let json = match outcome {
        LookupOutcome::NotFound => JsonOutcome {
            found: false,
            record: None,
        },
        LookupOutcome::Found(record) => JsonOutcome {
            found: true,
            record: Some(record),
        },
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OfferType, StreamingStatus};

    fn record(offers: Vec<NormalizedOffer>, streaming: StreamingStatus) -> DisplayRecord {
        DisplayRecord {
            title: Some("The Matrix".to_string()),
            plot: Some("A hacker wakes up.".to_string()),
            release_date: Some("31 Mar 1999".to_string()),
            year: Some("1999".to_string()),
            content_rating: None,
            runtime: None,
            genres: vec!["Action".to_string(), "Sci-Fi".to_string()],
            director: None,
            rating_score: Some(8.7),
            poster_url: None,
            external_id: Some("tt0133093".to_string()),
            streaming,
            offers,
        }
    }

    fn offer(platform: &str, label: &str, price: &str, availability: &str) -> NormalizedOffer {
        NormalizedOffer {
            platform: platform.to_string(),
            offer_type: OfferType::Rent,
            label: label.to_string(),
            price: price.to_string(),
            availability: availability.to_string(),
        }
    }

    #[test]
    fn test_render_offer() {
        assert_eq!(render_offer(&offer("Max", "Subscription", "", "")), "Max (Subscription)");
        assert_eq!(
            render_offer(&offer("Apple TV", "Rent", "$3.99", "until May 1st, 2025")),
            "Apple TV (Rent $3.99) - until May 1st, 2025"
        );
    }

    #[test]
    fn test_render_record_with_offers() {
        let outcome = LookupOutcome::Found(record(
            vec![offer("Max", "Subscription", "", ""), offer("Vudu", "Rent", "$2.99", "")],
            StreamingStatus::Checked,
        ));
        let expected = "Movie Title: The Matrix\n\
                        Brief Synopsis: A hacker wakes up.\n\
                        Theatrical Release Date: 31 Mar 1999\n\
                        Year: 1999\n\
                        Genre: Action, Sci-Fi\n\
                        IMDb Rating: 8.7/10\n\
                        Streaming Options: Max (Subscription)\n  Vudu (Rent $2.99)";
        assert_eq!(render_text(&outcome), expected);
    }

    #[test]
    fn test_render_streaming_messages() {
        let unavailable = LookupOutcome::Found(record(vec![], StreamingStatus::Unavailable));
        assert!(render_text(&unavailable).ends_with("Streaming Options: Streaming information unavailable."));

        let empty = LookupOutcome::Found(record(vec![], StreamingStatus::Checked));
        assert!(render_text(&empty)
            .ends_with("Streaming Options: Not currently available for streaming in the US."));
    }

    #[test]
    fn test_render_not_found() {
        assert_eq!(render_text(&LookupOutcome::NotFound), "Movie not found.");
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&LookupOutcome::NotFound).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"found": false}));
    }

    #[test]
    fn test_render_json() {
        let outcome = LookupOutcome::Found(record(
            vec![offer("Vudu", "Rent", "$2.99", "")],
            StreamingStatus::Checked,
        ));
        let json: serde_json::Value = serde_json::from_str(&render_json(&outcome).unwrap()).unwrap();
        assert_eq!(json["found"], true);
        assert_eq!(json["title"], "The Matrix");
        assert_eq!(json["streaming"], "checked");
        assert_eq!(json["offers"][0]["offer_type"], "rent");
        assert_eq!(json["offers"][0]["price"], "$2.99");
    }
}
