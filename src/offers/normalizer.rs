use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::{NormalizedOffer, OfferType, RawOffer};
use crate::offers::format::{format_ordinal_date, format_price};

/// Reduces raw offers to one best offer per platform.
///
/// Output is ordered by offer-type rank, then by platform name. An empty
/// input yields an empty output, which callers show as "not currently
/// available".
pub fn normalize(raw_offers: &[RawOffer], reference_time: DateTime<Utc>) -> Vec<NormalizedOffer> {
    let mut best: HashMap<&str, (&OfferType, &RawOffer)> = HashMap::new();

    for offer in raw_offers {
        let Some(offer_type) = offer.offer_type.as_ref() else {
            tracing::debug!(platform = %offer.platform, "Skipping offer without a type");
            continue;
        };

        let replace = match best.get(offer.platform.as_str()) {
            Some((current_type, current)) => displaces(offer_type, offer, current_type, current),
            None => true,
        };
        if replace {
            best.insert(offer.platform.as_str(), (offer_type, offer));
        }
    }

    let mut selected: Vec<(&OfferType, &RawOffer)> = best.into_values().collect();
    selected.sort_by(|(a_type, a), (b_type, b)| {
        a_type
            .rank()
            .cmp(&b_type.rank())
            .then_with(|| a.platform.cmp(&b.platform))
    });

    selected
        .into_iter()
        .map(|(offer_type, offer)| to_normalized(offer_type, offer, reference_time))
        .collect()
}

/// Whether `candidate` should replace the running best for its platform.
fn displaces(
    candidate_type: &OfferType,
    candidate: &RawOffer,
    current_type: &OfferType,
    current: &RawOffer,
) -> bool {
    let (candidate_rank, current_rank) = (candidate_type.rank(), current_type.rank());
    if candidate_rank != current_rank {
        return candidate_rank < current_rank;
    }

    // A priceless offer never pushes out one we already have.
    match (&candidate.price, &current.price) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(new), Some(old)) => new.amount < old.amount,
    }
}

fn to_normalized(
    offer_type: &OfferType,
    offer: &RawOffer,
    reference_time: DateTime<Utc>,
) -> NormalizedOffer {
    let price = match &offer.price {
        Some(price) => format_price(Some(price.amount), &price.currency),
        None => String::new(),
    };

    NormalizedOffer {
        platform: offer.platform.clone(),
        offer_type: offer_type.clone(),
        label: offer_type.label(),
        price,
        availability: availability(offer, reference_time),
    }
}

/// A future release date wins over a future expiry; past dates show nothing.
fn availability(offer: &RawOffer, reference_time: DateTime<Utc>) -> String {
    if let Some(from) = offer.available_from.filter(|from| *from > reference_time) {
        return format_ordinal_date(&from);
    }
    if let Some(until) = offer.expires_at.filter(|until| *until > reference_time) {
        return format!("until {}", format_ordinal_date(&until));
    }
    String::new()
}
