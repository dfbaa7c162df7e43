use chrono::{DateTime, Datelike, Utc};

/// Formats a timestamp as "Month Dayth, Year", e.g. "March 3rd, 2025".
pub fn format_ordinal_date(ts: &DateTime<Utc>) -> String {
    let day = ts.day();
    format!("{} {}{}, {}", ts.format("%B"), day, ordinal_suffix(day), ts.year())
}

fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Formats a price with two decimals: "$12.50" for USD, "12.50 EUR" otherwise.
///
/// An absent amount gives an empty string, which means "no price to show",
/// not "free".
pub fn format_price(amount: Option<f64>, currency: &str) -> String {
    match amount {
        None => String::new(),
        Some(amount) if currency == "USD" => format!("${:.2}", amount),
        Some(amount) => format!("{:.2} {}", amount, currency),
    }
}
