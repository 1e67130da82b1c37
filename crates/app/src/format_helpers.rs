//! Display formatting for dates and figures shown in the portal.

use chrono::{DateTime, NaiveDate};

/// "Mar 10, 2025".
pub fn format_date_human(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format an RFC 3339 timestamp as "Mar 10, 2025 9:05 AM".
///
/// Anything that does not parse is shown as its date prefix, or verbatim.
pub fn format_datetime_human(timestamp: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return parsed.format("%b %-d, %Y %-I:%M %p").to_string();
    }
    timestamp
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .map(format_date_human)
        .unwrap_or_else(|| timestamp.to_string())
}

/// "92.5%", or "n/a" when nothing has been marked yet.
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(pct) => format!("{pct:.1}%"),
        None => "n/a".to_string(),
    }
}

/// `None` for blank form input, trimmed text otherwise.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
