//! Display helpers shared by the renderers.

use crate::filter::parse_timestamp;
use crate::model::{Launch, Outcome};

/// Format a launch timestamp as e.g. `May 30, 2020, 07:22 PM` (UTC).
///
/// Missing timestamps read `TBD`; unparseable ones read `Invalid Date`.
#[must_use]
pub fn format_date(timestamp: Option<&str>) -> String {
    match timestamp.map(str::trim) {
        None | Some("") => "TBD".to_string(),
        Some(raw) => parse_timestamp(raw).map_or_else(
            || "Invalid Date".to_string(),
            |parsed| parsed.format("%b %-d, %Y, %I:%M %p").to_string(),
        ),
    }
}

/// Format an integer with thousands separators, e.g. `1,207,920`.
#[must_use]
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Cut `text` to at most `length` characters, appending `...` when cut.
/// Missing text becomes the empty string.
#[must_use]
pub fn truncate_text(text: Option<&str>, length: usize) -> String {
    let Some(text) = text else {
        return String::new();
    };
    if text.chars().count() <= length {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(length).collect();
    cut.push_str("...");
    cut
}

/// Link to a map centred on the given coordinates.
#[must_use]
pub fn map_url(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps/?q={latitude},{longitude}")
}

/// Status badge for a launch; `None` when a past launch has no reported result.
#[must_use]
pub fn status_label(launch: &Launch) -> Option<&'static str> {
    if launch.upcoming {
        return Some("Upcoming");
    }
    match launch.outcome() {
        Outcome::Succeeded => Some("Successful"),
        Outcome::Failed => Some("Failed"),
        Outcome::Undetermined => None,
    }
}
