//! Timestamp resolution for source-native date text.
//!
//! AppleScript renders dates with the host's locale, e.g.
//! `Wednesday, October 22, 2025 at 7:40:00 PM` or
//! `Wednesday 22 October 2025 at 19:40:00`. The parser accepts those long
//! forms plus RFC 3339, RFC 2822 and a few numeric layouts. Naive values are
//! read in the local timezone.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

const DATETIME_FORMATS: &[&str] = &[
    "%B %d, %Y %I:%M:%S %p",
    "%B %d, %Y %I:%M %p",
    "%B %d, %Y %H:%M:%S",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%d %B %Y"];

const WEEKDAYS: &[&str] = &[
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Parse `text`, or return `None` when no known layout matches.
#[must_use]
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    let simplified = simplify(trimmed);

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&simplified, format) {
            return local_to_utc(naive);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(day) = NaiveDate::parse_from_str(&simplified, format) {
            return day.and_hms_opt(0, 0, 0).and_then(local_to_utc);
        }
    }

    None
}

/// Parse `text`, falling back to `now` when it is not a valid date/time.
#[must_use]
pub fn resolve_date(text: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    parse_timestamp(text).unwrap_or_else(|| {
        tracing::debug!(value = text.trim(), "unparseable note timestamp; using current time");
        now
    })
}

/// `yyyy-MM-dd` of `date` in the local timezone.
#[must_use]
pub fn date_key(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// Drop a leading weekday name and the AppleScript ` at ` joiner.
fn simplify(text: &str) -> String {
    let mut rest = text;
    if let Some((head, tail)) = text.split_once([',', ' '])
        && WEEKDAYS.contains(&head.to_ascii_lowercase().as_str())
    {
        rest = tail.trim_start_matches([',', ' ']);
    }
    rest.replace(" at ", " ")
}

fn local_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}
