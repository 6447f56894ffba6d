use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use regex::Regex;

use crate::core::names::NameTable;
use crate::core::record::TemporalRecord;
use crate::core::zone::{ZoneContext, rebase_local, resolve_zone};
use crate::error::TimelineResult;

/// The three input shapes the canonical parser accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeInput<'a> {
    /// Free-form date/time text.
    Text(&'a str),
    /// Epoch milliseconds; always read as UTC.
    EpochMillis(f64),
    /// Pre-built wall-clock fields in the ambient zone.
    LocalFields(NaiveDateTime),
}

impl TimeInput<'_> {
    /// Human-readable form for error reporting.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            TimeInput::Text(text) => (*text).to_owned(),
            TimeInput::EpochMillis(ms) => format!("epoch-millis {ms}"),
            TimeInput::LocalFields(naive) => naive.to_string(),
        }
    }
}

/// `[±]YYYY(-|/)MM(-|/)DD`, optional `T`/space clock part, optional zone
/// suffix. Parsed field-by-field rather than through a fixed chrono layout so
/// that single-digit fields and slash separators are accepted.
static ISO_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)^\s*
        ([+-]?\d{1,6})[-/](\d{1,2})[-/](\d{1,2})
        (?:[T\ ](\d{1,2}):(\d{2})(?::(\d{2})(?:\.(\d{1,3}))?)?)?
        \s*(Z|[+-]\d{2}:\d{2})?\s*$",
    )
    .expect("iso-like pattern is valid")
});

/// Converts a raw time input into a canonical [`TemporalRecord`] projected
/// into `zones.display`.
///
/// Returns `None` for unparsable text and non-finite or out-of-range numeric
/// input; malformed data is a routine outcome here, not an error.
#[must_use]
pub fn parse(input: TimeInput<'_>, zones: ZoneContext, names: &NameTable) -> Option<TemporalRecord> {
    let instant = anchor_utc(input, zones.ambient)?;
    Some(TemporalRecord::project(instant, zones.display, names))
}

/// String-identifier form of [`parse`]; only a bad `zone_id` is an error.
pub fn parse_in_zone(
    input: TimeInput<'_>,
    zone_id: &str,
    names: &NameTable,
) -> TimelineResult<Option<TemporalRecord>> {
    let zones = ZoneContext {
        display: resolve_zone(zone_id)?,
        ambient: Tz::UTC,
    };
    Ok(parse(input, zones, names))
}

/// Establishes the UTC instant for an input, interpreting offset-free shapes
/// as ambient-zone wall-clock time.
pub(crate) fn anchor_utc(input: TimeInput<'_>, ambient: Tz) -> Option<DateTime<Utc>> {
    match input {
        TimeInput::EpochMillis(ms) => {
            if !ms.is_finite() {
                return None;
            }
            DateTime::from_timestamp_millis(ms.round() as i64)
        }
        TimeInput::LocalFields(naive) => rebase_local(naive, ambient),
        TimeInput::Text(text) => parse_text(text, ambient),
    }
}

fn parse_text(raw: &str, ambient: Tz) -> Option<DateTime<Utc>> {
    // Shapes like "05/01/2024" match the ISO-like pattern but fail field
    // validation; those still get a shot at the permissive fallback.
    if let Some(caps) = ISO_LIKE.captures(raw) {
        if let Some(instant) = anchor_iso_fields(&caps, ambient) {
            return Some(instant);
        }
    }
    parse_fallback(raw, ambient)
}

fn anchor_iso_fields(caps: &regex::Captures<'_>, ambient: Tz) -> Option<DateTime<Utc>> {
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    let hour = numeric_group(caps, 4)?;
    let minute = numeric_group(caps, 5)?;
    let second = numeric_group(caps, 6)?;
    let millis = caps.get(7).map_or(Some(0), |frac| fraction_millis(frac.as_str()))?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_milli_opt(hour, minute, second, millis)?;
    let naive = date.and_time(time);

    match caps.get(8).map(|m| m.as_str()) {
        None => rebase_local(naive, ambient),
        Some("Z") => Some(Utc.from_utc_datetime(&naive)),
        Some(offset_text) => {
            let offset = parse_fixed_offset(offset_text)?;
            offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc))
        }
    }
}

fn numeric_group(caps: &regex::Captures<'_>, index: usize) -> Option<u32> {
    match caps.get(index) {
        None => Some(0),
        Some(group) => group.as_str().parse().ok(),
    }
}

/// `.5` means 500ms, `.05` means 50ms.
fn fraction_millis(digits: &str) -> Option<u32> {
    let parsed: u32 = digits.parse().ok()?;
    let scale = 10_u32.checked_pow(3_u32.checked_sub(digits.len() as u32)?)?;
    Some(parsed * scale)
}

fn parse_fixed_offset(text: &str) -> Option<FixedOffset> {
    let (sign, rest) = match text.split_at_checked(1)? {
        ("+", rest) => (1, rest),
        ("-", rest) => (-1, rest),
        _ => return None,
    };
    let (hours_text, minutes_text) = rest.split_once(':')?;
    let hours: i32 = hours_text.parse().ok()?;
    let minutes: i32 = minutes_text.parse().ok()?;
    FixedOffset::east_opt(sign * (hours * 3_600 + minutes * 60))
}

/// Permissive fallback for strings that do not match the ISO-like pattern.
fn parse_fallback(raw: &str, ambient: Tz) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    const DATETIME_LAYOUTS: &[&str] = &[
        "%B %d, %Y %H:%M:%S",
        "%B %d, %Y %H:%M",
        "%m/%d/%Y %H:%M:%S",
        "%m/%d/%Y %H:%M",
    ];
    for layout in DATETIME_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return rebase_local(naive, ambient);
        }
    }

    const DATE_LAYOUTS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%m/%d/%Y"];
    for layout in DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, layout) {
            return rebase_local(date.and_time(NaiveTime::MIN), ambient);
        }
    }

    None
}
