use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Calendar granularity at which a timeline is rendered or measured.
///
/// `Weekday` renders one column per day like `Day`, but labels columns with
/// weekday names instead of day-of-month numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Year,
    Month,
    Week,
    Weekday,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl Scale {
    pub const ALL: [Scale; 9] = [
        Scale::Year,
        Scale::Month,
        Scale::Week,
        Scale::Weekday,
        Scale::Day,
        Scale::Hour,
        Scale::Minute,
        Scale::Second,
        Scale::Millisecond,
    ];

    /// Maps a raw scale identifier onto the canonical set.
    ///
    /// Accepts any casing and tolerates one trailing plural `s`.
    /// Returns `None` for anything else; this is a routine validation
    /// predicate, not an error path.
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Scale> {
        let lowered = raw.trim().to_ascii_lowercase();
        let singular = lowered.strip_suffix('s').unwrap_or(&lowered);
        match singular {
            "year" => Some(Scale::Year),
            "month" => Some(Scale::Month),
            "week" => Some(Scale::Week),
            "weekday" => Some(Scale::Weekday),
            "day" => Some(Scale::Day),
            "hour" => Some(Scale::Hour),
            "minute" => Some(Scale::Minute),
            "second" => Some(Scale::Second),
            "millisecond" => Some(Scale::Millisecond),
            _ => None,
        }
    }

    /// Like [`Scale::normalize`], but for call sites that must abort on an
    /// unknown scale.
    pub fn resolve(raw: &str) -> TimelineResult<Scale> {
        Scale::normalize(raw).ok_or_else(|| TimelineError::UnsupportedScale {
            scale: raw.to_owned(),
        })
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Scale::Year => "year",
            Scale::Month => "month",
            Scale::Week => "week",
            Scale::Weekday => "weekday",
            Scale::Day => "day",
            Scale::Hour => "hour",
            Scale::Minute => "minute",
            Scale::Second => "second",
            Scale::Millisecond => "millisecond",
        }
    }
}
