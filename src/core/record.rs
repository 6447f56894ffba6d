use chrono::{DateTime, Datelike, SecondsFormat, Timelike, Utc};
use chrono_tz::Tz;

use crate::core::names::NameTable;

/// Seconds from the proleptic Gregorian epoch 0001-01-01T00:00:00Z to the
/// Unix epoch.
pub const SECONDS_FROM_CE_TO_UNIX_EPOCH: i64 = 62_135_596_800;

/// Canonical, immutable projection of one instant as observed in a display
/// zone.
///
/// `epoch_seconds` is the single source of truth for ordering and duration
/// arithmetic; every other field is a derived, zone-local presentation.
/// Consumers that need a modified instant re-derive a new record rather than
/// mutating this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalRecord {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    pub month_name: String,
    pub day: u32,
    /// Localized weekday name from the caller's table.
    pub weekday: String,
    /// ISO 8601 week number.
    pub week_number: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub milliseconds: u32,
    /// Offset-qualified RFC 3339 rendering in the display zone.
    pub iso_string: String,
    pub epoch_seconds: i64,
    /// Seconds since 0001-01-01T00:00:00Z; monotonic across eras and signs.
    pub epoch_seconds_ce: i64,
    instant: DateTime<Utc>,
}

impl TemporalRecord {
    /// Projects a UTC instant into `tz`-local fields.
    #[must_use]
    pub fn project(instant: DateTime<Utc>, tz: Tz, names: &NameTable) -> Self {
        let local = instant.with_timezone(&tz);
        Self {
            year: local.year(),
            month: local.month(),
            month_name: names.month_name(local.month()).to_owned(),
            day: local.day(),
            weekday: names.day_name(local.weekday()).to_owned(),
            week_number: local.iso_week().week(),
            hours: local.hour(),
            minutes: local.minute(),
            seconds: local.second(),
            milliseconds: local.timestamp_subsec_millis().min(999),
            iso_string: local
                .fixed_offset()
                .to_rfc3339_opts(SecondsFormat::Millis, false),
            epoch_seconds: instant.timestamp(),
            epoch_seconds_ce: instant.timestamp() + SECONDS_FROM_CE_TO_UNIX_EPOCH,
            instant,
        }
    }

    /// The UTC instant this record was projected from.
    #[must_use]
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    #[must_use]
    pub fn year_text(&self, width: usize) -> String {
        zero_pad(i64::from(self.year), width)
    }

    #[must_use]
    pub fn month_text(&self, width: usize) -> String {
        zero_pad(i64::from(self.month), width)
    }

    #[must_use]
    pub fn day_text(&self, width: usize) -> String {
        zero_pad(i64::from(self.day), width)
    }

    #[must_use]
    pub fn week_number_text(&self, width: usize) -> String {
        zero_pad(i64::from(self.week_number), width)
    }

    #[must_use]
    pub fn hours_text(&self, width: usize) -> String {
        zero_pad(i64::from(self.hours), width)
    }

    #[must_use]
    pub fn minutes_text(&self, width: usize) -> String {
        zero_pad(i64::from(self.minutes), width)
    }

    #[must_use]
    pub fn seconds_text(&self, width: usize) -> String {
        zero_pad(i64::from(self.seconds), width)
    }

    #[must_use]
    pub fn milliseconds_text(&self, width: usize) -> String {
        zero_pad(i64::from(self.milliseconds), width)
    }

    /// Abbreviated month name per the period convention of
    /// [`NameTable::abbreviate`].
    #[must_use]
    pub fn month_name_abbrev(&self, len: usize) -> String {
        NameTable::abbreviate(&self.month_name, len)
    }

    #[must_use]
    pub fn weekday_abbrev(&self, len: usize) -> String {
        NameTable::abbreviate(&self.weekday, len)
    }
}

fn zero_pad(value: i64, width: usize) -> String {
    format!("{value:0width$}")
}
