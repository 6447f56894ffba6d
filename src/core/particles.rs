use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::core::scale::Scale;
use crate::error::TimelineResult;

pub(crate) const SECOND_MS: i64 = 1_000;
pub(crate) const MINUTE_MS: i64 = 60 * SECOND_MS;
pub(crate) const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;

/// Counts of whole/partial calendar units spanning two instants.
///
/// `years`, `months`, and `weeks` are inclusive of the partially-elapsed
/// current unit: a span fully inside one calendar year has `years == 1`.
/// `days` counts a partial final day as a full column, which also keeps
/// DST-shortened or -lengthened days from perturbing the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Particles {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub weekdays: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

impl Particles {
    /// Single-scale query mode.
    #[must_use]
    pub fn count(self, scale: Scale) -> i64 {
        match scale {
            Scale::Year => self.years,
            Scale::Month => self.months,
            Scale::Week => self.weeks,
            Scale::Weekday => self.weekdays,
            Scale::Day => self.days,
            Scale::Hour => self.hours,
            Scale::Minute => self.minutes,
            Scale::Second => self.seconds,
            Scale::Millisecond => self.milliseconds,
        }
    }
}

/// Calendar-correct unit counts between `start` and `end`.
///
/// Year and month counts come from calendar-field subtraction, never from
/// millisecond division, so leap years and variable month lengths are
/// reflected automatically. Everything else derives from the millisecond
/// delta.
#[must_use]
pub fn particles(start: DateTime<Utc>, end: DateTime<Utc>) -> Particles {
    let delta_ms = end.timestamp_millis() - start.timestamp_millis();

    let year_delta = i64::from(end.year()) - i64::from(start.year());
    let years = year_delta + 1;
    let months = year_delta * 12 + i64::from(end.month()) - i64::from(start.month()) + 1;

    let whole_days = delta_ms.div_euclid(DAY_MS);
    let partial_day = i64::from(delta_ms.rem_euclid(DAY_MS) != 0);
    let days = whole_days + partial_day;

    Particles {
        years,
        months,
        weeks: delta_ms.div_euclid(WEEK_MS) + 1,
        days,
        weekdays: days,
        hours: delta_ms.div_euclid(HOUR_MS),
        minutes: delta_ms.div_euclid(MINUTE_MS),
        seconds: delta_ms.div_euclid(SECOND_MS),
        milliseconds: delta_ms,
    }
}

/// Single count for a raw scale identifier (plural/case-insensitive).
pub fn particles_for_scale(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    raw_scale: &str,
) -> TimelineResult<i64> {
    let scale = Scale::resolve(raw_scale)?;
    Ok(particles(start, end).count(scale))
}
