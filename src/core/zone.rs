use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{TimelineError, TimelineResult};

/// Explicit replacement for the ambient "caller local zone" a browser widget
/// would read from its environment.
///
/// `display` is the zone the timeline is projected into; `ambient` is the
/// zone used to interpret inputs that carry no explicit offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneContext {
    pub display: Tz,
    pub ambient: Tz,
}

impl Default for ZoneContext {
    fn default() -> Self {
        Self {
            display: Tz::UTC,
            ambient: Tz::UTC,
        }
    }
}

impl ZoneContext {
    /// Builds a context displaying in `zone_id` with a UTC ambient zone.
    pub fn for_zone(zone_id: &str) -> TimelineResult<Self> {
        Ok(Self {
            display: resolve_zone(zone_id)?,
            ambient: Tz::UTC,
        })
    }

    #[must_use]
    pub fn with_ambient(mut self, ambient: Tz) -> Self {
        self.ambient = ambient;
        self
    }
}

/// Resolves an IANA zone identifier.
///
/// An unrecognized identifier is a hard error; it never silently falls back
/// to UTC.
pub fn resolve_zone(zone_id: &str) -> TimelineResult<Tz> {
    zone_id
        .parse::<Tz>()
        .map_err(|_| TimelineError::InvalidTimeZone {
            zone: zone_id.to_owned(),
        })
}

/// Signed zone offset at `instant`, in milliseconds, such that
/// `local = utc + offset`. DST-aware.
#[must_use]
pub fn zone_offset_millis(instant: DateTime<Utc>, tz: Tz) -> i64 {
    let offset_seconds = tz
        .offset_from_utc_datetime(&instant.naive_utc())
        .fix()
        .local_minus_utc();
    i64::from(offset_seconds) * 1_000
}

/// String-identifier form of [`zone_offset_millis`].
pub fn zone_offset_millis_for(instant: DateTime<Utc>, zone_id: &str) -> TimelineResult<i64> {
    Ok(zone_offset_millis(instant, resolve_zone(zone_id)?))
}

/// Anchors a zone-local wall-clock time to the UTC axis.
///
/// Ambiguous fall-back times take the earlier offset. Wall times inside a
/// spring-forward gap resolve to the first valid instant after the gap,
/// probed in half-hour steps to cover half-hour transition zones.
pub(crate) fn rebase_local(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<Utc>> {
    use chrono::offset::LocalResult;

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, _) => Some(earlier.with_timezone(&Utc)),
        LocalResult::None => {
            for step in 1..=4 {
                let shifted = naive + Duration::minutes(30 * step);
                match tz.from_local_datetime(&shifted) {
                    LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                        return Some(dt.with_timezone(&Utc));
                    }
                    LocalResult::None => {}
                }
            }
            None
        }
    }
}

/// Total variant of [`rebase_local`] for arithmetic paths that must not fail:
/// a wall time no real zone transition can explain is read as UTC.
pub(crate) fn rebase_local_lenient(naive: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    rebase_local(naive, tz).unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}
