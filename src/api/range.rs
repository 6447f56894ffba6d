use chrono::{DateTime, Duration, Utc};

use crate::core::parse::{TimeInput, anchor_utc};
use crate::core::particles::{HOUR_MS, MINUTE_MS, SECOND_MS, particles};
use crate::core::scale::Scale;
use crate::core::zone::ZoneContext;
use crate::core::{add_units, truncate_to_scale};
use crate::error::{TimelineError, TimelineResult};

/// Current-instant provider, injected so `"currently"` resolution stays
/// deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock backed [`Clock`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// [`Clock`] pinned to one instant, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Typed form of the widget's `start` option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartDirective<'a> {
    /// The symbolic `"currently"` keyword: now, shifted back by a
    /// scale-dependent lookbehind, floored to the scale.
    Currently,
    At(TimeInput<'a>),
}

impl<'a> StartDirective<'a> {
    /// Maps the raw option string onto the directive, treating anything
    /// other than the `"currently"` keyword as concrete date text.
    #[must_use]
    pub fn from_text(raw: &'a str) -> Self {
        if raw.trim().eq_ignore_ascii_case("currently") {
            StartDirective::Currently
        } else {
            StartDirective::At(TimeInput::Text(raw))
        }
    }
}

/// Typed form of the widget's `end` option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EndDirective<'a> {
    /// The symbolic `"auto"` keyword: resolved start plus a scale-dependent
    /// span, minus one millisecond.
    Auto,
    At(TimeInput<'a>),
}

impl<'a> EndDirective<'a> {
    #[must_use]
    pub fn from_text(raw: &'a str) -> Self {
        if raw.trim().eq_ignore_ascii_case("auto") {
            EndDirective::Auto
        } else {
            EndDirective::At(TimeInput::Text(raw))
        }
    }
}

/// Concrete, resolved display range plus its column count at the render
/// scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineRange {
    pub start: DateTime<Utc>,
    /// Inclusive upper bound.
    pub end: DateTime<Utc>,
    pub columns: i64,
}

/// Resolves the start directive to a concrete, scale-floored instant.
pub fn resolve_start(
    directive: StartDirective<'_>,
    zones: ZoneContext,
    scale: Scale,
    clock: &dyn Clock,
) -> TimelineResult<DateTime<Utc>> {
    let instant = match directive {
        StartDirective::Currently => {
            let now = clock.now();
            let (amount, unit) = currently_lookbehind(scale);
            add_units(now, -amount, unit, zones.display)
        }
        StartDirective::At(input) => {
            anchor_utc(input, zones.ambient).ok_or_else(|| TimelineError::UnparsableDirective {
                directive: input.describe(),
            })?
        }
    };
    Ok(truncate_to_scale(instant, zones.display, scale))
}

/// Resolves the end directive to a concrete instant (inclusive bound).
///
/// `Auto` needs the already-resolved start; concrete directives are not
/// floored, so a caller-supplied end like `…T18:30` survives as-is.
pub fn resolve_end(
    directive: EndDirective<'_>,
    zones: ZoneContext,
    scale: Scale,
    start: Option<DateTime<Utc>>,
) -> TimelineResult<DateTime<Utc>> {
    match directive {
        EndDirective::Auto => {
            let start = start.ok_or(TimelineError::MissingRangeStart)?;
            let (amount, unit) = auto_span(scale);
            Ok(add_units(start, amount, unit, zones.display) - Duration::milliseconds(1))
        }
        EndDirective::At(input) => {
            anchor_utc(input, zones.ambient).ok_or_else(|| TimelineError::UnparsableDirective {
                directive: input.describe(),
            })
        }
    }
}

/// Resolves both sides of the range and the total column count in one call.
pub fn resolve_range(
    start_directive: StartDirective<'_>,
    end_directive: EndDirective<'_>,
    zones: ZoneContext,
    scale: Scale,
    clock: &dyn Clock,
) -> TimelineResult<TimelineRange> {
    let start = resolve_start(start_directive, zones, scale, clock)?;
    let end = resolve_end(end_directive, zones, scale, Some(start))?;
    let columns = column_count(start, end, scale);
    tracing::debug!(
        scale = scale.as_str(),
        start = %start,
        end = %end,
        columns,
        "resolved timeline range"
    );
    Ok(TimelineRange {
        start,
        end,
        columns,
    })
}

/// String-option entry point: raw directives, zone identifier, and scale
/// identifier straight from widget configuration.
pub fn resolve_range_for(
    raw_start: &str,
    raw_end: &str,
    zone_id: &str,
    raw_scale: &str,
    clock: &dyn Clock,
) -> TimelineResult<TimelineRange> {
    let zones = ZoneContext::for_zone(zone_id)?;
    let scale = Scale::resolve(raw_scale)?;
    resolve_range(
        StartDirective::from_text(raw_start),
        EndDirective::from_text(raw_end),
        zones,
        scale,
        clock,
    )
}

/// Columns the inclusive range occupies at the render scale.
///
/// Clock scales count on the half-open span: the inclusive end gets its
/// final millisecond back, so an `auto` day of hour columns is 24, not 23,
/// and a trailing partial unit rounds up to a full column. Day and coarser
/// counts already include partial units through [`particles`].
fn column_count(start: DateTime<Utc>, end: DateTime<Utc>, scale: Scale) -> i64 {
    let unit_ms = match scale {
        Scale::Hour => HOUR_MS,
        Scale::Minute => MINUTE_MS,
        Scale::Second => SECOND_MS,
        Scale::Millisecond => 1,
        _ => return particles(start, end).count(scale),
    };
    let span_ms = end.timestamp_millis() - start.timestamp_millis() + 1;
    span_ms.div_euclid(unit_ms) + i64::from(span_ms.rem_euclid(unit_ms) != 0)
}

/// How far behind "now" the `"currently"` start lands, per scale.
fn currently_lookbehind(scale: Scale) -> (i64, Scale) {
    match scale {
        Scale::Year => (5, Scale::Year),
        Scale::Month => (6, Scale::Month),
        Scale::Week => (26, Scale::Week),
        Scale::Weekday | Scale::Day => (15, Scale::Day),
        Scale::Hour => (12, Scale::Hour),
        Scale::Minute => (30, Scale::Minute),
        Scale::Second => (30, Scale::Second),
        Scale::Millisecond => (500, Scale::Millisecond),
    }
}

/// Span the `"auto"` end covers from the resolved start, per scale.
fn auto_span(scale: Scale) -> (i64, Scale) {
    match scale {
        Scale::Year => (10, Scale::Year),
        Scale::Month => (12, Scale::Month),
        Scale::Week => (52, Scale::Week),
        Scale::Weekday | Scale::Day => (30, Scale::Day),
        Scale::Hour => (24, Scale::Hour),
        Scale::Minute => (60, Scale::Minute),
        Scale::Second => (60, Scale::Second),
        Scale::Millisecond => (1_000, Scale::Millisecond),
    }
}
