use chrono::{DateTime, Datelike, Duration, Months, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::core::scale::Scale;
use crate::core::zone::rebase_local_lenient;

/// Adds `amount` whole units of `unit` to `instant`, zone-aware.
///
/// Year and month addition works on local calendar fields with end-of-month
/// clamping. Day-or-coarser units preserve the local wall-clock time across
/// DST transitions, so the UTC delta of "one day" may be 23h or 25h. Hour and
/// finer units are exact durations on the UTC axis. Negative amounts
/// subtract.
#[must_use]
pub fn add_units(instant: DateTime<Utc>, amount: i64, unit: Scale, tz: Tz) -> DateTime<Utc> {
    match unit {
        Scale::Year => add_months_local(instant, amount.saturating_mul(12), tz),
        Scale::Month => add_months_local(instant, amount, tz),
        Scale::Week => add_days_local(instant, amount.saturating_mul(7), tz),
        Scale::Weekday | Scale::Day => add_days_local(instant, amount, tz),
        Scale::Hour => add_fixed(instant, Duration::try_hours(amount)),
        Scale::Minute => add_fixed(instant, Duration::try_minutes(amount)),
        Scale::Second => add_fixed(instant, Duration::try_seconds(amount)),
        Scale::Millisecond => add_fixed(instant, Some(Duration::milliseconds(amount))),
    }
}

/// Floors `instant` to a clean `scale` boundary in `tz`-local terms.
///
/// Zeroes every field strictly below the scale: `Day` floors to local
/// midnight, `Week` to the ISO week start (Monday midnight), `Month`
/// additionally resets the day of month to 1, `Year` the month to January.
/// `Millisecond` is a no-op. Idempotent, and monotonically coarsening when
/// chained from fine to coarse.
#[must_use]
pub fn truncate_to_scale(instant: DateTime<Utc>, tz: Tz, scale: Scale) -> DateTime<Utc> {
    let local = instant.with_timezone(&tz);
    let date = local.date_naive();
    let naive = match scale {
        Scale::Millisecond => return instant,
        Scale::Second => date.and_time(clock(local.hour(), local.minute(), local.second())),
        Scale::Minute => date.and_time(clock(local.hour(), local.minute(), 0)),
        Scale::Hour => date.and_time(clock(local.hour(), 0, 0)),
        Scale::Weekday | Scale::Day => date.and_time(NaiveTime::MIN),
        Scale::Week => {
            let monday = date
                - Duration::days(i64::from(local.weekday().num_days_from_monday()));
            monday.and_time(NaiveTime::MIN)
        }
        Scale::Month => date.with_day(1).unwrap_or(date).and_time(NaiveTime::MIN),
        Scale::Year => {
            let january = date.with_month(1).and_then(|d| d.with_day(1));
            january.unwrap_or(date).and_time(NaiveTime::MIN)
        }
    };

    rebase_local_lenient(naive, tz)
}

fn clock(hour: u32, minute: u32, second: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, second).unwrap_or(NaiveTime::MIN)
}

fn add_months_local(instant: DateTime<Utc>, months: i64, tz: Tz) -> DateTime<Utc> {
    let local = instant.with_timezone(&tz).naive_local();
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).unwrap_or(u32::MAX));
    let shifted = if months >= 0 {
        local.checked_add_months(magnitude)
    } else {
        local.checked_sub_months(magnitude)
    };
    match shifted {
        Some(naive) => rebase_local_lenient(naive, tz),
        None => instant,
    }
}

fn add_days_local(instant: DateTime<Utc>, days: i64, tz: Tz) -> DateTime<Utc> {
    let local = instant.with_timezone(&tz).naive_local();
    match Duration::try_days(days).and_then(|delta| local.checked_add_signed(delta)) {
        Some(naive) => rebase_local_lenient(naive, tz),
        None => instant,
    }
}

fn add_fixed(instant: DateTime<Utc>, delta: Option<Duration>) -> DateTime<Utc> {
    delta
        .and_then(|delta| instant.checked_add_signed(delta))
        .unwrap_or(instant)
}
