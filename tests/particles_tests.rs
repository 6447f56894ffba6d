use chrono::{TimeZone, Utc};
use timeline_rs::TimelineError;
use timeline_rs::core::{particles, particles_for_scale};

#[test]
fn zero_width_span_still_counts_the_current_units() {
    let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let counts = particles(t, t);

    assert_eq!(counts.years, 1);
    assert_eq!(counts.months, 1);
    assert_eq!(counts.weeks, 1);
    assert_eq!(counts.days, 0);
    assert_eq!(counts.weekdays, 0);
    assert_eq!(counts.hours, 0);
    assert_eq!(counts.minutes, 0);
    assert_eq!(counts.seconds, 0);
    assert_eq!(counts.milliseconds, 0);
}

#[test]
fn one_calendar_year_span_counts_every_scale() {
    let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let counts = particles(start, end);

    assert_eq!(counts.years, 2);
    assert_eq!(counts.months, 13);
    assert_eq!(counts.weeks, 53);
    assert_eq!(counts.days, 365);
    assert_eq!(counts.hours, 8_760);
    assert_eq!(counts.minutes, 525_600);
    assert_eq!(counts.seconds, 31_536_000);
    assert_eq!(counts.milliseconds, 31_536_000_000);
}

#[test]
fn leap_year_february_has_29_days() {
    let start = Utc.with_ymd_and_hms(2024, 2, 28, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    assert_eq!(particles(start, end).days, 2);

    let full_leap_year = particles(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    );
    assert_eq!(full_leap_year.days, 366);
}

#[test]
fn months_use_calendar_field_subtraction() {
    let counts = particles(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2025, 2, 15, 0, 0, 0).unwrap(),
    );
    assert_eq!(counts.months, 14);
}

#[test]
fn partial_final_day_counts_as_a_full_column() {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 5, 3, 6, 0, 0).unwrap();
    assert_eq!(particles(start, end).days, 3);
}

#[test]
fn dst_transition_does_not_perturb_day_counts() {
    // New York local midnights around the 2024-03-10 spring-forward: the
    // civil day is only 23 hours long on the UTC axis.
    let start = Utc.with_ymd_and_hms(2024, 3, 10, 5, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 3, 11, 4, 0, 0).unwrap();

    let counts = particles(start, end);
    assert_eq!(counts.days, 1);
    assert_eq!(counts.hours, 23);
}

#[test]
fn single_scale_query_accepts_plural_and_mixed_case() {
    let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();

    assert_eq!(particles_for_scale(start, end, "day").unwrap(), 365);
    assert_eq!(particles_for_scale(start, end, "Days").unwrap(), 365);
    assert_eq!(particles_for_scale(start, end, "WEEKS").unwrap(), 53);
    assert_eq!(particles_for_scale(start, end, "weekdays").unwrap(), 365);
}

#[test]
fn single_scale_query_rejects_unknown_scales() {
    let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let err = particles_for_scale(t, t, "decade").expect_err("unknown scale");
    assert_eq!(
        err,
        TimelineError::UnsupportedScale {
            scale: "decade".to_owned()
        }
    );
}
