use chrono::{Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use timeline_rs::core::record::SECONDS_FROM_CE_TO_UNIX_EPOCH;
use timeline_rs::core::{NameTable, TimeInput, ZoneContext, parse, parse_in_zone};

fn names() -> NameTable {
    NameTable::default()
}

#[test]
fn iso_text_with_z_suffix_is_utc() {
    let record = parse(
        TimeInput::Text("2024-05-01T10:30:15.250Z"),
        ZoneContext::default(),
        &names(),
    )
    .expect("parsable");

    let expected = Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 15).unwrap() + Duration::milliseconds(250);
    assert_eq!(record.instant(), expected);
    assert_eq!(record.year, 2024);
    assert_eq!(record.month, 5);
    assert_eq!(record.month_name, "May");
    assert_eq!(record.day, 1);
    assert_eq!(record.weekday, "Wednesday");
    assert_eq!(record.hours, 10);
    assert_eq!(record.minutes, 30);
    assert_eq!(record.seconds, 15);
    assert_eq!(record.milliseconds, 250);
    assert_eq!(record.iso_string, "2024-05-01T10:30:15.250+00:00");
    assert_eq!(record.epoch_seconds, expected.timestamp());
    assert_eq!(
        record.epoch_seconds_ce,
        expected.timestamp() + SECONDS_FROM_CE_TO_UNIX_EPOCH
    );
}

#[test]
fn iso_text_with_explicit_offset_is_anchored_through_it() {
    let record = parse(
        TimeInput::Text("2024-05-01T10:00:00+05:45"),
        ZoneContext::default(),
        &names(),
    )
    .expect("parsable");

    assert_eq!(
        record.instant(),
        Utc.with_ymd_and_hms(2024, 5, 1, 4, 15, 0).unwrap()
    );
}

#[test]
fn iso_text_without_offset_is_ambient_zone_local() {
    let ambient: Tz = "America/New_York".parse().unwrap();
    let zones = ZoneContext::default().with_ambient(ambient);
    let record = parse(TimeInput::Text("2024-01-15 12:00"), zones, &names()).expect("parsable");

    assert_eq!(
        record.instant(),
        Utc.with_ymd_and_hms(2024, 1, 15, 17, 0, 0).unwrap()
    );
}

#[test]
fn slash_separators_and_date_only_forms_parse() {
    let record = parse(
        TimeInput::Text("2024/05/01"),
        ZoneContext::default(),
        &names(),
    )
    .expect("parsable");

    assert_eq!(
        record.instant(),
        Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()
    );
}

#[test]
fn epoch_millis_are_always_utc() {
    let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let zones = ZoneContext::for_zone("Asia/Tokyo").unwrap();
    let record = parse(
        TimeInput::EpochMillis(expected.timestamp_millis() as f64),
        zones,
        &names(),
    )
    .expect("parsable");

    // Projection into the display zone shifts the local fields, not the instant.
    assert_eq!(record.instant(), expected);
    assert_eq!(record.day, 1);
    assert_eq!(record.hours, 9);
    assert!(record.iso_string.ends_with("+09:00"));
}

#[test]
fn local_fields_input_rebases_through_ambient_zone() {
    let ambient: Tz = "America/New_York".parse().unwrap();
    let zones = ZoneContext::default().with_ambient(ambient);
    let naive = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let record = parse(TimeInput::LocalFields(naive), zones, &names()).expect("parsable");
    assert_eq!(
        record.instant(),
        Utc.with_ymd_and_hms(2024, 1, 15, 17, 0, 0).unwrap()
    );
}

#[test]
fn permissive_fallback_parses_common_layouts() {
    let long_form = parse(
        TimeInput::Text("January 2, 2024"),
        ZoneContext::default(),
        &names(),
    )
    .expect("parsable");
    assert_eq!(
        long_form.instant(),
        Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()
    );

    let rfc2822 = parse(
        TimeInput::Text("Wed, 01 May 2024 10:00:00 +0900"),
        ZoneContext::default(),
        &names(),
    )
    .expect("parsable");
    assert_eq!(
        rfc2822.instant(),
        Utc.with_ymd_and_hms(2024, 5, 1, 1, 0, 0).unwrap()
    );
}

#[test]
fn malformed_input_is_inert_not_an_error() {
    let zones = ZoneContext::default();
    assert!(parse(TimeInput::Text("not a date"), zones, &names()).is_none());
    assert!(parse(TimeInput::Text(""), zones, &names()).is_none());
    assert!(parse(TimeInput::Text("2024-13-45"), zones, &names()).is_none());
    assert!(parse(TimeInput::EpochMillis(f64::NAN), zones, &names()).is_none());
    assert!(parse(TimeInput::EpochMillis(f64::INFINITY), zones, &names()).is_none());
}

#[test]
fn bad_zone_on_string_entry_point_is_an_error() {
    let result = parse_in_zone(TimeInput::Text("2024-05-01"), "Nowhere/Null", &names());
    assert!(result.is_err());

    let parsed = parse_in_zone(TimeInput::Text("2024-05-01"), "UTC", &names()).unwrap();
    assert!(parsed.is_some());
}

#[test]
fn padded_accessors_zero_fill_to_width() {
    let record = parse(
        TimeInput::Text("2024-05-01T07:08:09.012Z"),
        ZoneContext::default(),
        &names(),
    )
    .expect("parsable");

    assert_eq!(record.year_text(4), "2024");
    assert_eq!(record.month_text(2), "05");
    assert_eq!(record.day_text(2), "01");
    assert_eq!(record.hours_text(2), "07");
    assert_eq!(record.minutes_text(2), "08");
    assert_eq!(record.seconds_text(2), "09");
    assert_eq!(record.milliseconds_text(3), "012");
    assert_eq!(record.week_number_text(2), "18");
}

#[test]
fn abbreviation_appends_period_only_when_shorter() {
    let january = parse(
        TimeInput::Text("2024-01-10"),
        ZoneContext::default(),
        &names(),
    )
    .expect("parsable");
    assert_eq!(january.month_name_abbrev(3), "Jan.");
    assert_eq!(january.month_name_abbrev(20), "January");
    assert_eq!(january.weekday_abbrev(3), "Wed.");

    let may = parse(
        TimeInput::Text("2024-05-10"),
        ZoneContext::default(),
        &names(),
    )
    .expect("parsable");
    // "May" is already three characters; no truncation, no period.
    assert_eq!(may.month_name_abbrev(3), "May");
}

#[test]
fn caller_supplied_name_tables_override_defaults() {
    let table = NameTable {
        months: (1..=12).map(|m| format!("m{m}")).collect(),
        days: (0..7).map(|d| format!("d{d}")).collect(),
    };
    let record = parse(TimeInput::Text("2024-05-01"), ZoneContext::default(), &table)
        .expect("parsable");

    assert_eq!(record.month_name, "m5");
    // 2024-05-01 is a Wednesday; the table is Sunday-first.
    assert_eq!(record.weekday, "d3");
}
