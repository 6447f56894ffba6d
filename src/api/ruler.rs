use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::core::add_units;
use crate::core::names::NameTable;
use crate::core::record::TemporalRecord;
use crate::core::scale::Scale;
use crate::core::zone::ZoneContext;
use crate::error::{TimelineError, TimelineResult};

/// One rendered ruler label, spanning `span` contiguous base columns that
/// share the same grouping `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulerCell {
    pub key: String,
    pub span: u32,
    pub content: String,
}

/// Caller-supplied label decoration for one ruler row.
///
/// `replacer` holds one `{}` placeholder; when present it overrides
/// `prefix`/`suffix`. `abbrev` shortens name-based content (month and
/// weekday rows) per the period convention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellDecoration {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub replacer: Option<String>,
    pub abbrev: Option<usize>,
}

/// Walks `total_columns` columns of `global_scale` starting at `start` and
/// emits the merged label cells for one ruler row at `scale`.
///
/// Consecutive columns with an identical grouping key collapse into one cell;
/// the emitted spans always sum to exactly `total_columns` and cells are in
/// strict chronological order.
#[must_use]
pub fn ruler_cells(
    scale: Scale,
    start: DateTime<Utc>,
    global_scale: Scale,
    zones: ZoneContext,
    total_columns: u32,
    decoration: Option<&CellDecoration>,
    names: &NameTable,
) -> Vec<RulerCell> {
    let mut cells: Vec<RulerCell> = Vec::new();
    let mut current: Option<RulerCell> = None;

    for index in 0..total_columns {
        let instant = add_units(start, i64::from(index), global_scale, zones.display);
        let record = TemporalRecord::project(instant, zones.display, names);
        let (key, content) = cell_identity(scale, &record, zones.display, decoration);

        match current.as_mut() {
            Some(cell) if cell.key == key => cell.span += 1,
            _ => {
                if let Some(finished) = current.take() {
                    cells.push(finished);
                }
                current = Some(RulerCell {
                    key,
                    span: 1,
                    content: decorate(content, decoration),
                });
            }
        }
    }

    if let Some(finished) = current {
        cells.push(finished);
    }

    tracing::trace!(
        scale = scale.as_str(),
        global_scale = global_scale.as_str(),
        total_columns,
        cells = cells.len(),
        "merged ruler cells"
    );
    cells
}

/// String-option entry point for one ruler row.
///
/// An unrecognized scale, global scale, or zone is a configuration error,
/// never silently empty output.
pub fn ruler_cells_for(
    raw_scale: &str,
    start: DateTime<Utc>,
    raw_global_scale: &str,
    zone_id: &str,
    total_columns: u32,
    decoration: Option<&CellDecoration>,
    names: &NameTable,
) -> TimelineResult<Vec<RulerCell>> {
    let scale = Scale::resolve(raw_scale)?;
    let global_scale = Scale::resolve(raw_global_scale)?;
    let zones = ZoneContext::for_zone(zone_id)?;
    Ok(ruler_cells(
        scale,
        start,
        global_scale,
        zones,
        total_columns,
        decoration,
        names,
    ))
}

/// Grouping key and raw (undecorated) label content for one column.
fn cell_identity(
    scale: Scale,
    record: &TemporalRecord,
    tz: Tz,
    decoration: Option<&CellDecoration>,
) -> (String, String) {
    let abbrev = decoration.and_then(|d| d.abbrev);
    match scale {
        Scale::Year => (record.year_text(4), record.year.to_string()),
        Scale::Month => {
            let key = format!("{}-{}", record.year, record.month_text(2));
            let content = match abbrev {
                Some(len) => record.month_name_abbrev(len),
                None => record.month_name.clone(),
            };
            (key, content)
        }
        Scale::Week => {
            // ISO week-years diverge from calendar years around January 1,
            // so the key uses the week-based year to keep one week in one
            // cell across the boundary.
            let iso = record.instant().with_timezone(&tz).iso_week();
            let key = format!("{},{:02}", iso.year(), iso.week());
            (key, iso.week().to_string())
        }
        Scale::Weekday => {
            let local = record.instant().with_timezone(&tz);
            let key = format!(
                "{}-{}-{},{}",
                record.year,
                record.month,
                record.day,
                local.weekday().to_string().to_ascii_lowercase()
            );
            let content = match abbrev {
                Some(len) => record.weekday_abbrev(len),
                None => record.weekday.clone(),
            };
            (key, content)
        }
        Scale::Day => {
            let key = format!("{}-{}-{}", record.year, record.month, record.day);
            (key, record.day.to_string())
        }
        Scale::Hour => (date_clock_key(record, 1), record.hours_text(2)),
        Scale::Minute => (date_clock_key(record, 2), record.minutes_text(2)),
        Scale::Second => (date_clock_key(record, 3), record.seconds_text(2)),
        Scale::Millisecond => {
            let key = format!("{},{}", date_clock_key(record, 3), record.milliseconds);
            (key, record.milliseconds_text(3))
        }
    }
}

/// `YYYY-M-D,H[:M[:S]]` keys for the clock scales.
fn date_clock_key(record: &TemporalRecord, clock_fields: u8) -> String {
    let mut key = format!(
        "{}-{}-{},{}",
        record.year, record.month, record.day, record.hours
    );
    if clock_fields >= 2 {
        key.push_str(&format!(":{}", record.minutes));
    }
    if clock_fields >= 3 {
        key.push_str(&format!(":{}", record.seconds));
    }
    key
}

fn decorate(content: String, decoration: Option<&CellDecoration>) -> String {
    let Some(decoration) = decoration else {
        return content;
    };

    if let Some(replacer) = decoration.replacer.as_deref() {
        if replacer.contains("{}") {
            return replacer.replacen("{}", &content, 1);
        }
    }

    format!(
        "{}{}{}",
        decoration.prefix.as_deref().unwrap_or(""),
        content,
        decoration.suffix.as_deref().unwrap_or("")
    )
}
