use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Pixel viewport of the event canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pre-computed pixel rectangle of one event node.
///
/// `y`, `width`, and `height` are optional because point events and events
/// still waiting on row assignment carry partial geometry; classification and
/// sorting fall back to `y = 0` and unit dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventRect {
    pub x: f64,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl EventRect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y: Some(y),
            width: Some(width),
            height: Some(height),
        }
    }
}

/// Temporal extent of one event, in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTemporalBounds {
    pub start_epoch_ms: i64,
    pub end_epoch_ms: i64,
}

/// Classification of one event against the visible range and row band.
///
/// Computed per render pass and never cached, since geometry changes on
/// reload and resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventGeometryVerdict {
    pub start_before_range: bool,
    pub start_after_range: bool,
    pub end_before_range: bool,
    pub end_after_range: bool,
    pub above_row_band: bool,
    pub beyond_row_band: bool,
    pub is_out_of_range: bool,
    pub is_out_of_rows: bool,
    pub is_enabled: bool,
}

/// Classifies an event rectangle and its temporal bounds against the
/// viewport and displayed range.
///
/// Each edge flag fires on the pixel-geometry test or the timestamp test;
/// either signal alone is sufficient, trusting whichever reads out-of-range.
/// A zero-width (or zero-height) visible remainder, with the edge exactly on
/// the boundary, counts as out. A degenerate viewport (see
/// [`Viewport::is_valid`]) has an empty row band, so no event is enabled;
/// only the timestamp flags are consulted there.
#[must_use]
pub fn classify_event(
    rect: EventRect,
    bounds: EventTemporalBounds,
    viewport: Viewport,
    range_start_ms: i64,
    range_end_ms: i64,
) -> EventGeometryVerdict {
    if !viewport.is_valid() {
        let start_after_range = bounds.start_epoch_ms >= range_end_ms;
        let end_before_range = bounds.end_epoch_ms <= range_start_ms;
        return EventGeometryVerdict {
            start_before_range: bounds.start_epoch_ms < range_start_ms,
            start_after_range,
            end_before_range,
            end_after_range: bounds.end_epoch_ms > range_end_ms,
            above_row_band: false,
            beyond_row_band: true,
            is_out_of_range: start_after_range || end_before_range,
            is_out_of_rows: true,
            is_enabled: false,
        };
    }

    let width = rect.width.unwrap_or(1.0);
    let height = rect.height.unwrap_or(1.0);
    let y = rect.y.unwrap_or(0.0);
    let viewport_w = f64::from(viewport.width);
    let viewport_h = f64::from(viewport.height);

    let start_before_range = rect.x < 0.0 || bounds.start_epoch_ms < range_start_ms;
    let start_after_range = rect.x >= viewport_w || bounds.start_epoch_ms >= range_end_ms;
    let end_before_range = rect.x + width <= 0.0 || bounds.end_epoch_ms <= range_start_ms;
    let end_after_range = rect.x + width > viewport_w || bounds.end_epoch_ms > range_end_ms;

    let above_row_band = y + height <= 0.0;
    let beyond_row_band = y >= viewport_h;

    let is_out_of_range = start_after_range || end_before_range;
    let is_out_of_rows = above_row_band || beyond_row_band;

    EventGeometryVerdict {
        start_before_range,
        start_after_range,
        end_before_range,
        end_after_range,
        above_row_band,
        beyond_row_band,
        is_out_of_range,
        is_out_of_rows,
        is_enabled: !is_out_of_range && !is_out_of_rows,
    }
}

/// Deterministic paint-order comparator for overlapping events.
///
/// Primary key is descending vertical position, tie-broken by descending
/// rectangle area, which stacks events bottom-to-top and large-to-small
/// without a separate z-index model. Missing `y` sorts as `0`; missing
/// dimensions default to 1.
#[must_use]
pub fn render_order(a: &EventRect, b: &EventRect) -> Ordering {
    let y_a = OrderedFloat(a.y.unwrap_or(0.0));
    let y_b = OrderedFloat(b.y.unwrap_or(0.0));
    y_b.cmp(&y_a)
        .then_with(|| OrderedFloat(area(b)).cmp(&OrderedFloat(area(a))))
}

pub fn sort_for_render(events: &mut [EventRect]) {
    events.sort_by(render_order);
}

fn area(rect: &EventRect) -> f64 {
    rect.width.unwrap_or(1.0) * rect.height.unwrap_or(1.0)
}
