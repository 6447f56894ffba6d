pub mod events;
pub mod range;
pub mod ruler;

pub use events::{
    EventGeometryVerdict, EventRect, EventTemporalBounds, Viewport, classify_event, render_order,
    sort_for_render,
};
pub use range::{
    Clock, EndDirective, FixedClock, StartDirective, SystemClock, TimelineRange, resolve_end,
    resolve_range, resolve_range_for, resolve_start,
};
pub use ruler::{CellDecoration, RulerCell, ruler_cells, ruler_cells_for};
