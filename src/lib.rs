//! timeline-rs: temporal-geometric kernel for interactive timeline widgets.
//!
//! This crate provides the pure, deterministic computation layer behind a
//! timeline widget: canonical time parsing, zone-aware calendar arithmetic,
//! ruler label cell generation, and event geometry classification. The
//! presentation layer (layout, styling, input handling) is a consumer of
//! this kernel and lives outside the crate.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{TimelineRange, resolve_range};
pub use core::Scale;
pub use error::{TimelineError, TimelineResult};
