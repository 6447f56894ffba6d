pub mod arithmetic;
pub mod names;
pub mod parse;
pub mod particles;
pub mod record;
pub mod scale;
pub mod zone;

pub use arithmetic::{add_units, truncate_to_scale};
pub use names::NameTable;
pub use parse::{TimeInput, parse, parse_in_zone};
pub use particles::{Particles, particles, particles_for_scale};
pub use record::TemporalRecord;
pub use scale::Scale;
pub use zone::{ZoneContext, resolve_zone, zone_offset_millis, zone_offset_millis_for};
