use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimelineError {
    #[error("unrecognized time zone: {zone}")]
    InvalidTimeZone { zone: String },

    #[error("unsupported scale: {scale}")]
    UnsupportedScale { scale: String },

    #[error("unparsable range directive: {directive}")]
    UnparsableDirective { directive: String },

    #[error("`auto` range end requires a resolved start")]
    MissingRangeStart,
}
