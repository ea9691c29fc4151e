use thiserror::Error;

/// Errors returned by the public calendar functions.
///
/// Only caller-side precondition violations are reported here. Broken static
/// data (an empty day, an anchor that fails to compute) is a bug and panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("unknown locale '{0}' (expected one of: es, la)")]
    UnknownLocale(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
