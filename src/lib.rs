mod calendar;
mod consts;
mod outcome;
mod prelude;
mod types;
mod validator;

pub use calendar::{day_ceiling, is_leap_year};
pub use consts::*;
pub use outcome::{DateOutcome, TimeOutcome};
pub use types::{Date, DateTime, Time};
pub use validator::{validate_date, validate_time};

/// Error type for callers that propagate invalid input with `?`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(u16),

    #[error("Invalid month: {0} (must be {min}-{max})", min = MIN_MONTH, max = MAX_MONTH)]
    InvalidMonth(u8),

    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    #[error("Invalid hour: {0} (must be 0-{max})", max = MAX_HOUR)]
    InvalidHour(u8),

    #[error("Invalid minute: {0} (must be 0-{max})", max = MAX_MINUTE)]
    InvalidMinute(u8),

    #[error("Invalid second: {0} (must be 0-{max})", max = MAX_SECOND)]
    InvalidSecond(u8),

    /// Numeric outcome code with no matching outcome.
    #[error("Unknown outcome code: {0}")]
    UnknownCode(u8),
}
