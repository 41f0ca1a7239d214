use crate::ValidationError;
use crate::outcome::{DateOutcome, TimeOutcome};
use crate::prelude::*;
use crate::validator::{validate_date, validate_time};
use serde::{Deserialize, Serialize};

/// A calendar date entered for a manual time-set, not yet validated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

/// A 24-hour clock time entered for a manual time-set, not yet validated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[display(fmt = "{hour:02}:{minute:02}:{second:02}")]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// A date and time set together, as a time-set screen submits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{date} {time}")]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
}

impl Date {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub const fn validate(&self) -> DateOutcome {
        validate_date(self.year, self.month, self.day)
    }

    /// Validates the date, reporting the first invalid field as an error.
    ///
    /// # Errors
    /// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay` carrying the rejected values.
    pub fn check(&self) -> Result<(), ValidationError> {
        match self.validate() {
            DateOutcome::Valid => Ok(()),
            DateOutcome::InvalidYear => Err(ValidationError::InvalidYear(self.year)),
            DateOutcome::InvalidMonth => Err(ValidationError::InvalidMonth(self.month)),
            DateOutcome::InvalidDay => Err(ValidationError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
            }),
        }
    }
}

impl Time {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    pub const fn validate(&self) -> TimeOutcome {
        validate_time(self.hour, self.minute, self.second)
    }

    /// Validates the time, reporting the first invalid field as an error.
    ///
    /// # Errors
    /// Returns `InvalidHour`, `InvalidMinute` or `InvalidSecond` carrying the rejected value.
    pub fn check(&self) -> Result<(), ValidationError> {
        match self.validate() {
            TimeOutcome::Valid => Ok(()),
            TimeOutcome::InvalidHour => Err(ValidationError::InvalidHour(self.hour)),
            TimeOutcome::InvalidMinute => Err(ValidationError::InvalidMinute(self.minute)),
            TimeOutcome::InvalidSecond => Err(ValidationError::InvalidSecond(self.second)),
        }
    }
}

impl DateTime {
    pub const fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Validates the date first, then the time.
    ///
    /// # Errors
    /// Returns the error for the first invalid field.
    pub fn check(&self) -> Result<(), ValidationError> {
        self.date.check()?;
        self.time.check()
    }
}
