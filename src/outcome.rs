use crate::ValidationError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Result of validating a calendar date.
///
/// Discriminants are the numeric codes callers branch on; code 1 is unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum DateOutcome {
    #[display(fmt = "valid")]
    Valid = 0,
    /// Year outside `MIN_YEAR..=MAX_YEAR`
    #[display(fmt = "invalid year")]
    InvalidYear = 2,
    /// Month outside `MIN_MONTH..=MAX_MONTH`
    #[display(fmt = "invalid month")]
    InvalidMonth = 3,
    /// Day outside `1..=day_ceiling(year, month)`
    #[display(fmt = "invalid day")]
    InvalidDay = 4,
}

/// Result of validating a clock time.
///
/// Discriminants are the numeric codes callers branch on; code 1 is unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum TimeOutcome {
    #[display(fmt = "valid")]
    Valid = 0,
    #[display(fmt = "invalid hour")]
    InvalidHour = 2,
    #[display(fmt = "invalid minute")]
    InvalidMinute = 3,
    #[display(fmt = "invalid second")]
    InvalidSecond = 4,
}

impl DateOutcome {
    /// Numeric compatibility code for this outcome
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl TimeOutcome {
    /// Numeric compatibility code for this outcome
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl TryFrom<u8> for DateOutcome {
    type Error = ValidationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Valid),
            2 => Ok(Self::InvalidYear),
            3 => Ok(Self::InvalidMonth),
            4 => Ok(Self::InvalidDay),
            _ => Err(ValidationError::UnknownCode(code)),
        }
    }
}

impl From<DateOutcome> for u8 {
    fn from(outcome: DateOutcome) -> Self {
        outcome.code()
    }
}

impl TryFrom<u8> for TimeOutcome {
    type Error = ValidationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Valid),
            2 => Ok(Self::InvalidHour),
            3 => Ok(Self::InvalidMinute),
            4 => Ok(Self::InvalidSecond),
            _ => Err(ValidationError::UnknownCode(code)),
        }
    }
}

impl From<TimeOutcome> for u8 {
    fn from(outcome: TimeOutcome) -> Self {
        outcome.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_codes() {
        assert_eq!(DateOutcome::Valid.code(), 0);
        assert_eq!(DateOutcome::InvalidYear.code(), 2);
        assert_eq!(DateOutcome::InvalidMonth.code(), 3);
        assert_eq!(DateOutcome::InvalidDay.code(), 4);
    }

    #[test]
    fn test_time_codes() {
        assert_eq!(TimeOutcome::Valid.code(), 0);
        assert_eq!(TimeOutcome::InvalidHour.code(), 2);
        assert_eq!(TimeOutcome::InvalidMinute.code(), 3);
        assert_eq!(TimeOutcome::InvalidSecond.code(), 4);
    }

    #[test]
    fn test_try_from_known_codes() {
        let outcome: DateOutcome = 4.try_into().unwrap();
        assert_eq!(outcome, DateOutcome::InvalidDay);

        let outcome: TimeOutcome = 0.try_into().unwrap();
        assert_eq!(outcome, TimeOutcome::Valid);
    }

    #[test]
    fn test_try_from_unknown_codes() {
        for code in [1, 5, 42, u8::MAX] {
            assert_eq!(
                DateOutcome::try_from(code),
                Err(ValidationError::UnknownCode(code))
            );
            assert_eq!(
                TimeOutcome::try_from(code),
                Err(ValidationError::UnknownCode(code))
            );
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(DateOutcome::Valid.is_valid());
        assert!(!DateOutcome::InvalidMonth.is_valid());
        assert!(TimeOutcome::Valid.is_valid());
        assert!(!TimeOutcome::InvalidSecond.is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(DateOutcome::Valid.to_string(), "valid");
        assert_eq!(DateOutcome::InvalidYear.to_string(), "invalid year");
        assert_eq!(TimeOutcome::InvalidMinute.to_string(), "invalid minute");
    }

    #[test]
    fn test_serde_as_code() {
        let json = serde_json::to_string(&DateOutcome::InvalidMonth).unwrap();
        assert_eq!(json, "3");
        let parsed: DateOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DateOutcome::InvalidMonth);

        let json = serde_json::to_string(&TimeOutcome::Valid).unwrap();
        assert_eq!(json, "0");
    }

    #[test]
    fn test_serde_rejects_unknown_code() {
        let result: Result<TimeOutcome, _> = serde_json::from_str("1");
        assert!(result.is_err());

        let result: Result<DateOutcome, _> = serde_json::from_str("7");
        assert!(result.is_err());
    }
}
