use crate::calendar::day_ceiling;
use crate::consts::{MAX_HOUR, MAX_MINUTE, MAX_SECOND, MAX_YEAR, MIN_DAY, MIN_YEAR};
use crate::outcome::{DateOutcome, TimeOutcome};

/// Validates a calendar date for the clock's supported span.
///
/// Checks run in order year, month, day; the first failing field is reported.
pub const fn validate_date(year: u16, month: u8, day: u8) -> DateOutcome {
    if year < MIN_YEAR || year > MAX_YEAR {
        return DateOutcome::InvalidYear;
    }

    let Some(ceiling) = day_ceiling(year, month) else {
        return DateOutcome::InvalidMonth;
    };

    if day < MIN_DAY || day > ceiling {
        return DateOutcome::InvalidDay;
    }

    DateOutcome::Valid
}

/// Validates a 24-hour clock time.
///
/// Checks run in order hour, minute, second; the first failing field is reported.
pub const fn validate_time(hour: u8, minute: u8, second: u8) -> TimeOutcome {
    if hour > MAX_HOUR {
        return TimeOutcome::InvalidHour;
    }

    if minute > MAX_MINUTE {
        return TimeOutcome::InvalidMinute;
    }

    if second > MAX_SECOND {
        return TimeOutcome::InvalidSecond;
    }

    TimeOutcome::Valid
}
