use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MIN_MONTH,
};

/// Proleptic Gregorian leap year rule.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Maximum valid day of `month` in `year`, accounting for leap Februaries.
///
/// Returns `None` if `month` is outside `MIN_MONTH..=MAX_MONTH`.
pub const fn day_ceiling(year: u16, month: u8) -> Option<u8> {
    if month < MIN_MONTH || month > MAX_MONTH {
        return None;
    }

    if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[(month - MIN_MONTH) as usize])
    }
}
