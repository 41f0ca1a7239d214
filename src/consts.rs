/// Earliest year accepted by the date validator (inclusive)
pub const MIN_YEAR: u16 = 2000;
/// Latest year accepted by the date validator (inclusive)
pub const MAX_YEAR: u16 = 2100;

/// Month number for January
pub const MIN_MONTH: u8 = 1;
/// Month number for December
pub const MAX_MONTH: u8 = 12;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month of a non-leap year, indexed by `month - 1`.
/// February's entry is replaced by the leap-year adjustment.
pub const DAYS_IN_MONTH: [u8; 12] = [
    31, // January
    28, // February
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Last hour of the day on a 24-hour clock
pub const MAX_HOUR: u8 = 23;
/// Last minute of the hour
pub const MAX_MINUTE: u8 = 59;
/// Last second of the minute (no leap seconds)
pub const MAX_SECOND: u8 = 59;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;
