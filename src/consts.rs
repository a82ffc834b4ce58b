/// Earliest year with holiday data (inclusive)
pub const MIN_YEAR: i32 = 2000;

/// Latest year with holiday data (inclusive)
pub const MAX_YEAR: i32 = 2050;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Year range separator, as in `2020/2024`
pub const RANGE_SEPARATOR: char = '/';

/// First year Juneteenth closes the market
pub const JUNETEENTH_FIRST_YEAR: i32 = 2021;

/// Monthly options expire on this occurrence of Friday in the month
pub const EXPIRATION_FRIDAY_ORDINAL: u8 = 3;

/// Good Friday falls this many days before Easter Sunday
pub const GOOD_FRIDAY_OFFSET_DAYS: u64 = 2;
