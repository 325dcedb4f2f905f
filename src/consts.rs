/// First BS year present in the month-length table (inclusive)
pub const BS_MIN_YEAR: u16 = 2000;
/// Last BS year present in the month-length table (inclusive)
pub const BS_MAX_YEAR: u16 = 2090;

/// First AD year touched by the table (only from the epoch onward)
pub const AD_MIN_YEAR: u16 = 1943;
/// Last AD year touched by the table (only up to the last BS day)
pub const AD_MAX_YEAR: u16 = 2034;

/// Epoch correspondence: BS 2000-01-01 is AD 1943-04-14
pub const BS_EPOCH: (u16, u8, u8) = (2000, 1, 1);
/// AD side of the epoch correspondence
pub const AD_EPOCH: (u16, u8, u8) = (1943, 4, 14);
/// Weekday of the epoch, Sunday = 0 (1943-04-14 was a Wednesday)
pub const EPOCH_WEEKDAY: u8 = 3;

/// Months per year in both calendars
pub const MONTHS_IN_YEAR: u8 = 12;
/// Days per week
pub const DAYS_IN_WEEK: u8 = 7;
/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const AD_DAYS_IN_MONTH: [u8; 13] = [
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
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// BS month in which the fiscal year starts (Shrawan)
pub const FISCAL_YEAR_START_MONTH: u8 = 4;
/// BS month in which the fiscal year ends (Asar)
pub const FISCAL_YEAR_END_MONTH: u8 = 3;
/// Century added to two-digit fiscal-year suffixes
pub const BS_CENTURY: u16 = 2000;

/// First day of the AD week (Monday, Sunday = 0)
pub const AD_WEEK_START: u8 = 1;
/// First day of the BS week (Aitabar, Sunday = 0)
pub const BS_WEEK_START: u8 = 0;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Alternate date component separator (`2000/03/13`)
pub const ALT_DATE_SEPARATOR: char = '/';
/// Separator between the two years of a fiscal-year name (`2077/78`)
pub const FISCAL_NAME_SEPARATOR: char = '/';

pub const AD_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const AD_WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const BS_MONTH_NAMES: [&str; 12] = [
    "Baisakh", "Jestha", "Asar", "Shrawan", "Bhadra", "Ashwin", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

pub const BS_WEEKDAY_NAMES: [&str; 7] = [
    "Aitabar",
    "Sombar",
    "Mangalbar",
    "Budhbar",
    "Bihibar",
    "Sukrabar",
    "Sanibar",
];
