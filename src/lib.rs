//! Conversion between the Bikram Sambat (BS) and Gregorian (AD) calendars,
//! and Nepali fiscal years built on top of it.
//!
//! BS month lengths vary from year to year, so all BS arithmetic is driven by
//! a month-length table covering BS 2000..=2090. Dates outside that span are
//! rejected rather than guessed.
//!
//! ```
//! use nepali_calendar::{ad_to_bs, bs_to_ad, FiscalYear};
//!
//! let bs = ad_to_bs(2015, 9, 9).unwrap();
//! assert_eq!(bs.to_string(), "Budhbar, 23 Bhadra, 2072");
//!
//! let ad = bs_to_ad("2072", "04", "01").unwrap();
//! assert_eq!(ad.to_string(), "2015-07-17");
//!
//! let fy = FiscalYear::fiscal_year_for_bs_date(2077, 3, 29).unwrap();
//! assert_eq!(fy.to_string(), "7677");
//! ```

mod calendar;
mod consts;
mod date;
mod error;
mod fiscal_year;
mod period;
mod prelude;
mod table;
mod types;

pub use calendar::{Ad, Bs, Calendar};
pub use consts::*;
pub use date::{AdDate, BsDate, Date};
pub use error::{CalendarError, CalendarKind, InvalidReason};
pub use fiscal_year::FiscalYear;
pub use period::FiscalYearPeriod;
pub use table::{days_in_month, days_in_year, month_lengths, year_exists};
pub use types::{DateField, DatePart, ad_days_in_month, is_leap_year};

/// Converts an AD date to BS.
///
/// Accepts numbers or numeric strings for each field.
///
/// # Errors
/// `MissingDateField` if any field is blank, checked first; otherwise
/// `InvalidDate` with `CalendarKind::Ad` if the AD date is not valid or lies
/// outside the table's coverage.
pub fn ad_to_bs(
    year: impl Into<DatePart>,
    month: impl Into<DatePart>,
    day: impl Into<DatePart>,
) -> Result<BsDate, CalendarError> {
    Ad::date(year, month, day)?.to_bs()
}

/// Converts a BS date to AD.
///
/// Accepts numbers or numeric strings for each field.
///
/// # Errors
/// `MissingDateField` if any field is blank, checked first; otherwise
/// `InvalidDate` with `CalendarKind::Bs` if the BS date is not in the table.
pub fn bs_to_ad(
    year: impl Into<DatePart>,
    month: impl Into<DatePart>,
    day: impl Into<DatePart>,
) -> Result<AdDate, CalendarError> {
    Bs::date(year, month, day)?.to_ad()
}
