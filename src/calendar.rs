//! The conversion engine.
//!
//! Each calendar counts days from the shared epoch (BS 2000-01-01 = AD
//! 1943-04-14) by walking its own month lengths. A date in one calendar maps
//! to the date in the other calendar with the same day count, so both
//! conversion directions reduce to `ordinal` followed by `from_ordinal`.

use crate::consts::{
    AD_EPOCH, AD_MAX_YEAR, AD_MIN_YEAR, AD_MONTH_NAMES, AD_WEEK_START, AD_WEEKDAY_NAMES,
    BS_EPOCH, BS_MAX_YEAR, BS_MIN_YEAR, BS_MONTH_NAMES, BS_WEEK_START, BS_WEEKDAY_NAMES,
    MIN_DAY, MONTHS_IN_YEAR,
};
use crate::date::{AdDate, Date};
use crate::error::{CalendarError, CalendarKind, InvalidReason};
use crate::table;
use crate::types::{DatePart, ad_days_in_month, parse_parts};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::trace;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Ad {}
    impl Sealed for super::Bs {}
}

/// Marker for the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ad;

/// Marker for the Bikram Sambat calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bs;

/// Operations shared by both calendars.
///
/// Implemented only by [`Ad`] and [`Bs`]. Dates are typed by their calendar
/// (`Date<Ad>` / `Date<Bs>`), so a date of one calendar can never be handed
/// to the other calendar's arithmetic.
pub trait Calendar:
    sealed::Sealed + Debug + Clone + Copy + PartialEq + Eq + PartialOrd + Ord + Hash + Default + 'static
{
    const KIND: CalendarKind;
    /// This calendar's side of the epoch correspondence
    const EPOCH: (u16, u8, u8);
    const MIN_YEAR: u16;
    const MAX_YEAR: u16;
    /// First weekday of the week, Sunday = 0
    const WEEK_START: u8;
    /// Added to the Sunday-based weekday when reporting `wday`
    const WEEKDAY_BASE: u8;
    const MONTH_NAMES: [&'static str; 12];
    const WEEKDAY_NAMES: [&'static str; 7];

    /// Number of days in `month` of `year`.
    ///
    /// # Errors
    /// `UnsupportedYear` when `year` is outside this calendar's bounds.
    fn days_in_month(year: u16, month: u8) -> Result<u8, CalendarError>;

    /// Returns true if `year` is within this calendar's bounds
    fn year_exists(year: u16) -> bool {
        (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year)
    }

    /// Sum of all month lengths of `year`.
    ///
    /// # Errors
    /// `UnsupportedYear` when `year` is outside this calendar's bounds.
    fn days_in_year(year: u16) -> Result<u16, CalendarError> {
        (1..=MONTHS_IN_YEAR)
            .map(|m| Self::days_in_month(year, m).map(u16::from))
            .sum()
    }

    /// Days from the start of the epoch year to the epoch itself.
    fn epoch_offset() -> Result<i32, CalendarError> {
        let (year, month, day) = Self::EPOCH;
        let mut offset = i32::from(day - MIN_DAY);
        for m in 1..month {
            offset += i32::from(Self::days_in_month(year, m)?);
        }
        Ok(offset)
    }

    /// Days elapsed from the epoch to `year-month-day`, summed over this
    /// calendar's month lengths.
    ///
    /// # Errors
    /// `UnsupportedYear` when the walk needs a year outside the bounds.
    fn ordinal(year: u16, month: u8, day: u8) -> Result<i32, CalendarError> {
        let (epoch_year, ..) = Self::EPOCH;
        if year < epoch_year {
            return Err(CalendarError::UnsupportedYear {
                calendar: Self::KIND,
                year,
            });
        }

        let mut days = 0_i32;
        for y in epoch_year..year {
            days += i32::from(Self::days_in_year(y)?);
        }
        for m in 1..month {
            days += i32::from(Self::days_in_month(year, m)?);
        }
        days += i32::from(day) - i32::from(MIN_DAY);

        Ok(days - Self::epoch_offset()?)
    }

    /// Expands a day count back into `(year, month, day)` by consuming whole
    /// years, then whole months, from the epoch onward.
    ///
    /// # Errors
    /// `UnsupportedYear` when the walk leaves this calendar's bounds.
    fn from_ordinal(ordinal: i32) -> Result<(u16, u8, u8), CalendarError> {
        let (mut year, ..) = Self::EPOCH;
        let mut remaining = ordinal.checked_add(Self::epoch_offset()?).ok_or(
            CalendarError::UnsupportedYear {
                calendar: Self::KIND,
                year:     Self::MAX_YEAR.saturating_add(1),
            },
        )?;
        if remaining < 0 {
            return Err(CalendarError::UnsupportedYear {
                calendar: Self::KIND,
                year: year - 1,
            });
        }

        loop {
            let len = i32::from(Self::days_in_year(year)?);
            if remaining < len {
                break;
            }
            remaining -= len;
            year += 1;
        }

        let mut month = 1;
        loop {
            let len = i32::from(Self::days_in_month(year, month)?);
            if remaining < len {
                break;
            }
            remaining -= len;
            month += 1;
        }

        trace!(calendar = %Self::KIND, ordinal, year, month, "expanded ordinal");

        // remaining < len <= 32 here
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let day = remaining as u8 + MIN_DAY;
        Ok((year, month, day))
    }

    /// Builds a date from raw year/month/day values (numbers or numeric
    /// strings).
    ///
    /// # Errors
    /// `MissingDateField` for blank input, otherwise `InvalidDate` naming this
    /// calendar.
    fn date(
        year: impl Into<DatePart>,
        month: impl Into<DatePart>,
        day: impl Into<DatePart>,
    ) -> Result<Date<Self>, CalendarError> {
        let (y, m, d) = parse_parts(Self::KIND, &year.into(), &month.into(), &day.into())?;
        Date::new(y, m, d)
    }

    /// True if the raw values form a date this calendar can convert.
    fn valid_date(
        year: impl Into<DatePart>,
        month: impl Into<DatePart>,
        day: impl Into<DatePart>,
    ) -> bool {
        Self::date(year, month, day).is_ok()
    }

    /// True if the date's year lies inside the span the month-length table
    /// covers. Use [`Calendar::year_exists`] to check a bare year.
    fn date_in_range(date: &Date<Self>) -> bool {
        Self::year_exists(date.year())
    }

    /// Signed number of days from `b` to `a` (`a - b`).
    fn total_days(a: &Date<Self>, b: &Date<Self>) -> i64 {
        i64::from(a.days_since_epoch()) - i64::from(b.days_since_epoch())
    }

    /// Today's date from the system clock, in this calendar.
    ///
    /// # Errors
    /// `InvalidDate` when the clock reads a date outside the table.
    fn today() -> Result<Date<Self>, CalendarError> {
        AdDate::from_clock()?.to_calendar()
    }
}

impl Calendar for Ad {
    const KIND: CalendarKind = CalendarKind::Ad;
    const EPOCH: (u16, u8, u8) = AD_EPOCH;
    const MIN_YEAR: u16 = AD_MIN_YEAR;
    const MAX_YEAR: u16 = AD_MAX_YEAR;
    const WEEK_START: u8 = AD_WEEK_START;
    const WEEKDAY_BASE: u8 = 0;
    const MONTH_NAMES: [&'static str; 12] = AD_MONTH_NAMES;
    const WEEKDAY_NAMES: [&'static str; 7] = AD_WEEKDAY_NAMES;

    fn days_in_month(year: u16, month: u8) -> Result<u8, CalendarError> {
        if !Self::year_exists(year) {
            return Err(CalendarError::UnsupportedYear {
                calendar: Self::KIND,
                year,
            });
        }
        if !(1..=MONTHS_IN_YEAR).contains(&month) {
            return Err(CalendarError::invalid(
                Self::KIND,
                format!("{year}-{month}"),
                InvalidReason::Month,
            ));
        }
        Ok(ad_days_in_month(year, month))
    }
}

impl Calendar for Bs {
    const KIND: CalendarKind = CalendarKind::Bs;
    const EPOCH: (u16, u8, u8) = BS_EPOCH;
    const MIN_YEAR: u16 = BS_MIN_YEAR;
    const MAX_YEAR: u16 = BS_MAX_YEAR;
    const WEEK_START: u8 = BS_WEEK_START;
    const WEEKDAY_BASE: u8 = 1;
    const MONTH_NAMES: [&'static str; 12] = BS_MONTH_NAMES;
    const WEEKDAY_NAMES: [&'static str; 7] = BS_WEEKDAY_NAMES;

    fn days_in_month(year: u16, month: u8) -> Result<u8, CalendarError> {
        table::days_in_month(year, month)
    }

    fn year_exists(year: u16) -> bool {
        table::year_exists(year)
    }

    fn days_in_year(year: u16) -> Result<u16, CalendarError> {
        table::days_in_year(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TOTAL_DAYS;

    #[test]
    fn test_epochs_are_day_zero() {
        assert_eq!(Bs::ordinal(2000, 1, 1).unwrap(), 0);
        assert_eq!(Ad::ordinal(1943, 4, 14).unwrap(), 0);
        assert_eq!(Bs::from_ordinal(0).unwrap(), BS_EPOCH);
        assert_eq!(Ad::from_ordinal(0).unwrap(), AD_EPOCH);
    }

    #[test]
    fn test_epoch_offsets() {
        assert_eq!(Bs::epoch_offset().unwrap(), 0);
        // Jan 31 + Feb 28 + Mar 31 + 13
        assert_eq!(Ad::epoch_offset().unwrap(), 103);
    }

    #[test]
    fn test_ordinals_agree_across_calendars() {
        let cases = [
            ((2072, 4, 1), (2015, 7, 17)),
            ((2072, 5, 23), (2015, 9, 9)),
            ((2077, 4, 1), (2020, 7, 16)),
            ((2079, 3, 32), (2022, 7, 16)),
            ((2081, 1, 1), (2024, 4, 13)),
        ];
        for ((by, bm, bd), (ay, am, ad)) in cases {
            assert_eq!(
                Bs::ordinal(by, bm, bd).unwrap(),
                Ad::ordinal(ay, am, ad).unwrap(),
                "BS {by}-{bm}-{bd} vs AD {ay}-{am}-{ad}"
            );
        }
    }

    #[test]
    fn test_from_ordinal_inverts_ordinal() {
        for ordinal in (0..TOTAL_DAYS).step_by(97) {
            let (y, m, d) = Bs::from_ordinal(ordinal).unwrap();
            assert_eq!(Bs::ordinal(y, m, d).unwrap(), ordinal);
            let (y, m, d) = Ad::from_ordinal(ordinal).unwrap();
            assert_eq!(Ad::ordinal(y, m, d).unwrap(), ordinal);
        }
    }

    #[test]
    fn test_from_ordinal_off_the_table() {
        assert!(matches!(
            Bs::from_ordinal(-1),
            Err(CalendarError::UnsupportedYear { year: 1999, .. })
        ));
        assert!(matches!(
            Bs::from_ordinal(TOTAL_DAYS),
            Err(CalendarError::UnsupportedYear { year: 2091, .. })
        ));
    }

    #[test]
    fn test_from_ordinal_at_integer_limits() {
        for ordinal in [i32::MIN, i32::MIN + 1, i32::MAX - 1, i32::MAX] {
            assert!(matches!(
                Ad::from_ordinal(ordinal),
                Err(CalendarError::UnsupportedYear {
                    calendar: CalendarKind::Ad,
                    ..
                })
            ));
            assert!(matches!(
                Bs::from_ordinal(ordinal),
                Err(CalendarError::UnsupportedYear {
                    calendar: CalendarKind::Bs,
                    ..
                })
            ));
        }
        assert!(matches!(
            Ad::from_ordinal(i32::MAX),
            Err(CalendarError::UnsupportedYear { year: 2035, .. })
        ));
    }

    #[test]
    fn test_ordinal_before_epoch_year() {
        assert!(matches!(
            Bs::ordinal(1999, 12, 30),
            Err(CalendarError::UnsupportedYear { .. })
        ));
        assert!(matches!(
            Ad::ordinal(1942, 1, 1),
            Err(CalendarError::UnsupportedYear { .. })
        ));
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(Ad::days_in_year(2016).unwrap(), 366);
        assert_eq!(Ad::days_in_year(2015).unwrap(), 365);
        assert_eq!(Bs::days_in_year(2073).unwrap(), 366);
        assert!(Ad::days_in_year(2040).is_err());
    }

    #[test]
    fn test_ad_days_in_month_bounds() {
        assert_eq!(Ad::days_in_month(2015, 2).unwrap(), 28);
        assert!(matches!(
            Ad::days_in_month(2015, 13),
            Err(CalendarError::InvalidDate {
                reason: InvalidReason::Month,
                ..
            })
        ));
        assert!(matches!(
            Ad::days_in_month(1900, 1),
            Err(CalendarError::UnsupportedYear { year: 1900, .. })
        ));
    }

    #[test]
    fn test_valid_date() {
        assert!(Bs::valid_date(2072, 5, 23));
        assert!(Bs::valid_date("2079", "3", "32"));
        assert!(!Bs::valid_date(2078, 3, 32));
        assert!(!Bs::valid_date(2072, 13, 1));
        assert!(!Bs::valid_date(2091, 1, 1));
        assert!(!Bs::valid_date("", "1", "1"));

        assert!(Ad::valid_date(2016, 2, 29));
        assert!(!Ad::valid_date(2015, 2, 29));
        assert!(!Ad::valid_date(1943, 4, 13));
        assert!(Ad::valid_date(1943, 4, 14));
    }

    #[test]
    fn test_date_in_range() {
        for (y, m, d) in [(2000, 1, 1), (2072, 5, 23), (2090, 12, 30)] {
            let date = Bs::date(y, m, d).unwrap();
            assert!(Bs::date_in_range(&date));
            assert!(date.in_range());
        }
        for (y, m, d) in [(1943, 4, 14), (2015, 9, 9), (2034, 4, 13)] {
            let date = Ad::date(y, m, d).unwrap();
            assert!(Ad::date_in_range(&date));
            assert!(date.in_range());
        }
    }

    #[test]
    fn test_year_exists() {
        assert!(Bs::year_exists(2000));
        assert!(Bs::year_exists(2090));
        assert!(!Bs::year_exists(1999));
        assert!(!Bs::year_exists(2091));
        assert!(Ad::year_exists(1943));
        assert!(Ad::year_exists(2034));
        assert!(!Ad::year_exists(1942));
        assert!(!Ad::year_exists(2035));
    }

    #[test]
    fn test_total_days_counts_within_calendar() {
        let a: Date<Bs> = "2000/03/13".parse().unwrap();
        let b: Date<Bs> = "2000/01/01".parse().unwrap();
        assert_eq!(Bs::total_days(&a, &b), 74);
        assert_eq!(Bs::total_days(&b, &a), -74);

        let a: Date<Ad> = "1944-02-13".parse().unwrap();
        let b: Date<Ad> = "1944-01-01".parse().unwrap();
        assert_eq!(Ad::total_days(&a, &b), 43);
    }

    #[test]
    fn test_total_days_over_full_year() {
        for year in [2000, 2072, 2073, 2079] {
            let first = Bs::date(year, 1, 1).unwrap();
            let next = Bs::date(year + 1, 1, 1).unwrap();
            assert_eq!(
                Bs::total_days(&next, &first),
                i64::from(Bs::days_in_year(year).unwrap())
            );
        }
    }

    #[test]
    fn test_today_matches_conversion_of_clock_date() {
        let ad = Ad::today().unwrap();
        let bs = Bs::today().unwrap();
        // The clock may tick over midnight between calls; allow one day.
        let drift = Ad::total_days(&bs.to_ad().unwrap(), &ad);
        assert!((0..=1).contains(&drift));
    }
}
