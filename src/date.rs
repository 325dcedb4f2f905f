use crate::calendar::{Ad, Bs, Calendar};
use crate::consts::{
    ALT_DATE_SEPARATOR, DATE_SEPARATOR, DAYS_IN_WEEK, EPOCH_WEEKDAY, MIN_DAY, MONTHS_IN_YEAR,
};
use crate::error::{CalendarError, CalendarKind, InvalidReason};
use crate::table::TOTAL_DAYS;
use crate::types::{DateField, DatePart, parse_parts};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use tracing::debug;

/// A validated date in calendar `C`.
///
/// Immutable; every navigation method returns a new value. Equality and
/// ordering are by `(year, month, day)`, and only between dates of the same
/// calendar.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date<C: Calendar> {
    year:      u16,
    month:     u8,
    day:       u8,
    ordinal:   i32,
    month_len: u8,
    calendar:  PhantomData<C>,
}

/// A Gregorian date inside the table's coverage.
pub type AdDate = Date<Ad>;
/// A Bikram Sambat date inside the table's coverage.
pub type BsDate = Date<Bs>;

impl<C: Calendar> Date<C> {
    /// Creates a date after checking it against `C`'s month lengths and the
    /// table coverage.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` naming `C` with the failing reason.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        let invalid =
            |reason| CalendarError::invalid(C::KIND, format!("{year}-{month}-{day}"), reason);

        if !(1..=MONTHS_IN_YEAR).contains(&month) {
            return Err(invalid(InvalidReason::Month));
        }
        if day < MIN_DAY {
            return Err(invalid(InvalidReason::Day));
        }
        if !C::year_exists(year) {
            return Err(invalid(InvalidReason::OutOfRange));
        }

        let month_len = C::days_in_month(year, month)?;
        if day > month_len {
            return Err(invalid(InvalidReason::Day));
        }

        let ordinal = C::ordinal(year, month, day)?;
        if !(0..TOTAL_DAYS).contains(&ordinal) {
            return Err(invalid(InvalidReason::OutOfRange));
        }

        Ok(Self {
            year,
            month,
            day,
            ordinal,
            month_len,
            calendar: PhantomData,
        })
    }

    /// Builds the date that lies `ordinal` days after the epoch.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedYear` when the day is off the table.
    pub(crate) fn from_ordinal(ordinal: i32) -> Result<Self, CalendarError> {
        if !(0..TOTAL_DAYS).contains(&ordinal) {
            // Name the year the day falls in when the calendar can still expand it.
            let (year, ..) = C::from_ordinal(ordinal)?;
            return Err(CalendarError::UnsupportedYear {
                calendar: C::KIND,
                year,
            });
        }
        let (year, month, day) = C::from_ordinal(ordinal)?;
        Ok(Self {
            year,
            month,
            day,
            ordinal,
            month_len: C::days_in_month(year, month)?,
            calendar: PhantomData,
        })
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Days elapsed since the epoch (BS 2000-01-01 = AD 1943-04-14)
    pub const fn days_since_epoch(&self) -> i32 {
        self.ordinal
    }

    /// True if the year lies inside the table's coverage
    pub fn in_range(&self) -> bool {
        C::date_in_range(self)
    }

    /// Number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        self.month_len
    }

    /// Weekday counted from Sunday = 0, independent of calendar
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn sunday_based_weekday(&self) -> u8 {
        (i32::from(EPOCH_WEEKDAY) + self.ordinal).rem_euclid(i32::from(DAYS_IN_WEEK)) as u8
    }

    /// Weekday index. AD counts Sunday = 0; BS counts Aitabar = 1.
    pub fn wday(&self) -> u8 {
        self.sunday_based_weekday() + C::WEEKDAY_BASE
    }

    pub fn wday_name(&self) -> &'static str {
        C::WEEKDAY_NAMES[usize::from(self.sunday_based_weekday())]
    }

    pub fn month_name(&self) -> &'static str {
        C::MONTH_NAMES[usize::from(self.month - 1)]
    }

    /// The date `days` days later (earlier if negative).
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedYear` if the result leaves the table.
    pub fn add_days(&self, days: i32) -> Result<Self, CalendarError> {
        if days == 0 {
            return Ok(*self);
        }
        Self::from_ordinal(self.ordinal.saturating_add(days))
    }

    /// Days since the most recent week start (0 on the week start itself)
    fn days_into_week(&self) -> u8 {
        (self.sunday_based_weekday() + DAYS_IN_WEEK - C::WEEK_START) % DAYS_IN_WEEK
    }

    /// The first day of this date's week (Monday for AD, Aitabar for BS).
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedYear` if that day is before the table.
    pub fn beginning_of_week(&self) -> Result<Self, CalendarError> {
        self.add_days(-i32::from(self.days_into_week()))
    }

    /// The last day of this date's week (Sunday for AD, Sanibar for BS).
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedYear` if that day is after the table.
    pub fn end_of_week(&self) -> Result<Self, CalendarError> {
        self.add_days(i32::from(DAYS_IN_WEEK - 1 - self.days_into_week()))
    }

    pub fn beginning_of_month(&self) -> Self {
        Self {
            day: MIN_DAY,
            ordinal: self.ordinal - i32::from(self.day - MIN_DAY),
            ..*self
        }
    }

    pub fn end_of_month(&self) -> Self {
        Self {
            day: self.month_len,
            ordinal: self.ordinal + i32::from(self.month_len - self.day),
            ..*self
        }
    }

    /// The same day expressed in calendar `D`.
    ///
    /// # Errors
    /// Cannot fail for dates built through this crate; the `Result` carries
    /// table lookups on the target side.
    pub fn to_calendar<D: Calendar>(&self) -> Result<Date<D>, CalendarError> {
        let converted = Date::<D>::from_ordinal(self.ordinal)?;
        debug!(
            from = %C::KIND,
            to = %D::KIND,
            source = %self.iso_string(),
            target = %converted.iso_string(),
            "converted date"
        );
        Ok(converted)
    }

    /// `YYYY-MM-DD`
    pub fn iso_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    pub const fn calendar(&self) -> CalendarKind {
        C::KIND
    }
}

impl BsDate {
    /// The Gregorian date of the same day.
    ///
    /// # Errors
    /// See [`Date::to_calendar`].
    pub fn to_ad(&self) -> Result<AdDate, CalendarError> {
        self.to_calendar()
    }
}

impl AdDate {
    /// The Bikram Sambat date of the same day.
    ///
    /// # Errors
    /// See [`Date::to_calendar`].
    pub fn to_bs(&self) -> Result<BsDate, CalendarError> {
        self.to_calendar()
    }

    /// The local date on the system clock.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the clock is outside the table.
    pub fn from_clock() -> Result<Self, CalendarError> {
        Self::try_from(Local::now().date_naive())
    }

    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

impl TryFrom<NaiveDate> for AdDate {
    type Error = CalendarError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Ad::date(value.year(), value.month(), value.day())
    }
}

impl fmt::Display for BsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} {}, {}",
            self.wday_name(),
            self.day,
            self.month_name(),
            self.year
        )
    }
}

impl fmt::Display for AdDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_string())
    }
}

impl<C: Calendar> fmt::Debug for Date<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Date({})", C::KIND, self.iso_string())
    }
}

impl<C: Calendar> FromStr for Date<C> {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD` or `YYYY/MM/DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::MissingDateField(DateField::Year));
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(ALT_DATE_SEPARATOR);
        let separator = match (has_hyphen, has_slash) {
            (true, false) => DATE_SEPARATOR,
            (false, true) => ALT_DATE_SEPARATOR,
            _ => {
                return Err(CalendarError::invalid(
                    C::KIND,
                    trimmed,
                    InvalidReason::Malformed,
                ));
            },
        };

        let parts: Vec<DatePart> = trimmed.split(separator).map(DatePart::from).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(CalendarError::invalid(
                C::KIND,
                trimmed,
                InvalidReason::Malformed,
            ));
        };

        let (y, m, d) = parse_parts(C::KIND, year, month, day)?;
        Self::new(y, m, d)
    }
}

impl<C: Calendar> Serialize for Date<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.iso_string())
    }
}

impl<'de, C: Calendar> Deserialize<'de> for Date<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
