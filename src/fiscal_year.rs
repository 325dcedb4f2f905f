//! Nepali fiscal years.
//!
//! A fiscal year runs from 1 Shrawan (BS month 4) to the last day of Asar
//! (BS month 3) of the following BS year. It is identified by the two-digit
//! suffixes of those years, so the year starting in 2078 is `7879`.

use crate::calendar::{Bs, Calendar};
use crate::consts::{
    BS_CENTURY, BS_MAX_YEAR, FISCAL_NAME_SEPARATOR, FISCAL_YEAR_END_MONTH, FISCAL_YEAR_START_MONTH, MIN_DAY,
};
use crate::error::{CalendarError, CalendarKind, InvalidReason};
use crate::prelude::*;
use crate::types::DatePart;
use crate::{AdDate, BsDate, FiscalYearPeriod, table};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::str::FromStr;
use tracing::debug;

const SUFFIX_MODULUS: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:02}{:02}", start_year, end_year)]
pub struct FiscalYear {
    start_year: u8,
    end_year:   u8,
}

impl FiscalYear {
    /// Creates a fiscal year from two-digit BS year suffixes, e.g. `(78, 79)`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFiscalYear` unless `end_year` directly
    /// follows `start_year` (`99` is followed by `00`).
    pub fn new(start_year: u8, end_year: u8) -> Result<Self, CalendarError> {
        let follows = u16::from(start_year) < SUFFIX_MODULUS
            && u16::from(end_year) == (u16::from(start_year) + 1) % SUFFIX_MODULUS;
        if !follows {
            return Err(CalendarError::InvalidFiscalYear {
                start_year,
                end_year,
            });
        }
        Ok(Self {
            start_year,
            end_year,
        })
    }

    /// The fiscal year that starts in BS `year`
    #[allow(clippy::cast_possible_truncation)]
    const fn starting_in(year: u16) -> Self {
        Self {
            start_year: (year % SUFFIX_MODULUS) as u8,
            end_year:   ((year + 1) % SUFFIX_MODULUS) as u8,
        }
    }

    pub const fn start_year(&self) -> u8 {
        self.start_year
    }

    pub const fn end_year(&self) -> u8 {
        self.end_year
    }

    /// Full BS year in which the fiscal year starts.
    ///
    /// Suffixes past the table's last year belong to the previous century,
    /// so `9900` starts in 1999 and precedes `0001`.
    pub fn start_bs_year(&self) -> u16 {
        let year = BS_CENTURY + u16::from(self.start_year);
        if year > BS_MAX_YEAR {
            year - SUFFIX_MODULUS
        } else {
            year
        }
    }

    /// Full BS year in which the fiscal year ends
    pub fn end_bs_year(&self) -> u16 {
        self.start_bs_year() + 1
    }

    /// Dates before Shrawan belong to the fiscal year that started the
    /// previous BS year; 1 Shrawan opens a new one.
    pub fn for_bs_date(date: &BsDate) -> Self {
        if date.month() < FISCAL_YEAR_START_MONTH {
            Self::starting_in(date.year() - 1)
        } else {
            Self::starting_in(date.year())
        }
    }

    /// Fiscal year of a BS date given as raw year/month/day.
    ///
    /// # Errors
    /// Whatever building the BS date reports.
    pub fn fiscal_year_for_bs_date(
        year: impl Into<DatePart>,
        month: impl Into<DatePart>,
        day: impl Into<DatePart>,
    ) -> Result<Self, CalendarError> {
        let date = Bs::date(year, month, day)?;
        Ok(Self::for_bs_date(&date))
    }

    /// Fiscal year containing an AD date.
    ///
    /// # Errors
    /// Whatever the AD to BS conversion reports.
    pub fn fiscal_year_in_bs_for_ad_date(date: &AdDate) -> Result<Self, CalendarError> {
        Ok(Self::for_bs_date(&date.to_bs()?))
    }

    /// Fiscal year containing `today`.
    ///
    /// # Errors
    /// Whatever the AD to BS conversion reports.
    pub fn current_fiscal_year_on(today: &AdDate) -> Result<Self, CalendarError> {
        Self::fiscal_year_in_bs_for_ad_date(today)
    }

    /// Fiscal year containing the system clock's date.
    ///
    /// # Errors
    /// `InvalidDate` if the clock is outside the table.
    pub fn current_fiscal_year() -> Result<Self, CalendarError> {
        Self::current_fiscal_year_on(&AdDate::from_clock()?)
    }

    /// 1 Shrawan of the start year.
    ///
    /// # Errors
    /// `InvalidDate` if the start year is outside the table.
    pub fn beginning_of_year(&self) -> Result<BsDate, CalendarError> {
        BsDate::new(self.start_bs_year(), FISCAL_YEAR_START_MONTH, MIN_DAY)
    }

    /// Last day of Asar of the end year, as the table records it.
    ///
    /// # Errors
    /// `UnsupportedYear` if the end year is outside the table.
    pub fn end_of_year(&self) -> Result<BsDate, CalendarError> {
        let year = self.end_bs_year();
        let last_day = table::days_in_month(year, FISCAL_YEAR_END_MONTH)?;
        BsDate::new(year, FISCAL_YEAR_END_MONTH, last_day)
    }

    pub fn next(&self) -> Self {
        Self::starting_in(u16::from(self.end_year))
    }

    pub fn contains(&self, date: &BsDate) -> bool {
        Self::for_bs_date(date) == *self
    }

    /// # Errors
    /// Whatever the AD to BS conversion reports.
    pub fn is_current_fiscal_year_on(&self, today: &AdDate) -> Result<bool, CalendarError> {
        Ok(Self::current_fiscal_year_on(today)? == *self)
    }

    /// # Errors
    /// `InvalidDate` if the clock is outside the table.
    pub fn is_current_fiscal_year(&self) -> Result<bool, CalendarError> {
        Ok(Self::current_fiscal_year()? == *self)
    }

    /// Display name such as `2077/78`
    pub fn name(&self) -> String {
        format!(
            "{}{FISCAL_NAME_SEPARATOR}{:02}",
            self.start_bs_year(),
            self.end_year
        )
    }

    /// This fiscal year's boundaries converted to AD.
    ///
    /// # Errors
    /// Whatever the boundary lookups or conversions report.
    pub fn period(&self) -> Result<FiscalYearPeriod, CalendarError> {
        let start = self.beginning_of_year()?.to_ad()?;
        let end = self.end_of_year()?.to_ad()?;
        FiscalYearPeriod::new(start, end, self.name())
    }

    /// Periods from the fiscal year containing `start_date` through the
    /// fiscal year after the one containing `today`, in order.
    ///
    /// If `start_date` already lies at or past that upper bound, only its own
    /// fiscal year is returned.
    ///
    /// # Errors
    /// Whatever converting the dates or materializing a period reports.
    pub fn fiscal_years_list_in_ad_on(
        start_date: &AdDate,
        today: &AdDate,
    ) -> Result<Vec<FiscalYearPeriod>, CalendarError> {
        let upto = Self::current_fiscal_year_on(today)?.next();
        let mut fiscal_year = Self::fiscal_year_in_bs_for_ad_date(start_date)?;
        debug!(from = %fiscal_year, upto = %upto, "listing fiscal years");

        let mut periods = Vec::new();
        loop {
            periods.push(fiscal_year.period()?);
            if fiscal_year >= upto {
                break;
            }
            fiscal_year = fiscal_year.next();
        }
        Ok(periods)
    }

    /// [`Self::fiscal_years_list_in_ad_on`] with today's date from the clock.
    ///
    /// # Errors
    /// See [`Self::fiscal_years_list_in_ad_on`].
    pub fn fiscal_years_list_in_ad(
        start_date: &AdDate,
    ) -> Result<Vec<FiscalYearPeriod>, CalendarError> {
        Self::fiscal_years_list_in_ad_on(start_date, &AdDate::from_clock()?)
    }
}

impl PartialOrd for FiscalYear {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FiscalYear {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start_bs_year().cmp(&other.start_bs_year())
    }
}

impl FromStr for FiscalYear {
    type Err = CalendarError;

    /// Parses the canonical `7879` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let malformed =
            || CalendarError::invalid(CalendarKind::Bs, trimmed, InvalidReason::Malformed);

        if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let start = trimmed[..2].parse().map_err(|_| malformed())?;
        let end = trimmed[2..].parse().map_err(|_| malformed())?;
        Self::new(start, end)
    }
}

impl Serialize for FiscalYear {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FiscalYear {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
