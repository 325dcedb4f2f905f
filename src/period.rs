use serde::{Deserialize, Serialize};

use crate::{AdDate, Calendar, CalendarError, FISCAL_NAME_SEPARATOR, calendar::Ad};

/// One fiscal year's boundaries expressed as AD dates, with a display name
/// such as `2077/78`. Both ends are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct FiscalYearPeriod {
    start_date: AdDate,
    end_date:   AdDate,
    name:       String,
}

#[derive(Deserialize)]
struct RawPeriod {
    start_date: AdDate,
    end_date:   AdDate,
    name:       String,
}

impl TryFrom<RawPeriod> for FiscalYearPeriod {
    type Error = CalendarError;

    fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
        Self::new(raw.start_date, raw.end_date, raw.name)
    }
}

impl FiscalYearPeriod {
    /// Creates a period with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidPeriod` if `start_date > end_date`.
    pub fn new(
        start_date: AdDate,
        end_date: AdDate,
        name: impl Into<String>,
    ) -> Result<Self, CalendarError> {
        if start_date > end_date {
            return Err(CalendarError::InvalidPeriod {
                start: start_date.to_string(),
                end:   end_date.to_string(),
            });
        }
        Ok(Self {
            start_date,
            end_date,
            name: name.into(),
        })
    }

    pub const fn start_date(&self) -> AdDate {
        self.start_date
    }

    pub const fn end_date(&self) -> AdDate {
        self.end_date
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inclusive number of days from start to end
    pub fn days_in_year(&self) -> i64 {
        Ad::total_days(&self.end_date, &self.start_date) + 1
    }

    pub fn contains(&self, date: &AdDate) -> bool {
        self.start_date <= *date && *date <= self.end_date
    }

    /// True if `today` falls inside the period
    pub fn is_current_on(&self, today: &AdDate) -> bool {
        self.contains(today)
    }

    /// True if the system clock's date falls inside the period.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the clock is outside the table.
    pub fn is_current(&self) -> Result<bool, CalendarError> {
        Ok(self.is_current_on(&AdDate::from_clock()?))
    }

    /// The BS start year of the name (`2077` for `2077/78`)
    pub fn start_year_name(&self) -> &str {
        self.name
            .split_once(FISCAL_NAME_SEPARATOR)
            .map_or(self.name.as_str(), |(start, _)| start)
    }
}
