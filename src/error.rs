use crate::prelude::*;
use crate::types::DateField;

/// The two calendars this crate converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CalendarKind {
    /// Gregorian (Anno Domini)
    #[display(fmt = "AD")]
    Ad,
    /// Bikram Sambat
    #[display(fmt = "BS")]
    Bs,
}

/// Why a year/month/day triple was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InvalidReason {
    /// A field did not parse as an integer
    #[display(fmt = "not a number")]
    Malformed,
    /// Month outside `1..=12`
    #[display(fmt = "month out of range")]
    Month,
    /// Day outside `1..=days_in_month`
    #[display(fmt = "day out of range")]
    Day,
    /// Well-formed, but outside the years the month-length table covers
    #[display(fmt = "outside supported range")]
    OutOfRange,
}

/// Error type for every fallible calendar operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Year, month or day was blank or absent.
    #[error("Missing date field: {0}")]
    MissingDateField(DateField),

    /// The input is not a valid date in the stated calendar.
    #[error("Invalid {calendar} date {input}: {reason}")]
    InvalidDate {
        calendar: CalendarKind,
        input:    String,
        reason:   InvalidReason,
    },

    /// A lookup missed the month-length table.
    #[error("Year {year} is not supported by the {calendar} month table")]
    UnsupportedYear { calendar: CalendarKind, year: u16 },

    /// Fiscal-year suffixes that are not consecutive.
    #[error("Invalid fiscal year: {start_year:02}/{end_year:02} (end must follow start)")]
    InvalidFiscalYear { start_year: u8, end_year: u8 },

    /// A period whose start is after its end.
    #[error("Invalid period: start ({start}) is after end ({end})")]
    InvalidPeriod { start: String, end: String },
}

impl CalendarError {
    pub(crate) fn invalid(
        calendar: CalendarKind,
        input: impl Into<String>,
        reason: InvalidReason,
    ) -> Self {
        Self::InvalidDate {
            calendar,
            input: input.into(),
            reason,
        }
    }

    /// Returns true when the failure is about table coverage rather than
    /// malformed input.
    pub const fn is_out_of_coverage(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedYear { .. }
                | Self::InvalidDate {
                    reason: InvalidReason::OutOfRange,
                    ..
                }
        )
    }

    /// The calendar the error refers to, if any.
    pub const fn calendar(&self) -> Option<CalendarKind> {
        match self {
            Self::InvalidDate { calendar, .. } | Self::UnsupportedYear { calendar, .. } => {
                Some(*calendar)
            },
            Self::MissingDateField(_) | Self::InvalidFiscalYear { .. } | Self::InvalidPeriod { .. } => {
                None
            },
        }
    }
}
