use crate::consts::{
    AD_DAYS_IN_MONTH, CENTURY_CYCLE, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MONTHS_IN_YEAR,
};
use crate::error::{CalendarError, CalendarKind, InvalidReason};
use crate::prelude::*;
use std::fmt;

/// Names the component of a date that an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateField {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

/// A raw year, month or day as supplied by a caller.
///
/// Conversion entry points accept numbers and numeric strings alike
/// (`ad_to_bs(2015, 9, 9)` and `ad_to_bs("2015", "09", "09")`).
/// Blank strings and `None` are treated as missing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DatePart {
    Number(i64),
    Text(String),
    Missing,
}

impl DatePart {
    /// True if the value is absent or a blank string
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    fn to_int(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Missing => None,
        }
    }
}

impl fmt::Display for DatePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{}", s.trim()),
            Self::Missing => Ok(()),
        }
    }
}

macro_rules! date_part_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for DatePart {
                fn from(value: $t) -> Self {
                    Self::Number(i64::from(value))
                }
            }
        )*
    };
}

date_part_from_int!(u8, u16, u32, i8, i16, i32, i64);

impl From<&str> for DatePart {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DatePart {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for DatePart {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl<T: Into<Self>> From<Option<T>> for DatePart {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Parses raw parts into a numeric triple.
///
/// Missing fields are reported before anything is parsed, in year, month,
/// day order. Values that are not integers, or that cannot be a year, month
/// or day at all, are reported as invalid dates of `calendar`.
pub(crate) fn parse_parts(
    calendar: CalendarKind,
    year: &DatePart,
    month: &DatePart,
    day: &DatePart,
) -> Result<(u16, u8, u8), CalendarError> {
    for (part, field) in [
        (year, DateField::Year),
        (month, DateField::Month),
        (day, DateField::Day),
    ] {
        if part.is_missing() {
            return Err(CalendarError::MissingDateField(field));
        }
    }

    let input = format!("{year}-{month}-{day}");
    let (Some(y), Some(m), Some(d)) = (year.to_int(), month.to_int(), day.to_int()) else {
        return Err(CalendarError::invalid(calendar, input, InvalidReason::Malformed));
    };

    let year = u16::try_from(y)
        .map_err(|_| CalendarError::invalid(calendar, input.as_str(), InvalidReason::OutOfRange))?;
    let month = u8::try_from(m)
        .ok()
        .filter(|m| (1..=MONTHS_IN_YEAR).contains(m))
        .ok_or_else(|| CalendarError::invalid(calendar, input.as_str(), InvalidReason::Month))?;
    let day = u8::try_from(d)
        .ok()
        .filter(|&d| d >= 1)
        .ok_or_else(|| CalendarError::invalid(calendar, input.as_str(), InvalidReason::Day))?;

    Ok((year, month, day))
}

// Gregorian helpers

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn ad_days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MONTHS_IN_YEAR);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        AD_DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_part_from_numbers_and_strings() {
        assert_eq!(DatePart::from(2072_u16), DatePart::Number(2072));
        assert_eq!(DatePart::from(9_u8), DatePart::Number(9));
        assert_eq!(DatePart::from("09"), DatePart::Text("09".to_owned()));
        assert_eq!(DatePart::from(None::<u8>), DatePart::Missing);
        assert_eq!(DatePart::from(Some(5_i32)), DatePart::Number(5));
    }

    #[test]
    fn test_is_missing() {
        assert!(DatePart::Missing.is_missing());
        assert!(DatePart::from("").is_missing());
        assert!(DatePart::from("   ").is_missing());
        assert!(!DatePart::from("0").is_missing());
        assert!(!DatePart::from(0_u8).is_missing());
    }

    #[test]
    fn test_parse_parts_numeric_strings() {
        let parsed = parse_parts(
            CalendarKind::Ad,
            &"2015".into(),
            &"09".into(),
            &" 9 ".into(),
        )
        .unwrap();
        assert_eq!(parsed, (2015, 9, 9));
    }

    #[test]
    fn test_parse_parts_missing_checked_first() {
        // Month is garbage, but the missing day must win.
        let result = parse_parts(
            CalendarKind::Bs,
            &"2072".into(),
            &"abc".into(),
            &"".into(),
        );
        assert_eq!(result, Err(CalendarError::MissingDateField(DateField::Day)));

        let result = parse_parts(CalendarKind::Bs, &"".into(), &"".into(), &"".into());
        assert_eq!(result, Err(CalendarError::MissingDateField(DateField::Year)));
    }

    #[test]
    fn test_parse_parts_invalid() {
        struct TestCase {
            parts:  (&'static str, &'static str, &'static str),
            reason: InvalidReason,
        }

        let cases = [
            TestCase {
                parts:  ("20x2", "1", "1"),
                reason: InvalidReason::Malformed,
            },
            TestCase {
                parts:  ("2072", "13", "1"),
                reason: InvalidReason::Month,
            },
            TestCase {
                parts:  ("2072", "0", "1"),
                reason: InvalidReason::Month,
            },
            TestCase {
                parts:  ("2072", "1", "0"),
                reason: InvalidReason::Day,
            },
            TestCase {
                parts:  ("-5", "1", "1"),
                reason: InvalidReason::OutOfRange,
            },
        ];

        for case in &cases {
            let (y, m, d) = case.parts;
            let result = parse_parts(CalendarKind::Bs, &y.into(), &m.into(), &d.into());
            match result {
                Err(CalendarError::InvalidDate {
                    calendar: CalendarKind::Bs,
                    reason,
                    ..
                }) => assert_eq!(reason, case.reason, "{y}-{m}-{d}"),
                other => panic!("{y}-{m}-{d}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_is_leap_year_cases() {
        let cases = [
            (2020, true),
            (2024, true),
            (2021, false),
            (1900, false),
            (2100, false),
            (2000, true),
            (1944, true),
        ];
        for (year, expected) in cases {
            assert_eq!(is_leap_year(year), expected, "year {year}");
        }
    }

    #[test]
    fn test_ad_days_in_month() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(ad_days_in_month(2024, month), 31, "month {month}");
        }
        for month in [4, 6, 9, 11] {
            assert_eq!(ad_days_in_month(2024, month), 30, "month {month}");
        }
        assert_eq!(ad_days_in_month(2015, 2), 28);
        assert_eq!(ad_days_in_month(2016, 2), 29);
    }
}
