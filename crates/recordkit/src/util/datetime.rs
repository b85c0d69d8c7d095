//! Gregorian calendar rules and pattern formatting for temporal values.
//!
//! The validation functions here are the single source of truth for what a
//! legal [`Date`](crate::Date) or [`Time`](crate::Time) is. Both constructors
//! and parsers go through them.

use std::fmt::Write;

use crate::error::ValidationError;

/// Returns true if the given year is a leap year.
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month (1-indexed), or 0 for an
/// invalid month.
pub fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

// =====================
// Validation
// =====================

/// Checks calendar rules for a date.
///
/// The month is checked before the day. February 29 in a non-leap year is
/// reported as [`ValidationError::NotLeapYear`]; any other day past the end of
/// its month as [`ValidationError::DayOutOfMonth`].
pub fn validate_date(year: i64, month: u32, day: u32) -> Result<(), ValidationError> {
    if !(1..=12).contains(&month) {
        return Err(ValidationError::InvalidMonth { month });
    }
    if !(1..=31).contains(&day) {
        return Err(ValidationError::InvalidDay { day });
    }
    if day > days_in_month(year, month) {
        if month == 2 && day == 29 {
            return Err(ValidationError::NotLeapYear { year });
        }
        return Err(ValidationError::DayOutOfMonth { year, month, day });
    }
    Ok(())
}

/// Checks clock ranges for a time of day, failing on the first bad component.
pub fn validate_time(hour: u32, minute: u32, second: u32) -> Result<(), ValidationError> {
    if hour > 23 {
        return Err(ValidationError::InvalidHour { hour });
    }
    if minute > 59 {
        return Err(ValidationError::InvalidMinute { minute });
    }
    if second > 59 {
        return Err(ValidationError::InvalidSecond { second });
    }
    Ok(())
}

// =====================
// Pattern formatting
// =====================

/// Calendar components available to [`format_pattern`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Components {
    pub date: Option<(i64, u32, u32)>,
    pub time: Option<(u32, u32, u32)>,
}

/// Formats components with a strftime-style pattern.
///
/// Supported tokens:
/// - `%Y`: year, unpadded
/// - `%m`, `%d`: month and day, zero-padded to width 2
/// - `%H`, `%M`, `%S`: hour, minute and second, zero-padded to width 2
/// - `%%`: a literal `%`
///
/// Tokens whose component is absent, and unknown tokens, are copied verbatim.
pub fn format_pattern(pattern: &str, components: Components) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(token) = chars.next() else {
            out.push('%');
            break;
        };
        // Writing into a String cannot fail.
        let _ = match (token, components.date, components.time) {
            ('%', _, _) => write!(out, "%"),
            ('Y', Some((y, _, _)), _) => write!(out, "{}", y),
            ('m', Some((_, m, _)), _) => write!(out, "{:02}", m),
            ('d', Some((_, _, d)), _) => write!(out, "{:02}", d),
            ('H', _, Some((h, _, _))) => write!(out, "{:02}", h),
            ('M', _, Some((_, m, _))) => write!(out, "{:02}", m),
            ('S', _, Some((_, _, s))) => write!(out, "{:02}", s),
            _ => write!(out, "%{}", token),
        };
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2020));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(2021));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 13), 0);
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date(2020, 2, 29).is_ok());
        assert!(validate_date(2000, 2, 29).is_ok());
        assert_eq!(
            validate_date(2021, 2, 29),
            Err(ValidationError::NotLeapYear { year: 2021 })
        );
        assert_eq!(
            validate_date(1900, 2, 29),
            Err(ValidationError::NotLeapYear { year: 1900 })
        );
        assert_eq!(
            validate_date(2024, 4, 31),
            Err(ValidationError::DayOutOfMonth {
                year: 2024,
                month: 4,
                day: 31
            })
        );
        assert_eq!(
            validate_date(2024, 2, 30),
            Err(ValidationError::DayOutOfMonth {
                year: 2024,
                month: 2,
                day: 30
            })
        );
        assert!(validate_date(2024, 12, 31).is_ok());
    }

    #[test]
    fn test_validate_date_checks_month_first() {
        assert_eq!(
            validate_date(2024, 13, 0),
            Err(ValidationError::InvalidMonth { month: 13 })
        );
        assert_eq!(
            validate_date(2024, 0, 1),
            Err(ValidationError::InvalidMonth { month: 0 })
        );
        assert_eq!(
            validate_date(2024, 1, 32),
            Err(ValidationError::InvalidDay { day: 32 })
        );
        assert_eq!(
            validate_date(2024, 1, 0),
            Err(ValidationError::InvalidDay { day: 0 })
        );
    }

    #[test]
    fn test_validate_time() {
        assert!(validate_time(0, 0, 0).is_ok());
        assert!(validate_time(23, 59, 59).is_ok());
        assert_eq!(validate_time(24, 0, 0), Err(ValidationError::InvalidHour { hour: 24 }));
        assert_eq!(validate_time(0, 60, 0), Err(ValidationError::InvalidMinute { minute: 60 }));
        assert_eq!(validate_time(0, 0, 60), Err(ValidationError::InvalidSecond { second: 60 }));
        // fail fast on the first violation
        assert_eq!(validate_time(24, 60, 60), Err(ValidationError::InvalidHour { hour: 24 }));
    }

    #[test]
    fn test_format_pattern() {
        let both = Components {
            date: Some((2024, 9, 1)),
            time: Some((7, 5, 3)),
        };
        assert_eq!(format_pattern("%Y-%m-%d %H:%M:%S", both), "2024-09-01 07:05:03");
        assert_eq!(format_pattern("%d/%m/%Y", both), "01/09/2024");
        assert_eq!(format_pattern("100%% at %H", both), "100% at 07");
        assert_eq!(format_pattern("%q%", both), "%q%");

        let date_only = Components {
            date: Some((812, 12, 25)),
            time: None,
        };
        assert_eq!(format_pattern("%Y-%m-%d %H", date_only), "812-12-25 %H");
    }
}
