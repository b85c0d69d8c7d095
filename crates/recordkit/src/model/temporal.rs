//! Calendar date, time of day, and their combination.
//!
//! All three types validate at construction and are immutable afterwards, so
//! an invalid instance is never observable. Ordering is derived from field
//! order: (year, month, day), (hour, minute, second), then date before time.

use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::error::{FieldError, ValidationError};
use crate::util::datetime::{self, Components};

/// A Gregorian calendar date with a variable-width year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    year: i64,
    month: u32,
    day: u32,
}

impl Date {
    /// Creates a date, checking month range, day range and month length
    /// (including the Gregorian leap rule for February 29).
    pub fn new(year: i64, month: u32, day: u32) -> Result<Date, ValidationError> {
        datetime::validate_date(year, month, day)?;
        Ok(Date { year, month, day })
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns true if this date falls in a leap year.
    pub fn is_leap_year(&self) -> bool {
        datetime::is_leap_year(self.year)
    }

    /// Formats the date with a pattern; see [`datetime::format_pattern`].
    pub fn format(&self, pattern: &str) -> String {
        datetime::format_pattern(
            pattern,
            Components {
                date: Some((self.year, self.month, self.day)),
                time: None,
            },
        )
    }
}

impl Default for Date {
    /// Year 0, January 1st.
    fn default() -> Self {
        Date {
            year: 0,
            month: 1,
            day: 1,
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse_date(s)
    }
}

/// A time of day with second resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Time {
    hour: u32,
    minute: u32,
    second: u32,
}

impl Time {
    /// Creates a time of day, failing on the first out-of-range component.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Time, ValidationError> {
        datetime::validate_time(hour, minute, second)?;
        Ok(Time {
            hour,
            minute,
            second,
        })
    }

    /// Midnight, 00:00:00.
    pub const MIDNIGHT: Time = Time {
        hour: 0,
        minute: 0,
        second: 0,
    };

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_from_midnight(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }

    /// Formats the time with a pattern; see [`datetime::format_pattern`].
    pub fn format(&self, pattern: &str) -> String {
        datetime::format_pattern(
            pattern,
            Components {
                date: None,
                time: Some((self.hour, self.minute, self.second)),
            },
        )
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for Time {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse_time(s)
    }
}

/// A date and a time of day.
///
/// Composed of a [`Date`] and a [`Time`], each validated on its own. Ordered
/// by date, then by time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    /// Combines an already validated date and time.
    pub fn new(date: Date, time: Time) -> DateTime {
        DateTime { date, time }
    }

    /// Creates a date-time from its six components.
    pub fn from_parts(
        year: i64,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<DateTime, ValidationError> {
        Ok(DateTime {
            date: Date::new(year, month, day)?,
            time: Time::new(hour, minute, second)?,
        })
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn year(&self) -> i64 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn second(&self) -> u32 {
        self.time.second()
    }

    /// Formats the date-time with a pattern; see [`datetime::format_pattern`].
    pub fn format(&self, pattern: &str) -> String {
        datetime::format_pattern(
            pattern,
            Components {
                date: Some((self.year(), self.month(), self.day())),
                time: Some((self.hour(), self.minute(), self.second())),
            },
        )
    }
}

impl From<Date> for DateTime {
    /// Midnight at the start of the given date.
    fn from(date: Date) -> Self {
        DateTime::new(date, Time::MIDNIGHT)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

impl FromStr for DateTime {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse_datetime(s)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    #[test]
    fn test_date_validation() {
        assert!(Date::new(2021, 2, 29).is_err());
        assert!(Date::new(2020, 2, 29).is_ok());
        assert!(Date::new(2000, 2, 29).is_ok());
        assert!(Date::new(1900, 2, 29).is_err());
        assert!(Date::new(2024, 6, 31).is_err());
        assert!(Date::new(2024, 7, 31).is_ok());
        assert!(Date::new(2024, 13, 1).is_err());
    }

    #[test]
    fn test_time_validation() {
        assert!(Time::new(24, 0, 0).is_err());
        assert!(Time::new(0, 60, 0).is_err());
        assert!(Time::new(0, 0, 60).is_err());
        assert!(Time::new(23, 59, 59).is_ok());
    }

    #[test]
    fn test_date_ordering() {
        let d1 = Date::new(2020, 8, 25).unwrap();
        let d2 = Date::new(2022, 8, 25).unwrap();
        let d3 = Date::new(2022, 10, 25).unwrap();
        let d4 = Date::new(2022, 10, 27).unwrap();

        assert!(d1 < d2);
        assert!(d2 < d3);
        assert!(d3 < d4);
        assert!(d1 < d4);
        assert_eq!(d2.cmp(&Date::new(2022, 8, 25).unwrap()), Ordering::Equal);
    }

    #[test]
    fn test_time_ordering() {
        let t1 = Time::new(10, 30, 30).unwrap();
        let t2 = Time::new(12, 30, 30).unwrap();
        let t3 = Time::new(12, 31, 30).unwrap();
        let t4 = Time::new(12, 31, 31).unwrap();

        assert!(t1 < t2);
        assert!(t2 < t3);
        assert!(t3 < t4);
    }

    #[test]
    fn test_datetime_ordering() {
        let dt1 = DateTime::from_parts(2024, 12, 26, 23, 29, 30).unwrap();
        let dt2 = DateTime::from_parts(2024, 12, 26, 23, 29, 31).unwrap();
        let dt3 = DateTime::from_parts(2024, 12, 27, 23, 30, 30).unwrap();
        // a later time on an earlier date still sorts first
        let dt0 = DateTime::from_parts(2024, 12, 25, 23, 59, 59).unwrap();

        assert!(dt1 < dt2);
        assert!(dt2 < dt3);
        assert!(dt0 < dt1);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Date::default().to_string(), "0-01-01");
        assert_eq!(Time::default(), Time::MIDNIGHT);
        assert_eq!(DateTime::default().to_string(), "0-01-01 00:00:00");
    }

    #[test]
    fn test_display() {
        assert_eq!(Date::new(2024, 12, 5).unwrap().to_string(), "2024-12-05");
        assert_eq!(Date::new(812, 1, 9).unwrap().to_string(), "812-01-09");
        assert_eq!(Time::new(0, 2, 4).unwrap().to_string(), "00:02:04");
        assert_eq!(
            DateTime::from_parts(2024, 12, 25, 0, 21, 24).unwrap().to_string(),
            "2024-12-25 00:21:24"
        );
    }

    #[test]
    fn test_datetime_accessors() {
        let dt = DateTime::from_parts(2024, 12, 25, 0, 21, 24).unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 12);
        assert_eq!(dt.day(), 25);
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 21);
        assert_eq!(dt.second(), 24);
        assert_eq!(dt.date(), Date::new(2024, 12, 25).unwrap());
        assert_eq!(dt.time(), Time::new(0, 21, 24).unwrap());
        assert_eq!(DateTime::from(dt.date()).time(), Time::MIDNIGHT);
    }

    #[test]
    fn test_format() {
        let dt = DateTime::from_parts(2024, 9, 1, 8, 0, 5).unwrap();
        assert_eq!(dt.format("%d.%m.%Y %H:%M"), "01.09.2024 08:00");
        assert_eq!(dt.date().format("%Y/%m/%d"), "2024/09/01");
        assert_eq!(dt.time().format("%Hh%M"), "08h00");
        assert_eq!(Time::new(1, 1, 1).unwrap().seconds_from_midnight(), 3661);
    }
}
