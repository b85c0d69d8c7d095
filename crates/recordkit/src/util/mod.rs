//! Utility modules for recordkit.

pub mod datetime;

pub use datetime::{
    days_in_month, format_pattern, is_leap_year, validate_date, validate_time, Components,
};
