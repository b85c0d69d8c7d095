//! String encoding/decoding for field values.
//!
//! Layouts:
//! - Date: `Y-MM-DD`, year unpadded, month and day zero-padded to width 2
//! - Time: `HH:MM:SS`, all zero-padded to width 2
//! - DateTime: `<date> <time>`, separated by a single space

use crate::codec::primitives::{
    parse_boolean, parse_float, parse_integer, parse_unsigned_component, parse_year_component,
    render_boolean, render_float, render_integer,
};
use crate::error::{FieldError, ParseError};
use crate::model::{Date, DateTime, Kind, Time, Value};

// =============================================================================
// DECODING
// =============================================================================

/// Parses a string as a value of the given kind.
pub fn parse_value(kind: Kind, input: &str) -> Result<Value, FieldError> {
    match kind {
        Kind::Text => Ok(Value::Text(input.to_string())),
        Kind::Integer => Ok(Value::Integer(parse_integer(input)?)),
        Kind::Boolean => Ok(Value::Boolean(parse_boolean(input)?)),
        Kind::Float => Ok(Value::Float(parse_float(input)?)),
        Kind::Date => parse_date(input).map(Value::Date),
        Kind::Time => parse_time(input).map(Value::Time),
        Kind::DateTime => parse_datetime(input).map(Value::DateTime),
    }
}

/// Parses a `Y-MM-DD` date.
///
/// Components are split from the right so that negative years
/// (`-44-03-15`) survive a round trip.
pub fn parse_date(input: &str) -> Result<Date, FieldError> {
    parse_date_as(input, Kind::Date)
}

fn parse_date_as(input: &str, kind: Kind) -> Result<Date, FieldError> {
    let mut parts = input.rsplitn(3, '-');
    let (Some(day), Some(month), Some(year)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed(input, kind, "YYYY-MM-DD"));
    };

    let year = parse_year_component(year, kind)?;
    let month = parse_unsigned_component(month, kind, "month")?;
    let day = parse_unsigned_component(day, kind, "day")?;

    Ok(Date::new(year, month, day)?)
}

/// Parses an `HH:MM:SS` time of day.
pub fn parse_time(input: &str) -> Result<Time, FieldError> {
    parse_time_as(input, Kind::Time)
}

fn parse_time_as(input: &str, kind: Kind) -> Result<Time, FieldError> {
    let mut parts = input.split(':');
    let (Some(hour), Some(minute), Some(second), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed(input, kind, "HH:MM:SS"));
    };

    let hour = parse_unsigned_component(hour, kind, "hour")?;
    let minute = parse_unsigned_component(minute, kind, "minute")?;
    let second = parse_unsigned_component(second, kind, "second")?;

    Ok(Time::new(hour, minute, second)?)
}

/// Parses a `Y-MM-DD HH:MM:SS` date-time.
pub fn parse_datetime(input: &str) -> Result<DateTime, FieldError> {
    let Some((date, time)) = input.split_once(' ') else {
        return Err(malformed(input, Kind::DateTime, "YYYY-MM-DD HH:MM:SS"));
    };

    let date = parse_date_as(date, Kind::DateTime)?;
    let time = parse_time_as(time, Kind::DateTime)?;
    Ok(DateTime::new(date, time))
}

fn malformed(input: &str, kind: Kind, expected: &'static str) -> FieldError {
    ParseError::MalformedLayout {
        kind,
        input: input.to_string(),
        expected,
    }
    .into()
}

// =============================================================================
// ENCODING
// =============================================================================

/// Renders a value in its canonical string form.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Text(s) => s.clone(),
        Value::Integer(v) => render_integer(*v),
        Value::Boolean(v) => render_boolean(*v).to_string(),
        Value::Float(v) => render_float(*v),
        Value::Date(d) => d.to_string(),
        Value::Time(t) => t.to_string(),
        Value::DateTime(dt) => dt.to_string(),
    }
}
