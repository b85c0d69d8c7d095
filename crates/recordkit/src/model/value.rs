//! Field kinds and dynamically typed field values.
//!
//! [`Kind`] is the closed set of seven field kinds. [`Value`] holds one value
//! of any kind and is what dynamic (runtime-indexed) record access returns.

use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::error::{FieldError, ParseError};
use crate::model::{Date, DateTime, Time};

/// The fixed category of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Kind {
    Text = 1,
    Integer = 2,
    Boolean = 3,
    Float = 4,
    Date = 5,
    Time = 6,
    DateTime = 7,
}

impl Kind {
    /// All kinds, in code order.
    pub const ALL: [Kind; 7] = [
        Kind::Text,
        Kind::Integer,
        Kind::Boolean,
        Kind::Float,
        Kind::Date,
        Kind::Time,
        Kind::DateTime,
    ];

    /// Returns the stable type tag of this kind (e.g., "DateTime").
    pub const fn tag(self) -> &'static str {
        match self {
            Kind::Text => "Text",
            Kind::Integer => "Integer",
            Kind::Boolean => "Boolean",
            Kind::Float => "Float",
            Kind::Date => "Date",
            Kind::Time => "Time",
            Kind::DateTime => "DateTime",
        }
    }

    /// Creates a Kind from its numeric code.
    pub fn from_u8(v: u8) -> Option<Kind> {
        match v {
            1 => Some(Kind::Text),
            2 => Some(Kind::Integer),
            3 => Some(Kind::Boolean),
            4 => Some(Kind::Float),
            5 => Some(Kind::Date),
            6 => Some(Kind::Time),
            7 => Some(Kind::DateTime),
            _ => None,
        }
    }

    /// Creates a Kind from its type tag.
    pub fn from_tag(tag: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Returns true for Date, Time and DateTime.
    pub fn is_temporal(self) -> bool {
        matches!(self, Kind::Date | Kind::Time | Kind::DateTime)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Kind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::from_tag(s).ok_or_else(|| ParseError::UnknownKind { tag: s.to_string() })
    }
}

/// A single field value of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 text.
    Text(String),

    /// 64-bit signed integer.
    Integer(i64),

    /// Boolean.
    Boolean(bool),

    /// 64-bit IEEE 754 float.
    Float(f64),

    /// Calendar date.
    Date(Date),

    /// Time of day, second resolution.
    Time(Time),

    /// Date and time of day.
    DateTime(DateTime),
}

impl Value {
    /// Returns the kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Text(_) => Kind::Text,
            Value::Integer(_) => Kind::Integer,
            Value::Boolean(_) => Kind::Boolean,
            Value::Float(_) => Kind::Float,
            Value::Date(_) => Kind::Date,
            Value::Time(_) => Kind::Time,
            Value::DateTime(_) => Kind::DateTime,
        }
    }

    /// Parses a string as a value of the given kind.
    pub fn parse(kind: Kind, input: &str) -> Result<Value, FieldError> {
        codec::parse_value(kind, input)
    }

    /// Renders this value in its canonical string form.
    pub fn render(&self) -> String {
        codec::render_value(self)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<Date> {
        match self {
            Value::Date(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<Time> {
        match self {
            Value::Time(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime> {
        match self {
            Value::DateTime(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Date> for Value {
    fn from(v: Date) -> Self {
        Value::Date(v)
    }
}

impl From<Time> for Value {
    fn from(v: Time) -> Self {
        Value::Time(v)
    }
}

impl From<DateTime> for Value {
    fn from(v: DateTime) -> Self {
        Value::DateTime(v)
    }
}
