//! Error types for field parsing, temporal validation and record construction.

use thiserror::Error;

use crate::model::Kind;

/// Broad error categories reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A string does not match the grammar of its field kind.
    Parse,
    /// A temporal value violates a range or calendar rule.
    Validation,
    /// A positional or named field lookup missed.
    Index,
    /// A record or schema does not have the expected shape.
    Shape,
}

impl ErrorKind {
    /// Returns the category name (e.g., "ParseError").
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "ParseError",
            ErrorKind::Validation => "ValidationError",
            ErrorKind::Index => "IndexError",
            ErrorKind::Shape => "ShapeError",
        }
    }
}

/// A temporal value's components violate range or calendar rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid month {month}: expected 1..=12")]
    InvalidMonth { month: u32 },

    #[error("invalid day {day}: expected 1..=31")]
    InvalidDay { day: u32 },

    #[error("day {day} does not exist in month {month} of year {year}")]
    DayOutOfMonth { year: i64, month: u32, day: u32 },

    #[error("February 29 does not exist in non-leap year {year}")]
    NotLeapYear { year: i64 },

    #[error("invalid hour {hour}: expected 0..=23")]
    InvalidHour { hour: u32 },

    #[error("invalid minute {minute}: expected 0..=59")]
    InvalidMinute { minute: u32 },

    #[error("invalid second {second}: expected 0..=59")]
    InvalidSecond { second: u32 },
}

/// A string does not match the grammar of the kind it is parsed as.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unable to convert {input:?} to {kind}")]
    InvalidLiteral { kind: Kind, input: String },

    #[error("malformed {kind} {input:?}: expected {expected}")]
    MalformedLayout {
        kind: Kind,
        input: String,
        expected: &'static str,
    },

    #[error("invalid {component} {input:?} in {kind}")]
    InvalidComponent {
        kind: Kind,
        component: &'static str,
        input: String,
    },

    #[error("unknown field kind {tag:?}")]
    UnknownKind { tag: String },

    #[error("no string given for {kind} field")]
    MissingValue { kind: Kind },
}

/// Failure to build a single field from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl FieldError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldError::Parse(_) => ErrorKind::Parse,
            FieldError::Validation(_) => ErrorKind::Validation,
        }
    }
}

/// Failure to build, index or reshape a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("field index {index} out of range for {record} ({count} fields)")]
    IndexOutOfRange {
        record: String,
        index: usize,
        count: usize,
    },

    #[error("{record} has no field named {name:?}")]
    UnknownField { record: String, name: String },

    #[error("{record} expects {expected} field values, got {actual}")]
    ArityMismatch {
        record: String,
        expected: usize,
        actual: usize,
    },

    #[error("field {index} ({name}) of {record}: {source}")]
    Field {
        record: String,
        index: usize,
        name: String,
        source: FieldError,
    },

    #[error("field {index} ({name}) of {record} expects {expected}, got {actual}")]
    KindMismatch {
        record: String,
        index: usize,
        name: String,
        expected: Kind,
        actual: Kind,
    },

    #[error("{record} declares field {name:?} more than once")]
    DuplicateField { record: String, name: String },

    #[error("{record} declares a field with an empty name at position {index}")]
    EmptyFieldName { record: String, index: usize },

    #[error("{record} declares no fields")]
    EmptySchema { record: String },

    #[error("{record} declares {count} fields, maximum is {max}")]
    TooManyFields {
        record: String,
        count: usize,
        max: usize,
    },
}

impl RecordError {
    /// Returns the category of this error.
    ///
    /// Field failures report the category of the underlying field error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecordError::IndexOutOfRange { .. } | RecordError::UnknownField { .. } => {
                ErrorKind::Index
            }
            RecordError::Field { source, .. } => source.kind(),
            _ => ErrorKind::Shape,
        }
    }

    /// Returns the position of the offending field, if the error names one.
    pub fn index(&self) -> Option<usize> {
        match self {
            RecordError::IndexOutOfRange { index, .. }
            | RecordError::Field { index, .. }
            | RecordError::KindMismatch { index, .. }
            | RecordError::EmptyFieldName { index, .. } => Some(*index),
            _ => None,
        }
    }
}
