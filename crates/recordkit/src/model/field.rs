//! Typed fields.
//!
//! [`FieldValue`] is implemented once per native value type and ties it to a
//! [`Kind`] together with its string encoding. [`Field<T>`] wraps exactly one
//! such value; its kind is fixed by `T` and cannot change.

use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::error::FieldError;
use crate::model::{Date, DateTime, Kind, Time, Value};

/// A native type usable as the value of a field.
pub trait FieldValue: Clone + fmt::Debug + PartialEq + Sized {
    /// The kind every field of this type has.
    const KIND: Kind;

    /// Renders the value in its canonical string form.
    fn render(&self) -> String;

    /// Parses the canonical string form (the inverse of [`render`](Self::render)).
    fn parse(input: &str) -> Result<Self, FieldError>;

    /// Converts into a dynamically typed [`Value`].
    fn into_value(self) -> Value;

    fn to_value(&self) -> Value {
        self.clone().into_value()
    }
}

impl FieldValue for String {
    const KIND: Kind = Kind::Text;

    fn render(&self) -> String {
        self.clone()
    }

    fn parse(input: &str) -> Result<Self, FieldError> {
        Ok(input.to_string())
    }

    fn into_value(self) -> Value {
        Value::Text(self)
    }
}

impl FieldValue for i64 {
    const KIND: Kind = Kind::Integer;

    fn render(&self) -> String {
        codec::render_integer(*self)
    }

    fn parse(input: &str) -> Result<Self, FieldError> {
        Ok(codec::parse_integer(input)?)
    }

    fn into_value(self) -> Value {
        Value::Integer(self)
    }
}

impl FieldValue for bool {
    const KIND: Kind = Kind::Boolean;

    fn render(&self) -> String {
        codec::render_boolean(*self).to_string()
    }

    fn parse(input: &str) -> Result<Self, FieldError> {
        Ok(codec::parse_boolean(input)?)
    }

    fn into_value(self) -> Value {
        Value::Boolean(self)
    }
}

impl FieldValue for f64 {
    const KIND: Kind = Kind::Float;

    fn render(&self) -> String {
        codec::render_float(*self)
    }

    fn parse(input: &str) -> Result<Self, FieldError> {
        Ok(codec::parse_float(input)?)
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl FieldValue for Date {
    const KIND: Kind = Kind::Date;

    fn render(&self) -> String {
        self.to_string()
    }

    fn parse(input: &str) -> Result<Self, FieldError> {
        codec::parse_date(input)
    }

    fn into_value(self) -> Value {
        Value::Date(self)
    }
}

impl FieldValue for Time {
    const KIND: Kind = Kind::Time;

    fn render(&self) -> String {
        self.to_string()
    }

    fn parse(input: &str) -> Result<Self, FieldError> {
        codec::parse_time(input)
    }

    fn into_value(self) -> Value {
        Value::Time(self)
    }
}

impl FieldValue for DateTime {
    const KIND: Kind = Kind::DateTime;

    fn render(&self) -> String {
        self.to_string()
    }

    fn parse(input: &str) -> Result<Self, FieldError> {
        codec::parse_datetime(input)
    }

    fn into_value(self) -> Value {
        Value::DateTime(self)
    }
}

/// A single field holding one value of kind `T::KIND`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Field<T> {
    value: T,
}

impl<T: FieldValue> Field<T> {
    /// The kind of this field, known without an instance.
    pub const KIND: Kind = T::KIND;

    /// Creates a field from a typed value.
    pub fn new(value: T) -> Self {
        Field { value }
    }

    /// Creates a field by parsing its canonical string form.
    pub fn parse(input: &str) -> Result<Self, FieldError> {
        T::parse(input).map(Field::new)
    }

    /// Returns the type tag of this field kind (e.g., "Integer").
    pub fn type_tag() -> &'static str {
        T::KIND.tag()
    }

    pub fn kind(&self) -> Kind {
        T::KIND
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the value. The kind stays the same.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replaces the value in place, returning the previous one.
    pub fn set(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Renders the value in its canonical string form.
    pub fn render(&self) -> String {
        self.value.render()
    }

    pub fn to_value(&self) -> Value {
        self.value.to_value()
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field { value }
    }
}

impl<T: FieldValue> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<T: FieldValue> FromStr for Field<T> {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::parse(s)
    }
}

pub type TextField = Field<String>;
pub type IntegerField = Field<i64>;
pub type BooleanField = Field<bool>;
pub type FloatField = Field<f64>;
pub type DateField = Field<Date>;
pub type TimeField = Field<Time>;
pub type DateTimeField = Field<DateTime>;
