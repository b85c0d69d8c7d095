//! Data model types for recordkit.
//!
//! This module contains all the core types for representing records:
//! - Kinds and dynamically typed values
//! - Temporal values (dates, times, date-times)
//! - Typed fields
//! - Statically shaped records
//! - Runtime schemas and rows

pub mod field;
pub mod record;
pub mod schema;
pub mod temporal;
pub mod value;

pub use field::{
    BooleanField, DateField, DateTimeField, Field, FieldValue, FloatField, IntegerField,
    TextField, TimeField,
};
pub use record::{FieldAt, FieldTuple, Record, Shape};
pub use schema::{FieldDef, Row, Schema};
pub use temporal::{Date, DateTime, Time};
pub use value::{Kind, Value};
