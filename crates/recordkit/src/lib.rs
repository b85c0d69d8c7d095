//! recordkit: typed fields and fixed-shape heterogeneous records.
//!
//! This crate provides a small type system of field kinds, each with a
//! canonical in-memory representation and a lossless string encoding, plus a
//! generic record type that composes a fixed list of typed fields into one
//! entity.
//!
//! # Overview
//!
//! - **Fields**: [`Field<T>`] holds one value of a fixed [`Kind`]
//!   (Text, Integer, Boolean, Float, Date, Time, DateTime)
//! - **Temporal values**: [`Date`], [`Time`] and [`DateTime`] are validated at
//!   construction and totally ordered
//! - **Records**: [`Record<S>`] holds one field per position of a [`Shape`],
//!   with static metadata (count, names, type tags)
//! - **Schemas**: [`Schema`] and [`Row`] describe and hold records whose shape
//!   is only known at runtime
//!
//! # Quick Start
//!
//! ```rust
//! use recordkit::{record_shape, Date, Record};
//!
//! record_shape! {
//!     /// A student enrolled in the programme.
//!     pub struct Student as "Student" {
//!         name: String,
//!         in_reading: bool,
//!         admission_time: Date,
//!         student_id: String,
//!         education_system: i64,
//!     }
//! }
//!
//! let record = Record::<Student>::from_values((
//!     "Alice".to_string(),
//!     true,
//!     Date::new(2024, 9, 1).unwrap(),
//!     "2024303424".to_string(),
//!     4,
//! ));
//!
//! let line = record.to_strings();
//! assert_eq!(line, ["Alice", "true", "2024-09-01", "2024303424", "4"]);
//!
//! let parsed = Record::<Student>::from_strings(&line).unwrap();
//! assert_eq!(parsed, record);
//! assert_eq!(*parsed.get::<4>(), 4);
//! assert_eq!(Record::<Student>::field_types(), ["Text", "Boolean", "Date", "Text", "Integer"]);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Kind, Value, Field, Record, Schema, temporal values)
//! - [`codec`]: String rendering and parsing per field kind
//! - [`validate`]: Whole-line validation against a schema
//! - [`util`]: Calendar rules and pattern formatting
//! - [`error`]: Error types
//! - [`limits`]: Size limits for record shapes and schemas
//!
//! # Round Trips
//!
//! Rendering and parsing are symmetric for every kind, so
//! `parse(render(v)) == v` holds for every legally constructed value. At
//! record granularity, `from_strings(to_strings(r)) == r`.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod util;
pub mod validate;

mod macros;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-export commonly used types at crate root
pub use codec::{parse_value, render_value};
pub use error::{ErrorKind, FieldError, ParseError, RecordError, ValidationError};
pub use model::{
    BooleanField, Date, DateField, DateTime, DateTimeField, Field, FieldAt, FieldDef, FieldTuple,
    FieldValue, FloatField, IntegerField, Kind, Record, Row, Schema, Shape, TextField, Time,
    TimeField, Value,
};
pub use validate::{validate_field, validate_strings};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
