//! String encoding/decoding for recordkit fields.
//!
//! Every kind renders to exactly one canonical string and parses that string
//! back to an equal value.

pub mod primitives;
pub mod value;

pub use primitives::{
    parse_boolean, parse_float, parse_integer, render_boolean, render_float, render_integer,
};
pub use value::{parse_date, parse_datetime, parse_time, parse_value, render_value};
