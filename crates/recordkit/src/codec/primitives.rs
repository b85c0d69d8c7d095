//! Primitive string encoding/decoding for scalar field kinds.
//!
//! Implements the integer, boolean and float grammars plus the numeric
//! component readers used by the temporal layouts.

use crate::error::ParseError;
use crate::model::Kind;

// =============================================================================
// SCALARS
// =============================================================================

/// Parses a decimal `i64`.
///
/// Accepts an optional sign followed by ASCII digits. Surrounding whitespace
/// and trailing characters are rejected.
pub fn parse_integer(input: &str) -> Result<i64, ParseError> {
    input.parse().map_err(|_| ParseError::InvalidLiteral {
        kind: Kind::Integer,
        input: input.to_string(),
    })
}

/// Renders an `i64` in decimal, with no leading zeros.
pub fn render_integer(value: i64) -> String {
    value.to_string()
}

/// Parses the literal `true` or `false`. Nothing else is accepted.
pub fn parse_boolean(input: &str) -> Result<bool, ParseError> {
    match input {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidLiteral {
            kind: Kind::Boolean,
            input: input.to_string(),
        }),
    }
}

pub fn render_boolean(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Parses an `f64` using Rust's float grammar (`1.5`, `-2e10`, `inf`, ...).
pub fn parse_float(input: &str) -> Result<f64, ParseError> {
    input.parse().map_err(|_| ParseError::InvalidLiteral {
        kind: Kind::Float,
        input: input.to_string(),
    })
}

/// Renders an `f64` as the shortest decimal string that parses back to the
/// same value.
///
/// Magnitudes in `[1e-5, 1e16)` always use positional notation (`1000`,
/// `0.25`). Outside that range the shorter of positional and exponent
/// notation wins, so `1e300` stays five characters long.
pub fn render_float(value: f64) -> String {
    let plain = value.to_string();
    if !value.is_finite() || value == 0.0 || (1e-5..1e16).contains(&value.abs()) {
        return plain;
    }
    let exponent = format!("{:e}", value);
    if exponent.len() < plain.len() { exponent } else { plain }
}

// =============================================================================
// TEMPORAL COMPONENTS
// =============================================================================

/// Reads an unsigned component made only of ASCII digits.
///
/// Signs, whitespace and empty strings are rejected, so `"+1"` or `" 1"` never
/// sneak through as valid months or hours.
pub fn parse_unsigned_component(
    input: &str,
    kind: Kind,
    component: &'static str,
) -> Result<u32, ParseError> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_component(input, kind, component));
    }
    input
        .parse()
        .map_err(|_| invalid_component(input, kind, component))
}

/// Reads a year: an optional leading `-` followed by ASCII digits.
pub fn parse_year_component(input: &str, kind: Kind) -> Result<i64, ParseError> {
    let digits = input.strip_prefix('-').unwrap_or(input);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_component(input, kind, "year"));
    }
    input.parse().map_err(|_| invalid_component(input, kind, "year"))
}

fn invalid_component(input: &str, kind: Kind, component: &'static str) -> ParseError {
    ParseError::InvalidComponent {
        kind,
        component,
        input: input.to_string(),
    }
}
