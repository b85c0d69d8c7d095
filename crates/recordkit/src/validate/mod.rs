//! Validation of field strings before records are built.
//!
//! Construction through [`Record::from_strings`](crate::Record::from_strings)
//! or [`Schema::parse_row`] stops at the first bad field. The functions here
//! check a whole line instead and report every failure, which is what an
//! input form or a bulk import needs.

use crate::codec;
use crate::error::{FieldError, RecordError};
use crate::model::{Kind, Schema};

/// Checks that `input` is the canonical string form of a value of `kind`.
pub fn validate_field(kind: Kind, input: &str) -> Result<(), FieldError> {
    codec::parse_value(kind, input).map(|_| ())
}

/// Validates a line of field strings against a schema.
///
/// On failure, returns every error found: an arity mismatch on its own, or
/// one [`RecordError::Field`] per rejected field, in field order.
pub fn validate_strings<T: AsRef<str>>(
    schema: &Schema,
    values: &[T],
) -> Result<(), Vec<RecordError>> {
    schema.check_arity(values.len()).map_err(|e| vec![e])?;

    let errors: Vec<RecordError> = schema
        .fields()
        .iter()
        .zip(values)
        .enumerate()
        .filter_map(|(index, (def, input))| {
            validate_field(def.kind, input.as_ref())
                .err()
                .map(|source| schema.field_error(index, source))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(schema = schema.name(), failures = errors.len(), "line failed validation");
        Err(errors)
    }
}
