//! Size limits for record shapes and runtime schemas.

/// Largest field count of a statically typed record shape.
///
/// [`FieldTuple`](crate::FieldTuple) is implemented for tuples of
/// 1 to `MAX_RECORD_FIELDS` fields.
pub const MAX_RECORD_FIELDS: usize = 12;

/// Largest field count accepted by a runtime [`Schema`](crate::Schema).
pub const MAX_SCHEMA_FIELDS: usize = 256;
