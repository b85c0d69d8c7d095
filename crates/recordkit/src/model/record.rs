//! Fixed-shape heterogeneous records.
//!
//! A [`Shape`] names a record type and lists its fields once: a tuple of
//! [`Field`] types plus positionally aligned field names. [`Record<S>`] owns
//! one value of that tuple and exposes typed access by compile-time index,
//! dynamic access by runtime index or name, and static metadata.
//!
//! Shapes are usually declared with [`record_shape!`](crate::record_shape).
//!
//! ```rust
//! use recordkit::{record_shape, Record, Time};
//!
//! record_shape! {
//!     pub struct Shift {
//!         guard: String,
//!         starts: Time,
//!         hours: i64,
//!     }
//! }
//!
//! let shift = Record::<Shift>::from_strings(&["Lee", "22:00:00", "8"]).unwrap();
//! assert_eq!(shift.get::<0>(), "Lee");
//! assert_eq!(shift.get_str::<1>(), "22:00:00");
//! assert_eq!(Record::<Shift>::field_count(), 3);
//! assert!(shift.value(3).is_err());
//! ```

use std::fmt;

use crate::error::{FieldError, ParseError, RecordError};
use crate::model::{Field, FieldValue, Kind, Schema, Value};

/// A tuple of fields that can back a record.
///
/// Implemented for tuples of 1 to [`MAX_RECORD_FIELDS`](crate::limits::MAX_RECORD_FIELDS)
/// `Field<T>` elements.
pub trait FieldTuple: Clone + fmt::Debug + PartialEq + Sized {
    /// Number of fields.
    const LEN: usize;

    /// The matching tuple of native values.
    type Values;

    /// Positional kinds.
    fn kinds() -> Vec<Kind>;

    fn from_values(values: Self::Values) -> Self;

    fn into_values(self) -> Self::Values;

    /// Returns the value at `index`, or None when out of range.
    fn value_at(&self, index: usize) -> Option<Value>;

    /// Renders the field at `index`, or None when out of range.
    fn render_at(&self, index: usize) -> Option<String>;

    /// Renders every field in order.
    fn render_all(&self) -> Vec<String>;

    /// Parses one string per field, stopping at the first failure.
    ///
    /// A position with no string fails with [`ParseError::MissingValue`];
    /// strings past `LEN` are ignored.
    fn parse_all<S: AsRef<str>>(inputs: &[S]) -> Result<Self, (usize, FieldError)>;
}

/// Typed access to the field at position `N` of a tuple.
pub trait FieldAt<const N: usize> {
    type Value: FieldValue;

    fn field_at(&self) -> &Field<Self::Value>;

    fn field_at_mut(&mut self) -> &mut Field<Self::Value>;
}

macro_rules! field_at {
    (@one ($($All:ident),+) ; $idx:tt : $T:ident) => {
        impl<$($All: FieldValue),+> FieldAt<$idx> for ($(Field<$All>,)+) {
            type Value = $T;

            fn field_at(&self) -> &Field<$T> {
                &self.$idx
            }

            fn field_at_mut(&mut self) -> &mut Field<$T> {
                &mut self.$idx
            }
        }
    };
    ($all:tt ; $( $idx:tt : $T:ident ),+) => {
        $( field_at!(@one $all ; $idx : $T); )+
    };
}

macro_rules! field_tuple {
    ($len:literal => $( $idx:tt : $T:ident ),+ ) => {
        impl<$($T: FieldValue),+> FieldTuple for ($(Field<$T>,)+) {
            const LEN: usize = $len;

            type Values = ($($T,)+);

            fn kinds() -> Vec<Kind> {
                vec![$($T::KIND),+]
            }

            fn from_values(values: Self::Values) -> Self {
                ($(Field::new(values.$idx),)+)
            }

            fn into_values(self) -> Self::Values {
                ($(self.$idx.into_inner(),)+)
            }

            fn value_at(&self, index: usize) -> Option<Value> {
                match index {
                    $($idx => Some(self.$idx.to_value()),)+
                    _ => None,
                }
            }

            fn render_at(&self, index: usize) -> Option<String> {
                match index {
                    $($idx => Some(self.$idx.render()),)+
                    _ => None,
                }
            }

            fn render_all(&self) -> Vec<String> {
                vec![$(self.$idx.render()),+]
            }

            fn parse_all<S: AsRef<str>>(inputs: &[S]) -> Result<Self, (usize, FieldError)> {
                Ok(($({
                    let input = inputs
                        .get($idx)
                        .ok_or_else(|| ($idx as usize, FieldError::from(ParseError::MissingValue { kind: $T::KIND })))?;
                    Field::<$T>::parse(input.as_ref()).map_err(|e| ($idx as usize, e))?
                },)+))
            }
        }

        field_at!(($($T),+) ; $($idx : $T),+);
    };
}

field_tuple!(1 => 0: A);
field_tuple!(2 => 0: A, 1: B);
field_tuple!(3 => 0: A, 1: B, 2: C);
field_tuple!(4 => 0: A, 1: B, 2: C, 3: D);
field_tuple!(5 => 0: A, 1: B, 2: C, 3: D, 4: E);
field_tuple!(6 => 0: A, 1: B, 2: C, 3: D, 4: E, 5: F);
field_tuple!(7 => 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G);
field_tuple!(8 => 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H);
field_tuple!(9 => 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I);
field_tuple!(10 => 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J);
field_tuple!(11 => 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J, 10: K);
field_tuple!(12 => 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J, 10: K, 11: L);

/// Schema descriptor for a statically typed record.
pub trait Shape {
    /// The fields, in order.
    type Fields: FieldTuple;

    /// Type tag of the whole record (e.g., "Prisoner").
    const NAME: &'static str;

    /// Field names, positionally aligned with `Fields`.
    const FIELD_NAMES: &'static [&'static str];
}

/// Returns true when no name appears twice. Usable in const context.
pub const fn names_are_unique(names: &[&str]) -> bool {
    let mut i = 0;
    while i < names.len() {
        let mut j = i + 1;
        while j < names.len() {
            if bytes_eq(names[i].as_bytes(), names[j].as_bytes()) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut k = 0;
    while k < a.len() {
        if a[k] != b[k] {
            return false;
        }
        k += 1;
    }
    true
}

/// A record of shape `S`: one owned field per position.
pub struct Record<S: Shape> {
    fields: S::Fields,
}

impl<S: Shape> Record<S> {
    /// Evaluated once per shape; rejects shapes whose name list does not
    /// match the field tuple or names a field twice.
    const ALIGNED: () = {
        assert!(
            S::FIELD_NAMES.len() == <S::Fields as FieldTuple>::LEN,
            "record shape field names must align with its fields"
        );
        assert!(
            names_are_unique(S::FIELD_NAMES),
            "record shape field names must be unique"
        );
    };

    /// Creates a record from typed fields.
    pub fn new(fields: S::Fields) -> Self {
        let () = Self::ALIGNED;
        Record { fields }
    }

    /// Creates a record from native values.
    pub fn from_values(values: <S::Fields as FieldTuple>::Values) -> Self {
        Self::new(S::Fields::from_values(values))
    }

    /// Creates a record from one string per field.
    ///
    /// All-or-nothing: the first field that fails to parse aborts
    /// construction and is reported with its position and name.
    pub fn from_strings<T: AsRef<str>>(values: &[T]) -> Result<Self, RecordError> {
        let expected = Self::field_count();
        if values.len() != expected {
            return Err(RecordError::ArityMismatch {
                record: S::NAME.to_string(),
                expected,
                actual: values.len(),
            });
        }

        match S::Fields::parse_all(values) {
            Ok(fields) => Ok(Self::new(fields)),
            Err((index, source)) => {
                tracing::debug!(record = S::NAME, index, error = %source, "rejected field string");
                Err(RecordError::Field {
                    record: S::NAME.to_string(),
                    index,
                    name: Self::field_name(index).to_string(),
                    source,
                })
            }
        }
    }

    // =========================================================================
    // Static metadata
    // =========================================================================

    pub fn field_count() -> usize {
        <S::Fields as FieldTuple>::LEN
    }

    pub fn field_names() -> &'static [&'static str] {
        S::FIELD_NAMES
    }

    pub fn field_kinds() -> Vec<Kind> {
        S::Fields::kinds()
    }

    /// Positional type tags (e.g., `["Text", "Integer"]`).
    pub fn field_types() -> Vec<&'static str> {
        S::Fields::kinds().into_iter().map(Kind::tag).collect()
    }

    /// Type tag of the record itself.
    pub fn type_tag() -> &'static str {
        S::NAME
    }

    /// Builds the runtime schema describing this shape.
    pub fn schema() -> Result<Schema, RecordError> {
        Schema::new(
            S::NAME,
            S::FIELD_NAMES.iter().copied().zip(S::Fields::kinds()),
        )
    }

    fn field_name(index: usize) -> &'static str {
        S::FIELD_NAMES.get(index).copied().unwrap_or_default()
    }

    // =========================================================================
    // Typed access (index checked at compile time)
    // =========================================================================

    /// Returns the value of field `N`.
    pub fn get<const N: usize>(&self) -> &<S::Fields as FieldAt<N>>::Value
    where
        S::Fields: FieldAt<N>,
    {
        <S::Fields as FieldAt<N>>::field_at(&self.fields).value()
    }

    /// Returns mutable access to the value of field `N`.
    pub fn get_mut<const N: usize>(&mut self) -> &mut <S::Fields as FieldAt<N>>::Value
    where
        S::Fields: FieldAt<N>,
    {
        <S::Fields as FieldAt<N>>::field_at_mut(&mut self.fields).value_mut()
    }

    pub fn field<const N: usize>(&self) -> &Field<<S::Fields as FieldAt<N>>::Value>
    where
        S::Fields: FieldAt<N>,
    {
        <S::Fields as FieldAt<N>>::field_at(&self.fields)
    }

    /// Renders field `N`.
    pub fn get_str<const N: usize>(&self) -> String
    where
        S::Fields: FieldAt<N>,
    {
        <S::Fields as FieldAt<N>>::field_at(&self.fields).render()
    }

    // =========================================================================
    // Dynamic access
    // =========================================================================

    /// Returns the value at a runtime index.
    pub fn value(&self, index: usize) -> Result<Value, RecordError> {
        self.fields
            .value_at(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Renders the field at a runtime index.
    pub fn value_str(&self, index: usize) -> Result<String, RecordError> {
        self.fields
            .render_at(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Returns the value of the field with the given name.
    pub fn value_by_name(&self, name: &str) -> Result<Value, RecordError> {
        let index = S::FIELD_NAMES
            .iter()
            .position(|n| *n == name)
            .ok_or_else(|| RecordError::UnknownField {
                record: S::NAME.to_string(),
                name: name.to_string(),
            })?;
        self.value(index)
    }

    /// Returns every value in order.
    pub fn values(&self) -> Vec<Value> {
        (0..Self::field_count())
            .filter_map(|i| self.fields.value_at(i))
            .collect()
    }

    /// Returns `(name, value)` pairs in order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Value)> + '_ {
        S::FIELD_NAMES
            .iter()
            .enumerate()
            .filter_map(|(i, name)| self.fields.value_at(i).map(|v| (*name, v)))
    }

    /// Renders every field in order; the serialization contract for storage.
    pub fn to_strings(&self) -> Vec<String> {
        self.fields.render_all()
    }

    pub fn fields(&self) -> &S::Fields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut S::Fields {
        &mut self.fields
    }

    pub fn into_fields(self) -> S::Fields {
        self.fields
    }

    pub fn into_values(self) -> <S::Fields as FieldTuple>::Values {
        self.fields.into_values()
    }

    fn out_of_range(&self, index: usize) -> RecordError {
        RecordError::IndexOutOfRange {
            record: S::NAME.to_string(),
            index,
            count: Self::field_count(),
        }
    }
}

impl<S: Shape> Clone for Record<S> {
    fn clone(&self) -> Self {
        Record {
            fields: self.fields.clone(),
        }
    }
}

impl<S: Shape> PartialEq for Record<S> {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl<S: Shape> fmt::Debug for Record<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(S::NAME);
        for (name, value) in self.entries() {
            s.field(name, &value);
        }
        s.finish()
    }
}

impl<S: Shape> Default for Record<S>
where
    S::Fields: Default,
{
    fn default() -> Self {
        Self::new(S::Fields::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ParseError, ValidationError};
    use crate::model::Date;

    struct Prisoner;

    impl Shape for Prisoner {
        type Fields = (Field<String>, Field<bool>, Field<Date>, Field<String>, Field<i64>);
        const NAME: &'static str = "Prisoner";
        const FIELD_NAMES: &'static [&'static str] = &[
            "name",
            "in_reading",
            "admission_time",
            "student_id",
            "education_system",
        ];
    }

    fn prisoner() -> Record<Prisoner> {
        Record::new((
            Field::new("郭金锋".to_string()),
            Field::new(true),
            Field::new(Date::new(2024, 9, 1).unwrap()),
            Field::new("2024303424".to_string()),
            Field::new(4),
        ))
    }

    #[test]
    fn test_typed_values() {
        let p = prisoner();
        assert_eq!(p.get::<0>(), "郭金锋");
        assert!(*p.get::<1>());
        let date = p.get::<2>();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 9, 1));
        assert_eq!(p.get::<3>(), "2024303424");
        assert_eq!(*p.get::<4>(), 4);
        assert_eq!(p.field::<4>().kind(), Kind::Integer);
    }

    #[test]
    fn test_typed_strings() {
        let p = prisoner();
        assert_eq!(p.get_str::<0>(), "郭金锋");
        assert_eq!(p.get_str::<1>(), "true");
        assert_eq!(p.get_str::<2>(), "2024-09-01");
        assert_eq!(p.get_str::<3>(), "2024303424");
        assert_eq!(p.get_str::<4>(), "4");
        assert_eq!(
            p.to_strings(),
            ["郭金锋", "true", "2024-09-01", "2024303424", "4"]
        );
    }

    #[test]
    fn test_metadata() {
        assert_eq!(Record::<Prisoner>::field_count(), 5);
        assert_eq!(Record::<Prisoner>::field_names().len(), 5);
        assert_eq!(
            Record::<Prisoner>::field_types(),
            ["Text", "Boolean", "Date", "Text", "Integer"]
        );
        assert_eq!(Record::<Prisoner>::type_tag(), "Prisoner");

        let schema = Record::<Prisoner>::schema().unwrap();
        assert_eq!(schema.len(), 5);
        assert_eq!(schema.index_of("student_id"), Some(3));
    }

    #[test]
    fn test_from_strings_roundtrip() {
        let p = prisoner();
        let parsed = Record::<Prisoner>::from_strings(&p.to_strings()).unwrap();
        assert_eq!(parsed, p);
    }

    #[test]
    fn test_from_strings_reports_failing_field() {
        let err = Record::<Prisoner>::from_strings(&["a", "yes", "2024-09-01", "b", "4"])
            .unwrap_err();
        assert!(matches!(
            &err,
            RecordError::Field {
                index: 1,
                name,
                source: FieldError::Parse(ParseError::InvalidLiteral { .. }),
                ..
            } if name == "in_reading"
        ));
        assert_eq!(err.kind(), ErrorKind::Parse);

        let err = Record::<Prisoner>::from_strings(&["a", "true", "2021-02-29", "b", "4"])
            .unwrap_err();
        assert_eq!(
            err,
            RecordError::Field {
                record: "Prisoner".to_string(),
                index: 2,
                name: "admission_time".to_string(),
                source: FieldError::Validation(ValidationError::NotLeapYear { year: 2021 }),
            }
        );
    }

    #[test]
    fn test_from_strings_first_failure_wins() {
        let err = Record::<Prisoner>::from_strings(&["a", "maybe", "bad", "b", "x"]).unwrap_err();
        assert_eq!(err.index(), Some(1));
    }

    #[test]
    fn test_names_are_unique() {
        assert!(names_are_unique(Prisoner::FIELD_NAMES));
        assert!(names_are_unique(&["a"]));
        assert!(names_are_unique(&["ab", "a", "b"]));
        assert!(!names_are_unique(&["id", "name", "id"]));
        assert!(!names_are_unique(&["", ""]));

        const CHECKED: bool = names_are_unique(&["x", "y"]);
        assert!(CHECKED);
    }

    #[test]
    fn test_parse_all_short_input() {
        type Pair = (Field<i64>, Field<i64>);

        let err = Pair::parse_all(&["1"]).unwrap_err();
        assert_eq!(
            err,
            (1, FieldError::Parse(ParseError::MissingValue { kind: Kind::Integer }))
        );
        assert!(Pair::parse_all::<&str>(&[]).is_err());
        assert_eq!(
            Pair::parse_all(&["1", "2", "3"]).unwrap(),
            (Field::new(1), Field::new(2))
        );
    }

    #[test]
    fn test_from_strings_arity() {
        let err = Record::<Prisoner>::from_strings(&["a", "true"]).unwrap_err();
        assert_eq!(
            err,
            RecordError::ArityMismatch {
                record: "Prisoner".to_string(),
                expected: 5,
                actual: 2,
            }
        );
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_dynamic_access() {
        let p = prisoner();
        assert_eq!(p.value(4), Ok(Value::Integer(4)));
        assert_eq!(p.value_str(2).unwrap(), "2024-09-01");
        assert_eq!(p.value_by_name("in_reading"), Ok(Value::Boolean(true)));

        let err = p.value(5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Index);
        assert!(p.value_str(99).is_err());
        assert!(matches!(
            p.value_by_name("crime"),
            Err(RecordError::UnknownField { .. })
        ));

        let names: Vec<&str> = p.entries().map(|(name, _)| name).collect();
        assert_eq!(names, Record::<Prisoner>::field_names());
        assert_eq!(p.values().len(), 5);
    }

    #[test]
    fn test_mutation_and_copy() {
        let mut p = prisoner();
        let copy = p.clone();
        *p.get_mut::<4>() = 5;
        p.get_mut::<0>().push('!');
        assert_eq!(p.get_str::<4>(), "5");
        assert_eq!(p.get::<0>(), "郭金锋!");
        assert_ne!(p, copy);

        let (name, _, _, _, system) = copy.into_values();
        assert_eq!(name, "郭金锋");
        assert_eq!(system, 4);
    }

    #[test]
    fn test_debug_lists_named_fields() {
        let rendered = format!("{:?}", prisoner());
        assert!(rendered.starts_with("Prisoner {"));
        assert!(rendered.contains("education_system: Integer(4)"));
    }
}
