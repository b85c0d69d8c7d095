//! Runtime schemas and rows.
//!
//! A [`Schema`] is an explicit, ordered list of `(name, kind)` pairs. It
//! describes a record whose shape is only known at runtime, or the runtime
//! view of a static [`Shape`](crate::Shape). A [`Row`] holds one [`Value`] per
//! schema field and is checked against the schema's kinds.

use std::borrow::Cow;

use rustc_hash::FxHashMap;

use crate::codec;
use crate::error::RecordError;
use crate::limits::MAX_SCHEMA_FIELDS;
use crate::model::{Kind, Value};

/// A named, typed field slot in a schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDef {
    pub name: Cow<'static, str>,
    pub kind: Kind,
}

/// Ordered field definitions with a name index.
#[derive(Debug, Clone)]
pub struct Schema {
    name: Cow<'static, str>,
    fields: Vec<FieldDef>,
    /// Field name to position.
    index: FxHashMap<Cow<'static, str>, usize>,
}

impl Schema {
    /// Creates a schema from `(name, kind)` pairs.
    ///
    /// Field names must be non-empty and unique, and there must be between
    /// 1 and [`MAX_SCHEMA_FIELDS`] of them.
    pub fn new<N, I, F>(name: N, fields: I) -> Result<Schema, RecordError>
    where
        N: Into<Cow<'static, str>>,
        I: IntoIterator<Item = (F, Kind)>,
        F: Into<Cow<'static, str>>,
    {
        let name = name.into();
        let fields: Vec<FieldDef> = fields
            .into_iter()
            .map(|(field, kind)| FieldDef {
                name: field.into(),
                kind,
            })
            .collect();

        if fields.is_empty() {
            return Err(RecordError::EmptySchema {
                record: name.into_owned(),
            });
        }
        if fields.len() > MAX_SCHEMA_FIELDS {
            return Err(RecordError::TooManyFields {
                record: name.into_owned(),
                count: fields.len(),
                max: MAX_SCHEMA_FIELDS,
            });
        }

        let mut index = FxHashMap::with_capacity_and_hasher(fields.len(), Default::default());
        for (position, def) in fields.iter().enumerate() {
            if def.name.is_empty() {
                return Err(RecordError::EmptyFieldName {
                    record: name.into_owned(),
                    index: position,
                });
            }
            if index.insert(def.name.clone(), position).is_some() {
                return Err(RecordError::DuplicateField {
                    record: name.into_owned(),
                    name: def.name.to_string(),
                });
            }
        }

        tracing::trace!(schema = %name, fields = fields.len(), "built schema");
        Ok(Schema {
            name,
            fields,
            index,
        })
    }

    /// Type tag of the record this schema describes.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false; a schema has at least one field.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&FieldDef> {
        self.fields.get(index)
    }

    /// Returns the position of the field with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_ref()).collect()
    }

    pub fn kinds(&self) -> Vec<Kind> {
        self.fields.iter().map(|f| f.kind).collect()
    }

    /// Positional type tags.
    pub fn type_tags(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.kind.tag()).collect()
    }

    /// Parses one string per field into a row, stopping at the first failure.
    pub fn parse_row<T: AsRef<str>>(&self, values: &[T]) -> Result<Row<'_>, RecordError> {
        self.check_arity(values.len())?;

        let mut parsed = Vec::with_capacity(values.len());
        for (position, (def, input)) in self.fields.iter().zip(values).enumerate() {
            match codec::parse_value(def.kind, input.as_ref()) {
                Ok(value) => parsed.push(value),
                Err(source) => {
                    tracing::debug!(schema = %self.name, index = position, error = %source, "rejected field string");
                    return Err(self.field_error(position, source));
                }
            }
        }

        Ok(Row {
            schema: self,
            values: parsed,
        })
    }

    pub(crate) fn check_arity(&self, actual: usize) -> Result<(), RecordError> {
        if actual != self.fields.len() {
            return Err(RecordError::ArityMismatch {
                record: self.name.to_string(),
                expected: self.fields.len(),
                actual,
            });
        }
        Ok(())
    }

    pub(crate) fn field_error(&self, index: usize, source: crate::FieldError) -> RecordError {
        RecordError::Field {
            record: self.name.to_string(),
            index,
            name: self.fields[index].name.to_string(),
            source,
        }
    }

    fn out_of_range(&self, index: usize) -> RecordError {
        RecordError::IndexOutOfRange {
            record: self.name.to_string(),
            index,
            count: self.fields.len(),
        }
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.fields == other.fields
    }
}

impl Eq for Schema {}

/// A record whose shape is described by a runtime [`Schema`].
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'s> {
    schema: &'s Schema,
    values: Vec<Value>,
}

impl<'s> Row<'s> {
    /// Creates a row, checking arity and that every value has its field's kind.
    pub fn new(schema: &'s Schema, values: Vec<Value>) -> Result<Self, RecordError> {
        schema.check_arity(values.len())?;
        for (position, (def, value)) in schema.fields.iter().zip(&values).enumerate() {
            if value.kind() != def.kind {
                return Err(kind_mismatch(schema, position, value.kind()));
            }
        }
        Ok(Row { schema, values })
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    pub fn get(&self, index: usize) -> Result<&Value, RecordError> {
        self.values
            .get(index)
            .ok_or_else(|| self.schema.out_of_range(index))
    }

    pub fn get_str(&self, index: usize) -> Result<String, RecordError> {
        self.get(index).map(Value::render)
    }

    pub fn get_by_name(&self, name: &str) -> Result<&Value, RecordError> {
        let index = self
            .schema
            .index_of(name)
            .ok_or_else(|| RecordError::UnknownField {
                record: self.schema.name.to_string(),
                name: name.to_string(),
            })?;
        self.get(index)
    }

    /// Replaces the value at `index`, returning the previous one. The new
    /// value must have the field's kind.
    pub fn set(&mut self, index: usize, value: Value) -> Result<Value, RecordError> {
        let def = self
            .schema
            .field(index)
            .ok_or_else(|| self.schema.out_of_range(index))?;
        if value.kind() != def.kind {
            return Err(kind_mismatch(self.schema, index, value.kind()));
        }
        Ok(std::mem::replace(&mut self.values[index], value))
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Renders every field in order.
    pub fn to_strings(&self) -> Vec<String> {
        self.values.iter().map(Value::render).collect()
    }
}

fn kind_mismatch(schema: &Schema, index: usize, actual: Kind) -> RecordError {
    let def = &schema.fields[index];
    RecordError::KindMismatch {
        record: schema.name.to_string(),
        index,
        name: def.name.to_string(),
        expected: def.kind,
        actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, FieldError, ParseError};
    use crate::model::{Date, Time};

    fn visits() -> Schema {
        Schema::new(
            "Visit",
            [
                ("visitor", Kind::Text),
                ("day", Kind::Date),
                ("arrival", Kind::Time),
                ("approved", Kind::Boolean),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_schema_metadata() {
        let schema = visits();
        assert_eq!(schema.name(), "Visit");
        assert_eq!(schema.len(), 4);
        assert!(!schema.is_empty());
        assert_eq!(schema.names(), ["visitor", "day", "arrival", "approved"]);
        assert_eq!(schema.type_tags(), ["Text", "Date", "Time", "Boolean"]);
        assert_eq!(schema.index_of("arrival"), Some(2));
        assert_eq!(schema.index_of("departure"), None);
        assert_eq!(schema.field(1).map(|f| f.kind), Some(Kind::Date));
    }

    #[test]
    fn test_schema_rejects_bad_definitions() {
        let empty: [(&'static str, Kind); 0] = [];
        assert!(matches!(
            Schema::new("Nothing", empty),
            Err(RecordError::EmptySchema { .. })
        ));
        assert!(matches!(
            Schema::new("Twice", [("a", Kind::Text), ("a", Kind::Integer)]),
            Err(RecordError::DuplicateField { name, .. }) if name == "a"
        ));
        assert!(matches!(
            Schema::new("Blank", [("a", Kind::Text), ("", Kind::Integer)]),
            Err(RecordError::EmptyFieldName { index: 1, .. })
        ));

        let wide: Vec<(String, Kind)> = (0..=MAX_SCHEMA_FIELDS)
            .map(|i| (format!("f{}", i), Kind::Integer))
            .collect();
        assert!(matches!(
            Schema::new("Wide", wide),
            Err(RecordError::TooManyFields { .. })
        ));
    }

    #[test]
    fn test_parse_row_roundtrip() {
        let schema = visits();
        let line = ["Ada", "2024-02-29", "09:30:00", "false"];
        let row = schema.parse_row(&line).unwrap();

        assert_eq!(row.get(1), Ok(&Value::Date(Date::new(2024, 2, 29).unwrap())));
        assert_eq!(row.get_by_name("arrival"), Ok(&Value::Time(Time::new(9, 30, 0).unwrap())));
        assert_eq!(row.get_str(3).unwrap(), "false");
        assert_eq!(row.to_strings(), line);
    }

    #[test]
    fn test_parse_row_errors() {
        let schema = visits();

        let err = schema.parse_row(&["Ada", "2024-02-29"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);

        let err = schema
            .parse_row(&["Ada", "2024-02-29", "09:30", "false"])
            .unwrap_err();
        assert!(matches!(
            err,
            RecordError::Field {
                index: 2,
                source: FieldError::Parse(ParseError::MalformedLayout { .. }),
                ..
            }
        ));
    }

    #[test]
    fn test_row_kind_checks() {
        let schema = visits();
        let values = vec![
            Value::from("Ada"),
            Value::from(Date::default()),
            Value::from(Time::MIDNIGHT),
            Value::from(true),
        ];
        let mut row = Row::new(&schema, values).unwrap();

        let previous = row.set(0, Value::from("Grace")).unwrap();
        assert_eq!(previous, Value::from("Ada"));
        assert!(matches!(
            row.set(3, Value::from(1i64)),
            Err(RecordError::KindMismatch {
                expected: Kind::Boolean,
                actual: Kind::Integer,
                ..
            })
        ));
        assert_eq!(row.set(4, Value::from(true)).unwrap_err().kind(), ErrorKind::Index);
        assert!(matches!(row.get_by_name("exit"), Err(RecordError::UnknownField { .. })));

        let wrong = vec![Value::from(1i64), Value::from(Date::default()), Value::from(Time::MIDNIGHT), Value::from(true)];
        assert!(matches!(
            Row::new(&schema, wrong),
            Err(RecordError::KindMismatch { index: 0, .. })
        ));
    }
}
