//! Serde support, enabled by the `serde` feature.
//!
//! | Type | Representation |
//! |------|----------------|
//! | Date, Time, DateTime | canonical string (`"2024-09-01"`) |
//! | Kind | type tag (`"Integer"`) |
//! | Field<T> | the inner value |
//! | Value | native JSON type; temporal kinds as strings |
//! | Record<S>, Row | map of field name to value, in field order |
//!
//! Records and rows are serialize-only: their shape comes from the type or
//! the schema, so they are rebuilt with `from_strings` or `parse_row`.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::model::{Date, DateTime, Kind, Record, Row, Shape, Time, Value};

macro_rules! string_serde {
    ($($ty:ty),+) => {$(
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(de::Error::custom)
            }
        }
    )+};
}

string_serde!(Date, Time, DateTime, Kind);

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Text(s) => serializer.serialize_str(s),
            Value::Integer(v) => serializer.serialize_i64(*v),
            Value::Boolean(v) => serializer.serialize_bool(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::Date(d) => d.serialize(serializer),
            Value::Time(t) => t.serialize(serializer),
            Value::DateTime(dt) => dt.serialize(serializer),
        }
    }
}

impl<S: Shape> Serialize for Record<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Self::field_count()))?;
        for (name, value) in self.entries() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

impl Serialize for Row<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values().len()))?;
        for (def, value) in self.schema().fields().iter().zip(self.values()) {
            map.serialize_entry(def.name.as_ref(), value)?;
        }
        map.end()
    }
}
