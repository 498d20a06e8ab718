//! Serde support and JSON helpers.

use core::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::{FArray, FNumber, FObject, FString, Field, Payload, Result, stack};

impl Serialize for FNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        if self.is_float() {
            serializer.serialize_f64(self.to_f64_lossy())
        } else if let Some(i) = self.to_i64() {
            serializer.serialize_i64(i)
        } else if let Some(u) = self.to_u64() {
            serializer.serialize_u64(u)
        } else {
            serializer.serialize_f64(self.to_f64_lossy())
        }
    }
}

impl Serialize for FString {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for FArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl Serialize for FObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        stack::grow(|| match self.payload() {
            Payload::Null => serializer.serialize_unit(),
            Payload::Boolean(b) => serializer.serialize_bool(*b),
            Payload::Number(n) => (**n).serialize(serializer),
            Payload::String(s) => (**s).serialize(serializer),
            Payload::Array(a) => (**a).serialize(serializer),
            Payload::Object(o) => (**o).serialize(serializer),
        })
    }
}

struct FieldVisitor;

impl<'de> Visitor<'de> for FieldVisitor {
    type Value = Field;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any valid field value")
    }

    fn visit_bool<E>(self, value: bool) -> core::result::Result<Field, E> {
        Ok(Field::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> core::result::Result<Field, E> {
        Ok(Field::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> core::result::Result<Field, E> {
        Ok(Field::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> core::result::Result<Field, E> {
        FNumber::from_f64(value)
            .map(Field::from)
            .ok_or_else(|| E::custom(format_args!("non-finite number {value}")))
    }

    fn visit_str<E>(self, value: &str) -> core::result::Result<Field, E> {
        Ok(Field::from(value))
    }

    fn visit_string<E>(self, value: String) -> core::result::Result<Field, E> {
        Ok(Field::from(value))
    }

    fn visit_unit<E>(self) -> core::result::Result<Field, E> {
        Ok(Field::new())
    }

    fn visit_none<E>(self) -> core::result::Result<Field, E> {
        Ok(Field::new())
    }

    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> core::result::Result<Field, D::Error> {
        Field::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> core::result::Result<Field, A::Error> {
        let mut array = FArray::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element::<Field>()? {
            array.push(element);
        }
        Ok(array.into())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> core::result::Result<Field, A::Error> {
        let mut object = FObject::new();
        while let Some((key, value)) = map.next_entry::<String, Field>()? {
            object.insert(key, value);
        }
        Ok(object.into())
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        stack::grow(|| deserializer.deserialize_any(FieldVisitor))
    }
}

impl Field {
    /// Serializes to compact JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes to indented JSON text.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses JSON text into a field.
    ///
    /// There is no nesting limit: any tree `to_json` can write reads back.
    ///
    /// ```
    /// use friedrichdb_core::Field;
    ///
    /// let f = Field::from_json(r#"{"tags":["a","b"],"n":1.5}"#).unwrap();
    /// assert_eq!(f.at("tags").unwrap().len(), 2);
    /// assert_eq!(f.to_json().unwrap(), r#"{"n":1.5,"tags":["a","b"]}"#);
    /// ```
    pub fn from_json(text: &str) -> Result<Field> {
        let mut de = serde_json::Deserializer::from_str(text);
        de.disable_recursion_limit();
        let field = Field::deserialize(&mut de)?;
        de.end()?;
        Ok(field)
    }
}
