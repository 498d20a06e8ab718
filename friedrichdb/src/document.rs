//! Documents: named fields kept in insertion order.

use core::fmt::{self, Debug, Formatter};
use core::mem;
use core::ops::Index;
use std::collections::BTreeMap;

use friedrichdb_core::{Field, FieldError};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::Result;

/// A set of named fields.
///
/// Fields are stored in the order they were first inserted and can be reached by
/// name or by that position. Overwriting a name keeps its position.
#[derive(Default, PartialEq)]
pub struct Document {
    /// Field values, in insertion order.
    storage: Vec<Field>,
    /// `names[i]` is the name of `storage[i]`.
    names: Vec<String>,
    /// Position of each name in `storage`.
    index: BTreeMap<String, usize>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the document has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn emplace(&mut self, key: impl Into<String>, value: impl Into<Field>) -> Option<Field> {
        let key = key.into();
        let value = value.into();
        if let Some(&position) = self.index.get(&key) {
            return Some(mem::replace(&mut self.storage[position], value));
        }
        self.index.insert(key.clone(), self.storage.len());
        self.names.push(key);
        self.storage.push(value);
        None
    }

    /// Returns the field stored under `key`.
    pub fn at(&self, key: &str) -> Result<&Field> {
        let position = self.position_of(key)?;
        Ok(&self.storage[position])
    }

    /// Returns the field stored under `key` for mutation.
    pub fn at_mut(&mut self, key: &str) -> Result<&mut Field> {
        let position = self.position_of(key)?;
        Ok(&mut self.storage[position])
    }

    /// Returns the field at insertion position `position`.
    pub fn at_position(&self, position: usize) -> Result<&Field> {
        let len = self.storage.len();
        self.storage
            .get(position)
            .ok_or_else(|| out_of_range(position, len))
    }

    /// Returns the field at insertion position `position` for mutation.
    pub fn at_position_mut(&mut self, position: usize) -> Result<&mut Field> {
        let len = self.storage.len();
        self.storage
            .get_mut(position)
            .ok_or_else(|| out_of_range(position, len))
    }

    /// Returns `true` if a field is stored under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Returns `true` if `position` addresses a stored field.
    #[must_use]
    pub fn contains_position(&self, position: usize) -> bool {
        position < self.storage.len()
    }

    /// Iterates over `(name, field)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Field)> {
        self.names.iter().map(String::as_str).zip(&self.storage)
    }

    fn position_of(&self, key: &str) -> Result<usize> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| {
                FieldError::KeyNotFound {
                    key: key.to_owned(),
                }
                .into()
            })
    }
}

fn out_of_range(index: usize, len: usize) -> crate::DbError {
    FieldError::OutOfRange { index, len }.into()
}

impl Index<&str> for Document {
    type Output = Field;

    fn index(&self, key: &str) -> &Field {
        &self.storage[self.index[key]]
    }
}

impl Index<usize> for Document {
    type Output = Field;

    fn index(&self, position: usize) -> &Field {
        &self.storage[position]
    }
}

impl Debug for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Field>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut doc = Document::new();
        for (k, v) in iter {
            doc.emplace(k, v);
        }
        doc
    }
}

// === Serde ===

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, field) in self.iter() {
            map.serialize_entry(name, field)?;
        }
        map.end()
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> core::result::Result<Document, A::Error> {
        let mut doc = Document::new();
        while let Some((key, value)) = map.next_entry::<String, Field>()? {
            doc.emplace(key, value);
        }
        Ok(doc)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DbError, Serializable};

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.emplace("zeta", 1);
        doc.emplace("alpha", "a");
        doc.emplace("mid", true);
        doc
    }

    #[test]
    fn keeps_insertion_order() {
        let doc = sample();
        let names: Vec<&str> = doc.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
        assert_eq!(doc.at_position(1).unwrap().as_str(), Some("a"));
        assert_eq!(doc[0], Field::from(1));
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut doc = sample();
        let previous = doc.emplace("alpha", "b");
        assert_eq!(previous, Some(Field::from("a")));
        assert_eq!(doc.len(), 3);
        assert_eq!(doc["alpha"].as_str(), Some("b"));
        assert_eq!(doc.at_position(1).unwrap().as_str(), Some("b"));
        let names: Vec<&str> = doc.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn iter_pairs_names_with_values() {
        let doc: Document = (0..50).map(|i| (format!("f{}", 49 - i), i)).collect();
        let iter = doc.iter();
        assert_eq!(iter.len(), 50);
        for (position, (name, field)) in iter.enumerate() {
            assert_eq!(name, format!("f{}", 49 - position));
            assert_eq!(field, &doc[name]);
            assert_eq!(field, &doc[position]);
        }
    }

    #[test]
    fn membership() {
        let doc = sample();
        assert!(doc.contains_key("mid"));
        assert!(!doc.contains_key("other"));
        assert!(doc.contains_position(2));
        assert!(!doc.contains_position(3));
    }

    #[test]
    fn missing_entries_are_errors() {
        let mut doc = sample();
        assert!(matches!(
            doc.at("nope"),
            Err(DbError::Field(FieldError::KeyNotFound { .. }))
        ));
        assert!(matches!(
            doc.at_position_mut(7),
            Err(DbError::Field(FieldError::OutOfRange { index: 7, len: 3 }))
        ));
    }

    #[test]
    fn fields_are_mutable_in_place() {
        let mut doc = Document::new();
        doc.emplace("tags", Field::new());
        doc.at_mut("tags").unwrap().emplace_back("x").unwrap();
        doc.at_position_mut(0).unwrap().emplace_back("y").unwrap();
        assert_eq!(doc["tags"].len(), 2);
    }

    #[test]
    fn json_keeps_insertion_order() {
        let doc = sample();
        let text = doc.serialization_json().unwrap();
        assert_eq!(text, r#"{"zeta":1,"alpha":"a","mid":true}"#);

        let back = Document::deserialization_json(&text).unwrap();
        assert_eq!(back, doc);
        assert_eq!(format!("{back:?}"), r#"{"zeta": 1, "alpha": "a", "mid": true}"#);
    }

    #[test]
    fn rejects_non_objects() {
        assert!(Document::deserialization_json("[1, 2]").is_err());
    }
}
