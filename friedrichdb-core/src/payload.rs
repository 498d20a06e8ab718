//! The payload of a field: exactly one active representation.
//!
//! | Kind    | Storage                    | Default  |
//! |---------|----------------------------|----------|
//! | Null    | none                       | -        |
//! | Boolean | inline `bool`              | `false`  |
//! | Number  | heap cell holding [`FNumber`] | `0`   |
//! | String  | heap cell holding [`FString`] | `""`  |
//! | Array   | heap cell holding [`FArray`]  | `[]`  |
//! | Object  | heap cell holding [`FObject`] | `{}`  |

use core::fmt::{self, Debug, Display, Formatter};

use crate::heap::HeapCell;
use crate::{FArray, FNumber, FObject, FString};

/// Discriminates the six kinds of field.
///
/// The declaration order is the cross-kind ordering used when comparing fields of
/// different kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
    /// No value
    Null,
    /// `true` or `false`
    Boolean,
    /// Integer or floating point number
    Number,
    /// UTF-8 text
    String,
    /// Ordered sequence of fields
    Array,
    /// String-keyed map of fields, ordered by key
    Object,
}

impl FieldKind {
    /// Lowercase name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            FieldKind::Null => "null",
            FieldKind::Boolean => "boolean",
            FieldKind::Number => "number",
            FieldKind::String => "string",
            FieldKind::Array => "array",
            FieldKind::Object => "object",
        }
    }

    /// Returns `true` for Array and Object.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, FieldKind::Array | FieldKind::Object)
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Storage for a field's single active representation.
///
/// Heap-backed variants own their cell; dropping the payload releases exactly that
/// cell through the allocator that produced it.
#[derive(Default)]
pub enum Payload {
    /// No storage.
    #[default]
    Null,
    /// Inline boolean.
    Boolean(bool),
    /// Heap-allocated number.
    Number(HeapCell<FNumber>),
    /// Heap-allocated string.
    String(HeapCell<FString>),
    /// Heap-allocated array.
    Array(HeapCell<FArray>),
    /// Heap-allocated object.
    Object(HeapCell<FObject>),
}

impl Payload {
    /// Allocates the default payload for `kind`.
    #[must_use]
    pub fn new(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Null => Payload::Null,
            FieldKind::Boolean => Payload::Boolean(false),
            FieldKind::Number => Payload::Number(HeapCell::new(FNumber::zero())),
            FieldKind::String => Payload::String(HeapCell::new(FString::new())),
            FieldKind::Array => Payload::Array(HeapCell::new(FArray::new())),
            FieldKind::Object => Payload::Object(HeapCell::new(FObject::new())),
        }
    }

    /// The kind of the active representation.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Payload::Null => FieldKind::Null,
            Payload::Boolean(_) => FieldKind::Boolean,
            Payload::Number(_) => FieldKind::Number,
            Payload::String(_) => FieldKind::String,
            Payload::Array(_) => FieldKind::Array,
            Payload::Object(_) => FieldKind::Object,
        }
    }
}

impl Debug for Payload {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Null => f.write_str("null"),
            Payload::Boolean(b) => Debug::fmt(b, f),
            Payload::Number(n) => Debug::fmt(n, f),
            Payload::String(s) => Debug::fmt(s, f),
            Payload::Array(a) => Debug::fmt(a, f),
            Payload::Object(o) => Debug::fmt(o, f),
        }
    }
}

// === From implementations ===

impl From<bool> for Payload {
    fn from(b: bool) -> Self {
        Payload::Boolean(b)
    }
}

impl From<FNumber> for Payload {
    fn from(n: FNumber) -> Self {
        Payload::Number(HeapCell::new(n))
    }
}

impl From<FString> for Payload {
    fn from(s: FString) -> Self {
        Payload::String(HeapCell::new(s))
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        FString::from(s).into()
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        FString::from(s).into()
    }
}

impl From<FArray> for Payload {
    fn from(a: FArray) -> Self {
        Payload::Array(HeapCell::new(a))
    }
}

impl From<FObject> for Payload {
    fn from(o: FObject) -> Self {
        Payload::Object(HeapCell::new(o))
    }
}
