//! The `Field` value type.
//!
//! A field is a [`Payload`] plus the operations that keep it consistent:
//! predicates, keyed and positional access, lazy promotion of null fields, clearing,
//! comparison and move-out.
//!
//! ```text
//!            emplace(k, v)                emplace_back(v)
//!   Object <--------------- Null ------------------------> Array
//!                            |
//!              any other kind: InvariantViolation
//! ```

use core::cmp::Ordering;
use core::fmt::{self, Debug, Formatter};
use core::iter::FromIterator;
use core::mem;

use crate::{FArray, FNumber, FObject, FString, FieldError, FieldKind, Payload, Result, stack};

/// A self-describing document value.
///
/// Exactly one [`FieldKind`] is active at a time. A field exclusively owns its
/// payload, and arrays/objects exclusively own their children, so a tree of fields
/// never shares or cycles. `Field` is not `Clone`; build a new tree to copy one.
///
/// Dropping a field releases its whole subtree without recursing, whatever its depth.
pub struct Field {
    pub(crate) payload: Payload,
}

impl Field {
    // === Construction ===

    /// Creates a null field.
    #[must_use]
    pub const fn new() -> Self {
        Field {
            payload: Payload::Null,
        }
    }

    /// Creates a null field. Same as [`Field::new`].
    #[must_use]
    pub const fn null() -> Self {
        Self::new()
    }

    /// Creates a field of `kind` holding that kind's default payload.
    #[must_use]
    pub fn with_kind(kind: FieldKind) -> Self {
        Field {
            payload: Payload::new(kind),
        }
    }

    /// Creates a number field from a float.
    ///
    /// Fails with [`FieldError::NonFiniteNumber`] for NaN and the infinities, which
    /// `Field::from(f64)` silently turns into null.
    pub fn try_from_f64(v: f64) -> Result<Self> {
        FNumber::from_f64(v)
            .map(Field::from)
            .ok_or(FieldError::NonFiniteNumber(v))
    }

    // === Type checking ===

    /// Returns the active kind.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.payload.kind()
    }

    /// Returns the payload.
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Returns `true` if this is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.payload, Payload::Null)
    }

    /// Returns `true` if this is a boolean.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self.payload, Payload::Boolean(_))
    }

    /// Returns `true` if this is a number.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self.payload, Payload::Number(_))
    }

    /// Returns `true` if this is a string.
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self.payload, Payload::String(_))
    }

    /// Returns `true` if this is an array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self.payload, Payload::Array(_))
    }

    /// Returns `true` if this is an object.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self.payload, Payload::Object(_))
    }

    // === Conversions to concrete types ===

    /// Returns the boolean, or `None` if this is not a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.payload {
            Payload::Boolean(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the number, or `None` if this is not a number.
    #[must_use]
    pub fn as_number(&self) -> Option<&FNumber> {
        match &self.payload {
            Payload::Number(n) => Some(&**n),
            _ => None,
        }
    }

    /// Returns a mutable number, or `None` if this is not a number.
    pub fn as_number_mut(&mut self) -> Option<&mut FNumber> {
        match &mut self.payload {
            Payload::Number(n) => Some(&mut **n),
            _ => None,
        }
    }

    /// Returns the string, or `None` if this is not a string.
    #[must_use]
    pub fn as_string(&self) -> Option<&FString> {
        match &self.payload {
            Payload::String(s) => Some(&**s),
            _ => None,
        }
    }

    /// Returns a mutable string, or `None` if this is not a string.
    pub fn as_string_mut(&mut self) -> Option<&mut FString> {
        match &mut self.payload {
            Payload::String(s) => Some(&mut **s),
            _ => None,
        }
    }

    /// Returns the string as `&str`, or `None` if this is not a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_string().map(FString::as_str)
    }

    /// Returns the array, or `None` if this is not an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&FArray> {
        match &self.payload {
            Payload::Array(a) => Some(&**a),
            _ => None,
        }
    }

    /// Returns a mutable array, or `None` if this is not an array.
    pub fn as_array_mut(&mut self) -> Option<&mut FArray> {
        match &mut self.payload {
            Payload::Array(a) => Some(&mut **a),
            _ => None,
        }
    }

    /// Returns the object, or `None` if this is not an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&FObject> {
        match &self.payload {
            Payload::Object(o) => Some(&**o),
            _ => None,
        }
    }

    /// Returns a mutable object, or `None` if this is not an object.
    pub fn as_object_mut(&mut self) -> Option<&mut FObject> {
        match &mut self.payload {
            Payload::Object(o) => Some(&mut **o),
            _ => None,
        }
    }

    // === Element access ===

    /// Returns the element at `index`: a key for objects, a position for arrays.
    ///
    /// Never promotes. Fails with [`FieldError::KeyNotFound`] or
    /// [`FieldError::OutOfRange`] when the element is absent, and with
    /// [`FieldError::InvariantViolation`] when the field is not of the indexed kind.
    ///
    /// ```
    /// use friedrichdb_core::Field;
    ///
    /// let mut list = Field::new();
    /// list.emplace_back("x").unwrap();
    /// assert_eq!(list.at(0).unwrap().as_str(), Some("x"));
    /// assert!(list.at(1).is_err());
    /// ```
    pub fn at<I: FieldIndex>(&self, index: I) -> Result<&Field> {
        index.index_into(self)
    }

    /// Mutable variant of [`Field::at`].
    pub fn at_mut<I: FieldIndex>(&mut self, index: I) -> Result<&mut Field> {
        index.index_into_mut(self)
    }

    // === Mutation ===

    /// Inserts or overwrites `key` in an object, returning the replaced value.
    ///
    /// A null field is promoted to an empty object first. Any other kind is an
    /// invariant violation and leaves the field untouched.
    pub fn emplace(
        &mut self,
        key: impl Into<FString>,
        value: impl Into<Field>,
    ) -> Result<Option<Field>> {
        let object = self.promote_to_object("emplace")?;
        Ok(object.insert(key, value))
    }

    /// Appends `value` to an array.
    ///
    /// A null field is promoted to an empty array first. Any other kind is an
    /// invariant violation and leaves the field untouched.
    pub fn emplace_back(&mut self, value: impl Into<Field>) -> Result<()> {
        let array = self.promote_to_array("emplace_back")?;
        array.push(value);
        Ok(())
    }

    /// Removes `key` from an object, returning its value if it was present.
    pub fn erase(&mut self, key: &str) -> Result<Option<Field>> {
        match &mut self.payload {
            Payload::Object(object) => Ok(object.remove(key)),
            other => Err(FieldError::violation("erase", "object", other.kind())),
        }
    }

    /// Returns `true` for null and for empty arrays/objects. Scalars are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.payload {
            Payload::Null => true,
            Payload::Array(a) => a.is_empty(),
            Payload::Object(o) => o.is_empty(),
            Payload::Boolean(_) | Payload::Number(_) | Payload::String(_) => false,
        }
    }

    /// Returns 0 for null, the element count for arrays/objects, and 1 for scalars.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.payload {
            Payload::Null => 0,
            Payload::Array(a) => a.len(),
            Payload::Object(o) => o.len(),
            Payload::Boolean(_) | Payload::Number(_) | Payload::String(_) => 1,
        }
    }

    /// Resets the contents of the active kind without changing the kind.
    ///
    /// Booleans become `false`, numbers `0`, strings empty, arrays and objects empty.
    /// Null stays null.
    pub fn clear(&mut self) {
        match &mut self.payload {
            Payload::Null => {}
            Payload::Boolean(b) => *b = false,
            Payload::Number(n) => **n = FNumber::zero(),
            Payload::String(s) => s.clear(),
            Payload::Array(a) => a.clear(),
            Payload::Object(o) => o.clear(),
        }
    }

    /// Moves the value out, leaving a null field in its place.
    pub fn take(&mut self) -> Field {
        mem::take(self)
    }

    // === Comparison ===

    /// Orders two fields.
    ///
    /// Fields of different kinds order by kind (`Null < Boolean < Number < String <
    /// Array < Object`). Same-kind scalars use their natural order. Two arrays or two
    /// objects have no ordering and yield [`FieldError::InvalidComparison`].
    pub fn compare(&self, other: &Field) -> Result<Ordering> {
        let (left, right) = (self.kind(), other.kind());
        if left != right {
            return Ok(left.cmp(&right));
        }
        match (&self.payload, &other.payload) {
            (Payload::Null, Payload::Null) => Ok(Ordering::Equal),
            (Payload::Boolean(a), Payload::Boolean(b)) => Ok(a.cmp(b)),
            (Payload::Number(a), Payload::Number(b)) => Ok((**a).cmp(&**b)),
            (Payload::String(a), Payload::String(b)) => Ok((**a).cmp(&**b)),
            _ => Err(FieldError::InvalidComparison { left, right }),
        }
    }

    // === Promotion ===

    fn promote_to_object(&mut self, operation: &'static str) -> Result<&mut FObject> {
        if self.is_null() {
            trace!("promoting null field to object on {operation}");
            self.payload = Payload::new(FieldKind::Object);
        }
        match &mut self.payload {
            Payload::Object(object) => Ok(&mut **object),
            other => Err(FieldError::violation(operation, "null or object", other.kind())),
        }
    }

    fn promote_to_array(&mut self, operation: &'static str) -> Result<&mut FArray> {
        if self.is_null() {
            trace!("promoting null field to array on {operation}");
            self.payload = Payload::new(FieldKind::Array);
        }
        match &mut self.payload {
            Payload::Array(array) => Ok(&mut **array),
            other => Err(FieldError::violation(operation, "null or array", other.kind())),
        }
    }
}

// === Indexing ===

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

/// Types that can address an element of a [`Field`]: strings for object keys,
/// `usize` for array positions.
pub trait FieldIndex: private::Sealed {
    #[doc(hidden)]
    fn index_into<'f>(&self, field: &'f Field) -> Result<&'f Field>;

    #[doc(hidden)]
    fn index_into_mut<'f>(&self, field: &'f mut Field) -> Result<&'f mut Field>;
}

impl FieldIndex for usize {
    fn index_into<'f>(&self, field: &'f Field) -> Result<&'f Field> {
        let array = field
            .as_array()
            .ok_or_else(|| FieldError::violation("at(index)", "array", field.kind()))?;
        array.get(*self).ok_or(FieldError::OutOfRange {
            index: *self,
            len: array.len(),
        })
    }

    fn index_into_mut<'f>(&self, field: &'f mut Field) -> Result<&'f mut Field> {
        let kind = field.kind();
        let array = field
            .as_array_mut()
            .ok_or_else(|| FieldError::violation("at(index)", "array", kind))?;
        let len = array.len();
        array
            .get_mut(*self)
            .ok_or(FieldError::OutOfRange { index: *self, len })
    }
}

impl FieldIndex for str {
    fn index_into<'f>(&self, field: &'f Field) -> Result<&'f Field> {
        let object = field
            .as_object()
            .ok_or_else(|| FieldError::violation("at(key)", "object", field.kind()))?;
        object.get(self).ok_or_else(|| FieldError::KeyNotFound {
            key: self.to_owned(),
        })
    }

    fn index_into_mut<'f>(&self, field: &'f mut Field) -> Result<&'f mut Field> {
        let kind = field.kind();
        let object = field
            .as_object_mut()
            .ok_or_else(|| FieldError::violation("at(key)", "object", kind))?;
        object.get_mut(self).ok_or_else(|| FieldError::KeyNotFound {
            key: self.to_owned(),
        })
    }
}

impl FieldIndex for String {
    fn index_into<'f>(&self, field: &'f Field) -> Result<&'f Field> {
        self.as_str().index_into(field)
    }

    fn index_into_mut<'f>(&self, field: &'f mut Field) -> Result<&'f mut Field> {
        self.as_str().index_into_mut(field)
    }
}

impl<T: ?Sized + FieldIndex> FieldIndex for &T {
    fn index_into<'f>(&self, field: &'f Field) -> Result<&'f Field> {
        (**self).index_into(field)
    }

    fn index_into_mut<'f>(&self, field: &'f mut Field) -> Result<&'f mut Field> {
        (**self).index_into_mut(field)
    }
}

// === PartialEq, Eq ===

impl PartialEq for Field {
    /// Structural equality. Different kinds are never equal; arrays compare
    /// element-wise and objects entry-wise. Walks both trees with an explicit stack.
    fn eq(&self, other: &Self) -> bool {
        let mut pending: Vec<(&Field, &Field)> = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            match (&a.payload, &b.payload) {
                (Payload::Null, Payload::Null) => {}
                (Payload::Boolean(x), Payload::Boolean(y)) if x == y => {}
                (Payload::Number(x), Payload::Number(y)) if **x == **y => {}
                (Payload::String(x), Payload::String(y)) if **x == **y => {}
                (Payload::Array(x), Payload::Array(y)) if x.len() == y.len() => {
                    pending.extend(x.iter().zip(y.iter()));
                }
                (Payload::Object(x), Payload::Object(y)) if x.len() == y.len() => {
                    for ((kx, vx), (ky, vy)) in x.iter().zip(y.iter()) {
                        if kx != ky {
                            return false;
                        }
                        pending.push((vx, vy));
                    }
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Field {}

// === PartialOrd ===

impl PartialOrd for Field {
    /// See [`Field::compare`]. Arrays and objects only compare as `Equal` to a
    /// structurally equal value and are otherwise unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.compare(other) {
            Ok(ordering) => Some(ordering),
            Err(_) => (self == other).then_some(Ordering::Equal),
        }
    }
}

// === Debug ===

impl Debug for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        stack::grow(|| Debug::fmt(&self.payload, f))
    }
}

// === Default ===

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

// === From implementations ===

impl From<Payload> for Field {
    fn from(payload: Payload) -> Self {
        Field { payload }
    }
}

impl From<()> for Field {
    fn from((): ()) -> Self {
        Self::new()
    }
}

impl From<bool> for Field {
    fn from(b: bool) -> Self {
        Payload::from(b).into()
    }
}

impl From<FNumber> for Field {
    fn from(n: FNumber) -> Self {
        Payload::from(n).into()
    }
}

macro_rules! impl_from_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Field {
                fn from(v: $t) -> Self {
                    FNumber::from(v).into()
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f32> for Field {
    /// Non-finite floats become null; use [`Field::try_from_f64`] to reject them.
    fn from(v: f32) -> Self {
        FNumber::try_from(v).map(Field::from).unwrap_or_default()
    }
}

impl From<f64> for Field {
    /// Non-finite floats become null; use [`Field::try_from_f64`] to reject them.
    fn from(v: f64) -> Self {
        FNumber::try_from(v).map(Field::from).unwrap_or_default()
    }
}

impl From<FString> for Field {
    fn from(s: FString) -> Self {
        Payload::from(s).into()
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Payload::from(s).into()
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Payload::from(s).into()
    }
}

impl From<&String> for Field {
    fn from(s: &String) -> Self {
        Payload::from(s.as_str()).into()
    }
}

impl From<FArray> for Field {
    fn from(a: FArray) -> Self {
        Payload::from(a).into()
    }
}

impl From<FObject> for Field {
    fn from(o: FObject) -> Self {
        Payload::from(o).into()
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(opt: Option<T>) -> Self {
        opt.map_or_else(Field::new, Into::into)
    }
}

// === FromIterator implementations ===

impl<T: Into<Field>> FromIterator<T> for Field {
    /// Collect into an array field.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        FArray::from_iter(iter).into()
    }
}

impl<K: Into<FString>, V: Into<Field>> FromIterator<(K, V)> for Field {
    /// Collect key-value pairs into an object field.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FObject::from_iter(iter).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null() {
        let f = Field::new();
        assert!(f.is_null());
        assert_eq!(f.kind(), FieldKind::Null);
        assert_eq!(f.len(), 0);
        assert!(f.is_empty());
        assert!(!f.is_bool());
        assert!(!f.is_number());
        assert_eq!(Field::from(()), f);
        assert_eq!(Field::from(None::<i32>), f);
    }

    #[test]
    fn test_with_kind_defaults() {
        assert_eq!(Field::with_kind(FieldKind::Number), Field::from(0));
        assert_eq!(Field::with_kind(FieldKind::Boolean), Field::from(false));
        assert_eq!(Field::with_kind(FieldKind::String), Field::from(""));
        assert!(Field::with_kind(FieldKind::Array).as_array().unwrap().is_empty());
        assert!(Field::with_kind(FieldKind::Object).is_empty());
    }

    #[test]
    fn test_scalar_constructors() {
        assert_eq!(Field::from(true).as_bool(), Some(true));
        assert_eq!(Field::from(7u16).as_number().unwrap().to_i64(), Some(7));
        assert_eq!(Field::from(-3i64).as_number().unwrap().to_i64(), Some(-3));
        assert!(Field::from(1.5f32).as_number().unwrap().is_float());
        assert_eq!(Field::from("hi").as_str(), Some("hi"));
        assert_eq!(Field::from(String::from("hi")).kind(), FieldKind::String);
        assert!(Field::from(f64::NAN).is_null());
    }

    #[test]
    fn test_try_from_f64() {
        assert_eq!(Field::try_from_f64(0.5).unwrap(), Field::from(0.5));
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Field::try_from_f64(v).unwrap_err();
            assert!(matches!(err, FieldError::NonFiniteNumber(_)));
        }
        assert_eq!(
            Field::try_from_f64(f64::INFINITY).unwrap_err().to_string(),
            "number is not finite: inf"
        );
    }

    #[test]
    fn test_scalars_have_size_one() {
        for f in [Field::from(false), Field::from(0), Field::from("")] {
            assert_eq!(f.len(), 1);
            assert!(!f.is_empty());
        }
    }

    #[test]
    fn test_emplace_promotes_null_to_object() {
        let mut f = Field::new();
        assert!(f.emplace("a", 42).unwrap().is_none());
        assert!(f.is_object());
        assert_eq!(f.at("a").unwrap(), &Field::from(42));

        let previous = f.emplace("a", 43).unwrap();
        assert_eq!(previous, Some(Field::from(42)));
        assert_eq!(f.len(), 1);
    }

    #[test]
    fn test_emplace_back_promotes_null_to_array() {
        let mut f = Field::new();
        f.emplace_back("x").unwrap();
        f.emplace_back("y").unwrap();
        assert!(f.is_array());
        assert_eq!(f.len(), 2);
        assert_eq!(f.at(1).unwrap().as_str(), Some("y"));
    }

    #[test]
    fn test_wrong_kind_mutation_is_rejected() {
        let mut s = Field::from("text");
        let err = s.emplace("k", 1).unwrap_err();
        assert!(matches!(
            err,
            FieldError::InvariantViolation {
                operation: "emplace",
                found: FieldKind::String,
                ..
            }
        ));
        assert_eq!(s, Field::from("text"));

        let mut obj = Field::with_kind(FieldKind::Object);
        assert!(obj.emplace_back(1).is_err());
        assert!(obj.is_object());

        let mut arr = Field::with_kind(FieldKind::Array);
        assert!(arr.emplace("k", 1).is_err());
        assert!(arr.erase("k").is_err());
    }

    #[test]
    fn test_at_reports_missing_elements() {
        let mut f = Field::new();
        f.emplace("present", true).unwrap();
        assert!(matches!(
            f.at("absent"),
            Err(FieldError::KeyNotFound { key }) if key == "absent"
        ));
        assert!(matches!(
            f.at(0),
            Err(FieldError::InvariantViolation { found: FieldKind::Object, .. })
        ));

        let list: Field = [1, 2].into_iter().collect();
        assert!(matches!(
            list.at(2),
            Err(FieldError::OutOfRange { index: 2, len: 2 })
        ));
        assert!(Field::new().at("k").is_err());
    }

    #[test]
    fn test_at_does_not_promote() {
        let f = Field::new();
        let _ = f.at("k");
        assert!(f.is_null());
    }

    #[test]
    fn test_at_mut() {
        let mut f = Field::new();
        f.emplace("n", 1).unwrap();
        *f.at_mut("n").unwrap() = Field::from(2);
        assert_eq!(f.at(&String::from("n")).unwrap(), &Field::from(2));
    }

    #[test]
    fn test_erase() {
        let mut obj = Field::new();
        obj.emplace("k", 1).unwrap();
        assert_eq!(obj.erase("k").unwrap(), Some(Field::from(1)));
        assert!(obj.is_empty());
        assert!(obj.is_object());
        assert_eq!(obj.erase("k").unwrap(), None);
    }

    #[test]
    fn test_clear_keeps_kind() {
        let mut b = Field::from(true);
        b.clear();
        assert_eq!(b, Field::from(false));

        let mut n = Field::from(9);
        n.clear();
        assert_eq!(n, Field::from(0));

        let mut s = Field::from("abc");
        s.clear();
        assert_eq!(s, Field::from(""));

        let mut a: Field = [1, 2, 3].into_iter().collect();
        a.clear();
        assert!(a.is_array());
        assert!(a.is_empty());

        let mut o: Field = [("k", 1)].into_iter().collect();
        o.clear();
        assert!(o.is_object());
        assert!(o.is_empty());

        let mut null = Field::new();
        null.clear();
        assert!(null.is_null());
    }

    #[test]
    fn test_take_leaves_null() {
        let mut a: Field = [("k", "v")].into_iter().collect();
        let b = a.take();
        assert!(a.is_null());
        assert_eq!(a, Field::new());
        assert_eq!(b.at("k").unwrap().as_str(), Some("v"));
        drop(a);
        assert!(b.is_object());
    }

    #[test]
    fn test_scalar_equality() {
        assert_eq!(Field::from(5), Field::from(5));
        assert_ne!(Field::from(5), Field::from("5"));
        assert_eq!(Field::from(5), Field::from(5.0));
        assert_ne!(Field::from(true), Field::from(false));
        assert_eq!(Field::new(), Field::null());
    }

    #[test]
    fn test_scalar_ordering() {
        assert!(Field::from(1) < Field::from(2));
        assert!(Field::from(2.5) >= Field::from(2));
        assert!(Field::from("abc") < Field::from("abd"));
        assert!(Field::from(false) < Field::from(true));
        assert!(Field::new() <= Field::new());
        // Kind order decides across kinds.
        assert!(Field::from(true) < Field::from(0));
        assert!(Field::from(100) < Field::from("1"));
    }

    #[test]
    fn test_composite_equality_is_structural() {
        let a: Field = [("x", 1), ("y", 2)].into_iter().collect();
        let b: Field = [("y", 2), ("x", 1)].into_iter().collect();
        let c: Field = [("x", 1), ("z", 2)].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let l1: Field = [1, 2].into_iter().collect();
        let l2: Field = [1, 2, 3].into_iter().collect();
        assert_ne!(l1, l2);
        assert_ne!(l2, l1);
    }

    #[test]
    fn test_composite_ordering_is_rejected() {
        let l1: Field = [1].into_iter().collect();
        let l2: Field = [2].into_iter().collect();
        assert!(matches!(
            l1.compare(&l2),
            Err(FieldError::InvalidComparison {
                left: FieldKind::Array,
                right: FieldKind::Array
            })
        ));
        assert!(l2.compare(&l1).is_err());
        assert!(!(l1 < l2));
        assert!(!(l2 < l1));
        assert!(!(l1 >= l2));
        assert_eq!(l1.partial_cmp(&l2), None);

        let o1: Field = [("k", 1)].into_iter().collect();
        let o2: Field = [("k", 1)].into_iter().collect();
        assert!(o1.compare(&o2).is_err());
        assert_eq!(o1.partial_cmp(&o2), Some(Ordering::Equal));

        // Different kinds still order by kind.
        assert_eq!(l1.compare(&o1).unwrap(), Ordering::Less);
    }
}
