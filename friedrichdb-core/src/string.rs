//! String payload type.

use core::borrow::Borrow;
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::Deref;

/// A string field payload, also used for object keys.
///
/// Ordering is byte-wise lexicographic, which is the key order of [`FObject`](crate::FObject).
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FString(String);

impl FString {
    /// Creates an empty string.
    #[must_use]
    pub const fn new() -> Self {
        FString(String::new())
    }

    /// Returns the length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the string is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the string as a `&str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends text.
    pub fn push_str(&mut self, s: &str) {
        self.0.push_str(s);
    }

    /// Empties the string, keeping its capacity.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Converts into a `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for FString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Debug for FString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_str(), f)
    }
}

impl Display for FString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_str(), f)
    }
}

// === Comparisons with plain strings ===

impl PartialEq<str> for FString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for FString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<String> for FString {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialEq<FString> for str {
    fn eq(&self, other: &FString) -> bool {
        self == other.as_str()
    }
}

// === From implementations ===

impl From<&str> for FString {
    fn from(s: &str) -> Self {
        FString(s.to_owned())
    }
}

impl From<String> for FString {
    fn from(s: String) -> Self {
        FString(s)
    }
}

impl From<&String> for FString {
    fn from(s: &String) -> Self {
        FString(s.clone())
    }
}

impl From<char> for FString {
    fn from(c: char) -> Self {
        FString(c.to_string())
    }
}

impl From<FString> for String {
    fn from(s: FString) -> Self {
        s.0
    }
}
