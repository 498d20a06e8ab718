//! Array payload type.

use core::fmt::{self, Debug, Formatter};
use core::iter::FromIterator;
use core::mem;
use core::ops::{Deref, DerefMut};

use crate::Field;

/// An array field payload.
///
/// `FArray` is an ordered sequence of [`Field`]s; insertion order is iteration order.
/// It is not `Clone`, for the same reason `Field` is not.
#[derive(Default, PartialEq)]
pub struct FArray(Vec<Field>);

impl FArray {
    /// Creates a new empty array.
    #[must_use]
    pub const fn new() -> Self {
        FArray(Vec::new())
    }

    /// Creates a new array with the specified capacity.
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        FArray(Vec::with_capacity(cap))
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the array is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a slice of the elements.
    #[must_use]
    pub fn as_slice(&self) -> &[Field] {
        &self.0
    }

    /// Returns a mutable slice of the elements.
    pub fn as_mut_slice(&mut self) -> &mut [Field] {
        &mut self.0
    }

    /// Pushes an element onto the back.
    pub fn push(&mut self, value: impl Into<Field>) {
        self.0.push(value.into());
    }

    /// Pops an element from the back.
    pub fn pop(&mut self) -> Option<Field> {
        self.0.pop()
    }

    /// Inserts an element at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: impl Into<Field>) {
        self.0.insert(index, value.into());
    }

    /// Removes and returns the element at the specified index.
    pub fn remove(&mut self, index: usize) -> Option<Field> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Clears the array.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Gets an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Field> {
        self.0.get(index)
    }

    /// Gets a mutable element by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Field> {
        self.0.get_mut(index)
    }

    /// Moves every element out, leaving the array empty.
    pub(crate) fn take_items(&mut self) -> Vec<Field> {
        mem::take(&mut self.0)
    }
}

// === Iterator ===

impl IntoIterator for FArray {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FArray {
    type Item = &'a Field;
    type IntoIter = core::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut FArray {
    type Item = &'a mut Field;
    type IntoIter = core::slice::IterMut<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

// === Deref ===

impl Deref for FArray {
    type Target = [Field];

    fn deref(&self) -> &[Field] {
        &self.0
    }
}

impl DerefMut for FArray {
    fn deref_mut(&mut self) -> &mut [Field] {
        &mut self.0
    }
}

impl Debug for FArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_slice(), f)
    }
}

// === FromIterator / Extend ===

impl<T: Into<Field>> FromIterator<T> for FArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        FArray(iter.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Field>> Extend<T> for FArray {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl<T: Into<Field>> From<Vec<T>> for FArray {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let arr = FArray::new();
        assert!(arr.is_empty());
        assert_eq!(arr.len(), 0);
    }

    #[test]
    fn test_push_pop() {
        let mut arr = FArray::new();
        arr.push(1);
        arr.push(2);
        arr.push(3);

        assert_eq!(arr.len(), 3);
        assert_eq!(arr.pop().unwrap().as_number().unwrap().to_i64(), Some(3));
        assert_eq!(arr.pop().unwrap().as_number().unwrap().to_i64(), Some(2));
        assert_eq!(arr.pop().unwrap().as_number().unwrap().to_i64(), Some(1));
        assert!(arr.pop().is_none());
    }

    #[test]
    fn test_insert_remove() {
        let mut arr = FArray::new();
        arr.push(1);
        arr.push(3);
        arr.insert(1, 2);

        assert_eq!(arr.len(), 3);
        assert_eq!(arr[0].as_number().unwrap().to_i64(), Some(1));
        assert_eq!(arr[1].as_number().unwrap().to_i64(), Some(2));
        assert_eq!(arr[2].as_number().unwrap().to_i64(), Some(3));

        let removed = arr.remove(1).unwrap();
        assert_eq!(removed.as_number().unwrap().to_i64(), Some(2));
        assert_eq!(arr.len(), 2);
        assert!(arr.remove(5).is_none());
    }

    #[test]
    fn test_iter() {
        let arr: FArray = vec![1i64, 2].into();
        let sum: i64 = arr
            .iter()
            .map(|v| v.as_number().unwrap().to_i64().unwrap())
            .sum();
        assert_eq!(sum, 3);
    }

    #[test]
    fn test_take_items_leaves_empty() {
        let mut arr: FArray = ["a", "b"].into_iter().collect();
        let items = arr.take_items();
        assert_eq!(items.len(), 2);
        assert!(arr.is_empty());
    }
}
