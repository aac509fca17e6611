//! Array type for SML values.
//!
//! An [`Array`] is an ordered sequence of values of one kind. The kind of the
//! whole array is read from element 0; the parser guarantees every other
//! element matches it, but an array assembled by hand with [`Array::push`] is
//! not checked.

use crate::value::FromValue;
use crate::{Error, Result, Value};
use serde::{Serialize, Serializer};

/// An ordered, homogeneous sequence of SML values.
///
/// # Examples
///
/// ```rust
/// use sml::parse_str;
///
/// let root = parse_str("arr = [4, 2, 5]").unwrap();
/// let arr = root.get::<&sml::Array>("arr").unwrap();
///
/// assert_eq!(arr.len(), 3);
/// assert!(arr.is::<i64>());
/// assert_eq!(arr.get::<i64>(1).unwrap(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array(Vec<Value>);

impl Array {
    #[must_use]
    pub fn new() -> Self {
        Array(Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends `value` to the back of the array.
    pub fn push(&mut self, value: Value) {
        self.0.push(value);
    }

    #[must_use]
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Returns `true` if this is an array of `T`, judged by element 0.
    ///
    /// An empty array is not an array of anything.
    #[must_use]
    pub fn is<'a, T: FromValue<'a>>(&self) -> bool {
        self.0.first().map_or(false, |first| first.is::<T>())
    }

    /// Returns `true` if the element at `index` exists and holds a `T`.
    #[must_use]
    pub fn is_at<'a, T: FromValue<'a>>(&self, index: usize) -> bool {
        self.0.get(index).map_or(false, |value| value.is::<T>())
    }

    /// Reads the element at `index` as `T`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] past the end; [`Error::MismatchType`] when
    /// the array is not an array of `T` or the element itself is not a `T`.
    pub fn get<'a, T: FromValue<'a>>(&'a self, index: usize) -> Result<T> {
        let value = self
            .0
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.len()))?;
        if let Some(first) = self.0.first() {
            if !first.is::<T>() {
                return Err(Error::mismatch_type(T::KIND, first.kind()));
            }
        }
        value.cast()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Array(values)
    }
}

impl From<Array> for Vec<Value> {
    fn from(array: Array) -> Self {
        array.0
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Array(iter.into_iter().collect())
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Array {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}
