//! Dynamic value representation for SML data.
//!
//! This module provides the [`Value`] enum, one node of a parsed SML tree, and
//! the [`Kind`] of each node.
//!
//! ## Core Types
//!
//! - [`Value`]: Integer, Real, String, Array, Table or Null
//! - [`Kind`]: the kind of a value without its payload
//! - [`FromValue`]: the payload types a value can be read as
//!
//! ## Typed Access
//!
//! ```rust
//! use sml::{Kind, Value};
//!
//! let value = Value::from(42);
//! assert_eq!(value.kind(), Kind::Integer);
//! assert!(value.is::<i64>());
//! assert_eq!(value.cast::<i64>().unwrap(), 42);
//! assert!(value.cast::<&str>().unwrap_err().is_mismatch_type());
//! ```

use crate::{Array, Error, Result, Table};
use serde::{Serialize, Serializer};
use std::fmt;

/// The kind of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    Real,
    String,
    Array,
    Table,
    Null,
}

impl Kind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::Integer => "integer",
            Kind::Real => "real",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Table => "table",
            Kind::Null => "null",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of a parsed SML tree.
///
/// Scalars are leaves; [`Array`] and [`Table`] own their children. `Null`
/// stands for an absent lookup target and is never produced by the parser.
///
/// # Examples
///
/// ```rust
/// use sml::{Kind, Value};
///
/// let text = Value::from("hello");
/// assert_eq!(text.kind(), Kind::String);
/// assert_eq!(text.as_str(), Some("hello"));
/// assert!(Value::Null.is_null());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    Integer(i64),
    Real(f64),
    String(String),
    Array(Array),
    Table(Table),
    #[default]
    Null,
}

/// The shared sentinel handed out for absent lookups.
pub(crate) static NULL: Value = Value::Null;

/// A payload type that can be borrowed out of a [`Value`].
///
/// Implemented for `i64`, `f64`, `&str`, `&Array` and `&Table`; these are the
/// `T` of every typed accessor (`cast::<T>`, `get::<T>`, `is::<T>`).
pub trait FromValue<'a>: Sized {
    /// The kind a value must have to be read as `Self`.
    const KIND: Kind;

    /// Returns the payload when `value` has kind [`Self::KIND`].
    fn from_value(value: &'a Value) -> Option<Self>;
}

impl<'a> FromValue<'a> for i64 {
    const KIND: Kind = Kind::Integer;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_integer()
    }
}

impl<'a> FromValue<'a> for f64 {
    const KIND: Kind = Kind::Real;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_real()
    }
}

impl<'a> FromValue<'a> for &'a str {
    const KIND: Kind = Kind::String;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> FromValue<'a> for &'a Array {
    const KIND: Kind = Kind::Array;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_array()
    }
}

impl<'a> FromValue<'a> for &'a Table {
    const KIND: Kind = Kind::Table;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_table()
    }
}

impl Value {
    /// Returns the kind of this value without converting it.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Real(_) => Kind::Real,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Table(_) => Kind::Table,
            Value::Null => Kind::Null,
        }
    }

    /// Returns `true` if this value can be read as `T`.
    #[inline]
    #[must_use]
    pub fn is<'a, T: FromValue<'a>>(&self) -> bool {
        self.kind() == T::KIND
    }

    /// Reads the payload as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchType`] when the value is not of kind `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sml::Value;
    ///
    /// let value = Value::from(10.5);
    /// assert_eq!(value.cast::<f64>().unwrap(), 10.5);
    /// assert!(value.cast::<i64>().is_err());
    /// ```
    pub fn cast<'a, T: FromValue<'a>>(&'a self) -> Result<T> {
        T::from_value(self).ok_or_else(|| Error::mismatch_type(T::KIND, self.kind()))
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(r) => Some(*r),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }

    pub(crate) fn as_table_mut(&mut self) -> Option<&mut Table> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => {
                let text = r.to_string();
                if text.contains('.') || !r.is_finite() {
                    f.write_str(&text)
                } else {
                    write!(f, "{}.0", text)
                }
            }
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Array(arr) => {
                f.write_str("[")?;
                for (i, elem) in arr.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", elem)?;
                }
                f.write_str("]")
            }
            Value::Table(table) => {
                f.write_str("{")?;
                for (i, (key, value)) in table.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} = {}", key, value)?;
                }
                f.write_str("}")
            }
            Value::Null => f.write_str("null"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Real(r) => serializer.serialize_f64(*r),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => arr.serialize(serializer),
            Value::Table(table) => table.serialize(serializer),
            Value::Null => serializer.serialize_unit(),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Real(f64::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(Array::from(value))
    }
}

impl From<Table> for Value {
    fn from(value: Table) -> Self {
        Value::Table(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of() {
        assert_eq!(Value::from(1).kind(), Kind::Integer);
        assert_eq!(Value::from(1.5).kind(), Kind::Real);
        assert_eq!(Value::from("a").kind(), Kind::String);
        assert_eq!(Value::from(vec![Value::from(1)]).kind(), Kind::Array);
        assert_eq!(Value::from(Table::new()).kind(), Kind::Table);
        assert_eq!(Value::Null.kind(), Kind::Null);
        assert_eq!(Value::default(), Value::Null);
    }

    #[test]
    fn test_cast() {
        let value = Value::from("text");
        assert_eq!(value.cast::<&str>().unwrap(), "text");
        assert_eq!(
            value.cast::<i64>().unwrap_err(),
            Error::mismatch_type(Kind::Integer, Kind::String)
        );

        let table = Value::from(Table::new());
        assert!(table.cast::<&Table>().unwrap().is_empty());
        assert!(table.cast::<&Array>().is_err());
    }

    #[test]
    fn test_is() {
        let value = Value::from(3.25);
        assert!(value.is::<f64>());
        assert!(!value.is::<i64>());
        assert!(!Value::Null.is::<&Table>());
    }

    #[test]
    fn test_display_literals() {
        assert_eq!(Value::from(-7).to_string(), "-7");
        assert_eq!(Value::from(10.25).to_string(), "10.25");
        assert_eq!(Value::from(3.0).to_string(), "3.0");
        assert_eq!(Value::from("hi").to_string(), "\"hi\"");
        assert_eq!(
            Value::from(vec![Value::from(1), Value::from(2)]).to_string(),
            "[1, 2]"
        );
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(42i32), Value::Integer(42));
        assert_eq!(Value::from(i32::MIN), Value::Integer(-2_147_483_648));
        assert_eq!(Value::from(42i64), Value::Integer(42));
        assert_eq!(Value::from(0.5f32), Value::Real(0.5));
        assert_eq!(Value::from(0.1f32), Value::Real(f64::from(0.1f32)));
        assert_eq!(Value::from("s".to_string()), Value::String("s".to_string()));
    }
}
