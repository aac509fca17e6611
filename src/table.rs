//! Table type for SML sections.
//!
//! This module provides [`Table`], a wrapper around [`IndexMap`] holding the
//! key/value pairs of one section. Keys are unique; the parser refuses a
//! duplicate key instead of overwriting it. Iteration follows insertion order,
//! which keeps dumps and error messages deterministic, but no caller may rely
//! on order for meaning.
//!
//! ## Examples
//!
//! ```rust
//! use sml::{parse_str, Table};
//!
//! let root = parse_str("name = \"orange\"\n[t]\nsize = 72").unwrap();
//!
//! assert_eq!(root.len(), 2);
//! assert!(root.contains("t"));
//! assert_eq!(root.get::<&str>("name").unwrap(), "orange");
//!
//! let t = root.get::<&Table>("t").unwrap();
//! assert_eq!(t.get::<i64>("size").unwrap(), 72);
//! assert!(!t.is::<f64>("size"));
//! ```

use crate::value::{FromValue, NULL};
use crate::{Error, Result, Value};
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A mapping of unique key names to SML values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table(IndexMap<String, Value>);

impl Table {
    /// Creates an empty `Table`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sml::Table;
    ///
    /// let table = Table::new();
    /// assert!(table.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Table(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Table(IndexMap::with_capacity(capacity))
    }

    /// Number of direct keys. Keys holding nested tables count like any other
    /// key; the nested tables' own keys do not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `key` is a direct child of this table.
    ///
    /// Dotted names are not resolved: `contains("a.b")` looks for a key
    /// literally named `a.b`. Use [`Table::get_path`] to walk nested tables.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value stored under `key`, or [`Value::Null`] when absent.
    #[must_use]
    pub fn value_or_null(&self, key: &str) -> &Value {
        self.0.get(key).unwrap_or(&NULL)
    }

    /// Reads the value under `key` as `T`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if `key` is absent, [`Error::MismatchType`] if
    /// it holds a value of another kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sml::{Table, Value};
    ///
    /// let mut table = Table::new();
    /// table.insert("x".to_string(), Value::from(5)).unwrap();
    ///
    /// assert_eq!(table.get::<i64>("x").unwrap(), 5);
    /// assert!(table.get::<i64>("y").unwrap_err().is_key_not_found());
    /// assert!(table.get::<f64>("x").unwrap_err().is_mismatch_type());
    /// ```
    pub fn get<'a, T: FromValue<'a>>(&'a self, key: &str) -> Result<T> {
        self.value(key)
            .ok_or_else(|| Error::key_not_found(key))?
            .cast()
    }

    /// Returns `true` if `key` is present and holds a `T`.
    ///
    /// Both an absent key and a value of another kind answer `false`; use
    /// [`Table::contains`] to tell them apart.
    #[must_use]
    pub fn is<'a, T: FromValue<'a>>(&self, key: &str) -> bool {
        self.value(key).map_or(false, |value| value.is::<T>())
    }

    /// Reads a value through a dotted path of nested tables.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] naming the path walked so far when a segment is
    /// absent, [`Error::MismatchType`] when an intermediate segment is not a
    /// table or the final value is not a `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sml::parse_str;
    ///
    /// let root = parse_str("[a]\n[a.b]\nid = 20").unwrap();
    /// assert_eq!(root.get_path::<i64>("a.b.id").unwrap(), 20);
    /// assert!(root.get_path::<i64>("a.c.id").unwrap_err().is_key_not_found());
    /// ```
    pub fn get_path<'a, T: FromValue<'a>>(&'a self, path: &str) -> Result<T> {
        let mut segments = path.split('.').peekable();
        let mut current = self;
        let mut walked = 0;

        while let Some(segment) = segments.next() {
            walked += segment.len();
            let value = current
                .value(segment)
                .ok_or_else(|| Error::key_not_found(&path[..walked]))?;
            if segments.peek().is_none() {
                return value.cast();
            }
            current = value.cast::<&Table>()?;
            walked += 1;
        }

        Err(Error::key_not_found(path))
    }

    /// Adds `key` unless it is already present.
    ///
    /// # Errors
    ///
    /// Hands `value` back when `key` already exists; the table is unchanged.
    pub fn insert(&mut self, key: String, value: Value) -> std::result::Result<(), Value> {
        if self.0.contains_key(&key) {
            return Err(value);
        }
        self.0.insert(key, value);
        Ok(())
    }

    pub(crate) fn value_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Returns an iterator over the key names.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl Serialize for Table {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl IntoIterator for Table {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Entries go through [`Table::insert`]: a repeated key keeps its first value.
impl FromIterator<(String, Value)> for Table {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut table = Table::new();
        for (key, value) in iter {
            let _ = table.insert(key, value);
        }
        table
    }
}
