//! Kind-directed dispatch over SML values.
//!
//! A [`Visitor`] has one method per [`Kind`]. Handing it to
//! [`Value::accept`], [`Table::accept_at`] or [`Array::accept_at`] invokes the
//! method matching the node's actual kind, so tree-walking code never calls the
//! failing typed accessors. A lookup that finds nothing invokes
//! [`Visitor::visit_null`].
//!
//! ## Examples
//!
//! ```rust
//! use sml::{parse_str, Array, Table, Visitor};
//!
//! /// Counts scalar leaves below a node.
//! struct Leaves;
//!
//! impl<'a> Visitor<'a> for Leaves {
//!     type Output = usize;
//!
//!     fn visit_null(self) -> usize {
//!         0
//!     }
//!
//!     fn unexpected(self, _kind: sml::Kind) -> usize {
//!         1
//!     }
//!
//!     fn visit_array(self, array: &'a Array) -> usize {
//!         array.iter().map(|v| v.accept(Leaves)).sum()
//!     }
//!
//!     fn visit_table(self, table: &'a Table) -> usize {
//!         table.values().map(|v| v.accept(Leaves)).sum()
//!     }
//! }
//!
//! let root = parse_str("a = 1\nb = [1, 2]\n[t]\nc = \"x\"").unwrap();
//! assert_eq!(Leaves.visit_table(&root), 4);
//! assert_eq!(root.accept_at("missing", Leaves), 0);
//! ```

use crate::{Array, Kind, Table, Value};

/// Per-kind handler for [`Value::accept`].
///
/// Only [`Visitor::visit_null`] is required. Every other `visit_*` method
/// defaults to [`Visitor::unexpected`], which itself defaults to
/// `visit_null`.
pub trait Visitor<'a>: Sized {
    type Output;

    /// Called for [`Value::Null`] and for absent keys or indices.
    fn visit_null(self) -> Self::Output;

    /// Fallback for kinds this visitor does not handle.
    fn unexpected(self, kind: Kind) -> Self::Output {
        let _ = kind;
        self.visit_null()
    }

    fn visit_integer(self, value: i64) -> Self::Output {
        let _ = value;
        self.unexpected(Kind::Integer)
    }

    fn visit_real(self, value: f64) -> Self::Output {
        let _ = value;
        self.unexpected(Kind::Real)
    }

    fn visit_string(self, value: &'a str) -> Self::Output {
        let _ = value;
        self.unexpected(Kind::String)
    }

    fn visit_array(self, array: &'a Array) -> Self::Output {
        let _ = array;
        self.unexpected(Kind::Array)
    }

    fn visit_table(self, table: &'a Table) -> Self::Output {
        let _ = table;
        self.unexpected(Kind::Table)
    }
}

impl Value {
    /// Invokes the `visitor` method matching this value's kind.
    pub fn accept<'a, V: Visitor<'a>>(&'a self, visitor: V) -> V::Output {
        match self {
            Value::Integer(i) => visitor.visit_integer(*i),
            Value::Real(r) => visitor.visit_real(*r),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => visitor.visit_array(arr),
            Value::Table(table) => visitor.visit_table(table),
            Value::Null => visitor.visit_null(),
        }
    }
}

impl Table {
    /// Visits the value under `key`; an absent key visits null.
    pub fn accept_at<'a, V: Visitor<'a>>(&'a self, key: &str, visitor: V) -> V::Output {
        self.value_or_null(key).accept(visitor)
    }
}

impl Array {
    /// Visits the element at `index`; an index past the end visits null.
    pub fn accept_at<'a, V: Visitor<'a>>(&'a self, index: usize, visitor: V) -> V::Output {
        match self.value(index) {
            Some(value) => value.accept(visitor),
            None => visitor.visit_null(),
        }
    }
}
