//! # sml
//!
//! A parser and dynamic value model for SML, a small human-editable
//! configuration format.
//!
//! ## What is SML?
//!
//! SML is a TOML-like dialect: `key = value` lines, typed scalars, arrays and
//! nested tables opened by bracketed dotted headers.
//!
//! ```text
//! # top-level keys
//! v_int  = 5
//! v_real = 10.2
//! v_str  = "Example String."
//! v_iarr = [4, 2, 5]
//!
//! [t_singer]
//! size = 72
//!
//! [t_singer.child]
//! color = "orange"
//! ```
//!
//! ## Key Features
//!
//! - **Typed access**: `get::<T>` fails with a typed error, `is::<T>` answers
//!   `false` instead
//! - **Visitor dispatch**: walk a tree by kind without failing accessors
//! - **All-or-nothing parsing**: the first grammar error aborts the parse with
//!   line and column
//! - **Serde bridge**: deserialize a parsed tree straight into your structs
//!
//! ## Quick Start
//!
//! ```rust
//! use sml::{parse_str, Array, Table};
//!
//! let root = parse_str("x = 5\narr = [4, 2, 5]\n[t]\nid = 10").unwrap();
//!
//! assert_eq!(root.len(), 3);
//! assert_eq!(root.get::<i64>("x").unwrap(), 5);
//! assert!(root.get::<&Array>("arr").unwrap().is::<i64>());
//! assert_eq!(root.get::<&Table>("t").unwrap().get::<i64>("id").unwrap(), 10);
//!
//! assert!(!root.is::<i64>("missing"));
//! assert!(root.get::<i64>("missing").unwrap_err().is_key_not_found());
//! ```
//!
//! ### Typed Configuration
//!
//! ```rust
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Server { host: String, port: u16, weights: Vec<f64> }
//!
//! let server: Server = sml::from_str("host = \"localhost\"\nport = 8080\nweights = [0.5, 1.5]").unwrap();
//! assert_eq!(server.port, 8080);
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All array indexing is bounds-checked
//! - Proper error propagation with `Result` types

pub mod array;
pub mod de;
pub mod error;
pub mod macros;
pub mod options;
pub mod parser;
pub mod table;
pub mod value;
pub mod visit;

pub use array::Array;
pub use de::ValueDeserializer;
pub use error::{Error, Result};
pub use options::{ParseOptions, RealPrecision};
pub use parser::Parser;
pub use table::Table;
pub use value::{FromValue, Kind, Value};
pub use visit::Visitor;

use serde::de::DeserializeOwned;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// Parses a sequence of text lines into a root table.
///
/// # Examples
///
/// ```rust
/// let root = sml::parse(["x = 5", "s = \"hi\""]).unwrap();
/// assert_eq!(root.len(), 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] at the first malformed line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse<I>(lines: I) -> Result<Table>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Parser::default().parse(lines)
}

/// Parses a sequence of text lines with custom options.
///
/// # Errors
///
/// Returns [`Error::Parse`] at the first malformed line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options<I>(lines: I, options: &ParseOptions) -> Result<Table>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Parser::new(options.clone()).parse(lines)
}

/// Parses SML text.
///
/// # Examples
///
/// ```rust
/// let root = sml::parse_str("y = 10.2").unwrap();
/// assert!((root.get::<f64>("y").unwrap() - 10.2).abs() < 1e-9);
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] at the first malformed line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(s: &str) -> Result<Table> {
    parse(s.lines())
}

/// Parses SML text with custom options.
///
/// # Errors
///
/// Returns [`Error::Parse`] at the first malformed line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str_with_options(s: &str, options: &ParseOptions) -> Result<Table> {
    parse_with_options(s.lines(), options)
}

/// Parses SML from a buffered reader.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let root = sml::parse_reader(Cursor::new(b"x = 5\n")).unwrap();
/// assert_eq!(root.get::<i64>("x").unwrap(), 5);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, [`Error::Parse`] on malformed input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R: io::BufRead>(reader: R) -> Result<Table> {
    Parser::default().parse_reader(reader)
}

/// Opens and parses an SML file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, [`Error::Parse`]
/// on malformed input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Table> {
    Parser::default().parse_file(path)
}

/// Opens and parses an SML file with custom options.
///
/// # Errors
///
/// As [`parse_file`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Table> {
    Parser::new(options.clone()).parse_file(path)
}

/// Deserializes an instance of type `T` from a parsed table.
///
/// # Errors
///
/// Returns [`Error::Custom`] if the tree does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_table<T>(table: Table) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(Value::Table(table)))
}

/// Parses SML text and deserializes it into `T`.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = sml::from_str("x = 1\ny = 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] on malformed input, [`Error::Custom`] if the tree
/// does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_table(parse_str(s)?)
}

/// Opens and parses an SML file, then deserializes it into `T`.
///
/// # Errors
///
/// As [`parse_file`] and [`from_table`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_file<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    from_table(parse_file(path)?)
}

impl FromStr for Table {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_str(s)
    }
}
