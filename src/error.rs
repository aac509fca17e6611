//! Error types for SML parsing and value access.
//!
//! All failures surface as one [`Error`] carrying a human-readable message.
//!
//! ## Error Categories
//!
//! - **Parse errors**: malformed input, with line/column information. Failing
//!   to open or read the source ([`Error::Io`]) belongs to this class too.
//! - **Key not found**: a typed table lookup asked for an absent key.
//! - **Type mismatch**: a typed lookup found a value of another kind.
//! - **Index out of range**: a typed array lookup past the last element.
//!
//! The predicate accessors ([`Table::is`](crate::Table::is),
//! [`Table::contains`](crate::Table::contains)) never fail; use them to branch
//! instead of matching on errors.
//!
//! ## Examples
//!
//! ```rust
//! use sml::parse_str;
//!
//! let err = parse_str("a = 5\na = 6").unwrap_err();
//! assert!(err.is_parse());
//! assert!(err.to_string().contains("line 2"));
//! ```

use crate::Kind;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by the parser and the value model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The source could not be opened or read.
    #[error("IO error: {0}")]
    Io(String),

    /// Grammar-level failure; aborts the whole parse.
    #[error("Parse error at line {line}, column {col}: {msg}")]
    Parse { line: usize, col: usize, msg: String },

    /// Typed table lookup for a key that is not a direct child.
    #[error("Key not found ({0}).")]
    KeyNotFound(String),

    /// Typed lookup found a value of another kind.
    #[error("Mismatch type: expected {expected}, found {found}.")]
    MismatchType { expected: Kind, found: Kind },

    /// Typed array lookup past the end of the array.
    #[error("Index {index} out of range for array of length {len}.")]
    IndexOutOfRange { index: usize, len: usize },

    /// Raised while deserializing a parsed tree into a Rust type.
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a parse error at the given 1-based line and column.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sml::Error;
    ///
    /// let err = Error::parse(10, 5, "Unexpected EOL.");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn parse(line: usize, col: usize, msg: impl Into<String>) -> Self {
        Error::Parse {
            line,
            col,
            msg: msg.into(),
        }
    }

    pub fn key_not_found(key: impl Into<String>) -> Self {
        Error::KeyNotFound(key.into())
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sml::{Error, Kind};
    ///
    /// let err = Error::mismatch_type(Kind::Integer, Kind::String);
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn mismatch_type(expected: Kind, found: Kind) -> Self {
        Error::MismatchType { expected, found }
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Creates an I/O error for sources that cannot be opened or read.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` for grammar failures and for unreadable sources.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. } | Error::Io(_))
    }

    #[must_use]
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound(_))
    }

    #[must_use]
    pub fn is_mismatch_type(&self) -> bool {
        matches!(self, Error::MismatchType { .. })
    }

    /// Line of a parse error, if this is one.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
