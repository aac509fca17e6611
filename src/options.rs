//! Configuration options for SML parsing.
//!
//! - [`ParseOptions`]: main configuration struct
//! - [`RealPrecision`]: storage precision of real literals
//!
//! ## Examples
//!
//! ```rust
//! use sml::{parse_str_with_options, ParseOptions, RealPrecision};
//!
//! let options = ParseOptions::new()
//!     .with_real_precision(RealPrecision::Single)
//!     .with_max_depth(4);
//!
//! let root = parse_str_with_options("y = 10.2", &options).unwrap();
//! assert_eq!(root.get::<f64>("y").unwrap(), 10.2f32 as f64);
//! ```

/// Precision used when converting real literals.
///
/// Values are always stored as `f64`; `Single` rounds them through `f32`
/// first so a tree matches what a single-precision build would hold.
///
/// # Examples
///
/// ```rust
/// use sml::RealPrecision;
///
/// assert_eq!(RealPrecision::Double.apply(0.1), 0.1);
/// assert_eq!(RealPrecision::Single.apply(0.1), 0.1f32 as f64);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RealPrecision {
    Single,
    #[default]
    Double,
}

impl RealPrecision {
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            RealPrecision::Single => value as f32 as f64,
            RealPrecision::Double => value,
        }
    }
}

/// Default limit on nested array literals.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration options for the SML parser.
///
/// # Examples
///
/// ```rust
/// use sml::{ParseOptions, RealPrecision};
///
/// let options = ParseOptions::new();
/// assert_eq!(options.real_precision, RealPrecision::Double);
/// assert_eq!(options.max_depth, 64);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOptions {
    pub real_precision: RealPrecision,
    /// Deepest array nesting accepted; `[[1]]` has depth 2.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            real_precision: RealPrecision::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_real_precision(mut self, precision: RealPrecision) -> Self {
        self.real_precision = precision;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
