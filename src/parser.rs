//! SML parsing.
//!
//! This module provides the [`Parser`] that turns a sequence of text lines
//! into a root [`Table`].
//!
//! ## Grammar
//!
//! Parsing is line oriented and single pass. Each line is first cut at its
//! first `#` (comments), then classified:
//!
//! ```text
//! # blank lines and comment-only lines are skipped
//! name = "orange"        # assignment: key = literal
//! size = 72
//! [t_singer]             # table header: cursor moves to a fresh table
//! ratio = 0.5
//! [t_singer.child]       # every segment but the last must already exist
//! sizes = [1, 2, 3]
//! ```
//!
//! Literals are classified in a fixed order, first match wins:
//!
//! | Kind | Shape | Notes |
//! |------|-------|-------|
//! | Integer | `[+-]?[1-9][0-9]*` | a leading `0` is never an integer |
//! | Real | `[+-]?[0-9]+.[0-9]+` | digits on both sides of the point |
//! | String | `"..."` | verbatim, no escapes |
//! | Array | `[a, b, ...]` | all elements parsed as the kind of the first |
//!
//! Any error aborts the whole parse; no partial tree is returned.
//!
//! ## Usage
//!
//! ```rust
//! use sml::{ParseOptions, Parser, Table};
//!
//! let lines = ["[t]", "id = 10", "[t.child]", "id = 20"];
//! let root = Parser::new(ParseOptions::default()).parse(lines).unwrap();
//!
//! let t = root.get::<&Table>("t").unwrap();
//! assert_eq!(t.len(), 2);
//! assert_eq!(t.get::<&Table>("child").unwrap().get::<i64>("id").unwrap(), 20);
//! ```

use crate::{Array, Error, ParseOptions, Result, Table, Value};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Grammar class of a right-hand-side literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Literal {
    Integer,
    Real,
    String,
    Array,
}

impl Literal {
    /// Classifies the literal starting at the front of `text`.
    fn classify(text: &str) -> Option<Self> {
        if is_integer(text) {
            Some(Literal::Integer)
        } else if is_real(text) {
            Some(Literal::Real)
        } else if is_string(text) {
            Some(Literal::String)
        } else if text.starts_with('[') {
            Some(Literal::Array)
        } else {
            None
        }
    }
}

fn is_blank(ch: char) -> bool {
    ch == ' ' || ch == '\t' || ch == '\r'
}

fn unsigned(text: &str) -> &str {
    text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text)
}

fn digit_count(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

fn is_integer(text: &str) -> bool {
    let body = unsigned(text);
    let digits = digit_count(body);
    digits > 0 && !body.starts_with('0') && !body[digits..].starts_with('.')
}

fn is_real(text: &str) -> bool {
    let body = unsigned(text);
    let whole = digit_count(body);
    match body[whole..].strip_prefix('.') {
        Some(rest) => whole > 0 && digit_count(rest) > 0,
        None => false,
    }
}

fn is_string(text: &str) -> bool {
    text.strip_prefix('"')
        .map_or(false, |rest| rest.contains('"'))
}

/// Drops everything from the first `#`. Quotes are not honoured.
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(at) => &line[..at],
        None => line,
    }
}

/// Character cursor over one source line.
struct LineCursor<'a> {
    text: &'a str,
    position: usize,
    line: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str, line: usize) -> Self {
        LineCursor {
            text,
            position: 0,
            line,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.text[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn rest(&self) -> &'a str {
        let text = self.text;
        &text[self.position..]
    }

    fn at_end(&self) -> bool {
        self.position >= self.text.len()
    }

    /// 1-based column of the next character.
    fn column(&self) -> usize {
        self.text[..self.position].chars().count() + 1
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, is_blank) {
            self.next_char();
        }
    }

    /// Consumes characters while `pred` holds and returns them.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.position;
        while self.peek_char().map_or(false, &pred) {
            self.next_char();
        }
        let text = self.text;
        &text[start..self.position]
    }

    fn error(&self, msg: impl Into<String>) -> Error {
        Error::parse(self.line, self.column(), msg)
    }

    fn error_at(&self, col: usize, msg: impl Into<String>) -> Error {
        Error::parse(self.line, col, msg)
    }

    fn eol(&self) -> Error {
        self.error("Unexpected EOL.")
    }

    /// Error for the character under the cursor, or end of line.
    fn unexpected(&self) -> Error {
        match self.peek_char() {
            Some(ch) => self.error(format!("Unexpected character '{}'.", ch)),
            None => self.eol(),
        }
    }
}

/// Table receiving assignments.
enum Cursor {
    /// Reachable from the root through these keys.
    Path(Vec<String>),
    /// A re-declared header; its assignments are checked but never stored.
    Detached(Table),
}

/// The SML parser.
///
/// Holds only configuration; every call to [`Parser::parse`] builds a fresh,
/// independent tree.
#[derive(Clone, Debug, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    #[must_use]
    pub fn new(options: ParseOptions) -> Self {
        Parser { options }
    }

    #[must_use]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses a sequence of lines into a root table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] at the first grammar violation.
    pub fn parse<I>(&self, lines: I) -> Result<Table>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        debug!(options = ?self.options, "parsing SML source");
        match self.parse_lines(lines) {
            Ok((root, count)) => {
                debug!(lines = count, keys = root.len(), "parsed SML source");
                Ok(root)
            }
            Err(err) => {
                debug!(error = %err, "SML parse failed");
                Err(err)
            }
        }
    }

    /// Parses everything readable from `reader`.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when reading fails, [`Error::Parse`] at the first line
    /// that is not valid UTF-8, otherwise as [`Parser::parse`].
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Table> {
        let mut lines = Vec::new();
        for (index, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes.map_err(|e| Error::io(&e.to_string()))?;
            let line = String::from_utf8(bytes).map_err(|e| {
                let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
                let col = String::from_utf8_lossy(valid).chars().count() + 1;
                Error::parse(index + 1, col, "Invalid UTF-8 sequence.")
            })?;
            lines.push(line);
        }
        self.parse(lines)
    }

    /// Opens and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the file cannot be opened or read, otherwise as
    /// [`Parser::parse`].
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Table> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening SML file");
        let file = File::open(path).map_err(|e| {
            Error::io(&format!("Failed to open file ({}): {}", path.display(), e))
        })?;
        self.parse_reader(BufReader::new(file))
    }

    fn parse_lines<I>(&self, lines: I) -> Result<(Table, usize)>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut root = Table::new();
        let mut cursor = Cursor::Path(Vec::new());
        let mut count = 0;

        for (index, raw) in lines.into_iter().enumerate() {
            count = index + 1;
            let mut line = LineCursor::new(strip_comment(raw.as_ref()), count);

            line.skip_whitespace();
            if line.at_end() {
                continue;
            }

            if line.peek_char() == Some('[') {
                cursor = self.parse_header(&mut line, &mut root)?;
            } else {
                let table = match &mut cursor {
                    Cursor::Path(path) => resolve_mut(&mut root, path).ok_or_else(|| {
                        line.error_at(1, format!("Key is not defined ({}).", path.join(".")))
                    })?,
                    Cursor::Detached(table) => table,
                };
                self.parse_assignment(&mut line, table)?;
            }

            // Each line must be fully consumed.
            line.skip_whitespace();
            if !line.at_end() {
                return Err(line.unexpected());
            }
        }

        Ok((root, count))
    }

    /// `[seg.seg.seg]`: installs a fresh table at the path and points the
    /// cursor at it. An existing entry is left untouched and the cursor gets
    /// a detached table instead.
    fn parse_header(&self, line: &mut LineCursor<'_>, root: &mut Table) -> Result<Cursor> {
        let mut segments: Vec<(String, usize)> = Vec::new();

        line.next_char(); // consume '['
        loop {
            line.skip_whitespace();
            let col = line.column();
            let segment = line.take_while(|c| !is_blank(c) && c != '.' && c != ']');
            if line.at_end() {
                return Err(line.eol());
            }
            if segment.is_empty() {
                return Err(line.unexpected());
            }
            segments.push((segment.to_string(), col));

            line.skip_whitespace();
            match line.peek_char() {
                Some('.') => {
                    line.next_char();
                }
                Some(']') => {
                    line.next_char();
                    break;
                }
                _ => return Err(line.unexpected()),
            }
        }

        let (last, parents) = match segments.split_last() {
            Some(split) => split,
            None => return Err(line.unexpected()),
        };

        let mut current = root;
        for (segment, col) in parents {
            current = current
                .value_mut(segment)
                .and_then(Value::as_table_mut)
                .ok_or_else(|| line.error_at(*col, format!("Key is not defined ({}).", segment)))?;
        }
        if current.insert(last.0.clone(), Value::Table(Table::new())).is_err() {
            trace!(line = line.line, key = %last.0, "table header already defined, detached");
            return Ok(Cursor::Detached(Table::new()));
        }

        let path: Vec<String> = segments.into_iter().map(|(segment, _)| segment).collect();
        trace!(line = line.line, path = %path.join("."), "table header");
        Ok(Cursor::Path(path))
    }

    /// `key = literal` into `table`.
    fn parse_assignment(&self, line: &mut LineCursor<'_>, table: &mut Table) -> Result<()> {
        let col = line.column();
        let key = line.take_while(|c| !is_blank(c) && c != '=');
        if line.at_end() {
            return Err(line.eol());
        }
        if key.is_empty() {
            return Err(line.unexpected());
        }
        if table.contains(key) {
            return Err(line.error_at(col, format!("Key duplicated ({}).", key)));
        }

        line.skip_whitespace();
        if line.peek_char() != Some('=') {
            return Err(line.unexpected());
        }
        line.next_char(); // consume '='
        line.skip_whitespace();

        let value = self.parse_value(line)?;
        trace!(line = line.line, key, kind = %value.kind(), "assignment");

        table
            .insert(key.to_string(), value)
            .map_err(|_| line.error_at(col, format!("Key duplicated ({}).", key)))
    }

    fn parse_value(&self, line: &mut LineCursor<'_>) -> Result<Value> {
        if line.at_end() {
            return Err(line.eol());
        }
        match Literal::classify(line.rest()) {
            Some(literal) => self.parse_literal(line, literal, 0),
            None => Err(line.error("Unexpected right value.")),
        }
    }

    fn parse_literal(
        &self,
        line: &mut LineCursor<'_>,
        literal: Literal,
        depth: usize,
    ) -> Result<Value> {
        match literal {
            Literal::Integer => self.parse_integer(line),
            Literal::Real => self.parse_real(line),
            Literal::String => Ok(self.parse_string(line)),
            Literal::Array => self.parse_array(line, depth + 1),
        }
    }

    fn parse_integer(&self, line: &mut LineCursor<'_>) -> Result<Value> {
        let col = line.column();
        let start = line.position;
        if matches!(line.peek_char(), Some('+' | '-')) {
            line.next_char();
        }
        line.take_while(|c| c.is_ascii_digit());

        line.text[start..line.position]
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| line.error_at(col, "Integer out of range."))
    }

    fn parse_real(&self, line: &mut LineCursor<'_>) -> Result<Value> {
        let col = line.column();
        let start = line.position;
        if matches!(line.peek_char(), Some('+' | '-')) {
            line.next_char();
        }
        line.take_while(|c| c.is_ascii_digit());
        line.next_char(); // consume '.'
        line.take_while(|c| c.is_ascii_digit());

        line.text[start..line.position]
            .parse::<f64>()
            .map(|r| Value::Real(self.options.real_precision.apply(r)))
            .map_err(|_| line.error_at(col, "Invalid real number."))
    }

    /// Classification guarantees the closing quote.
    fn parse_string(&self, line: &mut LineCursor<'_>) -> Value {
        line.next_char(); // consume opening quote
        let text = line.take_while(|c| c != '"');
        line.next_char(); // consume closing quote
        Value::String(text.to_string())
    }

    fn parse_array(&self, line: &mut LineCursor<'_>, depth: usize) -> Result<Value> {
        if depth > self.options.max_depth {
            return Err(line.error(format!(
                "Array nesting deeper than {} levels.",
                self.options.max_depth
            )));
        }

        line.next_char(); // consume '['
        line.skip_whitespace();
        let element = Literal::classify(line.rest())
            .ok_or_else(|| line.error("Invalid array format."))?;

        let mut array = Array::new();
        loop {
            line.skip_whitespace();
            match Literal::classify(line.rest()) {
                Some(found) if found == element => {}
                Some(_) => return Err(line.error("Array elements must share one type.")),
                None if line.at_end() => return Err(line.eol()),
                None => return Err(line.error("Invalid array format.")),
            }
            array.push(self.parse_literal(line, element, depth)?);

            line.skip_whitespace();
            match line.peek_char() {
                Some(',') => {
                    line.next_char();
                }
                Some(']') => {
                    line.next_char();
                    break;
                }
                _ => return Err(line.unexpected()),
            }
        }

        Ok(Value::Array(array))
    }
}

/// Walks `path` from `root` through nested tables.
fn resolve_mut<'t>(root: &'t mut Table, path: &[String]) -> Option<&'t mut Table> {
    let mut current = root;
    for segment in path {
        current = current.value_mut(segment)?.as_table_mut()?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Kind, RealPrecision};

    fn parse(src: &str) -> Result<Table> {
        Parser::default().parse(src.lines())
    }

    fn parse_err(src: &str) -> Error {
        parse(src).unwrap_err()
    }

    fn message(err: &Error) -> &str {
        match err {
            Error::Parse { msg, .. } => msg,
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(Literal::classify("5"), Some(Literal::Integer));
        assert_eq!(Literal::classify("-12,"), Some(Literal::Integer));
        assert_eq!(Literal::classify("+7]"), Some(Literal::Integer));
        assert_eq!(Literal::classify("10.2"), Some(Literal::Real));
        assert_eq!(Literal::classify("0.5"), Some(Literal::Real));
        assert_eq!(Literal::classify("\"x\""), Some(Literal::String));
        assert_eq!(Literal::classify("[1]"), Some(Literal::Array));

        assert_eq!(Literal::classify("0"), None);
        assert_eq!(Literal::classify("012"), None);
        assert_eq!(Literal::classify("5."), None);
        assert_eq!(Literal::classify(".5"), None);
        assert_eq!(Literal::classify("-"), None);
        assert_eq!(Literal::classify("\"open"), None);
        assert_eq!(Literal::classify("true"), None);
    }

    #[test]
    fn test_scalars() {
        let root = parse("i = -42\nr = +3.25\ns = \"hello world\"").unwrap();
        assert_eq!(root.len(), 3);
        assert_eq!(root.get::<i64>("i").unwrap(), -42);
        assert_eq!(root.get::<f64>("r").unwrap(), 3.25);
        assert_eq!(root.get::<&str>("s").unwrap(), "hello world");
    }

    #[test]
    fn test_integer_bounds() {
        let root = parse("max = 9223372036854775807\nmin = -9223372036854775808").unwrap();
        assert_eq!(root.get::<i64>("max").unwrap(), i64::MAX);
        assert_eq!(root.get::<i64>("min").unwrap(), i64::MIN);

        let err = parse_err("big = 9223372036854775808");
        assert_eq!(message(&err), "Integer out of range.");
    }

    #[test]
    fn test_bare_zero_is_rejected() {
        assert_eq!(message(&parse_err("z = 0")), "Unexpected right value.");
        assert_eq!(message(&parse_err("z = 007")), "Unexpected right value.");
        assert_eq!(parse("z = 0.0").unwrap().get::<f64>("z").unwrap(), 0.0);
    }

    #[test]
    fn test_whitespace_and_comments() {
        let src = "\n   # only a comment\n\t key\t=\t5   # trailing\n\n";
        let root = parse(src).unwrap();
        assert_eq!(root.len(), 1);
        assert_eq!(root.get::<i64>("key").unwrap(), 5);
    }

    #[test]
    fn test_key_may_touch_equals() {
        let root = parse("a=1\nb =2\nc= 3").unwrap();
        assert_eq!(root.len(), 3);
        assert_eq!(root.get::<i64>("b").unwrap(), 2);
    }

    #[test]
    fn test_hash_inside_string_truncates_line() {
        let err = parse_err("s = \"a#b\"");
        assert_eq!(message(&err), "Unexpected right value.");
    }

    #[test]
    fn test_crlf_line_endings() {
        let root = parse("a = 1\r\n[t]\r\nb = \"x\"\r\n").unwrap();
        assert_eq!(root.get_path::<&str>("t.b").unwrap(), "x");
    }

    #[test]
    fn test_arrays() {
        let root = parse("a = [ 1 ,2,  3 ]\nn = [[1, 2], [3]]\ns = [\"x, y\", \"]\"]").unwrap();

        let a = root.get::<&Array>("a").unwrap();
        assert_eq!(a.len(), 3);
        assert!(a.is::<i64>());

        let n = root.get::<&Array>("n").unwrap();
        assert!(n.is::<&Array>());
        assert_eq!(n.get::<&Array>(1).unwrap().get::<i64>(0).unwrap(), 3);

        let s = root.get::<&Array>("s").unwrap();
        assert_eq!(s.get::<&str>(0).unwrap(), "x, y");
        assert_eq!(s.get::<&str>(1).unwrap(), "]");
    }

    #[test]
    fn test_array_errors() {
        assert_eq!(message(&parse_err("a = []")), "Invalid array format.");
        assert_eq!(message(&parse_err("a = [1, ]")), "Invalid array format.");
        assert_eq!(
            message(&parse_err("a = [1, 2.5]")),
            "Array elements must share one type."
        );
        assert_eq!(message(&parse_err("a = [1 2]")), "Unexpected character '2'.");
        assert_eq!(message(&parse_err("a = [1, 2")), "Unexpected EOL.");
    }

    #[test]
    fn test_max_depth() {
        let parser = Parser::new(ParseOptions::new().with_max_depth(2));
        assert!(parser.parse(["a = [[1]]"]).is_ok());
        let err = parser.parse(["a = [[[1]]]"]).unwrap_err();
        assert_eq!(message(&err), "Array nesting deeper than 2 levels.");
    }

    #[test]
    fn test_single_precision() {
        let parser = Parser::new(ParseOptions::new().with_real_precision(RealPrecision::Single));
        let root = parser.parse(["y = 10.2"]).unwrap();
        assert_eq!(root.get::<f64>("y").unwrap(), 10.2f32 as f64);
    }

    #[test]
    fn test_nested_headers() {
        let root = parse("[a]\nx = 1\n[a.b]\ny = 2\n[ a . b . c ]\nz = 3").unwrap();
        assert_eq!(root.len(), 1);

        let a = root.get::<&Table>("a").unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(root.get_path::<i64>("a.b.y").unwrap(), 2);
        assert_eq!(root.get_path::<i64>("a.b.c.z").unwrap(), 3);
    }

    #[test]
    fn test_header_needs_defined_parents() {
        let err = parse_err("[a.b]\nid = 1");
        assert_eq!(message(&err), "Key is not defined (a).");
        assert_eq!(err.line(), Some(1));

        let err = parse_err("a = 5\n[a.b]");
        assert_eq!(message(&err), "Key is not defined (a).");
    }

    #[test]
    fn test_redeclared_header_keeps_first_table() {
        let root = parse("[t]\nkeep = 1\n[t]\nother = 2\nkeep = 3").unwrap();
        let t = root.get::<&Table>("t").unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.get::<i64>("keep").unwrap(), 1);
        assert!(!t.contains("other"));
    }

    #[test]
    fn test_header_never_overwrites_value() {
        let root = parse("a = 5\n[a]\nx = 1").unwrap();
        assert_eq!(root.len(), 1);
        assert_eq!(root.get::<i64>("a").unwrap(), 5);
        assert!(!root.contains("x"));

        let root = parse("arr = [1, 2]\n[arr]").unwrap();
        let arr = root.get::<&Array>("arr").unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.get::<i64>(1).unwrap(), 2);
    }

    #[test]
    fn test_reader_reports_invalid_utf8_position() {
        let src: &[u8] = b"a = 1\nb = \"\xff\"\n";
        let err = Parser::default().parse_reader(src).unwrap_err();
        assert_eq!(err, Error::parse(2, 6, "Invalid UTF-8 sequence."));
        assert!(err.is_parse());

        let src: &[u8] = b"# caf\xc3\xa9 \xfe\nx = 1";
        let err = Parser::default().parse_reader(src).unwrap_err();
        assert_eq!(err, Error::parse(1, 8, "Invalid UTF-8 sequence."));
    }

    #[test]
    fn test_reader_accepts_crlf_and_missing_final_newline() {
        let src: &[u8] = b"a = 1\r\n[t]\r\nb = \"x\"";
        let root = Parser::default().parse_reader(src).unwrap();
        assert_eq!(root.get_path::<&str>("t.b").unwrap(), "x");
    }

    #[test]
    fn test_detached_table_still_checks_duplicates() {
        let err = parse_err("[t]\n[t]\nx = 1\nx = 2");
        assert_eq!(err, Error::parse(4, 1, "Key duplicated (x)."));
    }

    #[test]
    fn test_header_after_detached_table_resolves_from_root() {
        let root = parse("[t]\nid = 1\n[t]\nid = 2\n[t.child]\nid = 3").unwrap();
        assert_eq!(root.get_path::<i64>("t.id").unwrap(), 1);
        assert_eq!(root.get_path::<i64>("t.child.id").unwrap(), 3);
    }

    #[test]
    fn test_header_errors() {
        assert_eq!(message(&parse_err("[]")), "Unexpected character ']'.");
        assert_eq!(message(&parse_err("[a")), "Unexpected EOL.");
        assert_eq!(message(&parse_err("[a..b]")), "Unexpected character '.'.");
        assert_eq!(message(&parse_err("[a b]")), "Unexpected character 'b'.");
        assert_eq!(message(&parse_err("[a] x")), "Unexpected character 'x'.");
    }

    #[test]
    fn test_assignment_errors() {
        assert_eq!(message(&parse_err("key")), "Unexpected EOL.");
        assert_eq!(message(&parse_err("key 5")), "Unexpected character '5'.");
        assert_eq!(message(&parse_err("= 5")), "Unexpected character '='.");
        assert_eq!(message(&parse_err("key =")), "Unexpected EOL.");
        assert_eq!(message(&parse_err("key = true")), "Unexpected right value.");
        assert_eq!(message(&parse_err("key = 5 6")), "Unexpected character '6'.");
        assert_eq!(message(&parse_err("key = \"a\"b")), "Unexpected character 'b'.");
    }

    #[test]
    fn test_duplicate_key_position() {
        let err = parse_err("a = 5\n  a = 6");
        assert_eq!(err, Error::parse(2, 3, "Key duplicated (a)."));
    }

    #[test]
    fn test_same_key_in_different_tables() {
        let root = parse("id = 1\n[t]\nid = 2").unwrap();
        assert_eq!(root.get::<i64>("id").unwrap(), 1);
        assert_eq!(root.get_path::<i64>("t.id").unwrap(), 2);
    }

    #[test]
    fn test_error_column_counts_chars() {
        let err = parse_err("ключ = ?");
        assert_eq!(err, Error::parse(1, 8, "Unexpected right value."));
    }

    #[test]
    fn test_kinds_of_parsed_values() {
        let root = parse("a = 1\nb = 1.5\nc = \"c\"\nd = [1]\n[e]").unwrap();
        let kinds: Vec<Kind> = root.values().map(Value::kind).collect();
        assert_eq!(
            kinds,
            vec![Kind::Integer, Kind::Real, Kind::String, Kind::Array, Kind::Table]
        );
    }
}
