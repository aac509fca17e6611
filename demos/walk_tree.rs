//! Walking a parsed tree with a visitor.
//!
//! Run with: cargo run --example walk_tree

use sml::{parse_str, Array, Kind, Table, Value, Visitor};
use std::error::Error;

/// Prints every node with its dotted path and kind.
struct Printer {
    path: String,
    indent: usize,
}

impl Printer {
    fn child(&self, segment: &str) -> Printer {
        let path = if self.path.is_empty() {
            segment.to_string()
        } else {
            format!("{}.{}", self.path, segment)
        };
        Printer {
            path,
            indent: self.indent + 1,
        }
    }
}

impl<'a> Visitor<'a> for Printer {
    type Output = ();

    fn visit_null(self) {
        println!("{:indent$}{}: null", "", self.path, indent = self.indent * 2);
    }

    fn unexpected(self, kind: Kind) {
        println!("{:indent$}{}: {}", "", self.path, kind, indent = self.indent * 2);
    }

    fn visit_array(self, array: &'a Array) {
        println!("{:indent$}{}: array of {}", "", self.path, array.len(), indent = self.indent * 2);
        for (i, value) in array.iter().enumerate() {
            value.accept(self.child(&i.to_string()));
        }
    }

    fn visit_table(self, table: &'a Table) {
        println!("{:indent$}{}: table of {}", "", self.path, table.len(), indent = self.indent * 2);
        for (key, value) in table {
            value.accept(self.child(key));
        }
    }
}

/// Sums every integer in the tree.
struct Sum;

impl<'a> Visitor<'a> for Sum {
    type Output = i64;

    fn visit_null(self) -> i64 {
        0
    }

    fn visit_integer(self, value: i64) -> i64 {
        value
    }

    fn visit_array(self, array: &'a Array) -> i64 {
        array.iter().map(|v| v.accept(Sum)).sum()
    }

    fn visit_table(self, table: &'a Table) -> i64 {
        table.values().map(|v| v.accept(Sum)).sum()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let root = Value::Table(parse_str(
        "a = 1\nb = [2, 3]\nc = [[4], [5, 6]]\nd = \"text\"\n[t]\ne = 7\n[t.u]\nf = 8.5",
    )?);

    root.accept(Printer {
        path: "root".to_string(),
        indent: 0,
    });
    println!("\nsum of integers: {}", root.accept(Sum));

    Ok(())
}
