use sml::{parse_file, Array, Kind, Table, Value, Visitor};
use std::path::PathBuf;

fn example() -> Table {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/example.sml");
    parse_file(path).unwrap()
}

#[test]
fn test_length() {
    assert_eq!(example().len(), 8);
}

#[test]
fn test_contains() {
    let root = example();
    assert!(root.contains("v_int"));
    assert!(root.contains("v_iarr"));
    assert!(root.contains("v_arr_rec"));
    assert!(root.contains("t_singer"));

    assert!(!root.contains("notexists"));
    assert!(!root.contains("t_singer.child"));
}

#[test]
fn test_value_is() {
    let root = example();
    assert!(root.is::<i64>("v_int"));
    assert!(root.is::<f64>("v_real"));
    assert!(root.is::<&str>("v_str"));
    assert!(root.is::<&Array>("v_iarr"));
    assert!(root.is::<&Array>("v_arr_rec"));
    assert!(root.is::<&Table>("t_singer"));

    assert!(!root.is::<i64>("notexists"));
    assert!(!root.is::<f64>("v_int"));
}

#[test]
fn test_value_as() {
    let root = example();
    assert_eq!(root.get::<i64>("v_int").unwrap(), 5);
    assert!((root.get::<f64>("v_real").unwrap() - 10.2).abs() < 0.001);
    assert_eq!(root.get::<&str>("v_str").unwrap(), "Example String.");
}

#[test]
fn test_get_table() {
    let root = example();
    let singer = root.get::<&Table>("t_singer").unwrap();
    assert_eq!(singer.get::<i64>("size").unwrap(), 72);

    let child = singer.get::<&Table>("child").unwrap();
    assert_eq!(child.get::<&str>("color").unwrap(), "orange");
    assert_eq!(child.get::<i64>("size").unwrap(), 75);
    assert_eq!(child.get::<&str>("food").unwrap(), "lol");

    assert!(root.get::<&Table>("t_empty").unwrap().is_empty());
}

#[test]
fn test_arrays() {
    let root = example();

    let iarr = root.get::<&Array>("v_iarr").unwrap();
    assert!(iarr.is::<i64>());
    assert!(!iarr.is::<f64>());
    assert!(!iarr.is::<&Array>());
    let values: Vec<i64> = (0..iarr.len()).map(|i| iarr.get::<i64>(i).unwrap()).collect();
    assert_eq!(values, vec![4, 2, 5]);

    let rarr = root.get::<&Array>("v_rarr").unwrap();
    assert_eq!(rarr.get::<f64>(1).unwrap(), -0.25);

    let arr_rec = root.get::<&Array>("v_arr_rec").unwrap();
    assert_eq!(arr_rec.len(), 3);
    assert!(arr_rec.is::<&Array>());
    assert!(!arr_rec.is::<i64>());

    let strings = arr_rec.get::<&Array>(1).unwrap();
    assert!(strings.is::<&str>());
    assert_eq!(strings.len(), 3);
    assert_eq!(strings.get::<&str>(2).unwrap(), "str");

    let nested = arr_rec.get::<&Array>(2).unwrap();
    assert_eq!(nested.get::<&Array>(0).unwrap().get::<i64>(0).unwrap(), 3);
}

/// Collects `path: kind` lines for every node below a table.
struct Outline<'o> {
    prefix: String,
    out: &'o mut Vec<String>,
}

impl<'a, 'o> Visitor<'a> for Outline<'o> {
    type Output = ();

    fn visit_null(self) {
        self.out.push(format!("{}: null", self.prefix));
    }

    fn unexpected(self, kind: Kind) {
        self.out.push(format!("{}: {}", self.prefix, kind));
    }

    fn visit_table(self, table: &'a Table) {
        for (key, value) in table {
            let prefix = if self.prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", self.prefix, key)
            };
            value.accept(Outline {
                prefix,
                out: &mut *self.out,
            });
        }
    }
}

#[test]
fn test_visitor_walk() {
    let root = Value::Table(example());
    let mut out = Vec::new();
    root.accept(Outline {
        prefix: String::new(),
        out: &mut out,
    });

    assert!(out.contains(&"v_int: integer".to_string()));
    assert!(out.contains(&"v_arr_rec: array".to_string()));
    assert!(out.contains(&"t_singer.child.food: string".to_string()));
    assert!(!out.iter().any(|line| line.starts_with("t_empty")));
    assert_eq!(out.len(), 11);
}
