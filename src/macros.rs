/// Builds a [`Value`](crate::Value) from a literal tree.
///
/// Arrays use `[...]`, tables use `{ "key": value }`; anything else goes
/// through `Value::from`. Wrap negative numbers in parentheses.
///
/// # Examples
///
/// ```rust
/// use sml::sml;
///
/// let value = sml!({
///     "x": 5,
///     "arr": [4, 2, 5],
///     "t": { "id": (-10) }
/// });
///
/// let table = value.as_table().unwrap();
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.get_path::<i64>("t.id").unwrap(), -10);
/// ```
///
/// # Panics
///
/// On a key repeated inside one table literal.
#[macro_export]
macro_rules! sml {
    (null) => {
        $crate::Value::Null
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array($crate::Array::from(vec![$($crate::sml!($elem)),*]))
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut table = $crate::Table::new();
        $(
            assert!(
                table.insert($key.to_string(), $crate::sml!($value)).is_ok(),
                "duplicate key in sml! literal: {}",
                $key
            );
        )*
        $crate::Value::Table(table)
    }};

    ($e:expr) => {
        $crate::Value::from($e)
    };
}
