/// Builds a [`Row`](crate::stmt::Row) from `column => value` pairs.
///
/// ```
/// let row = polytable_core::row! {
///     "type" => "car",
///     "color" => "red",
///     "capacity" => 4,
/// };
/// assert_eq!(row.len(), 3);
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::stmt::Row::new()
    };
    (
        $( $column:expr => $value:expr ),+ $(,)?
    ) => {
        [ $( ($column, $crate::stmt::Value::from($value)), )+ ]
            .into_iter()
            .collect::<$crate::stmt::Row>()
    };
}
