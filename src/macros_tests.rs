#[cfg(test)]
mod tests {
    use crate::value::SqlValue;
    use crate::{Flavor, Row, SqlProcessor, list};
    use pretty_assertions::assert_eq;

    #[test]
    fn row_macro_keeps_key_order() {
        let row = crate::row! { "id%i" => 1_i64, "title%s" => "foo", "foo" => 2_i64 };
        assert_eq!(
            row.cells(),
            &[
                ("id%i".to_string(), SqlValue::I64(1)),
                ("title%s".to_string(), SqlValue::from("foo")),
                ("foo".to_string(), SqlValue::I64(2)),
            ]
        );
        assert_eq!(crate::row! {}, Row::new());
    }

    #[test]
    fn sql_macro_mixes_arg_kinds() {
        let p = SqlProcessor::with_flavor(Flavor::MySQL);
        let sql = crate::sql!(
            p,
            "SELECT * FROM %table WHERE id IN %i[] AND name = %s",
            "users",
            list([1_i64, 2]),
            "it's",
        )
        .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM `users` WHERE id IN (1, 2) AND name = 'it\\'s'"
        );
    }

    #[test]
    fn sql_macro_without_args() {
        let p = SqlProcessor::with_flavor(Flavor::MySQL);
        assert_eq!(crate::sql!(p, "SELECT 1").unwrap(), "SELECT 1");
    }
}
