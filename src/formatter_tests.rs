#[cfg(test)]
mod tests {
    use crate::error::ProcessError;
    use crate::flavor::Flavor;
    use crate::formatter::SqlFormatter;
    use crate::value::SqlDateTime;
    use pretty_assertions::assert_eq;
    use time::{PrimitiveDateTime, UtcOffset};
    use time::macros::datetime;

    fn sample_dt() -> SqlDateTime {
        let dt = datetime!(2019-04-24 12:23:34.123456789)
            .assume_offset(UtcOffset::from_hms(8, 0, 0).unwrap());
        SqlDateTime::new(dt)
    }

    #[test]
    fn identifiers_are_quoted_per_part() {
        assert_eq!(Flavor::MySQL.format_identifier("users"), "`users`");
        assert_eq!(
            Flavor::PostgreSQL.format_identifier("public.users"),
            "\"public\".\"users\""
        );
        assert_eq!(Flavor::SQLite.format_identifier("t.*"), "\"t\".*");
        assert_eq!(Flavor::MySQL.format_identifier("we`ird"), "`we``ird`");
    }

    #[test]
    fn strings_per_flavor() {
        assert_eq!(Flavor::MySQL.format_string("I'm fine"), "'I\\'m fine'");
        assert_eq!(Flavor::PostgreSQL.format_string("hi"), "E'hi'");
        assert_eq!(Flavor::SQLServer.format_string("x"), "N'x'");
        assert_eq!(Flavor::CQL.format_string("I'm"), "'I''m'");
        assert_eq!(
            Flavor::MySQL.format_string("a\nb\t\\\"\u{0}"),
            "'a\\nb\\t\\\\\\\"\\0'"
        );
    }

    #[test]
    fn scalars_per_flavor() {
        assert_eq!(Flavor::MySQL.format_bool(true), "TRUE");
        assert_eq!(Flavor::Oracle.format_bool(false), "0");
        assert_eq!(Flavor::MySQL.format_int(-42), "-42");
        assert_eq!(Flavor::MySQL.format_uint(u64::MAX), "18446744073709551615");
        assert_eq!(Flavor::MySQL.format_float(2.5), "2.5");
        assert_eq!(Flavor::Presto.format_null(), "NULL");
    }

    #[test]
    fn bytes_per_flavor() {
        let data = [0xAB_u8, 0x01];
        let cases = [
            (Flavor::PostgreSQL, "E'\\\\xAB01'::bytea"),
            (Flavor::SQLite, "X'AB01'"),
            (Flavor::SQLServer, "0xAB01"),
            (Flavor::CQL, "0xAB01"),
            (Flavor::ClickHouse, "unhex('AB01')"),
            (Flavor::Presto, "from_hex('AB01')"),
            (Flavor::Oracle, "hextoraw('AB01')"),
        ];
        for (f, expected) in cases {
            assert_eq!(f.format_bytes(&data).unwrap(), expected, "{f}");
        }
        assert_eq!(Flavor::MySQL.format_bytes(b"ab").unwrap(), "_binary X'6162'");
        assert_eq!(Flavor::SQLite.format_bytes(&[]).unwrap(), "NULL");
        assert!(matches!(
            Flavor::Doris.format_bytes(&data),
            Err(ProcessError::Type(_))
        ));
    }

    #[test]
    fn mysql_bytes_keep_non_utf8_payloads() {
        let ff = Flavor::MySQL.format_bytes(&[0xFF]).unwrap();
        let fe = Flavor::MySQL.format_bytes(&[0xFE]).unwrap();
        assert_eq!(ff, "_binary X'FF'");
        assert_eq!(fe, "_binary X'FE'");
        assert_ne!(ff, fe);
    }

    #[test]
    fn datetime_at_max_date_is_not_rounded_up() {
        let dt = SqlDateTime::new(PrimitiveDateTime::MAX.assume_utc());
        assert_eq!(
            Flavor::MySQL.format_datetime(&dt).unwrap(),
            "'9999-12-31 23:59:59.999999'"
        );
        assert_eq!(
            Flavor::PostgreSQL.format_datetime(&dt).unwrap(),
            "'9999-12-31 23:59:59.999999 +00:00'"
        );
    }

    #[test]
    fn backslash_escapes_per_flavor() {
        assert!(Flavor::MySQL.backslash_escapes());
        assert!(!Flavor::PostgreSQL.backslash_escapes());
        assert!(!Flavor::SQLite.backslash_escapes());
    }

    #[test]
    fn datetime_per_flavor() {
        let dt = sample_dt();
        let cases = [
            (Flavor::MySQL, "'2019-04-24 12:23:34.123457'"),
            (Flavor::PostgreSQL, "'2019-04-24 12:23:34.123457 +08:00'"),
            (Flavor::SQLite, "'2019-04-24 12:23:34.123'"),
            (Flavor::SQLServer, "'2019-04-24 12:23:34.123457 +08:00'"),
            (Flavor::CQL, "'2019-04-24 12:23:34.123457+0800'"),
            (
                Flavor::Oracle,
                "to_timestamp('2019-04-24 12:23:34.123457', 'YYYY-MM-DD HH24:MI:SS.FF')",
            ),
        ];
        for (f, expected) in cases {
            assert_eq!(f.format_datetime(&dt).unwrap(), expected, "{f}");
        }

        let abbr = sample_dt().with_tz_abbr("CST");
        assert_eq!(
            Flavor::PostgreSQL.format_datetime(&abbr).unwrap(),
            "'2019-04-24 12:23:34.123457 CST'"
        );
    }
}
