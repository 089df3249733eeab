#[cfg(test)]
mod tests {
    use crate::flavor::{Flavor, ParseFlavorError, default_flavor, set_default_flavor_scoped};
    use pretty_assertions::assert_eq;

    #[test]
    fn flavor_display_and_parse() {
        for &f in Flavor::all() {
            assert_eq!(f.to_string().parse::<Flavor>(), Ok(f));
        }
        assert_eq!("postgresql".parse::<Flavor>(), Ok(Flavor::PostgreSQL));
        assert_eq!(
            "pg".parse::<Flavor>(),
            Err(ParseFlavorError("pg".to_string()))
        );
    }

    #[test]
    fn quote_doubles_embedded_quote() {
        assert_eq!(Flavor::MySQL.quote("a`b"), "`a``b`");
        assert_eq!(Flavor::PostgreSQL.quote("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(Flavor::CQL.quote("col"), "'col'");
    }

    #[test]
    fn scoped_default_flavor_applies_inside_scope() {
        let _g = set_default_flavor_scoped(Flavor::Oracle);
        assert_eq!(default_flavor(), Flavor::Oracle);
    }
}
