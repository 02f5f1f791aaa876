//! Filter for base/audit columns the generator adds to every entity itself

use sf_core::ParserConfig;
use std::collections::HashSet;

/// Denylist of column names, matched ignoring case and underscores
#[derive(Debug, Clone, Default)]
pub struct BaseFieldFilter {
    excluded: HashSet<String>,
}

impl BaseFieldFilter {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            excluded: columns.into_iter().map(|c| match_key(c.as_ref())).collect(),
        }
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(&config.excluded_columns)
    }

    /// True if the column is supplied by the base entity and must be dropped.
    ///
    /// Only the name is inspected, never the type or position.
    pub fn excludes(&self, column: &str) -> bool {
        self.excluded.contains(&match_key(column))
    }
}

/// `created_at`, `createdAt` and `CREATED_AT` all reduce to `createdat`.
fn match_key(column: &str) -> String {
    column
        .chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_denylist() {
        let filter = BaseFieldFilter::from_config(&ParserConfig::default());
        for column in [
            "id",
            "estado",
            "fecha_creacion",
            "fecha_actualizacion",
            "creado_por",
            "modificado_por",
            "version",
            "created_at",
        ] {
            assert!(filter.excludes(column), "{column} should be excluded");
        }
        assert!(!filter.excludes("name"));
        assert!(!filter.excludes("customer_id"));
    }

    #[test]
    fn test_matching_ignores_case_and_underscores() {
        let filter = BaseFieldFilter::new(["createdAt"]);
        assert!(filter.excludes("created_at"));
        assert!(filter.excludes("CREATED_AT"));
        assert!(filter.excludes("createdAt"));
        assert!(!filter.excludes("created"));
    }

    #[test]
    fn test_custom_denylist_keeps_id() {
        let filter = BaseFieldFilter::new(["tenant_id"]);
        assert!(!filter.excludes("id"));
        assert!(filter.excludes("TENANT_ID"));
    }

    #[test]
    fn test_empty_filter_excludes_nothing() {
        let filter = BaseFieldFilter::default();
        assert!(!filter.excludes("id"));
    }
}
