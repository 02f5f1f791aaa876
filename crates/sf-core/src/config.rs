//! Parser configuration from schemaforge.yml

use crate::domain_type::DomainType;
use crate::error::{CoreError, CoreResult};
use crate::serde_helpers::default_true;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Columns the downstream generator's base entity supplies by itself.
pub const DEFAULT_EXCLUDED_COLUMNS: &[&str] = &[
    "id",
    "estado",
    "fecha_creacion",
    "fecha_actualizacion",
    "creado_por",
    "modificado_por",
    "version",
    "created_at",
    "updated_at",
    "created_by",
    "updated_by",
];

/// Configuration injected into the DDL parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    /// Base/audit columns dropped from every entity.
    ///
    /// Matching ignores case and underscores, so `createdAt` also drops a
    /// `created_at` column.
    #[serde(default = "default_excluded_columns")]
    pub excluded_columns: Vec<String>,

    /// SQL type keyword -> domain type, consulted before the built-in table
    #[serde(default)]
    pub type_overrides: HashMap<String, DomainType>,

    /// Resolve `REFERENCES` clauses declared inside `CREATE TABLE`
    /// in addition to `ALTER TABLE ... FOREIGN KEY`
    #[serde(default = "default_true")]
    pub inline_foreign_keys: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            excluded_columns: default_excluded_columns(),
            type_overrides: HashMap::new(),
            inline_foreign_keys: true,
        }
    }
}

fn default_excluded_columns() -> Vec<String> {
    DEFAULT_EXCLUDED_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .collect()
}

impl ParserConfig {
    /// Replace the base/audit column denylist
    pub fn with_excluded_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Add a type override for a SQL type keyword
    pub fn with_type_override(mut self, keyword: impl Into<String>, ty: DomainType) -> Self {
        self.type_overrides.insert(keyword.into(), ty);
        self
    }

    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: ParserConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        log::debug!(
            "Loaded parser config from {} ({} excluded columns, {} type overrides)",
            path.display(),
            config.excluded_columns.len(),
            config.type_overrides.len()
        );
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for schemaforge.yml or schemaforge.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("schemaforge.yml");
        let yaml_path = dir.join("schemaforge.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: yml_path.display().to_string(),
            })
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(blank) = self.excluded_columns.iter().find(|c| c.trim().is_empty()) {
            return Err(CoreError::ConfigInvalid {
                message: format!("excluded_columns contains a blank entry: {blank:?}"),
            });
        }

        if self.type_overrides.keys().any(|k| k.trim().is_empty()) {
            return Err(CoreError::ConfigInvalid {
                message: "type_overrides keys must be non-empty SQL type keywords".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
