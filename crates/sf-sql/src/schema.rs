//! Model assembly: the two-pass pipeline behind [`parse_sql`]

use crate::ast::DdlStatement;
use crate::base_fields::BaseFieldFilter;
use crate::classifier::classify;
use crate::foreign_key::resolve_relations;
use crate::preprocess::preprocess;
use crate::registry::{Conflict, TableRegistry};
use crate::table::build_entity;
use crate::type_mapper::TypeMapper;
use sf_core::{ErModel, ParserConfig};

/// DDL parser with injected configuration.
///
/// Holds only read-only lookup tables, so one instance can serve concurrent
/// callers; every [`parse`](Self::parse) works on its own local registry.
#[derive(Debug, Clone)]
pub struct SchemaParser {
    config: ParserConfig,
    types: TypeMapper,
    base_fields: BaseFieldFilter,
}

impl SchemaParser {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            types: TypeMapper::from_config(&config),
            base_fields: BaseFieldFilter::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse DDL text into entities and relations.
    ///
    /// Never fails: statements that are not DDL are ignored, malformed ones
    /// are logged and skipped, and foreign keys to unknown tables are
    /// dropped. Relations are resolved only after every table is known, so
    /// declaration order does not matter.
    pub fn parse(&self, sql: &str) -> ErModel {
        let mut registry = TableRegistry::default();
        let mut foreign_keys = Vec::new();

        for (index, statement) in preprocess(sql).iter().enumerate() {
            match classify(statement) {
                Ok(DdlStatement::CreateTable(mut def)) => {
                    let inline_keys = std::mem::take(&mut def.foreign_keys);
                    let entity = build_entity(&def, &self.types, &self.base_fields);
                    match registry.register(def, entity) {
                        Ok(()) if self.config.inline_foreign_keys => {
                            foreign_keys.extend(inline_keys)
                        }
                        Ok(()) => {}
                        Err(Conflict::DuplicateTable(table)) => {
                            log::warn!("Skipping duplicate CREATE TABLE {}", table)
                        }
                        Err(Conflict::DuplicateEntity(name)) => log::warn!(
                            "Skipping statement {}: entity '{}' already defined",
                            index + 1,
                            name
                        ),
                    }
                }
                Ok(DdlStatement::ForeignKeys(decls)) => foreign_keys.extend(decls),
                Ok(DdlStatement::Ignored) => {
                    log::debug!("Ignoring statement {}: not table DDL", index + 1)
                }
                Err(e) => log::warn!("Skipping statement {}: {}", index + 1, e),
            }
        }

        let relations = resolve_relations(&foreign_keys, &registry);
        log::debug!(
            "Parsed {} entities and {} relations ({} foreign keys declared)",
            registry.len(),
            relations.len(),
            foreign_keys.len()
        );

        ErModel {
            entities: registry.into_entities(),
            relations,
        }
    }
}

impl Default for SchemaParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

/// Parse DDL text with the default configuration.
pub fn parse_sql(sql: &str) -> ErModel {
    SchemaParser::default().parse(sql)
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
