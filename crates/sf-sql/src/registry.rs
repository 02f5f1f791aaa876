//! Per-parse registry of the tables built in the first pass

use crate::ast::TableDef;
use sf_core::{Entity, TableName};
use std::collections::HashMap;

/// A parsed table together with the entity built from it
#[derive(Debug, Clone)]
pub(crate) struct RegisteredTable {
    pub def: TableDef,
    pub entity: Entity,
}

/// Why a table was not registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Conflict {
    /// The same table was created twice
    DuplicateTable(String),
    /// Two different tables normalize to the same entity name
    DuplicateEntity(String),
}

/// Tables keyed by [`TableName::lookup_key`], in declaration order
#[derive(Debug, Default)]
pub(crate) struct TableRegistry {
    tables: Vec<RegisteredTable>,
    by_key: HashMap<String, usize>,
}

impl TableRegistry {
    /// Register a table; the first declaration of a table or entity name wins.
    pub fn register(&mut self, def: TableDef, entity: Entity) -> Result<(), Conflict> {
        let key = def.name.lookup_key();
        if self.by_key.contains_key(&key) {
            return Err(Conflict::DuplicateTable(def.name.to_string()));
        }
        if self.tables.iter().any(|t| t.entity.name == entity.name) {
            return Err(Conflict::DuplicateEntity(entity.name));
        }

        self.by_key.insert(key, self.tables.len());
        self.tables.push(RegisteredTable { def, entity });
        Ok(())
    }

    pub fn get(&self, name: &TableName) -> Option<&RegisteredTable> {
        self.by_key
            .get(&name.lookup_key())
            .map(|&index| &self.tables[index])
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn into_entities(self) -> Vec<Entity> {
        self.tables.into_iter().map(|t| t.entity).collect()
    }
}
