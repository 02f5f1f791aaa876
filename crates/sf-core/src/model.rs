//! Entity-relationship model produced by the DDL parser
//!
//! Every value here is created fresh by a single parse and serialized with
//! camelCase keys, which is the shape the canvas editor and the generation
//! request builder consume.

use crate::domain_type::DomainType;
use crate::ids::{EntityId, RelationId};
use crate::table_name::TableName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one parse: all entities and the relations resolved between them
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErModel {
    /// Parsed tables, in declaration order
    pub entities: Vec<Entity>,

    /// Resolved foreign keys, in declaration order
    pub relations: Vec<Relation>,
}

impl ErModel {
    /// True when the input contained no recognized DDL
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.relations.is_empty()
    }

    /// Look up an entity by its id
    pub fn entity(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| &e.id == id)
    }

    /// Look up an entity by its PascalCase name
    pub fn entity_by_name(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Relations whose source is the given entity
    pub fn relations_from<'a>(&'a self, id: &'a EntityId) -> impl Iterator<Item = &'a Relation> {
        self.relations.iter().filter(move |r| &r.source_entity_id == id)
    }
}

/// One parsed table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: EntityId,

    /// PascalCase, singularized name derived from the table name
    pub name: String,

    /// Table identifier as written in the DDL
    pub table_name: TableName,

    /// Retained columns in declaration order
    pub fields: Vec<Field>,
}

impl Entity {
    /// Look up a field by its camelCase name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One retained column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// camelCase name derived from the column name
    pub name: String,

    /// Column identifier as written in the DDL
    pub column_name: String,

    #[serde(rename = "type")]
    pub field_type: DomainType,

    pub nullable: bool,

    pub unique: bool,
}

/// Cardinality of a relation, seen from the source entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RelationType {
    /// Single-column foreign key from child to parent
    #[default]
    ManyToOne,
}

/// One resolved foreign key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub id: RelationId,

    #[serde(rename = "type")]
    pub relation_type: RelationType,

    /// Entity owning the foreign-key column
    pub source_entity_id: EntityId,

    /// Entity the foreign key points at
    pub target_entity_id: EntityId,

    /// camelCase name of the foreign-key column on the source entity
    pub source_field_name: String,

    pub foreign_key: ForeignKey,
}

/// Column-level details of a resolved foreign key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKey {
    pub column_name: String,
    pub nullable: bool,
    pub on_delete: ReferentialAction,
    pub on_update: ReferentialAction,
}

/// `ON DELETE` / `ON UPDATE` behaviour of a foreign key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferentialAction {
    #[default]
    NoAction,
    Cascade,
    SetNull,
    SetDefault,
    Restrict,
}

impl ReferentialAction {
    /// The action as it is spelled in SQL
    pub fn sql(self) -> &'static str {
        match self {
            ReferentialAction::NoAction => "NO ACTION",
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::SetDefault => "SET DEFAULT",
            ReferentialAction::Restrict => "RESTRICT",
        }
    }
}

impl fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql())
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
