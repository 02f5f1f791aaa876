//! sf-core - Core library for Schemaforge
//!
//! This crate provides the entity-relationship model produced by the DDL
//! parser, the canonical domain types, identifier newtypes, and the parser
//! configuration shared across all Schemaforge components.

pub mod config;
pub mod domain_type;
pub mod error;
pub mod ids;
pub mod model;
mod newtype_string;
pub(crate) mod serde_helpers;
pub mod table_name;

pub use config::ParserConfig;
pub use domain_type::DomainType;
pub use error::{CoreError, CoreResult};
pub use ids::{EntityId, RelationId};
pub use model::{Entity, ErModel, Field, ForeignKey, ReferentialAction, Relation, RelationType};
pub use table_name::TableName;
