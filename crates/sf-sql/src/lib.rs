//! sf-sql - DDL parsing layer for Schemaforge
//!
//! This crate turns `CREATE TABLE` / `ALTER TABLE ... FOREIGN KEY` text into
//! the entity-relationship model of `sf-core`. Statements are cleaned and
//! split here, tokenized with sqlparser-rs, and read by a small
//! recursive-descent parser; foreign keys are resolved in a second pass.

pub mod ast;
pub mod base_fields;
pub mod classifier;
pub mod error;
mod foreign_key;
pub mod naming;
pub mod preprocess;
mod registry;
pub mod schema;
mod table;
mod tokens;
pub mod type_mapper;

pub use ast::{ColumnDef, DdlStatement, ForeignKeyDecl, TableDef};
pub use base_fields::BaseFieldFilter;
pub use classifier::classify;
pub use error::{SqlError, SqlResult};
pub use naming::{entity_name, field_name};
pub use schema::{parse_sql, SchemaParser};
pub use type_mapper::{map_sql_type, TypeMapper, BUILTIN_TYPE_MAP};
