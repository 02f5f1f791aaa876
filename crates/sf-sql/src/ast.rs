//! Intermediate DDL representation between tokenizing and model building

use sf_core::{ReferentialAction, TableName};

/// A statement after classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DdlStatement {
    /// `CREATE TABLE`
    CreateTable(TableDef),
    /// `ALTER TABLE ... ADD [CONSTRAINT n] FOREIGN KEY ...`, one entry per clause
    ForeignKeys(Vec<ForeignKeyDecl>),
    /// Anything else (queries, DML, unsupported DDL)
    Ignored,
}

/// One `CREATE TABLE` statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDef {
    pub name: TableName,

    /// Every column in declaration order, before base-field filtering
    pub columns: Vec<ColumnDef>,

    /// `REFERENCES` declared inside the table body
    pub foreign_keys: Vec<ForeignKeyDecl>,
}

impl TableDef {
    pub fn new(name: TableName) -> Self {
        Self {
            name,
            columns: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    /// Look up a column by name, ignoring case
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub(crate) fn column_mut(&mut self, name: &str) -> Option<&mut ColumnDef> {
        self.columns
            .iter_mut()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// One column definition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnDef {
    pub name: String,

    /// Uppercased type keywords without parameters, e.g. `VARCHAR` or
    /// `TIMESTAMP WITH TIME ZONE`; empty when the column has no type
    pub data_type: String,

    pub primary_key: bool,
    pub not_null: bool,
    pub unique: bool,
}

impl ColumnDef {
    pub fn is_nullable(&self) -> bool {
        !(self.not_null || self.primary_key)
    }

    pub fn is_unique(&self) -> bool {
        self.unique || self.primary_key
    }
}

/// A foreign key as declared, before the referenced tables are resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyDecl {
    pub constraint_name: Option<String>,

    /// Table owning the foreign-key columns
    pub table: TableName,
    pub columns: Vec<String>,

    pub referenced_table: TableName,

    /// Empty when the clause relies on the referenced primary key
    pub referenced_columns: Vec<String>,

    pub on_delete: ReferentialAction,
    pub on_update: ReferentialAction,
}
