//! `CREATE TABLE` parsing and entity building

use crate::ast::{ColumnDef, ForeignKeyDecl, TableDef};
use crate::base_fields::BaseFieldFilter;
use crate::error::SqlResult;
use crate::foreign_key::parse_references;
use crate::naming::{entity_name, field_name};
use crate::tokens::TokenCursor;
use crate::type_mapper::TypeMapper;
use sf_core::{Entity, EntityId, Field, TableName};
use sqlparser::tokenizer::Token;

/// Keywords that open a table-level constraint instead of a column.
const TABLE_CONSTRAINT_START: &[&str] = &[
    "CONSTRAINT",
    "PRIMARY",
    "FOREIGN",
    "UNIQUE",
    "CHECK",
    "EXCLUDE",
    "LIKE",
];

/// Keywords that open an inline column constraint; they end a type or a
/// `DEFAULT` expression.
const COLUMN_CONSTRAINT_START: &[&str] = &[
    "CONSTRAINT",
    "PRIMARY",
    "NOT",
    "NULL",
    "UNIQUE",
    "REFERENCES",
    "DEFAULT",
    "CHECK",
    "COLLATE",
    "GENERATED",
];

enum TableConstraint {
    PrimaryKey(Vec<String>),
    Unique(Vec<String>),
    ForeignKey(ForeignKeyDecl),
    Other,
}

/// Parse the remainder of `CREATE [TEMP] TABLE` (after the `TABLE` keyword).
///
/// A column definition that cannot be parsed is skipped on its own; only a
/// missing name or an unbalanced column list fails the whole statement.
pub(crate) fn parse_create_table(cursor: &mut TokenCursor) -> SqlResult<TableDef> {
    let _ = cursor.parse_keywords(&["IF", "NOT", "EXISTS"]);
    let name = cursor.parse_table_name()?;
    let elements = cursor.take_parenthesized()?;

    let mut def = TableDef::new(name);
    let mut constraints = Vec::new();

    for element in elements {
        let mut element = TokenCursor::from_tokens(element);
        if element.peek_any_keyword(TABLE_CONSTRAINT_START) {
            match parse_table_constraint(&mut element, &def.name) {
                Ok(constraint) => constraints.push(constraint),
                Err(e) => log::debug!("Skipping constraint in table {}: {}", def.name, e),
            }
            continue;
        }

        match parse_column(&mut element, &def.name) {
            Ok((column, reference)) => {
                def.columns.push(column);
                def.foreign_keys.extend(reference);
            }
            Err(e) => log::debug!("Skipping column in table {}: {}", def.name, e),
        }
    }

    for constraint in constraints {
        apply_table_constraint(&mut def, constraint);
    }

    Ok(def)
}

fn parse_column(
    cursor: &mut TokenCursor,
    table: &TableName,
) -> SqlResult<(ColumnDef, Option<ForeignKeyDecl>)> {
    let mut column = ColumnDef {
        name: cursor.parse_identifier()?,
        data_type: parse_data_type(cursor)?,
        ..ColumnDef::default()
    };
    let mut reference = None;
    let mut constraint_name = None;

    while !cursor.is_at_end() {
        if cursor.parse_keywords(&["PRIMARY", "KEY"]) {
            column.primary_key = true;
        } else if cursor.parse_keywords(&["NOT", "NULL"]) {
            column.not_null = true;
        } else if cursor.parse_keyword("NULL") {
            column.not_null = false;
        } else if cursor.parse_keyword("UNIQUE") {
            column.unique = true;
        } else if cursor.parse_keyword("CONSTRAINT") {
            constraint_name = Some(cursor.parse_identifier()?);
        } else if cursor.parse_keyword("REFERENCES") {
            reference = Some(parse_references(
                cursor,
                table.clone(),
                vec![column.name.clone()],
                constraint_name.take(),
            )?);
        } else if cursor.parse_keyword("DEFAULT") || cursor.parse_keyword("GENERATED") {
            skip_expression(cursor)?;
        } else if cursor.parse_keyword("CHECK") {
            cursor.skip_parenthesized()?;
        } else if cursor.parse_keyword("COLLATE") {
            cursor.parse_object_name()?;
        } else {
            cursor.advance();
        }
    }

    Ok((column, reference))
}

/// Read the type keywords of a column, dropping size/precision and array
/// suffixes: `numeric(10,2)` -> `NUMERIC`,
/// `timestamp(3) with time zone` -> `TIMESTAMP WITH TIME ZONE`.
fn parse_data_type(cursor: &mut TokenCursor) -> SqlResult<String> {
    if cursor.peek_any_keyword(COLUMN_CONSTRAINT_START) {
        return Ok(String::new());
    }
    let Some(Token::Word(word)) = cursor.peek() else {
        return Ok(String::new());
    };
    let mut first = word.value.to_uppercase();
    cursor.advance();

    // schema-qualified types such as `public.citext`
    while cursor.consume(&Token::Period) {
        first = cursor.parse_identifier()?.to_uppercase();
    }

    let mut words = vec![first];
    match words[0].as_str() {
        "DOUBLE" => {
            if cursor.parse_keyword("PRECISION") {
                words.push("PRECISION".to_string());
            }
        }
        "CHARACTER" | "CHAR" | "BIT" => {
            if cursor.parse_keyword("VARYING") {
                words.push("VARYING".to_string());
            }
        }
        _ => {}
    }

    cursor.skip_parenthesized()?;

    if matches!(words[0].as_str(), "TIME" | "TIMESTAMP") {
        if cursor.parse_keywords(&["WITH", "TIME", "ZONE"]) {
            words.push("WITH TIME ZONE".to_string());
        } else if cursor.parse_keywords(&["WITHOUT", "TIME", "ZONE"]) {
            words.push("WITHOUT TIME ZONE".to_string());
        }
    }

    while cursor.consume(&Token::LBracket) {
        while let Some(token) = cursor.advance() {
            if token == Token::RBracket {
                break;
            }
        }
    }
    let _ = cursor.parse_keyword("ARRAY");

    Ok(words.join(" "))
}

/// Skip a `DEFAULT`/`GENERATED` expression up to the next column constraint.
fn skip_expression(cursor: &mut TokenCursor) -> SqlResult<()> {
    while !cursor.is_at_end() && !cursor.peek_any_keyword(COLUMN_CONSTRAINT_START) {
        if cursor.peek() == Some(&Token::LParen) {
            cursor.skip_parenthesized()?;
        } else {
            cursor.advance();
        }
    }
    Ok(())
}

fn parse_table_constraint(
    cursor: &mut TokenCursor,
    table: &TableName,
) -> SqlResult<TableConstraint> {
    let constraint_name = if cursor.parse_keyword("CONSTRAINT") {
        Some(cursor.parse_identifier()?)
    } else {
        None
    };

    if cursor.parse_keywords(&["PRIMARY", "KEY"]) {
        return Ok(TableConstraint::PrimaryKey(cursor.parse_identifier_list()?));
    }
    if cursor.parse_keyword("UNIQUE") {
        let _ = cursor.parse_keywords(&["NULLS", "NOT", "DISTINCT"])
            || cursor.parse_keywords(&["NULLS", "DISTINCT"]);
        return Ok(TableConstraint::Unique(cursor.parse_identifier_list()?));
    }
    if cursor.parse_keywords(&["FOREIGN", "KEY"]) {
        let columns = cursor.parse_identifier_list()?;
        cursor.expect_keyword("REFERENCES")?;
        let decl = parse_references(cursor, table.clone(), columns, constraint_name)?;
        return Ok(TableConstraint::ForeignKey(decl));
    }

    Ok(TableConstraint::Other)
}

fn apply_table_constraint(def: &mut TableDef, constraint: TableConstraint) {
    match constraint {
        TableConstraint::PrimaryKey(columns) if columns.len() == 1 => {
            if let Some(column) = def.column_mut(&columns[0]) {
                column.primary_key = true;
            }
        }
        TableConstraint::PrimaryKey(columns) => {
            for name in &columns {
                if let Some(column) = def.column_mut(name) {
                    column.not_null = true;
                }
            }
        }
        TableConstraint::Unique(columns) => {
            if let [name] = columns.as_slice() {
                if let Some(column) = def.column_mut(name) {
                    column.unique = true;
                }
            }
        }
        TableConstraint::ForeignKey(decl) => def.foreign_keys.push(decl),
        TableConstraint::Other => {}
    }
}

/// Build the entity for a parsed table.
///
/// Base/audit columns are dropped first; a column whose field name collides
/// with an earlier one is skipped.
pub(crate) fn build_entity(
    def: &TableDef,
    types: &TypeMapper,
    base_fields: &BaseFieldFilter,
) -> Entity {
    let mut fields: Vec<Field> = Vec::with_capacity(def.columns.len());

    for column in &def.columns {
        if base_fields.excludes(&column.name) {
            continue;
        }

        let name = field_name(&column.name);
        if fields.iter().any(|f| f.name == name) {
            log::warn!(
                "Skipping column {}.{}: field '{}' already defined",
                def.name,
                column.name,
                name
            );
            continue;
        }

        fields.push(Field {
            name,
            column_name: column.name.clone(),
            field_type: types.map(&column.data_type),
            nullable: column.is_nullable(),
            unique: column.is_unique(),
        });
    }

    Entity {
        id: EntityId::for_table(&def.name.lookup_key()),
        name: entity_name(def.name.unqualified()),
        table_name: def.name.clone(),
        fields,
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
