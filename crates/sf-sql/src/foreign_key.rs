//! Foreign-key clauses and their second-pass resolution into relations

use crate::ast::ForeignKeyDecl;
use crate::error::SqlResult;
use crate::naming::field_name;
use crate::registry::TableRegistry;
use crate::tokens::TokenCursor;
use sf_core::{ForeignKey, ReferentialAction, Relation, RelationId, RelationType, TableName};
use sqlparser::tokenizer::Token;
use std::collections::HashSet;

/// Parse the remainder of `ALTER TABLE` (after the two keywords).
///
/// Every `ADD [CONSTRAINT n] FOREIGN KEY (...) REFERENCES ...` clause yields
/// one declaration; other clauses are ignored and a malformed clause is
/// skipped without affecting its siblings.
pub(crate) fn parse_alter_table(cursor: &mut TokenCursor) -> SqlResult<Vec<ForeignKeyDecl>> {
    let _ = cursor.parse_keywords(&["IF", "EXISTS"]);
    let _ = cursor.parse_keyword("ONLY");
    let table = cursor.parse_table_name()?;

    let mut decls = Vec::new();
    for clause in cursor.take_rest_split_on_commas() {
        let mut clause = TokenCursor::from_tokens(clause);
        match parse_add_foreign_key(&mut clause, &table) {
            Ok(Some(decl)) => decls.push(decl),
            Ok(None) => {}
            Err(e) => log::debug!("Skipping ALTER TABLE {} clause: {}", table, e),
        }
    }

    Ok(decls)
}

fn parse_add_foreign_key(
    clause: &mut TokenCursor,
    table: &TableName,
) -> SqlResult<Option<ForeignKeyDecl>> {
    if !clause.parse_keyword("ADD") {
        return Ok(None);
    }
    let constraint_name = if clause.parse_keyword("CONSTRAINT") {
        Some(clause.parse_identifier()?)
    } else {
        None
    };
    if !clause.parse_keywords(&["FOREIGN", "KEY"]) {
        return Ok(None);
    }

    let columns = clause.parse_identifier_list()?;
    clause.expect_keyword("REFERENCES")?;
    parse_references(clause, table.clone(), columns, constraint_name).map(Some)
}

/// Parse what follows `REFERENCES`:
/// `table [(cols)] [ON DELETE a] [ON UPDATE a] [MATCH ..] [DEFERRABLE ..]`.
pub(crate) fn parse_references(
    cursor: &mut TokenCursor,
    table: TableName,
    columns: Vec<String>,
    constraint_name: Option<String>,
) -> SqlResult<ForeignKeyDecl> {
    let referenced_table = cursor.parse_table_name()?;
    let referenced_columns = if cursor.peek() == Some(&Token::LParen) {
        cursor.parse_identifier_list()?
    } else {
        Vec::new()
    };

    let mut on_delete = ReferentialAction::NoAction;
    let mut on_update = ReferentialAction::NoAction;
    loop {
        if cursor.parse_keywords(&["ON", "DELETE"]) {
            on_delete = parse_referential_action(cursor)?;
        } else if cursor.parse_keywords(&["ON", "UPDATE"]) {
            on_update = parse_referential_action(cursor)?;
        } else if cursor.parse_keyword("MATCH") || cursor.parse_keyword("INITIALLY") {
            cursor.advance();
        } else if !(cursor.parse_keywords(&["NOT", "DEFERRABLE"])
            || cursor.parse_keyword("DEFERRABLE")
            || cursor.parse_keywords(&["NOT", "VALID"]))
        {
            break;
        }
    }

    Ok(ForeignKeyDecl {
        constraint_name,
        table,
        columns,
        referenced_table,
        referenced_columns,
        on_delete,
        on_update,
    })
}

fn parse_referential_action(cursor: &mut TokenCursor) -> SqlResult<ReferentialAction> {
    let action = if cursor.parse_keyword("CASCADE") {
        ReferentialAction::Cascade
    } else if cursor.parse_keyword("RESTRICT") {
        ReferentialAction::Restrict
    } else if cursor.parse_keywords(&["NO", "ACTION"]) {
        ReferentialAction::NoAction
    } else if cursor.parse_keywords(&["SET", "NULL"]) {
        ReferentialAction::SetNull
    } else if cursor.parse_keywords(&["SET", "DEFAULT"]) {
        ReferentialAction::SetDefault
    } else {
        return Err(cursor.unexpected("referential action"));
    };

    // PostgreSQL 15 allows `SET NULL (col, ...)`
    cursor.skip_parenthesized()?;
    Ok(action)
}

/// Second pass: turn declarations into `ManyToOne` relations.
///
/// A declaration is dropped when either table was not parsed in the same
/// input, when it spans more than one column, or when the same column was
/// already resolved to the same target (declared both inline and by
/// `ALTER TABLE`); the first declaration wins.
pub(crate) fn resolve_relations(
    decls: &[ForeignKeyDecl],
    registry: &TableRegistry,
) -> Vec<Relation> {
    let mut relations = Vec::new();
    let mut resolved: HashSet<(String, String, String)> = HashSet::new();

    for decl in decls {
        let [column] = decl.columns.as_slice() else {
            log::debug!(
                "Dropping composite foreign key on {} ({})",
                decl.table,
                decl.columns.join(", ")
            );
            continue;
        };
        let Some(source) = registry.get(&decl.table) else {
            log::debug!("Dropping foreign key: table '{}' was not created", decl.table);
            continue;
        };
        let Some(target) = registry.get(&decl.referenced_table) else {
            log::debug!(
                "Dropping foreign key {}.{}: referenced table '{}' was not created",
                decl.table,
                column,
                decl.referenced_table
            );
            continue;
        };

        // prefer the spelling from CREATE TABLE over the one in the FK clause
        let declared = source.def.column(column);
        let column = declared.map_or(column.as_str(), |c| c.name.as_str());
        let nullable = declared.map_or(true, |c| c.is_nullable());

        let key = (
            decl.table.lookup_key(),
            column.to_lowercase(),
            decl.referenced_table.lookup_key(),
        );
        if !resolved.insert(key) {
            log::debug!(
                "Skipping duplicate foreign key {}.{} -> {}",
                decl.table,
                column,
                decl.referenced_table
            );
            continue;
        }

        relations.push(Relation {
            id: RelationId::for_relation(
                relations.len(),
                &source.entity.id,
                column,
                &target.entity.id,
            ),
            relation_type: RelationType::ManyToOne,
            source_entity_id: source.entity.id.clone(),
            target_entity_id: target.entity.id.clone(),
            source_field_name: field_name(column),
            foreign_key: ForeignKey {
                column_name: column.to_string(),
                nullable,
                on_delete: decl.on_delete,
                on_update: decl.on_update,
            },
        });
    }

    relations
}

#[cfg(test)]
#[path = "foreign_key_test.rs"]
mod tests;
