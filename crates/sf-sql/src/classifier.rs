//! Statement classification
//!
//! Routes `CREATE TABLE` to the table parser and `ALTER TABLE` to the
//! foreign-key parser; every other statement is ignored.

use crate::ast::DdlStatement;
use crate::error::SqlResult;
use crate::foreign_key::parse_alter_table;
use crate::table::parse_create_table;
use crate::tokens::TokenCursor;

/// Classify and parse one preprocessed statement.
///
/// Returns `Ok(DdlStatement::Ignored)` for statements outside the supported
/// DDL subset and an error only for malformed `CREATE TABLE`/`ALTER TABLE`.
pub fn classify(statement: &str) -> SqlResult<DdlStatement> {
    let mut cursor = TokenCursor::tokenize(statement)?;

    if cursor.parse_keyword("CREATE") {
        let _ = cursor.parse_keyword("GLOBAL") || cursor.parse_keyword("LOCAL");
        let _ = cursor.parse_keyword("TEMPORARY")
            || cursor.parse_keyword("TEMP")
            || cursor.parse_keyword("UNLOGGED");
        if !cursor.parse_keyword("TABLE") {
            return Ok(DdlStatement::Ignored);
        }
        return parse_create_table(&mut cursor).map(DdlStatement::CreateTable);
    }

    if cursor.parse_keywords(&["ALTER", "TABLE"]) {
        let decls = parse_alter_table(&mut cursor)?;
        if decls.is_empty() {
            return Ok(DdlStatement::Ignored);
        }
        return Ok(DdlStatement::ForeignKeys(decls));
    }

    Ok(DdlStatement::Ignored)
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;
