//! Error types for sf-sql
//!
//! These never escape [`parse_sql`](crate::parse_sql): a statement that fails
//! with one of them is logged and skipped.

use thiserror::Error;

/// Per-statement DDL parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SqlError {
    /// Tokenizer rejected the statement (S001)
    #[error("[S001] Failed to tokenize statement: {0}")]
    Tokenize(String),

    /// Unexpected token (S002)
    #[error("[S002] Expected {expected}, found '{found}'")]
    UnexpectedToken { expected: String, found: String },

    /// Statement ended early (S003)
    #[error("[S003] Expected {expected}, found end of statement")]
    UnexpectedEnd { expected: String },

    /// Parentheses never closed (S004)
    #[error("[S004] Unbalanced parentheses")]
    UnbalancedParens,
}

/// Result type alias for SqlError
pub type SqlResult<T> = Result<T, SqlError>;
