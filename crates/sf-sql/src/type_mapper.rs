//! SQL type keyword to canonical domain type

use sf_core::{DomainType, ParserConfig};
use std::collections::HashMap;

/// Built-in SQL type keywords and the domain type each maps to.
pub const BUILTIN_TYPE_MAP: &[(&str, DomainType)] = &[
    ("VARCHAR", DomainType::String),
    ("CHAR", DomainType::String),
    ("TEXT", DomainType::String),
    ("CHARACTER", DomainType::String),
    ("CITEXT", DomainType::String),
    ("INTEGER", DomainType::Integer),
    ("INT", DomainType::Integer),
    ("SERIAL", DomainType::Integer),
    ("INT4", DomainType::Integer),
    ("SMALLINT", DomainType::Integer),
    ("INT2", DomainType::Integer),
    ("SMALLSERIAL", DomainType::Integer),
    ("BIGINT", DomainType::Long),
    ("BIGSERIAL", DomainType::Long),
    ("INT8", DomainType::Long),
    ("DECIMAL", DomainType::BigDecimal),
    ("NUMERIC", DomainType::BigDecimal),
    ("REAL", DomainType::Double),
    ("FLOAT", DomainType::Double),
    ("FLOAT4", DomainType::Double),
    ("FLOAT8", DomainType::Double),
    ("DOUBLE", DomainType::Double),
    ("BOOLEAN", DomainType::Boolean),
    ("BOOL", DomainType::Boolean),
    ("DATE", DomainType::LocalDate),
    ("TIME", DomainType::LocalTime),
    ("TIMETZ", DomainType::LocalTime),
    ("TIMESTAMP", DomainType::LocalDateTime),
    ("TIMESTAMPTZ", DomainType::LocalDateTime),
    ("UUID", DomainType::Uuid),
];

/// Map a SQL type to its domain type using only the built-in table.
///
/// Unknown types map to [`DomainType::String`].
pub fn map_sql_type(sql_type: &str) -> DomainType {
    let normalized = normalize_type(sql_type);
    builtin(&normalized)
        .or_else(|| first_word(&normalized).and_then(builtin))
        .unwrap_or_default()
}

fn builtin(keyword: &str) -> Option<DomainType> {
    BUILTIN_TYPE_MAP
        .iter()
        .find(|(kw, _)| *kw == keyword)
        .map(|(_, ty)| *ty)
}

/// Type mapper with configured overrides layered over the built-in table
#[derive(Debug, Clone, Default)]
pub struct TypeMapper {
    overrides: HashMap<String, DomainType>,
}

impl TypeMapper {
    pub fn from_config(config: &ParserConfig) -> Self {
        let overrides = config
            .type_overrides
            .iter()
            .map(|(kw, ty)| (normalize_type(kw), *ty))
            .collect();
        Self { overrides }
    }

    /// Map a SQL type, e.g. `VARCHAR(100)` or `timestamp with time zone`.
    ///
    /// Overrides win over built-ins; the full type text is tried before its
    /// first keyword.
    pub fn map(&self, sql_type: &str) -> DomainType {
        let normalized = normalize_type(sql_type);
        let first = first_word(&normalized);

        self.overrides
            .get(&normalized)
            .or_else(|| first.and_then(|kw| self.overrides.get(kw)))
            .copied()
            .or_else(|| builtin(&normalized))
            .or_else(|| first.and_then(builtin))
            .unwrap_or_default()
    }
}

/// Uppercase, drop `(...)` parameters and `[]` suffixes, collapse spaces.
fn normalize_type(sql_type: &str) -> String {
    let mut out = String::with_capacity(sql_type.len());
    let mut depth = 0usize;
    for ch in sql_type.chars() {
        match ch {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(ch.to_ascii_uppercase()),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn first_word(normalized: &str) -> Option<&str> {
    normalized.split(' ').next().filter(|w| !w.is_empty())
}

#[cfg(test)]
#[path = "type_mapper_test.rs"]
mod tests;
