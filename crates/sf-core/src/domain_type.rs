//! Canonical, language-agnostic column types consumed by the code generator.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical domain type of an entity field.
///
/// Serialized as its label (`"String"`, `"LocalDateTime"`, ...), which is the
/// vocabulary the downstream generator understands regardless of its output
/// language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DomainType {
    #[default]
    String,
    Integer,
    Long,
    BigDecimal,
    Double,
    Boolean,
    LocalDate,
    LocalTime,
    LocalDateTime,
    #[serde(rename = "UUID")]
    Uuid,
}

impl DomainType {
    /// All domain types, in display order
    pub const ALL: [DomainType; 10] = [
        DomainType::String,
        DomainType::Integer,
        DomainType::Long,
        DomainType::BigDecimal,
        DomainType::Double,
        DomainType::Boolean,
        DomainType::LocalDate,
        DomainType::LocalTime,
        DomainType::LocalDateTime,
        DomainType::Uuid,
    ];

    /// The label used on the wire and in configuration files
    pub fn label(self) -> &'static str {
        match self {
            DomainType::String => "String",
            DomainType::Integer => "Integer",
            DomainType::Long => "Long",
            DomainType::BigDecimal => "BigDecimal",
            DomainType::Double => "Double",
            DomainType::Boolean => "Boolean",
            DomainType::LocalDate => "LocalDate",
            DomainType::LocalTime => "LocalTime",
            DomainType::LocalDateTime => "LocalDateTime",
            DomainType::Uuid => "UUID",
        }
    }
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DomainType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownDomainType {
                label: s.to_string(),
            })
    }
}
