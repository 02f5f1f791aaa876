//! Strongly-typed table name wrapper.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// SQL table identifier as written in the DDL (potentially schema-qualified
/// like "public.orders"), quotes removed.
///
/// The boundary between qualifier and table name is recorded when the name
/// is built from its parts, so a quoted identifier containing a dot
/// (`"odd.name"`) stays a single unqualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableName {
    qualified: String,
    /// Byte offset of the unqualified name within `qualified`
    name_start: usize,
}

impl TableName {
    /// Create a `TableName` from dotted text, treating everything up to the
    /// last `.` as the qualifier. Panics in debug builds if the name is empty.
    ///
    /// Prefer [`from_parts`](Self::from_parts) when the identifier parts are
    /// known.
    pub fn new(name: impl Into<String>) -> Self {
        let qualified = name.into();
        debug_assert!(!qualified.is_empty(), "TableName must not be empty");
        let name_start = qualified.rfind('.').map_or(0, |dot| dot + 1);
        Self {
            qualified,
            name_start,
        }
    }

    /// Build a name from parsed identifier parts (`["public", "orders"]`).
    ///
    /// The last part is the table name; `None` if it is missing or empty.
    pub fn from_parts<S: AsRef<str>>(parts: &[S]) -> Option<Self> {
        let (name, qualifier) = parts.split_last()?;
        let name = name.as_ref();
        if name.is_empty() {
            return None;
        }

        let mut qualified = String::new();
        for part in qualifier {
            qualified.push_str(part.as_ref());
            qualified.push('.');
        }
        let name_start = qualified.len();
        qualified.push_str(name);
        Some(Self {
            qualified,
            name_start,
        })
    }

    /// Return the underlying name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.qualified
    }

    /// The table name without any schema qualifier ("public.orders" -> "orders").
    pub fn unqualified(&self) -> &str {
        &self.qualified[self.name_start..]
    }

    /// Case-insensitive key used to match `REFERENCES` targets against
    /// declared tables; the schema qualifier is ignored.
    pub fn lookup_key(&self) -> String {
        self.unqualified().to_lowercase()
    }
}

impl TryFrom<String> for TableName {
    type Error = &'static str;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        if name.is_empty() {
            return Err("TableName must not be empty");
        }
        Ok(Self::new(name))
    }
}

impl From<TableName> for String {
    fn from(name: TableName) -> Self {
        name.qualified
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified)
    }
}

impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        &self.qualified
    }
}

impl Deref for TableName {
    type Target = str;
    fn deref(&self) -> &str {
        &self.qualified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unqualified() {
        assert_eq!(TableName::new("orders").unqualified(), "orders");
        assert_eq!(TableName::new("public.orders").unqualified(), "orders");
        assert_eq!(TableName::new("db.sales.orders").unqualified(), "orders");
    }

    #[test]
    fn test_from_parts_keeps_dotted_identifier() {
        let odd = TableName::from_parts(&["odd.name"]).unwrap();
        assert_eq!(odd.as_str(), "odd.name");
        assert_eq!(odd.unqualified(), "odd.name");
        assert_eq!(odd.lookup_key(), "odd.name");

        let qualified = TableName::from_parts(&["public", "odd.name"]).unwrap();
        assert_eq!(qualified.as_str(), "public.odd.name");
        assert_eq!(qualified.unqualified(), "odd.name");
    }

    #[test]
    fn test_from_parts_rejects_empty() {
        assert!(TableName::from_parts::<&str>(&[]).is_none());
        assert!(TableName::from_parts(&["public", ""]).is_none());
    }

    #[test]
    fn test_lookup_key_ignores_case_and_schema() {
        assert_eq!(TableName::new("Public.Orders").lookup_key(), "orders");
        assert_eq!(
            TableName::new("ORDERS").lookup_key(),
            TableName::new("orders").lookup_key()
        );
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let name = TableName::from_parts(&["sales", "user_profiles"]).unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r#""sales.user_profiles""#);

        let back: TableName = serde_json::from_str(&json).unwrap();
        assert_eq!(back.unqualified(), "user_profiles");

        let empty: Result<TableName, _> = serde_json::from_str(r#""""#);
        assert!(empty.is_err());
    }
}
