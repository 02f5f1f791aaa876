//! Shared serde helper functions.

/// Serde default function that returns `true`.
///
/// Used for boolean switches that default to enabled.
pub fn default_true() -> bool {
    true
}
