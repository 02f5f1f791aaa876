//! Deterministic identifiers for parsed entities and relations.
//!
//! Ids are UUID v5 values, so parsing the same DDL twice yields the same ids
//! without any global counter.

use crate::newtype_string::define_opaque_id;
use uuid::Uuid;

/// Namespace under which every Schemaforge id is derived.
const ID_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2d3a_9b84_4e57_a1f0_53c8_e2d7_b916);

define_opaque_id! {
    /// Opaque identifier of an [`Entity`](crate::model::Entity), unique within one parse.
    pub struct EntityId;
}

define_opaque_id! {
    /// Opaque identifier of a [`Relation`](crate::model::Relation), unique within one parse.
    pub struct RelationId;
}

impl EntityId {
    /// Derive the id of the entity built from the table with the given lookup key.
    pub fn for_table(table_key: &str) -> Self {
        Self(derive(&format!("entity:{table_key}")))
    }
}

impl RelationId {
    /// Derive the id of the `ordinal`-th relation between two entities.
    ///
    /// The ordinal keeps ids distinct when the same column is declared as a
    /// foreign key more than once.
    pub fn for_relation(
        ordinal: usize,
        source: &EntityId,
        column: &str,
        target: &EntityId,
    ) -> Self {
        Self(derive(&format!(
            "relation:{ordinal}:{source}.{column}->{target}"
        )))
    }
}

fn derive(key: &str) -> String {
    Uuid::new_v5(&ID_NAMESPACE, key.as_bytes())
        .hyphenated()
        .to_string()
}
