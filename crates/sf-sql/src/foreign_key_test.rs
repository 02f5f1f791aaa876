use super::*;
use crate::ast::{DdlStatement, TableDef};
use crate::base_fields::BaseFieldFilter;
use crate::classifier::classify;
use crate::table::build_entity;
use crate::type_mapper::TypeMapper;

fn foreign_keys(sql: &str) -> Vec<ForeignKeyDecl> {
    match classify(sql).unwrap() {
        DdlStatement::ForeignKeys(decls) => decls,
        other => panic!("expected foreign keys, got {other:?}"),
    }
}

fn registry(tables: &[&str]) -> TableRegistry {
    let mut registry = TableRegistry::default();
    for sql in tables {
        let DdlStatement::CreateTable(def) = classify(sql).unwrap() else {
            panic!("expected CREATE TABLE: {sql}");
        };
        let entity = build_entity(&def, &TypeMapper::default(), &BaseFieldFilter::default());
        registry.register(def, entity).unwrap();
    }
    registry
}

#[test]
fn test_parse_alter_with_actions() {
    let decls = foreign_keys(
        "ALTER TABLE orders ADD CONSTRAINT fk_c FOREIGN KEY (customer_id) \
         REFERENCES customers(id) ON DELETE SET NULL ON UPDATE CASCADE",
    );
    let fk = &decls[0];
    assert_eq!(fk.table.as_str(), "orders");
    assert_eq!(fk.columns, vec!["customer_id"]);
    assert_eq!(fk.referenced_table.as_str(), "customers");
    assert_eq!(fk.referenced_columns, vec!["id"]);
    assert_eq!(fk.on_delete, ReferentialAction::SetNull);
    assert_eq!(fk.on_update, ReferentialAction::Cascade);
}

#[test]
fn test_parse_alter_defaults_to_no_action() {
    let decls = foreign_keys(
        "ALTER TABLE orders ADD CONSTRAINT fk_c FOREIGN KEY (customer_id) REFERENCES customers(id)",
    );
    assert_eq!(decls[0].on_delete, ReferentialAction::NoAction);
    assert_eq!(decls[0].on_update, ReferentialAction::NoAction);
}

#[test]
fn test_parse_alter_variants() {
    let decls = foreign_keys(
        "ALTER TABLE IF EXISTS ONLY public.orders ADD FOREIGN KEY (customer_id) \
         REFERENCES public.customers ON DELETE RESTRICT NOT VALID",
    );
    assert_eq!(decls[0].table.as_str(), "public.orders");
    assert_eq!(decls[0].constraint_name, None);
    assert!(decls[0].referenced_columns.is_empty());
    assert_eq!(decls[0].on_delete, ReferentialAction::Restrict);
}

#[test]
fn test_parse_alter_multiple_clauses() {
    let decls = foreign_keys(
        "ALTER TABLE order_items \
         ADD CONSTRAINT fk_o FOREIGN KEY (order_id) REFERENCES orders(id) ON DELETE NO ACTION, \
         ADD COLUMN extra INT, \
         ADD CONSTRAINT fk_bad FOREIGN KEY (x) REFERENCES products(id) ON DELETE EXPLODE, \
         ADD CONSTRAINT fk_p FOREIGN KEY (product_id) REFERENCES products(id) ON DELETE SET DEFAULT",
    );
    assert_eq!(decls.len(), 2);
    assert_eq!(decls[0].columns, vec!["order_id"]);
    assert_eq!(decls[1].columns, vec!["product_id"]);
    assert_eq!(decls[1].on_delete, ReferentialAction::SetDefault);
}

#[test]
fn test_resolve_single_relation() {
    let registry = registry(&[
        "CREATE TABLE customers (id SERIAL PRIMARY KEY, name TEXT)",
        "CREATE TABLE orders (id SERIAL PRIMARY KEY, customer_id INT NOT NULL)",
    ]);
    let decls = foreign_keys(
        "ALTER TABLE orders ADD CONSTRAINT fk FOREIGN KEY (customer_id) REFERENCES customers(id)",
    );

    let relations = resolve_relations(&decls, &registry);
    assert_eq!(relations.len(), 1);
    let relation = &relations[0];
    assert_eq!(relation.relation_type, RelationType::ManyToOne);
    assert_eq!(
        relation.source_entity_id,
        registry.get(&TableName::new("orders")).unwrap().entity.id
    );
    assert_eq!(
        relation.target_entity_id,
        registry.get(&TableName::new("customers")).unwrap().entity.id
    );
    assert_eq!(relation.source_field_name, "customerId");
    assert_eq!(relation.foreign_key.column_name, "customer_id");
    assert!(!relation.foreign_key.nullable);
}

#[test]
fn test_resolve_drops_unknown_tables() {
    let registry = registry(&["CREATE TABLE orders (customer_id INT)"]);
    let decls = foreign_keys(
        "ALTER TABLE orders ADD CONSTRAINT a FOREIGN KEY (customer_id) REFERENCES customers(id), \
         ADD CONSTRAINT b FOREIGN KEY (customer_id) REFERENCES orders(id)",
    );
    let mut missing_source = decls[1].clone();
    missing_source.table = TableName::new("invoices");

    let relations = resolve_relations(&[decls[0].clone(), missing_source], &registry);
    assert!(relations.is_empty());
}

#[test]
fn test_resolve_drops_composite_keys() {
    let registry = registry(&[
        "CREATE TABLE a (x INT, y INT)",
        "CREATE TABLE b (x INT, y INT, PRIMARY KEY (x, y))",
    ]);
    let decls = foreign_keys("ALTER TABLE a ADD FOREIGN KEY (x, y) REFERENCES b (x, y)");
    assert!(resolve_relations(&decls, &registry).is_empty());
}

#[test]
fn test_resolve_is_case_insensitive() {
    let registry = registry(&[
        "CREATE TABLE Customers (name TEXT)",
        "CREATE TABLE public.orders (customer_id INT)",
    ]);
    let decls =
        foreign_keys("ALTER TABLE ORDERS ADD FOREIGN KEY (CUSTOMER_ID) REFERENCES customers(id)");
    let relations = resolve_relations(&decls, &registry);
    assert_eq!(relations.len(), 1);
    assert_eq!(relations[0].source_field_name, "customerId");
    assert!(relations[0].foreign_key.nullable);
}

#[test]
fn test_resolve_unknown_column_is_nullable() {
    let registry = registry(&["CREATE TABLE a (name TEXT)", "CREATE TABLE b (name TEXT)"]);
    let decls = foreign_keys("ALTER TABLE a ADD FOREIGN KEY (b_id) REFERENCES b(id)");
    let relations = resolve_relations(&decls, &registry);
    assert!(relations[0].foreign_key.nullable);
}

#[test]
fn test_resolve_ids_are_distinct() {
    let registry = registry(&[
        "CREATE TABLE people (name TEXT)",
        "CREATE TABLE loans (lender_id INT, borrower_id INT)",
    ]);
    let decls = foreign_keys(
        "ALTER TABLE loans ADD FOREIGN KEY (lender_id) REFERENCES people(id), \
         ADD FOREIGN KEY (borrower_id) REFERENCES people(id)",
    );
    let relations = resolve_relations(&decls, &registry);
    assert_eq!(relations.len(), 2);
    assert_ne!(relations[0].id, relations[1].id);
}

#[test]
fn test_table_def_lookup_helper() {
    let def = TableDef::new(TableName::new("t"));
    assert!(def.column("missing").is_none());
}
