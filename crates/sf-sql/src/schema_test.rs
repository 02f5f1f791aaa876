use super::*;
use sf_core::{DomainType, ReferentialAction};

#[test]
fn test_parse_empty() {
    assert!(parse_sql("").is_empty());
    assert!(parse_sql("   \n -- just a comment\n /* and another */").is_empty());
}

#[test]
fn test_forward_reference_resolves() {
    let model = parse_sql(
        "ALTER TABLE orders ADD CONSTRAINT fk FOREIGN KEY (customer_id) REFERENCES customers(id);
         CREATE TABLE orders (id SERIAL PRIMARY KEY, customer_id INT);
         CREATE TABLE customers (id SERIAL PRIMARY KEY, name TEXT);",
    );
    assert_eq!(model.entities.len(), 2);
    assert_eq!(model.relations.len(), 1);
}

#[test]
fn test_duplicate_table_keeps_first() {
    let model = parse_sql(
        "CREATE TABLE users (name TEXT);
         CREATE TABLE USERS (email TEXT);",
    );
    assert_eq!(model.entities.len(), 1);
    assert!(model.entities[0].field("name").is_some());
}

#[test]
fn test_entity_name_collision_keeps_first() {
    let model = parse_sql(
        "CREATE TABLE user (name TEXT);
         CREATE TABLE users (email TEXT);",
    );
    assert_eq!(model.entities.len(), 1);
    assert_eq!(model.entities[0].table_name.as_str(), "user");
}

#[test]
fn test_malformed_statement_does_not_abort_others() {
    let model = parse_sql(
        "CREATE TABLE t AS SELECT 1;
         CREATE TABLE ok (name TEXT);
         CREATE TABLE broken (a INT",
    );
    assert_eq!(model.entities.len(), 1);
    assert_eq!(model.entities[0].name, "Ok");
}

#[test]
fn test_inline_foreign_keys_can_be_disabled() {
    let sql = "CREATE TABLE customers (name TEXT);
               CREATE TABLE orders (customer_id INT REFERENCES customers(id) ON DELETE CASCADE);";

    let enabled = parse_sql(sql);
    assert_eq!(enabled.relations.len(), 1);
    assert_eq!(
        enabled.relations[0].foreign_key.on_delete,
        ReferentialAction::Cascade
    );

    let config = ParserConfig {
        inline_foreign_keys: false,
        ..ParserConfig::default()
    };
    let disabled = SchemaParser::new(config).parse(sql);
    assert!(disabled.relations.is_empty());
    assert_eq!(disabled.entities.len(), 2);
}

#[test]
fn test_custom_denylist() {
    let parser = SchemaParser::new(ParserConfig::default().with_excluded_columns(["tenant_id"]));
    let model = parser.parse("CREATE TABLE users (id UUID PRIMARY KEY, tenant_id INT, version INT)");
    let names: Vec<&str> = model.entities[0]
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["id", "version"]);
    let id = model.entities[0].field("id").unwrap();
    assert_eq!(id.field_type, DomainType::Uuid);
    assert!(id.unique);
    assert!(!id.nullable);
}

#[test]
fn test_type_overrides_applied() {
    let parser =
        SchemaParser::new(ParserConfig::default().with_type_override("MONEY", DomainType::BigDecimal));
    let model = parser.parse("CREATE TABLE payments (amount MONEY NOT NULL)");
    assert_eq!(
        model.entities[0].field("amount").unwrap().field_type,
        DomainType::BigDecimal
    );
    assert_eq!(parser.config().type_overrides.len(), 1);
}

#[test]
fn test_filtered_fk_column_keeps_nullability() {
    let parser = SchemaParser::new(ParserConfig::default().with_excluded_columns(["owner_id"]));
    let model = parser.parse(
        "CREATE TABLE owners (name TEXT);
         CREATE TABLE pets (owner_id INT NOT NULL REFERENCES owners(id));",
    );
    assert!(model.entities[1].fields.is_empty());
    assert_eq!(model.relations.len(), 1);
    assert!(!model.relations[0].foreign_key.nullable);
}

#[test]
fn test_parser_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SchemaParser>();

    let parser = std::sync::Arc::new(SchemaParser::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let parser = std::sync::Arc::clone(&parser);
            std::thread::spawn(move || parser.parse("CREATE TABLE items (label TEXT)"))
        })
        .collect();
    let models: Vec<ErModel> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(models.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_foreign_key_declared_inline_and_altered_yields_one_relation() {
    let model = parse_sql(
        "CREATE TABLE customers (id BIGINT PRIMARY KEY);
         CREATE TABLE orders (id BIGINT PRIMARY KEY, customer_id BIGINT REFERENCES customers(id) ON DELETE CASCADE);
         ALTER TABLE orders ADD CONSTRAINT fk_c FOREIGN KEY (customer_id) REFERENCES customers(id);",
    );
    assert_eq!(model.relations.len(), 1);
    assert_eq!(model.relations[0].source_field_name, "customerId");
    assert_eq!(
        model.relations[0].foreign_key.on_delete,
        ReferentialAction::Cascade
    );
}

#[test]
fn test_same_column_to_different_targets_is_kept() {
    let model = parse_sql(
        "CREATE TABLE people (name TEXT);
         CREATE TABLE companies (name TEXT);
         CREATE TABLE contracts (party_id INT);
         ALTER TABLE contracts ADD FOREIGN KEY (party_id) REFERENCES people(id),
             ADD FOREIGN KEY (PARTY_ID) REFERENCES people(id),
             ADD FOREIGN KEY (party_id) REFERENCES companies(id);",
    );
    assert_eq!(model.relations.len(), 2);
    assert_ne!(
        model.relations[0].target_entity_id,
        model.relations[1].target_entity_id
    );
}

#[test]
fn test_quoted_table_name_with_dot_is_not_a_qualifier() {
    let model = parse_sql(
        r#"CREATE TABLE "odd.names" (a INT);
           CREATE TABLE names (b INT);"#,
    );
    assert_eq!(model.entities.len(), 2);
    assert_eq!(model.entities[0].table_name.as_str(), "odd.names");
    assert_eq!(model.entities[0].name, "Odd.name");
    assert_eq!(model.entities[1].name, "Name");
    assert_ne!(model.entities[0].id, model.entities[1].id);
}
