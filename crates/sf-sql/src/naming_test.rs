use super::*;

#[test]
fn test_entity_name_singularizes_last_word() {
    assert_eq!(entity_name("products"), "Product");
    assert_eq!(entity_name("category"), "Category");
    assert_eq!(entity_name("user_profiles"), "UserProfile");
    assert_eq!(entity_name("orders_items"), "OrdersItem");
}

#[test]
fn test_entity_name_case_handling() {
    assert_eq!(entity_name("USER_PROFILES"), "UserProfile");
    assert_eq!(entity_name("UserProfiles"), "UserProfile");
    assert_eq!(entity_name("Customer"), "Customer");
}

#[test]
fn test_entity_name_of_unqualified_table() {
    let table = sf_core::TableName::new("public.order_lines");
    assert_eq!(entity_name(table.unqualified()), "OrderLine");
}

#[test]
fn test_entity_name_assigns_owned_singular() {
    let words = ["orders", "order_items", "address", "s"];
    let names: Vec<String> = words.iter().map(|w| entity_name(w)).collect();
    assert_eq!(names, vec!["Order", "OrderItem", "Address", "S"]);
}

#[test]
fn test_entity_name_odd_underscores() {
    assert_eq!(entity_name("__audit__logs_"), "AuditLog");
    assert_eq!(entity_name("_"), "_");
}

#[test]
fn test_field_name_camel_case() {
    assert_eq!(field_name("first_name"), "firstName");
    assert_eq!(field_name("customer_id"), "customerId");
    assert_eq!(field_name("email"), "email");
    assert_eq!(field_name("FIRST_NAME"), "firstName");
    assert_eq!(field_name("firstName"), "firstName");
    assert_eq!(field_name("ID"), "id");
}

#[test]
fn test_field_name_does_not_singularize() {
    assert_eq!(field_name("tags"), "tags");
    assert_eq!(field_name("order_items"), "orderItems");
}

#[test]
fn test_singularize() {
    assert_eq!(singularize("users"), "user");
    assert_eq!(singularize("address"), "address");
    assert_eq!(singularize("status"), "statu");
    assert_eq!(singularize("s"), "s");
    assert_eq!(singularize("categories"), "categorie");
    assert_eq!(singularize("ITEMS"), "ITEM");
}
