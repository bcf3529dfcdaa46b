use super::*;

fn orders() -> Table {
    Table::new(TableName::new("orders"), "sales").with_columns(vec![
        Column::new(ColumnName::new("order_id"), "INT"),
        Column::new(ColumnName::new("amount"), "DECIMAL"),
    ])
}

#[test]
fn test_new_table_defaults() {
    let table = Table::new(TableName::new("orders"), "sales");
    assert_eq!(table.table_type, TableType::Other);
    assert!(table.jobs.is_empty());
    assert!(table.columns.is_empty());
    assert_eq!(table.quality_score, 0);
}

#[test]
fn test_column_lookup() {
    let table = orders();
    assert!(table.has_column("amount"));
    assert!(!table.has_column("missing"));
    assert_eq!(table.column("order_id").unwrap().data_type, "INT");
}

#[test]
fn test_column_ids_in_order() {
    let ids: Vec<String> = orders().column_ids().collect();
    assert_eq!(ids, vec!["orders.order_id", "orders.amount"]);
}

#[test]
fn test_add_source_is_idempotent() {
    let mut col = Column::new(ColumnName::new("customer_id"), "INT");
    assert!(col.add_source("customers.customer_id"));
    assert!(!col.add_source("customers.customer_id"));
    assert_eq!(col.source_columns, vec!["customers.customer_id"]);
}

#[test]
fn test_remove_source_twice_is_noop() {
    let mut col =
        Column::new(ColumnName::new("amount"), "DECIMAL").with_sources(["products.price"]);
    assert!(col.remove_source("products.price"));
    assert!(!col.remove_source("products.price"));
    assert!(col.source_columns.is_empty());
}

#[test]
fn test_column_ref_parse() {
    let r = ColumnRef::parse("orders.amount").unwrap();
    assert_eq!(r.table, "orders");
    assert_eq!(r.column, "amount");
    assert_eq!(r.to_string(), "orders.amount");
}

#[test]
fn test_column_ref_splits_at_first_dot() {
    let r = ColumnRef::parse("orders.payload.total").unwrap();
    assert_eq!(r.table, "orders");
    assert_eq!(r.column, "payload.total");
}

#[test]
fn test_column_ref_rejects_malformed() {
    for bad in ["orders", ".amount", "orders.", "", " . "] {
        let err = ColumnRef::parse(bad).unwrap_err();
        assert!(
            matches!(err, CoreError::InvalidColumnRef { .. }),
            "expected InvalidColumnRef for {:?}",
            bad
        );
    }
}

#[test]
fn test_table_json_field_names() {
    let table = orders().with_jobs(["JOB_LOAD_ORDERS"]);
    let value = serde_json::to_value(&table).unwrap();
    let obj = value.as_object().unwrap();
    for key in [
        "name",
        "schema",
        "description",
        "table_type",
        "autosys_jobs",
        "columns",
        "quality_score",
        "last_updated",
    ] {
        assert!(obj.contains_key(key), "missing key {}", key);
    }
    assert_eq!(obj["autosys_jobs"][0], "JOB_LOAD_ORDERS");
}

#[test]
fn test_table_deserialize_with_defaults() {
    let table: Table = serde_json::from_str(r#"{"name": "legacy", "schema": "raw"}"#).unwrap();
    assert_eq!(table.table_type, TableType::Other);
    assert!(table.jobs.is_empty());
    assert_eq!(table.description, "");
}
