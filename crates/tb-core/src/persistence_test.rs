use super::*;
use crate::sample::sample_catalog;
use crate::table_type::TableType;
use tempfile::TempDir;

#[test]
fn test_round_trip_preserves_everything() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lineage.json");
    let catalog = sample_catalog();

    export_catalog(&catalog, &path).unwrap();
    let loaded = load_catalog(&path).unwrap();
    assert_eq!(loaded, catalog);
    assert_eq!(
        loaded.table("orders").unwrap().jobs,
        vec!["JOB_LOAD_ORDERS", "JOB_PROCESS_ORDERS"]
    );
}

#[test]
fn test_export_writes_expected_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("out.json");
    export_catalog(&sample_catalog(), &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["format_version"], 1);
    let customers = &value["tables"][0];
    assert_eq!(customers["table_type"], "PostgreSQL");
    assert_eq!(customers["autosys_jobs"][0], "JOB_LOAD_CUSTOMERS");
    assert_eq!(customers["columns"][0]["name"], "customer_id");
    let mapping = &value["transformations"][0]["column_mappings"][0];
    assert_eq!(mapping["source_table"], "customers");
    assert_eq!(mapping["transformation_rule"], "Direct copy");
    assert_eq!(value["transformations"][0]["transformation_type"], "SQL");

    // no temp file left next to the document
    let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_legacy_document_gets_defaults() {
    let json = r#"{
        "tables": [{
            "name": "orders",
            "schema": "sales",
            "description": "Orders",
            "columns": [{"name": "id", "data_type": "INT", "description": "Key"}]
        }],
        "transformations": [{
            "name": "load",
            "transformation_type": "SQL",
            "input_tables": ["raw"],
            "output_tables": ["orders"],
            "column_mappings": [{
                "source_table": "raw", "source_column": "id",
                "target_table": "orders", "target_column": "id"
            }]
        }]
    }"#;
    let catalog = catalog_from_json(json, "inline").unwrap();
    let orders = catalog.table("orders").unwrap();
    assert_eq!(orders.table_type, TableType::Other);
    assert!(orders.jobs.is_empty());
    // recomputed on import: 20 * 0.8 + 20
    assert_eq!(orders.quality_score, 36);
    assert_eq!(orders.columns[0].quality_score, 20);
    let load = catalog.transformation("load").unwrap();
    assert_eq!(load.column_mappings[0].transformation_rule, "");
    assert!(load.logic.is_empty());
}

#[test]
fn test_unknown_table_type_degrades_to_other() {
    let json = r#"{"tables": [{"name": "t", "schema": "s", "table_type": "Sybase"}]}"#;
    let catalog = catalog_from_json(json, "inline").unwrap();
    assert_eq!(catalog.table("t").unwrap().table_type, TableType::Other);
    assert!(catalog.transformations().is_empty());
}

#[test]
fn test_missing_file_error() {
    let dir = TempDir::new().unwrap();
    let err = load_catalog(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CoreError::FileNotFound { .. }));

    let empty = load_catalog_or_empty(&dir.path().join("absent.json")).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_malformed_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CoreError::InvalidDocument { .. }));
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn test_blank_name_is_rejected() {
    let json = r#"{"tables": [{"name": "  ", "schema": "s"}]}"#;
    let err = catalog_from_json(json, "inline").unwrap_err();
    assert!(matches!(err, CoreError::InvalidDocument { .. }));
}

#[test]
fn test_failed_import_leaves_catalog_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"tables": 5}"#).unwrap();

    let mut catalog = sample_catalog();
    let before = catalog.clone();
    assert!(catalog.replace_from(&path).is_err());
    assert_eq!(catalog, before);
}

#[test]
fn test_import_replaces_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("one.json");
    std::fs::write(&path, r#"{"tables": [{"name": "only", "schema": "s"}]}"#).unwrap();

    let mut catalog = sample_catalog();
    catalog.replace_from(&path).unwrap();
    assert_eq!(catalog.tables().len(), 1);
    assert!(catalog.transformations().is_empty());
}
