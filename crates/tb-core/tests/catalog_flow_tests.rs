//! End-to-end flows through the public tb-core API

use tb_core::{
    build_graph, export_catalog, load_catalog, sample_catalog, search, Catalog, ColumnDraft,
    TableDraft, TableType, TransformationDraft, TransformationType,
};
use tempfile::TempDir;

fn build_pipeline() -> Catalog {
    let mut catalog = Catalog::new();
    for (name, schema, table_type) in [
        ("raw_orders", "landing", TableType::Hive),
        ("orders", "sales", TableType::Snowflake),
    ] {
        catalog
            .add_table(TableDraft {
                name: name.into(),
                schema: schema.into(),
                description: format!("{} table", name),
                table_type,
                jobs: vec![format!("JOB_{}", name.to_uppercase())],
            })
            .unwrap();
    }
    for table in ["raw_orders", "orders"] {
        catalog
            .add_column(
                table,
                ColumnDraft {
                    name: "amount".into(),
                    data_type: "DECIMAL".into(),
                    description: "Order amount".into(),
                    source_columns: vec![],
                },
            )
            .unwrap();
    }
    catalog
        .add_transformation(TransformationDraft {
            name: "clean_orders".into(),
            transformation_type: TransformationType::Python,
            input_tables: vec!["raw_orders".into()],
            output_tables: vec!["orders".into()],
            logic: "df.dropna()".into(),
            description: "Drop incomplete rows".into(),
            jobs: vec!["JOB_CLEAN".into()],
        })
        .unwrap();
    catalog
        .add_mapping("clean_orders", "raw_orders.amount", "orders.amount", "Direct copy")
        .unwrap();
    catalog
}

#[test]
fn test_edit_export_import_render() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lineage.json");
    let catalog = build_pipeline();
    export_catalog(&catalog, &path).unwrap();

    let loaded = load_catalog(&path).unwrap();
    assert_eq!(loaded, catalog);

    let orders = loaded.table("orders").unwrap();
    assert_eq!(orders.columns[0].source_columns, vec!["raw_orders.amount"]);
    // column: 30, table: 30 * 0.8 + 20
    assert_eq!(orders.quality_score, 44);

    let graph = build_graph(loaded.tables(), loaded.transformations(), true, None);
    assert_eq!(graph.edges_between("raw_orders.amount", "clean_orders").len(), 1);
    assert_eq!(graph.edges_between("clean_orders", "orders.amount").len(), 1);
}

#[test]
fn test_search_then_focus() {
    let catalog = sample_catalog();
    let hits = search("units", catalog.tables(), catalog.transformations());
    let focus = hits.columns[0].focus_target().unwrap();
    assert_eq!(focus, "sales_summary.units_sold");

    let graph = build_graph(catalog.tables(), catalog.transformations(), true, Some(&focus));
    let ids: Vec<_> = graph.nodes().map(|n| n.id.clone()).collect();
    assert_eq!(ids, vec!["sales_summary", "sales_summary.units_sold"]);
}

#[test]
fn test_mapping_delete_clears_source_then_scores_drop() {
    let mut catalog = build_pipeline();
    assert!(catalog
        .remove_mapping("clean_orders", "raw_orders.amount", "orders.amount")
        .unwrap());
    assert!(!catalog
        .remove_mapping("clean_orders", "raw_orders.amount", "orders.amount")
        .unwrap());
    let orders = catalog.table("orders").unwrap();
    assert!(orders.columns[0].source_columns.is_empty());
    assert_eq!(orders.quality_score, 36);

    // table-level graph still links through the transformation's tables
    let graph = build_graph(catalog.tables(), catalog.transformations(), false, None);
    assert_eq!(graph.edges_between("raw_orders", "orders").len(), 1);
}
