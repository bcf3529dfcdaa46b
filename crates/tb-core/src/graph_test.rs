use super::*;
use crate::names::{ColumnName, TableName, TransformationName};
use crate::sample::sample_catalog;
use crate::table::ColumnRef;
use crate::table_type::TableType;
use crate::transformation::{ColumnMapping, TransformationType};

fn table(name: &str, columns: &[&str]) -> Table {
    Table::new(TableName::new(name), "s").with_columns(
        columns
            .iter()
            .map(|c| Column::new(ColumnName::new(*c), "INT"))
            .collect(),
    )
}

fn transformation(name: &str, inputs: &[&str], outputs: &[&str]) -> Transformation {
    Transformation::new(
        TransformationName::new(name),
        TransformationType::Sql,
        inputs.iter().copied(),
        outputs.iter().copied(),
    )
    .with_description(format!("{} desc", name))
}

fn mapped(name: &str, source: (&str, &str), target: (&str, &str)) -> Transformation {
    transformation(name, &[source.0], &[target.0]).with_mappings(vec![ColumnMapping::new(
        ColumnRef::new(source.0, source.1),
        ColumnRef::new(target.0, target.1),
        "copy",
    )])
}

fn ids(graph: &LineageGraph) -> Vec<&str> {
    graph.nodes().map(|n| n.id.as_str()).collect()
}

#[test]
fn test_table_level_cross_product() {
    let tables = vec![table("A", &[]), table("B", &[]), table("C", &[])];
    let ts = vec![transformation("T", &["A", "B"], &["C"])];
    let graph = build_graph(&tables, &ts, false, None);

    assert_eq!(ids(&graph), vec!["A", "B", "C"]);
    assert!(!graph.contains("T"));
    assert_eq!(graph.edge_count(), 2);
    for from in ["A", "B"] {
        let edges = graph.edges_between(from, "C");
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].label.as_deref(), Some("T"));
        assert_eq!(edges[0].title.as_deref(), Some("T desc"));
    }
}

#[test]
fn test_column_level_mapping() {
    let tables = vec![table("A", &["x"]), table("B", &["y"])];
    let ts = vec![mapped("T", ("A", "x"), ("B", "y"))];
    let graph = build_graph(&tables, &ts, true, None);

    assert_eq!(ids(&graph), vec!["A", "A.x", "B", "B.y", "T"]);
    let into_t = graph.edges_between("A.x", "T");
    assert_eq!(into_t.len(), 1);
    assert_eq!(into_t[0].title.as_deref(), Some("copy"));
    assert_eq!(graph.edges_between("T", "B.y").len(), 1);
    assert_eq!(graph.edges_between("A", "A.x")[0].kind, EdgeKind::Contains);
    // two containment edges plus the mapping pair
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_column_level_table_focus_keeps_only_table() {
    let tables = vec![table("A", &["x"]), table("B", &["y"])];
    let ts = vec![mapped("T", ("A", "x"), ("B", "y"))];
    let graph = build_graph(&tables, &ts, true, Some("A"));

    assert_eq!(ids(&graph), vec!["A"]);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_column_focus_keeps_column_and_table() {
    let tables = vec![table("A", &["x", "z"]), table("B", &["y"])];
    let graph = build_graph(&tables, &[], true, Some("A.x"));
    assert_eq!(ids(&graph), vec!["A", "A.x"]);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_unknown_focus_gives_empty_graph() {
    let tables = vec![table("A", &["x"])];
    let graph = build_graph(&tables, &[], false, Some("nowhere"));
    assert!(graph.is_empty());
}

#[test]
fn test_dangling_mapping_is_skipped() {
    let tables = vec![table("A", &["x"]), table("B", &["y"])];
    let ts = vec![mapped("T", ("A", "x"), ("B", "missing"))];
    let graph = build_graph(&tables, &ts, true, None);

    assert!(graph.contains("T"));
    assert!(graph.edges_between("A.x", "T").is_empty());
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_dangling_table_reference_is_skipped() {
    let tables = vec![table("A", &[])];
    let ts = vec![transformation("T", &["A"], &["gone"])];
    let graph = build_graph(&tables, &ts, false, None);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_column_mode_without_mappings_links_tables() {
    let tables = vec![table("A", &[]), table("B", &[])];
    let ts = vec![transformation("T", &["A", "missing"], &["B"])];
    let graph = build_graph(&tables, &ts, true, None);

    assert_eq!(graph.edges_between("A", "T").len(), 1);
    assert_eq!(graph.edges_between("T", "B").len(), 1);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_focused_transformation_needs_a_surviving_edge() {
    let tables = vec![table("A", &[]), table("B", &[])];
    let ts = vec![
        transformation("feeds_a", &["A"], &["B"]),
        transformation("elsewhere", &["X"], &["Y"]),
    ];
    let graph = build_graph(&tables, &ts, true, Some("A"));
    assert!(graph.contains("feeds_a"));
    assert!(!graph.contains("elsewhere"));

    let unfocused = build_graph(&tables, &ts, true, None);
    assert!(unfocused.contains("elsewhere"));
}

#[test]
fn test_parallel_edges_preserved() {
    let tables = vec![table("A", &[]), table("B", &[])];
    let ts = vec![
        transformation("first", &["A"], &["B"]),
        transformation("second", &["A"], &["B"]),
    ];
    let graph = build_graph(&tables, &ts, false, None);
    let labels: Vec<_> = graph
        .edges_between("A", "B")
        .iter()
        .map(|e| e.label.clone().unwrap())
        .collect();
    assert_eq!(labels, vec!["first", "second"]);
}

#[test]
fn test_node_attributes() {
    let tables = vec![Table::new(TableName::new("orders"), "sales")
        .with_description("Order facts")
        .with_type(TableType::MySql)
        .with_jobs(["J1", "J2"])
        .with_columns(vec![
            Column::new(ColumnName::new("amount"), "DECIMAL").with_description("Total")
        ])];
    let graph = build_graph(&tables, &[], true, None);

    let node = graph.node("orders").unwrap();
    assert_eq!(node.shape, NodeShape::Box);
    assert_eq!(node.color, "#4479A1");
    assert_eq!(
        node.title,
        "Type: MySQL\nSchema: sales\nOrder facts\nAutosys Jobs: J1, J2"
    );

    let column = graph.node("orders.amount").unwrap();
    assert_eq!(column.label, "amount");
    assert_eq!(column.title, "Type: DECIMAL\nDescription: Total");
    assert_eq!(column.size, Some(COLUMN_NODE_SIZE));
    assert_eq!(column.color, COLUMN_COLOR);
}

#[test]
fn test_duplicate_node_id_upserts_in_place() {
    let tables = vec![
        table("A", &[]),
        table("B", &[]),
        Table::new(TableName::new("A"), "other"),
    ];
    let graph = build_graph(&tables, &[], false, None);
    assert_eq!(ids(&graph), vec!["A", "B"]);
    assert!(graph.node("A").unwrap().title.contains("Schema: other"));
}

#[test]
fn test_sample_graph_and_data() {
    let catalog = sample_catalog();
    let graph = build_graph(catalog.tables(), catalog.transformations(), false, None);
    // order_processing: 2 x 1, sales_aggregation: 2 x 1
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);

    let columns = build_graph(catalog.tables(), catalog.transformations(), true, None);
    // 4 tables + 16 columns + 2 transformations
    assert_eq!(columns.node_count(), 22);
    // 16 containment + 7 mappings * 2
    assert_eq!(columns.edge_count(), 30);

    let data = columns.to_data();
    assert_eq!(data.nodes.len(), 22);
    assert_eq!(data.edges[0].from, "customers");
    assert_eq!(data.edges[0].to, "customers.customer_id");

    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json["nodes"][0]["shape"], "box");
    assert!(json["nodes"][0].get("size").is_none());
    assert_eq!(json["nodes"][1]["size"], 10);
    assert_eq!(json["edges"][0]["kind"], "contains");
}
