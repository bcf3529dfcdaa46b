//! Renders the demo catalog through every output format

use tb_core::{build_graph, sample_catalog, Layout, Theme, ViewOptions};
use tb_render::{render_dot, render_html, render_json};
use tempfile::TempDir;

#[test]
fn test_all_formats_from_one_graph() {
    let catalog = sample_catalog();
    let view = ViewOptions {
        layout: Layout::Force,
        theme: Theme::Dark,
        include_columns: true,
        focus_entity: Some("orders".to_string()),
        ..Default::default()
    };
    let graph = build_graph(
        catalog.tables(),
        catalog.transformations(),
        view.include_columns,
        view.focus_entity.as_deref(),
    );
    let data = graph.to_data();
    // a table focus in column mode keeps only the table
    assert_eq!(data.nodes.len(), 1);

    let dir = TempDir::new().unwrap();
    let html_path = dir.path().join("lineage.html");
    std::fs::write(&html_path, render_html(&data, &view, "demo").unwrap()).unwrap();
    let html = std::fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("\"solver\":\"forceAtlas2Based\""));

    let dot = render_dot(&data, &view);
    assert!(dot.contains("\"orders\" ["));
    assert!(!dot.contains("->"));

    let json: serde_json::Value = serde_json::from_str(&render_json(&data).unwrap()).unwrap();
    assert_eq!(json["nodes"][0]["kind"], "table");
}
