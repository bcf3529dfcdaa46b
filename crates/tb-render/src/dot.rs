//! Graphviz DOT output

use tb_core::graph::EdgeKind;
use tb_core::{Direction, GraphData, ViewOptions};

fn rankdir(direction: Direction) -> &'static str {
    match direction {
        Direction::LeftRight => "LR",
        Direction::RightLeft => "RL",
        Direction::UpDown => "TB",
        Direction::DownUp => "BT",
    }
}

/// Quote a string as a DOT identifier
fn quote(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{}\"", escaped)
}

/// Render the graph as a `digraph`. Only the direction is taken from
/// `view`; Graphviz does its own layout.
pub fn render_dot(graph: &GraphData, view: &ViewOptions) -> String {
    let mut dot = String::from("digraph lineage {\n");
    dot.push_str(&format!("    rankdir={};\n", rankdir(view.direction)));
    dot.push_str("    node [style=filled, fontname=\"Helvetica\"];\n");
    if !view.smooth_edges {
        dot.push_str("    splines=polyline;\n");
    }
    dot.push('\n');

    for node in &graph.nodes {
        let mut attrs = vec![
            format!("label={}", quote(&node.label)),
            format!("tooltip={}", quote(&node.title)),
            format!("shape={}", node.shape.as_str()),
            format!("fillcolor={}", quote(&node.color)),
        ];
        if node.size.is_some() {
            attrs.push("fontsize=10".to_string());
        }
        dot.push_str(&format!("    {} [{}];\n", quote(&node.id), attrs.join(", ")));
    }

    if !graph.edges.is_empty() {
        dot.push('\n');
    }

    for edge in &graph.edges {
        let mut attrs = Vec::new();
        if let Some(label) = &edge.edge.label {
            attrs.push(format!("label={}", quote(label)));
        }
        if let Some(title) = &edge.edge.title {
            attrs.push(format!("tooltip={}", quote(title)));
        }
        if edge.edge.kind == EdgeKind::Contains {
            attrs.push("style=dashed".to_string());
            attrs.push("arrowhead=none".to_string());
        }
        let attrs = if attrs.is_empty() {
            String::new()
        } else {
            format!(" [{}]", attrs.join(", "))
        };
        dot.push_str(&format!(
            "    {} -> {}{};\n",
            quote(&edge.from),
            quote(&edge.to),
            attrs
        ));
    }

    dot.push_str("}\n");
    dot
}

#[cfg(test)]
mod tests {
    use super::*;
    use tb_core::{build_graph, sample_catalog};

    fn sample(include_columns: bool) -> GraphData {
        let catalog = sample_catalog();
        build_graph(catalog.tables(), catalog.transformations(), include_columns, None).to_data()
    }

    #[test]
    fn test_table_level_dot() {
        let dot = render_dot(&sample(false), &ViewOptions::default());
        assert!(dot.starts_with("digraph lineage {\n    rankdir=LR;"));
        assert!(dot.contains(
            "\"customers\" -> \"orders\" [label=\"order_processing\", tooltip=\"Process new orders\"];"
        ));
        assert!(dot.contains("shape=box, fillcolor=\"#336791\""));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_column_level_dot() {
        let view = ViewOptions {
            direction: Direction::UpDown,
            smooth_edges: false,
            ..Default::default()
        };
        let dot = render_dot(&sample(true), &view);
        assert!(dot.contains("rankdir=TB;"));
        assert!(dot.contains("splines=polyline;"));
        assert!(dot.contains(
            "\"customers\" -> \"customers.customer_id\" [style=dashed, arrowhead=none];"
        ));
        assert!(dot.contains(
            "\"orders.amount\" -> \"sales_aggregation\" [tooltip=\"Sum aggregation\"];"
        ));
        assert!(dot.contains("\"sales_aggregation\" -> \"sales_summary.total_sales\";"));
        assert!(dot.contains("shape=diamond"));
    }

    #[test]
    fn test_quoting() {
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote("line1\nline2"), "\"line1\\nline2\"");
    }
}
