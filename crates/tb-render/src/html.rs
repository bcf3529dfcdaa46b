//! Interactive HTML page built on vis-network

use crate::error::RenderResult;
use crate::legend::{node_kind_legend, table_type_legend, LegendEntry};
use crate::options::{background_color, font_color, vis_options};
use serde_json::Value;
use std::f64::consts::TAU;
use tb_core::{GraphData, Layout, ViewOptions};

/// vis-network bundle loaded by the page
pub const VIS_NETWORK_URL: &str =
    "https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js";

/// Canvas height in pixels
pub const CANVAS_HEIGHT: u32 = 750;

/// Render a self-contained page showing `graph` with `view` applied
pub fn render_html(graph: &GraphData, view: &ViewOptions, title: &str) -> RenderResult<String> {
    if graph.nodes.is_empty() {
        log::warn!("Rendering an empty lineage graph; check the focus and catalog contents");
    }

    let nodes = node_values(graph, view)?;
    let edges = serde_json::to_value(&graph.edges)?;
    let options = vis_options(view);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
    html.push_str(&format!("<script src=\"{}\"></script>\n", VIS_NETWORK_URL));
    html.push_str(&page_styles(view));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(title)));

    if graph.nodes.is_empty() {
        html.push_str(
            "<p class=\"empty\">No nodes to display in the graph. \
             Check your filter settings or add more tables/transformations.</p>\n",
        );
    }

    html.push_str("<div id=\"lineage\"></div>\n");
    html.push_str(&legend_html(view));
    html.push_str("<script>\n");
    html.push_str(&format!("const nodes = new vis.DataSet({});\n", script_json(&nodes)?));
    html.push_str(&format!("const edges = new vis.DataSet({});\n", script_json(&edges)?));
    html.push_str(&format!("const options = {};\n", script_json(&options)?));
    html.push_str(
        "const container = document.getElementById(\"lineage\");\n\
         const network = new vis.Network(container, { nodes: nodes, edges: edges }, options);\n",
    );
    html.push_str("</script>\n</body>\n</html>\n");
    Ok(html)
}

/// Node records for the vis DataSet; circular layouts get fixed starting
/// positions.
fn node_values(graph: &GraphData, view: &ViewOptions) -> RenderResult<Vec<Value>> {
    let positions = if view.layout == Layout::Circular {
        circular_positions(graph.nodes.len(), view.node_spacing)
    } else {
        Vec::new()
    };

    let mut values = Vec::with_capacity(graph.nodes.len());
    for (i, node) in graph.nodes.iter().enumerate() {
        let mut value = serde_json::to_value(node)?;
        if let (Some((x, y)), Some(obj)) = (positions.get(i), value.as_object_mut()) {
            obj.insert("x".to_string(), Value::from(x.round()));
            obj.insert("y".to_string(), Value::from(y.round()));
        }
        values.push(value);
    }
    Ok(values)
}

/// Points evenly spaced on a circle, starting at 3 o'clock.
///
/// The radius grows with the node count so neighbours stay roughly
/// `spacing` apart, and is never below `spacing`.
pub fn circular_positions(count: usize, spacing: u32) -> Vec<(f64, f64)> {
    if count == 0 {
        return Vec::new();
    }
    let spacing = spacing as f64;
    let radius = (spacing * count as f64 / TAU).max(spacing);
    (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / count as f64;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Serialize for embedding inside a `<script>` element
fn script_json(value: &impl serde::Serialize) -> RenderResult<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn page_styles(view: &ViewOptions) -> String {
    format!(
        r#"<style>
body {{ margin: 0; padding: 1rem 2rem; background: {bg}; color: {fg}; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; }}
h1 {{ font-size: 1.4rem; }}
#lineage {{ width: 100%; height: {height}px; border: 1px solid #9E9E9E; border-radius: 5px; }}
.legend {{ display: flex; flex-wrap: wrap; gap: 0.5rem 1.5rem; margin-top: 1rem; font-size: 0.85rem; }}
.swatch {{ display: inline-block; width: 0.8rem; height: 0.8rem; margin-right: 0.3rem; border-radius: 2px; vertical-align: middle; }}
.empty {{ font-weight: bold; }}
</style>
"#,
        bg = background_color(view.theme),
        fg = font_color(view.theme),
        height = CANVAS_HEIGHT,
    )
}

fn legend_items(html: &mut String, entries: &[LegendEntry]) {
    for entry in entries {
        html.push_str(&format!(
            "<span><span class=\"swatch\" style=\"background:{}\"></span>{}</span>\n",
            entry.color,
            html_escape(entry.label)
        ));
    }
}

fn legend_html(view: &ViewOptions) -> String {
    let mut html = String::from("<div class=\"legend\">\n");
    if view.include_columns {
        legend_items(&mut html, &node_kind_legend()[1..]);
    }
    legend_items(&mut html, &table_type_legend());
    html.push_str("</div>\n");
    html
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;
