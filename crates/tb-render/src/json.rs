//! JSON output of the graph

use crate::error::RenderResult;
use tb_core::GraphData;

/// Pretty-printed `{ "nodes": [...], "edges": [...] }`
pub fn render_json(graph: &GraphData) -> RenderResult<String> {
    Ok(serde_json::to_string_pretty(graph)?)
}
