//! Lineage graph construction
//!
//! [`build_graph`] turns the catalog into a directed multigraph whose node
//! and edge attributes are already in the form the renderer draws. Node ids
//! are table names, `table.column` ids and transformation names.

use crate::table::{Column, Table};
use crate::transformation::Transformation;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::collections::HashMap;

/// Fill color for column nodes
pub const COLUMN_COLOR: &str = "#2196F3";

/// Fill color for transformation nodes
pub const TRANSFORMATION_COLOR: &str = "#FFC107";

/// Legend color for table nodes; actual table nodes use their type's color
pub const TABLE_COLOR: &str = "#4CAF50";

/// Display size for column nodes
pub const COLUMN_NODE_SIZE: u32 = 10;

/// What a node stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Table,
    Column,
    Transformation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    Box,
    Ellipse,
    Diamond,
}

impl NodeShape {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeShape::Box => "box",
            NodeShape::Ellipse => "ellipse",
            NodeShape::Diamond => "diamond",
        }
    }
}

/// Edge category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Table to one of its columns
    Contains,
    /// Data flowing downstream
    Flow,
}

/// Node attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    /// Tooltip text
    pub title: String,
    pub shape: NodeShape,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    pub kind: NodeKind,
}

/// Edge attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Tooltip text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub kind: EdgeKind,
}

impl GraphEdge {
    fn contains() -> Self {
        Self {
            label: None,
            title: None,
            kind: EdgeKind::Contains,
        }
    }

    fn flow(label: Option<String>, title: Option<String>) -> Self {
        Self {
            label,
            title: title.filter(|t| !t.is_empty()),
            kind: EdgeKind::Flow,
        }
    }
}

/// Serializable edge with endpoint ids
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeData {
    pub from: String,
    pub to: String,
    #[serde(flatten)]
    pub edge: GraphEdge,
}

/// Flat, serializable form of a [`LineageGraph`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<EdgeData>,
}

/// A directed multigraph of lineage
#[derive(Debug, Default)]
pub struct LineageGraph {
    graph: DiGraph<GraphNode, GraphEdge>,
    node_map: HashMap<String, NodeIndex>,
}

impl LineageGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, or replace the attributes of an existing node with the
    /// same id while keeping its position.
    pub fn upsert_node(&mut self, node: GraphNode) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(&node.id) {
            log::warn!("Node id '{}' is used more than once; keeping the last", node.id);
            self.graph[idx] = node;
            idx
        } else {
            let id = node.id.clone();
            let idx = self.graph.add_node(node);
            self.node_map.insert(id, idx);
            idx
        }
    }

    /// Add an edge between two existing nodes. Returns false, adding
    /// nothing, when either endpoint is missing.
    pub fn add_edge(&mut self, from: &str, to: &str, edge: GraphEdge) -> bool {
        match (self.node_map.get(from), self.node_map.get(to)) {
            (Some(&a), Some(&b)) => {
                self.graph.add_edge(a, b, edge);
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_map.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.node_map.get(id).map(|&idx| &self.graph[idx])
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Edges in insertion order as `(from, to, attributes)`
    pub fn edges(&self) -> impl Iterator<Item = (&GraphNode, &GraphNode, &GraphEdge)> + '_ {
        self.graph
            .edge_references()
            .map(move |e| (&self.graph[e.source()], &self.graph[e.target()], e.weight()))
    }

    /// Every edge from `from` to `to`, parallel edges included, in insertion
    /// order
    pub fn edges_between(&self, from: &str, to: &str) -> Vec<&GraphEdge> {
        let (Some(&a), Some(&b)) = (self.node_map.get(from), self.node_map.get(to)) else {
            return Vec::new();
        };
        let mut found: Vec<(usize, &GraphEdge)> = self
            .graph
            .edges_connecting(a, b)
            .map(|e| (e.id().index(), e.weight()))
            .collect();
        found.sort_by_key(|(i, _)| *i);
        found.into_iter().map(|(_, e)| e).collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn to_data(&self) -> GraphData {
        GraphData {
            nodes: self.nodes().cloned().collect(),
            edges: self
                .edges()
                .map(|(from, to, edge)| EdgeData {
                    from: from.id.clone(),
                    to: to.id.clone(),
                    edge: edge.clone(),
                })
                .collect(),
        }
    }
}

fn jobs_suffix(jobs: &[String]) -> String {
    if jobs.is_empty() {
        String::new()
    } else {
        format!("\nAutosys Jobs: {}", jobs.join(", "))
    }
}

fn table_node(table: &Table) -> GraphNode {
    GraphNode {
        id: table.name.to_string(),
        label: table.name.to_string(),
        title: format!(
            "Type: {}\nSchema: {}\n{}{}",
            table.table_type,
            table.schema,
            table.description,
            jobs_suffix(&table.jobs)
        ),
        shape: NodeShape::Box,
        color: table.table_type.color().to_string(),
        size: None,
        kind: NodeKind::Table,
    }
}

fn column_node(id: String, column: &Column) -> GraphNode {
    GraphNode {
        id,
        label: column.name.to_string(),
        title: format!(
            "Type: {}\nDescription: {}",
            column.data_type, column.description
        ),
        shape: NodeShape::Ellipse,
        color: COLUMN_COLOR.to_string(),
        size: Some(COLUMN_NODE_SIZE),
        kind: NodeKind::Column,
    }
}

fn transformation_node(t: &Transformation) -> GraphNode {
    GraphNode {
        id: t.name.to_string(),
        label: t.name.to_string(),
        title: format!(
            "Type: {}\nDescription: {}{}",
            t.transformation_type,
            t.description,
            jobs_suffix(&t.jobs)
        ),
        shape: NodeShape::Diamond,
        color: TRANSFORMATION_COLOR.to_string(),
        size: None,
        kind: NodeKind::Transformation,
    }
}

/// True when `focus` names the table or one of its columns
fn table_in_focus(table: &Table, focus: &str) -> bool {
    table.name == focus || table.column_ids().any(|id| id == focus)
}

/// Build the lineage graph.
///
/// With `include_columns` the graph carries column and transformation nodes
/// and follows column mappings; otherwise tables are linked directly, one
/// edge per (input, output) pair of each transformation. A `focus` keeps only
/// the named table (or the column and its table). Edges whose endpoints are
/// not in the graph are dropped silently.
pub fn build_graph(
    tables: &[Table],
    transformations: &[Transformation],
    include_columns: bool,
    focus: Option<&str>,
) -> LineageGraph {
    let mut graph = LineageGraph::new();

    for table in tables {
        if let Some(focus) = focus {
            if !table_in_focus(table, focus) {
                continue;
            }
        }
        graph.upsert_node(table_node(table));

        if include_columns {
            for column in &table.columns {
                let id = table.column_id(column);
                if focus.is_some_and(|f| f != id) {
                    continue;
                }
                graph.upsert_node(column_node(id.clone(), column));
                graph.add_edge(&table.name, &id, GraphEdge::contains());
            }
        }
    }

    for t in transformations {
        if include_columns {
            add_transformation_flow(&mut graph, t, focus.is_some());
        } else {
            for input in &t.input_tables {
                for output in &t.output_tables {
                    graph.add_edge(
                        input,
                        output,
                        GraphEdge::flow(Some(t.name.to_string()), Some(t.description.clone())),
                    );
                }
            }
        }
    }

    log::debug!(
        "Built lineage graph: {} nodes, {} edges (columns: {}, focus: {})",
        graph.node_count(),
        graph.edge_count(),
        include_columns,
        focus.unwrap_or("-")
    );
    graph
}

/// Column-level edges for one transformation, routed through its own node
fn add_transformation_flow(graph: &mut LineageGraph, t: &Transformation, focused: bool) {
    let name = t.name.as_str();
    // (from, to, tooltip) with the transformation node as one endpoint
    let mut edges: Vec<(String, String, Option<String>)> = Vec::new();

    if t.column_mappings.is_empty() {
        for input in t.input_tables.iter().filter(|i| graph.contains(i)) {
            edges.push((input.clone(), name.to_string(), None));
        }
        for output in t.output_tables.iter().filter(|o| graph.contains(o)) {
            edges.push((name.to_string(), output.clone(), None));
        }
    } else {
        for mapping in &t.column_mappings {
            let source = mapping.source_id();
            let target = mapping.target_id();
            if graph.contains(&source) && graph.contains(&target) {
                edges.push((
                    source,
                    name.to_string(),
                    Some(mapping.transformation_rule.clone()),
                ));
                edges.push((name.to_string(), target, None));
            }
        }
    }

    if focused && edges.is_empty() {
        return;
    }
    graph.upsert_node(transformation_node(t));
    for (from, to, title) in edges {
        graph.add_edge(&from, &to, GraphEdge::flow(None, title));
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
