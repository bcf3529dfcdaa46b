//! tb-core - Core library for Tributary
//!
//! This crate provides the catalog model (tables, columns, transformations
//! and column mappings), quality scoring, search, lineage graph building,
//! JSON persistence and project configuration.

pub mod catalog;
pub mod config;
pub mod error;
pub mod graph;
pub mod names;
mod newtype_string;
pub mod persistence;
pub mod quality;
pub mod sample;
pub mod search;
pub(crate) mod serde_helpers;
pub mod table;
pub mod table_type;
pub mod transformation;
pub mod view;

pub use catalog::{Catalog, CatalogStats, ColumnDraft, TableDraft, TransformationDraft};
pub use config::{Config, ScreenshotConfig};
pub use error::{CoreError, CoreResult};
pub use graph::{build_graph, GraphData, GraphEdge, GraphNode, LineageGraph, NodeKind, NodeShape};
pub use names::{ColumnName, TableName, TransformationName};
pub use persistence::{export_catalog, load_catalog, load_catalog_or_empty};
pub use quality::{refresh_quality, score_column, score_table};
pub use sample::sample_catalog;
pub use search::{search, SearchResults};
pub use table::{Column, ColumnRef, Table};
pub use table_type::TableType;
pub use transformation::{ColumnMapping, Transformation, TransformationType};
pub use view::{Direction, Layout, Theme, ViewOptions};
