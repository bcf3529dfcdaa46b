//! tb-render - Rendering for Tributary
//!
//! Turns a built lineage graph plus [`ViewOptions`](tb_core::ViewOptions)
//! into an interactive vis-network HTML page, a Graphviz digraph or plain
//! JSON, and captures HTML pages as PNG through a headless browser.

pub mod dot;
pub mod error;
pub mod html;
pub mod json;
pub mod legend;
pub mod options;
pub mod screenshot;

pub use dot::render_dot;
pub use error::{RenderError, RenderResult};
pub use html::render_html;
pub use json::render_json;
pub use legend::{node_kind_legend, table_type_legend, LegendEntry};
pub use screenshot::export_screenshot;
