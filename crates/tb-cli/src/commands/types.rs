//! Types command implementation

use anyhow::Result;
use serde::Serialize;
use tb_core::TransformationType;
use tb_render::{node_kind_legend, table_type_legend, LegendEntry};

use crate::cli::{OutputArgs, OutputFormat};
use crate::commands::common::{print_json, print_table};

#[derive(Serialize)]
struct Palette {
    node_kinds: Vec<LegendEntry>,
    table_types: Vec<LegendEntry>,
    transformation_types: Vec<&'static str>,
}

/// Execute the types command
pub(crate) fn execute(args: &OutputArgs) -> Result<()> {
    let palette = Palette {
        node_kinds: node_kind_legend().to_vec(),
        table_types: table_type_legend(),
        transformation_types: TransformationType::ALL.iter().map(|t| t.label()).collect(),
    };

    match args.output {
        OutputFormat::Json => print_json(&palette),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = palette
                .table_types
                .iter()
                .map(|e| vec![e.label.to_string(), e.color.to_string()])
                .collect();
            print_table(&["TABLE TYPE", "COLOR"], &rows);

            println!();
            let rows: Vec<Vec<String>> = palette
                .node_kinds
                .iter()
                .map(|e| vec![e.label.to_string(), e.color.to_string()])
                .collect();
            print_table(&["NODE KIND", "COLOR"], &rows);

            println!("\nTransformation types: {}", palette.transformation_types.join(", "));
            Ok(())
        }
    }
}
