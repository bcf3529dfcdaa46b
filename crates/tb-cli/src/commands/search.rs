//! Search command implementation

use anyhow::Result;
use tb_core::search::MatchReason;

use crate::cli::{GlobalArgs, OutputFormat, SearchArgs};
use crate::commands::common::{print_json, print_table, Workspace};

/// Execute the search command
pub(crate) fn execute(args: &SearchArgs, global: &GlobalArgs) -> Result<()> {
    let query = args.query.trim();
    if query.is_empty() {
        anyhow::bail!("Search query must not be empty");
    }

    let ws = Workspace::open(global)?;
    let catalog = ws.load_catalog()?;
    let results = tb_core::search(query, catalog.tables(), catalog.transformations());

    if args.output == OutputFormat::Json {
        return print_json(&results);
    }
    if results.is_empty() {
        println!("No matches for '{}'.", query);
        return Ok(());
    }

    if !results.tables.is_empty() {
        println!("Tables ({})", results.tables.len());
        let rows: Vec<Vec<String>> = results
            .tables
            .iter()
            .map(|hit| {
                vec![
                    hit.name.clone(),
                    hit.schema.clone(),
                    hit.table_type.to_string(),
                    reasons(&hit.reasons),
                ]
            })
            .collect();
        print_table(&["NAME", "SCHEMA", "TYPE", "MATCHED"], &rows);
        println!();
    }

    if !results.columns.is_empty() {
        println!("Columns ({})", results.columns.len());
        let rows: Vec<Vec<String>> = results
            .columns
            .iter()
            .map(|hit| vec![hit.id.clone(), hit.data_type.clone(), reasons(&hit.reasons)])
            .collect();
        print_table(&["COLUMN", "TYPE", "MATCHED"], &rows);
        println!();
    }

    if !results.transformations.is_empty() {
        println!("Transformations ({})", results.transformations.len());
        let rows: Vec<Vec<String>> = results
            .transformations
            .iter()
            .map(|hit| {
                vec![
                    hit.name.clone(),
                    hit.transformation_type.to_string(),
                    format!(
                        "{} -> {}",
                        hit.input_tables.join(", "),
                        hit.output_tables.join(", ")
                    ),
                    reasons(&hit.reasons),
                ]
            })
            .collect();
        print_table(&["NAME", "TYPE", "FLOW", "MATCHED"], &rows);
        println!();
    }

    if let Some(target) = results
        .tables
        .iter()
        .filter_map(|hit| hit.focus_target())
        .chain(results.columns.iter().filter_map(|hit| hit.focus_target()))
        .next()
    {
        println!("Explore with: tb lineage --focus {}", target);
    }
    Ok(())
}

fn reasons(reasons: &[MatchReason]) -> String {
    reasons
        .iter()
        .map(|r| match r {
            MatchReason::Name => "name",
            MatchReason::Description => "description",
            MatchReason::Schema => "schema",
            MatchReason::TableType => "type",
            MatchReason::Job => "job",
            MatchReason::DataType => "data type",
            MatchReason::Logic => "logic",
        })
        .collect::<Vec<_>>()
        .join(", ")
}
