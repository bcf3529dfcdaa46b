//! Stats command implementation

use anyhow::Result;

use crate::cli::{GlobalArgs, OutputArgs, OutputFormat};
use crate::commands::common::{print_json, Workspace};

/// Execute the stats command
pub(crate) fn execute(args: &OutputArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let stats = ws.load_catalog()?.stats();

    match args.output {
        OutputFormat::Json => print_json(&stats),
        OutputFormat::Table => {
            println!("Catalog:          {}", ws.catalog_path.display());
            println!("Tables:           {}", stats.tables);
            println!("Columns:          {}", stats.columns);
            println!("Transformations:  {}", stats.transformations);
            println!("Column mappings:  {}", stats.mappings);
            println!("Average quality:  {:.1}", stats.average_quality);
            Ok(())
        }
    }
}
