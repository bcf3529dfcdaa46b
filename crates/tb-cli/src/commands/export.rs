//! Export command implementation

use anyhow::Result;
use std::path::Path;

use crate::cli::{ExportArgs, GlobalArgs};
use crate::commands::common::Workspace;

/// Execute the export command
pub(crate) fn execute(args: &ExportArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let catalog = ws.load_catalog()?;

    tb_core::export_catalog(&catalog, Path::new(&args.path))?;
    let stats = catalog.stats();
    println!(
        "Exported {} tables and {} transformations to {}",
        stats.tables, stats.transformations, args.path
    );
    Ok(())
}
