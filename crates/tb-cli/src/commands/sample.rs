//! Sample command implementation

use anyhow::Result;
use tb_core::sample_catalog;

use crate::cli::{ConfirmArgs, GlobalArgs};
use crate::commands::common::{confirmed, Workspace};

/// Execute the sample command
pub(crate) fn execute(args: &ConfirmArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let current = ws.load_catalog()?;

    if !current.is_empty() {
        let stats = current.stats();
        let preview = vec![format!(
            "This replaces {} tables and {} transformations in {} with demo data.",
            stats.tables,
            stats.transformations,
            ws.catalog_path.display()
        )];
        if !confirmed(args, &preview) {
            return Ok(());
        }
    }

    let catalog = sample_catalog();
    ws.save_catalog(&catalog)?;
    let stats = catalog.stats();
    println!(
        "Loaded sample catalog: {} tables, {} columns, {} transformations",
        stats.tables, stats.columns, stats.transformations
    );
    Ok(())
}
