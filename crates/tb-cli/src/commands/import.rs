//! Import command implementation

use anyhow::Result;
use std::path::Path;

use crate::cli::{GlobalArgs, ImportArgs};
use crate::commands::common::{confirmed, Workspace};

/// Execute the import command
///
/// The file is read in full before anything is replaced; a bad file leaves
/// the current catalog untouched.
pub(crate) fn execute(args: &ImportArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let mut catalog = ws.load_catalog()?;

    if !catalog.is_empty() {
        let stats = catalog.stats();
        let preview = vec![format!(
            "This replaces {} tables and {} transformations with the contents of {}.",
            stats.tables, stats.transformations, args.path
        )];
        if !confirmed(&args.confirm, &preview) {
            return Ok(());
        }
    }

    catalog.replace_from(Path::new(&args.path))?;
    ws.save_catalog(&catalog)?;
    let stats = catalog.stats();
    println!(
        "Imported {} tables and {} transformations from {}",
        stats.tables, stats.transformations, args.path
    );
    Ok(())
}
