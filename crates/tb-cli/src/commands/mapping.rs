//! Mapping command implementation

use anyhow::Result;

use crate::cli::{GlobalArgs, MappingAddArgs, MappingArgs, MappingCommands, MappingRmArgs};
use crate::commands::common::Workspace;

/// Execute the mapping command
pub(crate) fn execute(args: &MappingArgs, global: &GlobalArgs) -> Result<()> {
    match &args.command {
        MappingCommands::Add(args) => add(args, global),
        MappingCommands::Rm(args) => remove(args, global),
    }
}

fn add(args: &MappingAddArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let mut catalog = ws.load_catalog()?;

    let mapping =
        catalog.add_mapping(&args.transformation, &args.source, &args.target, &args.rule)?;
    println!(
        "Mapped {} -> {} in '{}'",
        mapping.source_id(),
        mapping.target_id(),
        args.transformation
    );
    ws.save_catalog(&catalog)
}

fn remove(args: &MappingRmArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let mut catalog = ws.load_catalog()?;

    if !catalog.remove_mapping(&args.transformation, &args.source, &args.target)? {
        println!(
            "No mapping {} -> {} in '{}'; nothing removed",
            args.source,
            args.target,
            args.transformation
        );
        return Ok(());
    }
    println!(
        "Removed mapping {} -> {} from '{}'",
        args.source,
        args.target,
        args.transformation
    );
    ws.save_catalog(&catalog)
}
