//! Column command implementation

use anyhow::Result;
use tb_core::{Catalog, Column, ColumnDraft, CoreError};

use crate::cli::{
    ColumnAddArgs, ColumnArgs, ColumnCommands, ColumnEditArgs, ColumnRmArgs, GlobalArgs,
};
use crate::commands::common::{confirmed, Workspace};

/// Execute the column command
pub(crate) fn execute(args: &ColumnArgs, global: &GlobalArgs) -> Result<()> {
    match &args.command {
        ColumnCommands::Add(args) => add(args, global),
        ColumnCommands::Edit(args) => edit(args, global),
        ColumnCommands::Rm(args) => remove(args, global),
    }
}

fn add(args: &ColumnAddArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let mut catalog = ws.load_catalog()?;

    let draft = ColumnDraft {
        name: args.name.clone(),
        data_type: args.data_type.clone(),
        description: args.description.clone(),
        source_columns: args.sources.clone(),
    };
    let column = catalog.add_column(&args.table, draft)?;
    println!(
        "Added column '{}.{}' ({})",
        args.table,
        column.name,
        column.data_type
    );
    warn_unknown_sources(&catalog, &args.sources);
    ws.save_catalog(&catalog)
}

fn edit(args: &ColumnEditArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let mut catalog = ws.load_catalog()?;

    let mut draft = ColumnDraft::from(find(&catalog, &args.table, &args.name)?);
    if let Some(rename) = &args.rename {
        draft.name = rename.clone();
    }
    if let Some(data_type) = &args.data_type {
        draft.data_type = data_type.clone();
    }
    if let Some(description) = &args.description {
        draft.description = description.clone();
    }
    if args.clear_sources {
        draft.source_columns.clear();
    } else if !args.sources.is_empty() {
        draft.source_columns = args.sources.clone();
    }

    let column = catalog.update_column(&args.table, &args.name, draft)?;
    println!("Updated column '{}.{}'", args.table, column.name);
    warn_unknown_sources(&catalog, &args.sources);
    ws.save_catalog(&catalog)
}

fn remove(args: &ColumnRmArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let mut catalog = ws.load_catalog()?;

    let column = find(&catalog, &args.table, &args.name)?;
    let preview = vec![format!(
        "Delete column '{}.{}' ({}).",
        args.table,
        column.name,
        column.data_type
    )];
    if !confirmed(&args.confirm, &preview) {
        return Ok(());
    }

    let removed = catalog.remove_column(&args.table, &args.name)?;
    println!("Deleted column '{}.{}'", args.table, removed.name);
    ws.save_catalog(&catalog)
}

fn find<'a>(catalog: &'a Catalog, table: &str, column: &str) -> Result<&'a Column> {
    let owner = catalog.table(table).ok_or_else(|| CoreError::TableNotFound {
        name: table.to_string(),
    })?;
    owner.column(column).ok_or_else(|| {
        CoreError::ColumnNotFound {
            table: table.to_string(),
            column: column.to_string(),
        }
        .into()
    })
}

/// Source references are free text; flag the ones that point nowhere
fn warn_unknown_sources(catalog: &Catalog, sources: &[String]) {
    let known = catalog.column_ids();
    for source in sources.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        if !known.iter().any(|id| id == source) {
            log::warn!("Source column '{}' is not in the catalog", source);
        }
    }
}
