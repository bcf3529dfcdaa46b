//! Table command implementation

use anyhow::Result;
use tb_core::{CoreError, Table, TableDraft};

use crate::cli::{
    GlobalArgs, NamedConfirmArgs, NamedOutputArgs, OutputArgs, OutputFormat, TableAddArgs,
    TableArgs, TableCommands, TableEditArgs,
};
use crate::commands::common::{confirmed, join_or_dash, print_json, print_table, Workspace};

/// Execute the table command
pub(crate) fn execute(args: &TableArgs, global: &GlobalArgs) -> Result<()> {
    match &args.command {
        TableCommands::Add(args) => add(args, global),
        TableCommands::Edit(args) => edit(args, global),
        TableCommands::Rm(args) => remove(args, global),
        TableCommands::Ls(args) => list(args, global),
        TableCommands::Show(args) => show(args, global),
    }
}

fn add(args: &TableAddArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let mut catalog = ws.load_catalog()?;

    let draft = TableDraft {
        name: args.name.clone(),
        schema: args.schema.clone(),
        description: args.description.clone(),
        table_type: args.table_type,
        jobs: args.jobs.clone(),
    };
    let table = catalog.add_table(draft)?;
    println!(
        "Added table '{}' ({}, quality {})",
        table.name, table.table_type, table.quality_score
    );
    ws.save_catalog(&catalog)
}

fn edit(args: &TableEditArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let mut catalog = ws.load_catalog()?;

    let existing = find(&catalog, &args.name)?;
    let mut draft = TableDraft::from(existing);
    if let Some(rename) = &args.rename {
        draft.name = rename.clone();
    }
    if let Some(schema) = &args.schema {
        draft.schema = schema.clone();
    }
    if let Some(description) = &args.description {
        draft.description = description.clone();
    }
    if let Some(table_type) = args.table_type {
        draft.table_type = table_type;
    }
    if args.clear_jobs {
        draft.jobs.clear();
    } else if !args.jobs.is_empty() {
        draft.jobs = args.jobs.clone();
    }

    let table = catalog.update_table(&args.name, draft)?;
    println!("Updated table '{}' (quality {})", table.name, table.quality_score);
    if table.name != args.name {
        log::warn!(
            "References to '{}' in transformations and source columns were not renamed",
            args.name
        );
    }
    ws.save_catalog(&catalog)
}

fn remove(args: &NamedConfirmArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let mut catalog = ws.load_catalog()?;

    let table = find(&catalog, &args.name)?;
    let referencing: Vec<String> = catalog
        .transformations()
        .iter()
        .filter(|t| {
            t.input_tables.iter().chain(&t.output_tables).any(|n| n == &args.name)
        })
        .map(|t| t.name.to_string())
        .collect();

    let mut preview = vec![format!(
        "Delete table '{}' with {} columns.",
        table.name,
        table.columns.len()
    )];
    if !referencing.is_empty() {
        preview.push(format!(
            "Still referenced by: {}",
            referencing.join(", ")
        ));
    }
    if !confirmed(&args.confirm, &preview) {
        return Ok(());
    }

    let removed = catalog.remove_table(&args.name)?;
    println!("Deleted table '{}'", removed.name);
    if !referencing.is_empty() {
        log::warn!(
            "Transformations still reference '{}': {}",
            removed.name,
            referencing.join(", ")
        );
    }
    ws.save_catalog(&catalog)
}

fn list(args: &OutputArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let catalog = ws.load_catalog()?;

    match args.output {
        OutputFormat::Json => print_json(catalog.tables()),
        OutputFormat::Table => {
            if catalog.tables().is_empty() {
                println!("No tables in catalog.");
                return Ok(());
            }
            let headers = ["NAME", "SCHEMA", "TYPE", "COLUMNS", "QUALITY", "JOBS"];
            let rows: Vec<Vec<String>> = catalog
                .tables()
                .iter()
                .map(|t| {
                    vec![
                        t.name.to_string(),
                        t.schema.clone(),
                        t.table_type.to_string(),
                        t.columns.len().to_string(),
                        t.quality_score.to_string(),
                        join_or_dash(&t.jobs),
                    ]
                })
                .collect();
            print_table(&headers, &rows);
            println!("\n{} tables", rows.len());
            Ok(())
        }
    }
}

fn show(args: &NamedOutputArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let catalog = ws.load_catalog()?;
    let table = find(&catalog, &args.name)?;

    match args.output.output {
        OutputFormat::Json => print_json(table),
        OutputFormat::Table => {
            println!("Table:        {}", table.name);
            println!("Schema:       {}", table.schema);
            println!("Type:         {}", table.table_type);
            println!("Description:  {}", table.description);
            println!("Jobs:         {}", join_or_dash(&table.jobs));
            println!("Quality:      {}", table.quality_score);
            println!("Last updated: {}", table.last_updated);

            if table.columns.is_empty() {
                println!("\nNo columns.");
                return Ok(());
            }
            println!();
            let headers = ["COLUMN", "TYPE", "SOURCES", "DESCRIPTION"];
            let rows: Vec<Vec<String>> = table
                .columns
                .iter()
                .map(|c| {
                    vec![
                        c.name.to_string(),
                        c.data_type.clone(),
                        join_or_dash(&c.source_columns),
                        c.description.clone(),
                    ]
                })
                .collect();
            print_table(&headers, &rows);
            Ok(())
        }
    }
}

fn find<'a>(catalog: &'a tb_core::Catalog, name: &str) -> Result<&'a Table> {
    catalog.table(name).ok_or_else(|| {
        CoreError::TableNotFound {
            name: name.to_string(),
        }
        .into()
    })
}
