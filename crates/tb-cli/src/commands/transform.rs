//! Transform command implementation

use anyhow::Result;
use tb_core::{Catalog, CoreError, Transformation, TransformationDraft};

use crate::cli::{
    GlobalArgs, NamedConfirmArgs, NamedOutputArgs, OutputArgs, OutputFormat, TransformAddArgs,
    TransformArgs, TransformCommands, TransformEditArgs,
};
use crate::commands::common::{
    confirmed, join_or_dash, print_json, print_table, read_logic, Workspace,
};

/// Execute the transform command
pub(crate) fn execute(args: &TransformArgs, global: &GlobalArgs) -> Result<()> {
    match &args.command {
        TransformCommands::Add(args) => add(args, global),
        TransformCommands::Edit(args) => edit(args, global),
        TransformCommands::Rm(args) => remove(args, global),
        TransformCommands::Ls(args) => list(args, global),
        TransformCommands::Show(args) => show(args, global),
    }
}

fn add(args: &TransformAddArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let mut catalog = ws.load_catalog()?;

    let logic =
        read_logic(Some(args.logic.as_str()), args.logic_file.as_deref())?.unwrap_or_default();
    let draft = TransformationDraft {
        name: args.name.clone(),
        transformation_type: args.transformation_type,
        input_tables: args.inputs.clone(),
        output_tables: args.outputs.clone(),
        logic,
        description: args.description.clone(),
        jobs: args.jobs.clone(),
    };
    let t = catalog.add_transformation(draft)?;
    println!(
        "Added transformation '{}' ({}): {} -> {}",
        t.name,
        t.transformation_type,
        t.input_tables.join(", "),
        t.output_tables.join(", ")
    );
    warn_unknown_tables(&catalog, &args.name);
    ws.save_catalog(&catalog)
}

fn edit(args: &TransformEditArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let mut catalog = ws.load_catalog()?;

    let mut draft = TransformationDraft::from(find(&catalog, &args.name)?);
    if let Some(rename) = &args.rename {
        draft.name = rename.clone();
    }
    if let Some(kind) = args.transformation_type {
        draft.transformation_type = kind;
    }
    if !args.inputs.is_empty() {
        draft.input_tables = args.inputs.clone();
    }
    if !args.outputs.is_empty() {
        draft.output_tables = args.outputs.clone();
    }
    if let Some(logic) = read_logic(args.logic.as_deref(), args.logic_file.as_deref())? {
        draft.logic = logic;
    }
    if let Some(description) = &args.description {
        draft.description = description.clone();
    }
    if args.clear_jobs {
        draft.jobs.clear();
    } else if !args.jobs.is_empty() {
        draft.jobs = args.jobs.clone();
    }

    let new_name = catalog.update_transformation(&args.name, draft)?.name.to_string();
    println!("Updated transformation '{}'", new_name);
    warn_unknown_tables(&catalog, &new_name);
    ws.save_catalog(&catalog)
}

fn remove(args: &NamedConfirmArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let mut catalog = ws.load_catalog()?;

    let t = find(&catalog, &args.name)?;
    let preview = vec![format!(
        "Delete transformation '{}' with {} column mappings.",
        t.name,
        t.column_mappings.len()
    )];
    if !confirmed(&args.confirm, &preview) {
        return Ok(());
    }

    let removed = catalog.remove_transformation(&args.name)?;
    println!("Deleted transformation '{}'", removed.name);
    ws.save_catalog(&catalog)
}

fn list(args: &OutputArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let catalog = ws.load_catalog()?;

    match args.output {
        OutputFormat::Json => print_json(catalog.transformations()),
        OutputFormat::Table => {
            if catalog.transformations().is_empty() {
                println!("No transformations in catalog.");
                return Ok(());
            }
            let headers = ["NAME", "TYPE", "INPUTS", "OUTPUTS", "MAPPINGS", "JOBS"];
            let rows: Vec<Vec<String>> = catalog
                .transformations()
                .iter()
                .map(|t| {
                    vec![
                        t.name.to_string(),
                        t.transformation_type.to_string(),
                        t.input_tables.join(", "),
                        t.output_tables.join(", "),
                        t.column_mappings.len().to_string(),
                        join_or_dash(&t.jobs),
                    ]
                })
                .collect();
            print_table(&headers, &rows);
            println!("\n{} transformations", rows.len());
            Ok(())
        }
    }
}

fn show(args: &NamedOutputArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;
    let catalog = ws.load_catalog()?;
    let t = find(&catalog, &args.name)?;

    match args.output.output {
        OutputFormat::Json => print_json(t),
        OutputFormat::Table => {
            println!("Transformation: {}", t.name);
            println!("Type:           {}", t.transformation_type);
            println!("Inputs:         {}", t.input_tables.join(", "));
            println!("Outputs:        {}", t.output_tables.join(", "));
            println!("Description:    {}", t.description);
            println!("Jobs:           {}", join_or_dash(&t.jobs));
            println!("Created:        {}", t.created_date);
            if !t.logic.is_empty() {
                println!("\n{}", t.logic);
            }

            if t.column_mappings.is_empty() {
                println!("\nNo column mappings.");
                return Ok(());
            }
            println!();
            let headers = ["SOURCE", "TARGET", "RULE"];
            let rows: Vec<Vec<String>> = t
                .column_mappings
                .iter()
                .map(|m| vec![m.source_id(), m.target_id(), m.transformation_rule.clone()])
                .collect();
            print_table(&headers, &rows);
            Ok(())
        }
    }
}

fn find<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a Transformation> {
    catalog.transformation(name).ok_or_else(|| {
        CoreError::TransformationNotFound {
            name: name.to_string(),
        }
        .into()
    })
}

/// Input and output tables may dangle; flag the ones not in the catalog
fn warn_unknown_tables(catalog: &Catalog, name: &str) {
    let Some(t) = catalog.transformation(name) else {
        return;
    };
    for table in t.input_tables.iter().chain(&t.output_tables) {
        if catalog.table(table).is_none() {
            log::warn!("Table '{}' used by '{}' is not in the catalog", table, t.name);
        }
    }
}
