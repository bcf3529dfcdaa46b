//! View command implementation

use anyhow::Result;

use crate::cli::{
    GlobalArgs, OutputArgs, OutputFormat, ViewArgs, ViewCommands, ViewRmArgs, ViewSaveArgs,
};
use crate::commands::common::{apply_overrides, print_json, print_table, Workspace};

/// Execute the view command
pub(crate) fn execute(args: &ViewArgs, global: &GlobalArgs) -> Result<()> {
    match &args.command {
        ViewCommands::Save(args) => save(args, global),
        ViewCommands::Ls(args) => list(args, global),
        ViewCommands::Rm(args) => remove(args, global),
    }
}

fn save(args: &ViewSaveArgs, global: &GlobalArgs) -> Result<()> {
    let mut ws = Workspace::open(global)?;

    let base = match &args.from {
        Some(name) => ws.config.view(name)?.clone(),
        None => ws.config.render.clone(),
    };
    let view = apply_overrides(base, &args.overrides)?;
    let replaced = ws.config.save_view(&args.name, view)?;
    ws.save_config()?;

    if replaced {
        println!("Replaced view '{}'", args.name);
    } else {
        println!("Saved view '{}'", args.name);
    }
    Ok(())
}

fn list(args: &OutputArgs, global: &GlobalArgs) -> Result<()> {
    let ws = Workspace::open(global)?;

    match args.output {
        OutputFormat::Json => print_json(&ws.config.views),
        OutputFormat::Table => {
            if ws.config.views.is_empty() {
                println!("No saved views.");
                return Ok(());
            }
            let headers = ["NAME", "LEVEL", "LAYOUT", "DIRECTION", "THEME", "SPACING", "FOCUS"];
            let rows: Vec<Vec<String>> = ws
                .config
                .views
                .iter()
                .map(|(name, v)| {
                    vec![
                        name.clone(),
                        (if v.include_columns { "columns" } else { "tables" }).to_string(),
                        v.layout.to_string(),
                        if v.is_hierarchical() {
                            v.direction.to_string()
                        } else {
                            "-".to_string()
                        },
                        v.theme.to_string(),
                        v.node_spacing.to_string(),
                        v.focus_entity.clone().unwrap_or_else(|| "-".to_string()),
                    ]
                })
                .collect();
            print_table(&headers, &rows);
            Ok(())
        }
    }
}

fn remove(args: &ViewRmArgs, global: &GlobalArgs) -> Result<()> {
    let mut ws = Workspace::open(global)?;
    ws.config.remove_view(&args.name)?;
    ws.save_config()?;
    println!("Deleted view '{}'", args.name);
    Ok(())
}
