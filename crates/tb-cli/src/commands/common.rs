//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tb_core::{load_catalog_or_empty, Catalog, Config, ViewOptions};

use crate::cli::{ConfirmArgs, GlobalArgs, RenderOverrides};

/// Loaded project configuration plus the resolved file locations
#[derive(Debug)]
pub(crate) struct Workspace {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
    pub catalog_path: PathBuf,
}

/// Location of the config file for these global args
pub(crate) fn config_path(global: &GlobalArgs) -> PathBuf {
    match &global.config {
        Some(path) => PathBuf::from(path),
        None => Config::path_in(Path::new(&global.project_dir)),
    }
}

impl Workspace {
    /// Load the config (defaults when there is no config file) and resolve
    /// the catalog path
    pub(crate) fn open(global: &GlobalArgs) -> Result<Self> {
        let root = PathBuf::from(&global.project_dir);
        let config_path = config_path(global);

        let config = if config_path.exists() {
            Config::load(&config_path).context("Failed to load configuration file")?
        } else if global.config.is_some() {
            anyhow::bail!("Config file not found: {}", config_path.display());
        } else {
            Config::default()
        };

        let catalog_path = match &global.catalog {
            Some(path) => PathBuf::from(path),
            None => config.catalog_path_absolute(&root),
        };
        log::debug!(
            "Project {} (config {}, catalog {})",
            root.display(),
            config_path.display(),
            catalog_path.display()
        );

        Ok(Self {
            root,
            config_path,
            config,
            catalog_path,
        })
    }

    /// Load the catalog; a missing file is an empty catalog
    pub(crate) fn load_catalog(&self) -> Result<Catalog> {
        Ok(load_catalog_or_empty(&self.catalog_path)?)
    }

    pub(crate) fn save_catalog(&self, catalog: &Catalog) -> Result<()> {
        tb_core::export_catalog(catalog, &self.catalog_path)?;
        Ok(())
    }

    pub(crate) fn save_config(&self) -> Result<()> {
        self.config
            .save(&self.config_path)
            .with_context(|| format!("Failed to write {}", self.config_path.display()))
    }
}

/// Second step of a destructive command. Prints what would happen and
/// returns false unless `--yes` was given.
pub(crate) fn confirmed(confirm: &ConfirmArgs, preview: &[String]) -> bool {
    if confirm.yes {
        return true;
    }
    for line in preview {
        println!("{}", line);
    }
    println!("Re-run with --yes to confirm.");
    false
}

/// Apply command-line render overrides on top of a base view
pub(crate) fn apply_overrides(mut view: ViewOptions, o: &RenderOverrides) -> Result<ViewOptions> {
    if o.columns {
        view.include_columns = true;
    }
    if o.tables {
        view.include_columns = false;
    }
    if let Some(focus) = &o.focus {
        view.focus_entity = Some(focus.trim().to_string());
    }
    if o.no_focus {
        view.focus_entity = None;
    }
    if let Some(layout) = o.layout {
        view.layout = layout;
    }
    if let Some(direction) = o.direction {
        view.direction = direction;
    }
    if let Some(theme) = o.theme {
        view.theme = theme;
    }
    if o.no_physics {
        view.physics = false;
    }
    if o.no_smooth {
        view.smooth_edges = false;
    }
    if let Some(spacing) = o.spacing {
        view.node_spacing = spacing;
    }
    view.validate()?;
    Ok(view)
}

/// Inline `--logic` text or the contents of `--logic-file`
pub(crate) fn read_logic(logic: Option<&str>, logic_file: Option<&str>) -> Result<Option<String>> {
    match (logic, logic_file) {
        (_, Some(path)) => std::fs::read_to_string(path)
            .map(Some)
            .with_context(|| format!("Failed to read logic file {}", path)),
        (Some(text), None) => Ok(Some(text.to_string())),
        (None, None) => Ok(None),
    }
}

/// Comma-joined list, or `-` when empty
pub(crate) fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Pretty JSON to stdout
pub(crate) fn print_json<T: serde::Serialize + ?Sized>(data: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(data).context("Failed to serialize output")?
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Table-printing utilities
// ---------------------------------------------------------------------------

/// Width of each column: the longest of the header and every cell.
pub(crate) fn calculate_column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }
    widths
}

/// Render a left-aligned table with a dashed separator under the header.
/// Columns are separated by two spaces; trailing padding is trimmed.
pub(crate) fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths = calculate_column_widths(headers, rows);
    let line = |cells: Vec<&str>| -> String {
        let parts: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
            .collect();
        parts.join("  ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&line(headers.to_vec()));
    out.push('\n');
    let separator: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&separator.join("  "));
    out.push('\n');
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    print!("{}", format_table(headers, rows));
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
