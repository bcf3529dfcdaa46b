//! Lineage command implementation

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tb_core::build_graph;

use crate::cli::{GlobalArgs, LineageArgs, LineageFormat};
use crate::commands::common::{apply_overrides, Workspace};

/// Default HTML output file, relative to the project directory
const DEFAULT_HTML_FILE: &str = "lineage.html";

/// Execute the lineage command
pub(crate) fn execute(args: &LineageArgs, global: &GlobalArgs) -> Result<()> {
    if args.screenshot.is_some() && args.format != LineageFormat::Html {
        anyhow::bail!("--screenshot requires --format html");
    }

    let ws = Workspace::open(global)?;
    let catalog = ws.load_catalog()?;

    let base = match &args.view {
        Some(name) => ws.config.view(name)?.clone(),
        None => ws.config.render.clone(),
    };
    let view = apply_overrides(base, &args.overrides)?;

    let focus = view.focus_entity.as_deref().filter(|f| !f.is_empty());
    if let Some(focus) = focus {
        if !catalog.has_entity(focus) {
            log::warn!("Focus '{}' matches no table or column; the graph will be empty", focus);
        }
    }

    let graph = build_graph(
        catalog.tables(),
        catalog.transformations(),
        view.include_columns,
        focus,
    );
    let data = graph.to_data();
    log::debug!(
        "Rendering {} nodes and {} edges as {:?}",
        data.nodes.len(),
        data.edges.len(),
        args.format
    );

    match args.format {
        LineageFormat::Html => {
            let out = args
                .out
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(|| ws.root.join(DEFAULT_HTML_FILE));
            let html = tb_render::render_html(&data, &view, &ws.config.name)?;
            write_output(&out, &html)?;
            println!(
                "Wrote lineage graph ({} nodes, {} edges) to {}",
                data.nodes.len(),
                data.edges.len(),
                out.display()
            );

            if let Some(png) = &args.screenshot {
                match tb_render::export_screenshot(&out, Path::new(png), &ws.config.screenshot) {
                    Ok(()) => println!("Saved screenshot to {}", png),
                    Err(e) => log::warn!("Screenshot skipped: {}", e),
                }
            }
            if args.open {
                open_in_browser(&out);
            }
        }
        LineageFormat::Dot => {
            let dot = tb_render::render_dot(&data, &view);
            emit(args.out.as_deref(), &dot)?;
        }
        LineageFormat::Json => {
            let json = tb_render::render_json(&data)?;
            emit(args.out.as_deref(), &json)?;
        }
    }

    if args.open && args.format != LineageFormat::Html {
        log::warn!("--open only applies to --format html");
    }
    Ok(())
}

/// Write to `out` when given, stdout otherwise
fn emit(out: Option<&str>, content: &str) -> Result<()> {
    match out {
        Some(path) => {
            write_output(Path::new(path), content)?;
            println!("Wrote {}", path);
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(feature = "browser-open")]
fn open_in_browser(path: &Path) {
    if let Err(e) = open::that(path) {
        log::warn!("Could not open browser: {}", e);
    }
}

#[cfg(not(feature = "browser-open"))]
fn open_in_browser(path: &Path) {
    log::warn!(
        "Built without browser-open; open {} manually",
        path.display()
    );
}
