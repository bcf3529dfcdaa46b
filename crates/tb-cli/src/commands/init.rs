//! Init command implementation

use anyhow::{Context, Result};
use std::path::Path;
use tb_core::{sample_catalog, Catalog, Config};

use crate::cli::{GlobalArgs, InitArgs};
use crate::commands::common::{config_path, Workspace};

/// Execute the init command
pub(crate) fn execute(args: &InitArgs, global: &GlobalArgs) -> Result<()> {
    let root = Path::new(&global.project_dir);
    let config_file = config_path(global);

    if config_file.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            config_file.display()
        );
    }
    std::fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory {}", root.display()))?;

    let mut config = Config::default();
    if let Some(name) = &args.name {
        config.name = name.trim().to_string();
    } else if let Some(dir_name) = root
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
    {
        config.name = dir_name;
    }
    config.validate()?;

    let catalog_path = match &global.catalog {
        Some(path) => Path::new(path).to_path_buf(),
        None => config.catalog_path_absolute(root),
    };
    let ws = Workspace {
        root: root.to_path_buf(),
        config_path: config_file,
        config,
        catalog_path,
    };
    ws.save_config()?;
    println!("Wrote {}", ws.config_path.display());

    if args.sample {
        ws.save_catalog(&sample_catalog())?;
        println!("Wrote sample catalog to {}", ws.catalog_path.display());
    } else if ws.catalog_path.exists() {
        println!("Keeping existing catalog {}", ws.catalog_path.display());
    } else {
        ws.save_catalog(&Catalog::new())?;
        println!("Wrote empty catalog to {}", ws.catalog_path.display());
    }
    Ok(())
}
