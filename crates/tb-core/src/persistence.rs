//! Catalog import and export as a JSON document
//!
//! The document has top-level `tables` and `transformations` arrays with
//! columns and column mappings nested inline, plus a `format_version`.
//! Exports go through a temp file and a rename so a failed write never
//! leaves a truncated document behind.

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::table::Table;
use crate::transformation::Transformation;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current document format version
pub const FORMAT_VERSION: u32 = 1;

fn default_format_version() -> u32 {
    FORMAT_VERSION
}

/// On-disk catalog document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Absent in documents written before versioning; read as 1
    #[serde(default = "default_format_version")]
    pub format_version: u32,

    #[serde(default)]
    pub tables: Vec<Table>,

    #[serde(default)]
    pub transformations: Vec<Transformation>,
}

/// Borrowed view used for writing without cloning the catalog
#[derive(Serialize)]
struct DocumentRef<'a> {
    format_version: u32,
    tables: &'a [Table],
    transformations: &'a [Transformation],
}

impl CatalogDocument {
    /// Convert into a catalog, recomputing quality scores
    pub fn into_catalog(self) -> Catalog {
        if self.format_version > FORMAT_VERSION {
            log::warn!(
                "Catalog document has format_version {}, newer than supported {}; reading anyway",
                self.format_version,
                FORMAT_VERSION
            );
        }
        Catalog::from_parts(self.tables, self.transformations)
    }
}

/// Serialize a catalog to pretty JSON
pub fn catalog_to_json(catalog: &Catalog) -> CoreResult<String> {
    let doc = DocumentRef {
        format_version: FORMAT_VERSION,
        tables: catalog.tables(),
        transformations: catalog.transformations(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Write the catalog to `path`, creating parent directories as needed
pub fn export_catalog(catalog: &Catalog, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CoreError::IoWithPath {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let json = catalog_to_json(catalog)?;
    let temp_path = path.with_extension(format!("json.{}.tmp", std::process::id()));
    std::fs::write(&temp_path, &json).map_err(|e| CoreError::IoWithPath {
        path: temp_path.display().to_string(),
        source: e,
    })?;
    std::fs::rename(&temp_path, path).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        }
    })?;

    log::info!(
        "Exported {} tables and {} transformations to {}",
        catalog.tables().len(),
        catalog.transformations().len(),
        path.display()
    );
    Ok(())
}

/// Parse a catalog document held in memory. `origin` names it in errors.
pub fn catalog_from_json(json: &str, origin: &str) -> CoreResult<Catalog> {
    let doc: CatalogDocument =
        serde_json::from_str(json).map_err(|e| CoreError::InvalidDocument {
            path: origin.to_string(),
            source: e,
        })?;
    Ok(doc.into_catalog())
}

/// Read and parse the catalog at `path`
pub fn load_catalog(path: &Path) -> CoreResult<Catalog> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })?;
    let catalog = catalog_from_json(&content, &path.display().to_string())?;
    log::debug!(
        "Loaded {} tables and {} transformations from {}",
        catalog.tables().len(),
        catalog.transformations().len(),
        path.display()
    );
    Ok(catalog)
}

/// Like [`load_catalog`], but a missing file yields an empty catalog
pub fn load_catalog_or_empty(path: &Path) -> CoreResult<Catalog> {
    match load_catalog(path) {
        Err(CoreError::FileNotFound { .. }) => {
            log::debug!("No catalog at {}, starting empty", path.display());
            Ok(Catalog::new())
        }
        other => other,
    }
}

impl Catalog {
    /// Replace the whole catalog with the document at `path`.
    ///
    /// The document is parsed in full before the swap; on error `self` is
    /// left as it was.
    pub fn replace_from(&mut self, path: &Path) -> CoreResult<()> {
        let imported = load_catalog(path)?;
        log::info!(
            "Imported {} tables and {} transformations from {}",
            imported.tables().len(),
            imported.transformations().len(),
            path.display()
        );
        *self = imported;
        Ok(())
    }
}

#[cfg(test)]
#[path = "persistence_test.rs"]
mod tests;
