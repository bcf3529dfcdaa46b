//! Project configuration from tributary.yml

use crate::error::{CoreError, CoreResult};
use crate::view::ViewOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Config file name looked up in the project directory
pub const CONFIG_FILE: &str = "tributary.yml";

/// Alternate spelling also accepted on load
const CONFIG_FILE_ALT: &str = "tributary.yaml";

/// Project configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name, used as the rendered page title
    #[serde(default = "default_name")]
    pub name: String,

    /// Catalog document path, relative to the project directory
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Options used when a render names no view
    #[serde(default)]
    pub render: ViewOptions,

    /// Saved views by name
    #[serde(default)]
    pub views: BTreeMap<String, ViewOptions>,

    #[serde(default)]
    pub screenshot: ScreenshotConfig,
}

/// Headless browser settings for PNG export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScreenshotConfig {
    /// Browser binary; when unset a list of common Chromium names is tried
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,

    #[serde(default = "default_window_width")]
    pub window_width: u32,

    #[serde(default = "default_window_height")]
    pub window_height: u32,
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        Self {
            browser: None,
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

fn default_name() -> String {
    "tributary".to_string()
}

fn default_catalog_path() -> String {
    "lineage.json".to_string()
}

fn default_window_width() -> u32 {
    1920
}

fn default_window_height() -> u32 {
    1080
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            catalog_path: default_catalog_path(),
            render: ViewOptions::default(),
            views: BTreeMap::new(),
            screenshot: ScreenshotConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
                path: path.display().to_string(),
                source: e,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Path of the config file in `dir`, whether or not it exists.
    ///
    /// Prefers `tributary.yml`, falling back to an existing `tributary.yaml`.
    pub fn path_in(dir: &Path) -> PathBuf {
        let yml = dir.join(CONFIG_FILE);
        let yaml = dir.join(CONFIG_FILE_ALT);
        if !yml.exists() && yaml.exists() {
            yaml
        } else {
            yml
        }
    }

    /// Load configuration from a project directory; no file means defaults
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let path = Self::path_in(dir);
        if path.exists() {
            Self::load(&path)
        } else {
            log::debug!("No {} in {}, using defaults", CONFIG_FILE, dir.display());
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }
        if self.catalog_path.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "catalog_path cannot be empty".to_string(),
            });
        }
        if self.screenshot.window_width == 0 || self.screenshot.window_height == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "screenshot window size must be non-zero".to_string(),
            });
        }
        self.render.validate()?;
        for (name, view) in &self.views {
            view.validate().map_err(|e| CoreError::ConfigInvalid {
                message: format!("view '{}': {}", name, e),
            })?;
        }
        Ok(())
    }

    /// Write the configuration as YAML
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        self.validate()?;
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Catalog path resolved against the project directory
    pub fn catalog_path_absolute(&self, project_dir: &Path) -> PathBuf {
        let path = Path::new(&self.catalog_path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_dir.join(path)
        }
    }

    /// Look up a saved view
    pub fn view(&self, name: &str) -> CoreResult<&ViewOptions> {
        self.views.get(name).ok_or_else(|| CoreError::ViewNotFound {
            name: name.to_string(),
        })
    }

    /// Store a view under `name`, replacing any previous one.
    /// Returns true when a view was replaced.
    pub fn save_view(&mut self, name: &str, view: ViewOptions) -> CoreResult<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::MissingField {
                entity: "View",
                field: "name",
            });
        }
        view.validate()?;
        Ok(self.views.insert(name.to_string(), view).is_some())
    }

    pub fn remove_view(&mut self, name: &str) -> CoreResult<ViewOptions> {
        self.views
            .remove(name)
            .ok_or_else(|| CoreError::ViewNotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
