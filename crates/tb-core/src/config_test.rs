use super::*;
use crate::view::{Layout, Theme};
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.catalog_path, "lineage.json");
    assert_eq!(config.screenshot.window_width, 1920);
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE),
        r#"
name: sales_lineage
catalog_path: data/catalog.json
render:
  layout: circular
  node_spacing: 150
views:
  columns_dark: { include_columns: true, theme: dark }
screenshot:
  browser: chromium
  window_width: 1280
  window_height: 720
"#,
    )
    .unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "sales_lineage");
    assert_eq!(config.render.layout, Layout::Circular);
    assert_eq!(config.render.node_spacing, 150);
    let view = config.view("columns_dark").unwrap();
    assert!(view.include_columns);
    assert_eq!(view.theme, Theme::Dark);
    assert_eq!(config.screenshot.browser.as_deref(), Some("chromium"));
    assert_eq!(
        config.catalog_path_absolute(dir.path()),
        dir.path().join("data/catalog.json")
    );
}

#[test]
fn test_yaml_extension_fallback() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("tributary.yaml"), "name: alt\n").unwrap();
    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "alt");
}

#[test]
fn test_unknown_key_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(&path, "name: x\ncatalog: y\n").unwrap();
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, CoreError::ConfigParseError { .. }));
}

#[test]
fn test_invalid_values_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE);

    std::fs::write(&path, "render:\n  node_spacing: 10\n").unwrap();
    assert!(matches!(
        Config::load(&path).unwrap_err(),
        CoreError::ConfigInvalid { .. }
    ));

    std::fs::write(&path, "catalog_path: ''\n").unwrap();
    assert!(Config::load(&path).is_err());

    std::fs::write(&path, "screenshot:\n  window_width: 0\n").unwrap();
    assert!(Config::load(&path).is_err());

    std::fs::write(&path, "views:\n  tight:\n    node_spacing: 500\n").unwrap();
    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("view 'tight'"));
}

#[test]
fn test_absolute_catalog_path_kept() {
    let dir = TempDir::new().unwrap();
    let absolute = dir.path().join("elsewhere.json");
    let config = Config {
        catalog_path: absolute.display().to_string(),
        ..Default::default()
    };
    assert_eq!(config.catalog_path_absolute(Path::new("/tmp/project")), absolute);
}

#[test]
fn test_save_and_reload_views() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    let mut config = Config::default();

    let view = ViewOptions {
        include_columns: true,
        focus_entity: Some("orders".into()),
        ..Default::default()
    };
    assert!(!config.save_view("orders_cols", view.clone()).unwrap());
    assert!(config.save_view("orders_cols", view.clone()).unwrap());
    config.save(&path).unwrap();

    let mut reloaded = Config::load(&path).unwrap();
    assert_eq!(reloaded.view("orders_cols").unwrap(), &view);

    reloaded.remove_view("orders_cols").unwrap();
    let err = reloaded.remove_view("orders_cols").unwrap_err();
    assert!(err.is_lookup_miss());
    assert!(reloaded.view("orders_cols").unwrap_err().is_lookup_miss());
}

#[test]
fn test_save_view_validates() {
    let mut config = Config::default();
    let bad = ViewOptions {
        node_spacing: 1,
        ..Default::default()
    };
    assert!(config.save_view("bad", bad).is_err());
    assert!(config.save_view("  ", ViewOptions::default()).is_err());
    assert!(config.views.is_empty());
}
