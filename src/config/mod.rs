//! Configuration module
//!
//! Loads the indexer path, searchd connection and index label mapping from
//! YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::info;

/// Global settings instance
static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Initialize global settings from a file, with env overrides applied
pub fn init_from_file<P: AsRef<Path>>(path: P) -> Result<&'static Settings> {
    let mut settings = Settings::from_file(path)?;
    settings.merge_env();
    install(settings)
}

/// Initialize global settings with defaults and env overrides
pub fn init_default() -> Result<&'static Settings> {
    let mut settings = Settings::default();
    settings.merge_env();
    install(settings)
}

/// Initialize from `explicit`, else the first existing default path, else defaults
pub fn init(explicit: Option<&Path>) -> Result<&'static Settings> {
    match explicit.map(Path::to_path_buf).or_else(discover) {
        Some(path) => {
            info!("Loading settings from {}", path.display());
            init_from_file(path)
        }
        None => {
            info!("Using built-in settings");
            init_default()
        }
    }
}

fn install(settings: Settings) -> Result<&'static Settings> {
    settings.validate()?;
    SETTINGS
        .try_insert(settings)
        .map_err(|_| anyhow::anyhow!("Settings already initialized"))
}

/// Get a reference to the global settings, if initialized
pub fn get() -> Option<&'static Settings> {
    SETTINGS.get()
}

/// Check if settings have been initialized
pub fn is_initialized() -> bool {
    SETTINGS.get().is_some()
}

/// Places searched for `sphinx_search.yml`, in order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("sphinx_search.yml"),
        PathBuf::from("config/sphinx_search.yml"),
        PathBuf::from("/etc/sphinx_search/sphinx_search.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("sphinx-search/sphinx_search.yml"));
    }
    paths
}

/// First default path that exists
pub fn discover() -> Option<PathBuf> {
    default_paths().into_iter().find(|p| p.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_paths_order() {
        let paths = default_paths();
        assert_eq!(paths[0], PathBuf::from("sphinx_search.yml"));
        assert_eq!(paths[1], PathBuf::from("config/sphinx_search.yml"));
    }

    #[test]
    #[serial]
    fn test_global_settings_install_once() {
        let path = std::env::temp_dir().join(format!(
            "sphinx_search_global_{}.yml",
            std::process::id()
        ));
        std::fs::write(&path, "indexes:\n  Articles: articles_idx\n").unwrap();

        let settings = init(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(is_initialized());
        assert_eq!(settings.indexes["Articles"], "articles_idx");
        assert_eq!(get().unwrap().indexes.len(), 1);
        assert!(init_default().is_err());
    }
}
