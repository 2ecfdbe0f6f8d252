//! File-based config discovery
//!
//! Handles finding and loading modularize configuration files from the
//! filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::ModularizeConfig;
use crate::error::{ConfigError, Result};

const TOML_CONFIG: &str = "modularize.toml";
const JSON_CONFIG: &str = "modularize.json";
const PACKAGE_JSON: &str = "package.json";
const PACKAGE_FIELD: &str = "modularize";

/// File-based configuration discovery
///
/// Searches for configuration files in conventional locations and loads
/// them. Library users can build a `ModularizeConfig` with
/// `ModularizeConfig::from_value()` directly.
///
/// # Example
///
/// ```no_run
/// use modularize_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. modularize.toml
    /// 2. modularize.json
    /// 3. package.json (modularize field)
    pub fn find(&self) -> Option<PathBuf> {
        for name in [TOML_CONFIG, JSON_CONFIG] {
            let path = self.root.join(name);
            if path.exists() {
                return Some(path);
            }
        }

        let pkg_path = self.root.join(PACKAGE_JSON);
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed: Value = serde_json::from_str(&content).ok()?;
        match parsed.get(PACKAGE_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<ModularizeConfig> {
        let path = self.find().ok_or_else(|| ConfigError::NotFound {
            root: self.root.clone(),
        })?;
        load_from(&path)
    }
}

/// Load config from a specific file path
///
/// The format follows the file name: `package.json` reads its `modularize`
/// field, `.toml` and `.json` files are read whole.
pub fn load_from(path: &Path) -> Result<ModularizeConfig> {
    debug!(path = %path.display(), "loading config");

    if path.file_name() == Some(std::ffi::OsStr::new(PACKAGE_JSON)) {
        return load_from_package_json(path);
    }

    let content = fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => {
            let toml_val: toml::Value =
                toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                    field: "toml".to_string(),
                    hint: Some(format!("Invalid TOML syntax: {}", e)),
                })?;

            let value = serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
                field: "toml".to_string(),
                hint: Some(format!("TOML to JSON conversion failed: {}", e)),
            })?;

            ModularizeConfig::from_value(value)
        }
        Some("json") => {
            let value: Value =
                serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                    field: "json".to_string(),
                    hint: Some(format!("Invalid JSON: {}", e)),
                })?;
            ModularizeConfig::from_value(value)
        }
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn load_from_package_json(path: &Path) -> Result<ModularizeConfig> {
    let content = fs::read_to_string(path)?;

    let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: PACKAGE_JSON.to_string(),
        hint: Some(format!("Invalid JSON: {}", e)),
    })?;

    let field = parsed
        .get(PACKAGE_FIELD)
        .ok_or_else(|| ConfigError::InvalidValue {
            field: PACKAGE_FIELD.to_string(),
            hint: Some("Add a 'modularize' field to your package.json".to_string()),
        })?;

    if field.is_null() {
        return Err(ConfigError::InvalidValue {
            field: PACKAGE_FIELD.to_string(),
            hint: Some("The 'modularize' field cannot be null".to_string()),
        });
    }

    ModularizeConfig::from_value(field.clone())
}

/// Discover and load config from current directory (convenience function)
///
/// # Example
///
/// ```no_run
/// use modularize_config::discover;
///
/// let config = discover().unwrap();
/// ```
pub fn discover() -> Result<ModularizeConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        assert!(discovery.find().is_none());
    }

    #[test]
    fn find_prefers_toml_over_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(JSON_CONFIG), "{}").unwrap();
        fs::write(dir.path().join(TOML_CONFIG), "").unwrap();

        let discovery = ConfigDiscovery::new(dir.path());
        assert_eq!(discovery.find().unwrap(), dir.path().join(TOML_CONFIG));
    }

    #[test]
    fn find_skips_package_json_without_field() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PACKAGE_JSON), r#"{"name": "app"}"#).unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn load_returns_not_found_when_no_config() {
        let dir = TempDir::new().unwrap();
        let result = ConfigDiscovery::new(dir.path()).load();
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound { .. }));
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("modularize.yaml");
        fs::write(&path, "libraries: {}").unwrap();
        assert!(matches!(
            load_from(&path).unwrap_err(),
            ConfigError::UnsupportedFormat { .. }
        ));
    }

    #[test]
    fn load_reports_toml_syntax_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TOML_CONFIG);
        fs::write(&path, "[libraries\n").unwrap();
        assert!(matches!(
            load_from(&path).unwrap_err(),
            ConfigError::InvalidValue { .. }
        ));
    }
}
