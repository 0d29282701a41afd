//! Installer configuration discovery and loading.

use crate::config::schema::InstallerConfig;
use crate::error::{ProvisionError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the optional project config.
pub const CONFIG_FILE_NAME: &str = "pyprov.yml";

/// Find the project config at `<root>/pyprov.yml`.
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into InstallerConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<InstallerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProvisionError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProvisionError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into InstallerConfig.
///
/// An empty file yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<InstallerConfig> {
    if content.trim().is_empty() {
        return Ok(InstallerConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ProvisionError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit override must exist. Without one, `pyprov.yml` in the project
/// root is used when present and the built-in defaults otherwise.
pub fn load_config(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<InstallerConfig> {
    if let Some(override_path) = config_override {
        tracing::debug!("Loading config override {}", override_path.display());
        return load_config_file(override_path);
    }

    match find_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading project config {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            Ok(InstallerConfig::default())
        }
    }
}
