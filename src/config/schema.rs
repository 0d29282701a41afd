//! Installer configuration schema.
//!
//! Every field has a default matching the layout the downstream application
//! expects, so the installer runs without any configuration file at all.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for pyprov.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerConfig {
    /// Display name shown in the installer header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Virtual environment directory (relative to project root)
    pub env_dir: PathBuf,

    /// Dependency manifest passed to `pip install -r`
    pub requirements: PathBuf,

    /// Packages upgraded in the fresh environment before the manifest
    pub bootstrap_packages: Vec<String>,

    /// Working directories created after provisioning, in order
    pub directories: Vec<PathBuf>,

    /// Logging document consumed by the downstream application
    pub log_config: PathBuf,

    /// Wait for a keypress before exiting an interactive run
    pub pause_on_exit: bool,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            app_name: None,
            env_dir: PathBuf::from("env"),
            requirements: PathBuf::from("requirements.txt"),
            bootstrap_packages: vec!["pip".to_string(), "setuptools".to_string()],
            directories: default_directories(),
            log_config: PathBuf::from("log_config.yaml"),
            pause_on_exit: true,
        }
    }
}

fn default_directories() -> Vec<PathBuf> {
    ["data", "dump", "temp/data", "temp/doc", "temp/report"]
        .iter()
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_expected_layout() {
        let config = InstallerConfig::default();
        assert_eq!(config.env_dir, PathBuf::from("env"));
        assert_eq!(config.requirements, PathBuf::from("requirements.txt"));
        assert_eq!(config.bootstrap_packages, vec!["pip", "setuptools"]);
        assert_eq!(
            config.directories,
            vec![
                PathBuf::from("data"),
                PathBuf::from("dump"),
                PathBuf::from("temp/data"),
                PathBuf::from("temp/doc"),
                PathBuf::from("temp/report"),
            ]
        );
        assert!(config.pause_on_exit);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config: InstallerConfig =
            serde_yaml::from_str("env_dir: .venv\npause_on_exit: false").unwrap();
        assert_eq!(config.env_dir, PathBuf::from(".venv"));
        assert!(!config.pause_on_exit);
        assert_eq!(config.directories.len(), 5);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<InstallerConfig, _> = serde_yaml::from_str("env_directory: venv");
        assert!(result.is_err());
    }

    #[test]
    fn empty_document_is_default() {
        let config: InstallerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, InstallerConfig::default());
    }
}
