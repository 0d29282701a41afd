//! Installer configuration.
//!
//! The installer needs no configuration file: [`InstallerConfig::default`]
//! describes the standard layout. A `pyprov.yml` in the project root (or a
//! file passed with `--config`) overrides individual fields.
//!
//! # Example
//!
//! ```
//! use pyprov::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("pyprov.yml"), "app_name: Agreement Closing").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.app_name.as_deref(), Some("Agreement Closing"));
//! assert_eq!(config.env_dir, std::path::PathBuf::from("env"));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::InstallerConfig;
