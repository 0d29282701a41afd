//! The default logging document, embedded at compile time.

use std::path::{Path, PathBuf};

use include_dir::{include_dir, Dir};

use super::loader::{load_log_config_str, LogConfigDocument, LOG_CONFIG_FILE_NAME};
use super::schema::LoggingConfig;
use crate::error::{ProvisionError, Result};

/// Embedded assets directory.
static ASSETS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

fn embedded_path() -> PathBuf {
    Path::new("assets").join(LOG_CONFIG_FILE_NAME)
}

/// Text of the default document.
pub fn default_source() -> Result<&'static str> {
    let file = ASSETS_DIR
        .get_file(LOG_CONFIG_FILE_NAME)
        .ok_or_else(|| ProvisionError::ConfigNotFound {
            path: embedded_path(),
        })?;

    file.contents_utf8()
        .ok_or_else(|| ProvisionError::ConfigParseError {
            path: embedded_path(),
            message: "Invalid UTF-8".to_string(),
        })
}

/// The default document, parsed and validated.
pub fn default_config() -> Result<LoggingConfig> {
    load_log_config_str(default_source()?, &embedded_path())
}

/// The default document with its source, for linting.
pub fn default_document() -> Result<LogConfigDocument> {
    LogConfigDocument::parse(default_source()?, &embedded_path())
}

/// The project's document at `file` when present, otherwise the default.
///
/// A relative `file` is resolved against `project_root`.
pub fn project_or_default_document(project_root: &Path, file: &Path) -> Result<LogConfigDocument> {
    let path = project_root.join(file);
    if path.is_file() {
        tracing::debug!("Using project logging config {}", path.display());
        LogConfigDocument::read(&path)
    } else {
        tracing::debug!("No {} in project, using default", file.display());
        default_document()
    }
}
