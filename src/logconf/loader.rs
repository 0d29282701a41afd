//! Logging document loading.

use std::fs;
use std::path::{Path, PathBuf};

use super::schema::LoggingConfig;
use super::validator::validate;
use crate::error::{ProvisionError, Result};

/// File name of a project's logging document.
pub const LOG_CONFIG_FILE_NAME: &str = "log_config.yaml";

/// A parsed document together with its source text.
///
/// Lint rules look at the source for things the typed model normalizes
/// away, such as which spelling of a key was used.
#[derive(Debug, Clone)]
pub struct LogConfigDocument {
    /// Where the document came from.
    pub path: PathBuf,
    /// Raw YAML text.
    pub source: String,
    /// Untyped YAML tree.
    pub raw: serde_yaml::Value,
    /// Typed document.
    pub config: LoggingConfig,
}

impl LogConfigDocument {
    /// Parse without validating references.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if the text is not a logging document.
    pub fn parse(source: &str, path: &Path) -> Result<Self> {
        let config = parse_log_config(source, path)?;
        let raw = serde_yaml::from_str(source).map_err(|e| parse_error(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            source: source.to_string(),
            raw,
            config,
        })
    }

    /// Read and parse a file without validating references.
    pub fn read(path: &Path) -> Result<Self> {
        let source = read_source(path)?;
        Self::parse(&source, path)
    }

    /// Keys written under the entry `name` of a top-level `section`.
    pub fn entry_keys(&self, section: &str, name: &str) -> Vec<String> {
        self.raw
            .get(section)
            .and_then(|s| s.get(name))
            .and_then(serde_yaml::Value::as_mapping)
            .map(|m| {
                m.keys()
                    .filter_map(|k| k.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 1-based line where the entry `name` of `section` is defined.
    ///
    /// Found by scanning the text, so flow-style documents yield `None`.
    pub fn line_of(&self, section: &str, name: &str) -> Option<usize> {
        let section_header = format!("{}:", section);
        let entry_header = format!("{}:", name);
        let mut in_section = false;

        for (idx, line) in self.source.lines().enumerate() {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let indented = line.starts_with([' ', '\t']);
            if !indented {
                in_section = line.trim_end() == section_header;
                continue;
            }
            if in_section && line.trim_start().starts_with(&entry_header) {
                return Some(idx + 1);
            }
        }

        None
    }
}

fn parse_error(path: &Path, e: serde_yaml::Error) -> ProvisionError {
    ProvisionError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProvisionError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProvisionError::Io(e)
        }
    })
}

/// Parse YAML text into a [`LoggingConfig`] without validating references.
///
/// # Errors
///
/// Returns `ConfigParseError` for an empty document or invalid YAML.
pub fn parse_log_config(content: &str, source_path: &Path) -> Result<LoggingConfig> {
    if content.trim().is_empty() {
        return Err(ProvisionError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: "document is empty".to_string(),
        });
    }

    serde_yaml::from_str(content).map_err(|e| parse_error(source_path, e))
}

/// Parse and validate YAML text.
///
/// # Errors
///
/// Returns `ConfigParseError` for invalid YAML and `ConfigValidationError`
/// when a handler or formatter reference does not resolve.
pub fn load_log_config_str(content: &str, source_path: &Path) -> Result<LoggingConfig> {
    let config = parse_log_config(content, source_path)?;
    validate(&config)?;
    tracing::debug!(
        "Loaded logging config {} ({} loggers, {} handlers, {} formatters)",
        source_path.display(),
        config.loggers.len(),
        config.handlers.len(),
        config.formatters.len()
    );
    Ok(config)
}

/// Read, parse and validate a logging document.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist, otherwise as
/// [`load_log_config_str`].
pub fn load_log_config(path: &Path) -> Result<LoggingConfig> {
    let content = read_source(path)?;
    load_log_config_str(&content, path)
}

/// Serialize a document back to YAML.
pub fn to_yaml(config: &LoggingConfig) -> Result<String> {
    serde_yaml::to_string(config).map_err(|e| ProvisionError::Other(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logconf::schema::Level;
    use tempfile::TempDir;

    const DOC: &str = r#"
version: 1
disable_existing_loggers: False
formatters:
  simple:
    format: "%(asctime)s %(levelname)s: %(message)s"
    datefmt: "%H:%M:%S"
handlers:
  console:
    class: logging.StreamHandler
    formatter: simple
    stream: ext://sys.stdout
loggers:
  master:
    level: 10
    handlers: [console]
    propogate: no
"#;

    #[test]
    fn loads_valid_document() {
        let config = load_log_config_str(DOC, Path::new("log_config.yaml")).unwrap();
        assert!(!config.disable_existing_loggers);
        let master = &config.loggers["master"];
        assert_eq!(master.level, Some(Level::Numeric(10)));
        assert!(!master.propagate);
    }

    #[test]
    fn both_propagate_spellings_load() {
        let doc = DOC.replace("propogate: no", "propagate: true\n    propogate: no");
        let config = load_log_config_str(&doc, Path::new("log_config.yaml")).unwrap();
        assert!(config.loggers["master"].propagate);
    }

    #[test]
    fn broken_reference_is_validation_error() {
        let doc = DOC.replace("handlers: [console]", "handlers: [console, file]");
        let err = load_log_config_str(&doc, Path::new("log_config.yaml")).unwrap_err();
        match err {
            ProvisionError::ConfigValidationError { message } => {
                assert!(message.contains("'file'"));
            }
            other => panic!("Expected ConfigValidationError, got {:?}", other),
        }
    }

    #[test]
    fn parse_skips_reference_checks() {
        let doc = DOC.replace("formatter: simple", "formatter: verbose");
        assert!(parse_log_config(&doc, Path::new("x.yaml")).is_ok());
    }

    #[test]
    fn empty_document_is_parse_error() {
        let err = parse_log_config("  \n", Path::new("x.yaml")).unwrap_err();
        assert!(matches!(err, ProvisionError::ConfigParseError { .. }));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let err = parse_log_config("handlers: [", Path::new("x.yaml")).unwrap_err();
        assert!(matches!(err, ProvisionError::ConfigParseError { .. }));
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_log_config(&temp.path().join(LOG_CONFIG_FILE_NAME)).unwrap_err();
        assert!(matches!(err, ProvisionError::ConfigNotFound { .. }));
    }

    #[test]
    fn round_trip_preserves_document() {
        let config = load_log_config_str(DOC, Path::new("log_config.yaml")).unwrap();
        let yaml = to_yaml(&config).unwrap();
        assert!(yaml.contains("propagate: false"));
        assert!(!yaml.contains("propogate"));
        let reparsed = load_log_config_str(&yaml, Path::new("log_config.yaml")).unwrap();
        assert_eq!(config, reparsed);
    }

    #[test]
    fn document_exposes_source_details() {
        let doc = LogConfigDocument::parse(DOC, Path::new("log_config.yaml")).unwrap();
        assert_eq!(
            doc.entry_keys("loggers", "master"),
            vec!["level", "handlers", "propogate"]
        );
        assert_eq!(doc.line_of("handlers", "console"), Some(9));
        assert_eq!(doc.line_of("loggers", "console"), None);
    }
}
