//! Referential integrity of a logging document.
//!
//! Every handler named by a logger and every formatter named by a handler
//! must be defined. Anything else is left to the lint rules.

use super::schema::LoggingConfig;
use crate::error::{ProvisionError, Result};

/// A broken reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceError {
    /// Kind of the referring entry: `logger` or `handler`.
    pub owner_kind: &'static str,
    /// Name of the referring entry.
    pub owner: String,
    /// Kind of the missing entry: `handler` or `formatter`.
    pub target_kind: &'static str,
    /// The name that did not resolve.
    pub target: String,
}

impl ReferenceError {
    /// Human-readable description.
    pub fn message(&self) -> String {
        format!(
            "{} '{}' references undefined {} '{}'",
            capitalize(self.owner_kind),
            self.owner,
            self.target_kind,
            self.target
        )
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name under which the root logger is reported.
pub const ROOT_LOGGER: &str = "root";

/// Collect every unresolved handler reference.
pub fn undefined_handlers(config: &LoggingConfig) -> Vec<ReferenceError> {
    let root = config.root.as_ref().map(|r| (ROOT_LOGGER, r));
    config
        .loggers
        .iter()
        .map(|(name, logger)| (name.as_str(), logger))
        .chain(root)
        .flat_map(|(name, logger)| {
            logger
                .handlers
                .iter()
                .filter(|h| !config.handlers.contains_key(*h))
                .map(move |h| ReferenceError {
                    owner_kind: "logger",
                    owner: name.to_string(),
                    target_kind: "handler",
                    target: h.clone(),
                })
        })
        .collect()
}

/// Collect every unresolved formatter reference.
pub fn undefined_formatters(config: &LoggingConfig) -> Vec<ReferenceError> {
    config
        .handlers
        .iter()
        .filter_map(|(name, handler)| {
            let formatter = handler.formatter.as_ref()?;
            if config.formatters.contains_key(formatter) {
                None
            } else {
                Some(ReferenceError {
                    owner_kind: "handler",
                    owner: name.clone(),
                    target_kind: "formatter",
                    target: formatter.clone(),
                })
            }
        })
        .collect()
}

/// Collect every broken reference in the document.
pub fn validate_references(config: &LoggingConfig) -> Vec<ReferenceError> {
    let mut errors = undefined_handlers(config);
    errors.extend(undefined_formatters(config));
    errors
}

/// Validate and return Result.
///
/// # Errors
///
/// Returns `ConfigValidationError` listing every broken reference.
pub fn validate(config: &LoggingConfig) -> Result<()> {
    let errors = validate_references(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(ReferenceError::message).collect();
        Err(ProvisionError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logconf::schema::{FormatterConfig, HandlerConfig, LoggerConfig};

    fn config() -> LoggingConfig {
        let mut config = LoggingConfig::default();
        config
            .formatters
            .insert("simple".to_string(), FormatterConfig::default());
        config.handlers.insert(
            "console".to_string(),
            HandlerConfig {
                class: "logging.StreamHandler".to_string(),
                formatter: Some("simple".to_string()),
                ..Default::default()
            },
        );
        config.loggers.insert(
            "master".to_string(),
            LoggerConfig {
                handlers: vec!["console".to_string()],
                ..Default::default()
            },
        );
        config
    }

    #[test]
    fn valid_document_passes() {
        assert!(validate(&config()).is_ok());
    }

    #[test]
    fn undefined_handler_is_fatal() {
        let mut config = config();
        config
            .loggers
            .get_mut("master")
            .unwrap()
            .handlers
            .push("file".to_string());

        let errors = validate_references(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message(),
            "Logger 'master' references undefined handler 'file'"
        );

        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ProvisionError::ConfigValidationError { .. }));
    }

    #[test]
    fn undefined_formatter_is_fatal() {
        let mut config = config();
        config.formatters.clear();

        let errors = validate_references(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].target, "simple");
        assert_eq!(errors[0].owner, "console");
    }

    #[test]
    fn handler_without_formatter_is_fine() {
        let mut config = config();
        config.handlers.get_mut("console").unwrap().formatter = None;
        config.formatters.clear();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn root_logger_references_are_checked() {
        let mut config = config();
        config.root = Some(LoggerConfig {
            handlers: vec!["missing".to_string()],
            ..Default::default()
        });

        let errors = undefined_handlers(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].owner, ROOT_LOGGER);
    }

    #[test]
    fn all_problems_are_reported_together() {
        let mut config = config();
        config.formatters.clear();
        config
            .loggers
            .get_mut("master")
            .unwrap()
            .handlers
            .push("file".to_string());

        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("handler 'file'"));
        assert!(err.contains("formatter 'simple'"));
    }
}
