//! Undefined handler detection.
//!
//! This rule detects loggers that name a handler the document does not define.

use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::logconf::validator::{undefined_handlers, ROOT_LOGGER};
use crate::logconf::LogConfigDocument;

/// Detects references to undefined handlers in logger `handlers` lists.
pub struct UndefinedHandlerRule;

impl LintRule for UndefinedHandlerRule {
    fn id(&self) -> RuleId {
        RuleId::new("undefined-handler")
    }

    fn name(&self) -> &str {
        "Undefined Handler"
    }

    fn description(&self) -> &str {
        "Ensures every handler a logger names is defined"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, doc: &LogConfigDocument) -> Vec<LintDiagnostic> {
        let defined: Vec<&str> = doc.config.handlers.keys().map(String::as_str).collect();

        undefined_handlers(&doc.config)
            .into_iter()
            .map(|e| {
                let diag = self
                    .diagnostic(e.message())
                    .with_suggestion(if defined.is_empty() {
                        format!("Define handler '{}' under 'handlers'", e.target)
                    } else {
                        format!("Defined handlers: {}", defined.join(", "))
                    });
                if e.owner == ROOT_LOGGER {
                    diag
                } else {
                    diag.at_entry(doc, "loggers", &e.owner)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn doc(text: &str) -> LogConfigDocument {
        LogConfigDocument::parse(text, Path::new("log_config.yaml")).unwrap()
    }

    #[test]
    fn detects_undefined_handler() {
        let doc = doc(
            "handlers:\n  console:\n    class: logging.StreamHandler\nloggers:\n  master:\n    handlers: [console, file]\n",
        );
        let diagnostics = UndefinedHandlerRule.check(&doc);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'file'"));
        assert_eq!(diagnostics[0].span.as_ref().unwrap().line, 5);
        assert_eq!(
            diagnostics[0].suggestion.as_deref(),
            Some("Defined handlers: console")
        );
    }

    #[test]
    fn checks_root_logger() {
        let doc = doc("root:\n  handlers: [console]\n");
        let diagnostics = UndefinedHandlerRule.check(&doc);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("Logger 'root'"));
        assert!(diagnostics[0].span.is_none());
    }

    #[test]
    fn passes_with_defined_handlers() {
        let doc = doc(
            "handlers:\n  console:\n    class: logging.StreamHandler\nloggers:\n  master:\n    handlers: [console]\n",
        );
        assert!(UndefinedHandlerRule.check(&doc).is_empty());
    }
}
