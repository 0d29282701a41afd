//! Undefined formatter detection.

use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::logconf::validator::undefined_formatters;
use crate::logconf::LogConfigDocument;

/// Detects handlers whose `formatter` is not defined.
pub struct UndefinedFormatterRule;

impl LintRule for UndefinedFormatterRule {
    fn id(&self) -> RuleId {
        RuleId::new("undefined-formatter")
    }

    fn name(&self) -> &str {
        "Undefined Formatter"
    }

    fn description(&self) -> &str {
        "Ensures every formatter a handler names is defined"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, doc: &LogConfigDocument) -> Vec<LintDiagnostic> {
        undefined_formatters(&doc.config)
            .into_iter()
            .map(|e| {
                self.diagnostic(e.message())
                    .at_entry(doc, "handlers", &e.owner)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn detects_undefined_formatter() {
        let doc = LogConfigDocument::parse(
            "formatters:\n  simple: {}\nhandlers:\n  file:\n    class: logging.FileHandler\n    filename: log.log\n    formatter: detailed\n",
            Path::new("log_config.yaml"),
        )
        .unwrap();

        let diagnostics = UndefinedFormatterRule.check(&doc);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Handler 'file' references undefined formatter 'detailed'"
        );
        assert_eq!(diagnostics[0].span.as_ref().unwrap().line, 4);
    }

    #[test]
    fn handler_without_formatter_passes() {
        let doc = LogConfigDocument::parse(
            "handlers:\n  console:\n    class: logging.StreamHandler\n",
            Path::new("log_config.yaml"),
        )
        .unwrap();
        assert!(UndefinedFormatterRule.check(&doc).is_empty());
    }
}
