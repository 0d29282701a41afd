//! Rotation settings of rotating file handlers.
//!
//! A rotating handler without a size limit never rotates, and one without a
//! backup count truncates instead of keeping history.

use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::logconf::{HandlerClass, LogConfigDocument};

/// Requires `maxBytes` > 0 and `backupCount` on rotating handlers.
pub struct RotationPolicyRule;

impl LintRule for RotationPolicyRule {
    fn id(&self) -> RuleId {
        RuleId::new("rotation-policy")
    }

    fn name(&self) -> &str {
        "Rotation Policy"
    }

    fn description(&self) -> &str {
        "Ensures rotating file handlers set maxBytes and backupCount"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, doc: &LogConfigDocument) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for (name, handler) in &doc.config.handlers {
            if handler.handler_class() != Some(HandlerClass::RotatingFile) {
                continue;
            }
            let located = |d: LintDiagnostic| d.at_entry(doc, "handlers", name);

            match handler.max_bytes {
                None => diagnostics.push(located(
                    self.diagnostic(format!(
                        "Rotating handler '{}' does not set maxBytes",
                        name
                    ))
                    .with_suggestion("Add maxBytes, e.g. maxBytes: 1048576"),
                )),
                Some(0) => diagnostics.push(located(
                    self.diagnostic(format!(
                        "Rotating handler '{}' has maxBytes 0 and never rotates",
                        name
                    ))
                    .with_suggestion("Use a positive size or logging.FileHandler"),
                )),
                Some(_) => {}
            }

            if handler.backup_count.is_none() {
                diagnostics.push(located(
                    self.diagnostic(format!(
                        "Rotating handler '{}' does not set backupCount",
                        name
                    ))
                    .with_suggestion("Add backupCount, e.g. backupCount: 5"),
                ));
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn check(settings: &str) -> Vec<LintDiagnostic> {
        let doc = LogConfigDocument::parse(
            &format!(
                "handlers:\n  rotating:\n    class: logging.handlers.RotatingFileHandler\n    filename: log.log\n{}",
                settings
            ),
            Path::new("log_config.yaml"),
        )
        .unwrap();
        RotationPolicyRule.check(&doc)
    }

    #[test]
    fn complete_policy_passes() {
        assert!(check("    maxBytes: 1048576\n    backupCount: 5\n").is_empty());
    }

    #[test]
    fn missing_settings_are_reported() {
        let diagnostics = check("");
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("maxBytes"));
        assert!(diagnostics[1].message.contains("backupCount"));
        assert_eq!(diagnostics[0].span.as_ref().unwrap().line, 2);
    }

    #[test]
    fn zero_size_never_rotates() {
        let diagnostics = check("    maxBytes: 0\n    backupCount: 3\n");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("never rotates"));
    }

    #[test]
    fn plain_file_handlers_are_ignored() {
        let doc = LogConfigDocument::parse(
            "handlers:\n  file:\n    class: logging.FileHandler\n    filename: log.log\n",
            Path::new("log_config.yaml"),
        )
        .unwrap();
        assert!(RotationPolicyRule.check(&doc).is_empty());
    }
}
