//! Misspelled `propagate` key.
//!
//! `propogate` is read as `propagate` unless the logger also spells the key
//! correctly, in which case the misspelled key is ignored.
//! The spelling is still worth fixing for other tools reading the file.

use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::logconf::validator::ROOT_LOGGER;
use crate::logconf::LogConfigDocument;

const MISSPELLING: &str = "propogate";

/// Flags loggers using the `propogate` spelling.
pub struct MisspelledPropagateRule;

impl LintRule for MisspelledPropagateRule {
    fn id(&self) -> RuleId {
        RuleId::new("misspelled-propagate")
    }

    fn name(&self) -> &str {
        "Misspelled Propagate"
    }

    fn description(&self) -> &str {
        "Flags the 'propogate' spelling of 'propagate'"
    }

    fn default_severity(&self) -> Severity {
        Severity::Hint
    }

    fn check(&self, doc: &LogConfigDocument) -> Vec<LintDiagnostic> {
        let mut diagnostics: Vec<LintDiagnostic> = doc
            .config
            .loggers
            .keys()
            .filter(|name| {
                doc.entry_keys("loggers", name)
                    .iter()
                    .any(|k| k == MISSPELLING)
            })
            .map(|name| {
                self.diagnostic(format!(
                    "Logger '{}' spells 'propagate' as '{}'",
                    name, MISSPELLING
                ))
                .with_suggestion("Rename the key to 'propagate'")
                .at_entry(doc, "loggers", name)
            })
            .collect();

        let root_misspelled = doc
            .raw
            .get(ROOT_LOGGER)
            .and_then(serde_yaml::Value::as_mapping)
            .is_some_and(|m| m.contains_key(MISSPELLING));
        if root_misspelled {
            diagnostics.push(
                self.diagnostic(format!(
                    "Root logger spells 'propagate' as '{}'",
                    MISSPELLING
                ))
                .with_suggestion("Rename the key to 'propagate'"),
            );
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn check(text: &str) -> Vec<LintDiagnostic> {
        let doc = LogConfigDocument::parse(text, Path::new("log_config.yaml")).unwrap();
        MisspelledPropagateRule.check(&doc)
    }

    #[test]
    fn flags_misspelling_next_to_correct_key() {
        let diagnostics =
            check("loggers:\n  app:\n    propagate: true\n    propogate: false\n");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'app'"));
    }

    #[test]
    fn flags_misspelling() {
        let diagnostics = check("loggers:\n  master:\n    level: 10\n    propogate: no\n");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Hint);
        assert_eq!(diagnostics[0].span.as_ref().unwrap().line, 2);
    }

    #[test]
    fn correct_spelling_passes() {
        assert!(check("loggers:\n  master:\n    propagate: false\n").is_empty());
        assert!(check("loggers:\n  master: {}\n").is_empty());
    }

    #[test]
    fn flags_root_logger() {
        let diagnostics = check("root:\n  propogate: no\n");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.starts_with("Root logger"));
    }
}
