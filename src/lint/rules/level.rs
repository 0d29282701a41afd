//! Level validation.
//!
//! Levels are numbers or one of the standard upper-case names.

use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::logconf::schema::LEVEL_NAMES;
use crate::logconf::{Level, LogConfigDocument};

/// Detects level names that are not standard levels.
pub struct UnknownLevelRule;

impl UnknownLevelRule {
    fn report(&self, owner: &str, level: &Level) -> Option<LintDiagnostic> {
        if level.value().is_some() {
            return None;
        }
        let text = level.to_string();
        let diag = self.diagnostic(format!("{} has unknown level '{}'", owner, text));
        let upper = text.to_ascii_uppercase();
        Some(if LEVEL_NAMES.iter().any(|(n, _)| *n == upper) {
            diag.with_suggestion(format!("Level names are upper case: '{}'", upper))
        } else {
            diag.with_suggestion("Use DEBUG, INFO, WARNING, ERROR, CRITICAL or a number")
        })
    }
}

impl LintRule for UnknownLevelRule {
    fn id(&self) -> RuleId {
        RuleId::new("unknown-level")
    }

    fn name(&self) -> &str {
        "Unknown Level"
    }

    fn description(&self) -> &str {
        "Ensures logger and handler levels are valid"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, doc: &LogConfigDocument) -> Vec<LintDiagnostic> {
        let config = &doc.config;
        let mut diagnostics = Vec::new();

        for (name, logger) in &config.loggers {
            if let Some(diag) = logger
                .level
                .as_ref()
                .and_then(|l| self.report(&format!("Logger '{}'", name), l))
            {
                diagnostics.push(diag.at_entry(doc, "loggers", name));
            }
        }

        if let Some(level) = config.root.as_ref().and_then(|r| r.level.as_ref()) {
            diagnostics.extend(self.report("Root logger", level));
        }

        for (name, handler) in &config.handlers {
            if let Some(diag) = handler
                .level
                .as_ref()
                .and_then(|l| self.report(&format!("Handler '{}'", name), l))
            {
                diagnostics.push(diag.at_entry(doc, "handlers", name));
            }
        }

        diagnostics
    }
}
