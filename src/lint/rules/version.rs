//! Document version check.

use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::logconf::schema::SUPPORTED_VERSION;
use crate::logconf::LogConfigDocument;

/// Requires `version: 1`.
pub struct UnsupportedVersionRule;

impl LintRule for UnsupportedVersionRule {
    fn id(&self) -> RuleId {
        RuleId::new("unsupported-version")
    }

    fn name(&self) -> &str {
        "Unsupported Version"
    }

    fn description(&self) -> &str {
        "Ensures the document declares a supported schema version"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, doc: &LogConfigDocument) -> Vec<LintDiagnostic> {
        if doc.config.version == SUPPORTED_VERSION {
            return Vec::new();
        }

        let mut diag = self
            .diagnostic(format!(
                "Unsupported version {}; only version {} is understood",
                doc.config.version, SUPPORTED_VERSION
            ))
            .with_suggestion(format!("Set 'version: {}'", SUPPORTED_VERSION));
        if let Some(idx) = doc
            .source
            .lines()
            .position(|l| l.starts_with("version:"))
        {
            diag = diag.with_span(crate::lint::Span::line(&doc.path, idx + 1));
        }
        vec![diag]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn check(text: &str) -> Vec<LintDiagnostic> {
        let doc = LogConfigDocument::parse(text, Path::new("log_config.yaml")).unwrap();
        UnsupportedVersionRule.check(&doc)
    }

    #[test]
    fn version_one_passes() {
        assert!(check("version: 1\n").is_empty());
    }

    #[test]
    fn missing_version_means_one() {
        assert!(check("loggers: {}\n").is_empty());
    }

    #[test]
    fn other_versions_fail() {
        let diagnostics = check("# logging\nversion: 2\n");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("version 2"));
        assert_eq!(diagnostics[0].span.as_ref().unwrap().line, 2);
    }
}
