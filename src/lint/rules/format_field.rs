//! Format template field validation.

use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::logconf::{format_fields, is_record_field, LogConfigDocument};

/// Detects `%(field)s` placeholders that name no record attribute.
///
/// Such placeholders fail at the first record the formatter renders.
pub struct UnknownFormatFieldRule;

impl LintRule for UnknownFormatFieldRule {
    fn id(&self) -> RuleId {
        RuleId::new("unknown-format-field")
    }

    fn name(&self) -> &str {
        "Unknown Format Field"
    }

    fn description(&self) -> &str {
        "Ensures format templates only reference record attributes"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, doc: &LogConfigDocument) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for (name, formatter) in &doc.config.formatters {
            let Some(template) = &formatter.format else {
                continue;
            };
            for field in format_fields(template) {
                if is_record_field(&field) {
                    continue;
                }
                let mut diag = self
                    .diagnostic(format!(
                        "Formatter '{}' references unknown field '{}'",
                        name, field
                    ))
                    .at_entry(doc, "formatters", name);
                if let Some(known) = crate::logconf::RECORD_FIELDS
                    .iter()
                    .find(|k| k.eq_ignore_ascii_case(&field))
                {
                    diag = diag.with_suggestion(format!("Did you mean '{}'?", known));
                }
                diagnostics.push(diag);
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn check(format: &str) -> Vec<LintDiagnostic> {
        let doc = LogConfigDocument::parse(
            &format!("formatters:\n  f:\n    format: \"{}\"\n", format),
            Path::new("log_config.yaml"),
        )
        .unwrap();
        UnknownFormatFieldRule.check(&doc)
    }

    #[test]
    fn standard_fields_pass() {
        assert!(check(
            "%(asctime)s - %(levelname)s - %(module)s.%(funcName)s(%(lineno)d) - %(message)s"
        )
        .is_empty());
    }

    #[test]
    fn unknown_field_is_reported() {
        let diagnostics = check("%(asctime)s %(user)s %(message)s");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert!(diagnostics[0].message.contains("'user'"));
        assert!(diagnostics[0].suggestion.is_none());
    }

    #[test]
    fn suggests_correct_case() {
        let diagnostics = check("%(funcname)s");
        assert_eq!(
            diagnostics[0].suggestion.as_deref(),
            Some("Did you mean 'funcName'?")
        );
    }
}
