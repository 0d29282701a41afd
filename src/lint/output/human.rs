//! Human-readable output formatter.
//!
//! Formats lint diagnostics for terminal display with optional color support.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, Severity};
use console::style;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_prefix(&self, severity: Severity) -> String {
        let label = severity.to_string();
        if !self.use_color {
            return label;
        }
        match severity {
            Severity::Hint => style(label).cyan().bold().to_string(),
            Severity::Warning => style(label).yellow().bold().to_string(),
            Severity::Error => style(label).red().bold().to_string(),
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for diag in diagnostics {
            // Header line: error[rule-id]: message
            writeln!(
                writer,
                "{}[{}]: {}",
                self.severity_prefix(diag.severity),
                diag.rule_id.0,
                diag.message
            )?;

            if let Some(ref span) = diag.span {
                writeln!(
                    writer,
                    "  --> {}:{}:{}",
                    span.file.display(),
                    span.line,
                    span.column
                )?;
            }

            if let Some(ref suggestion) = diag.suggestion {
                writeln!(writer, "   = help: {}", suggestion)?;
            }

            writeln!(writer)?;
        }

        let count = |severity: Severity| {
            diagnostics
                .iter()
                .filter(|d| d.severity == severity)
                .count()
        };
        let (errors, warnings, hints) = (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Hint),
        );

        if errors > 0 || warnings > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                errors, warnings
            )?;
        } else if hints > 0 {
            writeln!(writer, "Found {} hint(s)", hints)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{RuleId, Span};

    fn render(diagnostics: &[LintDiagnostic]) -> String {
        let mut output = Vec::new();
        HumanFormatter::new(false)
            .format(diagnostics, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn formats_error_diagnostic() {
        let output = render(&[LintDiagnostic::new(
            RuleId::new("undefined-handler"),
            Severity::Error,
            "Logger 'main' references undefined handler 'file'",
        )
        .with_span(Span::line("log_config.yaml", 34).at_column(3))]);

        assert!(output.contains("error[undefined-handler]: Logger 'main'"));
        assert!(output.contains("  --> log_config.yaml:34:3"));
    }

    #[test]
    fn formats_warning_and_hint() {
        let output = render(&[
            LintDiagnostic::new(RuleId::new("w"), Severity::Warning, "warn"),
            LintDiagnostic::new(RuleId::new("h"), Severity::Hint, "hint"),
        ]);

        assert!(output.contains("warning[w]: warn"));
        assert!(output.contains("hint[h]: hint"));
    }

    #[test]
    fn formats_summary_line() {
        let output = render(&[
            LintDiagnostic::new(RuleId::new("r1"), Severity::Error, "err"),
            LintDiagnostic::new(RuleId::new("r2"), Severity::Warning, "warn"),
            LintDiagnostic::new(RuleId::new("r3"), Severity::Warning, "warn2"),
        ]);

        assert!(output.contains("Found 1 error(s) and 2 warning(s)"));
    }

    #[test]
    fn hints_only_summary() {
        let output = render(&[LintDiagnostic::new(
            RuleId::new("misspelled-propagate"),
            Severity::Hint,
            "spelling",
        )]);
        assert!(output.contains("Found 1 hint(s)"));
        assert!(!output.contains("error(s)"));
    }

    #[test]
    fn formats_suggestion() {
        let output = render(&[LintDiagnostic::new(
            RuleId::new("test-rule"),
            Severity::Warning,
            "Test message",
        )
        .with_suggestion("Try this instead")]);

        assert!(output.contains("= help: Try this instead"));
    }

    #[test]
    fn no_summary_when_no_issues() {
        assert!(!render(&[]).contains("Found"));
    }
}
