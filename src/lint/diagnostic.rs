//! Lint diagnostic messages.

use super::rule::{RuleId, Severity};
use super::span::Span;
use crate::logconf::LogConfigDocument;

/// A diagnostic message produced by a lint rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Optional source location.
    pub span: Option<Span>,
    /// Optional suggestion for fixing the issue.
    pub suggestion: Option<String>,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            span: None,
            suggestion: None,
        }
    }

    /// Add a source span to this diagnostic.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Locate the diagnostic at the entry `name` of `section`, when it can
    /// be found in the document text.
    pub fn at_entry(mut self, doc: &LogConfigDocument, section: &str, name: &str) -> Self {
        if let Some(line) = doc.line_of(section, name) {
            let column = doc
                .source
                .lines()
                .nth(line - 1)
                .map(|l| l.len() - l.trim_start().len() + 1)
                .unwrap_or(1);
            self.span = Some(Span::line(&doc.path, line).at_column(column));
        }
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}
