//! Lint rule definitions.
//!
//! Core types for rules that inspect a logging document:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for diagnostics (Hint, Warning, Error)

use super::diagnostic::LintDiagnostic;
use crate::logconf::LogConfigDocument;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational; the document loads as intended.
    Hint,
    /// The document loads but probably not as intended.
    Warning,
    /// The document cannot be used.
    Error,
}

impl Severity {
    /// Whether a diagnostic of this severity fails a check.
    ///
    /// Errors always fail; warnings fail under `--strict`; hints never do.
    pub fn fails(self, strict: bool) -> bool {
        match self {
            Severity::Error => true,
            Severity::Warning => strict,
            Severity::Hint => false,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Hint => write!(f, "hint"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A check over a logging document.
///
/// Each rule looks for one kind of problem and reports every occurrence.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Default severity for this rule.
    fn default_severity(&self) -> Severity;

    /// Check the document and return any diagnostics.
    fn check(&self, doc: &LogConfigDocument) -> Vec<LintDiagnostic>;

    /// A diagnostic from this rule at its default severity.
    fn diagnostic(&self, message: String) -> LintDiagnostic {
        LintDiagnostic::new(self.id(), self.default_severity(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_id_equality() {
        let id1 = RuleId::new("undefined-handler");
        let id2 = RuleId::new("undefined-handler");
        let id3 = RuleId::new("unknown-level");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn rule_id_display() {
        let id = RuleId::new("rotation-policy");
        assert_eq!(format!("{}", id), "rotation-policy");
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Hint < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn only_errors_fail_unless_strict() {
        assert!(Severity::Error.fails(false));
        assert!(!Severity::Warning.fails(false));
        assert!(Severity::Warning.fails(true));
        assert!(!Severity::Hint.fails(true));
    }

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", Severity::Hint), "hint");
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", Severity::Error), "error");
    }
}
