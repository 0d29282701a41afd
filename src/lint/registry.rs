//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores all available lint rules and provides
//! methods for registering, retrieving, and iterating over them.

use std::cmp::Reverse;
use std::collections::HashMap;

use super::diagnostic::LintDiagnostic;
use super::rule::{LintRule, RuleId};
use super::rules::{
    MisspelledPropagateRule, RotationPolicyRule, UndefinedFormatterRule, UndefinedHandlerRule,
    UnknownFormatFieldRule, UnknownHandlerClassRule, UnknownLevelRule, UnsupportedVersionRule,
};
use crate::logconf::LogConfigDocument;

/// Registry of all available lint rules.
pub struct RuleRegistry {
    rules: HashMap<RuleId, Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(UndefinedHandlerRule));
        registry.register(Box::new(UndefinedFormatterRule));
        registry.register(Box::new(UnknownHandlerClassRule));
        registry.register(Box::new(RotationPolicyRule));
        registry.register(Box::new(UnknownFormatFieldRule));
        registry.register(Box::new(UnknownLevelRule));
        registry.register(Box::new(UnsupportedVersionRule));
        registry.register(Box::new(MisspelledPropagateRule));
        registry
    }

    /// Register a lint rule.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.get(id).map(|r| r.as_ref())
    }

    /// Iterate over all rules.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule over `doc`.
    ///
    /// Diagnostics are ordered most severe first, then by line.
    pub fn check(&self, doc: &LogConfigDocument) -> Vec<LintDiagnostic> {
        let mut diagnostics: Vec<LintDiagnostic> =
            self.iter().flat_map(|rule| rule.check(doc)).collect();
        diagnostics.sort_by(|a, b| {
            let line = |d: &LintDiagnostic| d.span.as_ref().map_or(usize::MAX, |s| s.line);
            (Reverse(a.severity), line(a), &a.message).cmp(&(
                Reverse(b.severity),
                line(b),
                &b.message,
            ))
        });
        diagnostics
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
