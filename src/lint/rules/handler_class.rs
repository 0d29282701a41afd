//! Handler class validation.

use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::logconf::{HandlerClass, LogConfigDocument};

/// Detects handlers whose `class` is not a supported handler.
pub struct UnknownHandlerClassRule;

impl UnknownHandlerClassRule {
    /// A supported class the author probably meant.
    fn closest(class: &str) -> Option<&'static str> {
        let short = class.rsplit('.').next().unwrap_or(class);
        HandlerClass::ALL
            .into_iter()
            .map(HandlerClass::class_name)
            .find(|known| {
                known.eq_ignore_ascii_case(class)
                    || known
                        .rsplit('.')
                        .next()
                        .is_some_and(|k| k.eq_ignore_ascii_case(short))
            })
    }
}

impl LintRule for UnknownHandlerClassRule {
    fn id(&self) -> RuleId {
        RuleId::new("unknown-handler-class")
    }

    fn name(&self) -> &str {
        "Unknown Handler Class"
    }

    fn description(&self) -> &str {
        "Ensures handlers use a supported class"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, doc: &LogConfigDocument) -> Vec<LintDiagnostic> {
        doc.config
            .handlers
            .iter()
            .filter(|(_, h)| h.handler_class().is_none())
            .map(|(name, h)| {
                let suggestion = match Self::closest(&h.class) {
                    Some(known) => format!("Did you mean '{}'?", known),
                    None => format!(
                        "Supported classes: {}",
                        HandlerClass::ALL
                            .into_iter()
                            .map(HandlerClass::class_name)
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                };
                self.diagnostic(format!(
                    "Handler '{}' has unknown class '{}'",
                    name, h.class
                ))
                .with_suggestion(suggestion)
                .at_entry(doc, "handlers", name)
            })
            .collect()
    }
}
