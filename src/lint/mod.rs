//! Logging document linting.
//!
//! Loading a document only rejects references that do not resolve. The lint
//! rules look further: unknown handler classes and levels, rotating handlers
//! without a policy, template fields no record has, and spelling.
//!
//! - **Rules** - Individual checks ([`LintRule`] trait)
//! - **Registry** - Collection of all available rules ([`RuleRegistry`])
//! - **Diagnostics** - Issue reports with severity and suggestions ([`LintDiagnostic`])
//!
//! # Example
//!
//! ```
//! use pyprov::lint::{RuleRegistry, Severity};
//! use pyprov::logconf::LogConfigDocument;
//! use std::path::Path;
//!
//! let doc = LogConfigDocument::parse(
//!     "loggers:\n  app:\n    handlers: [console]\n",
//!     Path::new("log_config.yaml"),
//! )
//! .unwrap();
//!
//! let diagnostics = RuleRegistry::with_builtins().check(&doc);
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].severity, Severity::Error);
//! ```

pub mod diagnostic;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod schema;
pub mod span;

pub use diagnostic::LintDiagnostic;
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use registry::RuleRegistry;
pub use rule::{LintRule, RuleId, Severity};
pub use rules::{
    MisspelledPropagateRule, RotationPolicyRule, UndefinedFormatterRule, UndefinedHandlerRule,
    UnknownFormatFieldRule, UnknownHandlerClassRule, UnknownLevelRule, UnsupportedVersionRule,
};
pub use schema::SchemaGenerator;
pub use span::Span;
