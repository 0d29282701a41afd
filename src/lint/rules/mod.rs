//! Built-in lint rules.

pub mod format_field;
pub mod handler_class;
pub mod level;
pub mod propagate_spelling;
pub mod rotation_policy;
pub mod undefined_formatter;
pub mod undefined_handler;
pub mod version;

pub use format_field::UnknownFormatFieldRule;
pub use handler_class::UnknownHandlerClassRule;
pub use level::UnknownLevelRule;
pub use propagate_spelling::MisspelledPropagateRule;
pub use rotation_policy::RotationPolicyRule;
pub use undefined_formatter::UndefinedFormatterRule;
pub use undefined_handler::UndefinedHandlerRule;
pub use version::UnsupportedVersionRule;
