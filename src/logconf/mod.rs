//! Logging configuration documents.
//!
//! A document declares formatters, handlers and named loggers. It is loaded
//! with [`load_log_config`], which rejects handler or formatter references
//! that do not resolve, and turned into an explicit [`LoggerRegistry`].
//!
//! # Example
//!
//! ```
//! use pyprov::logconf::{default_config, LoggerRegistry};
//!
//! let config = default_config().unwrap();
//! let registry = LoggerRegistry::build(&config).unwrap();
//!
//! let master = registry.get("master").unwrap();
//! assert!(master.is_enabled_for(10));
//! assert!(!master.propagate());
//! ```

pub mod builtin;
pub mod format;
pub mod loader;
pub mod logfile;
pub mod registry;
pub mod schema;
pub mod validator;

pub use builtin::{default_config, default_document, default_source, project_or_default_document};
pub use format::{format_fields, is_record_field, Formatter, LogRecordFields, RECORD_FIELDS};
pub use loader::{
    load_log_config, load_log_config_str, parse_log_config, to_yaml, LogConfigDocument,
    LOG_CONFIG_FILE_NAME,
};
pub use logfile::{log_file_name, next_log_path};
pub use registry::{Handler, HandlerKind, LoggerHandle, LoggerRegistry, Rotation, StreamTarget};
pub use schema::{
    FormatterConfig, HandlerClass, HandlerConfig, Level, LoggerConfig, LoggingConfig,
};
pub use validator::{validate, validate_references, ReferenceError};
