//! Logging configuration document types.
//!
//! The document follows the `dictConfig` layout: a `version` scalar,
//! `disable_existing_loggers`, and `formatters`, `handlers` and `loggers`
//! mappings keyed by name.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Class name of the console stream handler.
pub const STREAM_HANDLER: &str = "logging.StreamHandler";
/// Class name of the plain file handler.
pub const FILE_HANDLER: &str = "logging.FileHandler";
/// Class name of the size rotating file handler.
pub const ROTATING_FILE_HANDLER: &str = "logging.handlers.RotatingFileHandler";

/// The only document version understood.
pub const SUPPORTED_VERSION: i64 = 1;

/// Root of a logging configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Schema version; must be 1.
    #[serde(default = "default_version")]
    pub version: i64,

    /// Whether loggers not named in the document are disabled.
    #[serde(default = "default_true", deserialize_with = "yaml_bool")]
    pub disable_existing_loggers: bool,

    /// Named formatters.
    #[serde(default)]
    pub formatters: BTreeMap<String, FormatterConfig>,

    /// Named handlers.
    #[serde(default)]
    pub handlers: BTreeMap<String, HandlerConfig>,

    /// Named loggers.
    #[serde(default)]
    pub loggers: BTreeMap<String, LoggerConfig>,

    /// The root logger, when configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<LoggerConfig>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            disable_existing_loggers: true,
            formatters: BTreeMap::new(),
            handlers: BTreeMap::new(),
            loggers: BTreeMap::new(),
            root: None,
        }
    }
}

/// A formatter: a `%(field)s` template plus an optional date format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Record template; `%(message)s` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// strftime pattern for `%(asctime)s`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datefmt: Option<String>,

    /// Keys this crate does not interpret, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// A handler definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandlerConfig {
    /// Fully qualified handler class.
    pub class: String,

    /// Name of the formatter to use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,

    /// Minimum level this handler emits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,

    /// Defer opening the file until the first record.
    #[serde(
        default,
        deserialize_with = "yaml_bool_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub delay: Option<bool>,

    /// Target file of file handlers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<PathBuf>,

    /// Target stream of stream handlers, e.g. `ext://sys.stdout`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,

    /// File encoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,

    /// File open mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Rotation threshold in bytes.
    #[serde(
        default,
        rename = "maxBytes",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_bytes: Option<u64>,

    /// Number of rotated files kept.
    #[serde(
        default,
        rename = "backupCount",
        skip_serializing_if = "Option::is_none"
    )]
    pub backup_count: Option<u32>,

    /// Keys this crate does not interpret, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl HandlerConfig {
    /// The recognized handler class, if any.
    pub fn handler_class(&self) -> Option<HandlerClass> {
        HandlerClass::from_class_name(&self.class)
    }
}

/// Handler classes this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerClass {
    /// Writes to a process stream.
    Stream,
    /// Appends to a file.
    File,
    /// Appends to a file, rotating it by size.
    RotatingFile,
}

impl HandlerClass {
    /// All recognized classes.
    pub const ALL: [HandlerClass; 3] = [Self::Stream, Self::File, Self::RotatingFile];

    /// Look up a class by its fully qualified name.
    pub fn from_class_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.class_name() == name)
    }

    /// Fully qualified class name.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Stream => STREAM_HANDLER,
            Self::File => FILE_HANDLER,
            Self::RotatingFile => ROTATING_FILE_HANDLER,
        }
    }
}

/// A named logger.
///
/// Serialization always writes `propagate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LoggerFields")]
pub struct LoggerConfig {
    /// Threshold below which records are dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,

    /// Handler names, in emission order.
    pub handlers: Vec<String>,

    /// Whether records also reach ancestor loggers.
    pub propagate: bool,

    /// Keys this crate does not interpret, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// A logger as written. `propogate` only counts when `propagate` is absent.
#[derive(Deserialize)]
struct LoggerFields {
    #[serde(default)]
    level: Option<Level>,
    #[serde(default)]
    handlers: Vec<String>,
    #[serde(default, deserialize_with = "yaml_bool_opt")]
    propagate: Option<bool>,
    #[serde(default, deserialize_with = "yaml_bool_opt")]
    propogate: Option<bool>,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_yaml::Value>,
}

impl From<LoggerFields> for LoggerConfig {
    fn from(fields: LoggerFields) -> Self {
        Self {
            level: fields.level,
            handlers: fields.handlers,
            propagate: fields.propagate.or(fields.propogate).unwrap_or(true),
            extra: fields.extra,
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: None,
            handlers: Vec::new(),
            propagate: true,
            extra: BTreeMap::new(),
        }
    }
}

/// A logging level, numeric or by standard name.
///
/// Lower numbers are more verbose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Level {
    /// A numeric level such as `10`.
    Numeric(u32),
    /// A level name such as `INFO`.
    Named(String),
}

/// Standard level names and their numeric values.
pub const LEVEL_NAMES: [(&str, u32); 8] = [
    ("CRITICAL", 50),
    ("FATAL", 50),
    ("ERROR", 40),
    ("WARNING", 30),
    ("WARN", 30),
    ("INFO", 20),
    ("DEBUG", 10),
    ("NOTSET", 0),
];

/// Level of the root logger when the document leaves it unset.
pub const DEFAULT_ROOT_LEVEL: u32 = 30;

impl Level {
    /// Numeric value, or `None` for an unknown name.
    ///
    /// Names are matched exactly; `info` is not a level.
    pub fn value(&self) -> Option<u32> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Named(name) => LEVEL_NAMES
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| *v),
        }
    }

    /// Display name of a numeric level: the standard name or `Level N`.
    pub fn name_of(value: u32) -> String {
        match value {
            50 => "CRITICAL".to_string(),
            40 => "ERROR".to_string(),
            30 => "WARNING".to_string(),
            20 => "INFO".to_string(),
            10 => "DEBUG".to_string(),
            0 => "NOTSET".to_string(),
            n => format!("Level {}", n),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{}", n),
            Self::Named(name) => write!(f, "{}", name),
        }
    }
}

fn default_version() -> i64 {
    SUPPORTED_VERSION
}

fn default_true() -> bool {
    true
}

/// Accepts YAML 1.1 booleans (`yes`, `no`, `on`, `off`) besides `true`/`false`.
struct YamlBoolVisitor;

impl<'de> Visitor<'de> for YamlBoolVisitor {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean (true/false, yes/no, on/off)")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
        match v.to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "on" => Ok(true),
            "false" | "no" | "n" | "off" => Ok(false),
            _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }
}

fn yaml_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    deserializer.deserialize_any(YamlBoolVisitor)
}

fn yaml_bool_opt<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    deserializer.deserialize_any(YamlBoolVisitor).map(Some)
}
