//! `%(field)s` record templates.

use std::fmt::Write;
use std::sync::LazyLock;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use regex::Regex;

use super::schema::Level;

/// Template used when a formatter has no `format`.
pub const DEFAULT_FORMAT: &str = "%(message)s";

/// Record attributes a template may reference.
pub const RECORD_FIELDS: [&str; 18] = [
    "name",
    "levelno",
    "levelname",
    "pathname",
    "filename",
    "module",
    "lineno",
    "funcName",
    "created",
    "asctime",
    "msecs",
    "relativeCreated",
    "thread",
    "threadName",
    "process",
    "processName",
    "message",
    "taskName",
];

/// `%%` or a `%(name)<flags><width>.<precision><conversion>` placeholder.
static FIELD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"%%|%\((?P<name>[^)]*)\)(?P<flags>[-#0 +]*)(?P<width>\d*)(?:\.(?P<precision>\d+))?(?P<conv>[sdifrx])",
    )
    .expect("FIELD_REGEX must compile")
});

/// Names of every field referenced by `template`, in order of appearance.
pub fn format_fields(template: &str) -> Vec<String> {
    FIELD_REGEX
        .captures_iter(template)
        .filter_map(|c| c.name("name").map(|m| m.as_str().to_string()))
        .collect()
}

/// Whether `field` is a standard record attribute.
pub fn is_record_field(field: &str) -> bool {
    RECORD_FIELDS.contains(&field)
}

/// Values of one log record.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecordFields {
    /// Logger name.
    pub name: String,
    /// Numeric level.
    pub level: u32,
    /// Source file path.
    pub pathname: String,
    /// Module name.
    pub module: String,
    /// Function name.
    pub func_name: String,
    /// Source line.
    pub lineno: u32,
    /// Rendered message.
    pub message: String,
    /// Creation time.
    pub created: DateTime<Local>,
    /// Process id.
    pub process: u32,
}

impl LogRecordFields {
    /// A record created now with placeholder source location.
    pub fn new(name: impl Into<String>, level: u32, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            pathname: "app.py".to_string(),
            module: "app".to_string(),
            func_name: "main".to_string(),
            lineno: 1,
            message: message.into(),
            created: Local::now(),
            process: std::process::id(),
        }
    }

    /// Set the source location.
    pub fn at(mut self, module: &str, func_name: &str, lineno: u32) -> Self {
        self.module = module.to_string();
        self.pathname = format!("{}.py", module);
        self.func_name = func_name.to_string();
        self.lineno = lineno;
        self
    }

    /// Set the creation time.
    pub fn created_at(mut self, created: DateTime<Local>) -> Self {
        self.created = created;
        self
    }

    fn value(&self, field: &str, datefmt: Option<&str>) -> Option<String> {
        let value = match field {
            "name" => self.name.clone(),
            "levelno" => self.level.to_string(),
            "levelname" => Level::name_of(self.level),
            "pathname" => self.pathname.clone(),
            "filename" => self
                .pathname
                .rsplit(['/', '\\'])
                .next()
                .unwrap_or(&self.pathname)
                .to_string(),
            "module" => self.module.clone(),
            "lineno" => self.lineno.to_string(),
            "funcName" => self.func_name.clone(),
            "created" => format!(
                "{}.{:06}",
                self.created.timestamp(),
                self.created.timestamp_subsec_micros()
            ),
            "asctime" => format_time(&self.created, datefmt),
            "msecs" => self.created.timestamp_subsec_millis().to_string(),
            "relativeCreated" => "0".to_string(),
            "thread" => "0".to_string(),
            "threadName" => "MainThread".to_string(),
            "process" => self.process.to_string(),
            "processName" => "MainProcess".to_string(),
            "message" => self.message.clone(),
            "taskName" => "None".to_string(),
            _ => return None,
        };
        Some(value)
    }
}

/// Render `created` with a strftime pattern.
///
/// Without a pattern, or with one chrono cannot render, the result looks
/// like `2022-07-21 14:03:07,512`.
pub fn format_time(created: &DateTime<Local>, datefmt: Option<&str>) -> String {
    if let Some(pattern) = datefmt {
        let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
        if !items.iter().any(|i| matches!(i, Item::Error)) {
            let mut out = String::new();
            if write!(out, "{}", created.format_with_items(items.into_iter())).is_ok() {
                return out;
            }
        }
        tracing::debug!("Unsupported date format {:?}, using default", pattern);
    }

    format!(
        "{},{:03}",
        created.format("%Y-%m-%d %H:%M:%S"),
        created.timestamp_subsec_millis()
    )
}

/// A compiled formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    template: String,
    datefmt: Option<String>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT, None)
    }
}

impl Formatter {
    /// Create a formatter.
    pub fn new(template: impl Into<String>, datefmt: Option<String>) -> Self {
        Self {
            template: template.into(),
            datefmt,
        }
    }

    /// The record template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The date format, if any.
    pub fn datefmt(&self) -> Option<&str> {
        self.datefmt.as_deref()
    }

    /// Fields referenced by the template.
    pub fn fields(&self) -> Vec<String> {
        format_fields(&self.template)
    }

    /// Expand the template with a record.
    ///
    /// Unknown fields are left as written.
    pub fn render(&self, record: &LogRecordFields) -> String {
        FIELD_REGEX
            .replace_all(&self.template, |caps: &regex::Captures<'_>| {
                let Some(name) = caps.name("name") else {
                    return "%".to_string();
                };
                let Some(value) = record.value(name.as_str(), self.datefmt()) else {
                    return caps[0].to_string();
                };
                let left = caps
                    .name("flags")
                    .is_some_and(|f| f.as_str().contains('-'));
                let width = caps
                    .name("width")
                    .and_then(|w| w.as_str().parse::<usize>().ok())
                    .unwrap_or(0);
                if left {
                    format!("{:<width$}", value, width = width)
                } else {
                    format!("{:>width$}", value, width = width)
                }
            })
            .into_owned()
    }
}
