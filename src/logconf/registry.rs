//! Loggers resolved from a document.
//!
//! [`LoggerRegistry::build`] resolves every reference once. The result is
//! a plain value handed to whoever needs to log; there is no process-wide
//! logger table.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::format::{Formatter, LogRecordFields};
use super::schema::{
    HandlerClass, HandlerConfig, Level, LoggerConfig, LoggingConfig, DEFAULT_ROOT_LEVEL,
};
use super::validator::{validate, ROOT_LOGGER};
use crate::error::{ProvisionError, Result};

/// Stream written by a console handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamTarget {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

impl StreamTarget {
    fn parse(handler: &str, stream: Option<&str>) -> Result<Self> {
        match stream {
            None | Some("ext://sys.stderr") => Ok(Self::Stderr),
            Some("ext://sys.stdout") => Ok(Self::Stdout),
            Some(other) => Err(invalid(format!(
                "Handler '{}' has unsupported stream '{}'",
                handler, other
            ))),
        }
    }
}

/// Where a handler writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerKind {
    /// A process stream.
    Stream(StreamTarget),
    /// A file, rotated by size when `max_bytes` is non-zero.
    File {
        /// Target file.
        filename: PathBuf,
        /// Open mode.
        mode: String,
        /// Text encoding.
        encoding: Option<String>,
        /// Open lazily on the first record.
        delay: bool,
        /// Rotation settings; `None` for a plain file handler.
        rotation: Option<Rotation>,
    },
}

/// Size based rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    /// Rotate once the file would exceed this size. 0 never rotates.
    pub max_bytes: u64,
    /// Rotated files kept.
    pub backup_count: u32,
}

/// A resolved handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    name: String,
    kind: HandlerKind,
    level: u32,
    formatter: Arc<Formatter>,
}

impl Handler {
    /// Name in the document.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Output target.
    pub fn kind(&self) -> &HandlerKind {
        &self.kind
    }

    /// Minimum level emitted.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Formatter applied to records.
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Target file, for file handlers.
    pub fn filename(&self) -> Option<&Path> {
        match &self.kind {
            HandlerKind::File { filename, .. } => Some(filename),
            HandlerKind::Stream(_) => None,
        }
    }

    /// Whether this handler emits records of `level`.
    pub fn handles(&self, level: u32) -> bool {
        level >= self.level
    }
}

/// A resolved logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerHandle {
    name: String,
    threshold: u32,
    propagate: bool,
    handlers: Vec<Arc<Handler>>,
}

impl LoggerHandle {
    /// Logger name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Effective level; records below it are dropped.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Whether records continue to ancestor loggers.
    pub fn propagate(&self) -> bool {
        self.propagate
    }

    /// Handlers in emission order.
    pub fn handlers(&self) -> &[Arc<Handler>] {
        &self.handlers
    }

    /// Whether a record of `level` passes this logger.
    pub fn is_enabled_for(&self, level: u32) -> bool {
        level >= self.threshold
    }

    /// Render `record` with each handler that would emit it.
    ///
    /// Returns `(handler name, line)` pairs; empty when the logger drops the
    /// record.
    pub fn render(&self, record: &LogRecordFields) -> Vec<(String, String)> {
        if !self.is_enabled_for(record.level) {
            return Vec::new();
        }
        self.handlers
            .iter()
            .filter(|h| h.handles(record.level))
            .map(|h| (h.name.clone(), h.formatter.render(record)))
            .collect()
    }
}

/// All loggers of a document, resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerRegistry {
    loggers: BTreeMap<String, LoggerHandle>,
    root: LoggerHandle,
}

impl LoggerRegistry {
    /// Resolve every logger, handler and formatter of `config`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` for broken references, unknown
    /// handler classes or level names, unsupported streams, and file
    /// handlers without a `filename`.
    pub fn build(config: &LoggingConfig) -> Result<Self> {
        validate(config)?;

        let formatters: BTreeMap<&str, Arc<Formatter>> = config
            .formatters
            .iter()
            .map(|(name, f)| {
                let template = f
                    .format
                    .clone()
                    .unwrap_or_else(|| super::format::DEFAULT_FORMAT.to_string());
                (
                    name.as_str(),
                    Arc::new(Formatter::new(template, f.datefmt.clone())),
                )
            })
            .collect();

        let mut handlers = BTreeMap::new();
        for (name, handler) in &config.handlers {
            let formatter = match &handler.formatter {
                Some(f) => formatters
                    .get(f.as_str())
                    .cloned()
                    .ok_or_else(|| invalid(format!("Undefined formatter '{}'", f)))?,
                None => Arc::new(Formatter::default()),
            };
            handlers.insert(
                name.as_str(),
                Arc::new(build_handler(name, handler, formatter)?),
            );
        }

        let root_level = match &config.root {
            Some(root) => resolve_level(ROOT_LOGGER, root.level.as_ref())?,
            None => None,
        }
        .unwrap_or(DEFAULT_ROOT_LEVEL);

        let root_config = config.root.clone().unwrap_or_default();
        let root = build_logger(ROOT_LOGGER, &root_config, root_level, &handlers)?;

        let mut loggers = BTreeMap::new();
        for (name, logger) in &config.loggers {
            let threshold = effective_level(config, name)?.unwrap_or(root_level);
            loggers.insert(
                name.clone(),
                build_logger(name, logger, threshold, &handlers)?,
            );
        }

        tracing::debug!("Built logger registry with {} loggers", loggers.len());
        Ok(Self { loggers, root })
    }

    /// Look up a configured logger.
    pub fn get(&self, name: &str) -> Option<&LoggerHandle> {
        self.loggers.get(name)
    }

    /// The root logger.
    pub fn root(&self) -> &LoggerHandle {
        &self.root
    }

    /// Names of the configured loggers, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.loggers.keys().map(String::as_str)
    }

    /// Point the first plain file handler of `logger` at `path`.
    ///
    /// The replacement truncates the file when opened and keeps the old
    /// handler's formatter and level. Other loggers sharing the handler are
    /// not affected.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if the logger does not exist or has
    /// no plain file handler.
    pub fn redirect_file_handler(&mut self, logger: &str, path: &Path) -> Result<()> {
        let handle = self
            .loggers
            .get_mut(logger)
            .ok_or_else(|| invalid(format!("Undefined logger '{}'", logger)))?;

        let slot = handle
            .handlers
            .iter_mut()
            .find(|h| {
                matches!(
                    h.kind,
                    HandlerKind::File {
                        rotation: None,
                        ..
                    }
                )
            })
            .ok_or_else(|| invalid(format!("Logger '{}' has no file handler", logger)))?;

        let mut replacement = Handler::clone(slot);
        if let HandlerKind::File {
            filename,
            mode,
            delay,
            ..
        } = &mut replacement.kind
        {
            *filename = path.to_path_buf();
            *mode = "w".to_string();
            *delay = false;
        }
        tracing::debug!(
            "Logger '{}' handler '{}' now writes {}",
            logger,
            replacement.name,
            path.display()
        );
        *slot = Arc::new(replacement);
        Ok(())
    }
}

fn invalid(message: String) -> ProvisionError {
    ProvisionError::ConfigValidationError { message }
}

fn resolve_level(owner: &str, level: Option<&Level>) -> Result<Option<u32>> {
    match level {
        None => Ok(None),
        Some(level) => level
            .value()
            .map(Some)
            .ok_or_else(|| invalid(format!("'{}' has unknown level '{}'", owner, level))),
    }
}

/// Own level, or that of the nearest dotted ancestor; `None` defers to root.
///
/// Level 0 (`NOTSET`) also defers.
fn effective_level(config: &LoggingConfig, name: &str) -> Result<Option<u32>> {
    let mut current = Some(name);
    while let Some(candidate) = current {
        if let Some(logger) = config.loggers.get(candidate) {
            match resolve_level(candidate, logger.level.as_ref())? {
                Some(level) if level > 0 => return Ok(Some(level)),
                _ => {}
            }
        }
        current = candidate.rsplit_once('.').map(|(parent, _)| parent);
    }
    Ok(None)
}

fn build_handler(
    name: &str,
    config: &HandlerConfig,
    formatter: Arc<Formatter>,
) -> Result<Handler> {
    let class = config.handler_class().ok_or_else(|| {
        invalid(format!(
            "Handler '{}' has unknown class '{}'",
            name, config.class
        ))
    })?;

    let kind = match class {
        HandlerClass::Stream => {
            HandlerKind::Stream(StreamTarget::parse(name, config.stream.as_deref())?)
        }
        HandlerClass::File | HandlerClass::RotatingFile => {
            let filename = config
                .filename
                .clone()
                .ok_or_else(|| invalid(format!("Handler '{}' has no filename", name)))?;
            let rotation = (class == HandlerClass::RotatingFile).then(|| Rotation {
                max_bytes: config.max_bytes.unwrap_or(0),
                backup_count: config.backup_count.unwrap_or(0),
            });
            HandlerKind::File {
                filename,
                mode: config.mode.clone().unwrap_or_else(|| "a".to_string()),
                encoding: config.encoding.clone(),
                delay: config.delay.unwrap_or(false),
                rotation,
            }
        }
    };

    let level = resolve_level(name, config.level.as_ref())?.unwrap_or(0);

    Ok(Handler {
        name: name.to_string(),
        kind,
        level,
        formatter,
    })
}

fn build_logger(
    name: &str,
    config: &LoggerConfig,
    threshold: u32,
    handlers: &BTreeMap<&str, Arc<Handler>>,
) -> Result<LoggerHandle> {
    let resolved = config
        .handlers
        .iter()
        .map(|h| {
            handlers
                .get(h.as_str())
                .cloned()
                .ok_or_else(|| invalid(format!("Undefined handler '{}'", h)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(LoggerHandle {
        name: name.to_string(),
        threshold,
        propagate: config.propagate,
        handlers: resolved,
    })
}
