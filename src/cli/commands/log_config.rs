//! Log-config command implementation.
//!
//! `pyprov log-config` checks, prints and previews the logging document,
//! and names the next dated log file.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::cli::args::{CheckArgs, LogConfigCommands, NextFileArgs, ShowArgs};
use crate::config::load_config;
use crate::error::{ProvisionError, Result};
use crate::lint::{
    HumanFormatter, JsonFormatter, LintDiagnostic, LintFormatter, OutputFormat, RuleRegistry,
    SchemaGenerator,
};
use crate::logconf::{
    default_source, next_log_path, project_or_default_document, LogConfigDocument,
    LogRecordFields, LoggerRegistry,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Directory dated log files go to when `--dir` is not given.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Levels a preview renders, lowest first.
const PREVIEW_LEVELS: [u32; 2] = [10, 20];

/// The log-config command implementation.
pub struct LogConfigCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    command: LogConfigCommands,
}

impl LogConfigCommand {
    /// Create a new log-config command.
    pub fn new(project_root: &Path, command: LogConfigCommands) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: None,
            command,
        }
    }

    /// Read the installer config from `path` instead of `pyprov.yml`.
    pub fn with_config_override(mut self, path: Option<&Path>) -> Self {
        self.config_override = path.map(Path::to_path_buf);
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The document named by the installer config's `log_config`, or the default.
    fn project_document(&self) -> Result<LogConfigDocument> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;
        project_or_default_document(&self.project_root, &config.log_config)
    }

    fn check(&self, args: &CheckArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = match &args.path {
            Some(path) => LogConfigDocument::read(&self.project_root.join(path)),
            None => self.project_document(),
        };
        let doc = match loaded {
            Ok(doc) => doc,
            Err(ProvisionError::ConfigParseError { path, message }) => {
                ui.error(&format!("Parse error in {}: {}", path.display(), message));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let diagnostics = RuleRegistry::with_builtins().check(&doc);
        tracing::debug!(
            "{} diagnostics for {}",
            diagnostics.len(),
            doc.path.display()
        );

        let should_fail = diagnostics.iter().any(|d| d.severity.fails(args.strict));

        let output = format_output(args.format, &diagnostics);

        match args.format {
            OutputFormat::Json => ui.message(output.trim_end()),
            OutputFormat::Human if diagnostics.is_empty() => {
                ui.success(&format!("{} is valid", doc.path.display()));
            }
            OutputFormat::Human => {
                for line in output.lines() {
                    if line.starts_with("error") {
                        ui.error(line);
                    } else if line.starts_with("warning") {
                        ui.warning(line);
                    } else {
                        ui.message(line);
                    }
                }
            }
        }

        if should_fail {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }

    fn show(&self, args: &ShowArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !args.preview {
            ui.message(default_source()?.trim_end());
            return Ok(CommandResult::success());
        }

        let doc = self.project_document()?;
        let registry = LoggerRegistry::build(&doc.config)?;

        for name in registry.names() {
            let Some(logger) = registry.get(name) else {
                continue;
            };
            ui.message(&format!("{} (level {})", name, logger.threshold()));
            for level in PREVIEW_LEVELS {
                let record = LogRecordFields::new(name, level, format!("{} preview", name))
                    .at("installer", "preview", 1);
                for (handler, line) in logger.render(&record) {
                    ui.message(&format!("  [{}] {}", handler, line));
                }
            }
        }
        Ok(CommandResult::success())
    }

    fn schema(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = SchemaGenerator::new().generate();
        let text = serde_json::to_string_pretty(&schema).map_err(|e| {
            ProvisionError::ConfigValidationError {
                message: format!("Cannot serialize schema: {}", e),
            }
        })?;
        ui.message(&text);
        Ok(CommandResult::success())
    }

    fn next_file(&self, args: &NextFileArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let dir = match &args.dir {
            Some(dir) => self.project_root.join(dir),
            None => self.project_root.join(DEFAULT_LOG_DIR),
        };
        let path = next_log_path(&dir, Local::now().date_naive());
        ui.message(&path.display().to_string());
        Ok(CommandResult::success())
    }
}

impl Command for LogConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.command {
            LogConfigCommands::Check(args) => self.check(args, ui),
            LogConfigCommands::Show(args) => self.show(args, ui),
            LogConfigCommands::Schema => self.schema(ui),
            LogConfigCommands::NextFile(args) => self.next_file(args, ui),
        }
    }
}

/// Format diagnostics using the formatter for `format`.
fn format_output(format: OutputFormat, diagnostics: &[LintDiagnostic]) -> String {
    let mut output = Vec::new();

    let written = match format {
        OutputFormat::Json => JsonFormatter::new().format(diagnostics, &mut output),
        // Lines are routed through the UI, which applies its own colors
        OutputFormat::Human => HumanFormatter::new(false).format(diagnostics, &mut output),
    };
    if let Err(e) = written {
        tracing::warn!("Failed to format diagnostics: {}", e);
    }

    String::from_utf8(output).unwrap_or_default()
}
