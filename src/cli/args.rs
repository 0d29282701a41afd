//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::lint::OutputFormat;

/// pyprov - Python virtual environment provisioning.
#[derive(Debug, Parser)]
#[command(name = "pyprov")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to installer config file (overrides pyprov.yml in the project root)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the virtual environment and working directories (default if no command specified)
    Install(InstallArgs),

    /// Inspect the logging configuration
    #[command(subcommand)]
    LogConfig(LogConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Answer prompts from PYPROV_PROMPT_<KEY> variables or stdin, even on a terminal
    #[arg(long)]
    pub non_interactive: bool,
}

/// `log-config` subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum LogConfigCommands {
    /// Load and lint a logging document
    Check(CheckArgs),

    /// Print the default logging document
    Show(ShowArgs),

    /// Print a JSON Schema of the logging document
    Schema,

    /// Print the path of the next dated log file
    NextFile(NextFileArgs),
}

/// Arguments for `log-config check`.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Document to check (default: log_config.yaml in the project root, else the built-in one)
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `log-config show`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Render a sample record with every formatter
    #[arg(long)]
    pub preview: bool,
}

/// Arguments for `log-config next-file`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct NextFileArgs {
    /// Log directory (default: logs under the project root)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_is_none() {
        let cli = Cli::try_parse_from(["pyprov"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["pyprov", "install", "--project", "/srv/app", "--verbose"])
                .unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/srv/app")));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Install(_))));
    }

    #[test]
    fn parses_log_config_check() {
        let cli = Cli::try_parse_from([
            "pyprov",
            "log-config",
            "check",
            "custom.yaml",
            "--format",
            "json",
            "--strict",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::LogConfig(LogConfigCommands::Check(args))) => {
                assert_eq!(args.path, Some(PathBuf::from("custom.yaml")));
                assert_eq!(args.format, OutputFormat::Json);
                assert!(args.strict);
            }
            other => panic!("Expected log-config check, got {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["pyprov", "log-config", "check", "--format", "sarif"]).is_err());
    }
}
