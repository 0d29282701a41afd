//! pyprov CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pyprov::cli::{Cli, CommandDispatcher, Commands};
use pyprov::shell::is_ci;
use pyprov::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Diagnostics go to stderr so stdout stays the operator transcript.
///
/// `--debug` forces `pyprov=debug`; otherwise `RUST_LOG` applies, falling
/// back to `pyprov=info`.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pyprov=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pyprov=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Whether prompts may use the terminal UI.
///
/// Only `install` asks questions, so only it carries `--non-interactive`.
/// Under CI every command answers from `PYPROV_PROMPT_<KEY>` or stdin, and
/// `create_ui` makes the same choice when stdout is not a terminal.
fn wants_terminal_prompts(cli: &Cli) -> bool {
    match &cli.command {
        Some(Commands::Install(args)) if args.non_interactive => false,
        _ => !is_ci(),
    }
}

fn project_root(cli: &Cli) -> PathBuf {
    match &cli.project {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_default(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    tracing::debug!("Parsed arguments: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mode = OutputMode::from_flags(cli.quiet, cli.verbose);
    let mut ui = create_ui(wants_terminal_prompts(&cli), mode);

    match CommandDispatcher::new(project_root(&cli)).dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
