//! External command execution and platform details.

pub mod command;
pub mod platform;

pub use command::{
    execute, execute_quiet, execute_streaming, CommandOptions, CommandResult, CommandSpec,
    OutputCallback, OutputLine,
};
pub use platform::{is_ci, venv_python};
