//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Running `pyprov` without a
//! subcommand is the same as `pyprov install`.

pub mod completions;
pub mod dispatcher;
pub mod install;
pub mod log_config;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
