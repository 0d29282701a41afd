//! Command-line interface for pyprov.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    CheckArgs, Cli, Commands, CompletionsArgs, InstallArgs, LogConfigCommands, NextFileArgs,
    ShowArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
