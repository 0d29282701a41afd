//! pyprov - Python virtual environment provisioning.
//!
//! pyprov asks an operator whether to install, whether to rebuild an
//! existing environment, and which interpreter to use. It then creates
//! `env/`, installs `requirements.txt` and makes the working directories.
//! It also loads, lints and resolves the YAML logging document the
//! provisioned application starts from.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Installer configuration
//! - [`error`] - Error types and result aliases
//! - [`install`] - Install gates and provisioning
//! - [`lint`] - Logging document linting
//! - [`logconf`] - Logging document loading and logger resolution
//! - [`shell`] - Shell command execution
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use pyprov::install::{transition, FlowInput, InstallState};
//!
//! let next = transition(
//!     &InstallState::AwaitInstallConfirm,
//!     FlowInput::Answer("n".to_string()),
//! )
//! .unwrap();
//! assert!(next.next.is_terminal());
//! assert!(next.effect.is_none());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod install;
pub mod lint;
pub mod logconf;
pub mod shell;
pub mod ui;

pub use error::{ProvisionError, Result};
