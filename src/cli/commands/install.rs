//! Install command implementation.
//!
//! The `pyprov install` command walks the operator through the install
//! gates and provisions the virtual environment.

use std::path::{Path, PathBuf};

use crate::cli::args::InstallArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::install::{InstallOutcome, Installer, SystemToolchain};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: InstallArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InstallArgs {
        &self.args
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;
        let toolchain = SystemToolchain;
        let installer = Installer::new(&self.project_root, &config, &toolchain);

        // A cancelled install is an answer, not a failure
        match installer.run(ui)? {
            InstallOutcome::Completed => Ok(CommandResult::success()),
            InstallOutcome::Aborted(reason) => {
                tracing::debug!("Install aborted: {:?}", reason);
                Ok(CommandResult::success())
            }
        }
    }
}
