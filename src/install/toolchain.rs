//! Provisioning commands and the toolchain that runs them.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::shell::{
    execute, execute_streaming, CommandOptions, CommandResult, CommandSpec, OutputCallback,
};

/// One external command run while provisioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionStep {
    /// `<interpreter> -m venv <env_dir>`
    CreateEnvironment {
        interpreter: PathBuf,
        env_dir: PathBuf,
    },
    /// `<env python> -m pip install --upgrade <packages>`
    UpgradeBootstrap {
        python: PathBuf,
        packages: Vec<String>,
    },
    /// `<env python> -m pip install -r <manifest>`
    InstallRequirements { python: PathBuf, manifest: PathBuf },
}

impl ProvisionStep {
    /// The command line for this step.
    pub fn command(&self) -> CommandSpec {
        match self {
            Self::CreateEnvironment {
                interpreter,
                env_dir,
            } => CommandSpec::new(interpreter)
                .args(["-m", "venv"])
                .arg(env_dir),
            Self::UpgradeBootstrap { python, packages } => CommandSpec::new(python)
                .args(["-m", "pip", "install", "--upgrade"])
                .args(packages),
            Self::InstallRequirements { python, manifest } => CommandSpec::new(python)
                .args(["-m", "pip", "install", "-r"])
                .arg(manifest),
        }
    }

    /// Spinner text while the step runs.
    pub fn label(&self) -> String {
        match self {
            Self::CreateEnvironment { env_dir, .. } => {
                format!("Creating virtual environment in {}", env_dir.display())
            }
            Self::UpgradeBootstrap { packages, .. } => {
                format!("Upgrading {}", packages.join(", "))
            }
            Self::InstallRequirements { manifest, .. } => {
                format!("Installing packages from {}", display_name(manifest))
            }
        }
    }

    /// Spinner text once the step succeeded.
    pub fn done_label(&self) -> String {
        match self {
            Self::CreateEnvironment { .. } => "Virtual environment created".to_string(),
            Self::UpgradeBootstrap { packages, .. } => {
                format!("Upgraded {}", packages.join(", "))
            }
            Self::InstallRequirements { manifest, .. } => {
                format!("Installed packages from {}", display_name(manifest))
            }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Runs provisioning commands.
///
/// The production implementation spawns real processes; tests substitute a
/// recorder so the installer can be driven without a Python installation.
pub trait Toolchain {
    /// Run one command in `cwd`.
    ///
    /// When `output` is given, each output line is passed to it as it arrives.
    /// A non-zero exit is reported through [`CommandResult::success`], not as
    /// an error.
    fn run(
        &self,
        spec: &CommandSpec,
        cwd: &Path,
        output: Option<OutputCallback>,
    ) -> Result<CommandResult>;
}

/// Toolchain that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToolchain;

impl Toolchain for SystemToolchain {
    fn run(
        &self,
        spec: &CommandSpec,
        cwd: &Path,
        output: Option<OutputCallback>,
    ) -> Result<CommandResult> {
        let options = CommandOptions {
            cwd: Some(cwd.to_path_buf()),
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        };

        match output {
            Some(callback) => execute_streaming(spec, &options, callback),
            None => execute(spec, &options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_environment_command() {
        let step = ProvisionStep::CreateEnvironment {
            interpreter: PathBuf::from("/opt/python3.11/bin/python3"),
            env_dir: PathBuf::from("/srv/app/env"),
        };
        assert_eq!(
            step.command().display(),
            "/opt/python3.11/bin/python3 -m venv /srv/app/env"
        );
        assert!(step.label().contains("/srv/app/env"));
    }

    #[test]
    fn upgrade_bootstrap_command() {
        let step = ProvisionStep::UpgradeBootstrap {
            python: PathBuf::from("env/bin/python"),
            packages: vec!["pip".to_string(), "setuptools".to_string()],
        };
        assert_eq!(
            step.command().display(),
            "env/bin/python -m pip install --upgrade pip setuptools"
        );
        assert_eq!(step.done_label(), "Upgraded pip, setuptools");
    }

    #[test]
    fn install_requirements_command() {
        let step = ProvisionStep::InstallRequirements {
            python: PathBuf::from("env/bin/python"),
            manifest: PathBuf::from("/srv/app/requirements.txt"),
        };
        assert_eq!(
            step.command().display(),
            "env/bin/python -m pip install -r /srv/app/requirements.txt"
        );
        assert_eq!(step.label(), "Installing packages from requirements.txt");
    }

    #[cfg(unix)]
    #[test]
    fn system_toolchain_reports_exit_status() {
        let temp = tempfile::TempDir::new().unwrap();
        let ok = CommandSpec::new("sh").args(["-c", "exit 0"]);
        let failing = CommandSpec::new("sh").args(["-c", "exit 2"]);

        assert!(SystemToolchain.run(&ok, temp.path(), None).unwrap().success);
        let result = SystemToolchain.run(&failing, temp.path(), None).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(2));
    }
}
