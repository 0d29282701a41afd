//! Drives the installer state machine against a UI and a toolchain.

use std::path::Path;

use crate::config::InstallerConfig;
use crate::error::{ProvisionError, Result};
use crate::ui::{live_output_callback, Prompt, UserInterface};

use super::flow::{
    normalize_path_input, resolve_interpreter, transition, AbortReason, Effect, FlowInput,
    InstallState, INSTALL_KEY, INSTALL_QUESTION, INTERPRETER_KEY, INTERPRETER_QUESTION,
    REINSTALL_KEY, REINSTALL_QUESTION,
};
use super::layout::ProjectLayout;
use super::toolchain::{ProvisionStep, Toolchain};

/// Printed when every step finished.
pub const COMPLETED_MESSAGE: &str = "Installation completed.";
/// Shown while waiting for the final keypress.
pub const EXIT_PROMPT: &str = "Press any key to exit...";

/// Number of live output lines kept under a running step in verbose mode.
const LIVE_OUTPUT_LINES: usize = 3;

/// How an installer run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Environment provisioned and directories created.
    Completed,
    /// Stopped at a gate; nothing past that gate was changed.
    Aborted(AbortReason),
}

/// The interactive installer.
pub struct Installer<'a> {
    config: &'a InstallerConfig,
    layout: ProjectLayout,
    toolchain: &'a dyn Toolchain,
}

impl<'a> Installer<'a> {
    /// Create an installer for the project at `project_root`.
    pub fn new(
        project_root: &Path,
        config: &'a InstallerConfig,
        toolchain: &'a dyn Toolchain,
    ) -> Self {
        Self {
            config,
            layout: ProjectLayout::new(project_root, config),
            toolchain,
        }
    }

    /// The resolved project layout.
    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Run the installer until it completes or aborts.
    ///
    /// Declined gates and a missing interpreter are reported through
    /// [`InstallOutcome::Aborted`]; only failures of the work itself are
    /// errors.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<InstallOutcome> {
        let title = self
            .config
            .app_name
            .as_deref()
            .unwrap_or("Python environment setup");
        ui.show_header(title);

        let mut state = InstallState::AwaitInstallConfirm;

        loop {
            let input = match &state {
                InstallState::AwaitInstallConfirm => {
                    FlowInput::Answer(ask(ui, Prompt::gate(INSTALL_KEY, INSTALL_QUESTION))?)
                }
                InstallState::DetectEnv => FlowInput::EnvProbe {
                    present: self.layout.environment_exists(),
                },
                InstallState::AwaitReinstallConfirm => {
                    FlowInput::Answer(ask(ui, Prompt::gate(REINSTALL_KEY, REINSTALL_QUESTION))?)
                }
                InstallState::AwaitPath => {
                    let raw = ask(ui, Prompt::input(INTERPRETER_KEY, INTERPRETER_QUESTION))?;
                    let path = normalize_path_input(&raw);
                    let exists = !path.as_os_str().is_empty()
                        && resolve_interpreter(self.layout.root(), &path).exists();
                    FlowInput::PathProbe { path, exists }
                }
                InstallState::Provision { interpreter } => {
                    let interpreter = resolve_interpreter(self.layout.root(), interpreter);
                    self.provision(ui, &interpreter)?;
                    FlowInput::StepCompleted
                }
                InstallState::CreateDirs => {
                    self.create_directories(ui)?;
                    FlowInput::StepCompleted
                }
                InstallState::Done => {
                    tracing::info!("Installation completed");
                    ui.success(COMPLETED_MESSAGE);
                    if self.config.pause_on_exit && ui.is_interactive() {
                        ui.wait_for_keypress(EXIT_PROMPT);
                    }
                    return Ok(InstallOutcome::Completed);
                }
                InstallState::Aborted(reason) => {
                    tracing::info!("Installer stopped: {:?}", reason);
                    ui.message(&reason.message());
                    return Ok(InstallOutcome::Aborted(reason.clone()));
                }
            };

            let step = transition(&state, input)?;
            if let Some(effect) = step.effect {
                self.apply(effect, ui)?;
            }
            tracing::debug!("Installer: {} -> {}", state, step.next);
            state = step.next;
        }
    }

    fn apply(&self, effect: Effect, ui: &mut dyn UserInterface) -> Result<()> {
        match effect {
            Effect::RemoveEnvironment => {
                let mut spinner = ui.start_spinner("Removing existing virtual environment");
                match self.layout.remove_environment() {
                    Ok(()) => {
                        spinner.finish_success("Existing virtual environment removed");
                        Ok(())
                    }
                    Err(e) => {
                        spinner.finish_error("Could not remove the existing environment");
                        Err(e)
                    }
                }
            }
        }
    }

    /// The commands provisioning will run, in order.
    ///
    /// The manifest install is left out when the manifest does not exist.
    pub fn provision_plan(&self, interpreter: &Path) -> Vec<ProvisionStep> {
        let python = self.layout.env_python();
        let mut steps = vec![ProvisionStep::CreateEnvironment {
            interpreter: interpreter.to_path_buf(),
            env_dir: self.layout.env_dir().to_path_buf(),
        }];

        if !self.config.bootstrap_packages.is_empty() {
            steps.push(ProvisionStep::UpgradeBootstrap {
                python: python.clone(),
                packages: self.config.bootstrap_packages.clone(),
            });
        }

        if self.layout.requirements().is_file() {
            steps.push(ProvisionStep::InstallRequirements {
                python,
                manifest: self.layout.requirements().to_path_buf(),
            });
        }

        steps
    }

    fn provision(&self, ui: &mut dyn UserInterface, interpreter: &Path) -> Result<()> {
        tracing::info!(
            "Provisioning {} from {}",
            self.layout.env_dir().display(),
            interpreter.display()
        );

        if !self.layout.requirements().is_file() {
            ui.warning(&format!(
                "Dependency manifest {} not found; skipping package installation",
                self.layout.requirements().display()
            ));
        }

        for step in self.provision_plan(interpreter) {
            self.run_step(ui, &step)?;
        }

        Ok(())
    }

    fn run_step(&self, ui: &mut dyn UserInterface, step: &ProvisionStep) -> Result<()> {
        let spec = step.command();
        let label = step.label();
        let mut spinner = ui.start_spinner(&label);

        let callback = if ui.output_mode().shows_command_output() {
            spinner
                .progress_bar()
                .map(|bar| live_output_callback(bar, label.clone(), LIVE_OUTPUT_LINES))
        } else {
            None
        };

        let result = match self.toolchain.run(&spec, self.layout.root(), callback) {
            Ok(result) => result,
            Err(e) => {
                spinner.finish_error(&format!("{} failed to start", label));
                return Err(e);
            }
        };

        tracing::debug!(
            "{} exited with {:?} after {:?}",
            spec.display(),
            result.exit_code,
            result.duration
        );

        if result.success {
            spinner.finish_success(&step.done_label());
            return Ok(());
        }

        spinner.finish_error(&format!("{} failed", label));
        let output = if result.stderr.trim().is_empty() {
            &result.stdout
        } else {
            &result.stderr
        };
        for line in tail(output, 10) {
            ui.message(line);
        }

        Err(ProvisionError::CommandFailed {
            command: spec.display(),
            code: result.exit_code,
        })
    }

    fn create_directories(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let mut spinner = ui.start_spinner("Creating working directories");
        match self.layout.create_directories() {
            Ok(created) => {
                spinner.finish_success(&format!(
                    "Working directories ready ({} created)",
                    created.len()
                ));
                Ok(())
            }
            Err(e) => {
                spinner.finish_error("Could not create working directories");
                Err(e)
            }
        }
    }
}

fn ask(ui: &mut dyn UserInterface, prompt: Prompt) -> Result<String> {
    Ok(ui.prompt(&prompt)?.into_string())
}

fn tail(text: &str, lines: usize) -> Vec<&str> {
    let all: Vec<&str> = text.lines().collect();
    let start = all.len().saturating_sub(lines);
    all[start..].to_vec()
}
