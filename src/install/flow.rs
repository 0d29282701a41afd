//! Installer gates as a state machine.
//!
//! [`transition`] is a pure function over the current state and one input.
//! It never touches the terminal or the filesystem; the
//! [`Installer`](super::Installer) gathers inputs, applies the returned
//! [`Effect`]s and performs the work of the action states.
//!
//! ```text
//! AwaitInstallConfirm --y--> DetectEnv --absent--> AwaitPath --exists--> Provision
//!         |                     |                      |                    |
//!         no                 present                missing                 v
//!         v                     v                      v                CreateDirs
//!      Aborted        AwaitReinstallConfirm         Aborted                 |
//!                          |          |                                     v
//!                          no         y (remove env)                       Done
//!                          v          v
//!                       Aborted    AwaitPath
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ProvisionError, Result};

/// Prompt key of the top-level install gate.
pub const INSTALL_KEY: &str = "install";
/// Prompt key of the reinstall gate.
pub const REINSTALL_KEY: &str = "reinstall";
/// Prompt key of the interpreter path prompt.
pub const INTERPRETER_KEY: &str = "interpreter";

/// Question of the top-level install gate.
pub const INSTALL_QUESTION: &str = "Do you wish to install the application? (Y/N)";
/// Question of the reinstall gate.
pub const REINSTALL_QUESTION: &str =
    "A python virtual environment already exists. Do you wish to reinstall? (Y/N)";
/// Question of the interpreter path prompt.
pub const INTERPRETER_QUESTION: &str = "Enter path to home python executable";

/// States of the installer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallState {
    /// Waiting for the answer to the install gate.
    AwaitInstallConfirm,
    /// Checking for an existing environment marker.
    DetectEnv,
    /// Waiting for the answer to the reinstall gate.
    AwaitReinstallConfirm,
    /// Waiting for the base interpreter path.
    AwaitPath,
    /// Creating the environment and installing packages.
    Provision {
        /// Base interpreter the environment is created from.
        interpreter: PathBuf,
    },
    /// Creating the working directory skeleton.
    CreateDirs,
    /// Finished successfully.
    Done,
    /// Finished without installing.
    Aborted(AbortReason),
}

impl InstallState {
    /// Returns true for `Done` and `Aborted`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Aborted(_))
    }

    /// Short state name for logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AwaitInstallConfirm => "AwaitInstallConfirm",
            Self::DetectEnv => "DetectEnv",
            Self::AwaitReinstallConfirm => "AwaitReinstallConfirm",
            Self::AwaitPath => "AwaitPath",
            Self::Provision { .. } => "Provision",
            Self::CreateDirs => "CreateDirs",
            Self::Done => "Done",
            Self::Aborted(_) => "Aborted",
        }
    }
}

impl fmt::Display for InstallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why the installer stopped without installing.
///
/// None of these is an error: the run still exits with status 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// The install gate was not affirmed.
    InstallDeclined,
    /// An environment exists and the reinstall gate was not affirmed.
    ReinstallDeclined,
    /// The interpreter path does not exist.
    InvalidPath(PathBuf),
}

impl AbortReason {
    /// The fixed message printed for this abort.
    pub fn message(&self) -> String {
        match self {
            Self::InstallDeclined => "Installation cancelled.".to_string(),
            Self::ReinstallDeclined => "Reinstallation cancelled.".to_string(),
            Self::InvalidPath(path) => format!("Invalid path: {}", path.display()),
        }
    }
}

/// One input fed to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowInput {
    /// A line typed at a gate.
    Answer(String),
    /// Result of looking for the environment marker.
    EnvProbe { present: bool },
    /// Interpreter path as entered, with its existence check.
    PathProbe { path: PathBuf, exists: bool },
    /// The work of an action state finished.
    StepCompleted,
}

/// Side effect to apply before entering the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Recursively delete the existing environment directory.
    RemoveEnvironment,
}

/// Outcome of a single transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State to enter.
    pub next: InstallState,
    /// Effect to apply first, if any.
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(next: InstallState) -> Self {
        Self { next, effect: None }
    }

    fn with_effect(next: InstallState, effect: Effect) -> Self {
        Self {
            next,
            effect: Some(effect),
        }
    }
}

/// Whether a gate answer affirms: `y` in either case, surrounding whitespace ignored.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Normalize a typed interpreter path.
///
/// Trims whitespace and one pair of surrounding double quotes, which Windows
/// Explorer adds when copying a path.
pub fn normalize_path_input(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(unquoted.trim())
}

/// Compute the next state.
///
/// # Errors
///
/// Returns `InvalidTransition` when the input does not belong to the state,
/// including any input to a terminal state.
pub fn transition(state: &InstallState, input: FlowInput) -> Result<Transition> {
    use InstallState as S;

    let next = match (state, input) {
        (S::AwaitInstallConfirm, FlowInput::Answer(answer)) => {
            if is_affirmative(&answer) {
                Transition::to(S::DetectEnv)
            } else {
                Transition::to(S::Aborted(AbortReason::InstallDeclined))
            }
        }
        (S::DetectEnv, FlowInput::EnvProbe { present }) => {
            if present {
                Transition::to(S::AwaitReinstallConfirm)
            } else {
                Transition::to(S::AwaitPath)
            }
        }
        (S::AwaitReinstallConfirm, FlowInput::Answer(answer)) => {
            if is_affirmative(&answer) {
                Transition::with_effect(S::AwaitPath, Effect::RemoveEnvironment)
            } else {
                Transition::to(S::Aborted(AbortReason::ReinstallDeclined))
            }
        }
        (S::AwaitPath, FlowInput::PathProbe { path, exists }) => {
            if exists {
                Transition::to(S::Provision { interpreter: path })
            } else {
                Transition::to(S::Aborted(AbortReason::InvalidPath(path)))
            }
        }
        (S::Provision { .. }, FlowInput::StepCompleted) => Transition::to(S::CreateDirs),
        (S::CreateDirs, FlowInput::StepCompleted) => Transition::to(S::Done),
        (state, input) => {
            return Err(ProvisionError::InvalidTransition {
                state: state.to_string(),
                input: format!("{:?}", input),
            })
        }
    };

    Ok(next)
}

/// Resolve a typed interpreter path against the project root.
///
/// Absolute paths are returned unchanged.
pub fn resolve_interpreter(project_root: &Path, typed: &Path) -> PathBuf {
    project_root.join(typed)
}
