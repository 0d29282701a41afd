//! The interactive installer.
//!
//! [`flow`] holds the gate state machine, [`layout`] the paths it works on,
//! [`toolchain`] the external commands it runs and [`installer`] the driver
//! tying them to a [`UserInterface`](crate::ui::UserInterface).

pub mod flow;
pub mod installer;
pub mod layout;
pub mod toolchain;

pub use flow::{
    is_affirmative, normalize_path_input, transition, AbortReason, Effect, FlowInput,
    InstallState, Transition,
};
pub use installer::{InstallOutcome, Installer, COMPLETED_MESSAGE, EXIT_PROMPT};
pub use layout::ProjectLayout;
pub use toolchain::{ProvisionStep, SystemToolchain, Toolchain};
