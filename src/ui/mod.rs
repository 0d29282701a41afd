//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for driving the installer in tests
//! - Prompts, spinners and themed output
//!
//! # Example
//!
//! ```
//! use pyprov::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Environment setup");
//! ui.success("Installation completed.");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI, SpinnerStatus, StepOutcome};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use spinner::{live_output_callback, ProgressSpinner};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, StepMark, Theme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Block until the operator presses a key.
    ///
    /// Implementations that have no operator attached return immediately.
    fn wait_for_keypress(&mut self, msg: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Mark as skipped.
    fn finish_skipped(&mut self, msg: &str);

    /// The underlying progress bar, for streaming command output into it.
    fn progress_bar(&self) -> Option<indicatif::ProgressBar> {
        None
    }
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides and test responses).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}

impl Prompt {
    /// A yes/no gate whose raw answer is handed back unchanged.
    pub fn gate(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Gate,
            default: None,
        }
    }

    /// A free-form text prompt.
    pub fn input(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input,
            default: None,
        }
    }
}

/// The type of prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptType {
    /// Yes/no question answered by typing a line.
    ///
    /// Unlike a confirm widget the answer is not coerced to a boolean, so the
    /// caller decides what counts as affirmative.
    Gate,
    /// Free-form text input.
    Input,
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// The line the operator typed.
    String(String),
}

impl PromptResult {
    /// Get as string.
    pub fn as_string(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
        }
    }

    /// Consume into the typed line.
    pub fn into_string(self) -> String {
        match self {
            Self::String(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_result_as_string() {
        assert_eq!(
            PromptResult::String("hello".to_string()).as_string(),
            "hello"
        );
    }

    #[test]
    fn prompt_result_into_string() {
        assert_eq!(PromptResult::String("y".to_string()).into_string(), "y");
    }

    #[test]
    fn gate_constructor_sets_type() {
        let prompt = Prompt::gate("install", "Install?");
        assert_eq!(prompt.key, "install");
        assert_eq!(prompt.prompt_type, PromptType::Gate);
        assert!(prompt.default.is_none());
    }

    #[test]
    fn input_constructor_sets_type() {
        let prompt = Prompt::input("interpreter", "Path?");
        assert_eq!(prompt.question, "Path?");
        assert_eq!(prompt.prompt_type, PromptType::Input);
    }
}
