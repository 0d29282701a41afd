//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use pyprov::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("install", "y");
//!
//! let answer = ui.prompt(&Prompt::gate("install", "Install?")).unwrap();
//! assert_eq!(answer.as_string(), "y");
//!
//! ui.success("Done!");
//! assert!(ui.prompts_shown().contains(&"install".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{ProvisionError, Result};

use super::{OutputMode, Prompt, PromptResult, SpinnerHandle, UserInterface};

/// How a spinner was finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    /// Finished successfully.
    Success,
    /// Finished with error.
    Error,
    /// Finished as skipped.
    Skipped,
}

/// A finished step: the spinner's start label, its final line and status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// Label the spinner was started with.
    pub label: String,
    /// Line it was finished with.
    pub result: String,
    /// How it finished.
    pub status: SpinnerStatus,
}

type Outcomes = Rc<RefCell<Vec<StepOutcome>>>;

/// Mock UI implementation for testing.
///
/// Captures every interaction, including how each spinner finished, and
/// answers prompts from responses configured per key.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    outcomes: Outcomes,
    keypress_waits: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer returned for every prompt with `key`.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Labels of the spinners started, in order.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Spinners that were finished, in finishing order.
    pub fn step_outcomes(&self) -> Vec<StepOutcome> {
        self.outcomes.borrow().clone()
    }

    /// Get the messages shown while waiting for a keypress.
    pub fn keypress_waits(&self) -> &[String] {
        &self.keypress_waits
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a success containing `msg` was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a warning containing `msg` was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing `msg` was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Ok(PromptResult::String(response.clone()));
        }

        if let Some(default) = &prompt.default {
            return Ok(PromptResult::String(default.clone()));
        }

        Err(ProvisionError::PromptUnavailable {
            key: prompt.key.clone(),
            message: "no mock response configured".to_string(),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            label: message.to_string(),
            outcomes: Rc::clone(&self.outcomes),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn wait_for_keypress(&mut self, msg: &str) {
        self.keypress_waits.push(msg.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }
}

/// Spinner handed out by [`MockUI`]; reports its finish back to the UI.
#[derive(Debug)]
pub struct MockSpinner {
    label: String,
    outcomes: Outcomes,
}

impl MockSpinner {
    fn finish(&self, msg: &str, status: SpinnerStatus) {
        self.outcomes.borrow_mut().push(StepOutcome {
            label: self.label.clone(),
            result: msg.to_string(),
            status,
        });
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.label = msg.to_string();
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Success);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Error);
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Skipped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.success("Done");
        ui.warning("Be careful");
        ui.error("Oops");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.successes(), &["Done"]);
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("Oops"));
    }

    #[test]
    fn mock_ui_prompt_with_response() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("interpreter", "C:\\Python311\\python.exe");

        let result = ui
            .prompt(&Prompt::input("interpreter", "Interpreter?"))
            .unwrap();
        assert_eq!(result.as_string(), "C:\\Python311\\python.exe");
        assert_eq!(ui.prompts_shown(), &["interpreter"]);
    }

    #[test]
    fn mock_ui_prompt_falls_back_to_default() {
        let mut ui = MockUI::new();
        let mut prompt = Prompt::input("interpreter", "Interpreter?");
        prompt.default = Some("python3".to_string());

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_string(), "python3");
    }

    #[test]
    fn mock_ui_prompt_without_response_errors() {
        let mut ui = MockUI::new();
        let err = ui.prompt(&Prompt::gate("install", "Install?")).unwrap_err();
        assert!(matches!(err, ProvisionError::PromptUnavailable { ref key, .. } if key == "install"));
        assert_eq!(ui.prompts_shown(), &["install"]);
    }

    #[test]
    fn mock_ui_records_step_outcomes() {
        let mut ui = MockUI::new();
        let mut create = ui.start_spinner("Creating virtual environment");
        create.finish_success("Virtual environment created");
        let mut install = ui.start_spinner("Installing requirements");
        install.set_message("Installing requirements (pandas)");
        install.finish_error("Installing requirements failed");
        drop(install);

        assert_eq!(
            ui.spinners(),
            &["Creating virtual environment", "Installing requirements"]
        );
        let outcomes = ui.step_outcomes();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].status, SpinnerStatus::Success);
        assert_eq!(outcomes[1].label, "Installing requirements (pandas)");
        assert_eq!(outcomes[1].status, SpinnerStatus::Error);
    }

    #[test]
    fn mock_ui_records_keypresses() {
        let mut ui = MockUI::new();
        ui.wait_for_keypress("Press any key to exit...");
        assert_eq!(ui.keypress_waits(), &["Press any key to exit..."]);
    }

    #[test]
    fn mock_ui_interactive_flag() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());
        ui.set_interactive(true);
        assert!(ui.is_interactive());
        ui.set_output_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
