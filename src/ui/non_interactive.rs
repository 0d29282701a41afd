//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;
use std::io::{self, BufRead};

use crate::error::{ProvisionError, Result};

use super::theme::{StepMark, Theme};
use super::{OutputMode, Prompt, PromptResult, SpinnerHandle, UserInterface};

/// Environment variable prefix for prompt answers.
pub const PROMPT_ENV_PREFIX: &str = "PYPROV_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `PYPROV_PROMPT_<KEY>` environment variables,
/// then the prompt default, then one line of input. End of input is an
/// empty answer.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: Theme,
    env_overrides: HashMap<String, String>,
    input: Box<dyn BufRead>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI reading answers from stdin.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            theme: Theme::plain(),
            env_overrides,
            input: Box::new(io::stdin().lock()),
        }
    }

    /// Create with explicit overrides and no input (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self::with_input(mode, overrides, Box::new(io::empty()))
    }

    /// Create with explicit overrides and input (for testing).
    pub fn with_input(
        mode: OutputMode,
        overrides: HashMap<String, String>,
        input: Box<dyn BufRead>,
    ) -> Self {
        Self {
            mode,
            theme: Theme::plain(),
            env_overrides: overrides,
            input,
        }
    }

    fn read_answer(&mut self, prompt: &Prompt) -> Result<String> {
        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .map_err(|e| ProvisionError::PromptUnavailable {
                key: prompt.key.clone(),
                message: format!("cannot read answer: {}", e),
            })?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn echo(&self, prompt: &Prompt, answer: &str) {
        if self.mode.shows_progress() {
            println!("{}: {}", prompt.question, answer);
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key).cloned() {
            tracing::debug!("Answering '{}' from {}", prompt.key, env_key);
            self.echo(prompt, &value);
            return Ok(PromptResult::String(value));
        }

        if let Some(default) = &prompt.default {
            return Ok(PromptResult::String(default.clone()));
        }

        let answer = self.read_answer(prompt)?;
        tracing::debug!("Answering '{}' from input", prompt.key);
        self.echo(prompt, &answer);
        Ok(PromptResult::String(answer))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let visible = self.mode.shows_progress();
        if visible {
            println!("  {}", message);
        }
        Box::new(StepLine { visible })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            println!("\n{}\n", self.theme.format_header(title));
        }
    }

    fn wait_for_keypress(&mut self, _msg: &str) {}

    fn is_interactive(&self) -> bool {
        false
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }
}

/// Prints a step's final line instead of animating (for logs and pipes).
struct StepLine {
    visible: bool,
}

impl StepLine {
    fn finish(&self, mark: StepMark, msg: &str) {
        if self.visible {
            println!("  {}", Theme::plain().mark(mark, msg));
        }
    }
}

impl SpinnerHandle for StepLine {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        self.finish(StepMark::Done, msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(StepMark::Failed, msg);
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.finish(StepMark::Skipped, msg);
    }
}
