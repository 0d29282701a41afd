//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompt_user, NonInteractiveUI, OutputMode, ProgressSpinner, Prompt, PromptResult,
    SpinnerHandle, Theme, UserInterface,
};

/// Terminal UI used when an operator is attached.
///
/// Messages go to stdout; gates are read with dialoguer on the same terminal.
pub struct TerminalUI {
    term: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            theme: Theme::detect(),
            mode,
        }
    }

    fn line(&self, text: &str) {
        if let Err(e) = writeln!(&self.term, "{}", text) {
            tracing::debug!("Terminal write failed: {}", e);
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.line(msg);
    }

    fn success(&mut self, msg: &str) {
        self.line(&self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        self.line(&self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        if let Err(e) = writeln!(Term::stderr(), "{}", line) {
            tracing::debug!("Terminal write failed: {}", e);
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            self.line(&format!("\n{}\n", self.theme.format_header(title)));
        }
    }

    fn wait_for_keypress(&mut self, msg: &str) {
        self.line(&self.theme.dim.apply_to(msg).to_string());
        if let Err(e) = self.term.read_key() {
            tracing::debug!("Keypress wait interrupted: {}", e);
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }
}

/// The terminal UI when `interactive` and stdout is a terminal, otherwise a
/// [`NonInteractiveUI`] reading answers from the environment or stdin.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        tracing::debug!("Using terminal UI");
        Box::new(TerminalUI::new(mode))
    } else {
        tracing::debug!("Using non-interactive UI");
        Box::new(NonInteractiveUI::new(mode))
    }
}
