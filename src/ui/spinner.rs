//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::shell::{OutputCallback, OutputLine};

use super::theme::Theme;
use super::SpinnerHandle;

/// A progress spinner for long-running operations.
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        // The template is a literal; parsing it cannot fail.
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Create a spinner that doesn't show (for quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    fn finish_with(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let line = Theme::detect().format_success(msg);
        self.finish_with(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = Theme::detect().format_error(msg);
        self.finish_with(line);
    }

    fn finish_skipped(&mut self, msg: &str) {
        let line = Theme::detect().format_skipped(msg);
        self.finish_with(line);
    }

    fn progress_bar(&self) -> Option<ProgressBar> {
        Some(self.bar.clone())
    }
}

/// Create an output callback that updates a spinner with live output lines.
///
/// Keeps the last `max_lines` lines of command output under the base message
/// so a long `pip install` visibly makes progress.
pub fn live_output_callback(
    bar: ProgressBar,
    base_message: String,
    max_lines: usize,
) -> OutputCallback {
    let buffer: Arc<Mutex<VecDeque<String>>> = Arc::new(Mutex::new(VecDeque::new()));
    let theme = Theme::detect();

    Box::new(move |line: OutputLine| {
        let text = match &line {
            OutputLine::Stdout(s) | OutputLine::Stderr(s) => s.trim_end().to_string(),
        };

        if text.is_empty() {
            return;
        }

        let display_text = if text.chars().count() > 72 {
            let head: String = text.chars().take(69).collect();
            format!("{}...", head)
        } else {
            text
        };

        let Ok(mut buf) = buffer.lock() else {
            return;
        };
        buf.push_back(display_text);
        while buf.len() > max_lines {
            buf.pop_front();
        }

        let mut msg = base_message.clone();
        for line in buf.iter() {
            msg.push_str("\n    ");
            msg.push_str(&theme.dim.apply_to(format!("» {}", line)).to_string());
        }

        bar.set_message(msg);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_spinner_finishes() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.set_message("Updated");
        spinner.finish_success("Done");
    }

    #[test]
    fn hidden_spinner_finish_error() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.finish_error("Failed");
    }

    #[test]
    fn hidden_spinner_progress_bar_returns_some() {
        let spinner = ProgressSpinner::hidden();
        assert!(spinner.progress_bar().is_some());
    }

    #[test]
    fn live_output_callback_keeps_last_lines() {
        let bar = ProgressBar::hidden();
        let callback = live_output_callback(bar.clone(), "Installing...".to_string(), 2);

        callback(OutputLine::Stdout("Collecting pandas".to_string()));
        assert!(bar.message().contains("Collecting pandas"));

        callback(OutputLine::Stderr("Collecting pyyaml".to_string()));
        callback(OutputLine::Stdout("Installing collected packages".to_string()));
        let msg = bar.message();
        assert!(msg.contains("Installing..."));
        assert!(!msg.contains("Collecting pandas"));
        assert!(msg.contains("Collecting pyyaml"));
        assert!(msg.contains("Installing collected packages"));

        bar.finish();
    }

    #[test]
    fn live_output_callback_skips_empty_lines() {
        let bar = ProgressBar::hidden();
        let callback = live_output_callback(bar.clone(), "Running...".to_string(), 2);

        callback(OutputLine::Stdout("".to_string()));
        callback(OutputLine::Stdout("real output".to_string()));
        let msg = bar.message();
        assert!(msg.contains("real output"));
        assert_eq!(msg.matches('\n').count(), 1);

        bar.finish();
    }

    #[test]
    fn live_output_callback_truncates_long_lines() {
        let bar = ProgressBar::hidden();
        let callback = live_output_callback(bar.clone(), "Running...".to_string(), 2);

        callback(OutputLine::Stdout("x".repeat(100)));
        let msg = bar.message();
        assert!(msg.contains("..."));
        assert!(!msg.contains(&"x".repeat(100)));

        bar.finish();
    }
}
