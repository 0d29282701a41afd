//! Visual theme and styling.

use console::Style;

/// Marker printed before each line of a finished step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMark {
    /// The step ran and succeeded.
    Done,
    /// The step failed.
    Failed,
    /// The step had nothing to do.
    Skipped,
    /// Something the operator should look at.
    Attention,
}

impl StepMark {
    fn icon(self) -> &'static str {
        match self {
            Self::Done => "✓",
            Self::Failed => "✗",
            Self::Skipped => "○",
            Self::Attention => "⚠",
        }
    }
}

/// Styles used by the installer output.
#[derive(Debug, Clone)]
pub struct Theme {
    done: Style,
    failed: Style,
    attention: Style,
    /// Secondary text: streamed command output, the exit prompt.
    pub dim: Style,
    banner: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// The colored theme.
    pub fn new() -> Self {
        Self {
            done: Style::new().green(),
            failed: Style::new().red().bold(),
            attention: Style::new().color256(208),
            dim: Style::new().dim(),
            banner: Style::new().bold().blue(),
        }
    }

    /// A theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            done: Style::new(),
            failed: Style::new(),
            attention: Style::new(),
            dim: Style::new(),
            banner: Style::new(),
        }
    }

    /// Colored when [`should_use_colors`] allows it, plain otherwise.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// `msg` prefixed with the icon of `mark`, in the mark's style.
    pub fn mark(&self, mark: StepMark, msg: &str) -> String {
        let style = match mark {
            StepMark::Done => &self.done,
            StepMark::Failed => &self.failed,
            StepMark::Attention => &self.attention,
            StepMark::Skipped => &self.dim,
        };
        style.apply_to(format!("{} {}", mark.icon(), msg)).to_string()
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        self.mark(StepMark::Done, msg)
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        self.mark(StepMark::Attention, msg)
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        self.mark(StepMark::Failed, msg)
    }

    /// Format a skipped step.
    pub fn format_skipped(&self, msg: &str) -> String {
        self.mark(StepMark::Skipped, msg)
    }

    /// Format the banner shown before the first gate.
    pub fn format_header(&self, title: &str) -> String {
        let rule = "─".repeat(title.chars().count());
        format!(
            "{}\n{}",
            self.banner.apply_to(title),
            self.dim.apply_to(rule)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
