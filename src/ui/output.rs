//! Output verbosity.

/// How much of the install run is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Stream pip and venv output under the spinner.
    Verbose,
    /// Header, spinners and messages.
    #[default]
    Normal,
    /// Messages only: no header, no spinners.
    Quiet,
}

impl OutputMode {
    /// Pick the mode for the `--quiet` and `--verbose` flags. Quiet wins.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Whether external command output is streamed.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Whether progress spinners are drawn.
    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Whether the banner and step results are printed.
    pub fn shows_progress(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
