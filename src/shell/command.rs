//! External command execution.
//!
//! Commands are spawned directly (no intermediate shell) so interpreter
//! paths containing spaces need no quoting.

use crate::error::{ProvisionError, Result};
use std::collections::HashMap;
use std::ffi::OsString;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Executable to run.
    pub program: PathBuf,
    /// Arguments passed verbatim.
    pub args: Vec<OsString>,
}

impl CommandSpec {
    /// Create a spec for `program` with no arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Human-readable command line, for messages and logs.
    pub fn display(&self) -> String {
        let mut parts = vec![quote_for_display(&self.program.to_string_lossy())];
        parts.extend(
            self.args
                .iter()
                .map(|a| quote_for_display(&a.to_string_lossy())),
        );
        parts.join(" ")
    }

    fn to_command(&self, options: &CommandOptions) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        if let Some(cwd) = &options.cwd {
            cmd.current_dir(cwd);
        }

        for (key, value) in &options.env {
            cmd.env(key, value);
        }

        cmd
    }
}

fn quote_for_display(part: &str) -> String {
    if part.contains(' ') {
        format!("\"{}\"", part)
    } else {
        part.to_string()
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

/// Output line from command execution.
#[derive(Debug, Clone)]
pub enum OutputLine {
    Stdout(String),
    Stderr(String),
}

/// Callback for streaming output.
pub type OutputCallback = Box<dyn Fn(OutputLine) + Send>;

/// Execute a command and wait for it.
pub fn execute(spec: &CommandSpec, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let mut cmd = spec.to_command(options);

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    tracing::debug!("Executing: {}", spec.display());

    let output = cmd.output().map_err(|e| {
        tracing::debug!("Failed to spawn {}: {}", spec.display(), e);
        ProvisionError::CommandFailed {
            command: spec.display(),
            code: None,
        }
    })?;

    let duration = start.elapsed();

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Execute a command with streaming output.
pub fn execute_streaming(
    spec: &CommandSpec,
    options: &CommandOptions,
    callback: OutputCallback,
) -> Result<CommandResult> {
    let start = Instant::now();
    let mut cmd = spec.to_command(options);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!("Executing (streaming): {}", spec.display());

    let spawn_failed = || ProvisionError::CommandFailed {
        command: spec.display(),
        code: None,
    };

    let mut child = cmd.spawn().map_err(|_| spawn_failed())?;

    let stdout = child.stdout.take().ok_or_else(spawn_failed)?;
    let stderr = child.stderr.take().ok_or_else(spawn_failed)?;

    let (tx, rx) = mpsc::channel();
    let tx_stdout = tx.clone();
    let tx_stderr = tx;

    let stdout_handle = thread::spawn(move || {
        let reader = BufReader::new(stdout);
        let mut output = String::new();
        for line in reader.lines().map_while(std::result::Result::ok) {
            output.push_str(&line);
            output.push('\n');
            let _ = tx_stdout.send(OutputLine::Stdout(line));
        }
        output
    });

    let stderr_handle = thread::spawn(move || {
        let reader = BufReader::new(stderr);
        let mut output = String::new();
        for line in reader.lines().map_while(std::result::Result::ok) {
            output.push_str(&line);
            output.push('\n');
            let _ = tx_stderr.send(OutputLine::Stderr(line));
        }
        output
    });

    for line in rx {
        callback(line);
    }

    let stdout_output = stdout_handle.join().unwrap_or_default();
    let stderr_output = stderr_handle.join().unwrap_or_default();

    let status = child.wait().map_err(|_| spawn_failed())?;
    let duration = start.elapsed();

    if status.success() {
        Ok(CommandResult::success(
            stdout_output,
            stderr_output,
            duration,
        ))
    } else {
        Ok(CommandResult::failure(
            status.code(),
            stdout_output,
            stderr_output,
            duration,
        ))
    }
}

/// Execute a command and collect output without streaming.
pub fn execute_quiet(spec: &CommandSpec, cwd: Option<&Path>) -> Result<CommandResult> {
    let options = CommandOptions {
        cwd: cwd.map(|p| p.to_path_buf()),
        capture_stdout: true,
        capture_stderr: true,
        ..Default::default()
    };
    execute(spec, &options)
}
