//! Platform-specific paths and environment detection.

use std::path::{Path, PathBuf};

/// Directory inside a virtual environment that holds its executables.
pub fn venv_bin_dir_name() -> &'static str {
    if cfg!(windows) {
        "Scripts"
    } else {
        "bin"
    }
}

/// File name of the interpreter inside a virtual environment.
pub fn venv_python_file_name() -> &'static str {
    if cfg!(windows) {
        "python.exe"
    } else {
        "python"
    }
}

/// Path of the interpreter inside the virtual environment rooted at `env_dir`.
///
/// Its presence is what marks an environment as already installed.
pub fn venv_python(env_dir: &Path) -> PathBuf {
    env_dir
        .join(venv_bin_dir_name())
        .join(venv_python_file_name())
}

/// Check if running in a CI environment.
///
/// Used to force non-interactive mode in `main()`. Checks common CI
/// environment variables: `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`,
/// `TRAVIS`, `JENKINS_URL`, `TF_BUILD`.
pub fn is_ci() -> bool {
    [
        "CI",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "CIRCLECI",
        "TRAVIS",
        "JENKINS_URL",
        "TF_BUILD",
    ]
    .iter()
    .any(|var| std::env::var(var).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn venv_python_is_inside_env_dir() {
        let python = venv_python(Path::new("env"));
        assert!(python.starts_with("env"));
        assert!(python.ends_with(venv_python_file_name()));
    }

    #[cfg(windows)]
    #[test]
    fn venv_python_uses_scripts_on_windows() {
        assert_eq!(
            venv_python(Path::new("env")),
            PathBuf::from("env").join("Scripts").join("python.exe")
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn venv_python_uses_bin_elsewhere() {
        assert_eq!(
            venv_python(Path::new("env")),
            PathBuf::from("env").join("bin").join("python")
        );
    }

    #[test]
    fn is_ci_detects_environment() {
        let _ = is_ci();
    }
}
