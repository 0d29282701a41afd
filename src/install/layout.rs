//! On-disk layout of an installed project.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::InstallerConfig;
use crate::error::Result;
use crate::shell::venv_python;

/// Paths the installer reads and writes, resolved against the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    env_dir: PathBuf,
    requirements: PathBuf,
    directories: Vec<PathBuf>,
}

impl ProjectLayout {
    /// Resolve the configured paths under `root`.
    pub fn new(root: &Path, config: &InstallerConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            env_dir: root.join(&config.env_dir),
            requirements: root.join(&config.requirements),
            directories: config.directories.iter().map(|d| root.join(d)).collect(),
        }
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Virtual environment directory.
    pub fn env_dir(&self) -> &Path {
        &self.env_dir
    }

    /// Dependency manifest.
    pub fn requirements(&self) -> &Path {
        &self.requirements
    }

    /// Working directories, in creation order.
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Interpreter inside the environment; doubles as the environment marker.
    pub fn env_python(&self) -> PathBuf {
        venv_python(&self.env_dir)
    }

    /// Whether an environment is already installed.
    pub fn environment_exists(&self) -> bool {
        self.env_python().is_file()
    }

    /// Recursively delete the environment directory.
    ///
    /// A directory that is already gone is not an error.
    pub fn remove_environment(&self) -> Result<()> {
        match fs::remove_dir_all(&self.env_dir) {
            Ok(()) => {
                tracing::info!("Removed environment {}", self.env_dir.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Create every working directory, returning those that did not exist yet.
    pub fn create_directories(&self) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        for dir in &self.directories {
            if dir.is_dir() {
                tracing::debug!("Directory {} already exists", dir.display());
                continue;
            }
            fs::create_dir_all(dir)?;
            tracing::debug!("Created {}", dir.display());
            created.push(dir.clone());
        }
        Ok(created)
    }
}
