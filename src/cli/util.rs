//! CLI Common Utilities
//!
//! Shared context for command handlers: resolved working directory plus the
//! merged configuration.

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigLoader};
use crate::types::{DocgenError, Result};

/// Command execution context
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Directory the generator is looked up in and run from
    pub project_root: PathBuf,
    /// Loaded configuration
    pub config: Config,
    /// Explicit config file, when `--config` was given
    pub config_file: Option<PathBuf>,
}

impl CommandContext {
    /// Resolve the working directory and load configuration for it
    pub fn load(dir: Option<&Path>, config_file: Option<&Path>) -> Result<Self> {
        let project_root = resolve_dir(dir)?;
        let config = ConfigLoader::load(&project_root, config_file)?;

        Ok(Self {
            project_root,
            config,
            config_file: config_file.map(Path::to_path_buf),
        })
    }

    /// Project config path in effect (explicit file or `.docgen/config.toml`)
    pub fn config_path(&self) -> PathBuf {
        self.config_file
            .clone()
            .unwrap_or_else(|| ConfigLoader::project_config_path(&self.project_root))
    }
}

/// Working directory from `--dir`, defaulting to the process directory
pub fn resolve_dir(dir: Option<&Path>) -> Result<PathBuf> {
    match dir {
        Some(dir) if dir.is_dir() => Ok(dir.to_path_buf()),
        Some(dir) => Err(DocgenError::config(format!(
            "Working directory does not exist: {}",
            dir.display()
        ))),
        None => Ok(std::env::current_dir()?),
    }
}
