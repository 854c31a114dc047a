//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/docgen/config.toml)
//! 3. Project config (.docgen/config.toml, or an explicit `--config` file)
//! 4. Environment variables (DOCGEN_* prefix, `__` between nested keys)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::constants::paths;
use crate::types::{DocgenError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain:
    /// defaults → global → project (or `explicit`) → env vars
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Config> {
        let file = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(DocgenError::config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => Self::project_config_path(project_root),
        };

        Self::load_layers(Self::global_config_path().as_deref(), &file)
    }

    /// Merge the given config files over the defaults, then the environment.
    /// Missing files are skipped.
    pub fn load_layers(global: Option<&Path>, project: &Path) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = global
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(global_path));
        }

        if project.exists() {
            debug!("Loading project config from: {}", project.display());
            figment = figment.merge(Toml::file(project));
        }

        // e.g. DOCGEN_GENERATOR__INTERPRETER -> generator.interpreter
        figment = figment.merge(Env::prefixed(paths::ENV_PREFIX).split("__"));

        let config: Config = figment
            .extract()
            .map_err(|e| DocgenError::config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file only (no global, no env)
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| DocgenError::config(format!("Configuration error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/docgen/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join(paths::GLOBAL_DIR_NAME))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join(paths::CONFIG_FILE))
    }

    /// Get project data directory
    pub fn project_dir(project_root: &Path) -> PathBuf {
        project_root.join(paths::PROJECT_DIR)
    }

    /// Get path to project config file
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        Self::project_dir(project_root).join(paths::CONFIG_FILE)
    }

    /// Render the effective configuration as TOML or JSON
    pub fn render(config: &Config, as_json: bool) -> Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(config)?)
        } else {
            toml::to_string_pretty(config).map_err(|e| DocgenError::config(e.to_string()))
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Write the default global config. Returns the file path.
    pub fn init_global(force: bool) -> Result<PathBuf> {
        let global_dir = Self::global_dir().ok_or_else(|| {
            DocgenError::config("Cannot determine global config directory")
        })?;

        Self::write_default(&global_dir, force)
    }

    /// Write the default project config under `project_root`. Returns the file path.
    pub fn init_project(project_root: &Path, force: bool) -> Result<PathBuf> {
        Self::write_default(&Self::project_dir(project_root), force)
    }

    fn write_default(dir: &Path, force: bool) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;

        let config_path = dir.join(paths::CONFIG_FILE);
        if config_path.exists() && !force {
            return Err(DocgenError::config(format!(
                "Config already exists: {}. Use --force to overwrite.",
                config_path.display()
            )));
        }

        fs::write(&config_path, Self::default_config())?;
        info!("Created config: {}", config_path.display());

        Ok(config_path)
    }

    /// Default config file content (TOML)
    fn default_config() -> String {
        r#"# docgen configuration
# Project settings in .docgen/config.toml override ~/.config/docgen/config.toml.

version = "1.0"

[generator]
# Optional generator script, relative to the working directory.
# It is not shipped with the repository; when absent only a warning is printed.
script = "gen_classes.py"
interpreter = "python3"
args = []
timeout_secs = 300
target = "docs/CLASSES.md"

[output]
title = "docgen: GENERATING DOCUMENTATION"
# auto | always | never
color = "auto"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_without_files() {
        let temp_dir = TempDir::new().unwrap();
        let project = ConfigLoader::project_config_path(temp_dir.path());

        let config = ConfigLoader::load_layers(None, &project).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.generator.timeout_secs, 300);
    }

    #[test]
    fn test_project_overrides_global() {
        let temp_dir = TempDir::new().unwrap();
        let global = temp_dir.path().join("global.toml");
        fs::write(
            &global,
            "[generator]\ninterpreter = \"python\"\ntimeout_secs = 10\n",
        )
        .unwrap();

        let project = temp_dir.path().join("project.toml");
        fs::write(&project, "[generator]\ntimeout_secs = 20\n").unwrap();

        let config = ConfigLoader::load_layers(Some(&global), &project).unwrap();
        assert_eq!(config.generator.interpreter, "python");
        assert_eq!(config.generator.timeout_secs, 20);
    }

    #[test]
    fn test_invalid_value_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("config.toml");
        fs::write(&project, "[generator]\ntimeout_secs = 0\n").unwrap();

        let err = ConfigLoader::load_layers(None, &project).unwrap_err();
        assert!(matches!(err, DocgenError::Config(_)));
    }

    #[test]
    fn test_init_project_writes_loadable_config() {
        let temp_dir = TempDir::new().unwrap();

        let path = ConfigLoader::init_project(temp_dir.path(), false).unwrap();
        assert_eq!(path, temp_dir.path().join(".docgen/config.toml"));

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.generator.target, "docs/CLASSES.md");

        // Second init without force refuses to overwrite
        assert!(ConfigLoader::init_project(temp_dir.path(), false).is_err());
        assert!(ConfigLoader::init_project(temp_dir.path(), true).is_ok());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        assert!(ConfigLoader::load(temp_dir.path(), Some(&missing)).is_err());
    }

    #[test]
    fn test_env_override() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("config.toml");

        // SAFETY: no other test reads or writes this variable
        unsafe {
            env::set_var("DOCGEN_OUTPUT__TITLE", "env title");
        }
        let config = ConfigLoader::load_layers(None, &project).unwrap();
        unsafe {
            env::remove_var("DOCGEN_OUTPUT__TITLE");
        }

        assert_eq!(config.output.title, "env title");
    }

    #[test]
    fn test_render_formats() {
        let config = Config::default();
        let json = ConfigLoader::render(&config, true).unwrap();
        assert!(json.contains("\"interpreter\": \"python3\""));

        let toml = ConfigLoader::render(&config, false).unwrap();
        assert!(toml.contains("[generator]"));
    }
}
