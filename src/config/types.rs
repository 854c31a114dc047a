//! Configuration Types
//!
//! All configuration structures with defaults matching the stock generator
//! layout (`gen_classes.py` producing `docs/CLASSES.md`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{generator, output};
use crate::types::{DocgenError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Generator discovery and execution
    pub generator: GeneratorConfig,

    /// Terminal output
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            generator: GeneratorConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    /// Returns `DocgenError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.generator.script.as_os_str().is_empty() {
            return Err(DocgenError::config("generator.script must not be empty"));
        }

        if self.generator.interpreter.trim().is_empty() {
            return Err(DocgenError::config(
                "generator.interpreter must not be empty",
            ));
        }

        if self.generator.target.trim().is_empty() {
            return Err(DocgenError::config("generator.target must not be empty"));
        }

        if self.generator.timeout_secs == 0 {
            return Err(DocgenError::config(
                "generator.timeout_secs must be greater than 0",
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Generator Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Script path, relative to the working directory
    pub script: PathBuf,

    /// Program used to execute the script
    pub interpreter: String,

    /// Extra arguments passed after the script path
    pub args: Vec<String>,

    /// Maximum run time in seconds
    pub timeout_secs: u64,

    /// Documentation file the script produces (used in messages)
    pub target: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            script: PathBuf::from(generator::DEFAULT_SCRIPT),
            interpreter: generator::DEFAULT_INTERPRETER.to_string(),
            args: Vec::new(),
            timeout_secs: generator::DEFAULT_TIMEOUT_SECS,
            target: generator::DEFAULT_TARGET.to_string(),
        }
    }
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Title inside the opening banner
    pub title: String,

    /// Colour handling for status lines
    pub color: ColorMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            title: output::DEFAULT_TITLE.to_string(),
            color: ColorMode::Auto,
        }
    }
}

/// When to emit ANSI colour codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow terminal detection (`NO_COLOR`, `CLICOLOR`, tty)
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against the current stdout
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => console::colors_enabled(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(format!(
                "Unknown color mode: {}. Valid values: auto, always, never",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generator.script, PathBuf::from("gen_classes.py"));
        assert_eq!(config.generator.interpreter, "python3");
        assert_eq!(config.generator.target, "docs/CLASSES.md");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.generator.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_empty_script_rejected() {
        let mut config = Config::default();
        config.generator.script = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_color_mode_parse() {
        assert_eq!("ALWAYS".parse::<ColorMode>(), Ok(ColorMode::Always));
        assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
        assert!("sometimes".parse::<ColorMode>().is_err());
        assert!(ColorMode::Always.enabled());
        assert!(!ColorMode::Never.enabled());
    }
}
