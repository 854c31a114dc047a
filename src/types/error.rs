//! Unified Error Type
//!
//! Centralized error type for the whole crate. The only expected "failure"
//! of a documentation run, a missing generator, is not an error at all and
//! never reaches this type; everything here aborts the run.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocgenError {
    // -------------------------------------------------------------------------
    // Infrastructure Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Generator Errors
    // -------------------------------------------------------------------------
    #[error("Failed to spawn generator '{script}' via '{interpreter}': {source}")]
    GeneratorSpawn {
        script: String,
        interpreter: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Generator '{script}' failed ({status}){}", format_stderr(.stderr))]
    GeneratorFailed {
        script: String,
        status: String,
        stderr: String,
    },

    #[error("Generator '{script}' timed out after {}s", .duration.as_secs())]
    GeneratorTimeout { script: String, duration: Duration },
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

pub type Result<T> = std::result::Result<T, DocgenError>;

impl DocgenError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this error came from running the generator itself
    pub fn is_generator_failure(&self) -> bool {
        matches!(
            self,
            Self::GeneratorSpawn { .. } | Self::GeneratorFailed { .. } | Self::GeneratorTimeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_display_includes_stderr() {
        let err = DocgenError::GeneratorFailed {
            script: "gen_classes.py".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "  ImportError: no module named foo\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Generator 'gen_classes.py' failed (exit status: 1): ImportError: no module named foo"
        );
    }

    #[test]
    fn test_failed_display_without_stderr() {
        let err = DocgenError::GeneratorFailed {
            script: "gen.py".to_string(),
            status: "exit status: 2".to_string(),
            stderr: "   ".to_string(),
        };
        assert_eq!(err.to_string(), "Generator 'gen.py' failed (exit status: 2)");
    }

    #[test]
    fn test_timeout_display() {
        let err = DocgenError::GeneratorTimeout {
            script: "gen.py".to_string(),
            duration: Duration::from_secs(5),
        };
        assert_eq!(err.to_string(), "Generator 'gen.py' timed out after 5s");
        assert!(err.is_generator_failure());
    }

    #[test]
    fn test_config_is_not_generator_failure() {
        assert!(!DocgenError::config("bad").is_generator_failure());
    }
}
