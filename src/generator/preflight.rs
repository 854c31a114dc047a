//! Pre-flight Checks
//!
//! Inspects the generator setup without running anything:
//!
//! - script presence (absence is a warning; the script ships separately)
//! - interpreter resolvable on `PATH`
//! - target location

use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::{DocGenerator, ScriptGenerator};

/// Pre-flight check results
#[derive(Debug, Clone)]
pub struct PreflightResult {
    /// No blocking check failed
    pub passed: bool,
    /// Individual check results
    pub checks: Vec<CheckResult>,
    /// Warnings (non-blocking)
    pub warnings: Vec<String>,
    /// Errors (blocking)
    pub errors: Vec<String>,
}

impl PreflightResult {
    pub fn new() -> Self {
        Self {
            passed: true,
            checks: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn add_check(&mut self, check: CheckResult) {
        if !check.passed {
            self.passed = false;
            self.errors.push(check.message.clone());
        }
        if let Some(ref warn) = check.warning {
            self.warnings.push(warn.clone());
        }
        self.checks.push(check);
    }
}

impl Default for PreflightResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Individual check result
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub message: String,
    pub warning: Option<String>,
}

pub struct PreflightCheck<'a> {
    generator: &'a ScriptGenerator,
}

impl<'a> PreflightCheck<'a> {
    pub fn new(generator: &'a ScriptGenerator) -> Self {
        Self { generator }
    }

    pub fn run(&self) -> PreflightResult {
        let mut result = PreflightResult::new();

        self.check_script(&mut result);
        self.check_interpreter(&mut result);
        self.check_target(&mut result);

        if result.passed {
            info!("Pre-flight checks passed ({} checks)", result.checks.len());
        } else {
            warn!("Pre-flight checks failed: {} errors", result.errors.len());
        }

        result
    }

    fn check_script(&self, result: &mut PreflightResult) {
        let path = self.generator.script_path();
        let present = self.generator.is_available();

        let (message, warning) = if present {
            (format!("Generator script found: {}", path.display()), None)
        } else if path.exists() {
            (
                format!("{} exists but is not a regular file", path.display()),
                Some(format!(
                    "{} will be skipped",
                    self.generator.target()
                )),
            )
        } else {
            (
                format!("Generator script not found: {}", path.display()),
                Some(format!(
                    "{} will be skipped (the script is distributed separately)",
                    self.generator.target()
                )),
            )
        };

        // Absence is a normal state, not a failure
        result.add_check(CheckResult {
            name: "script".to_string(),
            passed: true,
            message,
            warning,
        });
    }

    fn check_interpreter(&self, result: &mut PreflightResult) {
        let interpreter = self.generator.interpreter();

        let (passed, message) = match find_in_path(interpreter) {
            Some(found) => (true, format!("Interpreter found: {}", found.display())),
            None => (false, format!("Interpreter not found: {}", interpreter)),
        };

        // Only blocks when there is actually something to run
        let needed = self.generator.is_available();
        result.add_check(CheckResult {
            name: "interpreter".to_string(),
            passed: passed || !needed,
            message: message.clone(),
            warning: (!passed && !needed).then_some(message),
        });
    }

    fn check_target(&self, result: &mut PreflightResult) {
        let target = self.generator.working_dir().join(self.generator.target());
        let message = if target.is_file() {
            format!("Target exists and will be regenerated: {}", target.display())
        } else {
            format!("Target will be created: {}", target.display())
        };

        result.add_check(CheckResult {
            name: "target".to_string(),
            passed: true,
            message,
            warning: None,
        });
    }
}

/// Resolve a program the way a shell would: paths are checked directly,
/// bare names are searched in `PATH`.
pub fn find_in_path(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 || candidate.is_absolute() {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    let path_var = env::var_os("PATH")?;
    let found = env::split_paths(&path_var)
        .map(|dir| dir.join(program))
        .find(|p| p.is_file());

    debug!("Resolved {} -> {:?}", program, found);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use std::fs;
    use tempfile::TempDir;

    fn generator_in(dir: &Path, interpreter: &str) -> ScriptGenerator {
        let config = GeneratorConfig {
            interpreter: interpreter.to_string(),
            ..Default::default()
        };
        ScriptGenerator::new(&config, dir)
    }

    #[test]
    fn test_preflight_result_fails_on_error() {
        let mut result = PreflightResult::new();
        assert!(result.passed);

        result.add_check(CheckResult {
            name: "failing_check".to_string(),
            passed: false,
            message: "Check failed".to_string(),
            warning: None,
        });

        assert!(!result.passed);
        assert_eq!(result.errors, vec!["Check failed".to_string()]);
    }

    #[test]
    fn test_missing_script_is_warning_only() {
        let temp_dir = TempDir::new().unwrap();
        let generator = generator_in(temp_dir.path(), "docgen-no-such-interpreter");

        let result = PreflightCheck::new(&generator).run();
        assert!(result.passed);
        assert_eq!(result.checks.len(), 3);
        assert!(result.warnings.iter().any(|w| w.contains("CLASSES.md")));
    }

    #[test]
    fn test_present_script_needs_interpreter() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("gen_classes.py"), "").unwrap();
        let generator = generator_in(temp_dir.path(), "docgen-no-such-interpreter");

        let result = PreflightCheck::new(&generator).run();
        assert!(!result.passed);
        assert!(result.errors[0].contains("docgen-no-such-interpreter"));
    }

    #[test]
    fn test_present_script_with_sh_passes() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("gen_classes.py"), "").unwrap();
        let generator = generator_in(temp_dir.path(), "sh");

        let result = PreflightCheck::new(&generator).run();
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_find_in_path_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let tool = temp_dir.path().join("tool");
        assert!(find_in_path(tool.to_str().unwrap()).is_none());

        fs::write(&tool, "").unwrap();
        assert_eq!(find_in_path(tool.to_str().unwrap()), Some(tool));
    }
}
