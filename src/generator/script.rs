//! Script Generator
//!
//! Runs the optional generator script as a child process through the
//! configured interpreter, with the working directory as its current
//! directory. Single-shot: no retries.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info};

use super::{DocGenerator, GenerationReport};
use crate::config::GeneratorConfig;
use crate::types::{DocgenError, Result};

pub struct ScriptGenerator {
    name: String,
    script: PathBuf,
    interpreter: String,
    args: Vec<String>,
    timeout_secs: u64,
    target: String,
    working_dir: PathBuf,
}

impl ScriptGenerator {
    pub fn new(config: &GeneratorConfig, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: config.script.display().to_string(),
            script: config.script.clone(),
            interpreter: config.interpreter.clone(),
            args: config.args.clone(),
            timeout_secs: config.timeout_secs,
            target: config.target.clone(),
            working_dir: working_dir.into(),
        }
    }

    /// Location checked for presence
    pub fn script_path(&self) -> PathBuf {
        self.working_dir.join(&self.script)
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

#[async_trait]
impl DocGenerator for ScriptGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn target(&self) -> &str {
        &self.target
    }

    fn is_available(&self) -> bool {
        self.script_path().is_file()
    }

    async fn generate(&self) -> Result<GenerationReport> {
        let start_time = Instant::now();

        debug!(
            "Executing generator (interpreter={}, script={}, cwd={})",
            self.interpreter,
            self.name,
            self.working_dir.display()
        );

        // The script argument stays relative: it is resolved against current_dir
        let mut cmd = Command::new(&self.interpreter);
        cmd.arg(&self.script)
            .args(&self.args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(|e| DocgenError::GeneratorSpawn {
            script: self.name.clone(),
            interpreter: self.interpreter.clone(),
            source: e,
        })?;

        let limit = Duration::from_secs(self.timeout_secs);
        let output = timeout(limit, child.wait_with_output())
            .await
            .map_err(|_| DocgenError::GeneratorTimeout {
                script: self.name.clone(),
                duration: limit,
            })??;

        let elapsed = start_time.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        for line in stdout.lines() {
            debug!(target: "docgen::generator", "{}", line);
        }

        if !output.status.success() {
            return Err(DocgenError::GeneratorFailed {
                script: self.name.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        info!(
            "Generator {} finished in {}ms",
            self.name,
            elapsed.as_millis()
        );

        Ok(GenerationReport {
            duration: elapsed,
            stdout,
        })
    }
}
