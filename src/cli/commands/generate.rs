//! Generate Command
//!
//! Runs the optional documentation generator inside the banner framing.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::ui::Output;
use crate::cli::util::CommandContext;
use crate::config::{ColorMode, Config};
use crate::generator::ScriptGenerator;
use crate::procedure::{self, Outcome, RunOptions};
use crate::types::Result;

/// CLI overrides for a generate run
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub script: Option<PathBuf>,
    pub interpreter: Option<String>,
    pub target: Option<String>,
    pub timeout_secs: Option<u64>,
    pub color: Option<ColorMode>,
    pub dry_run: bool,
}

impl GenerateOptions {
    /// Apply overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(ref script) = self.script {
            config.generator.script = script.clone();
        }
        if let Some(ref interpreter) = self.interpreter {
            config.generator.interpreter = interpreter.clone();
        }
        if let Some(ref target) = self.target {
            config.generator.target = target.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.generator.timeout_secs = timeout_secs;
        }
        if let Some(color) = self.color {
            config.output.color = color;
        }
        config.validate()
    }
}

pub async fn run(mut ctx: CommandContext, options: GenerateOptions) -> Result<Outcome> {
    options.apply(&mut ctx.config)?;
    debug!("Effective generator config: {:?}", ctx.config.generator);

    let generator = ScriptGenerator::new(&ctx.config.generator, &ctx.project_root);
    let mut output = Output::stdout(ctx.config.output.color.enabled());

    procedure::run(
        &mut output,
        &generator,
        &RunOptions {
            title: ctx.config.output.title.clone(),
            dry_run: options.dry_run,
        },
    )
    .await
}
