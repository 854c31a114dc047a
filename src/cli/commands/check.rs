//! Check Command
//!
//! Reports whether a generate run would execute anything, without running it.

use console::style;

use crate::cli::util::CommandContext;
use crate::generator::{PreflightCheck, ScriptGenerator};
use crate::types::{DocgenError, Result};

pub fn run(ctx: &CommandContext) -> Result<()> {
    let generator = ScriptGenerator::new(&ctx.config.generator, &ctx.project_root);
    let result = PreflightCheck::new(&generator).run();

    for check in &result.checks {
        let mark = if !check.passed {
            style("✗").red()
        } else if check.warning.is_some() {
            style("⚠").yellow()
        } else {
            style("✓").green()
        };
        println!("{} {:<12} {}", mark, check.name, check.message);
    }

    for warning in &result.warnings {
        println!("  {} {}", style("note:").yellow(), warning);
    }

    if result.passed {
        Ok(())
    } else {
        Err(DocgenError::config(result.errors.join("; ")))
    }
}
