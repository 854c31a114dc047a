//! Config Command
//!
//! Usage:
//!   docgen config show [-f json]
//!   docgen config path
//!   docgen config init [-g] [--force]

use std::path::Path;

use crate::cli::util::{CommandContext, resolve_dir};
use crate::config::ConfigLoader;
use crate::types::{DocgenError, Result};

/// Show the effective (merged) configuration
pub fn show(ctx: &CommandContext, format: &str) -> Result<()> {
    let as_json = match format {
        "json" => true,
        "text" | "toml" => false,
        other => {
            return Err(DocgenError::config(format!(
                "Unknown format '{}'. Valid values: text, json",
                other
            )));
        }
    };

    println!("{}", ConfigLoader::render(&ctx.config, as_json)?);
    Ok(())
}

/// Show configuration paths
pub fn path(ctx: &CommandContext) -> Result<()> {
    println!("Configuration paths:");
    println!();

    if let Some(global) = ConfigLoader::global_config_path() {
        println!("  Global:  {} {}", exists_mark(&global), global.display());
    } else {
        println!("  Global:  (not available)");
    }

    let project = ctx.config_path();
    println!("  Project: {} {}", exists_mark(&project), project.display());

    let script = ctx.project_root.join(&ctx.config.generator.script);
    println!("  Script:  {} {}", exists_mark(&script), script.display());

    Ok(())
}

fn exists_mark(path: &Path) -> &'static str {
    if path.exists() { "✓" } else { "✗" }
}

/// Initialize global configuration
pub fn init_global(force: bool) -> Result<()> {
    let path = ConfigLoader::init_global(force)?;
    println!("✓ Initialized global configuration");
    println!("  Config: {}", path.display());
    Ok(())
}

/// Initialize project configuration
pub fn init_project(dir: Option<&Path>, force: bool) -> Result<()> {
    let root = resolve_dir(dir)?;
    let path = ConfigLoader::init_project(&root, force)?;
    println!("✓ Initialized project configuration");
    println!("  Config: {}", path.display());
    Ok(())
}
