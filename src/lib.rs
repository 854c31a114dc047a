//! docgen - Optional Documentation Generator Runner
//!
//! Frames a documentation run with status banners, looks for an optional,
//! separately-licensed generator script and runs it when present. A missing
//! generator is reported as a warning and the run still succeeds.
//!
//! ## Modules
//!
//! - [`procedure`]: the fixed banner / check / run / report sequence
//! - [`generator`]: generator trait, script-backed implementation, pre-flight checks
//! - [`config`]: layered configuration (defaults, global, project, env)
//! - [`cli`]: command handlers and terminal output

pub mod cli;
pub mod config;
pub mod constants;
pub mod generator;
pub mod procedure;
pub mod types;

pub use config::{ColorMode, Config, ConfigLoader, GeneratorConfig, OutputConfig};
pub use generator::{DocGenerator, GenerationReport, ScriptGenerator};
pub use procedure::{Outcome, RunOptions};
pub use types::{DocgenError, Result};
