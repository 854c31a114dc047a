//! Documentation Generator Abstraction
//!
//! A generator is an optional external routine that writes one documentation
//! target. It may legitimately be missing (it is distributed separately), so
//! availability is a query, not an error.
//!
//! ## Modules
//!
//! - `script`: generator backed by a script run through an interpreter
//! - `preflight`: non-executing checks behind `docgen check`

mod preflight;
mod script;

pub use preflight::{CheckResult, PreflightCheck, PreflightResult, find_in_path};
pub use script::ScriptGenerator;

use async_trait::async_trait;
use std::time::Duration;

use crate::types::Result;

/// Result of a successful generator run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Wall-clock run time
    pub duration: Duration,
    /// Captured standard output of the generator
    pub stdout: String,
}

#[async_trait]
pub trait DocGenerator: Send + Sync {
    /// Name used in messages (the script path as configured)
    fn name(&self) -> &str;

    /// Documentation file this generator produces
    fn target(&self) -> &str;

    /// Whether the generator is present on disk
    fn is_available(&self) -> bool;

    /// Run the generator to completion
    async fn generate(&self) -> Result<GenerationReport>;
}
