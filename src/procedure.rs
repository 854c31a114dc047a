//! Documentation Run
//!
//! The fixed sequence behind `docgen generate`:
//!
//! 1. opening banner
//! 2. presence check
//! 3. generator run (only when present)
//! 4. `[OK]` line, or `[WARN]` line when absent
//! 5. closing banner
//!
//! A generator that is present but fails aborts the sequence before steps 4
//! and 5; the error is left to the caller.

use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::cli::ui::Output;
use crate::constants::generator::ABSENT_REASON;
use crate::generator::DocGenerator;
use crate::types::Result;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Generator ran and succeeded
    Generated,
    /// Generator absent; warning printed
    Skipped,
    /// Generator present, not executed (`--dry-run`)
    DryRun,
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Title inside the opening banner
    pub title: String,
    /// Check presence only, never spawn
    pub dry_run: bool,
}

pub async fn run<W: Write>(
    output: &mut Output<W>,
    generator: &dyn DocGenerator,
    options: &RunOptions,
) -> Result<Outcome> {
    output.banner_open(&options.title)?;

    let outcome = if !generator.is_available() {
        debug!("Generator {} not present", generator.name());
        output.warning(&absent_message(generator))?;
        Outcome::Skipped
    } else if options.dry_run {
        output.success(&format!(
            "would run {} to generate {}",
            generator.name(),
            generator.target()
        ))?;
        Outcome::DryRun
    } else {
        let report = generator.generate().await?;
        info!(
            "Generated {} in {}ms",
            generator.target(),
            report.duration.as_millis()
        );
        output.success(&format!("generated {}", generator.target()))?;
        Outcome::Generated
    };

    output.banner_close()?;
    Ok(outcome)
}

fn absent_message(generator: &dyn DocGenerator) -> String {
    let target = generator.target();
    let file_name = Path::new(target)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(target);

    format!(
        "could not generate {} because {} was not found ({})",
        file_name,
        generator.name(),
        ABSENT_REASON
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GenerationReport;
    use crate::types::DocgenError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeGenerator {
        available: bool,
        fail: bool,
        calls: AtomicUsize,
    }

    impl FakeGenerator {
        fn new(available: bool, fail: bool) -> Self {
            Self {
                available,
                fail,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl DocGenerator for FakeGenerator {
        fn name(&self) -> &str {
            "gen_classes.py"
        }

        fn target(&self) -> &str {
            "docs/CLASSES.md"
        }

        fn is_available(&self) -> bool {
            self.available
        }

        async fn generate(&self) -> Result<GenerationReport> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DocgenError::GeneratorFailed {
                    script: "gen_classes.py".to_string(),
                    status: "exit status: 1".to_string(),
                    stderr: String::new(),
                });
            }
            Ok(GenerationReport::default())
        }
    }

    fn options(dry_run: bool) -> RunOptions {
        RunOptions {
            title: "docs: GENERATING DOCUMENTATION".to_string(),
            dry_run,
        }
    }

    async fn run_plain(generator: &FakeGenerator, dry_run: bool) -> (Result<Outcome>, String) {
        let mut output = Output::new(Vec::new(), false);
        let result = run(&mut output, generator, &options(dry_run)).await;
        (result, String::from_utf8(output.into_inner()).unwrap())
    }

    const OPEN: &str = "\n=== docs: GENERATING DOCUMENTATION ===\n\n";

    fn close() -> String {
        format!("\n{}\n\n", "=".repeat(OPEN.trim().len()))
    }

    #[tokio::test]
    async fn test_absent_generator_warns_and_succeeds() {
        let generator = FakeGenerator::new(false, false);
        let (result, text) = run_plain(&generator, false).await;

        assert_eq!(result.unwrap(), Outcome::Skipped);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            text,
            format!(
                "{OPEN}[WARN] could not generate CLASSES.md because gen_classes.py was not found \
                 (it is not included in the repository because of license issues)\n{}",
                close()
            )
        );
    }

    #[tokio::test]
    async fn test_present_generator_runs_then_reports() {
        let generator = FakeGenerator::new(true, false);
        let (result, text) = run_plain(&generator, false).await;

        assert_eq!(result.unwrap(), Outcome::Generated);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
        assert_eq!(text, format!("{OPEN}[OK]   generated docs/CLASSES.md\n{}", close()));
    }

    #[tokio::test]
    async fn test_dry_run_does_not_invoke() {
        let generator = FakeGenerator::new(true, false);
        let (result, text) = run_plain(&generator, true).await;

        assert_eq!(result.unwrap(), Outcome::DryRun);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
        assert!(text.contains("[OK]   would run gen_classes.py to generate docs/CLASSES.md"));
    }

    #[tokio::test]
    async fn test_failed_generator_stops_before_closing_banner() {
        let generator = FakeGenerator::new(true, true);
        let (result, text) = run_plain(&generator, false).await;

        assert!(result.unwrap_err().is_generator_failure());
        assert_eq!(text, OPEN);
    }

    #[tokio::test]
    async fn test_output_is_deterministic() {
        let generator = FakeGenerator::new(false, false);
        let (_, first) = run_plain(&generator, false).await;
        let (_, second) = run_plain(&generator, false).await;
        assert_eq!(first, second);
    }
}
