use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docgen::cli::CommandContext;
use docgen::cli::commands::generate::GenerateOptions;
use docgen::config::ColorMode;

/// Parse color mode from string
fn parse_color_mode(s: &str) -> Result<ColorMode, String> {
    s.parse()
}

#[derive(Parser)]
#[command(name = "docgen")]
#[command(
    version,
    about = "Run the optional documentation generator, if it is installed"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(long, short, help = "Config file (default: .docgen/config.toml)")]
    config: Option<PathBuf>,

    #[arg(long, short = 'C', help = "Working directory to look for the generator in")]
    dir: Option<PathBuf>,

    #[arg(long, value_parser = parse_color_mode, help = "Color: auto, always, never")]
    color: Option<ColorMode>,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate documentation (default when no command is given)
    Generate {
        #[arg(long, help = "Generator script, relative to the working directory")]
        script: Option<PathBuf>,
        #[arg(long, help = "Interpreter used to run the script")]
        interpreter: Option<String>,
        #[arg(long, help = "Documentation file the script produces")]
        target: Option<String>,
        #[arg(long, help = "Timeout in seconds")]
        timeout: Option<u64>,
        #[arg(long = "dry-run", help = "Check for the generator but don't run it")]
        dry_run: bool,
    },

    /// Check the generator setup without running it
    Check,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Write a default configuration file
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mdocgen encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    // Logs go to stderr; stdout carries only the banner stream
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = cli.command.unwrap_or(Commands::Generate {
        script: None,
        interpreter: None,
        target: None,
        timeout: None,
        dry_run: false,
    });

    match command {
        Commands::Generate {
            script,
            interpreter,
            target,
            timeout,
            dry_run,
        } => {
            let ctx = CommandContext::load(cli.dir.as_deref(), cli.config.as_deref())?;
            let rt = Runtime::new()?;
            let outcome = rt.block_on(docgen::cli::commands::generate::run(
                ctx,
                GenerateOptions {
                    script,
                    interpreter,
                    target,
                    timeout_secs: timeout,
                    color: cli.color,
                    dry_run,
                },
            ))?;
            tracing::debug!("Run finished: {:?}", outcome);
        }
        Commands::Check => {
            let mut ctx = CommandContext::load(cli.dir.as_deref(), cli.config.as_deref())?;
            if let Some(color) = cli.color {
                ctx.config.output.color = color;
            }
            console::set_colors_enabled(ctx.config.output.color.enabled());
            docgen::cli::commands::check::run(&ctx)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                let ctx = CommandContext::load(cli.dir.as_deref(), cli.config.as_deref())?;
                docgen::cli::commands::config::show(&ctx, &format)?;
            }
            ConfigAction::Path => {
                let ctx = CommandContext::load(cli.dir.as_deref(), cli.config.as_deref())?;
                docgen::cli::commands::config::path(&ctx)?;
            }
            ConfigAction::Init { global, force } => {
                if global {
                    docgen::cli::commands::config::init_global(force)?;
                } else {
                    docgen::cli::commands::config::init_project(cli.dir.as_deref(), force)?;
                }
            }
        },
    }

    Ok(())
}
