//! Habitus CLI - generate and inspect onboarding habit templates
//!
//! This CLI gives content authors and developers a terminal interface to:
//! - Generate the template set for the scenario matrix or a profile file
//! - Re-validate a directory of stored templates
//! - Compute the fingerprint of a profile
//! - Explain how habits are scored and selected for a profile
//! - Report which onboarding answers a template set covers

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::{coverage, fingerprint, generate, select, validate, ProfileArgs};
use config::CliConfig;
use error::CliResult;
use output::print_error;

/// Habitus CLI application
#[derive(Parser)]
#[command(name = "habitus")]
#[command(about = "Habitus - deterministic habit template generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short = 'C', long, env = "HABITUS_CONFIG")]
    config: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Generate templates and write them as {fingerprint}.json
    #[command(alias = "gen")]
    Generate {
        /// Profile file (one profile or a list); the scenario matrix when omitted
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Output directory; the configured one when omitted
        #[arg(long)]
        out: Option<PathBuf>,

        /// Generate on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// Validate every template in a directory
    Validate {
        /// Template directory; the configured output directory when omitted
        dir: Option<PathBuf>,
    },

    /// Compute the fingerprint of a profile
    Fingerprint {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Show scored candidates and the selection for a profile
    Select {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Number of ranked candidates to show
        #[arg(long, default_value_t = 10)]
        top: usize,
    },

    /// Report which onboarding answers stored templates cover
    Coverage {
        /// Template directory; the configured output directory when omitted
        dir: Option<PathBuf>,
    },

    /// Show configuration
    Config,
}

fn main() {
    if let Err(e) = run() {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    // Load config
    let config = CliConfig::load(cli.config.as_deref())?;
    let external = config.external_catalog()?;
    let catalog = match &external {
        Some(catalog) => catalog,
        None => habitus_catalog::builtin()?,
    };
    tracing::debug!(
        catalog = catalog.version(),
        habits = catalog.len(),
        "Catalog loaded"
    );

    // Execute command
    match cli.command {
        Commands::Generate {
            profile,
            out,
            sequential,
        } => generate::execute(
            profile.as_deref(),
            out.as_deref().unwrap_or(&config.output_dir),
            config.parallel && !sequential,
            catalog,
            &config.generator,
            cli.output,
        ),
        Commands::Validate { dir } => validate::execute(
            dir.as_deref().unwrap_or(&config.output_dir),
            &config.generator,
            cli.output,
        ),
        Commands::Fingerprint { profile } => fingerprint::execute(profile, cli.output),
        Commands::Select { profile, top } => {
            select::execute(profile, top, catalog, &config.generator, cli.output)
        }
        Commands::Coverage { dir } => {
            coverage::execute(dir.as_deref().unwrap_or(&config.output_dir), cli.output)
        }
        Commands::Config => {
            println!("Catalog: {} ({} habits)", catalog.version(), catalog.len());
            println!("Output dir: {}", config.output_dir.display());
            println!("Config: {:?}", config);
            Ok(())
        }
    }
}
