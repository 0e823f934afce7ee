use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use boundary_lint::config::CheckConfig;
use boundary_lint::reporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "boundary-lint",
    about = "Validate name and admin_level tags on administrative boundary relations"
)]
struct Args {
    /// JSON array of features to check
    features: PathBuf,

    /// Configuration file (default: nearest boundary-lint.json, else built-in defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "boundary_lint=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<bool> {
    let config = CheckConfig::load(args.config.as_deref()).context("loading configuration")?;
    let result = boundary_lint::run_boundary_check(&config, &args.features)
        .with_context(|| format!("checking {}", args.features.display()))?;

    match args.format {
        Format::Text => {
            reporter::print_header();
            reporter::print_result(&result);
        }
        Format::Json => {
            let stdout = io::stdout();
            reporter::write_json(&mut stdout.lock(), &result).context("writing report")?;
        }
    }

    Ok(result.passed)
}
