//! modcheck - Go module compatibility checker
//!
//! Lists the modules of a Go project, flags every module that requires a
//! newer Go than the target, and suggests the newest compatible release.

use clap::Parser;
use colored::Colorize;
use modcheck::cli::CliArgs;
use modcheck::config::CheckConfig;
use modcheck::orchestrator::Orchestrator;
use modcheck::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// `--verbose` sets the level to DEBUG; otherwise `RUST_LOG` applies,
/// defaulting to WARN. Logs go to stderr.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("modcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("modcheck=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    let Some(target) = args.go_version.clone() else {
        println!("You must set --go flag");
        return ExitCode::SUCCESS;
    };

    match run(args, &target).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs, target: &str) -> anyhow::Result<ExitCode> {
    let config = CheckConfig::from_cli(&args, target)?;
    tracing::debug!("configuration: {:?}", config);

    if args.show_progress() {
        eprintln!(
            "{} {}",
            "Checking module compatibility with Go".bold(),
            config.target.to_string().cyan()
        );
    }

    let orchestrator = Orchestrator::new(config)?;
    let report = orchestrator.run_with_progress(args.show_progress()).await?;

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.no_color);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
