use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codescout::ScoutError;

#[derive(Parser)]
#[command(name = "codescout")]
#[command(
    version,
    about = "Static project analyzer that maps a codebase's public API surface"
)]
struct Cli {
    /// Root directory of the project to analyze
    // Optional at the clap level so a missing argument exits with code 1
    // and a usage line, rather than clap's default code 2.
    path: Option<PathBuf>,

    /// Emit single-line JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    // Logs go to stderr; stdout carries only the report JSON.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(path) = cli.path else {
        eprintln!("Usage: codescout <project_path>");
        return ExitCode::FAILURE;
    };

    match run(&path, cli.compact) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path, compact: bool) -> anyhow::Result<()> {
    let payload = match codescout::analyze(path) {
        Ok(report) => serde_json::to_value(&report)?,
        // Boundary contract: a nonexistent path yields a report-shaped
        // error object on stdout and a zero exit code.
        Err(err @ ScoutError::PathNotFound { .. }) => {
            serde_json::json!({ "error": err.to_string() })
        }
        Err(err) => return Err(err.into()),
    };

    let rendered = if compact {
        serde_json::to_string(&payload)?
    } else {
        serde_json::to_string_pretty(&payload)?
    };
    println!("{rendered}");
    Ok(())
}
