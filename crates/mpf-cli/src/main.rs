//! # mpf CLI Entry Point
//!
//! Resolves the file path, runs the load/validate pipeline, and reports
//! the result via exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mpf_schema::{load_personality, validate_personality};

/// Validate MPF (Modular Personality Format) personality files.
#[derive(Parser, Debug)]
#[command(name = "mpf", version, about)]
struct Cli {
    /// Path to an MPF JSON file to validate.
    file: PathBuf,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if !cli.file.exists() {
        eprintln!("[mpf] Error: file not found: {}", cli.file.display());
        return ExitCode::from(1);
    }

    tracing::debug!(file = %cli.file.display(), "validating personality");
    let result = load_personality(&cli.file).and_then(|doc| validate_personality(&doc));

    match result {
        Ok(()) => {
            println!("[mpf] OK: {}", cli.file.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[mpf] Validation failed: {e}");
            ExitCode::from(1)
        }
    }
}
