// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// docquad — command-line document corner detection
//
// Entry point. Initialises logging, loads detector settings, runs detection
// over every image argument and prints the results as JSON.

mod batch;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use config::Overrides;

/// Find document corner candidates in photographs.
#[derive(Debug, Parser)]
#[command(name = "docquad", version, about)]
struct Cli {
    /// TOML file with detector settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Angular tolerance in radians around the horizontal and vertical axes.
    #[arg(long)]
    tolerance: Option<f64>,

    /// Minimum peak votes as a fraction of the strongest line.
    #[arg(long)]
    vote_fraction: Option<f64>,

    /// Keep at most this many lines.
    #[arg(long)]
    max_peaks: Option<usize>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Images to process.
    #[arg(required = true)]
    images: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::info!(images = cli.images.len(), "docquad starting");

    let overrides = Overrides {
        angle_tolerance: cli.tolerance,
        vote_fraction: cli.vote_fraction,
        max_peaks: cli.max_peaks,
    };
    let config = match config::load(cli.config.as_deref(), &overrides) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "cannot load detector settings");
            return ExitCode::from(2);
        }
    };

    let reports = batch::detect_all(cli.images, config).await;

    match render(&reports, cli.pretty) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!(error = %e, "cannot serialize results");
            return ExitCode::FAILURE;
        }
    }

    if reports.iter().any(batch::ImageReport::is_failure) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Serialize the per-image reports as a JSON array.
fn render(reports: &[batch::ImageReport], pretty: bool) -> docquad_core::error::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(reports)?
    } else {
        serde_json::to_string(reports)?
    };
    Ok(json)
}
