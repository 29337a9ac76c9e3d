// ABOUTME: Synthetic athlete dataset generator for demos and local testing
// ABOUTME: Writes athletes x sessions metric rows as CSV or JSON from a reproducible seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Synthetic dataset generator.
//!
//! Usage:
//! ```bash
//! # 10 athletes x 5 sessions to the default CSV path
//! cargo run --bin generate-synthetic-data
//!
//! # Larger JSON dataset with a fixed seed and reference date
//! cargo run --bin generate-synthetic-data -- --athletes 50 --sessions 12 \
//!     --output data/large.json --seed 7 --reference-date 2025-06-30
//! ```

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use pierre_coach::config::LogLevel;
use pierre_coach::dataset_loader::{write_csv, write_json, DataFormat};
use pierre_coach::logging::LoggingConfig;
use pierre_coach::synthetic::{SyntheticConfig, SyntheticDataGenerator};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "generate-synthetic-data",
    about = "Pierre Synthetic Athlete Data Generator",
    long_about = "Generate a reproducible athlete performance dataset for demos and testing"
)]
struct GenerateArgs {
    /// Number of athletes
    #[arg(long, default_value = "10")]
    athletes: usize,

    /// Sessions per athlete
    #[arg(long, default_value = "5")]
    sessions: usize,

    /// Output file; the extension selects CSV or JSON
    #[arg(long, short = 'o', default_value = "data/synthetic_performance_data.csv")]
    output: PathBuf,

    /// Output format override (csv or json)
    #[arg(long)]
    format: Option<DataFormat>,

    /// Random seed for reproducible data
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Latest session date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = GenerateArgs::parse();

    let level = if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    LoggingConfig::from_env().with_level(level).init()?;

    let format = match args.format {
        Some(format) => format,
        None => DataFormat::from_path(&args.output)?,
    };
    let reference_date = args
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());

    let config = SyntheticConfig::new(args.seed, reference_date)
        .with_size(args.athletes, args.sessions);
    let dataset = SyntheticDataGenerator::new(config).generate()?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| anyhow!("Failed to create {}: {e}", parent.display()))?;
    }
    let file = File::create(&args.output)
        .map_err(|e| anyhow!("Failed to create {}: {e}", args.output.display()))?;
    let writer = BufWriter::new(file);

    match format {
        DataFormat::Csv => write_csv(&dataset, writer)?,
        DataFormat::Json => write_json(&dataset, writer)?,
    }

    info!(
        rows = dataset.len(),
        athletes = args.athletes,
        sessions = args.sessions,
        seed = args.seed,
        format = %format,
        "Synthetic data saved to {}",
        args.output.display()
    );
    Ok(())
}
