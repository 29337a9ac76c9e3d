// ABOUTME: Coach CLI - command-line access to athlete analysis, recommendations, and form checks
// ABOUTME: Loads a CSV or JSON dataset and prints pretty JSON results on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List athletes in a dataset
//! coach-cli --data data/sessions.csv athletes
//!
//! # Full performance snapshot
//! coach-cli --data data/sessions.csv analyze "Alex Rivera"
//!
//! # Most recent value per metric
//! coach-cli --data data/sessions.csv key-metrics "Alex Rivera"
//!
//! # Compare two athletes
//! coach-cli --data data/sessions.csv compare "Alex Rivera" "Jordan Chen"
//!
//! # One metric over time with its trend
//! coach-cli --data data/sessions.csv series "Alex Rivera" Speed
//!
//! # Recommendations, optionally combined with a saved form analysis
//! coach-cli --data data/sessions.csv recommend "Alex Rivera" --form form.json
//!
//! # Recommendations plus a text export with the weekly plan
//! coach-cli --data data/sessions.csv recommend "Alex Rivera" --export plan.txt
//!
//! # Form analysis for the simulated pose of a 640x480 frame
//! coach-cli form --width 640 --height 480
//!
//! # Sports-science question answered from a knowledge base CSV
//! coach-cli ask "How long should recovery take between workouts?" --knowledge-base data/kb_sports_science.csv
//! ```
//!
//! `COACH_DATA_PATH` supplies the dataset when `--data` is omitted and
//! `COACH_KB_PATH` the knowledge base when `--knowledge-base` is omitted.

mod commands;
mod helpers;

use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser, Subcommand};
use pierre_coach::config::AppConfig;
use pierre_coach::dataset_loader::DataFormat;
use pierre_coach::logging::LoggingConfig;
use pierre_coach::AthleteAssistant;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "coach-cli",
    about = "Pierre athlete performance coach",
    long_about = "Analyze athlete metric datasets: trends, strengths and weaknesses, recommendations, and form insights."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Dataset file (CSV or JSON); falls back to `COACH_DATA_PATH`
    #[arg(long, short = 'd', global = true)]
    data: Option<PathBuf>,

    /// Dataset format override (csv or json); inferred from the extension otherwise
    #[arg(long, global = true)]
    format: Option<DataFormat>,

    /// Increase log verbosity (repeatable)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List the athletes in the dataset
    Athletes,

    /// Performance snapshot: statistics, trends, strengths, and weaknesses
    Analyze {
        /// Athlete identifier
        athlete: String,
    },

    /// Most recent value of every metric
    KeyMetrics {
        /// Athlete identifier
        athlete: String,
    },

    /// Per-metric mean comparison between two athletes
    Compare {
        /// First athlete
        first: String,
        /// Second athlete
        second: String,
    },

    /// Date-ordered values of one metric with trend and trendline fit
    Series {
        /// Athlete identifier
        athlete: String,
        /// Metric column
        metric: String,
    },

    /// Training, recovery, nutrition, and technique recommendations
    Recommend {
        /// Athlete identifier
        athlete: String,

        /// Saved form analysis (JSON object of category to insights)
        #[arg(long)]
        form: Option<PathBuf>,

        /// Also write the recommendations and weekly plan as text to this file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Form insights from keypoints, or from the simulated pose for a frame
    Form {
        /// Frame width in pixels
        #[arg(long, default_value = "640")]
        width: u32,

        /// Frame height in pixels
        #[arg(long, default_value = "480")]
        height: u32,

        /// Detected keypoints (JSON object of body part to {x, y})
        #[arg(long)]
        keypoints: Option<PathBuf>,
    },

    /// Answer a sports-science question from the knowledge base
    Ask {
        /// Question text
        question: String,

        /// Knowledge base CSV (title, content, source); falls back to `COACH_KB_PATH`
        #[arg(long)]
        knowledge_base: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    LoggingConfig::from_env()
        .with_level(config.log_level.raised_by(cli.verbose))
        .init()?;

    let assistant = AthleteAssistant::from_config(config.analysis)?;
    debug!(
        failure_policy = %assistant.context().config().failure_policy,
        "Analysis context ready"
    );

    let data_path = cli.data.or(config.data_path);
    let dataset_path = || {
        data_path.as_deref().ok_or_else(|| {
            anyhow!("No dataset given: pass --data <file> or set COACH_DATA_PATH")
        })
    };

    match cli.command {
        Command::Athletes => {
            let dataset = commands::load(&assistant, dataset_path()?, cli.format)?;
            commands::analysis::athletes(&assistant, &dataset)?;
        }
        Command::Analyze { athlete } => {
            let dataset = commands::load(&assistant, dataset_path()?, cli.format)?;
            commands::analysis::analyze(&assistant, &dataset, &athlete)?;
        }
        Command::KeyMetrics { athlete } => {
            let dataset = commands::load(&assistant, dataset_path()?, cli.format)?;
            commands::analysis::key_metrics(&assistant, &dataset, &athlete)?;
        }
        Command::Compare { first, second } => {
            let dataset = commands::load(&assistant, dataset_path()?, cli.format)?;
            commands::analysis::compare(&assistant, &dataset, &first, &second)?;
        }
        Command::Series { athlete, metric } => {
            let dataset = commands::load(&assistant, dataset_path()?, cli.format)?;
            commands::analysis::series(&assistant, &dataset, &athlete, &metric)?;
        }
        Command::Recommend {
            athlete,
            form,
            export,
        } => {
            let dataset = commands::load(&assistant, dataset_path()?, cli.format)?;
            commands::analysis::recommend(
                &assistant,
                &dataset,
                &athlete,
                form.as_deref(),
                export.as_deref(),
            )?;
        }
        Command::Form {
            width,
            height,
            keypoints,
        } => {
            commands::form::analyze(&assistant, width, height, keypoints.as_deref())?;
        }
        Command::Ask {
            question,
            knowledge_base,
        } => {
            let knowledge_base = knowledge_base.or(config.knowledge_base_path);
            commands::knowledge::ask(assistant, &question, knowledge_base.as_deref())?;
        }
    }

    Ok(())
}
