// ABOUTME: Dataset analysis commands for coach-cli
// ABOUTME: Handles athletes, analyze, key-metrics, compare, series, and recommend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_coach::coach_core::errors::AppResult;
use pierre_coach::coach_core::models::Dataset;
use pierre_coach::AthleteAssistant;
use std::path::Path;
use tracing::{info, warn};

use crate::helpers::display::print_json;

/// List athletes in first-seen order
pub fn athletes(assistant: &AthleteAssistant, dataset: &Dataset) -> AppResult<()> {
    let athletes = assistant.athletes(dataset)?;
    info!(count = athletes.len(), "Listing athletes");
    print_json(&athletes)
}

/// Print the performance snapshot
pub fn analyze(assistant: &AthleteAssistant, dataset: &Dataset, athlete: &str) -> AppResult<()> {
    let analysis = assistant.analyze(dataset, athlete)?;
    if analysis.is_empty() {
        warn!(athlete, "No rows for athlete; snapshot is empty");
    }
    print_json(&analysis)
}

/// Print the most recent value per metric
pub fn key_metrics(
    assistant: &AthleteAssistant,
    dataset: &Dataset,
    athlete: &str,
) -> AppResult<()> {
    print_json(&assistant.key_metrics(dataset, athlete)?)
}

/// Print the per-metric comparison
pub fn compare(
    assistant: &AthleteAssistant,
    dataset: &Dataset,
    first: &str,
    second: &str,
) -> AppResult<()> {
    print_json(&assistant.compare(dataset, first, second)?)
}

/// Print one metric series with its trend
pub fn series(
    assistant: &AthleteAssistant,
    dataset: &Dataset,
    athlete: &str,
    metric: &str,
) -> AppResult<()> {
    print_json(&assistant.metric_series(dataset, athlete, metric)?)
}

/// Print recommendations and the weekly plan, combining a saved form analysis
/// when given and writing the text export when asked
pub fn recommend(
    assistant: &AthleteAssistant,
    dataset: &Dataset,
    athlete: &str,
    form_path: Option<&Path>,
    export_path: Option<&Path>,
) -> AppResult<()> {
    let form = form_path
        .map(AthleteAssistant::load_form_analysis)
        .transpose()?;
    let report = assistant.recommend(dataset, athlete, form.as_ref())?;
    if let Some(path) = export_path {
        AthleteAssistant::export_recommendations(&report, path)?;
    }
    print_json(&report)
}
