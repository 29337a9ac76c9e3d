// ABOUTME: Form analysis command for coach-cli
// ABOUTME: Analyzes keypoints from a JSON file or the simulated pose for a frame size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_coach::coach_core::errors::{AppError, AppResult};
use pierre_coach::coach_core::models::{FrameSize, PoseKeypoints};
use pierre_coach::AthleteAssistant;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::helpers::display::print_json;

/// Analyze form and print the insights by category
pub fn analyze(
    assistant: &AthleteAssistant,
    width: u32,
    height: u32,
    keypoints_path: Option<&Path>,
) -> AppResult<()> {
    let frame = FrameSize::new(width, height);
    let analysis = match keypoints_path {
        Some(path) => {
            let keypoints = read_keypoints(path)?;
            info!(detected = keypoints.len(), "Analyzing detected keypoints");
            assistant.analyze_form(&keypoints, frame)?
        }
        None => {
            info!(width, height, "Analyzing simulated keypoints");
            assistant.analyze_simulated_form(frame)?
        }
    };
    print_json(&analysis)
}

fn read_keypoints(path: &Path) -> AppResult<PoseKeypoints> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Failed to read '{}'", path.display()))
            .with_resource_id(path.display().to_string())
            .with_source(e)
    })?;
    Ok(serde_json::from_str(&contents)?)
}
