// ABOUTME: Form analysis configuration for keypoint geometry checks and insight scanning
// ABOUTME: Configures alignment tolerances and the markers that denote a positive insight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Form Analysis Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Substrings marking an insight as positive (not an issue), matched case-insensitively
    pub positive_markers: Vec<String>,
    /// Shoulders/hips are level when their vertical offset is below this share of frame height
    pub level_tolerance_ratio: f64,
    /// Spine is vertical when its angle from vertical is below this many degrees
    pub spine_vertical_max_degrees: f64,
    /// Knees are over ankles when the horizontal offset is below this share of frame width
    pub knee_ankle_tolerance_ratio: f64,
}

impl FormConfig {
    /// Whether an insight reports a problem (contains no positive marker)
    #[must_use]
    pub fn is_issue(&self, insight: &str) -> bool {
        let lowered = insight.to_lowercase();
        !self
            .positive_markers
            .iter()
            .any(|marker| lowered.contains(&marker.to_lowercase()))
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            positive_markers: vec!["good".into(), "proper".into()],
            level_tolerance_ratio: 0.05,
            spine_vertical_max_degrees: 10.0,
            knee_ankle_tolerance_ratio: 0.1,
        }
    }
}
