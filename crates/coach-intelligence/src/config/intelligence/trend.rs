// ABOUTME: Trend classification configuration
// ABOUTME: Configures the scale-relative stability ratio and minimum series lengths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Trend Classification Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// A slope below `stable_slope_ratio * mean(series)` in magnitude is stable
    pub stable_slope_ratio: f64,
    /// Minimum points for the trends reported in metric summaries
    pub summary_min_points: usize,
    /// Minimum points for the trends that drive recommendations
    pub recommendation_min_points: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            stable_slope_ratio: 0.01,
            summary_min_points: 2,
            recommendation_min_points: 3,
        }
    }
}
