// ABOUTME: Recommendation engine configuration for trend polarity
// ABOUTME: Lists metrics where a decreasing trend is the desirable direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Engine Configuration

use coach_core::constants::metrics::INVERSE_METRICS;
use serde::{Deserialize, Serialize};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Metrics that are beneficial when decreasing (e.g. recovery time)
    pub inverse_metrics: Vec<String>,
}

impl RecommendationConfig {
    /// Whether a lower value is better for this metric
    #[must_use]
    pub fn is_inverse(&self, metric: &str) -> bool {
        self.inverse_metrics.iter().any(|inverse| inverse == metric)
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            inverse_metrics: INVERSE_METRICS.iter().map(|&m| m.to_owned()).collect(),
        }
    }
}
