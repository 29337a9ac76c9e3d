// ABOUTME: Strength and weakness scoring configuration
// ABOUTME: Configures z-score thresholds and the normalization strategy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an athlete's recent metric values are normalized before thresholding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationStrategy {
    /// One mean and standard deviation over every metric's values concatenated.
    /// Mixes units, so metrics with large native scales dominate.
    #[default]
    Pooled,
    /// Each metric normalized against its own mean and standard deviation
    PerMetric,
}

impl FromStr for NormalizationStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pooled" => Ok(Self::Pooled),
            "per_metric" | "per-metric" | "permetric" => Ok(Self::PerMetric),
            other => Err(ConfigError::Parse(format!(
                "unknown normalization strategy '{other}' (expected pooled or per_metric)"
            ))),
        }
    }
}

impl fmt::Display for NormalizationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pooled => f.write_str("pooled"),
            Self::PerMetric => f.write_str("per_metric"),
        }
    }
}

/// Strength / Weakness Scoring Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Normalized score strictly above this marks a strength
    pub strength_threshold: f64,
    /// Normalized score strictly below this marks a weakness
    pub weakness_threshold: f64,
    /// Normalization applied before thresholding
    pub normalization: NormalizationStrategy,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            strength_threshold: 0.75,
            weakness_threshold: -0.75,
            normalization: NormalizationStrategy::Pooled,
        }
    }
}
