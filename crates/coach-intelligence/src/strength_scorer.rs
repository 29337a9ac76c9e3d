// ABOUTME: Strength and weakness detection from normalized most-recent metric values
// ABOUTME: Supports pooled cross-metric normalization and per-metric normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::{NormalizationStrategy, ScoringConfig};
use crate::statistical_analysis::StatisticalAnalyzer;
use coach_core::models::{MetricSeries, StrengthsWeaknesses};
use tracing::debug;

/// Labels each metric a strength, a weakness, or neither
#[derive(Debug, Clone, Copy)]
pub struct StrengthWeaknessScorer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> StrengthWeaknessScorer<'a> {
    /// Create a scorer over the given configuration
    #[must_use]
    pub const fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Score each series' most recent value.
    ///
    /// With [`NormalizationStrategy::Pooled`] the mean and population standard
    /// deviation are taken over every metric's values concatenated, so results
    /// depend on each metric's native scale. Series without a non-missing value
    /// are skipped. A zero deviation classifies nothing.
    #[must_use]
    pub fn score(&self, series: &[MetricSeries]) -> StrengthsWeaknesses {
        let mut result = StrengthsWeaknesses::default();

        match self.config.normalization {
            NormalizationStrategy::Pooled => {
                let pooled: Vec<f64> = series.iter().flat_map(MetricSeries::values).collect();
                let (Some(mean), Some(std)) = (
                    StatisticalAnalyzer::mean(&pooled),
                    StatisticalAnalyzer::population_std(&pooled),
                ) else {
                    return result;
                };
                for metric in series {
                    if let Some(recent) = metric.latest() {
                        self.record(&mut result, &metric.metric, recent, mean, std);
                    }
                }
            }
            NormalizationStrategy::PerMetric => {
                for metric in series {
                    let values = metric.values();
                    let (Some(recent), Some(mean), Some(std)) = (
                        metric.latest(),
                        StatisticalAnalyzer::mean(&values),
                        StatisticalAnalyzer::population_std(&values),
                    ) else {
                        continue;
                    };
                    self.record(&mut result, &metric.metric, recent, mean, std);
                }
            }
        }

        debug!(
            normalization = %self.config.normalization,
            strengths = result.strengths.len(),
            weaknesses = result.weaknesses.len(),
            "Scored strengths and weaknesses"
        );
        result
    }

    fn record(
        &self,
        result: &mut StrengthsWeaknesses,
        metric: &str,
        recent: f64,
        mean: f64,
        std: f64,
    ) {
        let Some(score) = StatisticalAnalyzer::z_score(recent, mean, std) else {
            return;
        };
        result.scores.insert(metric.to_owned(), score);
        if score > self.config.strength_threshold {
            result.strengths.push(metric.to_owned());
        } else if score < self.config.weakness_threshold {
            result.weaknesses.push(metric.to_owned());
        }
    }
}
