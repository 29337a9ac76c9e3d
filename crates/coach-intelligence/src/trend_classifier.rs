// ABOUTME: Trend classification of metric series from an ordinary least-squares slope
// ABOUTME: Stability threshold scales with the series mean; short series report insufficient data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::TrendConfig;
use crate::statistical_analysis::StatisticalAnalyzer;
use coach_core::models::Trend;
use tracing::debug;

/// Which consumer a trend is computed for; each has its own minimum series length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendPurpose {
    /// Trends reported in metric summaries
    Summary,
    /// Trends that drive recommendation selection
    Recommendation,
}

/// Classifies a numeric series as increasing, decreasing, stable, or insufficient
#[derive(Debug, Clone, Copy)]
pub struct TrendClassifier<'a> {
    config: &'a TrendConfig,
}

impl<'a> TrendClassifier<'a> {
    /// Create a classifier over the given configuration
    #[must_use]
    pub const fn new(config: &'a TrendConfig) -> Self {
        Self { config }
    }

    /// Minimum series length for a purpose
    #[must_use]
    pub const fn min_points(&self, purpose: TrendPurpose) -> usize {
        match purpose {
            TrendPurpose::Summary => self.config.summary_min_points,
            TrendPurpose::Recommendation => self.config.recommendation_min_points,
        }
    }

    /// Classify a series of non-missing values in chronological order.
    ///
    /// Stable when `|slope| < stable_slope_ratio * mean`. With a zero mean the
    /// threshold is zero, so a flat zero series falls through to `Decreasing`;
    /// with a negative mean no slope can be stable.
    #[must_use]
    pub fn classify(&self, values: &[f64], purpose: TrendPurpose) -> Trend {
        if values.len() < self.min_points(purpose) {
            return Trend::InsufficientData;
        }
        let Ok(regression) = StatisticalAnalyzer::linear_regression(values) else {
            return Trend::InsufficientData;
        };
        let Some(mean) = StatisticalAnalyzer::mean(values) else {
            return Trend::InsufficientData;
        };

        let threshold = self.config.stable_slope_ratio * mean;
        let trend = if regression.slope.abs() < threshold {
            Trend::Stable
        } else if regression.slope > 0.0 {
            Trend::Increasing
        } else {
            Trend::Decreasing
        };

        debug!(
            points = values.len(),
            slope = regression.slope,
            threshold,
            trend = %trend,
            "Classified trend"
        );
        trend
    }

    /// Classify with an optional-value series, dropping missing entries first
    #[must_use]
    pub fn classify_optional(&self, values: &[Option<f64>], purpose: TrendPurpose) -> Trend {
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        self.classify(&present, purpose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_scales_with_mean() {
        let config = TrendConfig::default();
        let classifier = TrendClassifier::new(&config);
        // slope 0.5 is below 1% of mean 100 but above 1% of mean 10
        assert_eq!(
            classifier.classify(&[99.0, 99.5, 100.0, 100.5, 101.0], TrendPurpose::Summary),
            Trend::Stable
        );
        assert_eq!(
            classifier.classify(&[9.0, 9.5, 10.0, 10.5, 11.0], TrendPurpose::Summary),
            Trend::Increasing
        );
    }

    #[test]
    fn test_recommendation_needs_three_points() {
        let config = TrendConfig::default();
        let classifier = TrendClassifier::new(&config);
        assert_eq!(
            classifier.classify(&[1.0, 2.0], TrendPurpose::Summary),
            Trend::Increasing
        );
        assert_eq!(
            classifier.classify(&[1.0, 2.0], TrendPurpose::Recommendation),
            Trend::InsufficientData
        );
    }

    #[test]
    fn test_missing_values_dropped_before_fit() {
        let config = TrendConfig::default();
        let classifier = TrendClassifier::new(&config);
        assert_eq!(
            classifier.classify_optional(&[Some(30.0), None, Some(20.0)], TrendPurpose::Summary),
            Trend::Decreasing
        );
    }
}
