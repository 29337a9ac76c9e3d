// ABOUTME: Statistical analysis engine for metric trend and summary calculations
// ABOUTME: Implements least-squares regression, descriptive statistics, and z-score normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coach_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Linear regression results over index positions `0..n-1`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (change per observation)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination (goodness of fit, 0-1)
    pub r_squared: f64,
    /// Number of observations fitted
    pub sample_size: usize,
}

/// Descriptive statistics and least-squares fitting over plain value slices
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Fit a degree-1 polynomial against index positions `0..n-1`
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 values are supplied or a value is not finite
    pub fn linear_regression(values: &[f64]) -> AppResult<RegressionResult> {
        if values.len() < 2 {
            return Err(AppError::invalid_input(format!(
                "Insufficient data points for regression: need at least 2, got {}",
                values.len()
            )));
        }
        if values.iter().any(|value| !value.is_finite()) {
            return Err(AppError::invalid_input(
                "Cannot calculate regression over non-finite values",
            ));
        }

        let n = values.len() as f64;
        let mean_x = (n - 1.0) / 2.0;
        let mean_y = values.iter().sum::<f64>() / n;

        // Centered sums keep the fit stable for long series with large magnitudes
        let mut sxx = 0.0;
        let mut sxy = 0.0;
        let mut syy = 0.0;
        for (index, value) in values.iter().enumerate() {
            let dx = index as f64 - mean_x;
            let dy = value - mean_y;
            sxx += dx * dx;
            sxy += dx * dy;
            syy += dy * dy;
        }

        let slope = sxy / sxx;
        let intercept = slope.mul_add(-mean_x, mean_y);
        let r_squared = if syy == 0.0 {
            0.0
        } else {
            (sxy * sxy) / (sxx * syy)
        };

        Ok(RegressionResult {
            slope,
            intercept,
            r_squared,
            sample_size: values.len(),
        })
    }

    /// Arithmetic mean (`None` for an empty slice)
    #[must_use]
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Median: middle value, or mean of the two middle values for even counts
    #[must_use]
    pub fn median(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            Some((sorted[mid - 1] + sorted[mid]) / 2.0)
        } else {
            Some(sorted[mid])
        }
    }

    /// Sample standard deviation (n - 1 denominator, `None` below 2 values)
    #[must_use]
    pub fn sample_std(values: &[f64]) -> Option<f64> {
        if values.len() < 2 {
            return None;
        }
        let mean = Self::mean(values)?;
        let sum_sq = Self::sum_squared_deviations(values, mean);
        Some((sum_sq / (values.len() - 1) as f64).sqrt())
    }

    /// Population standard deviation (n denominator, `None` for an empty slice)
    #[must_use]
    pub fn population_std(values: &[f64]) -> Option<f64> {
        let mean = Self::mean(values)?;
        let sum_sq = Self::sum_squared_deviations(values, mean);
        Some((sum_sq / values.len() as f64).sqrt())
    }

    /// Smallest value
    #[must_use]
    pub fn min(values: &[f64]) -> Option<f64> {
        values.iter().copied().reduce(f64::min)
    }

    /// Largest value
    #[must_use]
    pub fn max(values: &[f64]) -> Option<f64> {
        values.iter().copied().reduce(f64::max)
    }

    /// Standard score of `value`; `None` when the deviation is zero or not finite
    #[must_use]
    pub fn z_score(value: f64, mean: f64, std: f64) -> Option<f64> {
        if std == 0.0 || !std.is_finite() {
            return None;
        }
        Some((value - mean) / std)
    }

    fn sum_squared_deviations(values: &[f64], mean: f64) -> f64 {
        values
            .iter()
            .map(|value| {
                let diff = value - mean;
                diff * diff
            })
            .sum()
    }
}
