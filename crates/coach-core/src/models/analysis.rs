// ABOUTME: Analysis result models: trend labels, metric summaries, and athlete snapshots
// ABOUTME: Ephemeral per-request structures serialized for callers, never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Direction of a least-squares fit over a metric's time-ordered values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Positive slope beyond the stability threshold
    Increasing,
    /// Negative slope (or a slope the threshold cannot absorb)
    Decreasing,
    /// Slope within the scale-relative stability threshold
    Stable,
    /// Too few points to fit a line
    InsufficientData,
}

impl Trend {
    /// Stable snake-case label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
            Self::InsufficientData => "insufficient_data",
        }
    }

    /// Whether a direction was determined
    #[must_use]
    pub const fn is_directional(self) -> bool {
        matches!(self, Self::Increasing | Self::Decreasing)
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observation of a metric series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Session date when the dataset carries a parseable one
    pub date: Option<NaiveDate>,
    /// Observed value (`None` when the cell was missing or non-numeric)
    pub value: Option<f64>,
}

/// Ordered observations of one metric for one athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    /// Metric (column) name
    pub metric: String,
    /// Observations in chronological order
    pub points: Vec<SeriesPoint>,
}

impl MetricSeries {
    /// Create an empty series for a metric
    #[must_use]
    pub fn new(metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            points: Vec::new(),
        }
    }

    /// Build a series from bare values without dates
    #[must_use]
    pub fn from_values(metric: impl Into<String>, values: &[Option<f64>]) -> Self {
        Self {
            metric: metric.into(),
            points: values
                .iter()
                .map(|value| SeriesPoint {
                    date: None,
                    value: *value,
                })
                .collect(),
        }
    }

    /// Non-missing values in order
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().filter_map(|point| point.value).collect()
    }

    /// Last non-missing value
    #[must_use]
    pub fn latest(&self) -> Option<f64> {
        self.points.iter().rev().find_map(|point| point.value)
    }

    /// Whether the series has no non-missing value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.latest().is_none()
    }
}

/// Descriptive statistics for one metric of one athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    /// Metric (column) name
    pub metric: String,
    /// Number of non-missing observations
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Median
    pub median: f64,
    /// Minimum observed value
    pub min: f64,
    /// Maximum observed value
    pub max: f64,
    /// Sample standard deviation (`None` with a single observation)
    pub std: Option<f64>,
    /// Chronologically last observed value
    pub recent: f64,
    /// Trend label over the observations
    pub trend: Trend,
}

/// First and last session dates of an athlete's observations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest parseable date
    pub start: NaiveDate,
    /// Latest parseable date
    pub end: NaiveDate,
}

/// Metrics flagged as exceptionally high or low for an athlete
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrengthsWeaknesses {
    /// Metrics whose normalized recent value exceeds the strength threshold
    pub strengths: Vec<String>,
    /// Metrics whose normalized recent value is below the weakness threshold
    pub weaknesses: Vec<String>,
    /// Normalized score per scored metric
    pub scores: BTreeMap<String, f64>,
}

/// Snapshot of an athlete's statistics at query time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    /// Athlete identifier the snapshot was computed for
    pub athlete: String,
    /// Per-metric statistics in column order
    pub metrics: Vec<MetricSummary>,
    /// Metrics flagged as strengths
    pub strengths: Vec<String>,
    /// Metrics flagged as weaknesses
    pub weaknesses: Vec<String>,
    /// Number of rows matched for the athlete
    pub data_points: usize,
    /// Session date range (absent without a date column or parseable dates)
    pub date_range: Option<DateRange>,
}

impl PerformanceAnalysis {
    /// Empty snapshot returned when no rows match the athlete
    #[must_use]
    pub fn empty(athlete: impl Into<String>) -> Self {
        Self {
            athlete: athlete.into(),
            metrics: Vec::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            data_points: 0,
            date_range: None,
        }
    }

    /// Whether no rows matched
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data_points == 0
    }

    /// Summary for a metric by name
    #[must_use]
    pub fn metric(&self, name: &str) -> Option<&MetricSummary> {
        self.metrics.iter().find(|summary| summary.metric == name)
    }

    /// Trend label per metric, in column order
    #[must_use]
    pub fn trends(&self) -> Vec<(String, Trend)> {
        self.metrics
            .iter()
            .map(|summary| (summary.metric.clone(), summary.trend))
            .collect()
    }
}

/// Side-by-side metric means for two athletes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    /// Metric (column) name
    pub metric: String,
    /// Mean for the first athlete
    pub first_mean: Option<f64>,
    /// Mean for the second athlete
    pub second_mean: Option<f64>,
    /// `first_mean - second_mean` when both exist
    pub difference: Option<f64>,
}
