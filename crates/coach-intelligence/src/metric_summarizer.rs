// ABOUTME: Per-athlete metric summaries, key metrics, comparisons, and series extraction
// ABOUTME: Filters dataset rows by athlete, orders them by date, and composes trend and scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metric Summarizer
//!
//! Turns the raw rows of a [`Dataset`] into the per-athlete views the rest of
//! the engine works with. Metric columns are every column outside the
//! configured exclusion set; text-only columns yield no summary.

use crate::config::intelligence::{AnalysisConfig, FailurePolicy};
use crate::date_parsing::sort_by_date;
use crate::recommendation_engine::PerformanceSignals;
use crate::statistical_analysis::{RegressionResult, StatisticalAnalyzer};
use crate::strength_scorer::StrengthWeaknessScorer;
use crate::trend_classifier::{TrendClassifier, TrendPurpose};
use chrono::NaiveDate;
use coach_core::errors::{AppError, AppResult};
use coach_core::models::{
    CellValue, Dataset, DateRange, MetricComparison, MetricSeries, MetricSummary,
    PerformanceAnalysis, SeriesPoint, Trend,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Rows of one athlete in chronological order, each with its coerced date
type AthleteRows<'d> = Vec<(Option<NaiveDate>, &'d [CellValue])>;

/// A metric series as a trend chart would plot it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesTrend {
    /// Date-ordered observations
    pub series: MetricSeries,
    /// Trend label over the non-missing values
    pub trend: Trend,
    /// Least-squares fit for a trendline (absent below 2 values)
    pub regression: Option<RegressionResult>,
}

/// Builds athlete snapshots and derived views from a dataset
#[derive(Debug, Clone, Copy)]
pub struct MetricSummarizer<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> MetricSummarizer<'a> {
    /// Create a summarizer over the given configuration
    #[must_use]
    pub const fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Per-metric statistics, strengths, weaknesses, row count, and date range
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the athlete column is absent, or
    /// `ResourceNotFound` for an unknown athlete under [`FailurePolicy::FailLoud`]
    pub fn summarize(&self, dataset: &Dataset, athlete: &str) -> AppResult<PerformanceAnalysis> {
        let rows = self.athlete_rows(dataset, athlete)?;
        if rows.is_empty() {
            return self.empty_athlete(athlete);
        }

        let series = self.series_from_rows(dataset, &rows);
        let classifier = TrendClassifier::new(&self.config.trend);
        let metrics: Vec<MetricSummary> = series
            .iter()
            .filter_map(|metric| Self::summarize_series(metric, &classifier))
            .collect();
        let scored = StrengthWeaknessScorer::new(&self.config.scoring).score(&series);

        let date_range = if dataset.has_column(&self.config.schema.date_column) {
            Self::date_range(&rows)
        } else {
            None
        };

        debug!(
            athlete,
            data_points = rows.len(),
            metrics = metrics.len(),
            "Summarized athlete performance"
        );

        Ok(PerformanceAnalysis {
            athlete: athlete.to_owned(),
            metrics,
            strengths: scored.strengths,
            weaknesses: scored.weaknesses,
            data_points: rows.len(),
            date_range,
        })
    }

    /// Date-ordered series of every metric column for an athlete
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the athlete column is absent
    pub fn athlete_series(&self, dataset: &Dataset, athlete: &str) -> AppResult<Vec<MetricSeries>> {
        let rows = self.athlete_rows(dataset, athlete)?;
        Ok(self.series_from_rows(dataset, &rows))
    }

    /// Trend signals that drive recommendation selection.
    ///
    /// Uses the recommendation minimum series length. Metrics without any
    /// non-missing value are left out.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the athlete column is absent
    pub fn performance_signals(
        &self,
        dataset: &Dataset,
        athlete: &str,
    ) -> AppResult<PerformanceSignals> {
        let classifier = TrendClassifier::new(&self.config.trend);
        let trends = self
            .athlete_series(dataset, athlete)?
            .into_iter()
            .filter(|series| !series.is_empty())
            .map(|series| {
                let trend = classifier.classify(&series.values(), TrendPurpose::Recommendation);
                (series.metric, trend)
            })
            .collect();
        Ok(PerformanceSignals::new(trends))
    }

    /// Most recent observation per metric: the row with the latest parseable
    /// date, otherwise the last row. Missing cells are omitted.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the athlete column is absent
    pub fn key_metrics(
        &self,
        dataset: &Dataset,
        athlete: &str,
    ) -> AppResult<BTreeMap<String, CellValue>> {
        let rows = self.athlete_rows(dataset, athlete)?;

        // Dated rows come first in ascending order; keep the first row on the latest date
        let latest_date = rows.iter().filter_map(|(date, _)| *date).max();
        let most_recent = match latest_date {
            Some(latest) => rows
                .iter()
                .find(|(date, _)| *date == Some(latest))
                .map(|(_, row)| *row),
            None => rows.last().map(|(_, row)| *row),
        };

        let Some(row) = most_recent else {
            return Ok(BTreeMap::new());
        };

        Ok(self
            .metric_columns(dataset)
            .into_iter()
            .filter_map(|(index, column)| {
                let cell = row.get(index)?;
                (!cell.is_missing()).then(|| (column.to_owned(), cell.clone()))
            })
            .collect())
    }

    /// Mean of each metric column for two athletes and their difference
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the athlete column is absent
    pub fn compare(
        &self,
        dataset: &Dataset,
        first: &str,
        second: &str,
    ) -> AppResult<Vec<MetricComparison>> {
        let first_rows = dataset.rows_matching(&self.config.schema.athlete_column, first)?;
        let second_rows = dataset.rows_matching(&self.config.schema.athlete_column, second)?;

        let column_mean = |rows: &[&[CellValue]], index: usize| {
            let values: Vec<f64> = rows
                .iter()
                .filter_map(|row| row.get(index).and_then(CellValue::as_number))
                .collect();
            StatisticalAnalyzer::mean(&values)
        };

        Ok(self
            .metric_columns(dataset)
            .into_iter()
            .map(|(index, column)| {
                let first_mean = column_mean(first_rows.as_slice(), index);
                let second_mean = column_mean(second_rows.as_slice(), index);
                let difference = first_mean.zip(second_mean).map(|(a, b)| a - b);
                MetricComparison {
                    metric: column.to_owned(),
                    first_mean,
                    second_mean,
                    difference,
                }
            })
            .collect())
    }

    /// Date-ordered series of one metric with its trend and trendline fit
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the athlete or metric column is absent,
    /// or `InvalidInput` if the column is not a metric under the schema
    pub fn metric_series(
        &self,
        dataset: &Dataset,
        athlete: &str,
        metric: &str,
    ) -> AppResult<SeriesTrend> {
        let index = dataset.require_column(metric)?;
        if !self.config.schema.is_metric_column(metric) {
            return Err(AppError::invalid_input(format!(
                "Column '{metric}' is not a metric column"
            ))
            .with_resource_id(metric));
        }

        let rows = self.athlete_rows(dataset, athlete)?;
        let series = Self::series_for_column(metric, index, &rows);
        let values = series.values();
        let trend =
            TrendClassifier::new(&self.config.trend).classify(&values, TrendPurpose::Summary);
        let regression = StatisticalAnalyzer::linear_regression(&values).ok();

        Ok(SeriesTrend {
            series,
            trend,
            regression,
        })
    }

    /// Distinct athlete identifiers in first-seen order
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the athlete column is absent
    pub fn athletes(&self, dataset: &Dataset) -> AppResult<Vec<String>> {
        dataset.distinct_values(&self.config.schema.athlete_column)
    }

    /// Metric columns under the schema, with their positions
    #[must_use]
    pub fn metric_columns<'d>(&self, dataset: &'d Dataset) -> Vec<(usize, &'d str)> {
        dataset
            .columns()
            .iter()
            .enumerate()
            .filter(|(_, column)| self.config.schema.is_metric_column(column))
            .map(|(index, column)| (index, column.as_str()))
            .collect()
    }

    fn athlete_rows<'d>(&self, dataset: &'d Dataset, athlete: &str) -> AppResult<AthleteRows<'d>> {
        let rows = dataset.rows_matching(&self.config.schema.athlete_column, athlete)?;
        Ok(match dataset.column_index(&self.config.schema.date_column) {
            Some(date_index) => sort_by_date(rows, date_index),
            None => rows.into_iter().map(|row| (None, row)).collect(),
        })
    }

    fn series_from_rows(&self, dataset: &Dataset, rows: &AthleteRows<'_>) -> Vec<MetricSeries> {
        self.metric_columns(dataset)
            .into_iter()
            .map(|(index, column)| Self::series_for_column(column, index, rows))
            .collect()
    }

    fn series_for_column(metric: &str, index: usize, rows: &AthleteRows<'_>) -> MetricSeries {
        MetricSeries {
            metric: metric.to_owned(),
            points: rows
                .iter()
                .map(|(date, row)| SeriesPoint {
                    date: *date,
                    value: row.get(index).and_then(CellValue::as_number),
                })
                .collect(),
        }
    }

    fn summarize_series(
        series: &MetricSeries,
        classifier: &TrendClassifier<'_>,
    ) -> Option<MetricSummary> {
        let values = series.values();
        Some(MetricSummary {
            metric: series.metric.clone(),
            count: values.len(),
            mean: StatisticalAnalyzer::mean(&values)?,
            median: StatisticalAnalyzer::median(&values)?,
            min: StatisticalAnalyzer::min(&values)?,
            max: StatisticalAnalyzer::max(&values)?,
            std: StatisticalAnalyzer::sample_std(&values),
            recent: series.latest()?,
            trend: classifier.classify(&values, TrendPurpose::Summary),
        })
    }

    fn date_range(rows: &AthleteRows<'_>) -> Option<DateRange> {
        let mut dates = rows.iter().filter_map(|(date, _)| *date);
        let first = dates.next()?;
        let (start, end) = dates.fold((first, first), |(start, end), date| {
            (start.min(date), end.max(date))
        });
        Some(DateRange { start, end })
    }

    fn empty_athlete(&self, athlete: &str) -> AppResult<PerformanceAnalysis> {
        match self.config.failure_policy {
            FailurePolicy::FailSoft => {
                warn!(athlete, "No rows found for athlete; returning empty snapshot");
                Ok(PerformanceAnalysis::empty(athlete))
            }
            FailurePolicy::FailLoud => {
                Err(AppError::not_found(format!("Athlete '{athlete}'")).with_resource_id(athlete))
            }
        }
    }
}
