// ABOUTME: Athlete performance analysis engine for trends, scoring, summaries, and advice
// ABOUTME: Pure synchronous computations over in-memory datasets driven by an explicit context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]
#![allow(clippy::cast_precision_loss)] // Safe: statistics over bounded series lengths and pixel coordinates

//! # Coach Intelligence
//!
//! Analysis core for athlete metric datasets:
//!
//! - **`trend_classifier`**: increasing / decreasing / stable labels from a least-squares slope
//! - **`strength_scorer`**: strengths and weaknesses from normalized recent values
//! - **`metric_summarizer`**: per-athlete statistics, key metrics, comparisons, series
//! - **`recommendation_engine`**: fixed advice selected from trends and form insights
//! - **`form_analyzer`**: posture, alignment, balance, and joint-angle insights from keypoints
//!
//! Every engine borrows its settings from an [`AnalysisContext`]; nothing is
//! initialized implicitly on first use.

/// Analysis configuration types
pub mod config;
/// Explicit analysis context
pub mod context;
/// Date coercion and chronological ordering
pub mod date_parsing;
/// Keypoint form analysis
pub mod form_analyzer;
/// Per-athlete summaries and derived views
pub mod metric_summarizer;
/// Recommendation selection
pub mod recommendation_engine;
/// Regression and descriptive statistics
pub mod statistical_analysis;
/// Strength and weakness scoring
pub mod strength_scorer;
/// Trend classification
pub mod trend_classifier;

pub use config::{AnalysisConfig, ConfigError, FailurePolicy, NormalizationStrategy};
pub use context::AnalysisContext;
pub use form_analyzer::{simulate_keypoints, FormAnalyzer};
pub use metric_summarizer::{MetricSummarizer, SeriesTrend};
pub use recommendation_engine::{
    weekly_training_plan, PerformanceSignals, RecommendationEngine, RecommendationRequest,
    TrendAssessment,
};
pub use statistical_analysis::{RegressionResult, StatisticalAnalyzer};
pub use strength_scorer::StrengthWeaknessScorer;
pub use trend_classifier::{TrendClassifier, TrendPurpose};
