// ABOUTME: Core data models for athlete performance analysis
// ABOUTME: Re-exports dataset, analysis snapshot, form, pose, and recommendation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models shared by the intelligence engines and the outer application.
//!
//! None of these types carry a mutation lifecycle: they are built per request
//! and discarded once the caller has rendered or serialized them.

/// Per-athlete statistics snapshot, trends, and comparisons
pub mod analysis;
/// Tabular dataset with typed cells
pub mod dataset;
/// Form analysis insights keyed by category
pub mod form;
/// Body keypoints for form analysis
pub mod pose;
/// Category-keyed recommendation sets
pub mod recommendation;

pub use analysis::{
    DateRange, MetricComparison, MetricSeries, MetricSummary, PerformanceAnalysis, SeriesPoint,
    StrengthsWeaknesses, Trend,
};
pub use dataset::{CellValue, Dataset};
pub use form::FormAnalysis;
pub use pose::{BodyPart, FrameSize, Point, PoseKeypoints};
pub use recommendation::{
    RecommendationCategory, RecommendationReport, RecommendationSet, TrainingDay,
};
