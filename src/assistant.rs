// ABOUTME: Athlete assistant facade tying dataset loading to the analysis engines
// ABOUTME: Owns the analysis context so callers never construct engines themselves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! High-level entry point used by the CLI and by library consumers.

use crate::dataset_loader::DatasetLoader;
use crate::knowledge_base::{is_sports_topic, KnowledgeAnswer, KnowledgeBase};
use coach_core::constants::knowledge::DEFAULT_RESULTS;
use coach_core::errors::{AppError, AppResult};
use coach_core::models::{
    CellValue, Dataset, FormAnalysis, FrameSize, MetricComparison, PerformanceAnalysis,
    PoseKeypoints, RecommendationReport,
};
use coach_intelligence::{
    simulate_keypoints, AnalysisConfig, AnalysisContext, FailurePolicy, SeriesTrend,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{error, info, instrument};

/// Facade over an [`AnalysisContext`] and an optional [`KnowledgeBase`]
#[derive(Debug, Clone, Default)]
pub struct AthleteAssistant {
    context: AnalysisContext,
    knowledge_base: Option<KnowledgeBase>,
}

impl AthleteAssistant {
    /// Create an assistant over an existing context
    #[must_use]
    pub const fn new(context: AnalysisContext) -> Self {
        Self {
            context,
            knowledge_base: None,
        }
    }

    /// Attach a knowledge base used by [`Self::ask`]
    #[must_use]
    pub fn with_knowledge_base(mut self, knowledge_base: KnowledgeBase) -> Self {
        self.knowledge_base = Some(knowledge_base);
        self
    }

    /// Knowledge base in effect, if one was attached
    #[must_use]
    pub const fn knowledge_base(&self) -> Option<&KnowledgeBase> {
        self.knowledge_base.as_ref()
    }

    /// Create an assistant from a configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the configuration fails validation
    pub fn from_config(config: AnalysisConfig) -> AppResult<Self> {
        Ok(Self::new(AnalysisContext::new(config)?))
    }

    /// Analysis context in effect
    #[must_use]
    pub const fn context(&self) -> &AnalysisContext {
        &self.context
    }

    /// Load a dataset, validating it against the configured schema
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is empty, or lacks the
    /// athlete column
    pub fn load_dataset(&self, path: &Path) -> AppResult<Dataset> {
        DatasetLoader::new(&self.context.config().schema).load_path(path)
    }

    /// Distinct athletes in the dataset
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the athlete column is absent
    pub fn athletes(&self, dataset: &Dataset) -> AppResult<Vec<String>> {
        self.context.summarizer().athletes(dataset)
    }

    /// Performance snapshot for an athlete
    ///
    /// # Errors
    ///
    /// See [`coach_intelligence::MetricSummarizer::summarize`]
    #[instrument(skip(self, dataset), fields(rows = dataset.len()))]
    pub fn analyze(&self, dataset: &Dataset, athlete: &str) -> AppResult<PerformanceAnalysis> {
        let analysis = self.context.summarizer().summarize(dataset, athlete)?;
        info!(
            metrics = analysis.metrics.len(),
            strengths = analysis.strengths.len(),
            weaknesses = analysis.weaknesses.len(),
            "Athlete analysis complete"
        );
        Ok(analysis)
    }

    /// Most recent value per metric
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the athlete column is absent
    pub fn key_metrics(
        &self,
        dataset: &Dataset,
        athlete: &str,
    ) -> AppResult<BTreeMap<String, CellValue>> {
        self.context.summarizer().key_metrics(dataset, athlete)
    }

    /// Per-metric mean comparison between two athletes
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
        self.context.summarizer().compare(dataset, first, second)
    }

    /// Date-ordered series of one metric with its trend
    ///
    /// # Errors
    ///
    /// Returns an error if the athlete or metric column is absent, or the
    /// column is not a metric
    pub fn metric_series(
        &self,
        dataset: &Dataset,
        athlete: &str,
        metric: &str,
    ) -> AppResult<SeriesTrend> {
        self.context
            .summarizer()
            .metric_series(dataset, athlete, metric)
    }

    /// Recommendations from the athlete's trends and optional form insights,
    /// together with the weekly training plan
    ///
    /// # Errors
    ///
    /// Returns the underlying failure under fail-loud policy only
    #[instrument(skip(self, dataset, form), fields(with_form = form.is_some()))]
    pub fn recommend(
        &self,
        dataset: &Dataset,
        athlete: &str,
        form: Option<&FormAnalysis>,
    ) -> AppResult<RecommendationReport> {
        let report = self
            .context
            .recommendation_engine()
            .report_for_athlete(dataset, athlete, form)?;
        info!(
            total = report.recommendations.total(),
            "Recommendations generated"
        );
        Ok(report)
    }

    /// Write the plain-text export of a report
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be written
    pub fn export_recommendations(report: &RecommendationReport, path: &Path) -> AppResult<()> {
        fs::write(path, report.to_text()).map_err(|e| {
            AppError::storage(format!("Failed to write '{}'", path.display()))
                .with_resource_id(path.display().to_string())
                .with_source(e)
        })?;
        info!(path = %path.display(), "Recommendations exported");
        Ok(())
    }

    /// Form insights from detected keypoints
    ///
    /// # Errors
    ///
    /// Returns the analysis error under fail-loud policy only
    pub fn analyze_form(
        &self,
        keypoints: &PoseKeypoints,
        frame: FrameSize,
    ) -> AppResult<FormAnalysis> {
        self.context.form_analyzer().analyze(keypoints, frame)
    }

    /// Form insights from the fixed simulated pose for a frame
    ///
    /// # Errors
    ///
    /// Returns the analysis error under fail-loud policy only
    pub fn analyze_simulated_form(&self, frame: FrameSize) -> AppResult<FormAnalysis> {
        self.analyze_form(&simulate_keypoints(frame), frame)
    }

    /// Answer a sports-science question from the attached knowledge base.
    ///
    /// Off-topic questions get the fixed topic reminder whether or not a
    /// knowledge base is attached. Without one, fail-soft logs and returns
    /// the fixed error answer.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` under fail-loud policy when no knowledge
    /// base is attached
    #[instrument(skip(self))]
    pub fn ask(&self, query: &str) -> AppResult<KnowledgeAnswer> {
        match &self.knowledge_base {
            Some(knowledge_base) => Ok(knowledge_base.query(query, DEFAULT_RESULTS)),
            None if !is_sports_topic(query) => Ok(KnowledgeAnswer::off_topic(query)),
            None => match self.context.config().failure_policy {
                FailurePolicy::FailSoft => {
                    error!("Error querying knowledge base: none attached");
                    Ok(KnowledgeAnswer::unavailable(query))
                }
                FailurePolicy::FailLoud => Err(AppError::not_found("knowledge base")),
            },
        }
    }

    /// Read a previously produced form analysis (category to insights) from JSON
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read or
    /// `SerializationError` if it is not a category map
    pub fn load_form_analysis(path: &Path) -> AppResult<FormAnalysis> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("Failed to read '{}'", path.display()))
                .with_resource_id(path.display().to_string())
                .with_source(e)
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}
