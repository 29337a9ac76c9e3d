// ABOUTME: Explicitly constructed analysis context that owns validated configuration
// ABOUTME: Hands out borrowed engines so no component reads process-wide state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::{AnalysisConfig, ConfigError};
use crate::form_analyzer::FormAnalyzer;
use crate::metric_summarizer::MetricSummarizer;
use crate::recommendation_engine::RecommendationEngine;
use crate::strength_scorer::StrengthWeaknessScorer;
use crate::trend_classifier::TrendClassifier;

/// Validated configuration plus engine constructors.
///
/// Build one per process (or per request) and pass it by reference; engines
/// borrow from it and hold no state of their own.
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    config: AnalysisConfig,
}

impl AnalysisContext {
    /// Create a context from a configuration, validating it first
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: AnalysisConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a context from defaults overridden by `COACH_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment value is invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            config: AnalysisConfig::from_env()?,
        })
    }

    /// Configuration in effect
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Trend classifier
    #[must_use]
    pub const fn trend_classifier(&self) -> TrendClassifier<'_> {
        TrendClassifier::new(&self.config.trend)
    }

    /// Strength / weakness scorer
    #[must_use]
    pub const fn strength_scorer(&self) -> StrengthWeaknessScorer<'_> {
        StrengthWeaknessScorer::new(&self.config.scoring)
    }

    /// Metric summarizer
    #[must_use]
    pub const fn summarizer(&self) -> MetricSummarizer<'_> {
        MetricSummarizer::new(&self.config)
    }

    /// Recommendation engine
    #[must_use]
    pub const fn recommendation_engine(&self) -> RecommendationEngine<'_> {
        RecommendationEngine::new(&self.config)
    }

    /// Form analyzer
    #[must_use]
    pub const fn form_analyzer(&self) -> FormAnalyzer<'_> {
        FormAnalyzer::new(&self.config.form, self.config.failure_policy)
    }
}
