// ABOUTME: Recommendation selection from metric trend signals and form analysis insights
// ABOUTME: Maps flagged metrics and form issues to fixed advice strings grouped by category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Engine
//!
//! Inputs are classified once at the boundary into a [`RecommendationRequest`].
//! Performance input is reduced to per-metric trend labels; form input is a
//! category to insight-strings map. Output advice is fixed text chosen by
//! lookup tables keyed on metric names and form categories.

use crate::config::intelligence::{AnalysisConfig, FailurePolicy};
use crate::metric_summarizer::MetricSummarizer;
use coach_core::constants::form::{ALIGNMENT, BALANCE, JOINT_ANGLES, POSTURE};
use coach_core::constants::training_plan::WEEKLY_PLAN;
use coach_core::constants::metrics::{
    BODY_COMPOSITION_METRICS, ENDURANCE_METRICS, FATIGUE_LEVEL, GENERAL_STRENGTH_METRICS,
    RECOVERY_METRICS, RECOVERY_TIME, SLEEP_QUALITY, STRENGTH_METRICS,
};
use coach_core::errors::AppResult;
use coach_core::models::{
    Dataset, FormAnalysis, PerformanceAnalysis, RecommendationCategory, RecommendationReport,
    RecommendationSet, TrainingDay, Trend,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, error};

use RecommendationCategory::{
    EnduranceDevelopment, NutritionSuggestions, RecoveryStrategies, StrengthTraining,
    TechniqueImprovements,
};

/// Technique advice used when performance input flags nothing technical
const TECHNIQUE_FALLBACK: &str = "Continue refining movement quality with regular technique reviews";

/// Fixed weekly training plan, Monday first
#[must_use]
pub fn weekly_training_plan() -> Vec<TrainingDay> {
    WEEKLY_PLAN
        .iter()
        .map(|(day, activity)| TrainingDay::new(*day, *activity))
        .collect()
}

/// Per-metric trend labels extracted from an athlete's performance data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceSignals {
    trends: BTreeMap<String, Trend>,
}

impl PerformanceSignals {
    /// Signals for metrics that have at least one observation
    #[must_use]
    pub fn new(trends: BTreeMap<String, Trend>) -> Self {
        Self { trends }
    }

    /// Trend for a metric, if observed
    #[must_use]
    pub fn trend(&self, metric: &str) -> Option<Trend> {
        self.trends.get(metric).copied()
    }

    /// Whether the metric has at least one observation
    #[must_use]
    pub fn has_metric(&self, metric: &str) -> bool {
        self.trends.contains_key(metric)
    }

    /// Whether no metric was observed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trends.is_empty()
    }

    /// Observed metrics and their trends in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Trend)> {
        self.trends
            .iter()
            .map(|(metric, trend)| (metric.as_str(), *trend))
    }
}

impl From<&PerformanceAnalysis> for PerformanceSignals {
    fn from(analysis: &PerformanceAnalysis) -> Self {
        Self::new(analysis.trends().into_iter().collect())
    }
}

impl<S: Into<String>> FromIterator<(S, Trend)> for PerformanceSignals {
    fn from_iter<T: IntoIterator<Item = (S, Trend)>>(iter: T) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(metric, trend)| (metric.into(), trend))
                .collect(),
        )
    }
}

/// Which inputs a recommendation request carries
#[derive(Debug, Clone, Copy)]
pub enum RecommendationRequest<'a> {
    /// Trend signals only
    PerformanceOnly(&'a PerformanceSignals),
    /// Form insights only
    FormOnly(&'a FormAnalysis),
    /// Trend signals and form insights
    Both {
        /// Trend signals
        performance: &'a PerformanceSignals,
        /// Form insights
        form: &'a FormAnalysis,
    },
    /// No input: general advice
    Neither,
}

impl<'a> RecommendationRequest<'a> {
    /// Select the request variant from optional inputs
    #[must_use]
    pub const fn from_inputs(
        performance: Option<&'a PerformanceSignals>,
        form: Option<&'a FormAnalysis>,
    ) -> Self {
        match (performance, form) {
            (Some(performance), Some(form)) => Self::Both { performance, form },
            (Some(performance), None) => Self::PerformanceOnly(performance),
            (None, Some(form)) => Self::FormOnly(form),
            (None, None) => Self::Neither,
        }
    }

    /// Stable label for logging
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PerformanceOnly(_) => "performance_only",
            Self::FormOnly(_) => "form_only",
            Self::Both { .. } => "both",
            Self::Neither => "neither",
        }
    }
}

/// Metrics split by whether their trend direction is desirable
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendAssessment {
    /// Metrics trending in the undesirable direction
    pub improvements_needed: Vec<String>,
    /// Metrics trending in the desirable direction
    pub strengths: Vec<String>,
}

impl TrendAssessment {
    /// Whether a metric was flagged as needing improvement
    #[must_use]
    pub fn needs_improvement(&self, metric: &str) -> bool {
        self.improvements_needed.iter().any(|flagged| flagged == metric)
    }
}

/// Selects advice strings from trend signals and form insights
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> RecommendationEngine<'a> {
    /// Create an engine over the given configuration
    #[must_use]
    pub const fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Build the recommendation set for a request
    #[must_use]
    pub fn generate(&self, request: &RecommendationRequest<'_>) -> RecommendationSet {
        debug!(request = request.kind(), "Generating recommendations");
        match *request {
            RecommendationRequest::Neither => Self::general_recommendations(),
            RecommendationRequest::PerformanceOnly(performance) => {
                let mut set = self.performance_recommendations(performance);
                Self::ensure_technique(&mut set);
                set
            }
            RecommendationRequest::FormOnly(form) => {
                let mut set = RecommendationSet::with_all_categories();
                set.extend(self.form_recommendations(form));
                set
            }
            RecommendationRequest::Both { performance, form } => {
                let mut set = self.performance_recommendations(performance);
                set.extend(self.form_recommendations(form));
                Self::ensure_technique(&mut set);
                set
            }
        }
    }

    /// Recommendations for an athlete in a dataset, optionally with form insights.
    ///
    /// Failures while extracting trend signals follow the failure policy:
    /// fail-soft logs and returns the general set, fail-loud returns the error.
    ///
    /// # Errors
    ///
    /// Returns the extraction error under [`FailurePolicy::FailLoud`]
    pub fn recommend_for_athlete(
        &self,
        dataset: &Dataset,
        athlete: &str,
        form: Option<&FormAnalysis>,
    ) -> AppResult<RecommendationSet> {
        let signals = match MetricSummarizer::new(self.config).performance_signals(dataset, athlete)
        {
            Ok(signals) => signals,
            Err(err) => {
                return match self.config.failure_policy {
                    FailurePolicy::FailSoft => {
                        error!(athlete, error = %err, "Error generating recommendations; using general advice");
                        Ok(Self::general_recommendations())
                    }
                    FailurePolicy::FailLoud => Err(err),
                };
            }
        };

        let request = RecommendationRequest::from_inputs(Some(&signals), form);
        Ok(self.generate(&request))
    }

    /// Recommendations for an athlete bundled with the weekly training plan
    ///
    /// # Errors
    ///
    /// See [`Self::recommend_for_athlete`]
    pub fn report_for_athlete(
        &self,
        dataset: &Dataset,
        athlete: &str,
        form: Option<&FormAnalysis>,
    ) -> AppResult<RecommendationReport> {
        Ok(RecommendationReport {
            athlete: athlete.to_owned(),
            recommendations: self.recommend_for_athlete(dataset, athlete, form)?,
            weekly_plan: weekly_training_plan(),
        })
    }

    /// Split observed metrics by trend polarity.
    ///
    /// A decreasing trend needs improvement unless the metric is inverse; an
    /// increasing trend needs improvement only for inverse metrics.
    #[must_use]
    pub fn assess(&self, signals: &PerformanceSignals) -> TrendAssessment {
        let mut assessment = TrendAssessment::default();
        for (metric, trend) in signals.iter() {
            let inverse = self.config.recommendation.is_inverse(metric);
            match (trend, inverse) {
                (Trend::Decreasing, false) | (Trend::Increasing, true) => {
                    assessment.improvements_needed.push(metric.to_owned());
                }
                (Trend::Increasing, false) | (Trend::Decreasing, true) => {
                    assessment.strengths.push(metric.to_owned());
                }
                (Trend::Stable | Trend::InsufficientData, _) => {}
            }
        }
        assessment
    }

    /// Fixed general advice used when no input is supplied
    #[must_use]
    pub fn general_recommendations() -> RecommendationSet {
        let mut set = RecommendationSet::with_all_categories();
        let general: [(RecommendationCategory, [&str; 4]); 5] = [
            (
                StrengthTraining,
                [
                    "Implement periodized training program with varied intensity and volume",
                    "Focus on compound movements for overall strength development",
                    "Include unilateral exercises to address muscle imbalances",
                    "Add progressive overload by increasing weight 5-10% when current weight becomes manageable",
                ],
            ),
            (
                EnduranceDevelopment,
                [
                    "Incorporate interval training 1-2 times per week",
                    "Build aerobic base with zone 2 training (60-70% max heart rate)",
                    "Implement tempo sessions at 75-85% max heart rate",
                    "Gradually increase training volume no more than 10% per week",
                ],
            ),
            (
                RecoveryStrategies,
                [
                    "Ensure 7-9 hours of quality sleep per night",
                    "Implement active recovery sessions between intense training days",
                    "Use contrast therapy (alternating hot and cold) for enhanced recovery",
                    "Schedule regular deload weeks every 4-6 weeks to prevent overtraining",
                ],
            ),
            (
                TechniqueImprovements,
                [
                    "Regularly record and review exercise technique",
                    "Focus on quality movement patterns rather than weight/reps",
                    "Practice technique drills with light loads",
                    "Consider working with a technique coach for specialized feedback",
                ],
            ),
            (
                NutritionSuggestions,
                [
                    "Maintain protein intake at 1.6-2.0g per kg of bodyweight",
                    "Time carbohydrate intake around training sessions",
                    "Stay hydrated with 30-40ml of water per kg of bodyweight daily",
                    "Consider periodized nutrition approach aligned with training phases",
                ],
            ),
        ];
        for (category, advice) in general {
            for line in advice {
                set.push(category, line);
            }
        }
        set
    }

    fn performance_recommendations(&self, signals: &PerformanceSignals) -> RecommendationSet {
        let assessment = self.assess(signals);
        let mut set = RecommendationSet::with_all_categories();

        for metric in STRENGTH_METRICS {
            if !assessment.needs_improvement(metric) {
                continue;
            }
            if GENERAL_STRENGTH_METRICS.contains(&metric) {
                let lower = metric.to_lowercase();
                set.push(
                    StrengthTraining,
                    format!("Focus on progressive overload to improve {lower}"),
                );
                set.push(
                    StrengthTraining,
                    format!("Add compound movements like squats and deadlifts to build overall {lower}"),
                );
            } else {
                set.push(
                    StrengthTraining,
                    format!("Implement specialized training program to improve {metric}"),
                );
                set.push(
                    StrengthTraining,
                    format!("Consider periodization to break through {metric} plateau"),
                );
            }
        }
        if set.is_category_empty(StrengthTraining) {
            set.push(
                StrengthTraining,
                "Maintain balanced strength training program with emphasis on sport-specific movements",
            );
        }

        for metric in ENDURANCE_METRICS {
            if !assessment.needs_improvement(metric) {
                continue;
            }
            let lower = metric.to_lowercase();
            set.push(
                EnduranceDevelopment,
                format!("Implement interval training to improve {lower}"),
            );
            set.push(
                EnduranceDevelopment,
                format!("Gradually increase training volume to build {lower}"),
            );
        }
        if set.is_category_empty(EnduranceDevelopment) {
            set.push(
                EnduranceDevelopment,
                "Maintain current endurance training with focus on quality over quantity",
            );
        }

        for metric in RECOVERY_METRICS {
            if !assessment.needs_improvement(metric) {
                continue;
            }
            match metric {
                RECOVERY_TIME | FATIGUE_LEVEL => {
                    set.push(
                        RecoveryStrategies,
                        "Implement active recovery sessions to reduce fatigue",
                    );
                    set.push(
                        RecoveryStrategies,
                        "Consider stress management techniques to improve recovery",
                    );
                }
                SLEEP_QUALITY => {
                    set.push(
                        RecoveryStrategies,
                        "Focus on sleep hygiene to improve recovery overnight",
                    );
                    set.push(
                        RecoveryStrategies,
                        "Aim for 7-9 hours of quality sleep per night",
                    );
                }
                _ => set.push(
                    RecoveryStrategies,
                    "Incorporate foam rolling and stretching to reduce soreness",
                ),
            }
        }
        if set.is_category_empty(RecoveryStrategies) {
            set.push(
                RecoveryStrategies,
                "Continue with current recovery protocols but monitor for signs of overtraining",
            );
        }

        if BODY_COMPOSITION_METRICS
            .iter()
            .any(|metric| signals.has_metric(metric))
        {
            set.push(
                NutritionSuggestions,
                "Maintain protein intake at 1.6-2.0g per kg of bodyweight",
            );
            set.push(
                NutritionSuggestions,
                "Focus on nutrient timing: protein and carbs within 30-60 minutes after training",
            );
        } else {
            set.push(
                NutritionSuggestions,
                "Ensure adequate hydration before, during, and after training",
            );
            set.push(
                NutritionSuggestions,
                "Consider personalized nutrition plan based on training goals",
            );
        }

        debug!(
            improvements_needed = assessment.improvements_needed.len(),
            strengths = assessment.strengths.len(),
            "Selected performance recommendations"
        );
        set
    }

    fn form_recommendations(&self, form: &FormAnalysis) -> RecommendationSet {
        let mut set = RecommendationSet::default();

        if self.has_issue(form, POSTURE) {
            set.push(
                TechniqueImprovements,
                "Focus on maintaining neutral spine throughout exercise",
            );
            set.push(
                TechniqueImprovements,
                "Practice proper posture with lighter weights to build muscle memory",
            );
            set.push(
                StrengthTraining,
                "Strengthen core muscles to improve postural stability",
            );
        }

        if self.has_issue(form, ALIGNMENT) {
            set.push(
                TechniqueImprovements,
                "Work on body alignment awareness with mirror feedback",
            );
            set.push(
                StrengthTraining,
                "Address muscle imbalances with unilateral exercises",
            );
            set.push(
                RecoveryStrategies,
                "Use mobility work to improve range of motion and alignment",
            );
        }

        if self.has_issue(form, BALANCE) {
            set.push(
                TechniqueImprovements,
                "Practice stability exercises on unstable surfaces",
            );
            set.push(
                StrengthTraining,
                "Strengthen stabilizer muscles around problematic joints",
            );
        }

        if self.has_issue(form, JOINT_ANGLES) {
            set.push(
                TechniqueImprovements,
                "Focus on achieving proper joint angles through full range of motion",
            );
            set.push(
                TechniqueImprovements,
                "Consider video analysis to track joint angles during exercises",
            );
            set.push(
                RecoveryStrategies,
                "Use targeted stretching to improve mobility in restricted joints",
            );
        }

        set
    }

    fn has_issue(&self, form: &FormAnalysis, category: &str) -> bool {
        form.insights(category)
            .iter()
            .any(|insight| self.config.form.is_issue(insight))
    }

    fn ensure_technique(set: &mut RecommendationSet) {
        if set.is_category_empty(TechniqueImprovements) {
            set.push(TechniqueImprovements, TECHNIQUE_FALLBACK);
        }
    }
}
