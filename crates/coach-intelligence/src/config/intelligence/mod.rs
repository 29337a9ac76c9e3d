// ABOUTME: Analysis configuration for trend, scoring, schema, recommendation, and form settings
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and env loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `trend` - Trend classification ratio and minimum series lengths
//! - `scoring` - Strength/weakness thresholds and normalization strategy
//! - `schema` - Dataset identifier, date, and excluded columns
//! - `recommendation` - Metric polarity for recommendation selection
//! - `form` - Keypoint geometry tolerances and positive insight markers
//!
//! There is no global instance: build an [`AnalysisConfig`] and hand it to
//! `AnalysisContext::new`.

pub mod error;
pub mod form;
pub mod recommendation;
pub mod schema;
pub mod scoring;
pub mod trend;

pub use error::ConfigError;
pub use form::FormConfig;
pub use recommendation::RecommendationConfig;
pub use schema::DatasetSchema;
pub use scoring::{NormalizationStrategy, ScoringConfig};
pub use trend::TrendConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Environment variable overriding [`TrendConfig::stable_slope_ratio`]
pub const ENV_STABLE_SLOPE_RATIO: &str = "COACH_STABLE_SLOPE_RATIO";
/// Environment variable overriding [`ScoringConfig::strength_threshold`]
pub const ENV_STRENGTH_THRESHOLD: &str = "COACH_STRENGTH_THRESHOLD";
/// Environment variable overriding [`ScoringConfig::weakness_threshold`]
pub const ENV_WEAKNESS_THRESHOLD: &str = "COACH_WEAKNESS_THRESHOLD";
/// Environment variable overriding [`ScoringConfig::normalization`]
pub const ENV_NORMALIZATION: &str = "COACH_NORMALIZATION";
/// Environment variable overriding [`AnalysisConfig::failure_policy`]
pub const ENV_FAILURE_POLICY: &str = "COACH_FAILURE_POLICY";
/// Environment variable overriding [`DatasetSchema::athlete_column`]
pub const ENV_ATHLETE_COLUMN: &str = "COACH_ATHLETE_COLUMN";
/// Environment variable overriding [`DatasetSchema::date_column`]
pub const ENV_DATE_COLUMN: &str = "COACH_DATE_COLUMN";

/// How engines react to an empty athlete or an internal failure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Degrade to a safe default output and log the failure
    #[default]
    FailSoft,
    /// Surface the failure to the caller as an error
    FailLoud,
}

impl FailurePolicy {
    /// Whether failures degrade to defaults
    #[must_use]
    pub const fn is_soft(self) -> bool {
        matches!(self, Self::FailSoft)
    }
}

impl FromStr for FailurePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "soft" | "fail_soft" | "fail-soft" => Ok(Self::FailSoft),
            "loud" | "fail_loud" | "fail-loud" => Ok(Self::FailLoud),
            other => Err(ConfigError::Parse(format!(
                "unknown failure policy '{other}' (expected soft or loud)"
            ))),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FailSoft => f.write_str("fail_soft"),
            Self::FailLoud => f.write_str("fail_loud"),
        }
    }
}

/// Main analysis configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Trend classification settings
    pub trend: TrendConfig,
    /// Strength/weakness scoring settings
    pub scoring: ScoringConfig,
    /// Dataset column layout
    pub schema: DatasetSchema,
    /// Recommendation selection settings
    pub recommendation: RecommendationConfig,
    /// Form analysis settings
    pub form: FormConfig,
    /// Failure handling shared by every engine
    pub failure_policy: FailurePolicy,
}

impl AnalysisConfig {
    /// Load configuration from defaults overridden by `COACH_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value or
    /// the resulting configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            normalization = %config.scoring.normalization,
            failure_policy = %config.failure_policy,
            "Loaded analysis configuration"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.trend.stable_slope_ratio.is_finite() || self.trend.stable_slope_ratio < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "stable_slope_ratio must be a finite, non-negative number",
            ));
        }
        if self.trend.summary_min_points < 2 || self.trend.recommendation_min_points < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "trend minimum points must be at least 2 to fit a line",
            ));
        }

        if !self.scoring.strength_threshold.is_finite()
            || !self.scoring.weakness_threshold.is_finite()
        {
            return Err(ConfigError::ValueOutOfRange(
                "scoring thresholds must be finite",
            ));
        }
        if self.scoring.weakness_threshold >= self.scoring.strength_threshold {
            return Err(ConfigError::InvalidRange(
                "weakness_threshold must be < strength_threshold",
            ));
        }

        if self.schema.athlete_column.trim().is_empty() {
            return Err(ConfigError::MissingField("schema.athlete_column"));
        }
        if self.schema.athlete_column == self.schema.date_column {
            return Err(ConfigError::InvalidRange(
                "athlete_column and date_column must differ",
            ));
        }

        Self::validate_ratio(
            self.form.level_tolerance_ratio,
            "level_tolerance_ratio must be between 0 and 1",
        )?;
        Self::validate_ratio(
            self.form.knee_ankle_tolerance_ratio,
            "knee_ankle_tolerance_ratio must be between 0 and 1",
        )?;
        if !(0.0..=90.0).contains(&self.form.spine_vertical_max_degrees) {
            return Err(ConfigError::ValueOutOfRange(
                "spine_vertical_max_degrees must be between 0 and 90",
            ));
        }
        if self.form.positive_markers.is_empty() {
            return Err(ConfigError::MissingField("form.positive_markers"));
        }

        Ok(())
    }

    fn validate_ratio(value: f64, message: &'static str) -> Result<(), ConfigError> {
        if (0.0..=1.0).contains(&value) {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange(message))
        }
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(ENV_STABLE_SLOPE_RATIO, &mut self.trend.stable_slope_ratio)?;
        Self::apply_env_var(ENV_STRENGTH_THRESHOLD, &mut self.scoring.strength_threshold)?;
        Self::apply_env_var(ENV_WEAKNESS_THRESHOLD, &mut self.scoring.weakness_threshold)?;

        if let Ok(val) = env::var(ENV_NORMALIZATION) {
            self.scoring.normalization = val.parse()?;
        }
        if let Ok(val) = env::var(ENV_FAILURE_POLICY) {
            self.failure_policy = val.parse()?;
        }

        Self::apply_env_var(ENV_ATHLETE_COLUMN, &mut self.schema.athlete_column)?;
        Self::apply_env_var(ENV_DATE_COLUMN, &mut self.schema.date_column)?;

        Ok(self)
    }
}
