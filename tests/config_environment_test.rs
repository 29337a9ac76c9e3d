// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment parsing, COACH_* overrides, and rejection of invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use pierre_coach::config::environment::{
    AppConfig, Environment, LogLevel, ENV_DATA_PATH, ENV_KNOWLEDGE_BASE_PATH,
};
use pierre_coach::config::intelligence::{
    AnalysisConfig, ConfigError, FailurePolicy, NormalizationStrategy, ENV_ATHLETE_COLUMN,
    ENV_DATE_COLUMN, ENV_FAILURE_POLICY, ENV_NORMALIZATION, ENV_STABLE_SLOPE_RATIO,
    ENV_STRENGTH_THRESHOLD, ENV_WEAKNESS_THRESHOLD,
};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const ALL_VARS: [&str; 9] = [
    ENV_STABLE_SLOPE_RATIO,
    ENV_STRENGTH_THRESHOLD,
    ENV_WEAKNESS_THRESHOLD,
    ENV_NORMALIZATION,
    ENV_FAILURE_POLICY,
    ENV_ATHLETE_COLUMN,
    ENV_DATE_COLUMN,
    ENV_DATA_PATH,
    ENV_KNOWLEDGE_BASE_PATH,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info); // Default fallback
}

#[test]
fn test_verbosity_flags_raise_level() {
    assert_eq!(LogLevel::Error.raised_by(1), LogLevel::Warn);
    assert_eq!(LogLevel::Info.raised_by(1), LogLevel::Debug);
    assert_eq!(LogLevel::Info.raised_by(2), LogLevel::Trace);
    assert_eq!(LogLevel::Trace.raised_by(3), LogLevel::Trace);
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("testing"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    ); // Default fallback
    assert!(Environment::Production.is_production());
    assert!(!Environment::Development.is_testing());
}

#[test]
#[serial]
fn test_defaults_without_overrides() {
    clear_env();
    let config = AnalysisConfig::from_env().unwrap();
    assert_eq!(config, AnalysisConfig::default());
    assert_eq!(config.failure_policy, FailurePolicy::FailSoft);
    assert_eq!(config.scoring.normalization, NormalizationStrategy::Pooled);
    assert_eq!(config.trend.stable_slope_ratio, 0.01);
    assert_eq!(config.scoring.strength_threshold, 0.75);
    assert_eq!(config.scoring.weakness_threshold, -0.75);
}

#[test]
#[serial]
fn test_analysis_overrides_from_env() {
    clear_env();
    env::set_var(ENV_FAILURE_POLICY, "fail-loud");
    env::set_var(ENV_NORMALIZATION, "per_metric");
    env::set_var(ENV_STABLE_SLOPE_RATIO, "0.05");
    env::set_var(ENV_STRENGTH_THRESHOLD, " 1.5 ");
    env::set_var(ENV_WEAKNESS_THRESHOLD, "-1.5");
    env::set_var(ENV_ATHLETE_COLUMN, "Player");
    env::set_var(ENV_DATE_COLUMN, "Day");

    let config = AnalysisConfig::from_env();
    clear_env();
    let config = config.unwrap();

    assert_eq!(config.failure_policy, FailurePolicy::FailLoud);
    assert_eq!(config.scoring.normalization, NormalizationStrategy::PerMetric);
    assert_eq!(config.trend.stable_slope_ratio, 0.05);
    assert_eq!(config.scoring.strength_threshold, 1.5);
    assert_eq!(config.scoring.weakness_threshold, -1.5);
    assert_eq!(config.schema.athlete_column, "Player");
    assert_eq!(config.schema.date_column, "Day");
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_env();
    env::set_var(ENV_STRENGTH_THRESHOLD, "high");
    let result = AnalysisConfig::from_env();
    clear_env();
    assert!(matches!(result, Err(ConfigError::Parse(_))));

    env::set_var(ENV_FAILURE_POLICY, "sometimes");
    let result = AnalysisConfig::from_env();
    clear_env();
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_inverted_thresholds_fail_validation() {
    clear_env();
    env::set_var(ENV_STRENGTH_THRESHOLD, "-1.0");
    env::set_var(ENV_WEAKNESS_THRESHOLD, "1.0");
    let result = AnalysisConfig::from_env();
    clear_env();
    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_app_config_reads_data_path() {
    clear_env();
    env::set_var(ENV_DATA_PATH, "data/athletes.csv");
    let config = AppConfig::from_env();
    clear_env();
    let config = config.unwrap();
    assert_eq!(config.data_path, Some(PathBuf::from("data/athletes.csv")));

    env::set_var(ENV_DATA_PATH, "   ");
    let config = AppConfig::from_env();
    clear_env();
    assert!(config.unwrap().data_path.is_none());
}

#[test]
#[serial]
fn test_app_config_reads_knowledge_base_path() {
    clear_env();
    assert!(AppConfig::from_env().unwrap().knowledge_base_path.is_none());

    env::set_var(ENV_KNOWLEDGE_BASE_PATH, "data/kb_sports_science.csv");
    let config = AppConfig::from_env();
    clear_env();
    assert_eq!(
        config.unwrap().knowledge_base_path,
        Some(PathBuf::from("data/kb_sports_science.csv"))
    );
}

#[test]
#[serial]
fn test_app_config_surfaces_analysis_errors() {
    clear_env();
    env::set_var(ENV_NORMALIZATION, "zscore");
    let result = AppConfig::from_env();
    clear_env();
    let message = result.unwrap_err().to_string();
    assert!(message.contains("Invalid analysis configuration"));
}
