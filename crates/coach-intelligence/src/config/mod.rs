// ABOUTME: Configuration module for coach-intelligence crate
// ABOUTME: Re-exports analysis configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Analysis configuration (trend, scoring, schema, recommendations, form)
pub mod intelligence;

pub use intelligence::{AnalysisConfig, ConfigError, FailurePolicy, NormalizationStrategy};
