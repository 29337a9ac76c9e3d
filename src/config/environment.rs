// ABOUTME: Environment configuration for the coaching CLI and library facade
// ABOUTME: Handles environment variables, deployment modes, data paths, and analysis settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use anyhow::{anyhow, Result};
use coach_intelligence::AnalysisConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable naming the default dataset path
pub const ENV_DATA_PATH: &str = "COACH_DATA_PATH";

/// Environment variable naming the knowledge base CSV
pub const ENV_KNOWLEDGE_BASE_PATH: &str = "COACH_KB_PATH";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }

    /// Level for a count of `-v` flags on top of a base level
    #[must_use]
    pub const fn raised_by(self, steps: u8) -> Self {
        match (self, steps) {
            (level, 0) => level,
            (Self::Error, 1) => Self::Warn,
            (Self::Error, 2) | (Self::Warn, 1) => Self::Info,
            (Self::Error, 3) | (Self::Warn, 2) | (Self::Info, 1) => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration assembled from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Dataset used when a command names no file
    pub data_path: Option<PathBuf>,
    /// Knowledge base CSV used when a question names no file
    pub knowledge_base_path: Option<PathBuf>,
    /// Analysis settings
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an analysis setting is invalid
    pub fn from_env() -> Result<Self> {
        let config = Self {
            environment: env::var("ENVIRONMENT")
                .map(|value| Environment::from_str_or_default(&value))
                .unwrap_or_default(),
            log_level: env::var("RUST_LOG")
                .map(|value| LogLevel::from_str_or_default(&value))
                .unwrap_or_default(),
            data_path: path_from_env(ENV_DATA_PATH),
            knowledge_base_path: path_from_env(ENV_KNOWLEDGE_BASE_PATH),
            analysis: AnalysisConfig::from_env()
                .map_err(|e| anyhow!("Invalid analysis configuration: {e}"))?,
        };

        debug!(
            environment = %config.environment,
            data_path = ?config.data_path,
            knowledge_base_path = ?config.knowledge_base_path,
            "Loaded application configuration"
        );
        Ok(config)
    }
}

/// Non-blank path from an environment variable
fn path_from_env(var: &str) -> Option<PathBuf> {
    env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}
