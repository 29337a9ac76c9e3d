// ABOUTME: Configuration management module for the coaching tools
// ABOUTME: Re-exports environment configuration and the analysis settings it carries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: deployment mode, log level, default data path
//! - **Analysis**: trend, scoring, schema, recommendation, and form settings
//!   (defined in `coach-intelligence`, loaded here from `COACH_*` variables)

/// Environment configuration
pub mod environment;

pub use coach_intelligence::config::intelligence;
pub use environment::{AppConfig, Environment, LogLevel};
