// ABOUTME: Main library entry point for the Pierre athlete performance coach
// ABOUTME: Dataset I/O, synthetic data, logging, and the assistant facade over the analysis crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Pierre Coach
//!
//! Performance analysis for athlete training datasets: one row per session,
//! one column per metric.
//!
//! ## Features
//!
//! - **Trends**: increasing, decreasing, or stable per metric from a least-squares fit
//! - **Strengths and weaknesses**: normalized recent values against configurable thresholds
//! - **Recommendations**: training, recovery, nutrition, and technique advice
//! - **Form analysis**: posture, alignment, balance, and knee angles from body keypoints
//! - **Dataset I/O**: CSV and JSON loading plus a seeded synthetic generator
//! - **Knowledge base**: topic-gated sports-science answers with citations
//!
//! ## Architecture
//!
//! - **`coach-core`**: error types, constants, and data models
//! - **`coach-intelligence`**: the analysis engines and their configuration
//! - **this crate**: loading, logging, environment configuration, and the
//!   [`AthleteAssistant`] facade used by the `coach-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_coach::AthleteAssistant;
//! use pierre_coach::coach_core::errors::AppResult;
//! use std::path::Path;
//!
//! fn main() -> AppResult<()> {
//!     let assistant = AthleteAssistant::default();
//!     let dataset = assistant.load_dataset(Path::new("data/sessions.csv"))?;
//!
//!     for athlete in assistant.athletes(&dataset)? {
//!         let report = assistant.recommend(&dataset, &athlete, None)?;
//!         println!("{athlete}: {} recommendations", report.recommendations.total());
//!     }
//!     Ok(())
//! }
//! ```

/// Athlete assistant facade
pub mod assistant;

/// Environment configuration
pub mod config;

/// CSV and JSON dataset loading and writing
pub mod dataset_loader;

/// Sports-science question answering over a CSV document store
pub mod knowledge_base;

/// Structured logging setup
pub mod logging;

/// Seeded synthetic dataset generation
pub mod synthetic;

pub use assistant::AthleteAssistant;
pub use coach_core;
pub use coach_intelligence;
pub use dataset_loader::{DataFormat, DatasetLoader};
pub use knowledge_base::{KnowledgeAnswer, KnowledgeBase, KnowledgeDocument};
pub use synthetic::{SyntheticConfig, SyntheticDataGenerator};
