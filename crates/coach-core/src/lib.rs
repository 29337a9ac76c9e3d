// ABOUTME: Core types and constants for the Pierre coaching analysis platform
// ABOUTME: Foundation crate with error handling, dataset models, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coach Core
//!
//! Foundation crate providing shared types and constants for athlete
//! performance analysis. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **constants**: Column names, recommendation categories, and metric lookup tables
//! - **models**: Tabular datasets, form analysis results, and recommendation sets

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants (dataset columns, categories, metric names)
pub mod constants;

/// Core data models (`Dataset`, `FormAnalysis`, `RecommendationSet`, etc.)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
