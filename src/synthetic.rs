// ABOUTME: Seeded synthetic athlete dataset generator for demos, tests, and benchmarks
// ABOUTME: Produces athletes x sessions rows with uniform metric scores over the past year
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Synthetic data generation
//!
//! Output is fully determined by the seed and the reference date, so generated
//! files can be regenerated bit-for-bit.

use chrono::{Duration, NaiveDate};
use coach_core::constants::columns::{ATHLETE, DATE, SESSION, SPORT};
use coach_core::constants::metrics::{SYNTHETIC_METRICS, SYNTHETIC_SPORTS};
use coach_core::errors::{AppError, AppResult};
use coach_core::models::{CellValue, Dataset};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::debug;

/// Lowest generated metric score
pub const MIN_SCORE: f64 = 50.0;
/// Highest generated metric score
pub const MAX_SCORE: f64 = 100.0;
/// Sessions fall within this many days before the reference date
pub const DATE_WINDOW_DAYS: i64 = 365;

const FIRST_NAMES: [&str; 16] = [
    "Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Jamie", "Avery", "Quinn", "Harper",
    "Rowan", "Sasha", "Devon", "Emery", "Kai", "Noor",
];

const LAST_NAMES: [&str; 16] = [
    "Rivera", "Chen", "Okafor", "Novak", "Silva", "Haddad", "Larsen", "Moreau", "Tanaka",
    "Kowalski", "Mensah", "Ibarra", "Lindqvist", "Patel", "Brennan", "Sato",
];

/// Parameters for a synthetic dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticConfig {
    /// Number of distinct athletes
    pub athletes: usize,
    /// Sessions generated per athlete
    pub sessions_per_athlete: usize,
    /// RNG seed
    pub seed: u64,
    /// Latest possible session date
    pub reference_date: NaiveDate,
}

impl SyntheticConfig {
    /// Create a configuration with 10 athletes x 5 sessions
    #[must_use]
    pub const fn new(seed: u64, reference_date: NaiveDate) -> Self {
        Self {
            athletes: 10,
            sessions_per_athlete: 5,
            seed,
            reference_date,
        }
    }

    /// Override the dataset dimensions
    #[must_use]
    pub const fn with_size(mut self, athletes: usize, sessions_per_athlete: usize) -> Self {
        self.athletes = athletes;
        self.sessions_per_athlete = sessions_per_athlete;
        self
    }
}

/// Generates reproducible athlete datasets
pub struct SyntheticDataGenerator {
    config: SyntheticConfig,
    rng: StdRng,
}

impl SyntheticDataGenerator {
    /// Create a generator seeded from the configuration
    #[must_use]
    pub fn new(config: SyntheticConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// Column headers of generated datasets
    #[must_use]
    pub fn columns() -> Vec<String> {
        [ATHLETE, SPORT, DATE, SESSION]
            .into_iter()
            .chain(SYNTHETIC_METRICS)
            .map(str::to_owned)
            .collect()
    }

    /// Generate the dataset
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when either dimension is zero
    pub fn generate(&mut self) -> AppResult<Dataset> {
        if self.config.athletes == 0 || self.config.sessions_per_athlete == 0 {
            return Err(AppError::invalid_input(
                "Synthetic dataset needs at least one athlete and one session",
            ));
        }

        let mut dataset = Dataset::new(Self::columns())?;
        let mut used_names = HashSet::new();

        for _ in 0..self.config.athletes {
            let name = self.unique_name(&mut used_names);
            let sport = SYNTHETIC_SPORTS[self.rng.gen_range(0..SYNTHETIC_SPORTS.len())];

            for session in 0..self.config.sessions_per_athlete {
                let mut row = vec![
                    CellValue::Text(name.clone()),
                    CellValue::Text(sport.to_owned()),
                    CellValue::Text(self.session_date().format("%Y-%m-%d").to_string()),
                    CellValue::Text(format!("Session {}", session + 1)),
                ];
                row.extend(SYNTHETIC_METRICS.iter().map(|_| self.score()));
                dataset.push_row(row)?;
            }
        }

        debug!(
            athletes = self.config.athletes,
            sessions = self.config.sessions_per_athlete,
            seed = self.config.seed,
            "Generated synthetic dataset"
        );
        Ok(dataset)
    }

    fn unique_name(&mut self, used: &mut HashSet<String>) -> String {
        let first = FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[self.rng.gen_range(0..LAST_NAMES.len())];
        let base = format!("{first} {last}");

        let mut candidate = base.clone();
        let mut suffix = 2;
        while used.contains(&candidate) {
            candidate = format!("{base} {suffix}");
            suffix += 1;
        }
        used.insert(candidate.clone());
        candidate
    }

    fn session_date(&mut self) -> NaiveDate {
        let days_ago = self.rng.gen_range(0..=DATE_WINDOW_DAYS);
        self.config.reference_date - Duration::days(days_ago)
    }

    fn score(&mut self) -> CellValue {
        let raw: f64 = self.rng.gen_range(MIN_SCORE..=MAX_SCORE);
        CellValue::Number((raw * 100.0).round() / 100.0)
    }
}
