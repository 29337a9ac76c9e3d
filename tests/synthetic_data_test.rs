// ABOUTME: Integration tests for the seeded synthetic dataset generator
// ABOUTME: Validates reproducibility, dimensions, value ranges, and date window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, NaiveDate};
use pierre_coach::coach_core::models::{CellValue, Dataset};
use pierre_coach::synthetic::{DATE_WINDOW_DAYS, MAX_SCORE, MIN_SCORE};
use pierre_coach::{SyntheticConfig, SyntheticDataGenerator};
use std::collections::HashSet;

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

fn generate(seed: u64, athletes: usize, sessions: usize) -> Dataset {
    let config = SyntheticConfig::new(seed, reference()).with_size(athletes, sessions);
    SyntheticDataGenerator::new(config).generate().unwrap()
}

fn text(cell: &CellValue) -> String {
    cell.as_text().unwrap()
}

#[test]
fn test_same_seed_is_reproducible() {
    assert_eq!(generate(42, 10, 5), generate(42, 10, 5));
}

#[test]
fn test_different_seeds_differ() {
    assert_ne!(generate(1, 10, 5), generate(2, 10, 5));
}

#[test]
fn test_dimensions() {
    let dataset = generate(7, 4, 3);
    assert_eq!(dataset.len(), 12);
    assert_eq!(dataset.columns(), SyntheticDataGenerator::columns());

    let default_config = SyntheticConfig::new(7, reference());
    assert_eq!(default_config.athletes, 10);
    assert_eq!(default_config.sessions_per_athlete, 5);
}

#[test]
fn test_athlete_names_are_unique() {
    // More athletes than first names forces collisions to be resolved
    let dataset = generate(3, 40, 1);
    let names: HashSet<String> = dataset.rows().iter().map(|row| text(&row[0])).collect();
    assert_eq!(names.len(), 40);
}

#[test]
fn test_sessions_are_numbered_per_athlete() {
    let dataset = generate(5, 2, 3);
    let sessions: Vec<String> = dataset.rows().iter().map(|row| text(&row[3])).collect();
    assert_eq!(
        sessions,
        [
            "Session 1",
            "Session 2",
            "Session 3",
            "Session 1",
            "Session 2",
            "Session 3"
        ]
    );

    for athlete_rows in dataset.rows().chunks(3) {
        let name = text(&athlete_rows[0][0]);
        let sport = text(&athlete_rows[0][1]);
        assert!(athlete_rows.iter().all(|row| text(&row[0]) == name));
        assert!(athlete_rows.iter().all(|row| text(&row[1]) == sport));
    }
}

#[test]
fn test_scores_are_bounded_and_rounded() {
    let dataset = generate(11, 10, 5);
    for row in dataset.rows() {
        for cell in &row[4..] {
            let value = cell.as_number().unwrap();
            assert!((MIN_SCORE..=MAX_SCORE).contains(&value), "{value} out of range");
            let hundredths = value * 100.0;
            assert!((hundredths - hundredths.round()).abs() < 1e-6, "{value} not rounded");
        }
    }
}

#[test]
fn test_dates_fall_within_window() {
    let dataset = generate(13, 10, 5);
    let earliest = reference() - Duration::days(DATE_WINDOW_DAYS);
    for row in dataset.rows() {
        let date = NaiveDate::parse_from_str(&text(&row[2]), "%Y-%m-%d").unwrap();
        assert!(date >= earliest && date <= reference(), "{date} outside window");
    }
}

#[test]
fn test_zero_sessions_rejected() {
    let config = SyntheticConfig::new(1, reference()).with_size(3, 0);
    assert!(SyntheticDataGenerator::new(config).generate().is_err());
}
