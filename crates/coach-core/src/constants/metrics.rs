// ABOUTME: Metric name lookup tables keyed by recommendation category
// ABOUTME: Lists the column names each recommendation category reacts to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Metrics that improve when they decrease
pub const INVERSE_METRICS: [&str; 2] = [RECOVERY_TIME, FATIGUE_LEVEL];

/// General strength metric
pub const STRENGTH: &str = "Strength";
/// Power output
pub const POWER: &str = "Power";

/// Strength category metrics, in evaluation order
pub const STRENGTH_METRICS: [&str; 6] = [
    STRENGTH,
    POWER,
    "Max Lift",
    "Squat",
    "Bench Press",
    "Deadlift",
];

/// Strength metrics that receive the general progressive-overload advice
pub const GENERAL_STRENGTH_METRICS: [&str; 2] = [STRENGTH, POWER];

/// Endurance category metrics, in evaluation order
pub const ENDURANCE_METRICS: [&str; 5] = ["Endurance", "VO2Max", "Stamina", "Distance", "Time"];

/// Time to recover between sessions
pub const RECOVERY_TIME: &str = "Recovery Time";
/// Self-reported fatigue
pub const FATIGUE_LEVEL: &str = "Fatigue Level";
/// Sleep quality score
pub const SLEEP_QUALITY: &str = "Sleep Quality";
/// Muscle soreness score
pub const SORENESS: &str = "Soreness";

/// Recovery category metrics, in evaluation order
pub const RECOVERY_METRICS: [&str; 4] = [RECOVERY_TIME, FATIGUE_LEVEL, SLEEP_QUALITY, SORENESS];

/// Body composition metrics that switch nutrition advice to protein focus
pub const BODY_COMPOSITION_METRICS: [&str; 2] = ["Weight", "Body Fat"];

/// Metrics written by the synthetic data generator
pub const SYNTHETIC_METRICS: [&str; 5] = ["Speed", "Agility", STRENGTH, "Endurance", "Flexibility"];

/// Sports assigned by the synthetic data generator
pub const SYNTHETIC_SPORTS: [&str; 8] = [
    "Soccer",
    "Basketball",
    "Tennis",
    "Running",
    "Swimming",
    "Cycling",
    "Gymnastics",
    "Rowing",
];
