// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Dataset column names, recommendation categories, and metric lookup tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file. Metric names are matched exactly (case-sensitive) against
//! dataset column headers.

/// Sports-science knowledge base topic gate, stop words, and fixed answers
pub mod knowledge;

/// Metric name tables used by the recommendation engine
pub mod metrics;

/// Dataset column names
pub mod columns {
    /// Column holding the athlete identifier
    pub const ATHLETE: &str = "Athlete";
    /// Column holding the session date
    pub const DATE: &str = "Date";
    /// Column holding the session label
    pub const SESSION: &str = "Session";
    /// Free-text notes column
    pub const NOTES: &str = "Notes";
    /// Sport column written by the synthetic generator
    pub const SPORT: &str = "Sport";

    /// Columns never treated as metrics
    pub const EXCLUDED: [&str; 4] = [ATHLETE, DATE, SESSION, NOTES];
}

/// Form analysis categories produced by the form analyzer
pub mod form {
    /// Spine and head position insights
    pub const POSTURE: &str = "Posture";
    /// Shoulder and hip level insights
    pub const ALIGNMENT: &str = "Alignment";
    /// Knee-over-ankle and weight distribution insights
    pub const BALANCE: &str = "Balance";
    /// Joint angle measurements
    pub const JOINT_ANGLES: &str = "Joint Angles";

    /// Categories scanned when generating form-based recommendations, in order
    pub const CATEGORIES: [&str; 4] = [POSTURE, ALIGNMENT, BALANCE, JOINT_ANGLES];
}

/// Date formats accepted when coercing the date column
pub mod dates {
    /// Day-precision formats tried in order
    pub const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y", "%Y%m%d"];
    /// Timestamp formats tried in order (date part is kept)
    pub const DATETIME_FORMATS: [&str; 3] =
        ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
}

/// Fixed weekly schedule attached to every recommendation report
pub mod training_plan {
    /// Day and activity, Monday first
    pub const WEEKLY_PLAN: [(&str, &str); 7] = [
        (
            "Monday",
            "Strength Focus: Compound movements with progressive overload",
        ),
        ("Tuesday", "Recovery: Light cardio and mobility work"),
        ("Wednesday", "Speed & Power: Plyometrics and sprint work"),
        (
            "Thursday",
            "Active Recovery: Technique drill and mobility",
        ),
        (
            "Friday",
            "Strength & Endurance: Circuit training with sport-specific exercises",
        ),
        ("Saturday", "Game/Competition simulation"),
        (
            "Sunday",
            "Rest Day: Complete recovery with light stretching",
        ),
    ];
}

/// Text values read as missing cells
pub const MISSING_MARKERS: [&str; 6] = ["", "nan", "na", "n/a", "null", "none"];
