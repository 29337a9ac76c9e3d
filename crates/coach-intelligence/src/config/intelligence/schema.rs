// ABOUTME: Dataset schema configuration naming identifier, date, and excluded columns
// ABOUTME: Every column outside the exclusion set is treated as a metric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coach_core::constants::columns;
use serde::{Deserialize, Serialize};

/// Dataset Schema Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSchema {
    /// Column matched against the athlete identifier
    pub athlete_column: String,
    /// Optional date column used for ordering
    pub date_column: String,
    /// Non-metric columns
    pub excluded_columns: Vec<String>,
}

impl DatasetSchema {
    /// Whether a column is a metric under this schema
    #[must_use]
    pub fn is_metric_column(&self, column: &str) -> bool {
        column != self.athlete_column
            && column != self.date_column
            && !self.excluded_columns.iter().any(|excluded| excluded == column)
    }
}

impl Default for DatasetSchema {
    fn default() -> Self {
        Self {
            athlete_column: columns::ATHLETE.to_owned(),
            date_column: columns::DATE.to_owned(),
            excluded_columns: columns::EXCLUDED.iter().map(|&c| c.to_owned()).collect(),
        }
    }
}
