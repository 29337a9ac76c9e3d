// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for coach-cli and loads the dataset they share
// ABOUTME: Provides access to dataset analysis, form analysis, and knowledge base commands

pub mod analysis;
pub mod form;
pub mod knowledge;

use pierre_coach::coach_core::errors::AppResult;
use pierre_coach::coach_core::models::Dataset;
use pierre_coach::dataset_loader::{DataFormat, DatasetLoader};
use pierre_coach::AthleteAssistant;
use std::path::Path;
use tracing::debug;

/// Load the dataset, honoring an explicit format override
pub fn load(
    assistant: &AthleteAssistant,
    path: &Path,
    format: Option<DataFormat>,
) -> AppResult<Dataset> {
    debug!(path = %path.display(), format = ?format, "Loading dataset");
    match format {
        Some(format) => DatasetLoader::new(&assistant.context().config().schema)
            .load_with_format(path, format),
        None => assistant.load_dataset(path),
    }
}
