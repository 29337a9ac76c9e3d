// ABOUTME: Form analysis result model mapping categories to free-text insights
// ABOUTME: Produced by the keypoint analyzer or supplied by callers as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category name (e.g. "Posture") to ordered insight strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormAnalysis {
    categories: BTreeMap<String, Vec<String>>,
}

impl FormAnalysis {
    /// Create an empty analysis
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an insight to a category
    pub fn push(&mut self, category: &str, insight: impl Into<String>) {
        self.categories
            .entry(category.to_owned())
            .or_default()
            .push(insight.into());
    }

    /// Insights for a category, empty when the category is absent
    #[must_use]
    pub fn insights(&self, category: &str) -> &[String] {
        self.categories.get(category).map_or(&[], Vec::as_slice)
    }

    /// Whether the category is present
    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Category names in sorted order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Whether there are no categories
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<C, I> FromIterator<(C, Vec<I>)> for FormAnalysis
where
    C: Into<String>,
    I: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (C, Vec<I>)>>(iter: T) -> Self {
        let categories = iter
            .into_iter()
            .map(|(category, insights)| {
                (
                    category.into(),
                    insights.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self { categories }
    }
}
