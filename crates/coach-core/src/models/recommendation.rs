// ABOUTME: Recommendation set model keyed by a fixed set of training categories
// ABOUTME: Category order is declaration order so serialized output is deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Advice categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RecommendationCategory {
    /// Strength and power work
    #[serde(rename = "Strength Training")]
    StrengthTraining,
    /// Aerobic and stamina work
    #[serde(rename = "Endurance Development")]
    EnduranceDevelopment,
    /// Sleep, rest, and regeneration
    #[serde(rename = "Recovery Strategies")]
    RecoveryStrategies,
    /// Movement quality
    #[serde(rename = "Technique Improvements")]
    TechniqueImprovements,
    /// Diet and hydration
    #[serde(rename = "Nutrition Suggestions")]
    NutritionSuggestions,
}

impl RecommendationCategory {
    /// All categories in display order
    pub const ALL: [Self; 5] = [
        Self::StrengthTraining,
        Self::EnduranceDevelopment,
        Self::RecoveryStrategies,
        Self::TechniqueImprovements,
        Self::NutritionSuggestions,
    ];

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::StrengthTraining => "Strength Training",
            Self::EnduranceDevelopment => "Endurance Development",
            Self::RecoveryStrategies => "Recovery Strategies",
            Self::TechniqueImprovements => "Technique Improvements",
            Self::NutritionSuggestions => "Nutrition Suggestions",
        }
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category to ordered advice strings; order within a category is evaluation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationSet {
    entries: BTreeMap<RecommendationCategory, Vec<String>>,
}

impl RecommendationSet {
    /// Set with every category present and empty
    #[must_use]
    pub fn with_all_categories() -> Self {
        Self {
            entries: RecommendationCategory::ALL
                .into_iter()
                .map(|category| (category, Vec::new()))
                .collect(),
        }
    }

    /// Append one advice string
    pub fn push(&mut self, category: RecommendationCategory, advice: impl Into<String>) {
        self.entries.entry(category).or_default().push(advice.into());
    }

    /// Append every entry of another set, category by category
    pub fn extend(&mut self, other: Self) {
        for (category, advice) in other.entries {
            self.entries.entry(category).or_default().extend(advice);
        }
    }

    /// Advice for a category, empty when absent
    #[must_use]
    pub fn get(&self, category: RecommendationCategory) -> &[String] {
        self.entries.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Whether a category has no advice
    #[must_use]
    pub fn is_category_empty(&self, category: RecommendationCategory) -> bool {
        self.get(category).is_empty()
    }

    /// Categories present in the set
    pub fn categories(&self) -> impl Iterator<Item = RecommendationCategory> + '_ {
        self.entries.keys().copied()
    }

    /// Category and advice pairs in category order
    pub fn iter(&self) -> impl Iterator<Item = (RecommendationCategory, &[String])> {
        self.entries
            .iter()
            .map(|(category, advice)| (*category, advice.as_slice()))
    }

    /// Total number of advice strings
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// One day of the weekly training plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingDay {
    /// Day of the week
    pub day: String,
    /// Planned activity
    pub activity: String,
}

impl TrainingDay {
    /// Create a plan entry
    #[must_use]
    pub fn new(day: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            activity: activity.into(),
        }
    }
}

/// Recommendations for one athlete together with the weekly plan.
///
/// `Display` renders the plain-text export: a title line, one section per
/// category with bulleted advice, then the plan with one bold day per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Athlete the report was generated for
    pub athlete: String,
    /// Category-keyed advice
    pub recommendations: RecommendationSet,
    /// Weekly plan, Monday first
    pub weekly_plan: Vec<TrainingDay>,
}

impl RecommendationReport {
    /// Plain-text export of the report
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RecommendationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Training Recommendations for {}", self.athlete)?;
        writeln!(f)?;
        for (category, advice) in self.recommendations.iter() {
            writeln!(f, "## {category}")?;
            for line in advice {
                writeln!(f, "- {line}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "## Weekly Training Plan")?;
        for entry in &self.weekly_plan {
            writeln!(f, "**{}**: {}", entry.day, entry.activity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_display_names_in_order() {
        let mut set = RecommendationSet::with_all_categories();
        set.push(RecommendationCategory::NutritionSuggestions, "Hydrate");
        set.push(RecommendationCategory::StrengthTraining, "Squat");

        let json = serde_json::to_string(&set).unwrap();
        assert!(json.starts_with("{\"Strength Training\":[\"Squat\"]"));
        assert!(json.ends_with("\"Nutrition Suggestions\":[\"Hydrate\"]}"));
    }

    #[test]
    fn test_extend_appends_in_order() {
        let mut first = RecommendationSet::default();
        first.push(RecommendationCategory::RecoveryStrategies, "Sleep");
        let mut second = RecommendationSet::default();
        second.push(RecommendationCategory::RecoveryStrategies, "Stretch");

        first.extend(second);
        assert_eq!(
            first.get(RecommendationCategory::RecoveryStrategies),
            ["Sleep", "Stretch"]
        );
        assert_eq!(first.total(), 2);
    }

    #[test]
    fn test_text_export_layout() {
        let mut recommendations = RecommendationSet::default();
        recommendations.push(RecommendationCategory::StrengthTraining, "Squat");
        recommendations.push(RecommendationCategory::StrengthTraining, "Deadlift");
        recommendations.push(RecommendationCategory::RecoveryStrategies, "Sleep");
        let report = RecommendationReport {
            athlete: "Alex".into(),
            recommendations,
            weekly_plan: vec![
                TrainingDay::new("Monday", "Lift"),
                TrainingDay::new("Tuesday", "Rest"),
            ],
        };

        assert_eq!(
            report.to_text(),
            "# Training Recommendations for Alex\n\n\
             ## Strength Training\n- Squat\n- Deadlift\n\n\
             ## Recovery Strategies\n- Sleep\n\n\
             ## Weekly Training Plan\n**Monday**: Lift\n**Tuesday**: Rest\n"
        );
    }
}
