// ABOUTME: Knowledge base constants for the sports-science question answering assistant
// ABOUTME: Topic keywords, stop words, fixed answers, and answer composition limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Answer for questions outside the sports domain
pub const OFF_TOPIC_ANSWER: &str =
    "⚠️ Please ask questions related to sports, performance, recovery, or training.";

/// Answer when a query cannot be processed
pub const ERROR_ANSWER: &str = "I'm sorry, I couldn't process your query due to an error.";

/// Answer when the knowledge base returns no documents
pub const NO_RESULTS_ANSWER: &str = "I couldn't find any relevant information for your query.";

/// Documents retrieved per query
pub const DEFAULT_RESULTS: usize = 5;

/// Documents after the first summarized under "Additional information"
pub const ADDITIONAL_DOCUMENTS: usize = 2;

/// Characters of content quoted per additional document
pub const SNIPPET_CHARS: usize = 100;

/// Lowercase substrings that mark a query as sports related
pub const TOPIC_KEYWORDS: [&str; 100] = [
    "sports",
    "athlete",
    "performance",
    "training",
    "recovery",
    "exercise",
    "strength",
    "conditioning",
    "endurance",
    "mobility",
    "flexibility",
    "injury",
    "rehabilitation",
    "rehab",
    "stretching",
    "warmup",
    "cooldown",
    "nutrition",
    "hydration",
    "coaching",
    "workout",
    "drills",
    "technique",
    "form",
    "posture",
    "biomechanics",
    "sports science",
    "periodization",
    "fitness",
    "health",
    "aerobic",
    "anaerobic",
    "cardio",
    "power",
    "speed",
    "agility",
    "reaction time",
    "mental toughness",
    "focus",
    "sports psychology",
    "fatigue",
    "lactate threshold",
    "vo2 max",
    "muscle soreness",
    "doms",
    "overtraining",
    "tapering",
    "game strategy",
    "teamwork",
    "sportsmanship",
    "competition",
    "tournament",
    "match",
    "league",
    "olympics",
    "paralympics",
    "soccer",
    "football",
    "basketball",
    "baseball",
    "tennis",
    "swimming",
    "running",
    "cycling",
    "hockey",
    "rugby",
    "golf",
    "wrestling",
    "boxing",
    "mma",
    "skiing",
    "snowboarding",
    "climbing",
    "rowing",
    "cricket",
    "badminton",
    "track and field",
    "triathlon",
    "surfing",
    "diving",
    "weightlifting",
    "bodybuilding",
    "yoga",
    "pilates",
    "muscle",
    "knee",
    "shoulder",
    "calf",
    "ankle",
    "elbow",
    "wrist",
    "hip",
    "back",
    "core",
    "abs",
    "glutes",
    "quads",
    "hamstrings",
    "biceps",
    "triceps",
];

/// Common English words ignored when ranking documents
pub const STOP_WORDS: [&str; 96] = [
    "a", "about", "after", "all", "also", "am", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "between", "both", "but", "by", "can", "could", "did",
    "do", "does", "doing", "during", "each", "few", "for", "from", "further", "had", "has",
    "have", "having", "he", "her", "here", "his", "how", "i", "if", "in", "into", "is", "it",
    "its", "just", "me", "more", "most", "my", "no", "nor", "not", "of", "on", "once", "only",
    "or", "other", "our", "out", "over", "own", "same", "she", "should", "so", "some", "such",
    "than", "that", "the", "their", "them", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "very", "was", "we", "were", "what", "when",
    "which",
];
