// ABOUTME: Knowledge base question command for coach-cli
// ABOUTME: Loads the sports-science document CSV and prints the answer with its sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_coach::coach_core::errors::AppResult;
use pierre_coach::{AthleteAssistant, KnowledgeBase};
use std::path::Path;
use tracing::warn;

use crate::helpers::display::print_json;

/// Answer a question, attaching the knowledge base when a file is given
pub fn ask(
    assistant: AthleteAssistant,
    question: &str,
    knowledge_base_path: Option<&Path>,
) -> AppResult<()> {
    let assistant = match knowledge_base_path {
        Some(path) => assistant.with_knowledge_base(KnowledgeBase::load(path)?),
        None => {
            warn!("No knowledge base given: pass --knowledge-base <file> or set COACH_KB_PATH");
            assistant
        }
    };
    print_json(&assistant.ask(question)?)
}
