// ABOUTME: Sports-science knowledge base answering questions from a CSV of documents
// ABOUTME: Gates queries by topic, ranks documents by TF-IDF cosine, and composes the answer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Knowledge Base
//!
//! Documents are rows of a CSV file with `title`, `content`, and `source`
//! columns. Ranking is lexical: each document's title and content are
//! tokenized into lowercase words (two or more characters, stop words
//! removed) and weighted by smoothed TF-IDF. Queries score by cosine
//! similarity; ties keep file order. Every query returns up to `limit`
//! documents, including zero-scoring ones, as long as the knowledge base
//! holds them.

use coach_core::constants::knowledge::{
    ADDITIONAL_DOCUMENTS, ERROR_ANSWER, NO_RESULTS_ANSWER, OFF_TOPIC_ANSWER, SNIPPET_CHARS,
    STOP_WORDS, TOPIC_KEYWORDS,
};
use coach_core::errors::{AppError, AppResult};
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// One knowledge base entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeDocument {
    /// Short title
    pub title: String,
    /// Body text
    pub content: String,
    /// Citation
    pub source: String,
}

impl KnowledgeDocument {
    /// Citation line shown with an answer
    #[must_use]
    pub fn citation(&self) -> String {
        format!("{} ({})", self.title, self.source)
    }
}

/// Answer to a knowledge base query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeAnswer {
    /// Question as asked
    pub query: String,
    /// Composed answer text
    pub answer: String,
    /// Citations of the documents used, best match first
    pub sources: Vec<String>,
}

impl KnowledgeAnswer {
    fn fixed(query: &str, answer: &str) -> Self {
        Self {
            query: query.to_owned(),
            answer: answer.to_owned(),
            sources: Vec::new(),
        }
    }

    /// Answer for a question outside the sports domain
    #[must_use]
    pub fn off_topic(query: &str) -> Self {
        Self::fixed(query, OFF_TOPIC_ANSWER)
    }

    /// Answer when the query could not be processed
    #[must_use]
    pub fn unavailable(query: &str) -> Self {
        Self::fixed(query, ERROR_ANSWER)
    }
}

/// Whether a query mentions any sports topic keyword (case-insensitive substring)
#[must_use]
pub fn is_sports_topic(query: &str) -> bool {
    let lowered = query.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// Compose an answer from ranked documents.
///
/// The best document's content comes first; up to two further documents are
/// listed under "Additional information" with the first 100 characters of
/// their content.
#[must_use]
pub fn compose_answer(documents: &[&KnowledgeDocument]) -> String {
    let Some((best, rest)) = documents.split_first() else {
        return NO_RESULTS_ANSWER.to_owned();
    };

    let mut answer = best.content.clone();
    if !rest.is_empty() {
        answer.push_str("\n\nAdditional information:\n");
        for document in rest.iter().take(ADDITIONAL_DOCUMENTS) {
            let snippet: String = document.content.chars().take(SNIPPET_CHARS).collect();
            // Writing to a String cannot fail
            let _ = write!(answer, "\n- {}: {snippet}...", document.title);
        }
    }
    answer
}

type TermWeights = HashMap<String, f64>;

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_lowercase)
        .filter(|token| !STOP_WORDS.contains(&token.as_str()))
}

fn term_counts(text: &str) -> HashMap<String, f64> {
    let mut counts = HashMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0.0) += 1.0;
    }
    counts
}

fn normalize(mut weights: TermWeights) -> TermWeights {
    let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in weights.values_mut() {
            *weight /= norm;
        }
    }
    weights
}

/// In-memory document store with a TF-IDF index
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    documents: Vec<KnowledgeDocument>,
    idf: HashMap<String, f64>,
    vectors: Vec<TermWeights>,
}

impl KnowledgeBase {
    /// Index the given documents
    #[must_use]
    pub fn new(documents: Vec<KnowledgeDocument>) -> Self {
        let counts: Vec<HashMap<String, f64>> = documents
            .iter()
            .map(|doc| term_counts(&format!("{} {}", doc.title, doc.content)))
            .collect();

        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for terms in &counts {
            for term in terms.keys() {
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
            }
        }
        let total = documents.len() as f64;
        let idf: HashMap<String, f64> = document_frequency
            .into_iter()
            .map(|(term, df)| (term.to_owned(), ((1.0 + total) / (1.0 + df as f64)).ln() + 1.0))
            .collect();

        let vectors = counts
            .into_iter()
            .map(|terms| {
                normalize(
                    terms
                        .into_iter()
                        .map(|(term, tf)| {
                            let weight = tf * idf.get(&term).copied().unwrap_or(0.0);
                            (term, weight)
                        })
                        .collect(),
                )
            })
            .collect();

        Self {
            documents,
            idf,
            vectors,
        }
    }

    /// Load documents from a CSV file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be opened, otherwise see
    /// [`Self::read_csv`]
    pub fn load(path: &Path) -> AppResult<Self> {
        let file = File::open(path).map_err(|e| {
            AppError::storage(format!("Failed to open '{}'", path.display()))
                .with_resource_id(path.display().to_string())
                .with_source(e)
        })?;
        let knowledge_base = Self::read_csv(BufReader::new(file))?;
        info!(
            path = %path.display(),
            documents = knowledge_base.len(),
            "Loaded knowledge base"
        );
        Ok(knowledge_base)
    }

    /// Parse documents from CSV with `title`, `content`, and `source` headers
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for malformed rows or missing columns and
    /// `InvalidInput` when the file holds no documents
    pub fn read_csv<R: Read>(reader: R) -> AppResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut documents = Vec::new();
        for (index, record) in csv_reader.deserialize::<KnowledgeDocument>().enumerate() {
            let document = record.map_err(|e| {
                AppError::invalid_format(format!("Malformed knowledge base row {}", index + 1))
                    .with_source(e)
            })?;
            documents.push(document);
        }

        if documents.is_empty() {
            return Err(AppError::invalid_input("Knowledge base has no documents"));
        }
        Ok(Self::new(documents))
    }

    /// Number of documents
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the knowledge base holds no documents
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents in file order
    #[must_use]
    pub fn documents(&self) -> &[KnowledgeDocument] {
        &self.documents
    }

    /// Up to `limit` documents ordered by similarity to the query
    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> Vec<&KnowledgeDocument> {
        let query_vector = normalize(
            term_counts(query)
                .into_iter()
                .filter_map(|(term, tf)| self.idf.get(&term).map(|idf| (term, tf * idf)))
                .collect(),
        );

        let mut scored: Vec<(usize, f64)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(index, vector)| {
                let score = query_vector
                    .iter()
                    .filter_map(|(term, weight)| vector.get(term).map(|w| w * weight))
                    .sum::<f64>();
                (index, score)
            })
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        debug!(
            query,
            best_score = scored.first().map(|(_, score)| *score),
            "Ranked knowledge base documents"
        );
        scored
            .into_iter()
            .take(limit)
            .map(|(index, _)| &self.documents[index])
            .collect()
    }

    /// Answer a question: off-topic questions get the fixed topic reminder,
    /// others the composed answer with citations of every retrieved document
    #[must_use]
    pub fn query(&self, query: &str, limit: usize) -> KnowledgeAnswer {
        if !is_sports_topic(query) {
            return KnowledgeAnswer::off_topic(query);
        }

        let matches = self.search(query, limit);
        KnowledgeAnswer {
            query: query.to_owned(),
            answer: compose_answer(&matches),
            sources: matches
                .iter()
                .copied()
                .map(KnowledgeDocument::citation)
                .collect(),
        }
    }
}
