//! Corpus index: global vocabulary plus a per-document term-count table.
//!
//! Built once from the loaded documents and read-only afterwards. A token
//! missing from a document's counts never occurred there; no count is zero.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, info};

use crate::corpus::Document;
use crate::stop_words::StopWords;
use crate::tokenizer::Tokenizer;

/// Occurrence counts of the filtered tokens of one document.
#[derive(Debug, Clone, PartialEq)]
pub struct TermCounts {
    pub name: String,
    counts: HashMap<String, u32>,
    total: u32,
}

impl TermCounts {
    fn from_tokens(name: String, tokens: &[String]) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in tokens {
            *counts.entry(token.clone()).or_insert(0) += 1;
        }
        let total = counts.values().sum();
        Self {
            name,
            counts,
            total,
        }
    }

    /// Occurrences of `token`, `None` if it never appears.
    pub fn get(&self, token: &str) -> Option<u32> {
        self.counts.get(token).copied()
    }

    /// Sum of all counts, i.e. the length of the filtered token sequence.
    pub fn total(&self) -> u32 {
        self.total
    }
}

#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    vocabulary: HashSet<String>,
    /// One entry per document, in load order. Ties in ranking follow this order.
    documents: Vec<TermCounts>,
}

#[derive(Serialize)]
struct TokenizedDocument<'a> {
    name: &'a str,
    tokens: &'a [String],
}

impl CorpusIndex {
    pub fn build(documents: &[Document], tokenizer: &Tokenizer, stopwords: &StopWords) -> Self {
        let mut vocabulary = HashSet::new();
        let mut table = Vec::with_capacity(documents.len());

        for document in documents {
            let tokens = tokenizer.tokenize(&document.text, stopwords);
            if tracing::enabled!(tracing::Level::DEBUG) {
                let tokenized = TokenizedDocument {
                    name: &document.name,
                    tokens: &tokens,
                };
                debug!(
                    "tokenized: {}",
                    serde_json::to_string(&tokenized).unwrap_or_default()
                );
            }
            vocabulary.extend(tokens.iter().cloned());
            table.push(TermCounts::from_tokens(document.name.clone(), &tokens));
        }

        info!(
            "indexed {} documents, vocabulary of {} tokens",
            table.len(),
            vocabulary.len()
        );
        Self {
            vocabulary,
            documents: table,
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.vocabulary.contains(token)
    }

    pub fn vocabulary(&self) -> &HashSet<String> {
        &self.vocabulary
    }

    pub fn documents(&self) -> &[TermCounts] {
        &self.documents
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of documents in which `token` occurs at least once.
    pub fn document_frequency(&self, token: &str) -> usize {
        self.documents
            .iter()
            .filter(|doc| doc.get(token).is_some())
            .count()
    }
}
