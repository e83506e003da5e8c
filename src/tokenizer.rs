//! Delimiter-based tokenizer shared by corpus indexing and query parsing.
//!
//! Text is cut on whitespace, the ASCII marks `!?'.,()+-=:` and the
//! full-width `。` and `，`. Both the corpus and the query go through the
//! same pattern, otherwise query tokens would silently miss the vocabulary.

use std::sync::LazyLock;

use regex::Regex;

use crate::stop_words::StopWords;

const DELIMITER_PATTERN: &str = r"[\s!?'.,()+\-=:。，]+";

static DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DELIMITER_PATTERN).expect("valid delimiter pattern"));

/// Stateless handle on the shared delimiter pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Tokenizer
    }

    /// Splits `text` into non-empty tokens in left-to-right order, without
    /// stopword filtering. Used for queries.
    pub fn split<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        DELIMITERS.split(text).filter(|token| !token.is_empty())
    }

    /// Splits `text` and drops every token in `stopwords`. Duplicates are kept.
    pub fn tokenize(&self, text: &str, stopwords: &StopWords) -> Vec<String> {
        self.split(text)
            .filter(|token| !stopwords.contains(token))
            .map(str::to_string)
            .collect()
    }
}
