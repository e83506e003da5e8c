use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{Config, EXIT_SENTINEL};
use crate::error::Result;
use crate::index::CorpusIndex;
use crate::ranker::{rank_descending, top_k, Hit};
use crate::results::ResultWriter;
use crate::scorer::tfidf;
use crate::tokenizer::Tokenizer;

const SEPARATOR: &str = "-------------------------------------";

/// Top hits for one query token found in the vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordResult {
    pub keyword: String,
    pub hits: Vec<Hit>,
}

pub struct SearchEngine {
    index: CorpusIndex,
    tokenizer: Tokenizer,
    writer: ResultWriter,
    top_k: usize,
    json: bool,
    query: String,
    tokens: Vec<String>,
    round: usize,
}

impl SearchEngine {
    pub fn new(index: CorpusIndex, config: &Config) -> Result<Self> {
        Ok(Self {
            index,
            tokenizer: Tokenizer::new(),
            writer: ResultWriter::new(&config.result_dir)?,
            top_k: config.top_k,
            json: config.json,
            query: String::new(),
            tokens: Vec::new(),
            round: 0,
        })
    }

    /// Prompts for a query on `output` and reads one line from `input`.
    /// Returns `false` once `input` is exhausted.
    pub fn get_query<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<bool> {
        write!(output, "Search: ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        self.set_query(line.trim_end_matches(['\r', '\n']));
        Ok(true)
    }

    /// Query tokens use the corpus delimiters but skip stopword filtering;
    /// stopwords can never match because they are not in the vocabulary.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.tokens = self
            .tokenizer
            .split(&self.query)
            .map(str::to_string)
            .collect();
    }

    pub fn round(&self) -> usize {
        self.round
    }

    /// Runs one query round: every token present in the vocabulary is scored,
    /// ranked and appended to this round's result file. Tokens are handled in
    /// query order, repeats included. An empty return means no results.
    pub fn search(&mut self) -> Vec<KeywordResult> {
        self.round += 1;
        debug!("searching for {:?}, tokens {:?}", self.query, self.tokens);
        let mut results = Vec::new();

        for token in &self.tokens {
            if !self.index.contains(token) {
                continue;
            }
            let ranked = rank_descending(tfidf(token, &self.index));
            let hits = top_k(&ranked, self.top_k).to_vec();
            if let Err(e) = self.writer.append(self.round, token, &hits) {
                warn!("could not persist results for {:?}: {}", token, e);
            }
            results.push(KeywordResult {
                keyword: token.clone(),
                hits,
            });
        }

        info!(
            "round {}: {} tokens, {} matched",
            self.round,
            self.tokens.len(),
            results.len()
        );
        results
    }

    pub fn report<W: Write>(&self, results: &[KeywordResult], output: &mut W) -> Result<()> {
        if results.is_empty() {
            writeln!(output, "No results found.")?;
            return Ok(());
        }
        for result in results {
            if self.json {
                serde_json::to_writer(&mut *output, result)?;
                writeln!(output)?;
                continue;
            }
            writeln!(output, "keyword: {}", result.keyword)?;
            for (rank, hit) in result.hits.iter().enumerate() {
                writeln!(output, "{}|> {} (Score: {})", rank + 1, hit.document, hit.score)?;
            }
        }
        Ok(())
    }

    /// Query loop: search, report, then ask whether to continue. Stops on the
    /// exit sentinel or when `input` runs out.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            if !self.get_query(input, output)? {
                break;
            }
            let results = self.search();
            self.report(&results, output)?;

            write!(output, "Press Enter to search again, '{EXIT_SENTINEL}' to quit: ")?;
            output.flush()?;
            let mut answer = String::new();
            let read = input.read_line(&mut answer)?;
            writeln!(output, "{SEPARATOR}")?;
            if read == 0 || answer.trim() == EXIT_SENTINEL {
                break;
            }
        }
        Ok(())
    }
}
