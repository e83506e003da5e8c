//! Defaults for the search session.
//!
//! Runtime values come from the command line in `main.rs` and are collected
//! into [`Config`] before the engine starts.

use std::path::PathBuf;

/// Directory scanned for documents when `--corpus` is not given.
pub const DEFAULT_CORPUS_DIR: &str = "data";

/// Directory receiving the numbered result files when `--results` is not given.
pub const DEFAULT_RESULT_DIR: &str = "result";

/// Hits shown and persisted for every matched keyword.
pub const DEFAULT_TOP_K: usize = 5;

/// Answer to the continue prompt that ends the session.
pub const EXIT_SENTINEL: &str = "0";

/// Result files are named `{RESULT_FILE_PREFIX}{round}.txt`.
pub const RESULT_FILE_PREFIX: &str = "result";

#[derive(Debug, Clone)]
pub struct Config {
    pub corpus_dir: PathBuf,
    pub result_dir: PathBuf,
    pub top_k: usize,
    pub stopwords: Option<PathBuf>,
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from(DEFAULT_CORPUS_DIR),
            result_dir: PathBuf::from(DEFAULT_RESULT_DIR),
            top_k: DEFAULT_TOP_K,
            stopwords: None,
            json: false,
        }
    }
}
