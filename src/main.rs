pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod query;
pub mod ranker;
pub mod results;
pub mod scorer;
pub mod stop_words;
pub mod tokenizer;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use config::Config;
use index::CorpusIndex;
use query::SearchEngine;
use stop_words::StopWords;
use tokenizer::Tokenizer;

#[derive(Parser)]
#[command(name = "tfidf_search", about = "Interactive TF-IDF keyword search over a directory of text files")]
struct Args {
    /// Directory holding the documents to index
    #[arg(long, default_value = config::DEFAULT_CORPUS_DIR)]
    corpus: PathBuf,

    /// Directory receiving the numbered result files
    #[arg(long, default_value = config::DEFAULT_RESULT_DIR)]
    results: PathBuf,

    /// Hits shown and saved for each matched keyword
    #[arg(long, default_value_t = config::DEFAULT_TOP_K)]
    top_k: usize,

    /// Newline-separated stopword list replacing the built-in English one
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Print each keyword's hits as a JSON line
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            corpus_dir: args.corpus,
            result_dir: args.results,
            top_k: args.top_k,
            stopwords: args.stopwords,
            json: args.json,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tfidf_search=info")),
        )
        .init();

    let config = Config::from(Args::parse());

    println!("Corpus directory: {}", config.corpus_dir.display());
    println!("Result directory: {}", config.result_dir.display());

    let stopwords = match &config.stopwords {
        Some(path) => StopWords::from_file(path)?,
        None => StopWords::english(),
    };
    if stopwords.is_empty() {
        warn!("stopword list is empty, every token will be indexed");
    }

    let documents = corpus::load_corpus(&config.corpus_dir)?;
    let index = CorpusIndex::build(&documents, &Tokenizer::new(), &stopwords);
    println!(
        "Indexed {} documents, {} distinct tokens ({} stopwords)",
        index.document_count(),
        index.vocabulary().len(),
        stopwords.len()
    );

    let mut engine = SearchEngine::new(index, &config)?;
    engine.run(&mut io::stdin().lock(), &mut io::stdout().lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    #[test]
    fn args_convert_into_config() {
        let args = Args::try_parse_from([
            "tfidf_search",
            "--corpus",
            "docs",
            "--results",
            "out",
            "--top-k",
            "3",
            "--stopwords",
            "stop.txt",
            "--json",
        ])
        .unwrap();
        let config = Config::from(args);

        assert_eq!(config.corpus_dir, PathBuf::from("docs"));
        assert_eq!(config.result_dir, PathBuf::from("out"));
        assert_eq!(config.top_k, 3);
        assert_eq!(config.stopwords, Some(PathBuf::from("stop.txt")));
        assert!(config.json);
    }

    #[test]
    fn args_default_to_config_defaults() {
        let config = Config::from(Args::try_parse_from(["tfidf_search"]).unwrap());
        let defaults = Config::default();

        assert_eq!(config.corpus_dir, defaults.corpus_dir);
        assert_eq!(config.result_dir, defaults.result_dir);
        assert_eq!(config.top_k, defaults.top_k);
        assert_eq!(config.stopwords, None);
        assert!(!config.json);
    }

    #[test]
    fn searches_a_corpus_directory_end_to_end() {
        let corpus = tempfile::tempdir().unwrap();
        let results = tempfile::tempdir().unwrap();
        fs::write(corpus.path().join("doc1"), "\u{feff}The cat sat.").unwrap();
        fs::write(corpus.path().join("doc2"), "The dog sat...").unwrap();
        fs::create_dir(corpus.path().join("archive")).unwrap();

        let config = Config {
            corpus_dir: corpus.path().to_path_buf(),
            result_dir: results.path().join("rounds"),
            ..Config::default()
        };
        let documents = corpus::load_corpus(&config.corpus_dir).unwrap();
        let stopwords: StopWords = ["The"].into_iter().collect();
        let index = CorpusIndex::build(&documents, &Tokenizer::new(), &stopwords);
        let mut engine = SearchEngine::new(index, &config).unwrap();

        let mut input = Cursor::new("sat，zzz\n\nzzz\n0\n");
        let mut output = Vec::new();
        engine.run(&mut input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("keyword: sat\n1|> doc1 (Score: "));
        assert!(output.contains("2|> doc2 (Score: "));
        assert!(output.contains("No results found.\n"));

        let saved = fs::read_to_string(results.path().join("rounds").join("result1.txt")).unwrap();
        let lines: Vec<&str> = saved.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "keyword: sat");
        assert!(lines[1].starts_with("\tdoc1\t-0.08"));
        assert!(lines[2].starts_with("\tdoc2\t-0.08"));
        assert!(!results.path().join("rounds").join("result2.txt").exists());
    }
}
