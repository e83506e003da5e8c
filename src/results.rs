use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::config::RESULT_FILE_PREFIX;
use crate::error::{Result, SearchError};
use crate::ranker::Hit;

/// Appends keyword blocks to one numbered file per query round.
#[derive(Debug, Clone)]
pub struct ResultWriter {
    dir: PathBuf,
}

impl ResultWriter {
    /// Creates `dir` if it does not exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| SearchError::io(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn path_for(&self, round: usize) -> PathBuf {
        self.dir.join(format!("{RESULT_FILE_PREFIX}{round}.txt"))
    }

    pub fn append(&self, round: usize, keyword: &str, hits: &[Hit]) -> Result<PathBuf> {
        let path = self.path_for(round);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| SearchError::io(&path, e))?;

        let write_block = |file: File| -> io::Result<()> {
            let mut out = BufWriter::new(file);
            writeln!(out, "keyword: {keyword}")?;
            for hit in hits {
                writeln!(out, "\t{}\t{}", hit.document, hit.score)?;
            }
            out.flush()
        };
        write_block(file).map_err(|e| SearchError::io(&path, e))?;

        debug!("appended {} hits for {:?} to {}", hits.len(), keyword, path.display());
        Ok(path)
    }
}
