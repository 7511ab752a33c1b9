//! Per-file commit: read, rewrite, write back only what changed

use crate::fs::FileSystem;
use crate::retrofit::Pipeline;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, instrument};

/// One configured game file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub filename: String,
    pub path: PathBuf,
}

impl FileRecord {
    pub fn new(base_dir: &Path, filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            path: base_dir.join(filename),
        }
    }
}

/// Result of processing one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    Unchanged,
    Missing,
    Error(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Updated => write!(f, "updated"),
            Outcome::Unchanged => write!(f, "unchanged"),
            Outcome::Missing => write!(f, "missing"),
            Outcome::Error(message) => write!(f, "error: {}", message),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("{0:#}")]
    Read(anyhow::Error),

    #[error("{0:#}")]
    Write(anyhow::Error),
}

pub struct FileProcessor<F: FileSystem> {
    fs: F,
    pipeline: Pipeline,
    base_dir: PathBuf,
}

impl<F: FileSystem> FileProcessor<F> {
    pub fn new(fs: F, base_dir: PathBuf) -> Self {
        Self::with_pipeline(fs, base_dir, Pipeline::video_retrofit())
    }

    pub fn with_pipeline(fs: F, base_dir: PathBuf, pipeline: Pipeline) -> Self {
        Self {
            fs,
            pipeline,
            base_dir,
        }
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn record(&self, filename: &str) -> FileRecord {
        FileRecord::new(&self.base_dir, filename)
    }

    /// Processes one file. Failures are folded into the returned outcome.
    pub fn process(&self, filename: &str) -> Outcome {
        let record = self.record(filename);
        self.process_record(&record)
    }

    #[instrument(skip(self, record), fields(file = %record.filename))]
    pub fn process_record(&self, record: &FileRecord) -> Outcome {
        if !self.fs.is_file(&record.path) {
            debug!(path = ?record.path, "not a regular file");
            return Outcome::Missing;
        }

        match self.rewrite(&record.path) {
            Ok(true) => Outcome::Updated,
            Ok(false) => Outcome::Unchanged,
            Err(e) => Outcome::Error(e.to_string()),
        }
    }

    /// Returns whether the file was written.
    fn rewrite(&self, path: &Path) -> Result<bool, ProcessError> {
        let original = self.fs.read_to_string(path).map_err(ProcessError::Read)?;
        let rewritten = self.pipeline.run(&original);

        if rewritten == original.as_str() {
            return Ok(false);
        }

        self.fs
            .write(path, &rewritten)
            .map_err(ProcessError::Write)?;
        debug!(
            before = original.len(),
            after = rewritten.len(),
            "wrote rewritten screen"
        );
        Ok(true)
    }
}
