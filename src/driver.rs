//! Sequential run over the configured game files

use crate::config::RetrofitConfig;
use crate::fs::FileSystem;
use crate::processor::{FileProcessor, FileRecord, Outcome};
use tracing::{info, warn};

/// Outcome counts for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub updated: usize,
    pub unchanged: usize,
    pub missing: usize,
    pub errors: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Updated => self.updated += 1,
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::Missing => self.missing += 1,
            Outcome::Error(_) => self.errors += 1,
        }
    }

    /// Errors as reported to the user, missing files included
    pub fn failed(&self) -> usize {
        self.errors + self.missing
    }

    pub fn total(&self) -> usize {
        self.updated + self.unchanged + self.missing + self.errors
    }
}

pub struct Driver<F: FileSystem> {
    config: RetrofitConfig,
    processor: FileProcessor<F>,
}

impl<F: FileSystem> Driver<F> {
    pub fn new(config: RetrofitConfig, fs: F) -> Self {
        let processor = FileProcessor::new(fs, config.base_dir.clone());
        Self { config, processor }
    }

    /// Processes every configured file in order, calling `on_file` after each.
    ///
    /// Never stops early: a failing file is counted and the run moves on.
    pub fn run(&self, mut on_file: impl FnMut(&FileRecord, &Outcome)) -> Summary {
        let mut summary = Summary::default();
        info!(
            base_dir = ?self.config.base_dir,
            files = self.config.file_count(),
            "starting video retrofit"
        );

        for group in &self.config.groups {
            info!(subject = %group.subject, files = group.files.len(), "processing group");
            for filename in &group.files {
                let record = self.processor.record(filename);
                let outcome = self.processor.process_record(&record);
                if let Outcome::Error(message) = &outcome {
                    warn!(file = %record.filename, error = %message, "failed to process file");
                }
                summary.record(&outcome);
                on_file(&record, &outcome);
            }
        }

        info!(
            updated = summary.updated,
            unchanged = summary.unchanged,
            missing = summary.missing,
            errors = summary.errors,
            "video retrofit finished"
        );
        summary
    }
}
