use std::path::Path;
use tracing::{debug, info};

use crate::core::{BatchSummary, ProcessOutcome, SquareTask};
use crate::processing::square::process_task;
use crate::utils::{BatchError, BatchResult, FileFailure, FileFailures, list_prefixed_files};

use super::config::BatchConfig;

/// Drives every thumbnail of a directory through the square compositor
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    config: BatchConfig,
}

impl BatchProcessor {
    pub fn new(config: BatchConfig) -> Self {
        debug!(
            "Creating BatchProcessor for '{}*' -> '{}'",
            config.input_prefix, config.output_prefix
        );
        Self { config }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Builds one task per prefixed file in `dir`, in name order
    fn create_tasks(&self, dir: &Path) -> BatchResult<Vec<SquareTask>> {
        let names = list_prefixed_files(dir, &self.config.input_prefix)
            .map_err(|e| BatchError::read_dir(dir, e))?;

        Ok(names
            .iter()
            .map(|name| SquareTask::in_dir(dir, name, &self.config.output_prefix))
            .collect())
    }

    /// Processes every thumbnail in `dir`.
    ///
    /// Only a failed directory listing stops the batch early. Per-file failures
    /// are collected, labelled with the file name, and returned together once
    /// every file has been tried.
    pub fn process_dir(&self, dir: &Path) -> BatchResult<BatchSummary> {
        let tasks = self.create_tasks(dir)?;
        info!("Processing {} thumbnail(s) in '{}'", tasks.len(), dir.display());

        let mut summary = BatchSummary::default();
        let mut failures = FileFailures::default();

        for task in tasks {
            match process_task(&task) {
                Ok(ProcessOutcome::Written(path)) => summary.written.push(path),
                Ok(ProcessOutcome::Skipped) => summary.skipped.push(task.file_name),
                Err(e) => {
                    debug!("Failed to resize {}: {}", task.file_name, e);
                    failures.push(FileFailure {
                        file_name: task.file_name,
                        source: e,
                    });
                }
            }
        }

        if !failures.is_empty() {
            info!(
                "Batch completed with {} failed file(s) out of {}",
                failures.len(),
                summary.total() + failures.len()
            );
            return Err(failures.into());
        }

        info!(
            "Batch completed successfully: {} written, {} skipped",
            summary.written.len(),
            summary.skipped.len()
        );
        Ok(summary)
    }
}

/// Squares every `thumbnail_*` file in `dir` using the default naming.
pub fn resize_thumbnails(dir: impl AsRef<Path>) -> BatchResult<BatchSummary> {
    BatchProcessor::default().process_dir(dir.as_ref())
}
