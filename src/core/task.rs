//! Square task definition and creation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::SquareSettings;
use crate::utils::settings_for_file;

/// Represents a single thumbnail squaring task.
///
/// Contains the input/output paths and the file name the settings are derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquareTask {
    /// Path to the source thumbnail
    pub input_path: PathBuf,
    /// Path where the squared image will be written
    pub output_path: PathBuf,
    /// Bare file name of the source, used for suffix dispatch and error labels
    pub file_name: String,
}

impl SquareTask {
    /// Builds the task for `file_name` inside `dir`, writing to `output_prefix + file_name`.
    pub fn in_dir(dir: &Path, file_name: &str, output_prefix: &str) -> Self {
        Self {
            input_path: dir.join(file_name),
            output_path: dir.join(format!("{output_prefix}{file_name}")),
            file_name: file_name.to_string(),
        }
    }

    /// Compositor settings for this task, `None` for an unsupported suffix.
    pub fn settings(&self) -> Option<SquareSettings> {
        settings_for_file(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_prefixed_sibling() {
        let task = SquareTask::in_dir(Path::new("assets"), "thumbnail_foo.jpg", "resized_");
        assert_eq!(task.input_path, Path::new("assets").join("thumbnail_foo.jpg"));
        assert_eq!(task.output_path, Path::new("assets").join("resized_thumbnail_foo.jpg"));
        assert_eq!(task.settings(), Some(SquareSettings::JPEG));
    }
}
