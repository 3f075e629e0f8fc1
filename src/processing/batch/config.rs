use serde::{Deserialize, Serialize};

/// Directory used when no directory is given on the command line.
pub const DEFAULT_DIR: &str = "assets";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchConfig {
    /// Only files whose name starts with this are considered
    pub input_prefix: String,
    /// Prepended to the source name to build the output name
    pub output_prefix: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_prefix: "thumbnail_".to_string(),
            output_prefix: "resized_".to_string(),
        }
    }
}
