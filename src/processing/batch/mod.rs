mod config;
mod processor;

pub use config::{BatchConfig, DEFAULT_DIR};
pub use processor::{BatchProcessor, resize_thumbnails};
