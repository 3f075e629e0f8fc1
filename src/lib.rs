// Module declarations in dependency order
pub mod core;
pub mod processing;
pub mod utils;

// Public exports for external consumers
pub use crate::core::{
    BatchSummary, BorderFill, Encoding, ProcessOutcome, SquareSettings, SquareTask,
};
pub use crate::processing::{
    BatchConfig, BatchProcessor, DEFAULT_DIR, process_image, process_task, resize_thumbnails,
    square_image,
};
pub use crate::utils::{
    BatchError, BatchResult, FileFailure, FileFailures, SquareError, SquareResult,
};

// This library file is used as a public API for consuming this crate as a library.
// The actual command line entry point is in main.rs.
