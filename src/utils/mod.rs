pub mod error;
pub mod formats;
pub mod fs;

pub use error::{
    BatchError, BatchResult, FileFailure, FileFailures, SquareError, SquareResult,
};
pub use formats::{SUFFIX_TABLE, settings_for_file};
pub use fs::{has_prefix, list_prefixed_files};
