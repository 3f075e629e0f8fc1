pub mod batch;
pub mod square;

pub use batch::{BatchConfig, BatchProcessor, DEFAULT_DIR, resize_thumbnails};
pub use square::{process_image, process_task, square_image};
