//! Core types shared by the compositor and the batch driver.
//!
//! - [`SquareTask`]: One thumbnail to square
//! - [`SquareSettings`]: Encoding and border fill for the compositor
//! - [`BatchSummary`]: Result of a batch with no failures

mod types;
mod task;

pub use types::{BatchSummary, BorderFill, Encoding, ProcessOutcome, SquareSettings};
pub use task::SquareTask;
