//! Core types for square compositing settings and batch results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Target encoding of a squared image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Encoding {
    /// JPEG with the encoder's default quality
    Lossy,
    /// WebP in lossless mode, keeping every RGBA value untouched
    LosslessExact,
}

/// What the square canvas holds before the source is composited onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderFill {
    /// Every canvas pixel is painted this color with full alpha
    Opaque { rgb: [u8; 3] },
    /// Canvas left zero-initialised (transparent black)
    Transparent,
}

impl BorderFill {
    pub const WHITE: Self = Self::Opaque { rgb: [255, 255, 255] };
}

/// Configuration for one run of the square compositor.
///
/// Chosen per file from its suffix, see [`crate::utils::settings_for_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquareSettings {
    pub encoding: Encoding,
    pub border_fill: BorderFill,
}

impl SquareSettings {
    /// JPEG output over an opaque white canvas.
    pub const JPEG: Self = Self {
        encoding: Encoding::Lossy,
        border_fill: BorderFill::WHITE,
    };

    /// Lossless exact WebP output over a transparent canvas.
    pub const WEBP: Self = Self {
        encoding: Encoding::LosslessExact,
        border_fill: BorderFill::Transparent,
    };
}

/// Result of a single `process_image` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProcessOutcome {
    /// A squared image was written to this path
    Written(PathBuf),
    /// The file name carries no supported suffix; nothing was touched
    Skipped,
}

/// Summary of a batch in which no file failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Output files written, in processing order
    pub written: Vec<PathBuf>,
    /// Matching file names skipped for an unsupported suffix
    pub skipped: Vec<String>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len()
    }
}
