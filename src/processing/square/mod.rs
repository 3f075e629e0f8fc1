// src/processing/square/mod.rs

//! Square compositor: one thumbnail in, one padded square image out.
//!
//! # Pipeline
//!
//! - dispatch: the file name suffix picks [`SquareSettings`] (or skips the file)
//! - [`codec::decode_rgba`]: content-sniffed decode to RGBA
//! - [`canvas::compose_square`]: fill, center, alpha-composite
//! - [`codec::encode_to`]: JPEG or lossless WebP
//!
//! Any step's failure ends the run for that file; nothing is retried.

mod canvas;
mod codec;

use std::path::Path;
use tracing::debug;

use crate::core::{ProcessOutcome, SquareSettings, SquareTask};
use crate::utils::{SquareResult, settings_for_file};

pub use canvas::{CanvasGeometry, compose_square};
pub use codec::{decode_rgba, encode_to};

/// Squares `input_path` into `output_path`, choosing the encoding from `file_name`.
///
/// Unsupported suffixes succeed with [`ProcessOutcome::Skipped`] without
/// opening either path.
pub fn process_image(
    input_path: &Path,
    output_path: &Path,
    file_name: &str,
) -> SquareResult<ProcessOutcome> {
    let Some(settings) = settings_for_file(file_name) else {
        debug!("Skipping '{file_name}': unsupported suffix");
        return Ok(ProcessOutcome::Skipped);
    };

    square_image(input_path, output_path, settings)?;
    Ok(ProcessOutcome::Written(output_path.to_path_buf()))
}

/// Runs [`process_image`] for a prepared task.
pub fn process_task(task: &SquareTask) -> SquareResult<ProcessOutcome> {
    process_image(&task.input_path, &task.output_path, &task.file_name)
}

/// Decodes, squares and encodes one image with explicit settings.
pub fn square_image(
    input_path: &Path,
    output_path: &Path,
    settings: SquareSettings,
) -> SquareResult<()> {
    let source = decode_rgba(input_path)?;

    let geometry = CanvasGeometry::for_dimensions(source.width(), source.height());
    debug!(
        "Squaring {}×{} onto {}² at ({}, {})",
        source.width(),
        source.height(),
        geometry.size,
        geometry.offset_x,
        geometry.offset_y
    );

    let square = compose_square(&source, settings.border_fill);
    encode_to(&square, output_path, settings.encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::SquareError;
    use image::{Rgb, RgbImage};

    #[test]
    fn unsupported_suffix_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("thumbnail_a.png");
        let output = dir.path().join("resized_thumbnail_a.png");

        // Input does not even exist: a skip must not try to open it
        let outcome = process_image(&input, &output, "thumbnail_a.png").unwrap();
        assert_eq!(outcome, ProcessOutcome::Skipped);
        assert!(!output.exists());
    }

    #[test]
    fn jpeg_named_file_is_squared() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("thumbnail_a.jpg");
        let output = dir.path().join("resized_thumbnail_a.jpg");
        RgbImage::from_pixel(16, 8, Rgb([0, 0, 0]))
            .save_with_format(&input, image::ImageFormat::Jpeg)
            .unwrap();

        let outcome = process_image(&input, &output, "thumbnail_a.jpg").unwrap();
        assert_eq!(outcome, ProcessOutcome::Written(output.clone()));

        let squared = decode_rgba(&output).unwrap();
        assert_eq!(squared.dimensions(), (16, 16));
    }

    #[test]
    fn corrupt_input_writes_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("thumbnail_b.webp");
        let output = dir.path().join("resized_thumbnail_b.webp");
        std::fs::write(&input, [0u8; 32]).unwrap();

        let err = process_image(&input, &output, "thumbnail_b.webp").unwrap_err();
        assert!(matches!(err, SquareError::Decode { .. }));
        assert!(!output.exists());
    }
}
