// src/processing/square/codec.rs

//! Decoding of source thumbnails and encoding of squared canvases.
//!
//! File handles are scoped to each function so they are closed on every
//! return path, including early failures.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageReader, RgbaImage};
use tracing::debug;

use crate::core::Encoding;
use crate::utils::{SquareError, SquareResult};

/// Opens `path` and decodes it as whatever image format its bytes look like.
///
/// The file extension is ignored; a `.jpg` holding PNG bytes decodes fine.
pub fn decode_rgba(path: &Path) -> SquareResult<RgbaImage> {
    let file = File::open(path).map_err(|e| SquareError::io(path, e))?;

    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| SquareError::io(path, e))?;

    let format = reader.format();
    let image = reader.decode().map_err(|e| SquareError::decode(path, e))?;

    debug!(
        "Decoded '{}' ({:?}): {}×{}",
        path.display(),
        format,
        image.width(),
        image.height()
    );

    Ok(image.into_rgba8())
}

/// Writes `canvas` to `path` in the requested encoding, replacing any existing file.
///
/// A failure after the file is created leaves the partial output in place.
pub fn encode_to(canvas: &RgbaImage, path: &Path, encoding: Encoding) -> SquareResult<()> {
    let file = File::create(path).map_err(|e| SquareError::encode(path, e))?;
    let mut writer = BufWriter::new(file);

    match encoding {
        Encoding::Lossy => write_jpeg(canvas, &mut writer),
        Encoding::LosslessExact => write_webp_lossless(canvas, &mut writer),
    }
    .map_err(|e| SquareError::encode(path, e))?;

    writer.flush().map_err(|e| SquareError::encode(path, e))?;

    debug!("Encoded '{}' as {:?}", path.display(), encoding);
    Ok(())
}

// ── Format writers ───────────────────────────────────────────────────────────────────

/// JPEG has no alpha channel; the canvas is flattened to RGB by dropping it.
fn write_jpeg<W: Write>(canvas: &RgbaImage, writer: &mut W) -> image::ImageResult<()> {
    let rgb = DynamicImage::ImageRgba8(canvas.clone()).into_rgb8();
    JpegEncoder::new(writer).write_image(
        rgb.as_raw(),
        rgb.width(),
        rgb.height(),
        ExtendedColorType::Rgb8,
    )
}

/// Lossless WebP stores every RGBA value as is, including color under zero alpha.
fn write_webp_lossless<W: Write>(canvas: &RgbaImage, writer: &mut W) -> image::ImageResult<()> {
    WebPEncoder::new_lossless(writer).write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgba8,
    )
}
