// src/processing/square/canvas.rs

//! Square canvas geometry and compositing.
//!
//! Pure functions of the decoded raster: nothing here touches the filesystem.

use image::{Rgba, RgbaImage, imageops};

use crate::core::BorderFill;

/// Placement of a `width × height` source on its square canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasGeometry {
    /// Side length of the canvas, `max(width, height)`
    pub size: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

impl CanvasGeometry {
    /// Centers the source with floor division, so an odd leftover pixel of
    /// padding lands on the right or bottom edge.
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        let size = width.max(height);
        Self {
            size,
            offset_x: (size - width) / 2,
            offset_y: (size - height) / 2,
        }
    }
}

/// Builds the square version of `source` over a canvas filled per `fill`.
///
/// The fill pass always runs, even when the source is already square. The
/// source is then alpha-composited "over" the canvas at the centered offsets.
pub fn compose_square(source: &RgbaImage, fill: BorderFill) -> RgbaImage {
    let (width, height) = source.dimensions();
    let geometry = CanvasGeometry::for_dimensions(width, height);

    let (x, y) = (i64::from(geometry.offset_x), i64::from(geometry.offset_y));

    let mut canvas = RgbaImage::new(geometry.size, geometry.size);
    match fill {
        BorderFill::Opaque { rgb: [r, g, b] } => {
            let paint = Rgba([r, g, b, u8::MAX]);
            canvas.pixels_mut().for_each(|p| *p = paint);

            imageops::overlay(&mut canvas, source, x, y);
            // "over" an opaque backdrop is opaque; the float blend can land on 254
            canvas.pixels_mut().for_each(|p| p.0[3] = u8::MAX);
        }
        // "over" a fully transparent backdrop yields the source pixel itself
        BorderFill::Transparent => imageops::replace(&mut canvas, source, x, y),
    }

    canvas
}
