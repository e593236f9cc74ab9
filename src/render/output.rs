//! Frame serialization
//!
//! Reduces the grayscale canvas to strictly one bit per pixel and
//! writes it out. The sign's display driver consumes a raw frame of
//! one byte per pixel (0x00/0x01, row-major) at the `.bin` extension;
//! any other destination is encoded as a normal image file.

use anyhow::{Context, Result};
use image::{GrayImage, Luma};
use log::info;
use std::path::Path;

use crate::constants::{FRAME_OFF, FRAME_ON, ON_THRESHOLD};

/// Threshold the canvas to one `0x00`/`0x01` byte per pixel, row-major.
///
/// `invert` flips every bit, matching inverted panels where the blank
/// level is `0x01`.
pub fn to_bilevel(canvas: &GrayImage, invert: bool) -> Vec<u8> {
    canvas
        .pixels()
        .map(|p| {
            let on = (p.0[0] >= ON_THRESHOLD) != invert;
            if on {
                FRAME_ON
            } else {
                FRAME_OFF
            }
        })
        .collect()
}

/// True when the destination takes the raw display frame format
pub fn is_raw_destination(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("bin"))
        .unwrap_or(false)
}

/// Write the finished canvas to its destination.
///
/// The output is always exactly width x height pixels of one bit each;
/// only the container differs between raw frames and encoded images.
pub fn write_frame(canvas: &GrayImage, path: &Path, invert: bool) -> Result<()> {
    let bits = to_bilevel(canvas, invert);

    if is_raw_destination(path) {
        std::fs::write(path, &bits)
            .with_context(|| format!("Failed to write frame: {}", path.display()))?;
        info!("Raw frame written: {} ({} bytes)", path.display(), bits.len());
    } else {
        let mut img = GrayImage::new(canvas.width(), canvas.height());
        for (pixel, bit) in img.pixels_mut().zip(&bits) {
            *pixel = Luma([if *bit == FRAME_ON { 255 } else { 0 }]);
        }
        img.save(path)
            .with_context(|| format!("Failed to write image: {}", path.display()))?;
        info!("Image written: {}", path.display());
    }

    Ok(())
}
