//! Canvas composition
//!
//! Paints measured lines of glyphs onto the fixed display canvas.
//! Lines stack by their own heights; centering uses floor division and
//! may push a too-wide line to a negative x origin. Pastes are clipped
//! per pixel, so content can run past any canvas edge without error.

pub mod output;

use image::GrayImage;
use log::debug;

use crate::font::GlyphStore;
use crate::layout::Line;

/// Horizontal origin for one line.
///
/// Floor division keeps odd leftovers biased left, and a line wider
/// than the canvas gets a negative origin rather than being clamped.
fn line_origin(center: bool, canvas_width: u32, line_width: u32) -> i64 {
    if center {
        (canvas_width as i64 - line_width as i64).div_euclid(2)
    } else {
        0
    }
}

/// Paint lines top to bottom onto a fresh canvas.
///
/// The vertical cursor advances by each line's height *after* the line
/// is painted, so a blank line still consumes its fallback height.
/// Content taller than the canvas is painted past the bottom edge and
/// clipped; the layout itself is never truncated.
pub fn composite(
    store: &GlyphStore,
    lines: &[Line],
    canvas_width: u32,
    canvas_height: u32,
    center: bool,
) -> GrayImage {
    let mut canvas = GrayImage::new(canvas_width, canvas_height);
    let mut y: i64 = 0;

    for line in lines {
        let mut x = line_origin(center, canvas_width, line.width);
        for ch in line.text.chars() {
            let glyph = store.get(ch);
            paste(&mut canvas, &glyph.bitmap, x, y);
            x += glyph.width as i64;
        }
        y += line.height as i64;
    }

    if y > canvas_height as i64 {
        debug!(
            "Content height {} exceeds canvas height {}, overflow clipped",
            y, canvas_height
        );
    }

    canvas
}

/// Copy a glyph bitmap onto the canvas, clipping at every edge
fn paste(canvas: &mut GrayImage, bitmap: &GrayImage, x0: i64, y0: i64) {
    let (cw, ch) = (canvas.width() as i64, canvas.height() as i64);
    for (gx, gy, px) in bitmap.enumerate_pixels() {
        let cx = x0 + gx as i64;
        let cy = y0 + gy as i64;
        if cx < 0 || cy < 0 || cx >= cw || cy >= ch {
            continue;
        }
        canvas.put_pixel(cx as u32, cy as u32, *px);
    }
}
