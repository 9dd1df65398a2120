//! Share-card rasterization
//!
//! Sub-step B of the image pipeline: compose the card offscreen at 2x
//! scale on the fixed dark background, visual band on top, framed text
//! panel below, and encode PNG. Failure here is surfaced once to the
//! user; it is not retried.

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::principles::PrincipleItem;

/// Base card geometry (3:4), rendered at 2x.
const BASE_WIDTH: u32 = 600;
const BASE_HEIGHT: u32 = 800;
const SCALE: u32 = 2;

/// Visual band height as a share of the card (55%).
const VISUAL_BAND_PERMILLE: u32 = 550;

const BACKGROUND: Rgba<u8> = Rgba([3, 3, 3, 255]);
const BORDER: Rgba<u8> = Rgba([39, 39, 42, 255]);
const ACCENT: Rgba<u8> = Rgba([255, 107, 0, 255]);

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("Could not decode card visual: {0}")]
    Decode(String),

    #[error("Could not encode card: {0}")]
    Encode(String),
}

/// Export file name with the zero-padded principle id.
pub fn export_filename(principle: &PrincipleItem) -> String {
    format!("ZENITH_PRINCIPLE_{:02}.png", principle.id)
}

/// Rasterize the share card to PNG bytes.
pub fn rasterize(visual: &[u8]) -> Result<Vec<u8>, RasterError> {
    let width = BASE_WIDTH * SCALE;
    let height = BASE_HEIGHT * SCALE;
    let band_height = height * VISUAL_BAND_PERMILLE / 1000;

    let source = image::load_from_memory(visual)
        .map_err(|e| RasterError::Decode(e.to_string()))?
        .resize_to_fill(width, band_height, FilterType::Lanczos3)
        .to_rgba8();

    let mut canvas = RgbaImage::from_pixel(width, height, BACKGROUND);
    imageops::overlay(&mut canvas, &source, 0, 0);

    draw_frame(&mut canvas, band_height);

    let mut out = Vec::new();
    DynamicImage::ImageRgba8(canvas)
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .map_err(|e| RasterError::Encode(e.to_string()))?;
    Ok(out)
}

/// Outer border, band divider, and the accent tick at the divider's left
/// edge. Pure pixel work; no text is drawn on the card itself.
fn draw_frame(canvas: &mut RgbaImage, band_height: u32) {
    let (width, height) = canvas.dimensions();
    let thickness = SCALE;

    for x in 0..width {
        for t in 0..thickness {
            canvas.put_pixel(x, t, BORDER);
            canvas.put_pixel(x, height - 1 - t, BORDER);
            canvas.put_pixel(x, band_height.saturating_sub(t + 1), BORDER);
        }
    }
    for y in 0..height {
        for t in 0..thickness {
            canvas.put_pixel(t, y, BORDER);
            canvas.put_pixel(width - 1 - t, y, BORDER);
        }
    }

    // Accent tick below the divider, mirroring the card's category marker.
    let tick = 6 * SCALE;
    for y in band_height + 8 * SCALE..band_height + 8 * SCALE + tick {
        for x in 12 * SCALE..12 * SCALE + tick {
            if x < width && y < height {
                canvas.put_pixel(x, y, ACCENT);
            }
        }
    }
}
