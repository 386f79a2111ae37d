//! Palette preview rendering
//!
//! Composes a preview canvas: the source image on top and a strip of
//! palette swatches below it, one square per ranked entry. Swatch width
//! is the image width divided by the palette length, with a white
//! background and a margin around each swatch. Swatches too small to
//! carry the margin are drawn without one.

use crate::constants::render;
use crate::error::{PaletteError, Result};
use crate::palette::PaletteEntry;
use crate::types::{ImageBuffer, Pixel};

const WHITE: Pixel = Pixel::new(255, 255, 255);

/// Render `image` with a swatch strip for `palette` appended below.
///
/// # Errors
///
/// Returns `InvalidArgument` if the image or the palette is empty.
pub fn render_palette_strip(image: &ImageBuffer, palette: &[PaletteEntry]) -> Result<ImageBuffer> {
    if image.is_empty() {
        return Err(PaletteError::invalid_argument(
            "image",
            format!("{}x{}", image.width(), image.height()),
        ));
    }
    if palette.is_empty() {
        return Err(PaletteError::invalid_argument("palette", "empty"));
    }

    let (width, height) = image.dimensions();
    let swatch = ((width as f64 / palette.len() as f64).round() as usize).max(1);
    let margin = if swatch > 2 * render::SWATCH_MARGIN {
        render::SWATCH_MARGIN
    } else {
        0
    };

    let mut canvas = ImageBuffer::filled(width, height + swatch, WHITE);
    for row in 0..height {
        for col in 0..width {
            canvas.set(row, col, image.get(row, col));
        }
    }

    for (i, entry) in palette.iter().enumerate() {
        let x_start = i * swatch + margin;
        let x_end = ((i + 1) * swatch).saturating_sub(margin).min(width);
        let y_start = height + margin;
        let y_end = (height + swatch).saturating_sub(margin);

        for row in y_start..y_end {
            for col in x_start..x_end {
                canvas.set(row, col, entry.color);
            }
        }
    }

    Ok(canvas)
}
