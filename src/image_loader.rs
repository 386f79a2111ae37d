//! Image file I/O and display sizing
//!
//! Thin boundary around the `image` crate: decoded files become BGR
//! [`ImageBuffer`]s, buffers encode back through RGB on save. Decoding
//! supports whatever formats the `image` crate recognizes from the file
//! contents.

use crate::constants::display;
use crate::error::{PaletteError, Result};
use crate::types::{ImageBuffer, Pixel};
use image::imageops::FilterType;
use image::RgbImage;
use std::path::Path;

/// Load an image file into a BGR buffer.
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be read or decoded.
pub fn load_image(path: &Path) -> Result<ImageBuffer> {
    let decoded = image::open(path)
        .map_err(|e| PaletteError::image_load(path.display().to_string(), e))?;
    from_rgb(&decoded.to_rgb8())
}

/// Save a BGR buffer to an image file; the format follows the extension.
///
/// # Errors
///
/// Returns `ImageLoad` if encoding or writing fails.
pub fn save_image(image: &ImageBuffer, path: &Path) -> Result<()> {
    to_rgb(image)
        .save(path)
        .map_err(|e| PaletteError::image_load(path.display().to_string(), e))
}

/// Scale an image down to fit the display bound, preserving aspect.
///
/// Uses the smaller of the width and height scale factors; images that
/// already fit are returned unchanged. Never upscales.
///
/// # Errors
///
/// Returns `InvalidArgument` for an empty image.
pub fn resize_to_display(image: &ImageBuffer) -> Result<ImageBuffer> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(PaletteError::invalid_argument(
            "image",
            format!("{width}x{height}"),
        ));
    }

    let scale = (display::MAX_WIDTH / width as f64).min(display::MAX_HEIGHT / height as f64);
    if scale >= 1.0 {
        return Ok(image.clone());
    }

    let new_width = ((width as f64 * scale).round() as u32).max(1);
    let new_height = ((height as f64 * scale).round() as u32).max(1);
    let resized =
        image::imageops::resize(&to_rgb(image), new_width, new_height, FilterType::Triangle);
    from_rgb(&resized)
}

fn from_rgb(rgb: &RgbImage) -> Result<ImageBuffer> {
    let (width, height) = rgb.dimensions();
    let data = rgb
        .pixels()
        .map(|p| Pixel::new(p.0[2], p.0[1], p.0[0]))
        .collect();
    ImageBuffer::new(width as usize, height as usize, data)
}

fn to_rgb(image: &ImageBuffer) -> RgbImage {
    RgbImage::from_fn(image.width() as u32, image.height() as u32, |x, y| {
        let [b, g, r] = image.get(y as usize, x as usize).channels();
        image::Rgb([r, g, b])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_roundtrip() {
        let mut image = ImageBuffer::filled(8, 6, Pixel::new(10, 20, 30));
        image.set(2, 3, Pixel::new(200, 100, 50));

        let path = std::env::temp_dir().join("palette_swap_roundtrip.png");
        save_image(&image, &path).unwrap();
        let loaded = load_image(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, image);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_image(Path::new("/nonexistent/image.png")).unwrap_err();
        assert!(matches!(err, PaletteError::ImageLoad { .. }));
    }

    #[test]
    fn test_resize_downscales_large_images() {
        let image = ImageBuffer::filled(3000, 1000, Pixel::new(5, 5, 5));
        let resized = resize_to_display(&image).unwrap();

        // scale = (1920/1.3)/3000
        assert_eq!(resized.dimensions(), (1477, 492));
    }

    #[test]
    fn test_resize_leaves_small_images_alone() {
        let image = ImageBuffer::filled(640, 480, Pixel::new(1, 2, 3));
        assert_eq!(resize_to_display(&image).unwrap(), image);
    }

    #[test]
    fn test_resize_bounds_by_height() {
        let image = ImageBuffer::filled(1000, 2000, Pixel::new(0, 0, 0));
        let resized = resize_to_display(&image).unwrap();

        // scale = (1080/1.3)/2000
        assert_eq!(resized.dimensions(), (415, 831));
    }

    #[test]
    fn test_resize_rejects_empty_image() {
        let image = ImageBuffer::new(0, 10, vec![]).unwrap();
        assert!(resize_to_display(&image).is_err());
    }
}
