//! Core data types shared across the pipeline
//!
//! A [`Pixel`] is a bare triple of 8-bit channels whose interpretation
//! (BGR or HSV) depends on context; conversions between the two live in
//! [`crate::color::ColorConverter`] and are always explicit. Images and
//! label maps are row-major 2-D grids with matching dimensions.

use crate::error::{PaletteError, Result};
use serde::{Deserialize, Serialize};

/// A three-channel 8-bit pixel.
///
/// Channel order is (blue, green, red) for color-space BGR values and
/// (hue, saturation, value) for HSV values. The type does not track
/// which interpretation applies; callers convert explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel(pub [u8; 3]);

impl Pixel {
    /// Construct a pixel from three channel values in storage order
    pub const fn new(c0: u8, c1: u8, c2: u8) -> Self {
        Self([c0, c1, c2])
    }

    /// Channel values in storage order
    pub const fn channels(&self) -> [u8; 3] {
        self.0
    }
}

impl std::ops::Index<usize> for Pixel {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl std::ops::IndexMut<usize> for Pixel {
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.0[index]
    }
}

/// A row-major grid of pixels.
///
/// Inputs to the pipeline are treated as immutable; recoloring
/// operations mutate a caller-owned buffer in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    data: Vec<Pixel>,
}

impl ImageBuffer {
    /// Create an image from row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `data.len() != width * height`.
    pub fn new(width: usize, height: usize, data: Vec<Pixel>) -> Result<Self> {
        if data.len() != width * height {
            return Err(PaletteError::invalid_argument(
                "data.len()",
                format!("{} (expected {})", data.len(), width * height),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create an image filled with a single pixel value
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Self {
        Self {
            width,
            height,
            data: vec![pixel; width * height],
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// (width, height) pair
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of pixels
    pub fn num_pixels(&self) -> usize {
        self.data.len()
    }

    /// True if the image contains no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pixel at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Pixel {
        self.data[row * self.width + col]
    }

    /// Overwrite the pixel at (row, col)
    pub fn set(&mut self, row: usize, col: usize, pixel: Pixel) {
        self.data[row * self.width + col] = pixel;
    }

    /// Row-major view of all pixels
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    /// Mutable row-major view of all pixels
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }
}

/// Per-pixel cluster assignments for one processed image.
///
/// Same dimensions as the source image; every value is an index into
/// the centers list produced by the same clustering pass. Labels always
/// reflect the original color assignment — edits never rewrite them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: usize,
    height: usize,
    labels: Vec<usize>,
}

impl LabelMap {
    /// Create a label map from row-major assignments.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `labels.len() != width * height`.
    pub fn new(width: usize, height: usize, labels: Vec<usize>) -> Result<Self> {
        if labels.len() != width * height {
            return Err(PaletteError::invalid_argument(
                "labels.len()",
                format!("{} (expected {})", labels.len(), width * height),
            ));
        }
        Ok(Self {
            width,
            height,
            labels,
        })
    }

    /// Create a zero-filled label map
    pub fn zeroed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            labels: vec![0; width * height],
        }
    }

    /// (width, height) pair
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Cluster id of the pixel at (row, col)
    pub fn get(&self, row: usize, col: usize) -> usize {
        self.labels[row * self.width + col]
    }

    /// Assign the pixel at (row, col) to a cluster
    pub fn set(&mut self, row: usize, col: usize, label: usize) {
        self.labels[row * self.width + col] = label;
    }

    /// Row-major view of all assignments
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Check that this map covers an image of the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` naming `context` when they disagree.
    pub fn check_dimensions(&self, context: &str, dimensions: (usize, usize)) -> Result<()> {
        if self.dimensions() != dimensions {
            return Err(PaletteError::dimension_mismatch(
                context,
                dimensions,
                self.dimensions(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_indexing() {
        let mut p = Pixel::new(10, 20, 30);
        assert_eq!(p[0], 10);
        assert_eq!(p[2], 30);
        p[1] = 99;
        assert_eq!(p.channels(), [10, 99, 30]);
    }

    #[test]
    fn test_image_buffer_roundtrip() {
        let mut img = ImageBuffer::filled(3, 2, Pixel::new(0, 0, 0));
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.num_pixels(), 6);

        img.set(1, 2, Pixel::new(1, 2, 3));
        assert_eq!(img.get(1, 2), Pixel::new(1, 2, 3));
        assert_eq!(img.get(0, 0), Pixel::new(0, 0, 0));
    }

    #[test]
    fn test_image_buffer_rejects_bad_length() {
        let result = ImageBuffer::new(2, 2, vec![Pixel::new(0, 0, 0); 3]);
        assert!(matches!(
            result,
            Err(PaletteError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_label_map_dimension_check() {
        let labels = LabelMap::zeroed(4, 3);
        assert!(labels.check_dimensions("test", (4, 3)).is_ok());

        let err = labels.check_dimensions("test", (3, 4)).unwrap_err();
        assert!(matches!(err, PaletteError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_label_map_rejects_bad_length() {
        assert!(LabelMap::new(2, 2, vec![0; 5]).is_err());
    }
}
