//! Single-channel hue clustering
//!
//! Converts the image to HSV and bins the hue channel into `bins`
//! equal-width intervals over the closed [0, 180] range. Centers are
//! the hue midpoints back-converted to BGR with saturation and value
//! held at maximum, which yields vivid representative swatches rather
//! than averages of the binned pixels.

use super::{check_image, Clusterer};
use crate::color::table::hue_bin_center;
use crate::color::ColorConverter;
use crate::constants::{channel, hue};
use crate::error::{PaletteError, Result};
use crate::types::{ImageBuffer, LabelMap, Pixel};

/// Fixed-size hue bin clusterer
#[derive(Debug, Clone)]
pub struct HueGridClusterer {
    bins: u32,
    converter: ColorConverter,
}

impl HueGridClusterer {
    /// Create a hue clusterer with the given number of bins.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `bins` is zero.
    pub fn new(bins: u32) -> Result<Self> {
        if bins == 0 {
            return Err(PaletteError::invalid_argument("bins", bins));
        }
        Ok(Self {
            bins,
            converter: ColorConverter::new(),
        })
    }

    /// Bin index of a hue value, in [0, bins)
    fn cluster_id(&self, hue_value: u8) -> usize {
        let bin_size = hue::RANGE / f64::from(self.bins);
        (f64::from(hue_value) / bin_size) as usize
    }
}

impl Clusterer for HueGridClusterer {
    fn compute_clusters(&self, image: &ImageBuffer) -> Result<(LabelMap, Vec<Pixel>)> {
        check_image(image)?;

        let (width, height) = image.dimensions();
        let mut labels = LabelMap::zeroed(width, height);
        for row in 0..height {
            for col in 0..width {
                let h = self.converter.hue_of(image.get(row, col));
                labels.set(row, col, self.cluster_id(h));
            }
        }

        let centers = (0..self.num_clusters())
            .map(|id| {
                let center = hue_bin_center(id, self.bins);
                self.converter
                    .hsv_to_bgr(Pixel::new(center, channel::MAX, channel::MAX))
            })
            .collect();

        Ok((labels, centers))
    }

    fn num_clusters(&self) -> usize {
        self.bins as usize
    }
}
