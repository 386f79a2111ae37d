//! Full-channel fixed-grid clustering
//!
//! Partitions the 0-255 range of each BGR channel into `grid_size`
//! equal-width bins. A pixel's cluster id packs its three bin indices
//! (blue most significant); centers are the analytic bin midpoints, not
//! measured from pixel data. Deterministic, single pass, no iteration.

use super::{check_image, Clusterer};
use crate::color::table::grid_bin_center;
use crate::constants::channel;
use crate::error::{PaletteError, Result};
use crate::types::{ImageBuffer, LabelMap, Pixel};

/// Fixed-size grid clusterer over all three BGR channels
#[derive(Debug, Clone)]
pub struct GridClusterer {
    grid_size: u32,
}

impl GridClusterer {
    /// Create a grid clusterer with `grid_size` bins per channel.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `grid_size` is zero.
    pub fn new(grid_size: u32) -> Result<Self> {
        if grid_size == 0 {
            return Err(PaletteError::invalid_argument("grid_size", grid_size));
        }
        Ok(Self { grid_size })
    }

    /// Cluster id of a BGR pixel: `cb*G^2 + cg*G + cr`
    fn cluster_id(&self, pixel: Pixel) -> usize {
        let g = self.grid_size as usize;
        let bin_size = channel::RANGE / f64::from(self.grid_size);

        let [b, gr, r] = pixel.channels();
        let cr = (f64::from(r) / bin_size) as usize; // in [0, grid_size)
        let cg = (f64::from(gr) / bin_size) as usize;
        let cb = (f64::from(b) / bin_size) as usize;

        cr + cg * g + cb * g * g
    }
}

impl Clusterer for GridClusterer {
    fn compute_clusters(&self, image: &ImageBuffer) -> Result<(LabelMap, Vec<Pixel>)> {
        check_image(image)?;

        let (width, height) = image.dimensions();
        let mut labels = LabelMap::zeroed(width, height);
        for row in 0..height {
            for col in 0..width {
                labels.set(row, col, self.cluster_id(image.get(row, col)));
            }
        }

        let centers = (0..self.num_clusters())
            .map(|id| grid_bin_center(id, self.grid_size))
            .collect();

        Ok((labels, centers))
    }

    fn num_clusters(&self) -> usize {
        (self.grid_size as usize).pow(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_in_range() {
        let clusterer = GridClusterer::new(3).unwrap();
        let pixels = (0..64)
            .map(|i| Pixel::new((i * 4) as u8, (255 - i * 3) as u8, (i * 7 % 256) as u8))
            .collect();
        let image = ImageBuffer::new(8, 8, pixels).unwrap();

        let (labels, centers) = clusterer.compute_clusters(&image).unwrap();
        assert_eq!(centers.len(), 27);
        assert!(labels.labels().iter().all(|&l| l < 27));
    }

    #[test]
    fn test_single_color_image_single_cluster() {
        let clusterer = GridClusterer::new(3).unwrap();
        let image = ImageBuffer::filled(10, 10, Pixel::new(100, 100, 100));

        let (labels, _) = clusterer.compute_clusters(&image).unwrap();

        // (100, 100, 100) falls in bin 1 of each channel: 1 + 3 + 9
        assert!(labels.labels().iter().all(|&l| l == 13));
    }

    #[test]
    fn test_id_packs_blue_most_significant() {
        let clusterer = GridClusterer::new(3).unwrap();

        // Max red only: cr = 2
        assert_eq!(clusterer.cluster_id(Pixel::new(0, 0, 255)), 2);
        // Max green only: cg = 2 -> 2*3
        assert_eq!(clusterer.cluster_id(Pixel::new(0, 255, 0)), 6);
        // Max blue only: cb = 2 -> 2*9
        assert_eq!(clusterer.cluster_id(Pixel::new(255, 0, 0)), 18);
    }

    #[test]
    fn test_centers_are_bin_midpoints() {
        let clusterer = GridClusterer::new(2).unwrap();
        let image = ImageBuffer::filled(1, 1, Pixel::new(0, 0, 0));
        let (_, centers) = clusterer.compute_clusters(&image).unwrap();

        // bin size 128, midpoint 64; last bin midpoint 128+64
        assert_eq!(centers[0], Pixel::new(64, 64, 64));
        assert_eq!(centers[7], Pixel::new(192, 192, 192));
    }

    #[test]
    fn test_grid_size_one_single_cluster() {
        let clusterer = GridClusterer::new(1).unwrap();
        let image = ImageBuffer::filled(4, 4, Pixel::new(250, 3, 99));
        let (labels, centers) = clusterer.compute_clusters(&image).unwrap();

        assert_eq!(centers.len(), 1);
        assert!(labels.labels().iter().all(|&l| l == 0));
        assert_eq!(centers[0], Pixel::new(128, 128, 128));
    }

    #[test]
    fn test_empty_image_rejected() {
        let clusterer = GridClusterer::new(3).unwrap();
        let image = ImageBuffer::new(0, 5, vec![]).unwrap();
        assert!(clusterer.compute_clusters(&image).is_err());
    }
}
