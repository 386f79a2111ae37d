//! Cluster-targeted recoloring
//!
//! Both edits target the pixels a label map assigns to one cluster and
//! leave every other pixel untouched. The label map itself is never
//! rewritten, so repeated edits keep targeting the original clusters.
//!
//! [`ColorEditor::substitute_color`] is additive: the per-channel delta
//! between the cluster's reference color and the replacement is added
//! to each matched pixel, clamped to the 8-bit range, so shading within
//! the cluster survives the edit. [`ColorEditor::hue_shift`] instead
//! overwrites the hue of matched pixels with the replacement's hue,
//! preserving saturation and value.

use crate::color::{euclidean_distance, ColorConverter};
use crate::error::{PaletteError, Result};
use crate::types::{ImageBuffer, LabelMap, Pixel};

/// Recoloring operations over a clustered image
#[derive(Debug, Clone, Default)]
pub struct ColorEditor {
    converter: ColorConverter,
}

impl ColorEditor {
    pub fn new() -> Self {
        Self {
            converter: ColorConverter::new(),
        }
    }

    /// Find the cluster whose center is closest to `color`.
    ///
    /// Uses Euclidean distance over the three channels; ties resolve to
    /// the lowest index.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `centers` is empty.
    pub fn resolve_cluster_id(&self, color: Pixel, centers: &[Pixel]) -> Result<usize> {
        let first = centers
            .first()
            .ok_or_else(|| PaletteError::invalid_argument("centers", "empty"))?;

        let mut best = 0;
        let mut best_dist = euclidean_distance(color, *first);
        for (i, &center) in centers.iter().enumerate().skip(1) {
            let dist = euclidean_distance(color, center);
            if dist < best_dist {
                best_dist = dist;
                best = i;
            }
        }
        Ok(best)
    }

    /// Shift every pixel of one cluster by the delta between two colors.
    ///
    /// The per-channel difference `to - from` is added to each matched
    /// pixel's current value and clamped to `[0, 255]`, so darker and
    /// lighter pixels within the cluster move together.
    ///
    /// # Arguments
    ///
    /// * `image` - BGR image to edit in place
    /// * `labels` - Cluster assignment for `image`
    /// * `cluster_id` - Cluster whose pixels are edited
    /// * `from` - Reference color (typically the cluster center)
    /// * `to` - Replacement color
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `labels` does not cover `image`.
    pub fn substitute_color(
        &self,
        image: &mut ImageBuffer,
        labels: &LabelMap,
        cluster_id: usize,
        from: Pixel,
        to: Pixel,
    ) -> Result<()> {
        labels.check_dimensions("substitute_color", image.dimensions())?;

        let delta: [i16; 3] = [
            i16::from(to[0]) - i16::from(from[0]),
            i16::from(to[1]) - i16::from(from[1]),
            i16::from(to[2]) - i16::from(from[2]),
        ];

        for (pixel, &label) in image.pixels_mut().iter_mut().zip(labels.labels()) {
            if label != cluster_id {
                continue;
            }
            for c in 0..3 {
                pixel[c] = (i16::from(pixel[c]) + delta[c]).clamp(0, 255) as u8;
            }
        }
        Ok(())
    }

    /// Overwrite the hue of every pixel in one cluster.
    ///
    /// Matched pixels take the hue of `to` while keeping their own
    /// saturation and value. The image is converted BGR to HSV once,
    /// edited, and converted back once.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `labels` does not cover `image`.
    pub fn hue_shift(
        &self,
        image: &mut ImageBuffer,
        labels: &LabelMap,
        cluster_id: usize,
        to: Pixel,
    ) -> Result<()> {
        labels.check_dimensions("hue_shift", image.dimensions())?;

        let new_hue = self.converter.hue_of(to);
        for (pixel, &label) in image.pixels_mut().iter_mut().zip(labels.labels()) {
            if label != cluster_id {
                continue;
            }
            let mut hsv = self.converter.bgr_to_hsv(*pixel);
            hsv[0] = new_hue;
            *pixel = self.converter.hsv_to_bgr(hsv);
        }
        Ok(())
    }
}
