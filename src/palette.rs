//! Dominant-palette extraction
//!
//! Counts cluster occupancy over a label map and ranks clusters by
//! pixel count. The sort is stable and descending, so clusters with
//! equal counts keep ascending id order and repeated extraction over
//! the same labels always yields the same palette.

use crate::error::{PaletteError, Result};
use crate::types::{LabelMap, Pixel};

/// One ranked palette slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Cluster id, indexing the clusterer's centers list
    pub cluster_id: usize,
    /// Representative BGR color of the cluster
    pub color: Pixel,
    /// Number of pixels assigned to the cluster
    pub count: usize,
}

/// Histogram-based palette extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteExtractor;

impl PaletteExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Count the pixels assigned to each of `num_clusters` clusters.
    ///
    /// The histogram always has `num_clusters` entries and its values
    /// sum to the number of labeled pixels.
    ///
    /// # Errors
    ///
    /// Returns `Processing` if a label falls outside `num_clusters`.
    pub fn compute_histogram(&self, labels: &LabelMap, num_clusters: usize) -> Result<Vec<usize>> {
        let mut histogram = vec![0usize; num_clusters];
        for &label in labels.labels() {
            let slot = histogram.get_mut(label).ok_or_else(|| {
                PaletteError::processing(format!(
                    "label {label} out of range for {num_clusters} clusters"
                ))
            })?;
            *slot += 1;
        }
        Ok(histogram)
    }

    /// Cluster ids ordered by descending count.
    ///
    /// Stable: equal counts keep ascending id order.
    pub fn rank_clusters(&self, histogram: &[usize]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..histogram.len()).collect();
        // sort_by is stable, so ties preserve the ascending id order
        order.sort_by(|&a, &b| histogram[b].cmp(&histogram[a]));
        order
    }

    /// Extract the top `palette_size` dominant clusters.
    ///
    /// The result has `min(palette_size, centers.len())` entries; when
    /// fewer clusters are occupied than requested, the tail entries
    /// carry a count of zero in ascending id order.
    ///
    /// # Arguments
    ///
    /// * `labels` - Per-pixel cluster assignment
    /// * `centers` - Representative color per cluster id
    /// * `palette_size` - Maximum number of entries to return
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `palette_size` is zero and
    /// `Processing` if a label has no corresponding center.
    pub fn extract(
        &self,
        labels: &LabelMap,
        centers: &[Pixel],
        palette_size: usize,
    ) -> Result<Vec<PaletteEntry>> {
        if palette_size == 0 {
            return Err(PaletteError::invalid_argument("palette_size", palette_size));
        }

        let histogram = self.compute_histogram(labels, centers.len())?;
        let entries = self
            .rank_clusters(&histogram)
            .into_iter()
            .take(palette_size)
            .map(|id| PaletteEntry {
                cluster_id: id,
                color: centers[id],
                count: histogram[id],
            })
            .collect();
        Ok(entries)
    }
}
