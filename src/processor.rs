//! Pipeline orchestration
//!
//! [`ImageProcessor`] ties the pieces together: it runs the configured
//! clustering strategy over an image, holds the resulting label map and
//! centers, and serves palette queries and recoloring edits against
//! that state. One processor instance tracks one processed image at a
//! time; processing another image replaces the state.
//!
//! Edits take the target as a color, not a cluster id: the color is
//! resolved to the nearest cluster center first, so callers can pass a
//! palette entry or any sampled pixel value.

use crate::cluster;
use crate::config::ProcessorConfig;
use crate::editor::ColorEditor;
use crate::error::{PaletteError, Result};
use crate::palette::{PaletteEntry, PaletteExtractor};
use crate::types::{ImageBuffer, LabelMap, Pixel};

/// Which recoloring operation a bulk edit applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Additive channel shift, clamped ([`ColorEditor::substitute_color`])
    Substitute,
    /// Hue overwrite, saturation and value preserved ([`ColorEditor::hue_shift`])
    HueShift,
}

/// Clustering output for the most recently processed image
#[derive(Debug, Clone)]
struct ClusterState {
    labels: LabelMap,
    centers: Vec<Pixel>,
}

/// Stateful clustering and recoloring pipeline
#[derive(Debug)]
pub struct ImageProcessor {
    config: ProcessorConfig,
    extractor: PaletteExtractor,
    editor: ColorEditor,
    state: Option<ClusterState>,
}

impl ImageProcessor {
    /// Create a processor with the given configuration
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            extractor: PaletteExtractor::new(),
            editor: ColorEditor::new(),
            state: None,
        }
    }

    /// Create a processor with the default configuration
    pub fn with_defaults() -> Self {
        Self::new(ProcessorConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Cluster `image` with the configured strategy and store the result.
    ///
    /// Replaces any previous clustering state.
    ///
    /// # Errors
    ///
    /// Propagates strategy construction and clustering errors
    /// (`InvalidArgument`, `DegenerateClustering`, `Processing`).
    pub fn process_image(&mut self, image: &ImageBuffer) -> Result<()> {
        let clusterer = cluster::from_config(&self.config.clustering)?;
        let (labels, centers) = clusterer.compute_clusters(image)?;
        self.state = Some(ClusterState { labels, centers });
        Ok(())
    }

    /// Label map of the last processed image, if any
    pub fn labels(&self) -> Option<&LabelMap> {
        self.state.as_ref().map(|s| &s.labels)
    }

    /// Cluster centers of the last processed image, if any
    pub fn centers(&self) -> Option<&[Pixel]> {
        self.state.as_ref().map(|s| s.centers.as_slice())
    }

    /// Extract the ranked dominant palette of the processed image.
    ///
    /// # Errors
    ///
    /// Returns `Processing` if no image has been processed yet.
    pub fn extract_palette(&self) -> Result<Vec<PaletteEntry>> {
        let state = self.state()?;
        self.extractor
            .extract(&state.labels, &state.centers, self.config.palette_size)
    }

    /// Per-cluster pixel counts of the processed image.
    ///
    /// # Errors
    ///
    /// Returns `Processing` if no image has been processed yet.
    pub fn histogram(&self) -> Result<Vec<usize>> {
        let state = self.state()?;
        self.extractor
            .compute_histogram(&state.labels, state.centers.len())
    }

    /// Shift the cluster nearest to `target` toward `replacement`.
    ///
    /// The target color is resolved to a cluster, then each of that
    /// cluster's pixels moves by the per-channel delta from `target` to
    /// `replacement`, clamped to the 8-bit range.
    ///
    /// # Errors
    ///
    /// Returns `Processing` if no image has been processed and
    /// `DimensionMismatch` if `image` does not match the processed one.
    pub fn substitute_color(
        &self,
        image: &mut ImageBuffer,
        target: Pixel,
        replacement: Pixel,
    ) -> Result<()> {
        let state = self.state()?;
        let cluster_id = self.editor.resolve_cluster_id(target, &state.centers)?;
        self.editor
            .substitute_color(image, &state.labels, cluster_id, target, replacement)
    }

    /// Overwrite the hue of the cluster nearest to `target`.
    ///
    /// Matched pixels take `replacement`'s hue and keep their own
    /// saturation and value.
    ///
    /// # Errors
    ///
    /// Returns `Processing` if no image has been processed and
    /// `DimensionMismatch` if `image` does not match the processed one.
    pub fn hue_shift(
        &self,
        image: &mut ImageBuffer,
        target: Pixel,
        replacement: Pixel,
    ) -> Result<()> {
        let state = self.state()?;
        let cluster_id = self.editor.resolve_cluster_id(target, &state.centers)?;
        self.editor
            .hue_shift(image, &state.labels, cluster_id, replacement)
    }

    /// Recolor the top-ranked clusters in one pass.
    ///
    /// The i-th replacement applies to the i-th entry of the ranked
    /// palette; extra replacements are ignored when the palette is
    /// shorter. Labels are not rewritten between edits, so every edit
    /// targets the original clustering.
    ///
    /// # Errors
    ///
    /// Returns `Processing` if no image has been processed and
    /// `DimensionMismatch` if `image` does not match the processed one.
    pub fn apply_palette(
        &self,
        image: &mut ImageBuffer,
        replacements: &[Pixel],
        kind: EditKind,
    ) -> Result<()> {
        let state = self.state()?;
        let palette = self.extract_palette()?;

        for (entry, &replacement) in palette.iter().zip(replacements) {
            match kind {
                EditKind::Substitute => self.editor.substitute_color(
                    image,
                    &state.labels,
                    entry.cluster_id,
                    entry.color,
                    replacement,
                )?,
                EditKind::HueShift => self.editor.hue_shift(
                    image,
                    &state.labels,
                    entry.cluster_id,
                    replacement,
                )?,
            }
        }
        Ok(())
    }

    fn state(&self) -> Result<&ClusterState> {
        self.state
            .as_ref()
            .ok_or_else(|| PaletteError::processing("no image has been processed"))
    }
}
