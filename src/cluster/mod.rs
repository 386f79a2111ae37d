//! Clustering strategies
//!
//! Three interchangeable strategies share the [`Clusterer`] contract:
//! fixed-grid binning over all three BGR channels ([`GridClusterer`]),
//! fixed binning over the hue channel alone ([`HueGridClusterer`]), and
//! iterative k-means ([`KMeansClusterer`]). Every strategy produces a
//! label map with the input's dimensions and a centers list whose
//! length equals the strategy's cluster count; label values index into
//! that list.

pub mod grid;
pub mod hue;
pub mod kmeans;

pub use grid::GridClusterer;
pub use hue::HueGridClusterer;
pub use kmeans::KMeansClusterer;

use crate::config::ClusterConfig;
use crate::error::{PaletteError, Result};
use crate::types::{ImageBuffer, LabelMap, Pixel};

/// Common contract for the clustering strategies.
///
/// `compute_clusters` partitions the pixels of a BGR image and returns
/// the per-pixel cluster assignment together with one representative
/// BGR color per cluster.
pub trait Clusterer {
    /// Partition `image` into clusters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty image. K-means
    /// additionally returns `DegenerateClustering` when the image has
    /// fewer distinct colors than requested clusters.
    fn compute_clusters(&self, image: &ImageBuffer) -> Result<(LabelMap, Vec<Pixel>)>;

    /// Number of clusters this strategy was configured with
    fn num_clusters(&self) -> usize;
}

/// Build the clusterer named by a [`ClusterConfig`].
///
/// # Errors
///
/// Returns `InvalidArgument` if the configured size parameter is zero.
pub fn from_config(config: &ClusterConfig) -> Result<Box<dyn Clusterer>> {
    Ok(match *config {
        ClusterConfig::Grid { grid_size } => Box::new(GridClusterer::new(grid_size)?),
        ClusterConfig::HueGrid { bins } => Box::new(HueGridClusterer::new(bins)?),
        ClusterConfig::KMeans {
            clusters,
            feature_space,
            seed,
        } => Box::new(KMeansClusterer::new(clusters, feature_space, seed)?),
    })
}

/// Reject empty images before any clustering work begins
pub(crate) fn check_image(image: &ImageBuffer) -> Result<()> {
    if image.is_empty() {
        return Err(PaletteError::invalid_argument(
            "image",
            format!("{}x{}", image.width(), image.height()),
        ));
    }
    Ok(())
}
