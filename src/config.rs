//! Configuration for the clustering and recoloring pipeline
//!
//! Strategy selection is a runtime data value: a [`ClusterConfig`]
//! names one of the three clustering strategies plus its integer
//! parameter, and can be loaded from JSON for reproducible runs.
//!
//! ```no_run
//! use palette_swap::ProcessorConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ProcessorConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = ProcessorConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::constants::defaults;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete pipeline configuration.
///
/// Can be serialized to/from JSON for reproducible experiments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Clustering strategy and its parameters
    pub clustering: ClusterConfig,

    /// Number of dominant colors to extract
    pub palette_size: usize,
}

/// Clustering strategy selection.
///
/// One variant per strategy, each carrying its single size parameter
/// (grid size, hue bin count, or cluster count).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClusterConfig {
    /// Full-channel fixed-grid binning over BGR
    Grid {
        /// Bins per channel; total clusters = grid_size^3
        grid_size: u32,
    },

    /// Single-channel fixed binning over hue
    HueGrid {
        /// Number of hue bins
        bins: u32,
    },

    /// Iterative k-means clustering
    KMeans {
        /// Number of clusters
        clusters: u32,

        /// Feature space the centroids live in
        #[serde(default)]
        feature_space: KmeansFeatureSpace,

        /// RNG seed for centroid initialization
        #[serde(default)]
        seed: u64,
    },
}

/// Feature space for k-means clustering.
///
/// `Hue` clusters on the hue scalar alone (centroids are back-converted
/// to BGR with saturation/value at maximum); `Bgr` clusters on all
/// three channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KmeansFeatureSpace {
    /// Hue-only scalar features
    Hue,
    /// Full three-channel BGR features
    #[default]
    Bgr,
}

impl ClusterConfig {
    /// Grid strategy with the default grid size
    pub fn grid() -> Self {
        Self::Grid {
            grid_size: defaults::GRID_SIZE,
        }
    }

    /// Hue-grid strategy with the default bin count
    pub fn hue_grid() -> Self {
        Self::HueGrid {
            bins: defaults::HUE_BINS,
        }
    }

    /// K-means strategy with the default cluster count and seed
    pub fn kmeans() -> Self {
        Self::KMeans {
            clusters: defaults::KMEANS_CLUSTERS,
            feature_space: KmeansFeatureSpace::default(),
            seed: defaults::KMEANS_SEED,
        }
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            clustering: ClusterConfig::grid(),
            palette_size: defaults::PALETTE_SIZE,
        }
    }
}

impl ProcessorConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
