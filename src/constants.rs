//! Default parameters and fixed ranges for clustering and recoloring
//!
//! Channel and hue ranges follow the OpenCV 8-bit conventions the engine
//! was calibrated against: BGR channels span [0, 255] and hue spans
//! [0, 180) after halving the 360-degree circle.

/// Default strategy and palette parameters
pub mod defaults {
    /// Default grid size for full-channel grid clustering (3^3 = 27 clusters)
    pub const GRID_SIZE: u32 = 3;

    /// Default number of hue bins for single-channel clustering
    pub const HUE_BINS: u32 = 8;

    /// Default cluster count for k-means clustering
    pub const KMEANS_CLUSTERS: u32 = 5;

    /// Default RNG seed for k-means centroid initialization
    pub const KMEANS_SEED: u64 = 0;

    /// Default number of dominant colors in an extracted palette
    pub const PALETTE_SIZE: usize = 5;
}

/// Channel value ranges
pub mod channel {
    /// Number of representable values per BGR channel
    pub const RANGE: f64 = 256.0;

    /// Maximum BGR channel value
    pub const MAX: u8 = 255;
}

/// Hue channel conventions (OpenCV 8-bit HSV)
pub mod hue {
    /// Hue values occupy [0, MAX], i.e. degrees / 2
    pub const MAX: u8 = 180;

    /// Bin range used when partitioning hue; 181 covers the closed
    /// [0, 180] interval so the top value falls in the last bin
    pub const RANGE: f64 = 181.0;
}

/// K-means convergence policy
pub mod kmeans {
    /// Maximum Lloyd iterations per restart
    pub const MAX_ITERATIONS: usize = 10;

    /// A restart converges once no centroid moves farther than this
    pub const CONVERGENCE_THRESHOLD: f32 = 1.0;

    /// Number of restarts; the lowest-distortion converged run wins
    pub const RESTARTS: usize = 3;
}

/// Display-bound resize targets
pub mod display {
    /// Maximum working width in pixels
    pub const MAX_WIDTH: f64 = 1920.0 / 1.3;

    /// Maximum working height in pixels
    pub const MAX_HEIGHT: f64 = 1080.0 / 1.3;
}

/// Palette strip rendering parameters
pub mod render {
    /// Margin in pixels around each palette swatch
    pub const SWATCH_MARGIN: usize = 15;
}
