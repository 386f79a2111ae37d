//! # Palette Swap
//!
//! A Rust crate for clustering the colors of an image and recoloring it
//! cluster by cluster.
//!
//! This library provides palette-driven image editing by:
//! - Partitioning pixels with one of three clustering strategies
//!   (fixed BGR grid, hue bins, or k-means)
//! - Ranking clusters by pixel count into a dominant palette
//! - Recoloring individual clusters with an additive channel shift or a
//!   hue overwrite
//! - Rendering a preview of the image with its palette strip
//!
//! ## Example
//!
//! ```rust,no_run
//! use palette_swap::{extract_palette_from_path, ProcessorConfig};
//! use std::path::Path;
//!
//! let config = ProcessorConfig::default();
//! let palette = extract_palette_from_path(Path::new("photo.jpg"), &config)?;
//! for entry in palette {
//!     println!("cluster {}: {:?} ({} px)", entry.cluster_id, entry.color, entry.count);
//! }
//! # Ok::<(), palette_swap::PaletteError>(())
//! ```
//!
//! For recoloring, drive an [`ImageProcessor`] directly:
//!
//! ```rust,no_run
//! use palette_swap::{image_loader, ImageProcessor, Pixel};
//! use std::path::Path;
//!
//! let mut image = image_loader::load_image(Path::new("photo.jpg"))?;
//! let mut processor = ImageProcessor::with_defaults();
//! processor.process_image(&image)?;
//! processor.hue_shift(&mut image, Pixel::new(0, 0, 255), Pixel::new(0, 255, 0))?;
//! image_loader::save_image(&image, Path::new("recolored.jpg"))?;
//! # Ok::<(), palette_swap::PaletteError>(())
//! ```

use std::path::Path;

pub mod cluster;
pub mod color;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod image_loader;
pub mod palette;
pub mod palette_render;
pub mod processor;
pub mod types;

pub use cluster::{Clusterer, GridClusterer, HueGridClusterer, KMeansClusterer};
pub use color::{ColorConverter, ColorTable};
pub use config::{ClusterConfig, KmeansFeatureSpace, ProcessorConfig};
pub use editor::ColorEditor;
pub use error::{PaletteError, Result};
pub use palette::{PaletteEntry, PaletteExtractor};
pub use palette_render::render_palette_strip;
pub use processor::{EditKind, ImageProcessor};
pub use types::{ImageBuffer, LabelMap, Pixel};

/// Extract the dominant palette of an image file.
///
/// Loads the image, clusters it with the configured strategy, and
/// returns the ranked palette.
///
/// # Arguments
///
/// * `path` - Path to the image file
/// * `config` - Clustering strategy and palette size
///
/// # Errors
///
/// Returns `PaletteError` if:
/// - The image cannot be loaded or decoded
/// - The configured strategy parameters are invalid
/// - K-means finds fewer distinct colors than requested clusters
pub fn extract_palette_from_path(
    path: &Path,
    config: &ProcessorConfig,
) -> Result<Vec<PaletteEntry>> {
    let image = image_loader::load_image(path)?;
    let mut processor = ImageProcessor::new(config.clone());
    processor.process_image(&image)?;
    processor.extract_palette()
}
