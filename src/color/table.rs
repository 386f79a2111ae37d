//! Color table: cluster id to representative color mapping
//!
//! A [`ColorTable`] names the analytic bin centers used by the grid and
//! hue clustering strategies. Entries are keyed directly by integer
//! cluster id (the table is a dense Vec indexed by id), with generated
//! hex strings available as display names. Because the bin-midpoint
//! math here is shared with the clusterers, table ids line up 1:1 with
//! the cluster ids in a label map produced with the same parameters.

use crate::color::conversion::{manhattan_distance, ColorConverter};
use crate::constants::{channel, hue};
use crate::error::{PaletteError, Result};
use crate::types::Pixel;

/// Analytic center of a full-channel grid bin.
///
/// Decodes `id` into per-channel bin indices (blue most significant)
/// and returns the BGR midpoint of that bin. Truncating casts match the
/// integer arithmetic the cluster ids were derived with.
pub(crate) fn grid_bin_center(id: usize, grid_size: u32) -> Pixel {
    let g = grid_size as usize;
    let g2 = g * g;
    let bin_size = channel::RANGE / f64::from(grid_size);
    let half = (bin_size / 2.0) as usize;

    let cr = (id % g2) % g;
    let cg = (id % g2) / g;
    let cb = id / g2;

    let r = (cr as f64 * bin_size) as usize + half;
    let g = (cg as f64 * bin_size) as usize + half;
    let b = (cb as f64 * bin_size) as usize + half;
    Pixel::new(b as u8, g as u8, r as u8)
}

/// Analytic hue midpoint of a hue bin, in [0, 180]
pub(crate) fn hue_bin_center(id: usize, bins: u32) -> u8 {
    let bin_size = hue::RANGE / f64::from(bins);
    let half = (bin_size / 2.0) as usize;
    ((id as f64 * bin_size) as usize + half) as u8
}

/// Table entry: a representative BGR color plus a display name
#[derive(Debug, Clone, PartialEq, Eq)]
struct TableEntry {
    color: Pixel,
    name: String,
}

/// Mapping from cluster ids to representative BGR colors
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    entries: Vec<TableEntry>,
}

impl ColorTable {
    /// Generate a table of full-channel grid bin midpoints.
    ///
    /// Entry `i` is the BGR midpoint of grid bin `i`; the table has
    /// `grid_size^3` entries.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `grid_size` is zero.
    pub fn generate_grid(grid_size: u32) -> Result<Self> {
        if grid_size == 0 {
            return Err(PaletteError::invalid_argument("grid_size", grid_size));
        }

        let count = (grid_size as usize).pow(3);
        let entries = (0..count)
            .map(|id| {
                let color = grid_bin_center(id, grid_size);
                TableEntry {
                    name: Self::hex_name(color),
                    color,
                }
            })
            .collect();
        Ok(Self { entries })
    }

    /// Generate a table of hue bin midpoints.
    ///
    /// Entry `i` is the hue midpoint of bin `i` back-converted to BGR
    /// with saturation and value held at maximum, so each entry is a
    /// vivid representative swatch.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `bins` is zero.
    pub fn generate_hue(bins: u32) -> Result<Self> {
        if bins == 0 {
            return Err(PaletteError::invalid_argument("bins", bins));
        }

        let converter = ColorConverter::new();
        let entries = (0..bins as usize)
            .map(|id| {
                let center = hue_bin_center(id, bins);
                let color = converter.hsv_to_bgr(Pixel::new(center, channel::MAX, channel::MAX));
                TableEntry {
                    name: Self::hex_name(color),
                    color,
                }
            })
            .collect();
        Ok(Self { entries })
    }

    /// Id of the entry nearest to `color` by Manhattan distance.
    ///
    /// Entries are scanned in ascending id order, so ties resolve to
    /// the lowest id. Returns `None` for an empty table.
    pub fn look_up(&self, color: Pixel) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .min_by_key(|(_, entry)| manhattan_distance(color, entry.color))
            .map(|(id, _)| id)
    }

    /// Representative BGR color of entry `id`
    pub fn resolve(&self, id: usize) -> Option<Pixel> {
        self.entries.get(id).map(|entry| entry.color)
    }

    /// Display name of entry `id` (hex color string)
    pub fn name(&self, id: usize) -> Option<&str> {
        self.entries.get(id).map(|entry| entry.name.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Representative colors in id order
    pub fn colors(&self) -> Vec<Pixel> {
        self.entries.iter().map(|entry| entry.color).collect()
    }

    /// Hex display name for a BGR color, e.g. "#3FA0C8"
    pub fn hex_name(bgr: Pixel) -> String {
        let [b, g, r] = bgr.channels();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}
