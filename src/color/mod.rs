//! Color conversion and color table utilities

pub mod conversion;
pub mod table;

pub use conversion::{euclidean_distance, manhattan_distance, ColorConverter};
pub use table::ColorTable;
