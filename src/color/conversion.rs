//! Color space conversion utilities
//!
//! Provides BGR ↔ HSV conversion in the 8-bit channel conventions the
//! clustering pipeline uses: BGR channels in [0, 255] and hue in
//! [0, 180) (degrees halved), with saturation and value rescaled to
//! [0, 255]. The underlying color math comes from the `palette` crate;
//! this module only handles channel ordering and range scaling.

use crate::constants::hue;
use crate::types::Pixel;
use palette::{FromColor, Hsv, Srgb};

/// Converter between BGR and HSV pixel representations
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new color converter
    pub fn new() -> Self {
        Self
    }

    /// Convert a BGR pixel to HSV.
    ///
    /// # Arguments
    ///
    /// * `bgr` - Pixel with channels (blue, green, red) in [0, 255]
    ///
    /// # Returns
    ///
    /// Pixel with channels (hue, saturation, value); hue in [0, 180),
    /// saturation and value in [0, 255]
    pub fn bgr_to_hsv(&self, bgr: Pixel) -> Pixel {
        let [b, g, r] = bgr.channels();
        let srgb = Srgb::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        );
        let hsv = Hsv::from_color(srgb);

        let h = hsv.hue.into_positive_degrees() / 2.0;
        let h = (h.round() as u16 % u16::from(hue::MAX)) as u8;
        let s = (hsv.saturation * 255.0).round() as u8;
        let v = (hsv.value * 255.0).round() as u8;
        Pixel::new(h, s, v)
    }

    /// Convert an HSV pixel back to BGR.
    ///
    /// # Arguments
    ///
    /// * `hsv` - Pixel with channels (hue, saturation, value); hue in
    ///   [0, 180], saturation and value in [0, 255]
    ///
    /// # Returns
    ///
    /// Pixel with channels (blue, green, red) in [0, 255]
    pub fn hsv_to_bgr(&self, hsv: Pixel) -> Pixel {
        let [h, s, v] = hsv.channels();
        let hsv = Hsv::new(
            f32::from(h) * 2.0,
            f32::from(s) / 255.0,
            f32::from(v) / 255.0,
        );
        let srgb = Srgb::from_color(hsv);

        let r = (srgb.red * 255.0).round() as u8;
        let g = (srgb.green * 255.0).round() as u8;
        let b = (srgb.blue * 255.0).round() as u8;
        Pixel::new(b, g, r)
    }

    /// Hue channel of a BGR pixel, in [0, 180)
    pub fn hue_of(&self, bgr: Pixel) -> u8 {
        self.bgr_to_hsv(bgr)[0]
    }
}

/// Euclidean distance between two pixels over their three channels
pub fn euclidean_distance(a: Pixel, b: Pixel) -> f64 {
    let mut sum = 0.0;
    for c in 0..3 {
        let d = f64::from(a[c]) - f64::from(b[c]);
        sum += d * d;
    }
    sum.sqrt()
}

/// Manhattan distance between two pixels over their three channels
pub fn manhattan_distance(a: Pixel, b: Pixel) -> u32 {
    (0..3)
        .map(|c| u32::from(a[c].abs_diff(b[c])))
        .sum()
}
