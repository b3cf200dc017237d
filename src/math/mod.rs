pub mod color_parse;
pub mod hex;
pub mod luminance;

/// A color split into channels on the 0-255 scale.
///
/// Channels are `f64` because functional colors may carry fractional or
/// out-of-range components that still feed the luminance formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64, g as f64, b as f64)
    }
}
