//! Box color parsing and formatting.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use rand::Rng;

use crate::consts::RANDOM_COLOR_LIMIT;

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` integer.
    #[must_use]
    pub fn from_u32(packed: u32) -> Self {
        let [_, r, g, b] = packed.to_be_bytes();
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB` values.
    #[must_use]
    pub fn parse_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16);
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16);
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16);
                match (r, g, b) {
                    (Ok(r), Ok(g), Ok(b)) => Some(Self { r, g, b }),
                    _ => None,
                }
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16);
                let g = u8::from_str_radix(&hex[2..4], 16);
                let b = u8::from_str_radix(&hex[4..6], 16);
                match (r, g, b) {
                    (Ok(r), Ok(g), Ok(b)) => Some(Self { r, g, b }),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// A random color in `0..RANDOM_COLOR_LIMIT`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_u32(rng.random_range(0..RANDOM_COLOR_LIMIT))
    }

    /// Canonical lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgba()` string with the given alpha.
    #[must_use]
    pub fn to_css_rgba(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, alpha.clamp(0.0, 1.0))
    }

    /// Scale each channel by `factor` (clamped to `0..=1`), for flat face shading.
    #[must_use]
    pub fn shaded(self, factor: f64) -> Self {
        let f = factor.clamp(0.0, 1.0);
        let scale = |c: u8| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let v = (f64::from(c) * f).round() as u8;
            v
        };
        Self { r: scale(self.r), g: scale(self.g), b: scale(self.b) }
    }
}
