//! Pressure- and fade-driven colors handed to the renderer.

use crate::math::{clamp01, ease_in_out_cubic};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise linear blend, rounded to the nearest integer.
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let t = clamp01(t);
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

/// CSS `rgb(r,g,b)` notation.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub base: Rgb,
    pub highlight: Rgb,
    pub fade: Rgb,
    pub threshold: f32,
}

impl Palette {
    /// Brightens from `base` to `highlight` over the first half of the threshold.
    pub fn background(&self, pressure: f32) -> Rgb {
        let half = self.threshold / 2.0;
        self.base.mix(self.highlight, clamp01(pressure / half))
    }

    /// Darkens from `highlight` to `base` over the second half, then eases to the fade color.
    pub fn fill(&self, pressure: f32, fade_progress: f32) -> Rgb {
        let half = self.threshold / 2.0;
        let scrolled = self.highlight.mix(self.base, clamp01((pressure - half) / half));
        scrolled.mix(self.fade, ease_in_out_cubic(clamp01(fade_progress)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: Palette = Palette {
        base: Rgb::new(139, 154, 191),
        highlight: Rgb::new(255, 255, 255),
        fade: Rgb::new(255, 255, 255),
        threshold: 0.9,
    };

    #[test]
    fn background_brightens_then_holds() {
        assert_eq!(PALETTE.background(0.0), PALETTE.base);
        assert_eq!(PALETTE.background(0.45), PALETTE.highlight);
        assert_eq!(PALETTE.background(1.0), PALETTE.highlight);
    }

    #[test]
    fn fill_darkens_in_second_half_and_fades_out() {
        assert_eq!(PALETTE.fill(0.2, 0.0), PALETTE.highlight);
        assert_eq!(PALETTE.fill(0.9, 0.0), PALETTE.base);
        assert_eq!(PALETTE.fill(0.9, 1.0), PALETTE.fade);
    }

    #[test]
    fn css_notation() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "rgb(1,2,3)");
    }
}
