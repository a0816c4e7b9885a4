// SPDX-License-Identifier: MIT
//
// Adjustments that edit one HSL component (or RGB for tint/shade/invert)
// and leave everything else alone. Every operation clips the channel it
// touches; hue always wraps.

use crate::color::Color;
use crate::error::{ColorError, Result};
use crate::mix::ColorSpace;
use crate::space::Hsl;

/// How [`Color::grayscale`] computes the lightness of the gray it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GrayscaleMode {
    /// Rec. 601 luma: `0.299 r + 0.587 g + 0.114 b`.
    Luminance,
    /// HSL lightness: midpoint of the largest and smallest channel.
    #[default]
    Lightness,
    /// Plain mean of the three channels.
    Average,
    /// HSB value: the largest channel.
    Value,
}

impl GrayscaleMode {
    /// Lowercase name, as accepted by [`from_name`](Self::from_name).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Luminance => "luminance",
            Self::Lightness => "lightness",
            Self::Average => "average",
            Self::Value => "value",
        }
    }

    /// Parse a mode from its name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnknownName`] for anything else.
    pub fn from_name(name: &str) -> Result<Self> {
        let lower = name.to_lowercase();
        Self::all()
            .iter()
            .find(|m| m.name() == lower)
            .copied()
            .ok_or_else(|| ColorError::unknown("grayscale mode", name))
    }

    /// All grayscale modes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Luminance, Self::Lightness, Self::Average, Self::Value]
    }
}

impl Color {
    /// Replace the HSL representation, keeping alpha.
    fn map_hsl(self, f: impl FnOnce(Hsl) -> Hsl) -> Self {
        Self::from_hsl(f(self.to_hsl()), self.a)
    }

    /// Increase HSL lightness by `amount` (clipped to 0.0–1.0).
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        self.map_hsl(|hsl| Hsl {
            l: (hsl.l + amount).clamp(0.0, 1.0),
            ..hsl
        })
    }

    /// Decrease HSL lightness by `amount` (clipped to 0.0–1.0).
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        self.lighten(-amount)
    }

    /// Increase HSL saturation by `amount` (clipped to 0.0–1.0).
    #[must_use]
    pub fn saturate(self, amount: f64) -> Self {
        self.map_hsl(|hsl| Hsl {
            s: (hsl.s + amount).clamp(0.0, 1.0),
            ..hsl
        })
    }

    /// Decrease HSL saturation by `amount` (clipped to 0.0–1.0).
    #[must_use]
    pub fn desaturate(self, amount: f64) -> Self {
        self.saturate(-amount)
    }

    /// Rotate the hue by `degrees` (wraps around 360°).
    #[must_use]
    pub fn adjust_hue(self, degrees: f64) -> Self {
        self.map_hsl(|hsl| Hsl {
            h: hsl.h + degrees / 360.0,
            ..hsl
        })
    }

    /// The complementary color (hue rotated 180°).
    #[must_use]
    pub fn complement(self) -> Self {
        self.adjust_hue(180.0)
    }

    /// Invert each color channel (`1 - c`); alpha is kept.
    #[must_use]
    pub fn invert(self) -> Self {
        Self {
            r: 1.0 - self.r,
            g: 1.0 - self.g,
            b: 1.0 - self.b,
            a: self.a,
        }
    }

    /// Mix toward white by `amount` in RGB.
    #[must_use]
    pub fn tint(self, amount: f64) -> Self {
        self.mix(&Self::WHITE.with_alpha(self.a), amount, ColorSpace::Rgb)
    }

    /// Mix toward black by `amount` in RGB.
    #[must_use]
    pub fn shade(self, amount: f64) -> Self {
        self.mix(&Self::BLACK.with_alpha(self.a), amount, ColorSpace::Rgb)
    }

    /// Add `amount` to alpha (clipped to 0.0–1.0).
    #[must_use]
    pub const fn adjust_alpha(self, amount: f64) -> Self {
        self.with_alpha((self.a + amount).clamp(0.0, 1.0))
    }

    /// A fully desaturated color whose HSL lightness is computed by `mode`.
    #[must_use]
    pub fn grayscale(self, mode: GrayscaleMode) -> Self {
        let (max, min) = self.max_min();
        let l = match mode {
            GrayscaleMode::Luminance => {
                0.114f64.mul_add(self.b, 0.299f64.mul_add(self.r, 0.587 * self.g))
            }
            GrayscaleMode::Lightness => 0.5 * (max + min),
            GrayscaleMode::Average => (self.r + self.g + self.b) / 3.0,
            GrayscaleMode::Value => max,
        };
        Self::from_hsl(Hsl { h: 0.0, s: 0.0, l }, self.a)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Lightness ────────────────────────────────────────────────────────

    #[test]
    fn lighten_increases_lightness() {
        let color = Color::hsl(90.0, 0.5, 0.5);
        let lighter = color.lighten(0.2).to_hsl();
        assert!(approx_eq(lighter.l, 0.7, 1e-9));
        assert!(approx_eq(lighter.s, 0.5, 1e-9)); // Saturation unchanged
        assert!(approx_eq(lighter.h * 360.0, 90.0, 1e-9)); // Hue unchanged
    }

    #[test]
    fn darken_decreases_lightness() {
        let darker = Color::hsl(90.0, 0.5, 0.5).darken(0.3).to_hsl();
        assert!(approx_eq(darker.l, 0.2, 1e-9));
    }

    #[test]
    fn lighten_clamps_to_white() {
        assert_eq!(Color::hsl(90.0, 0.5, 0.9).lighten(0.5), Color::WHITE);
    }

    #[test]
    fn darken_clamps_to_black() {
        assert_eq!(Color::hsl(90.0, 0.5, 0.1).darken(0.5), Color::BLACK);
    }

    // ── Saturation ───────────────────────────────────────────────────────

    #[test]
    fn saturate_and_desaturate() {
        let color = Color::hsl(200.0, 0.5, 0.5);
        assert!(approx_eq(color.saturate(0.25).to_hsl().s, 0.75, 1e-9));
        assert!(approx_eq(color.desaturate(0.25).to_hsl().s, 0.25, 1e-9));
    }

    #[test]
    fn desaturate_clamps_to_gray() {
        let gray = Color::hsl(200.0, 0.3, 0.5).desaturate(1.0);
        assert_eq!(gray, Color::gray(0.5));
    }

    // ── Hue ──────────────────────────────────────────────────────────────

    #[test]
    fn adjust_hue_wraps() {
        let shifted = Color::hsl(350.0, 1.0, 0.5).adjust_hue(30.0).to_hsl();
        assert!(approx_eq(shifted.h * 360.0, 20.0, 1e-9));
    }

    #[test]
    fn adjust_hue_negative_wraps() {
        let shifted = Color::hsl(10.0, 1.0, 0.5).adjust_hue(-30.0).to_hsl();
        assert!(approx_eq(shifted.h * 360.0, 340.0, 1e-9));
    }

    #[test]
    fn complement_is_180_degrees() {
        let comp = Color::rgb(1.0, 0.0, 0.0).complement();
        assert_eq!(comp, Color::rgb(0.0, 1.0, 1.0));
    }

    // ── RGB Adjustments ──────────────────────────────────────────────────

    #[test]
    fn invert_keeps_alpha() {
        let c = Color::rgba(0.2, 0.4, 1.0, 0.5).invert();
        assert_eq!(c, Color::rgba(0.8, 0.6, 0.0, 0.5));
    }

    #[test]
    fn tint_and_shade() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        assert_eq!(red.tint(0.5), Color::rgb(1.0, 0.5, 0.5));
        assert_eq!(red.shade(0.5), Color::rgb(0.5, 0.0, 0.0));
        assert_eq!(red.tint(0.0), red);
    }

    #[test]
    fn adjust_alpha_clips() {
        assert!(approx_eq(Color::BLACK.adjust_alpha(-0.25).a, 0.75, 1e-12));
        assert!(approx_eq(Color::BLACK.adjust_alpha(0.5).a, 1.0, 1e-12));
        assert!(approx_eq(Color::TRANSPARENT.adjust_alpha(-1.0).a, 0.0, 1e-12));
    }

    // ── Grayscale ────────────────────────────────────────────────────────

    #[test]
    fn grayscale_modes() {
        let c = Color::rgba(0.9, 0.3, 0.0, 0.5);
        let lum = c.grayscale(GrayscaleMode::Luminance);
        assert!(approx_eq(lum.r, 0.299 * 0.9 + 0.587 * 0.3, 1e-9));
        assert_eq!(c.grayscale(GrayscaleMode::Lightness), Color::rgba(0.45, 0.45, 0.45, 0.5));
        assert_eq!(c.grayscale(GrayscaleMode::Average), Color::rgba(0.4, 0.4, 0.4, 0.5));
        assert_eq!(c.grayscale(GrayscaleMode::Value), Color::rgba(0.9, 0.9, 0.9, 0.5));
    }

    #[test]
    fn grayscale_is_fully_desaturated() {
        for &mode in GrayscaleMode::all() {
            let gray = Color::rgb(0.1, 0.7, 0.4).grayscale(mode);
            assert!(approx_eq(gray.to_hsl().s, 0.0, 1e-12), "{mode:?}");
        }
    }

    #[test]
    fn grayscale_mode_names_roundtrip() {
        for &mode in GrayscaleMode::all() {
            assert_eq!(GrayscaleMode::from_name(mode.name()), Ok(mode));
        }
        assert_eq!(GrayscaleMode::from_name("VALUE"), Ok(GrayscaleMode::Value));
        assert!(GrayscaleMode::from_name("sepia").is_err());
    }
}
