// SPDX-License-Identifier: MIT
//
// Interpolation between two colors in a chosen space.
//
// Each component is linearly interpolated by `weight`. Alpha is always
// interpolated directly, whatever the space. In the hue-bearing spaces
// (HSL, HSB) the hue travels along the shorter arc of the color wheel, and
// an achromatic endpoint borrows the other endpoint's hue so that mixing
// toward gray never sweeps through unrelated hues.

use crate::color::Color;
use crate::error::{ColorError, Result};
use crate::space::{Hsb, Hsl, Lab, normalize_unit_hue};

/// The space in which [`Color::mix`] interpolates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSpace {
    /// Straight RGB channels.
    #[default]
    Rgb,
    /// Hue / saturation / lightness.
    Hsl,
    /// Hue / saturation / brightness.
    Hsb,
    /// CIE L\*a\*b\* (perceptually even steps).
    Lab,
}

impl ColorSpace {
    /// Lowercase name, as accepted by [`from_name`](Self::from_name).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsb => "hsb",
            Self::Lab => "lab",
        }
    }

    /// Parse a space from its name (case-insensitive). `hsv` is accepted as
    /// an alias for `hsb`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnknownName`] for anything else.
    pub fn from_name(name: &str) -> Result<Self> {
        let lower = name.to_lowercase();
        if lower == "hsv" {
            return Ok(Self::Hsb);
        }
        Self::all()
            .iter()
            .find(|s| s.name() == lower)
            .copied()
            .ok_or_else(|| ColorError::unknown("color space", name))
    }

    /// All supported spaces.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Rgb, Self::Hsl, Self::Hsb, Self::Lab]
    }
}

impl Color {
    /// Mix this color with another in the given space.
    ///
    /// `weight` is clipped to [0, 1]; 0.0 returns `self` and 1.0 returns
    /// `other` exactly. A NaN weight counts as 0.0.
    #[must_use]
    pub fn mix(self, other: &Self, weight: f64, space: ColorSpace) -> Self {
        let t = weight.clamp(0.0, 1.0);
        if weight.is_nan() || t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return *other;
        }

        let alpha = lerp(self.a, other.a, t);

        match space {
            ColorSpace::Rgb => Self::rgba(
                lerp(self.r, other.r, t),
                lerp(self.g, other.g, t),
                lerp(self.b, other.b, t),
                alpha,
            ),
            ColorSpace::Hsl => {
                let (c1, c2) = (self.to_hsl(), other.to_hsl());
                let h = interpolate_hue((c1.h, c1.s), (c2.h, c2.s), t);
                Self::from_hsl(
                    Hsl {
                        h,
                        s: lerp(c1.s, c2.s, t),
                        l: lerp(c1.l, c2.l, t),
                    },
                    alpha,
                )
            }
            ColorSpace::Hsb => {
                let (c1, c2) = (self.to_hsb(), other.to_hsb());
                let h = interpolate_hue((c1.h, c1.s), (c2.h, c2.s), t);
                Self::from_hsb(
                    Hsb {
                        h,
                        s: lerp(c1.s, c2.s, t),
                        b: lerp(c1.b, c2.b, t),
                    },
                    alpha,
                )
            }
            ColorSpace::Lab => {
                let (c1, c2) = (self.to_lab(), other.to_lab());
                Self::from_lab(
                    Lab {
                        l: lerp(c1.l, c2.l, t),
                        a: lerp(c1.a, c2.a, t),
                        b: lerp(c1.b, c2.b, t),
                    },
                    alpha,
                )
            }
        }
    }
}

/// Free-function form of [`Color::mix`].
#[must_use]
pub fn mix(a: Color, b: Color, weight: f64, space: ColorSpace) -> Color {
    a.mix(&b, weight, space)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a).mul_add(t, a)
}

/// Interpolate two normalized hues along the shorter arc.
///
/// Each endpoint is `(hue, saturation)`; a zero-saturation endpoint has no
/// meaningful hue and takes the other's.
fn interpolate_hue((h1, s1): (f64, f64), (h2, s2): (f64, f64), t: f64) -> f64 {
    let (h1, h2) = match (s1 == 0.0, s2 == 0.0) {
        (true, false) => (h2, h2),
        (false, true) => (h1, h1),
        _ => (h1, h2),
    };

    let diff = h2 - h1;
    let diff = if diff > 0.5 {
        diff - 1.0
    } else if diff < -0.5 {
        diff + 1.0
    } else {
        diff
    };
    normalize_unit_hue(diff.mul_add(t, h1))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
