// SPDX-License-Identifier: MIT
//
// Color space conversions.
//
// Pipeline:
//
//   HSL ┐                        ┌ Lab
//       ├── Color (sRGB) ── linear sRGB ── XYZ ┘
//   HSB ┘
//
// HSL and HSB are cylindrical re-parameterizations of sRGB and need no
// gamma handling. The XYZ leg linearizes with the sRGB transfer function
// and uses the sRGB/D65 primaries. XYZ is scaled to the 0–100 range with
// white at (95.05, 100, 108.9), and Lab L runs 0–100.
//
// Intermediate XYZ and Lab values are rounded to three decimals, and the
// reconstructed sRGB channels are rounded the same way, so that repeated
// round trips settle instead of drifting in the last bits.

use crate::color::Color;

// ─── Space Value Types ───────────────────────────────────────────────────────

/// Hue / saturation / lightness. `h` is normalized to [0, 1); multiply by
/// 360 for degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Hue / saturation / brightness (a.k.a. HSV). `h` is normalized to [0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub h: f64,
    pub s: f64,
    pub b: f64,
}

/// CIE 1931 XYZ, scaled so the D65 white point is (95.05, 100, 108.9).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIE L\*a\*b\*. `l` in 0–100, `a`/`b` roughly −128..127.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// D65 reference white, scaled to Y = 100.
const WHITE_X: f64 = 95.05;
const WHITE_Y: f64 = 100.0;
const WHITE_Z: f64 = 108.9;

/// Lab linear-segment threshold, (6/29)^3 rounded.
const LAB_EPSILON: f64 = 0.008_856;
const LAB_KAPPA: f64 = 7.787;
const LAB_OFFSET: f64 = 16.0 / 116.0;

impl Color {
    // ─── HSL ─────────────────────────────────────────────────────────────

    /// Create an opaque color from HSL with the hue in degrees.
    ///
    /// The hue wraps modulo 360; saturation and lightness are clipped to
    /// [0, 1].
    #[must_use]
    pub fn hsl(hue_degrees: f64, s: f64, l: f64) -> Self {
        Self::from_hsl(
            Hsl {
                h: hue_degrees / 360.0,
                s,
                l,
            },
            1.0,
        )
    }

    /// Create a color from normalized HSL components.
    #[must_use]
    pub fn from_hsl(hsl: Hsl, alpha: f64) -> Self {
        let h = normalize_unit_hue(hsl.h);
        let s = hsl.s.clamp(0.0, 1.0);
        let l = hsl.l.clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::rgba(l, l, l, alpha);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { s.mul_add(-l, l + s) };
        let p = 2.0f64.mul_add(l, -q);

        Self::rgba(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
            alpha,
        )
    }

    /// Decompose into normalized HSL. Achromatic colors report hue 0 and
    /// saturation 0.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (max, min) = self.max_min();
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        Hsl {
            h: self.unit_hue(max, delta),
            s,
            l,
        }
    }

    // ─── HSB ─────────────────────────────────────────────────────────────

    /// Create a color from normalized HSB components. Saturation and
    /// brightness are clipped to [0, 1].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_hsb(hsb: Hsb, alpha: f64) -> Self {
        let h = normalize_unit_hue(hsb.h) * 6.0;
        let s = hsb.s.clamp(0.0, 1.0);
        let v = hsb.b.clamp(0.0, 1.0);

        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * f.mul_add(-s, 1.0);
        let t = v * (1.0 - f).mul_add(-s, 1.0);

        // `h` is in [0, 6), so the sector index is 0..=5.
        let (r, g, b) = match sector as i64 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::rgba(r, g, b, alpha)
    }

    /// Decompose into normalized HSB. Pure black and pure white
    /// short-circuit to (0, 0, 0) and (0, 0, 1).
    #[must_use]
    pub fn to_hsb(self) -> Hsb {
        if self.r == 0.0 && self.g == 0.0 && self.b == 0.0 {
            return Hsb {
                h: 0.0,
                s: 0.0,
                b: 0.0,
            };
        }
        if self.r == 1.0 && self.g == 1.0 && self.b == 1.0 {
            return Hsb {
                h: 0.0,
                s: 0.0,
                b: 1.0,
            };
        }

        let (max, min) = self.max_min();
        let delta = max - min;
        let s = if max == 0.0 { 0.0 } else { delta / max };
        let h = if delta == 0.0 { 0.0 } else { self.unit_hue(max, delta) };

        Hsb { h, s, b: max }
    }

    /// Shared hue computation for HSL and HSB, normalized to [0, 1).
    fn unit_hue(self, max: f64, delta: f64) -> f64 {
        let h = if max == self.r {
            (self.g - self.b) / delta + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };
        normalize_unit_hue(h / 6.0)
    }

    // ─── XYZ ─────────────────────────────────────────────────────────────

    /// Convert to CIE XYZ (D65, 0–100 scale), rounded to three decimals.
    #[must_use]
    pub fn to_xyz(self) -> Xyz {
        let r = srgb_to_linear(self.r);
        let g = srgb_to_linear(self.g);
        let b = srgb_to_linear(self.b);

        Xyz {
            x: round3(0.1805f64.mul_add(b, 0.4124f64.mul_add(r, 0.3576 * g)) * 100.0),
            y: round3(0.0722f64.mul_add(b, 0.2126f64.mul_add(r, 0.7152 * g)) * 100.0),
            z: round3(0.9505f64.mul_add(b, 0.0193f64.mul_add(r, 0.1192 * g)) * 100.0),
        }
    }

    /// Create a color from CIE XYZ (D65, 0–100 scale).
    ///
    /// Inputs are clipped to the white point's extent. Each reconstructed
    /// channel is rounded to three decimals and then made non-negative with
    /// `abs()`, which also folds genuinely out-of-gamut negatives back into
    /// range rather than clamping them to zero.
    #[must_use]
    pub fn from_xyz(xyz: Xyz, alpha: f64) -> Self {
        let x = xyz.x.clamp(0.0, WHITE_X) / 100.0;
        let y = xyz.y.clamp(0.0, WHITE_Y) / 100.0;
        let z = xyz.z.clamp(0.0, WHITE_Z) / 100.0;

        let r = (-0.4986f64).mul_add(z, 3.2406f64.mul_add(x, -1.5372 * y));
        let g = 0.0415f64.mul_add(z, (-0.9689f64).mul_add(x, 1.8758 * y));
        let b = 1.0570f64.mul_add(z, 0.0557f64.mul_add(x, -0.2040 * y));

        let to_channel = |c: f64| round3(linear_to_srgb(c)).abs();
        Self::rgba(to_channel(r), to_channel(g), to_channel(b), alpha)
    }

    // ─── Lab ─────────────────────────────────────────────────────────────

    /// Convert to CIE Lab via XYZ, rounded to three decimals.
    #[must_use]
    pub fn to_lab(self) -> Lab {
        let xyz = self.to_xyz();
        let fx = lab_f(xyz.x / WHITE_X);
        let fy = lab_f(xyz.y / WHITE_Y);
        let fz = lab_f(xyz.z / WHITE_Z);

        Lab {
            l: round3(116.0f64.mul_add(fy, -16.0)),
            a: round3(500.0 * (fx - fy)),
            b: round3(200.0 * (fy - fz)),
        }
    }

    /// Create a color from CIE Lab. `L` is clipped to 0–100.
    #[must_use]
    pub fn from_lab(lab: Lab, alpha: f64) -> Self {
        let fy = (lab.l.clamp(0.0, 100.0) + 16.0) / 116.0;
        let fx = lab.a / 500.0 + fy;
        let fz = fy - lab.b / 200.0;

        Self::from_xyz(
            Xyz {
                x: lab_f_inv(fx) * WHITE_X,
                y: lab_f_inv(fy) * WHITE_Y,
                z: lab_f_inv(fz) * WHITE_Z,
            },
            alpha,
        )
    }
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Convert a single sRGB component to linear light (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c > 0.040_45 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// Convert a single linear-light component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c > 0.003_130_8 {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    } else {
        c * 12.92
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Wrap a normalized hue into [0, 1).
#[inline]
pub(crate) fn normalize_unit_hue(h: f64) -> f64 {
    let h = h.rem_euclid(1.0);
    // rem_euclid can return exactly 1.0 for tiny negative inputs.
    if h >= 1.0 { 0.0 } else { h }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA.mul_add(t, LAB_OFFSET)
    }
}

#[inline]
fn lab_f_inv(t: f64) -> f64 {
    let cubed = t * t * t;
    if cubed > LAB_EPSILON {
        cubed
    } else {
        (t - LAB_OFFSET) / LAB_KAPPA
    }
}

/// Round half away from zero to three decimal places.
#[inline]
fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

// ─── Tests ───────────────────────────────────────────────────────────────────
