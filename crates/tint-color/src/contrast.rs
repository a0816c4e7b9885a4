// SPDX-License-Identifier: MIT

//! WCAG luminance and contrast, plus the readability helpers the log
//! viewer uses to keep text legible on tinted rows.
//!
//! - Relative luminance follows WCAG 2.1 on gamma-decoded channels.
//! - Contrast ratio is `(L_lighter + 0.05) / (L_darker + 0.05)`, in [1, 21].
//! - Readability adjustments search in HSL lightness, which keeps the hue
//!   and saturation of the original color.

use crate::color::Color;
use crate::space::Hsl;

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Channels are clipped to [0, 1], linearized with the WCAG transfer
/// function, and weighted:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let c = color.clipped();
    let r_lin = wcag_linear(c.r);
    let g_lin = wcag_linear(c.g);
    let b_lin = wcag_linear(c.b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether a color reads as light, by Rec. 601 perceived brightness.
#[must_use]
pub fn is_light(color: Color) -> bool {
    let c = color.clipped();
    0.114f64.mul_add(c.b, 0.299f64.mul_add(c.r, 0.587 * c.g)) >= 0.5
}

/// Black or white, whichever contrasts more with `background`.
#[must_use]
pub fn readable_text_color(background: Color) -> Color {
    if contrast_ratio(Color::BLACK, background) >= contrast_ratio(Color::WHITE, background) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// Adjust `fg`'s HSL lightness until it reaches `min_ratio` contrast
/// against `bg`.
///
/// Moves toward whichever end (white or black) contrasts more with `bg`,
/// and returns the candidate closest to the original lightness that meets
/// the ratio. When even the extreme cannot meet it, the extreme is returned.
#[must_use]
pub fn ensure_contrast(fg: Color, bg: Color, min_ratio: f64) -> Color {
    if contrast_ratio(fg, bg) >= min_ratio {
        return fg;
    }

    let hsl = fg.to_hsl();
    let lighten = contrast_ratio(Color::WHITE, bg) >= contrast_ratio(Color::BLACK, bg);
    let with_l = |l: f64| Color::from_hsl(Hsl { l, ..hsl }, fg.a);

    let (mut lo, mut hi) = if lighten { (hsl.l, 1.0) } else { (0.0, hsl.l) };
    let mut best = with_l(if lighten { 1.0 } else { 0.0 });

    for _ in 0..32 {
        let mid = (lo + hi) * 0.5;
        let candidate = with_l(mid);
        if contrast_ratio(candidate, bg) >= min_ratio {
            best = candidate;
            // Stay as close to the original lightness as possible.
            if lighten {
                hi = mid;
            } else {
                lo = mid;
            }
        } else if lighten {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    best
}

#[inline]
fn wcag_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(approx_eq(relative_luminance(Color::BLACK), 0.0, 1e-12));
    }

    #[test]
    fn luminance_white_is_one() {
        assert!(approx_eq(relative_luminance(Color::WHITE), 1.0, 1e-12));
    }

    #[test]
    fn luminance_primaries() {
        assert!(approx_eq(relative_luminance(Color::rgb(1.0, 0.0, 0.0)), 0.2126, 1e-12));
        assert!(approx_eq(relative_luminance(Color::rgb(0.0, 1.0, 0.0)), 0.7152, 1e-12));
        assert!(approx_eq(relative_luminance(Color::rgb(0.0, 0.0, 1.0)), 0.0722, 1e-12));
    }

    #[test]
    fn luminance_mid_gray() {
        // sRGB 0.5 linearizes to ~0.214
        let lum = relative_luminance(Color::gray(0.5));
        assert!(approx_eq(lum, 0.214, 0.001), "Mid-gray luminance: {lum}");
    }

    #[test]
    fn luminance_clips_out_of_range_channels() {
        assert!(approx_eq(relative_luminance(Color::rgb(2.0, 2.0, 2.0)), 1.0, 1e-12));
        assert!(approx_eq(relative_luminance(Color::rgb(-1.0, 0.0, 0.0)), 0.0, 1e-12));
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = Color::hsl(180.0, 0.4, 0.5);
        assert!(approx_eq(contrast_ratio(c, c), 1.0, 1e-12));
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = Color::rgb(0.8, 0.2, 0.3);
        let b = Color::rgb(0.1, 0.1, 0.4);
        assert!(approx_eq(contrast_ratio(a, b), contrast_ratio(b, a), 1e-15));
    }

    // ── Lightness predicates ────────────────────────────────────────

    #[test]
    fn light_and_dark() {
        assert!(is_light(Color::WHITE));
        assert!(is_light(Color::rgb(1.0, 1.0, 0.0)));
        assert!(!is_light(Color::BLACK));
        assert!(!is_light(Color::rgb(0.0, 0.0, 1.0)));
    }

    #[test]
    fn readable_text_on_backgrounds() {
        assert_eq!(readable_text_color(Color::WHITE), Color::BLACK);
        assert_eq!(readable_text_color(Color::rgb(0.1, 0.1, 0.3)), Color::WHITE);
        assert_eq!(readable_text_color(Color::rgb(1.0, 1.0, 0.6)), Color::BLACK);
    }

    // ── ensure_contrast ─────────────────────────────────────────────

    #[test]
    fn ensure_contrast_already_good() {
        let fg = Color::rgb(0.9, 0.9, 0.2);
        assert_eq!(ensure_contrast(fg, Color::BLACK, 4.5), fg);
    }

    #[test]
    fn ensure_contrast_lightens_on_dark_background() {
        let fg = Color::hsl(270.0, 0.6, 0.25);
        let bg = Color::hsl(270.0, 0.1, 0.1);
        let adjusted = ensure_contrast(fg, bg, 5.5);
        assert!(contrast_ratio(adjusted, bg) >= 5.5);
        assert!(adjusted.to_hsl().l > fg.to_hsl().l, "Should have lightened");
        assert!(approx_eq(adjusted.to_hsl().h, fg.to_hsl().h, 1e-6), "Hue drifted");
    }

    #[test]
    fn ensure_contrast_darkens_on_light_background() {
        let fg = Color::hsl(90.0, 0.5, 0.8);
        let bg = Color::gray(0.97);
        let adjusted = ensure_contrast(fg, bg, 5.5);
        assert!(contrast_ratio(adjusted, bg) >= 5.5);
        assert!(adjusted.to_hsl().l < fg.to_hsl().l, "Should have darkened");
    }

    #[test]
    fn ensure_contrast_unreachable_returns_extreme() {
        let adjusted = ensure_contrast(Color::gray(0.5), Color::gray(0.5), 30.0);
        assert!(adjusted == Color::WHITE || adjusted == Color::BLACK, "got {adjusted:?}");
    }
}
