// SPDX-License-Identifier: MIT
//
// The portable color value and its integer / hex encodings.
//
// Storage is straight RGBA in f64, each channel conceptually in [0, 1].
// Nothing is clamped on construction: intermediate math (mixing, Lab
// reconstruction) may briefly leave the unit range, and clipping at the
// boundary keeps that decision in one place. The encoders below
// (`to_hex`, `to_rgb_u32`, `to_rgba8`, ...) all clip before quantizing.

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};

// ─── Color ───────────────────────────────────────────────────────────────────

/// A color stored as red, green, blue and alpha channels.
///
/// Conversions to the cylindrical and device-independent spaces live in
/// [`space`](crate::space); perceptual adjustments in
/// [`adjust`](crate::adjust); interpolation in [`mix`](crate::mix).
///
/// # Examples
///
/// ```
/// use tint_color::Color;
///
/// let orange = Color::from_hex("#ff8000").unwrap();
/// assert_eq!(orange.to_hex(), "#ff8000");
/// assert_eq!(orange.to_rgb_u32(), 0x00ff_8000);
///
/// // Unparseable input falls back to black on the lenient path only.
/// assert_eq!(Color::from_hex_lenient("not a color"), Color::BLACK);
/// assert!(Color::from_hex("not a color").is_err());
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Red, 0.0 to 1.0.
    pub r: f64,
    /// Green, 0.0 to 1.0.
    pub g: f64,
    /// Blue, 0.0 to 1.0.
    pub b: f64,
    /// Alpha (opacity): 0.0 (fully transparent) to 1.0 (fully opaque).
    pub a: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from RGB channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGB channels with alpha.
    #[inline]
    #[must_use]
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(from_u8(r), from_u8(g), from_u8(b))
    }

    /// Create a color from 8-bit channels with alpha.
    #[must_use]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(from_u8(r), from_u8(g), from_u8(b), from_u8(a))
    }

    /// An opaque gray with all three channels set to `level`.
    #[inline]
    #[must_use]
    pub const fn gray(level: f64) -> Self {
        Self::rgb(level, level, level)
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    // ─── Packed Integers ─────────────────────────────────────────────────

    /// Create an opaque color from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are ignored.
    #[must_use]
    pub fn from_rgb_u32(packed: u32) -> Self {
        let [_, r, g, b] = packed.to_be_bytes();
        Self::rgb8(r, g, b)
    }

    /// Create a color from a packed `0xRRGGBBAA` value.
    #[must_use]
    pub fn from_rgba_u32(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_be_bytes();
        Self::rgba8(r, g, b, a)
    }

    /// Pack as `0xRRGGBB` (alpha discarded, channels clipped).
    #[must_use]
    pub fn to_rgb_u32(self) -> u32 {
        let [r, g, b, _] = self.to_rgba8();
        u32::from_be_bytes([0, r, g, b])
    }

    /// Pack as `0xRRGGBBAA` (channels clipped).
    #[must_use]
    pub fn to_rgba_u32(self) -> u32 {
        u32::from_be_bytes(self.to_rgba8())
    }

    /// Pack as `0xAABBGGRR`, the little-endian RGBA byte order many pixel
    /// APIs expect when reading a `u32` per pixel.
    #[must_use]
    pub fn to_abgr_u32(self) -> u32 {
        u32::from_le_bytes(self.to_rgba8())
    }

    /// Quantize to 8-bit RGBA, clipping each channel first.
    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }

    // ─── Hex ─────────────────────────────────────────────────────────────

    /// Parse a hex color string, failing loudly on malformed input.
    ///
    /// Accepts `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`, with or without
    /// the `#`, in either case. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHexString`] if the string has the wrong
    /// length or contains a non-hex digit.
    pub fn from_hex(s: &str) -> Result<Self> {
        parse_hex(s).ok_or_else(|| ColorError::InvalidHexString(s.to_owned()))
    }

    /// Parse a hex color string, returning opaque black on any failure.
    ///
    /// This is the implicit-construction path used where a bad literal
    /// should degrade visibly instead of aborting (e.g. user themes).
    #[must_use]
    pub fn from_hex_lenient(s: &str) -> Self {
        parse_hex(s).unwrap_or(Self::BLACK)
    }

    /// Format as lowercase `#rrggbb` (alpha discarded, channels clipped).
    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Format as lowercase `#rrggbbaa` (channels clipped).
    #[must_use]
    pub fn to_hex_alpha(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with the given alpha value.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Whether this color is fully opaque (alpha >= 1.0).
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Whether this color is fully transparent (alpha <= 0.0).
    #[inline]
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    /// Clip every channel, alpha included, into [0, 1].
    #[must_use]
    pub const fn clipped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Largest and smallest of the three color channels.
    #[inline]
    pub(crate) fn max_min(self) -> (f64, f64) {
        (
            self.r.max(self.g).max(self.b),
            self.r.min(self.g).min(self.b),
        )
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "Color::rgb({:.4}, {:.4}, {:.4})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "Color::rgba({:.4}, {:.4}, {:.4}, {:.4})",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl fmt::Display for Color {
    /// `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            f.write_str(&self.to_hex())
        } else {
            f.write_str(&self.to_hex_alpha())
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f64 = 1e-9;
        (self.r - other.r).abs() < EPS
            && (self.g - other.g).abs() < EPS
            && (self.b - other.b).abs() < EPS
            && (self.a - other.a).abs() < EPS
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s).as_bytes();

    match s.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(s[0])?;
            let g = parse_hex_digit(s[1])?;
            let b = parse_hex_digit(s[2])?;
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RGBA
        4 => {
            let r = parse_hex_digit(s[0])?;
            let g = parse_hex_digit(s[1])?;
            let b = parse_hex_digit(s[2])?;
            let a = parse_hex_digit(s[3])?;
            Some(Color::rgba8(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&s[0..2])?;
            let g = parse_hex_byte(&s[2..4])?;
            let b = parse_hex_byte(&s[4..6])?;
            Some(Color::rgb8(r, g, b))
        }
        // #RRGGBBAA
        8 => {
            let r = parse_hex_byte(&s[0..2])?;
            let g = parse_hex_byte(&s[2..4])?;
            let b = parse_hex_byte(&s[4..6])?;
            let a = parse_hex_byte(&s[6..8])?;
            Some(Color::rgba8(r, g, b, a))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

#[inline]
fn from_u8(v: u8) -> f64 {
    f64::from(v) / 255.0
}

/// Convert a channel to 0–255 with round-half-up, clipping first.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.clamp(0.0, 1.0).mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = Color::from_hex("#ff8000").unwrap();
        assert_eq!(color.to_rgba8(), [255, 128, 0, 255]);
        assert!(color.is_opaque());
    }

    #[test]
    fn hex_parsing_short() {
        let color = Color::from_hex("#f80").unwrap();
        assert_eq!(color.to_rgba8(), [255, 136, 0, 255]);
    }

    #[test]
    fn hex_parsing_short_with_alpha() {
        let color = Color::from_hex("#f808").unwrap();
        assert_eq!(color.to_rgba8(), [255, 136, 0, 136]);
    }

    #[test]
    fn hex_parsing_with_alpha() {
        let color = Color::from_hex("#ff000080").unwrap();
        assert!((color.a - 128.0 / 255.0).abs() < 1e-12);
        assert!(!color.is_opaque());
    }

    #[test]
    fn hex_parsing_no_hash_and_whitespace() {
        let color = Color::from_hex("  00FF00\n").unwrap();
        assert_eq!(color, Color::rgb(0.0, 1.0, 0.0));
    }

    #[test]
    fn hex_parsing_invalid_is_an_error() {
        for bad in ["xyz", "#12345", "", "#", "#gg0000", "#ff00ff00ff", "#ffé00"] {
            assert_eq!(
                Color::from_hex(bad),
                Err(ColorError::InvalidHexString(bad.to_owned())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn lenient_parsing_falls_back_to_black() {
        assert_eq!(Color::from_hex_lenient("#zzzzzz"), Color::BLACK);
        assert_eq!(Color::from_hex_lenient(""), Color::BLACK);
        assert_eq!(Color::from_hex_lenient("#fff"), Color::WHITE);
    }

    #[test]
    fn from_str_is_strict() {
        let parsed: Color = "#336699".parse().unwrap();
        assert_eq!(parsed.to_hex(), "#336699");
        assert!("#33669".parse::<Color>().is_err());
    }

    #[test]
    fn hex_roundtrip() {
        let original = "#c86432";
        assert_eq!(Color::from_hex(original).unwrap().to_hex(), original);
    }

    #[test]
    fn hex_alpha_roundtrip() {
        let original = "#c8643280";
        assert_eq!(Color::from_hex(original).unwrap().to_hex_alpha(), original);
    }

    #[test]
    fn hex_export_clips_out_of_range() {
        let wild = Color::rgba(1.7, -0.3, 0.5, 2.0);
        assert_eq!(wild.to_hex(), "#ff0080");
        assert_eq!(wild.to_hex_alpha(), "#ff0080ff");
    }

    // ── Packed Integers ──────────────────────────────────────────────────

    #[test]
    fn packed_rgb() {
        let color = Color::from_rgb_u32(0x0012_3456);
        assert_eq!(color.to_rgb_u32(), 0x0012_3456);
        assert_eq!(color.to_hex(), "#123456");
    }

    #[test]
    fn packed_rgb_ignores_high_byte() {
        assert_eq!(Color::from_rgb_u32(0xff12_3456), Color::from_rgb_u32(0x0012_3456));
    }

    #[test]
    fn packed_rgba_and_abgr() {
        let color = Color::from_rgba_u32(0x1122_3344);
        assert_eq!(color.to_rgba_u32(), 0x1122_3344);
        assert_eq!(color.to_abgr_u32(), 0x4433_2211);
    }

    // ── Alpha ────────────────────────────────────────────────────────────

    #[test]
    fn alpha_predicates() {
        assert!(Color::BLACK.is_opaque());
        assert!(Color::TRANSPARENT.is_transparent());
        let half = Color::WHITE.with_alpha(0.5);
        assert!(!half.is_opaque() && !half.is_transparent());
    }

    #[test]
    fn clipped_bounds_every_channel() {
        let c = Color::rgba(-1.0, 0.5, 3.0, -0.2).clipped();
        assert_eq!(c, Color::rgba(0.0, 0.5, 1.0, 0.0));
    }

    // ── Display / Debug ──────────────────────────────────────────────────

    #[test]
    fn display_is_hex() {
        assert_eq!(format!("{}", Color::rgb(1.0, 0.0, 0.0)), "#ff0000");
        assert_eq!(format!("{}", Color::rgba(1.0, 0.0, 0.0, 0.0)), "#ff000000");
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Color::gray(0.5)), "Color::rgb(0.5000, 0.5000, 0.5000)");
        assert!(format!("{:?}", Color::TRANSPARENT).starts_with("Color::rgba("));
    }

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
    }
}
