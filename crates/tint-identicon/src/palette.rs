// SPDX-License-Identifier: MIT

//! Palette selection: three colors drawn from the identicon stream.
//!
//! Each unset role costs six draws, in this order: hue, saturation, then
//! four lightness samples. Averaging four uniform samples pulls lightness
//! toward the middle, so near-black and near-white identicons are rare.

use tint_color::Color;

use crate::pattern::Cell;
use crate::rng::Xorshift128;

/// Color for cell codes outside {0, 1, 2}.
pub const FALLBACK: Color = Color::BLACK;

// ---------------------------------------------------------------------------
// PaletteOverrides
// ---------------------------------------------------------------------------

/// Caller-fixed palette roles. A set role skips its six draws; pattern
/// draws are never skipped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaletteOverrides {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub spot: Option<Color>,
}

impl PaletteOverrides {
    #[must_use]
    pub const fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    #[must_use]
    pub const fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub const fn with_spot(mut self, color: Color) -> Self {
        self.spot = Some(color);
        self
    }

    /// Whether no role is overridden.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && self.spot.is_none()
    }

    /// How many draws [`Palette::draw`] will consume with these overrides.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        [self.foreground, self.background, self.spot]
            .iter()
            .filter(|role| role.is_none())
            .count()
            * DRAWS_PER_COLOR
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

const DRAWS_PER_COLOR: usize = 6;

/// The resolved colors of one identicon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
    pub spot: Color,
}

impl Palette {
    /// Draw foreground, background and spot in that order, taking any
    /// overridden role as given.
    #[must_use]
    pub fn draw(rng: &mut Xorshift128, overrides: &PaletteOverrides) -> Self {
        let mut role = |fixed: Option<Color>| fixed.unwrap_or_else(|| random_color(rng));
        let foreground = role(overrides.foreground);
        let background = role(overrides.background);
        let spot = role(overrides.spot);
        Self {
            foreground,
            background,
            spot,
        }
    }

    /// The color a cell is painted with.
    #[must_use]
    pub const fn resolve(&self, cell: Cell) -> Color {
        match cell {
            Cell::Background => self.background,
            Cell::Foreground => self.foreground,
            Cell::Spot => self.spot,
            Cell::Other(_) => FALLBACK,
        }
    }
}

/// Draw one opaque color: hue over the full circle, saturation in
/// [0.4, 1.0], lightness from the mean of four draws.
pub fn random_color(rng: &mut Xorshift128) -> Color {
    let hue = rng.draw() * 360.0;
    let saturation = rng.draw().mul_add(60.0, 40.0) / 100.0;
    let lightness = (rng.draw() + rng.draw() + rng.draw() + rng.draw()) * 25.0 / 100.0;
    Color::hsl(hue, saturation, lightness)
}
