// SPDX-License-Identifier: MIT
//
// PixelBuffer — the square RGBA canvas an identicon is painted onto.
//
// Design:
//
//   - Flat `Vec<Color>` with row-major indexing: `index = y * side + x`.
//     Rows are contiguous, so exporting RGBA bytes is a linear scan.
//
//   - Allocation is fallible. The pixel count is computed with checked
//     arithmetic and reserved with `try_reserve_exact`, so an oversized
//     request surfaces as `AllocationFailure` instead of aborting.
//
//   - Rasterizing is nearest-neighbor: each cell fills one flat
//     `cell_px × cell_px` block. No blending, no antialiasing.

use tint_color::Color;

use crate::error::{IdenticonError, Result};
use crate::palette::Palette;
use crate::pattern::Pattern;

// ─── PixelBuffer ────────────────────────────────────────────────────────────────

/// A `side × side` grid of colors.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    side: usize,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    // ─── Construction ────────────────────────────────────────────────────

    /// Allocate a canvas filled with `color`.
    ///
    /// # Errors
    ///
    /// Returns [`IdenticonError::AllocationFailure`] if `side × side`
    /// overflows or the pixels cannot be reserved.
    pub fn filled(side: usize, color: Color) -> Result<Self> {
        let failure = || IdenticonError::AllocationFailure { side };
        let count = side.checked_mul(side).ok_or_else(failure)?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(count).map_err(|_| failure())?;
        pixels.resize(count, color);

        Ok(Self { side, pixels })
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Canvas edge length in pixels.
    #[inline]
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.side
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.side
    }

    /// All pixels, row-major.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// The pixel at `(x, y)`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.side && y < self.side {
            Some(self.pixels[y * self.side + x])
        } else {
            None
        }
    }

    /// Iterate over pixel rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks_exact(self.side.max(1))
    }

    // ─── Painting ────────────────────────────────────────────────────────

    /// Fill the `w × h` block whose top-left corner is `(x, y)`.
    /// The block is clipped to the canvas.
    pub fn fill_block(&mut self, x: usize, y: usize, w: usize, h: usize, color: Color) {
        let x_end = x.saturating_add(w).min(self.side);
        let y_end = y.saturating_add(h).min(self.side);
        if x >= x_end {
            return;
        }
        for row in y..y_end {
            let start = row * self.side;
            self.pixels[start + x..start + x_end].fill(color);
        }
    }

    // ─── Export ──────────────────────────────────────────────────────────

    /// Row-major RGBA bytes, four per pixel, channels clipped to [0, 1].
    #[must_use]
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba8()).collect()
    }
}

// ─── Rasterizer ─────────────────────────────────────────────────────────────────

/// Paint `pattern` with `palette`, each cell as a `cell_px`-pixel square.
///
/// # Errors
///
/// Returns [`IdenticonError::AllocationFailure`] if the canvas cannot be
/// allocated.
pub fn rasterize(pattern: &Pattern, palette: &Palette, cell_px: usize) -> Result<PixelBuffer> {
    let side = pattern
        .size()
        .checked_mul(cell_px)
        .ok_or(IdenticonError::AllocationFailure {
            side: pattern.size().saturating_mul(cell_px),
        })?;

    let mut canvas = PixelBuffer::filled(side, palette.background)?;
    paint(&mut canvas, pattern, palette, cell_px);
    Ok(canvas)
}

/// Paint `pattern` onto an already allocated canvas.
///
/// The whole canvas is filled with the background first, then every cell
/// block is painted with its resolved color. Blocks past the canvas edge
/// are clipped.
pub fn paint(canvas: &mut PixelBuffer, pattern: &Pattern, palette: &Palette, cell_px: usize) {
    canvas.pixels.fill(palette.background);
    for (row, cells) in pattern.rows().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            canvas.fill_block(
                col * cell_px,
                row * cell_px,
                cell_px,
                cell_px,
                palette.resolve(cell),
            );
        }
    }
}
