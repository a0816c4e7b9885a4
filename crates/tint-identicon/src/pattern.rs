// SPDX-License-Identifier: MIT

//! Pattern synthesis: a square grid of cell codes, mirrored left to right.
//!
//! Only the left `ceil(size / 2)` columns of each row are drawn from the
//! random stream. The remaining `size - ceil(size / 2)` columns repeat the
//! leading drawn cells in reverse, so column `j` always equals column
//! `size - 1 - j`. For odd sizes the middle column is drawn and not
//! repeated.

use crate::error::{IdenticonError, Result};
use crate::rng::Xorshift128;

/// Scale applied to a draw before flooring it to a cell code. Values in
/// [0, 1] map to 0, 1 or 2, with 2 only for draws at or above 2/2.3.
const CELL_SPREAD: f64 = 2.3;

/// What a grid cell is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Code 0.
    Background,
    /// Code 1.
    Foreground,
    /// Code 2.
    Spot,
    /// Any other code; painted opaque black.
    Other(u32),
}

impl Cell {
    #[must_use]
    pub const fn from_code(code: u32) -> Self {
        match code {
            0 => Self::Background,
            1 => Self::Foreground,
            2 => Self::Spot,
            other => Self::Other(other),
        }
    }

    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Background => 0,
            Self::Foreground => 1,
            Self::Spot => 2,
            Self::Other(code) => code,
        }
    }

    /// Map one draw to a cell.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_draw(draw: f64) -> Self {
        // Safe: draws are in [0, 1], so the floor is 0, 1 or 2.
        Self::from_code((draw * CELL_SPREAD).floor() as u32)
    }
}

/// A `size × size` grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    size: usize,
    cells: Vec<Cell>,
}

impl Pattern {
    /// Draw a mirrored pattern from `rng`, consuming `size * ceil(size / 2)`
    /// draws, row by row, left to right.
    ///
    /// The grid is reserved before the first draw, so a grid that cannot
    /// be allocated costs no draws.
    ///
    /// # Errors
    ///
    /// Returns [`IdenticonError::AllocationFailure`] if `size × size`
    /// overflows or the cells cannot be reserved.
    pub fn generate(rng: &mut Xorshift128, size: usize) -> Result<Self> {
        let failure = || IdenticonError::AllocationFailure { side: size };
        let count = size.checked_mul(size).ok_or_else(failure)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(count).map_err(|_| failure())?;

        let drawn = size.div_ceil(2);
        let mirrored = size - drawn;
        let mut row = Vec::with_capacity(drawn);

        for _ in 0..size {
            row.clear();
            row.extend((0..drawn).map(|_| Cell::from_draw(rng.draw())));
            cells.extend_from_slice(&row);
            cells.extend(row[..mirrored].iter().rev());
        }

        Ok(Self { size, cells })
    }

    /// Build a pattern from explicit cells.
    ///
    /// Returns `None` unless `cells.len() == size * size`.
    #[must_use]
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Option<Self> {
        (size.checked_mul(size) == Some(cells.len())).then_some(Self { size, cells })
    }

    /// Grid side, in cells.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at (`row`, `col`), or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks_exact(0) panics; an empty grid has no rows anyway.
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Whether every row reads the same left-to-right and right-to-left.
    #[must_use]
    pub fn is_mirror_symmetric(&self) -> bool {
        self.rows().all(|row| row.iter().eq(row.iter().rev()))
    }
}
