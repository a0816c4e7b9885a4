// SPDX-License-Identifier: MIT

//! One generation's ownership of the random stream.
//!
//! The palette and the pattern share a single stream, so the order they
//! draw in decides every output pixel. That order is fixed here and only
//! here: foreground, background, spot (each skipped when overridden),
//! then the pattern rows top to bottom.

use crate::error::Result;
use crate::palette::{Palette, PaletteOverrides};
use crate::pattern::Pattern;
use crate::rng::Xorshift128;
use crate::seed::Seed;

/// A single identicon generation in progress.
#[derive(Debug, Clone)]
pub struct Session {
    rng: Xorshift128,
}

impl Session {
    #[must_use]
    pub const fn new(seed: Seed) -> Self {
        Self {
            rng: Xorshift128::new(seed),
        }
    }

    /// Draw the palette, then a `size × size` pattern.
    ///
    /// # Errors
    ///
    /// Returns [`IdenticonError::AllocationFailure`](crate::IdenticonError::AllocationFailure)
    /// if the pattern grid cannot be allocated.
    pub fn draw(
        mut self,
        size: usize,
        overrides: &PaletteOverrides,
    ) -> Result<(Palette, Pattern)> {
        let palette = Palette::draw(&mut self.rng, overrides);
        let pattern = Pattern::generate(&mut self.rng, size)?;
        Ok((palette, pattern))
    }
}
