// SPDX-License-Identifier: MIT

//! # tint-identicon — deterministic visual fingerprints
//!
//! Turns any byte sequence (or any serializable payload) into a small,
//! mirror-symmetric image whose colors and shape depend only on the input.
//! Equal inputs always produce identical pixels.
//!
//! # Architecture
//!
//! ```text
//! bytes / payload
//!     │
//!     ▼
//! seed.rs:    fold bytes into four 32-bit words
//!     │
//!     ▼
//! rng.rs:     xorshift stream over the seed words
//!     │
//!     ▼
//! session.rs: palette.rs draws fg, bg, spot
//!             pattern.rs draws the left half of each row, mirrors it
//!     │
//!     ▼
//! raster.rs:  paint cells as flat blocks into a PixelBuffer
//! ```
//!
//! # Example
//!
//! ```
//! use tint_identicon::{IdenticonOptions, generate_identicon};
//!
//! let options = IdenticonOptions::default().with_size(5).with_scale(4);
//! let identicon = generate_identicon(b"hello", &options).unwrap();
//! assert_eq!(identicon.pixels.width(), 20);
//! assert!(identicon.pattern.is_mirror_symmetric());
//! ```
//!
//! Generation is synchronous and owns all of its state, so any number of
//! threads can generate identicons at once.

pub mod error;
pub mod options;
pub mod palette;
pub mod pattern;
pub mod raster;
pub mod rng;
pub mod seed;
pub mod session;

use serde::Serialize;
use tint_color::Color;
use tracing::{debug, trace};

pub use error::{IdenticonError, Result};
pub use options::{IdenticonOptions, Role, parse_override, parse_overrides};
pub use palette::{Palette, PaletteOverrides};
pub use pattern::{Cell, Pattern};
pub use raster::{PixelBuffer, paint, rasterize};
pub use rng::Xorshift128;
pub use seed::{Seed, encode_payload};
pub use session::Session;

/// Every stage of one generated identicon.
#[derive(Debug, Clone, PartialEq)]
pub struct Identicon {
    pub seed: Seed,
    pub palette: Palette,
    pub pattern: Pattern,
    pub pixels: PixelBuffer,
}

impl Identicon {
    /// Row-major RGBA bytes of the rendered canvas.
    #[must_use]
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.to_rgba8()
    }
}

/// Generate the identicon for raw bytes.
///
/// # Errors
///
/// Returns [`IdenticonError::InvalidDimensions`] if any dimension in
/// `options` is 0 or the canvas side overflows, and
/// [`IdenticonError::AllocationFailure`] if the canvas or the cell grid
/// cannot be allocated.
pub fn generate_identicon(bytes: &[u8], options: &IdenticonOptions) -> Result<Identicon> {
    let side = options.canvas_side()?;
    let size = options.grid_size()?;
    let cell_px = options.cell_pixels()?;

    let seed = Seed::from_bytes(bytes);
    debug!(input_len = bytes.len(), ?seed, size, side, "generating identicon");

    // Reserve the canvas first so an oversized request fails before any draw.
    let mut pixels = PixelBuffer::filled(side, Color::TRANSPARENT)?;
    let (palette, pattern) = Session::new(seed).draw(size, &options.colors)?;
    trace!(
        foreground = %palette.foreground,
        background = %palette.background,
        spot = %palette.spot,
        "palette drawn"
    );

    paint(&mut pixels, &pattern, &palette, cell_px);
    debug!(width = pixels.width(), height = pixels.height(), "canvas rasterized");

    Ok(Identicon {
        seed,
        palette,
        pattern,
        pixels,
    })
}

/// Generate the identicon for a serializable payload, encoded with
/// [`encode_payload`].
///
/// # Errors
///
/// Returns [`IdenticonError::Encode`] if the payload cannot be encoded,
/// otherwise as [`generate_identicon`].
pub fn generate_identicon_for<T: Serialize + ?Sized>(
    payload: &T,
    options: &IdenticonOptions,
) -> Result<Identicon> {
    let bytes = encode_payload(payload)?;
    generate_identicon(&bytes, options)
}
