// SPDX-License-Identifier: MIT

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IdenticonError>;

#[derive(Debug, Error)]
pub enum IdenticonError {
    /// A grid side, cell scale or magnification was zero, or their product
    /// overflows the addressable canvas size.
    #[error(
        "invalid identicon dimensions: size={size}, scale={scale}, scale_multiple={scale_multiple}"
    )]
    InvalidDimensions {
        size: u32,
        scale: u32,
        scale_multiple: u32,
    },

    /// The output canvas could not be allocated.
    #[error("could not allocate a {side}x{side} pixel canvas")]
    AllocationFailure { side: usize },

    /// A payload could not be encoded into seed bytes.
    #[error("payload encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// A palette override directive was not of the form `role=#hex`.
    #[error("invalid color override {0:?} (expected fg=, bg= or spot= followed by a hex color)")]
    InvalidOverride(String),

    /// A color override could not be parsed.
    #[error("color error: {0}")]
    Color(#[from] tint_color::ColorError),
}
