// SPDX-License-Identifier: MIT
//
// tint-color — the color model behind tint's identicons and row tints.
//
// One portable value type, `Color`, stored as straight (non-premultiplied)
// RGBA in f64. Every other representation is a conversion away:
//
//   Color (RGBA) ↔ HSL / HSB              (cylindrical, hue in [0, 1))
//   Color (RGBA) ↔ linear sRGB ↔ XYZ ↔ Lab (device-independent, D65)
//   Color (RGBA) ↔ #rrggbb / #rrggbbaa / packed u32
//
// Channels are not clamped on construction. Operations that must stay in
// range (hex export, packed export, pixel output) clip explicitly; the
// cylindrical constructors clip their inputs. No function here fails on
// numeric input; the only fallible entry points are the parsers.

// Single-character variable names (r, g, b, h, s, l, a) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod adjust;
pub mod color;
pub mod contrast;
pub mod error;
pub mod gradient;
pub mod level;
pub mod mix;
pub mod space;

pub use adjust::GrayscaleMode;
pub use color::Color;
pub use contrast::{contrast_ratio, relative_luminance};
pub use error::{ColorError, Result};
pub use gradient::Gradient;
pub use level::LogLevel;
pub use mix::{ColorSpace, mix};
pub use space::{Hsb, Hsl, Lab, Xyz};
