// SPDX-License-Identifier: MIT

//! Fixed semantic colors for log levels.
//!
//! The log list tints each row by its entry's level. Level colors are
//! fixed hues (like diagnostic colors in a theme); the row tint is a light
//! Lab mix of that color into whatever background the row sits on, so it
//! works on both light and dark backgrounds.

use crate::color::Color;
use crate::contrast::ensure_contrast;
use crate::error::{ColorError, Result};
use crate::mix::ColorSpace;

/// How strongly a level color bleeds into a row background.
const ROW_TINT_WEIGHT: f64 = 0.15;

/// Minimum contrast for level-colored text (WCAG AA for normal text).
const TEXT_MIN_CONTRAST: f64 = 4.5;

/// Severity of a log entry, least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Undefined,
    Debug,
    Info,
    Notice,
    Error,
    Fault,
}

impl LogLevel {
    /// Lowercase name, as accepted by [`from_name`](Self::from_name).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Error => "error",
            Self::Fault => "fault",
        }
    }

    /// Parse a level from its name (case-insensitive). `default` is an
    /// alias for `notice`, the level unannotated entries are logged at.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnknownName`] for anything else.
    pub fn from_name(name: &str) -> Result<Self> {
        let lower = name.to_lowercase();
        if lower == "default" {
            return Ok(Self::Notice);
        }
        Self::all()
            .iter()
            .find(|l| l.name() == lower)
            .copied()
            .ok_or_else(|| ColorError::unknown("log level", name))
    }

    /// All levels, least to most severe.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Undefined,
            Self::Debug,
            Self::Info,
            Self::Notice,
            Self::Error,
            Self::Fault,
        ]
    }

    /// The level's base color.
    #[must_use]
    pub fn color(self) -> Color {
        Color::from_rgb_u32(match self {
            Self::Undefined => 0x0063_6366,
            Self::Debug => 0x008e_8e93,
            Self::Info => 0x000a_84ff,
            Self::Notice => 0x0030_d158,
            Self::Error => 0x00ff_9f0a,
            Self::Fault => 0x00ff_453a,
        })
    }

    /// Background for a row at this level, given the list's background.
    #[must_use]
    pub fn row_tint(self, background: Color) -> Color {
        background.mix(&self.color(), ROW_TINT_WEIGHT, ColorSpace::Lab)
    }

    /// The level color, adjusted to stay readable as text on `background`.
    #[must_use]
    pub fn text_color(self, background: Color) -> Color {
        ensure_contrast(self.color(), background, TEXT_MIN_CONTRAST)
    }
}
