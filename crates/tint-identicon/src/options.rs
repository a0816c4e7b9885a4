// SPDX-License-Identifier: MIT

//! Identicon options and palette override directives.
//!
//! [`IdenticonOptions`] is the whole configuration surface of the
//! generator. Front ends that take colors as text (the CLI, a settings
//! field) hand each `role=color` directive to [`parse_override`].
//!
//! # Directive syntax
//!
//! | Directive         | Effect                          |
//! |-------------------|---------------------------------|
//! | `fg=#rrggbb`      | Fix the foreground color        |
//! | `bg=#rrggbb`      | Fix the background color        |
//! | `spot=#rrggbb`    | Fix the spot color              |
//!
//! Roles also accept their full names (`foreground`, `background`). Colors
//! take any form [`Color::from_hex`] accepts.

use tint_color::Color;

use crate::error::{IdenticonError, Result};
use crate::palette::PaletteOverrides;

/// Default grid side, in cells.
pub const DEFAULT_SIZE: u32 = 8;

/// Default cell edge, in pixels.
pub const DEFAULT_SCALE: u32 = 8;

// ---------------------------------------------------------------------------
// IdenticonOptions
// ---------------------------------------------------------------------------

/// How an identicon is laid out and colored.
///
/// The canvas side is `size * scale * scale_multiple` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdenticonOptions {
    /// Grid side, in cells.
    pub size: u32,
    /// Cell edge, in pixels.
    pub scale: u32,
    /// Extra magnification applied on top of `scale` (e.g. a display's
    /// backing scale factor).
    pub scale_multiple: u32,
    pub colors: PaletteOverrides,
}

impl Default for IdenticonOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            scale: DEFAULT_SCALE,
            scale_multiple: 1,
            colors: PaletteOverrides::default(),
        }
    }
}

impl IdenticonOptions {
    #[must_use]
    pub const fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub const fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub const fn with_scale_multiple(mut self, scale_multiple: u32) -> Self {
        self.scale_multiple = scale_multiple;
        self
    }

    #[must_use]
    pub const fn with_colors(mut self, colors: PaletteOverrides) -> Self {
        self.colors = colors;
        self
    }

    /// Check that every dimension is at least 1 and the canvas side fits
    /// in `usize`.
    ///
    /// # Errors
    ///
    /// Returns [`IdenticonError::InvalidDimensions`] otherwise.
    pub fn validate(&self) -> Result<()> {
        self.canvas_side().map(|_| ())
    }

    /// Grid side as an index type.
    ///
    /// # Errors
    ///
    /// Returns [`IdenticonError::InvalidDimensions`] if `size` is 0.
    pub fn grid_size(&self) -> Result<usize> {
        if self.size == 0 {
            return Err(self.invalid());
        }
        usize::try_from(self.size).map_err(|_| self.invalid())
    }

    /// Edge of one cell's block, `scale * scale_multiple`.
    ///
    /// # Errors
    ///
    /// Returns [`IdenticonError::InvalidDimensions`] if either factor is 0
    /// or the product overflows.
    pub fn cell_pixels(&self) -> Result<usize> {
        if self.scale == 0 || self.scale_multiple == 0 {
            return Err(self.invalid());
        }
        let scale = usize::try_from(self.scale).map_err(|_| self.invalid())?;
        let multiple = usize::try_from(self.scale_multiple).map_err(|_| self.invalid())?;
        scale.checked_mul(multiple).ok_or_else(|| self.invalid())
    }

    /// Canvas edge, `size * cell_pixels()`.
    ///
    /// # Errors
    ///
    /// Returns [`IdenticonError::InvalidDimensions`] if any dimension is 0
    /// or the product overflows.
    pub fn canvas_side(&self) -> Result<usize> {
        self.grid_size()?
            .checked_mul(self.cell_pixels()?)
            .ok_or_else(|| self.invalid())
    }

    const fn invalid(&self) -> IdenticonError {
        IdenticonError::InvalidDimensions {
            size: self.size,
            scale: self.scale,
            scale_multiple: self.scale_multiple,
        }
    }
}

// ---------------------------------------------------------------------------
// Override directives
// ---------------------------------------------------------------------------

/// A palette role that can be fixed by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Foreground,
    Background,
    Spot,
}

impl Role {
    /// Short name used in directives.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Foreground => "fg",
            Self::Background => "bg",
            Self::Spot => "spot",
        }
    }

    /// Parse a role from its short or full name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "fg" | "foreground" => Some(Self::Foreground),
            "bg" | "background" => Some(Self::Background),
            "spot" => Some(Self::Spot),
            _ => None,
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Foreground, Self::Background, Self::Spot]
    }
}

/// A parsed `role=color` directive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorOverride {
    pub role: Role,
    pub color: Color,
}

impl PaletteOverrides {
    /// Fix one role, replacing any earlier override of it.
    pub fn apply(&mut self, directive: ColorOverride) {
        let slot = match directive.role {
            Role::Foreground => &mut self.foreground,
            Role::Background => &mut self.background,
            Role::Spot => &mut self.spot,
        };
        *slot = Some(directive.color);
    }
}

/// Parse one `role=color` directive.
///
/// # Errors
///
/// Returns [`IdenticonError::InvalidOverride`] if there is no `=` or the
/// role is unknown, and [`IdenticonError::Color`] if the color does not
/// parse.
pub fn parse_override(directive: &str) -> Result<ColorOverride> {
    let invalid = || IdenticonError::InvalidOverride(directive.to_string());

    let (role, value) = directive.trim().split_once('=').ok_or_else(invalid)?;
    let role = Role::from_name(role.trim()).ok_or_else(invalid)?;
    let color = Color::from_hex(value)?;
    Ok(ColorOverride { role, color })
}

/// Parse a whitespace-separated list of directives into overrides.
/// Later directives win.
///
/// # Errors
///
/// Fails on the first directive [`parse_override`] rejects.
pub fn parse_overrides(directives: &str) -> Result<PaletteOverrides> {
    let mut overrides = PaletteOverrides::default();
    for directive in directives.split_whitespace() {
        overrides.apply(parse_override(directive)?);
    }
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let options = IdenticonOptions::default();
        assert_eq!(options.size, 8);
        assert_eq!(options.scale, 8);
        assert_eq!(options.scale_multiple, 1);
        assert!(options.colors.is_empty());
        assert_eq!(options.canvas_side().unwrap(), 64);
    }

    #[test]
    fn canvas_side_includes_multiple() {
        let options = IdenticonOptions::default()
            .with_size(5)
            .with_scale(4)
            .with_scale_multiple(2);
        assert_eq!(options.cell_pixels().unwrap(), 8);
        assert_eq!(options.canvas_side().unwrap(), 40);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        for options in [
            IdenticonOptions::default().with_size(0),
            IdenticonOptions::default().with_scale(0),
            IdenticonOptions::default().with_scale_multiple(0),
        ] {
            let err = options.validate().unwrap_err();
            assert!(
                matches!(err, IdenticonError::InvalidDimensions { .. }),
                "{options:?}: {err}"
            );
        }
    }

    #[test]
    fn error_names_the_dimensions() {
        let err = IdenticonOptions::default().with_scale(0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid identicon dimensions: size=8, scale=0, scale_multiple=1"
        );
    }

    #[test]
    fn parse_short_and_long_roles() {
        let fg = parse_override("fg=#ff0000").unwrap();
        assert_eq!(fg.role, Role::Foreground);
        assert_eq!(fg.color, Color::rgb(1.0, 0.0, 0.0));

        let bg = parse_override("Background=fff").unwrap();
        assert_eq!(bg.role, Role::Background);
        assert_eq!(bg.color, Color::WHITE);

        assert_eq!(parse_override(" spot=#00f ").unwrap().role, Role::Spot);
    }

    #[test]
    fn role_names_roundtrip() {
        for &role in Role::all() {
            assert_eq!(Role::from_name(role.name()), Some(role));
        }
    }

    #[test]
    fn parse_rejects_malformed_directives() {
        assert!(matches!(
            parse_override("fg"),
            Err(IdenticonError::InvalidOverride(_))
        ));
        assert!(matches!(
            parse_override("edge=#fff"),
            Err(IdenticonError::InvalidOverride(_))
        ));
        assert!(matches!(
            parse_override("fg=#ggg"),
            Err(IdenticonError::Color(_))
        ));
    }

    #[test]
    fn parse_list_later_wins() {
        let overrides = parse_overrides("fg=#000 bg=#fff fg=#f00").unwrap();
        assert_eq!(overrides.foreground, Some(Color::rgb(1.0, 0.0, 0.0)));
        assert_eq!(overrides.background, Some(Color::WHITE));
        assert_eq!(overrides.spot, None);

        assert!(parse_overrides("").unwrap().is_empty());
    }
}
