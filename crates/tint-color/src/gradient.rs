// SPDX-License-Identifier: MIT

//! Multi-stop gradients sampled in any [`ColorSpace`].
//!
//! Stops are spaced evenly over [0, 1]; a sample between two stops is a
//! [`Color::mix`] of that pair.

use crate::color::Color;
use crate::mix::ColorSpace;

/// An ordered list of evenly spaced color stops.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gradient {
    stops: Vec<Color>,
}

impl Gradient {
    #[must_use]
    pub const fn new(stops: Vec<Color>) -> Self {
        Self { stops }
    }

    /// The color stops, in order.
    #[must_use]
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// Sample the gradient at `t` (clipped to [0, 1]).
    ///
    /// An empty gradient is black; a single stop is constant.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn pick(&self, t: f64, space: ColorSpace) -> Color {
        match self.stops.as_slice() {
            [] => Color::BLACK,
            [only] => *only,
            stops => {
                let segments = stops.len() - 1;
                let pos = t.clamp(0.0, 1.0) * segments as f64;
                // Safe: pos is in [0, segments], so the floor fits in usize.
                let i = (pos.floor() as usize).min(segments - 1);
                stops[i].mix(&stops[i + 1], pos - i as f64, space)
            }
        }
    }

    /// `count` evenly spaced samples, including both ends.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn colors(&self, count: usize, space: ColorSpace) -> Vec<Color> {
        match count {
            0 => Vec::new(),
            1 => vec![self.pick(0.0, space)],
            _ => {
                let last = (count - 1) as f64;
                (0..count).map(|i| self.pick(i as f64 / last, space)).collect()
            }
        }
    }
}

impl FromIterator<Color> for Gradient {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
