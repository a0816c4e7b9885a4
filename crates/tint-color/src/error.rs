// SPDX-License-Identifier: MIT

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The strict hex parser rejected its input.
    #[error("invalid hex color string: {0:?}")]
    InvalidHexString(String),

    /// A named enum (color space, grayscale mode, log level) did not
    /// recognize the given name.
    #[error("unknown {kind}: {name:?}")]
    UnknownName {
        kind: &'static str,
        name: String,
    },
}

impl ColorError {
    pub(crate) fn unknown(kind: &'static str, name: &str) -> Self {
        Self::UnknownName {
            kind,
            name: name.to_owned(),
        }
    }
}
