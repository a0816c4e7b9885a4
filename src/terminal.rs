// SPDX-License-Identifier: MIT
//
// Terminal queries for choosing between color and plain output.
//
// Safety: `isatty` is a plain POSIX query with no safe std equivalent that
// takes a raw descriptor. The unsafe block is a single call.
#![allow(unsafe_code)]

use std::env;

/// Whether stdout is connected to a terminal.
#[cfg(unix)]
#[must_use]
pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn stdout_is_tty() -> bool {
    false
}

/// Whether escape sequences should be written to stdout.
///
/// Off when stdout is not a terminal, when `NO_COLOR` is set to anything
/// non-empty, or when the caller forces plain output.
#[must_use]
pub fn use_color(force_plain: bool) -> bool {
    !force_plain && !no_color_requested(env::var_os("NO_COLOR").as_deref()) && stdout_is_tty()
}

fn no_color_requested(value: Option<&std::ffi::OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
