// SPDX-License-Identifier: MIT
//
// Terminal rendering of identicons and color swatches.
//
// Color output packs two pixel rows into one terminal row: each column is
// an upper half block (▀) with the top pixel as foreground and the bottom
// pixel as background, both as 24-bit SGR colors. An odd last row leaves
// the bottom half on the terminal's default background.
//
// Plain output draws the cell grid instead of pixels, one character per
// cell, for pipes, logs and terminals without truecolor.
//
// Everything writes to any `impl Write` and returns `io::Result`.

use std::io::{self, Write};

use tint_color::Color;
use tint_identicon::{Cell, Pattern, PixelBuffer};

const UPPER_HALF: &str = "\u{2580}";

// ─── SGR ─────────────────────────────────────────────────────────────────────

/// Set a 24-bit foreground color. Channels are clipped; alpha is ignored.
pub fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let [r, g, b, _] = color.to_rgba8();
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Set a 24-bit background color. Channels are clipped; alpha is ignored.
pub fn bg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let [r, g, b, _] = color.to_rgba8();
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

/// Reset all SGR attributes.
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Identicons ──────────────────────────────────────────────────────────────

/// Draw a canvas with half blocks, two pixel rows per line.
pub fn half_blocks(w: &mut impl Write, canvas: &PixelBuffer) -> io::Result<()> {
    let rows: Vec<&[Color]> = canvas.rows().collect();
    for pair in rows.chunks(2) {
        match pair {
            [top, bottom] => {
                for (&upper, &lower) in top.iter().zip(bottom.iter()) {
                    fg(w, upper)?;
                    bg(w, lower)?;
                    w.write_all(UPPER_HALF.as_bytes())?;
                }
            }
            [top] => {
                w.write_all(b"\x1b[49m")?;
                for &upper in *top {
                    fg(w, upper)?;
                    w.write_all(UPPER_HALF.as_bytes())?;
                }
            }
            _ => {}
        }
        reset(w)?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

/// Plain-text glyph for a cell.
const fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Background => '.',
        Cell::Foreground => '#',
        Cell::Spot => '+',
        Cell::Other(_) => '?',
    }
}

/// Draw the cell grid as text: `#` foreground, `+` spot, `.` background.
pub fn plain(w: &mut impl Write, pattern: &Pattern) -> io::Result<()> {
    for row in pattern.rows() {
        let line: String = row.iter().map(|&cell| glyph(cell)).collect();
        writeln!(w, "{line}")?;
    }
    Ok(())
}

// ─── Swatches ────────────────────────────────────────────────────────────────

/// A short colored bar, or nothing when color output is off.
pub fn swatch(w: &mut impl Write, color: Color, enabled: bool) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }
    bg(w, color)?;
    w.write_all(b"    ")?;
    reset(w)?;
    w.write_all(b" ")
}
