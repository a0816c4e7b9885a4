// SPDX-License-Identifier: MIT
//
// tint — identicons and color tooling from the command line.
//
// This binary wires the two library crates to a terminal:
//
//   tint-identicon → `show`: message → identicon → half-block art
//   tint-color     → `color`, `mix`, `gradient`, `contrast`, `level`
//
// Output goes to stdout; diagnostics go to stderr through `tracing`, so
// piping the art somewhere never picks up log lines. Set `RUST_LOG=debug`
// to see the generation stages.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tint_color::contrast::{is_light, readable_text_color};
use tint_color::{
    Color, ColorSpace, Gradient, GrayscaleMode, LogLevel, contrast_ratio, relative_luminance,
};
use tint_identicon::options::ColorOverride;
use tint_identicon::{
    IdenticonOptions, PaletteOverrides, generate_identicon, generate_identicon_for,
};

mod render;
mod terminal;

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "tint")]
#[command(about = "Deterministic identicons and color-space tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the identicon for a message
    Show(ShowArgs),

    /// Print a color in every supported representation
    Color(ColorArgs),

    /// Mix two colors in a color space
    Mix(MixArgs),

    /// Sample evenly spaced colors along a gradient
    Gradient(GradientArgs),

    /// WCAG contrast ratio between two colors
    Contrast(ContrastArgs),

    /// Colors for a log level on a given background
    Level(LevelArgs),
}

#[derive(Args)]
struct ShowArgs {
    /// Text to fingerprint
    message: String,

    /// Grid side, in cells
    #[arg(long, default_value_t = tint_identicon::options::DEFAULT_SIZE)]
    size: u32,

    /// Cell edge, in pixels
    #[arg(long, default_value_t = 2)]
    scale: u32,

    /// Extra magnification on top of --scale
    #[arg(long, default_value_t = 1)]
    scale_multiple: u32,

    /// Fixed foreground color
    #[arg(long)]
    fg: Option<Color>,

    /// Fixed background color
    #[arg(long)]
    bg: Option<Color>,

    /// Fixed spot color
    #[arg(long)]
    spot: Option<Color>,

    /// Palette override directive such as `spot=#ff0` (repeatable)
    #[arg(short = 'c', long = "color", value_parser = tint_identicon::parse_override)]
    colors: Vec<ColorOverride>,

    /// Hash the message as a JSON string instead of raw UTF-8 bytes
    #[arg(long)]
    json: bool,

    /// Draw the cell grid as text even on a terminal
    #[arg(long)]
    plain: bool,

    /// Also print the palette
    #[arg(long)]
    palette: bool,
}

#[derive(Args)]
struct ColorArgs {
    /// Hex color (#rgb, #rgba, #rrggbb or #rrggbbaa)
    color: Color,
}

#[derive(Args)]
struct MixArgs {
    a: Color,
    b: Color,

    /// Share of the second color, 0 to 1
    #[arg(long, default_value_t = 0.5)]
    weight: f64,

    /// rgb, hsl, hsb or lab
    #[arg(long, default_value = "rgb", value_parser = ColorSpace::from_name)]
    space: ColorSpace,
}

#[derive(Args)]
struct GradientArgs {
    /// Two or more color stops
    #[arg(required = true, num_args = 2..)]
    stops: Vec<Color>,

    /// Number of samples, including both ends
    #[arg(long, default_value_t = 5)]
    steps: usize,

    /// rgb, hsl, hsb or lab
    #[arg(long, default_value = "lab", value_parser = ColorSpace::from_name)]
    space: ColorSpace,
}

#[derive(Args)]
struct ContrastArgs {
    a: Color,
    b: Color,
}

#[derive(Args)]
struct LevelArgs {
    /// undefined, debug, info, notice (default), error or fault
    #[arg(value_parser = LogLevel::from_name)]
    level: LogLevel,

    /// Background the row sits on
    #[arg(long, default_value = "#ffffff")]
    background: Color,
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.cmd {
        Commands::Show(args) => show(&mut out, &args),
        Commands::Color(args) => color(&mut out, &args),
        Commands::Mix(args) => mix(&mut out, &args),
        Commands::Gradient(args) => gradient(&mut out, &args),
        Commands::Contrast(args) => contrast(&mut out, &args),
        Commands::Level(args) => level(&mut out, &args),
    }?;
    out.flush().context("writing to stdout")
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn show(out: &mut impl Write, args: &ShowArgs) -> Result<()> {
    let mut colors = PaletteOverrides::default();
    for directive in &args.colors {
        colors.apply(*directive);
    }
    // Dedicated flags win over directives.
    colors.foreground = args.fg.or(colors.foreground);
    colors.background = args.bg.or(colors.background);
    colors.spot = args.spot.or(colors.spot);

    let options = IdenticonOptions::default()
        .with_size(args.size)
        .with_scale(args.scale)
        .with_scale_multiple(args.scale_multiple)
        .with_colors(colors);

    let identicon = if args.json {
        generate_identicon_for(args.message.as_str(), &options)
    } else {
        generate_identicon(args.message.as_bytes(), &options)
    }
    .with_context(|| format!("generating identicon for {:?}", args.message))?;

    let styled = terminal::use_color(args.plain);
    debug!(styled, "rendering identicon");
    if styled {
        render::half_blocks(out, &identicon.pixels)?;
    } else {
        render::plain(out, &identicon.pattern)?;
    }

    if args.palette {
        let palette = identicon.palette;
        for (name, color) in [
            ("foreground", palette.foreground),
            ("background", palette.background),
            ("spot", palette.spot),
        ] {
            render::swatch(out, color, styled)?;
            writeln!(out, "{name:<11}{color}")?;
        }
    }
    Ok(())
}

fn color(out: &mut impl Write, args: &ColorArgs) -> Result<()> {
    let c = args.color;
    let styled = terminal::use_color(false);
    let hsl = c.to_hsl();
    let hsb = c.to_hsb();
    let xyz = c.to_xyz();
    let lab = c.to_lab();

    render::swatch(out, c, styled)?;
    writeln!(out, "{}", c.to_hex_alpha())?;
    writeln!(out, "rgb        {:.4} {:.4} {:.4} (alpha {:.4})", c.r, c.g, c.b, c.a)?;
    writeln!(out, "packed     0x{:06x} / rgba 0x{:08x}", c.to_rgb_u32(), c.to_rgba_u32())?;
    writeln!(
        out,
        "hsl        {:.1}° {:.1}% {:.1}%",
        hsl.h * 360.0,
        hsl.s * 100.0,
        hsl.l * 100.0
    )?;
    writeln!(
        out,
        "hsb        {:.1}° {:.1}% {:.1}%",
        hsb.h * 360.0,
        hsb.s * 100.0,
        hsb.b * 100.0
    )?;
    writeln!(out, "xyz        {:.3} {:.3} {:.3}", xyz.x, xyz.y, xyz.z)?;
    writeln!(out, "lab        {:.3} {:.3} {:.3}", lab.l, lab.a, lab.b)?;
    writeln!(out, "luminance  {:.4}", relative_luminance(c))?;
    writeln!(out, "light      {}", if is_light(c) { "yes" } else { "no" })?;
    writeln!(out, "text       {}", readable_text_color(c))?;
    for &mode in GrayscaleMode::all() {
        let gray = c.grayscale(mode);
        render::swatch(out, gray, styled)?;
        writeln!(out, "gray {:<10}{gray}", mode.name())?;
    }
    Ok(())
}

fn mix(out: &mut impl Write, args: &MixArgs) -> Result<()> {
    let mixed = args.a.mix(&args.b, args.weight, args.space);
    render::swatch(out, mixed, terminal::use_color(false))?;
    writeln!(out, "{mixed}")?;
    Ok(())
}

fn gradient(out: &mut impl Write, args: &GradientArgs) -> Result<()> {
    let styled = terminal::use_color(false);
    let gradient: Gradient = args.stops.iter().copied().collect();
    for sample in gradient.colors(args.steps, args.space) {
        render::swatch(out, sample, styled)?;
        writeln!(out, "{sample}")?;
    }
    Ok(())
}

fn contrast(out: &mut impl Write, args: &ContrastArgs) -> Result<()> {
    let ratio = contrast_ratio(args.a, args.b);
    let grade = |min: f64| if ratio >= min { "pass" } else { "fail" };
    writeln!(out, "{ratio:.2}:1")?;
    writeln!(out, "AA large   {}", grade(3.0))?;
    writeln!(out, "AA         {}", grade(4.5))?;
    writeln!(out, "AAA        {}", grade(7.0))?;
    Ok(())
}

fn level(out: &mut impl Write, args: &LevelArgs) -> Result<()> {
    let styled = terminal::use_color(false);
    let level = args.level;
    for (name, color) in [
        ("color", level.color()),
        ("row", level.row_tint(args.background)),
        ("text", level.text_color(args.background)),
    ] {
        render::swatch(out, color, styled)?;
        writeln!(out, "{:<7}{name:<6}{color}", level.name())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use tint_identicon::options::Role;

    fn run<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(std::iter::once("tint").chain(args.iter().copied()))
            .unwrap()
            .cmd
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_parses_overrides() {
        let Commands::Show(args) = parse(&["show", "hello", "--size", "5", "-c", "spot=#ff0"])
        else {
            panic!("expected show");
        };
        assert_eq!(args.size, 5);
        assert_eq!(args.colors.len(), 1);
        assert_eq!(args.colors[0].role, Role::Spot);
    }

    #[test]
    fn bad_colors_are_rejected() {
        assert!(Cli::try_parse_from(["tint", "color", "#zzz"]).is_err());
        assert!(Cli::try_parse_from(["tint", "show", "x", "-c", "rim=#fff"]).is_err());
        assert!(Cli::try_parse_from(["tint", "mix", "#000", "#fff", "--space", "cmyk"]).is_err());
        assert!(Cli::try_parse_from(["tint", "gradient", "#000"]).is_err());
    }

    #[test]
    fn show_plain_hello() {
        let Commands::Show(args) = parse(&["show", "hello", "--size", "5", "--plain"]) else {
            panic!("expected show");
        };
        assert_eq!(
            run(|w| show(w, &args)),
            ".#.#.\n.....\n.+#+.\n#...#\n..+..\n"
        );
    }

    #[test]
    fn show_flags_override_directives() {
        let Commands::Show(args) = parse(&[
            "show", "hello", "--plain", "--palette", "-c", "bg=#000", "--bg", "#fff",
        ]) else {
            panic!("expected show");
        };
        let output = run(|w| show(w, &args));
        assert!(output.contains("background #ffffff"), "{output}");
    }

    #[test]
    fn zero_size_fails_with_context() {
        let Commands::Show(args) = parse(&["show", "hello", "--size", "0", "--plain"]) else {
            panic!("expected show");
        };
        let mut buf = Vec::new();
        let err = show(&mut buf, &args).unwrap_err();
        assert!(format!("{err:#}").contains("invalid identicon dimensions"));
    }

    #[test]
    fn contrast_black_white() {
        let Commands::Contrast(args) = parse(&["contrast", "#000", "#fff"]) else {
            panic!("expected contrast");
        };
        assert_eq!(
            run(|w| contrast(w, &args)),
            "21.00:1\nAA large   pass\nAA         pass\nAAA        pass\n"
        );
    }

    #[test]
    fn mix_midpoint() {
        let Commands::Mix(args) = parse(&["mix", "#000000", "#ffffff"]) else {
            panic!("expected mix");
        };
        let output = run(|w| mix(w, &args));
        assert!(output.ends_with("#808080\n"), "{output}");
    }
}
