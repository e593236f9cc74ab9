//! signwrite - bitmap text renderer for a 128x64 monochrome sign
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Message text                            │
//! ├──────────────────────────────────────────┤
//! │  Emoji substitution (:token: -> PUA)     │
//! │             ↓                            │
//! │  Glyph loading (one bitmap/codepoint)    │
//! │             ↓                            │
//! │  Line breaking (wrap / no-wrap)          │
//! │             ↓                            │
//! │  Composition onto 128x64 canvas          │
//! │             ↓                            │
//! │  1bpp frame (.bin) or image file         │
//! └──────────────────────────────────────────┘
//! ```

mod config;
mod constants;
mod font;
mod layout;
mod render;

use anyhow::{anyhow, bail, Result};
use log::{debug, info};
use std::path::Path;

use config::Config;
use font::GlyphStore;

/// Everything one render invocation needs
struct RenderJob {
    message: String,
    output: String,
    font_dir: String,
    width: u32,
    height: u32,
    wrap: bool,
    center: bool,
    invert: bool,
}

/// Run the full pipeline: substitute, load, break, composite, write
fn render(job: &RenderJob) -> Result<()> {
    let mut store = GlyphStore::open(&job.font_dir)?;

    let text = font::substitute(&job.message, &mut store)?;
    store.ensure_text(&text)?;
    debug!("{} glyphs loaded", store.len());

    let lines = layout::layout_text(&store, &text, job.width, job.wrap);
    info!(
        "Laid out {} line(s) for {} codepoint(s)",
        lines.len(),
        text.chars().count()
    );

    let canvas = render::composite(&store, &lines, job.width, job.height, job.center);
    render::output::write_frame(&canvas, Path::new(&job.output), job.invert)
}

fn print_help() {
    println!(
        r#"signwrite {} - bitmap text renderer for a 128x64 monochrome sign display

USAGE:
    signwrite [OPTIONS] MESSAGE

OPTIONS:
    -h, --help          Print this help message
    -V, --version       Print version information
    -o, --output PATH   Destination file (default: /sign/frame.bin)
                        .bin writes the raw display frame, any other
                        extension writes a normal image file
    --font-dir PATH     Glyph directory (default: /sign/font)
    -c, --center        Center each line horizontally
    -n, --no-wrap       Break on newlines only, never word-wrap
    -i, --invert        Invert the frame (inverted-panel convention)

EMOJI:
    :name: in MESSAGE is replaced with the glyph name.png from the
    font directory when it exists, and kept literal otherwise.

EXAMPLES:
    signwrite "Hello World"                   Render to /sign/frame.bin
    signwrite -c "Back in 5 min"              Centered
    signwrite -o preview.png "I :heart: you"  Preview as PNG
    signwrite -n "line one
line two"                                     Explicit line breaks only

CONFIG FILE:
    ~/.config/signwrite/config.toml (or SIGNWRITE_CONFIG)
"#,
        env!("CARGO_PKG_VERSION")
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("signwrite {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = Config::load();

    let mut message: Option<String> = None;
    let mut output: Option<String> = None;
    let mut font_dir: Option<String> = None;
    let mut center = false;
    let mut no_wrap = false;
    let mut invert = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--center" | "-c" => center = true,
            "--no-wrap" | "-n" => no_wrap = true,
            "--invert" | "-i" => invert = true,
            "--output" | "-o" => {
                output = Some(
                    iter.next()
                        .ok_or_else(|| anyhow!("--output requires a path"))?
                        .clone(),
                );
            }
            "--font-dir" => {
                font_dir = Some(
                    iter.next()
                        .ok_or_else(|| anyhow!("--font-dir requires a path"))?
                        .clone(),
                );
            }
            other if other.starts_with('-') && other.len() > 1 => {
                bail!("Unknown option: {} (try --help)", other);
            }
            other => {
                if message.is_some() {
                    bail!("Unexpected extra argument: {}", other);
                }
                message = Some(other.to_string());
            }
        }
    }

    let job = RenderJob {
        message: message.ok_or_else(|| anyhow!("No message given (try --help)"))?,
        output: output.unwrap_or(config.output.path),
        font_dir: font_dir.unwrap_or(config.font.dir),
        width: config.display.width,
        height: config.display.height,
        wrap: !no_wrap,
        center,
        invert: invert || config.display.invert,
    };

    render(&job)
}
